use gloo_net::http::{Method, Request, RequestBuilder, Response};
use grammar_quiz_engine::{
    resource::{Document, Reply, ResourceAccess},
    ResourceError,
};

/// Reads the data files from the site the app is served from.
#[derive(Clone, Copy, Default)]
pub struct HttpResources;

fn transport(path: &str, error: gloo_net::Error) -> ResourceError {
    ResourceError::Transport {
        path: path.to_string(),
        message: error.to_string(),
    }
}

fn reply(response: &Response) -> Reply {
    Reply {
        status: response.status(),
        content_type: response.headers().get("content-type"),
    }
}

impl ResourceAccess for HttpResources {
    async fn head(&self, path: &str) -> Result<Reply, ResourceError> {
        RequestBuilder::new(path)
            .method(Method::HEAD)
            .send()
            .await
            .map(|response| reply(&response))
            .map_err(|e| transport(path, e))
    }

    async fn get(&self, path: &str) -> Result<Document, ResourceError> {
        let response = Request::get(path)
            .send()
            .await
            .map_err(|e| transport(path, e))?;
        if !response.ok() {
            return Err(ResourceError::Status {
                path: path.to_string(),
                status: response.status(),
            });
        }
        let reply = reply(&response);
        let body = response.text().await.map_err(|e| transport(path, e))?;
        Ok(Document { reply, body })
    }
}
