use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
};

use crate::error::ResourceError;

pub const STATUS_OK: u16 = 200;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_METHOD_NOT_ALLOWED: u16 = 405;

const JSON: &str = "application/json";
const HTML: &str = "text/html";

/// Status line and media type of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: Option<String>,
}

impl Reply {
    pub fn new(status: u16, content_type: Option<&str>) -> Self {
        Self {
            status,
            content_type: content_type.map(str::to_string),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Single-page app hosts answer unknown paths with their `index.html`
    /// and a 200. For a data file that reply means "not there".
    pub fn is_fallback_page(&self, path: &str) -> bool {
        path.ends_with(".json")
            && self.content_type.as_deref().is_some_and(|content_type| {
                content_type
                    .split(';')
                    .next()
                    .is_some_and(|media| media.trim().eq_ignore_ascii_case(HTML))
            })
    }
}

/// A successfully fetched resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub reply: Reply,
    pub body: String,
}

/// Access to the static data files the quiz is built from.
///
/// The web front-end implements this over HTTP; tests use [`MemoryResources`].
#[allow(async_fn_in_trait)]
pub trait ResourceAccess {
    /// Lightweight existence probe (an HTTP `HEAD`).
    async fn head(&self, path: &str) -> Result<Reply, ResourceError>;

    /// Fetch the whole resource. A non-success status is an error.
    async fn get(&self, path: &str) -> Result<Document, ResourceError>;
}

fn not_found(path: &str) -> ResourceError {
    ResourceError::Status {
        path: path.to_string(),
        status: STATUS_NOT_FOUND,
    }
}

/// Fetch the body of `path`, treating a host's fallback page as a 404.
pub async fn fetch<R: ResourceAccess>(resources: &R, path: &str) -> Result<String, ResourceError> {
    let document = resources.get(path).await?;
    if document.reply.is_fallback_page(path) {
        return Err(not_found(path));
    }
    Ok(document.body)
}

/// Does `path` exist?
///
/// `Ok(false)` means the origin answered and the file is absent, `Err` means
/// the origin could not be reached at all.
pub async fn exists<R: ResourceAccess>(resources: &R, path: &str) -> Result<bool, ResourceError> {
    let reply = resources.head(path).await?;
    match reply.status {
        _ if reply.is_success() => Ok(!reply.is_fallback_page(path)),
        STATUS_NOT_FOUND => Ok(false),
        // some static hosts refuse HEAD, ask for the real thing
        STATUS_METHOD_NOT_ALLOWED => match fetch(resources, path).await {
            Ok(_) => Ok(true),
            Err(ResourceError::Status { .. }) => Ok(false),
            Err(e) => Err(e),
        },
        _ => Ok(false),
    }
}

/// Where the data files live relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    pub root: String,
}

impl Default for DataLayout {
    fn default() -> Self {
        Self {
            root: "/data".to_string(),
        }
    }
}

impl DataLayout {
    pub fn config_path(&self, topic: &str, level: &str) -> String {
        format!("{}/{topic}/{level}/config.json", self.root)
    }

    pub fn set_path(&self, topic: &str, level: &str, set: u32) -> String {
        format!("{}/{topic}/{level}/set{set}.json", self.root)
    }
}

/// In-memory file tree, mostly useful to exercise the discovery and loading
/// logic without a network.
#[derive(Debug, Default)]
pub struct MemoryResources {
    files: HashMap<String, String>,
    /// behave like a host that answers `405` to `HEAD`
    head_not_allowed: bool,
    /// serve an HTML page with a 200 for unknown paths
    index_fallback: bool,
    head_statuses: HashMap<String, u16>,
    unreachable: HashSet<String>,
    requests: RefCell<Vec<String>>,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    pub fn with_unreachable(mut self, path: impl Into<String>) -> Self {
        self.unreachable.insert(path.into());
        self
    }

    pub fn without_head(mut self) -> Self {
        self.head_not_allowed = true;
        self
    }

    /// Behave like a single-page app host: unknown paths get `index.html`.
    pub fn with_index_fallback(mut self) -> Self {
        self.index_fallback = true;
        self
    }

    /// Answer `HEAD` for `path` with a fixed status.
    pub fn with_head_status(mut self, path: impl Into<String>, status: u16) -> Self {
        self.head_statuses.insert(path.into(), status);
        self
    }

    /// Every path requested so far, `HEAD` and `GET` alike, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    fn record(&self, path: &str) {
        self.requests.borrow_mut().push(path.to_string());
    }

    fn reach(&self, path: &str) -> Result<(), ResourceError> {
        if self.unreachable.contains(path) {
            return Err(ResourceError::Transport {
                path: path.to_string(),
                message: "connection refused".to_string(),
            });
        }
        Ok(())
    }
}

const INDEX_PAGE: &str = "<!DOCTYPE html><html><body><div id=\"main\"></div></body></html>";

impl ResourceAccess for MemoryResources {
    async fn head(&self, path: &str) -> Result<Reply, ResourceError> {
        self.record(path);
        if let Some(&status) = self.head_statuses.get(path) {
            return Ok(Reply::new(status, None));
        }
        self.reach(path)?;
        if self.head_not_allowed {
            return Ok(Reply::new(STATUS_METHOD_NOT_ALLOWED, None));
        }
        Ok(if self.files.contains_key(path) {
            Reply::new(STATUS_OK, Some(JSON))
        } else if self.index_fallback {
            Reply::new(STATUS_OK, Some("text/html; charset=utf-8"))
        } else {
            Reply::new(STATUS_NOT_FOUND, None)
        })
    }

    async fn get(&self, path: &str) -> Result<Document, ResourceError> {
        self.record(path);
        self.reach(path)?;
        if let Some(body) = self.files.get(path) {
            return Ok(Document {
                reply: Reply::new(STATUS_OK, Some(JSON)),
                body: body.clone(),
            });
        }
        if self.index_fallback {
            return Ok(Document {
                reply: Reply::new(STATUS_OK, Some("text/html; charset=utf-8")),
                body: INDEX_PAGE.to_string(),
            });
        }
        Err(not_found(path))
    }
}

#[cfg(test)]
mod test {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn layout_paths() {
        let layout = DataLayout::default();
        assert_eq!(
            layout.config_path("tenses", "high"),
            "/data/tenses/high/config.json"
        );
        assert_eq!(
            layout.set_path("sva", "primary", 12),
            "/data/sva/primary/set12.json"
        );
    }

    #[test]
    fn exists_with_head() {
        let resources = MemoryResources::new().with_file("/a.json", "[]");
        assert_eq!(block_on(exists(&resources, "/a.json")), Ok(true));
        assert_eq!(block_on(exists(&resources, "/b.json")), Ok(false));
        // HEAD is enough when the host supports it
        assert_eq!(resources.requests(), vec!["/a.json", "/b.json"]);
    }

    #[test]
    fn exists_falls_back_to_get() {
        let resources = MemoryResources::new()
            .with_file("/a.json", "[]")
            .without_head();
        assert_eq!(block_on(exists(&resources, "/a.json")), Ok(true));
        assert_eq!(block_on(exists(&resources, "/b.json")), Ok(false));
        assert_eq!(
            resources.requests(),
            vec!["/a.json", "/a.json", "/b.json", "/b.json"]
        );
    }

    #[test]
    fn exists_reports_transport_failure() {
        let resources = MemoryResources::new().with_unreachable("/a.json");
        let err = block_on(exists(&resources, "/a.json")).unwrap_err();
        assert_eq!(err.status(), None);
    }

    #[test]
    fn other_head_status_means_absent() {
        let resources = MemoryResources::new()
            .with_file("/a.json", "[]")
            .with_head_status("/a.json", 500);
        assert_eq!(block_on(exists(&resources, "/a.json")), Ok(false));
        // no GET retry for a server error
        assert_eq!(resources.requests(), vec!["/a.json"]);
    }

    #[test]
    fn get_fallback_transport_failure() {
        let resources = MemoryResources::new()
            .with_head_status("/a.json", STATUS_METHOD_NOT_ALLOWED)
            .with_unreachable("/a.json");
        let err = block_on(exists(&resources, "/a.json")).unwrap_err();
        assert!(matches!(err, ResourceError::Transport { .. }));
        assert_eq!(resources.requests(), vec!["/a.json", "/a.json"]);
    }

    #[test]
    fn index_page_is_not_a_data_file() {
        let resources = MemoryResources::new()
            .with_file("/a.json", "[]")
            .with_index_fallback();
        assert_eq!(block_on(exists(&resources, "/a.json")), Ok(true));
        assert_eq!(block_on(exists(&resources, "/b.json")), Ok(false));
        assert_eq!(block_on(fetch(&resources, "/a.json")), Ok("[]".to_string()));
        let err = block_on(fetch(&resources, "/b.json")).unwrap_err();
        assert_eq!(err.status(), Some(STATUS_NOT_FOUND));

        let without_head = MemoryResources::new()
            .with_index_fallback()
            .without_head();
        assert_eq!(block_on(exists(&without_head, "/b.json")), Ok(false));
    }

    #[test]
    fn fallback_page_detection() {
        let html = Reply::new(STATUS_OK, Some("Text/HTML; charset=utf-8"));
        assert!(html.is_fallback_page("/data/x/set2.json"));
        // an HTML file asked for on purpose is fine
        assert!(!html.is_fallback_page("/index.html"));
        assert!(!Reply::new(STATUS_OK, Some(JSON)).is_fallback_page("/a.json"));
        assert!(!Reply::new(STATUS_OK, None).is_fallback_page("/a.json"));
    }
}
