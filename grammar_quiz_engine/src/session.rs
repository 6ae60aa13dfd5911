use rand::Rng;

use crate::{
    config::{load_config, Header},
    discovery::discover_sets,
    error::Error,
    menu::{MenuAction, SetMenu},
    params::QuizParams,
    question::QuestionSet,
    resource::{fetch, DataLayout, ResourceAccess},
    selection::{parse_random_count, QuestionStore},
};

/// Why a set could not be shown. Displayed on the page as is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to load: {url}")]
pub struct LoadFailure {
    pub url: String,
    pub message: String,
}

/// Fetch and parse one set file.
pub async fn load_set<R: ResourceAccess>(
    resources: &R,
    layout: &DataLayout,
    params: &QuizParams,
) -> Result<QuestionSet, LoadFailure> {
    let url = layout.set_path(&params.subject, &params.level, params.set);
    let loaded = match fetch(resources, &url).await {
        Ok(json) => QuestionSet::parse_json(params.set, &json),
        Err(e) => Err(Error::from(e)),
    };
    loaded.map_err(|e| LoadFailure {
        url,
        message: e.to_string(),
    })
}

/// Everything one quiz page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    params: QuizParams,
    header: Header,
    menu: SetMenu,
    content: Result<QuestionStore, LoadFailure>,
}

impl QuizSession {
    /// Config first (for the header), then the available sets, then the
    /// requested set itself. None of these failures stop the page.
    pub async fn open<R: ResourceAccess>(
        resources: &R,
        layout: &DataLayout,
        params: QuizParams,
    ) -> Self {
        let config = match load_config(resources, layout, &params.subject, &params.level).await {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(
                    "config not found for {}/{}, using defaults: {e}",
                    params.subject,
                    params.level
                );
                None
            }
        };
        let header = Header::new(config.as_ref(), &params);

        let sets = discover_sets(resources, layout, &params.subject, &params.level).await;
        let menu = SetMenu::new(params.set, sets);

        let content = load_set(resources, layout, &params)
            .await
            .map(|set| QuestionStore::new(set.questions));
        if let Err(failure) = &content {
            tracing::error!("{failure}: {}", failure.message);
        }

        Self {
            params,
            header,
            menu,
            content,
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn menu(&self) -> &SetMenu {
        &self.menu
    }

    pub fn content(&self) -> Result<&QuestionStore, &LoadFailure> {
        self.content.as_ref()
    }

    /// Carry out a tools panel action.
    ///
    /// Switching sets doesn't touch this session: the page for the returned
    /// params is built from scratch instead.
    pub fn apply<Rn: Rng + ?Sized>(
        &mut self,
        action: MenuAction,
        rng: &mut Rn,
    ) -> Option<QuizParams> {
        match action {
            MenuAction::SwitchSet(set) => return Some(self.params.with_set(set)),
            MenuAction::Filter(parity) => {
                if let Ok(store) = &mut self.content {
                    store.select_parity(parity);
                }
            }
            MenuAction::Random(input) => {
                if let Ok(store) = &mut self.content {
                    store.select_random(parse_random_count(&input), rng);
                }
            }
        }
        None
    }
}
