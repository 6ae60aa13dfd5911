use futures::future::join_all;

use crate::{
    config::{load_config, TopicLevelConfig},
    params::QuizParams,
    resource::{DataLayout, ResourceAccess},
};

/// Subject directories under the data root. New subjects go here.
pub const SUBJECTS: [&str; 12] = [
    "tenses",
    "sva",
    "narration",
    "voice",
    "articles",
    "prepositions",
    "modals",
    "nouns",
    "pronouns",
    "adjectives",
    "adverbs",
    "conjunctions",
];

pub const LEVELS: [&str; 3] = ["primary", "middle", "high"];

/// A topic/level that has a config and gets a card on the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub subject: String,
    pub level: String,
    pub config: TopicLevelConfig,
}

impl IndexEntry {
    /// The big number in the corner of the card.
    pub fn order_label(&self) -> String {
        match self.config.order {
            Some(order) => format!("{order:02}"),
            None => "--".to_string(),
        }
    }

    /// Where the card leads: the first set of this topic/level.
    pub fn params(&self) -> QuizParams {
        QuizParams::new(self.subject.clone(), self.level.clone(), 1)
    }
}

/// Look for a config in every subject × level directory.
///
/// All loads are started together and the grid is only built once every one
/// of them has finished. Missing or broken configs are skipped.
pub async fn scan_library<R: ResourceAccess>(resources: &R, layout: &DataLayout) -> Vec<IndexEntry> {
    let probes = SUBJECTS.iter().flat_map(move |subject| {
        LEVELS.iter().map(move |level| async move {
            match load_config(resources, layout, subject, level).await {
                Ok(config) => Some(IndexEntry {
                    subject: subject.to_string(),
                    level: level.to_string(),
                    config,
                }),
                Err(e) => {
                    tracing::debug!("no entry for {subject}/{level}: {e}");
                    None
                }
            }
        })
    });

    let mut entries: Vec<IndexEntry> = join_all(probes).await.into_iter().flatten().collect();
    // stable: equal orders keep registry order
    entries.sort_by_key(|entry| entry.config.sort_key());
    entries
}
