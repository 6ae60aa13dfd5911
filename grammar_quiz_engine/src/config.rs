use serde::Deserialize;

use crate::{
    error::Result,
    params::QuizParams,
    resource::{fetch, DataLayout, ResourceAccess},
};

/// Sort position of entries that don't say where they belong.
pub const UNORDERED: u32 = 999;

pub const DEFAULT_SUBTITLE_PREFIX: &str = "By Chiranjibi Sir";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    #[default]
    Mcq,
    Fill,
}

impl Engine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Mcq => "mcq",
            Engine::Fill => "fill",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Time,
    List,
    Book,
    Chat,
    #[default]
    #[serde(other)]
    Other,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Time => "🕒",
            Icon::List => "📋",
            Icon::Book | Icon::Other => "📖",
            Icon::Chat => "💬",
        }
    }
}

/// Metadata of a topic/level directory, read from its `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicLevelConfig {
    /// position on the index page
    #[serde(default)]
    pub order: Option<u32>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub engine: Engine,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default)]
    pub header_title: Option<String>,
    #[serde(default)]
    pub header_subtitle_prefix: Option<String>,
}

impl TopicLevelConfig {
    pub fn parse_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// `order`, with missing and zero values sinking to the end.
    pub fn sort_key(&self) -> u32 {
        self.order.filter(|order| *order != 0).unwrap_or(UNORDERED)
    }
}

pub async fn load_config<R: ResourceAccess>(
    resources: &R,
    layout: &DataLayout,
    topic: &str,
    level: &str,
) -> Result<TopicLevelConfig> {
    let json = fetch(resources, &layout.config_path(topic, level)).await?;
    TopicLevelConfig::parse_json(&json)
}

/// The two lines at the top of a quiz page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub subtitle: String,
}

impl Header {
    pub fn new(config: Option<&TopicLevelConfig>, params: &QuizParams) -> Self {
        let title = config
            .and_then(|c| c.header_title.clone())
            .unwrap_or_else(|| params.subject.replace('-', " "));
        let prefix = config
            .and_then(|c| c.header_subtitle_prefix.as_deref())
            .unwrap_or(DEFAULT_SUBTITLE_PREFIX);
        Header {
            title,
            subtitle: format!(
                "{prefix} • {} • SET {}",
                params.level.to_uppercase(),
                params.set
            ),
        }
    }
}
