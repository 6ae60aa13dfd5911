pub const DEFAULT_SUBJECT: &str = "tenses";
pub const DEFAULT_LEVEL: &str = "high";

/// Which set of which topic/level a quiz page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizParams {
    pub subject: String,
    pub level: String,
    pub set: u32,
}

impl Default for QuizParams {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT.to_string(),
            level: DEFAULT_LEVEL.to_string(),
            set: 1,
        }
    }
}

impl QuizParams {
    pub fn new(subject: impl Into<String>, level: impl Into<String>, set: u32) -> Self {
        Self {
            subject: subject.into(),
            level: level.into(),
            set: set.max(1),
        }
    }

    /// Build from raw query values, falling back to the defaults for anything
    /// empty or unusable.
    pub fn from_query(subject: &str, level: &str, set: &str) -> Self {
        let or_default = |value: &str, default: &str| {
            let value = value.trim();
            if value.is_empty() {
                default.to_string()
            } else {
                value.to_string()
            }
        };
        Self::new(
            or_default(subject, DEFAULT_SUBJECT),
            or_default(level, DEFAULT_LEVEL),
            set.trim().parse().unwrap_or(1),
        )
    }

    pub fn with_set(&self, set: u32) -> Self {
        Self::new(self.subject.clone(), self.level.clone(), set)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn query_defaults() {
        assert_eq!(QuizParams::from_query("", "", ""), QuizParams::default());
        assert_eq!(
            QuizParams::from_query("sva", "primary", "4"),
            QuizParams::new("sva", "primary", 4)
        );
    }

    #[test]
    fn bad_set_numbers() {
        assert_eq!(QuizParams::from_query("sva", "high", "abc").set, 1);
        assert_eq!(QuizParams::from_query("sva", "high", "0").set, 1);
        assert_eq!(QuizParams::from_query("sva", "high", "-2").set, 1);
    }

    #[test]
    fn switching_set_keeps_topic() {
        let params = QuizParams::new("voice", "middle", 2).with_set(5);
        assert_eq!(params, QuizParams::new("voice", "middle", 5));
    }
}
