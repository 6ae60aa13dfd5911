use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    /// the question, blanks are written as `____`, `...` or `…`
    #[serde(rename = "q")]
    pub text: String,
    /// possible answers, in the order they were authored
    pub options: Vec<String>,
    /// index of the correct answer in `options`
    pub answer: usize,
}

impl Question {
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.answer).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionSet {
    pub id: u32,
    pub questions: Vec<Question>,
}

impl QuestionSet {
    /// Parse a set file: a bare JSON array of questions, no envelope.
    pub fn parse_json(id: u32, json: &str) -> Result<Self> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        for (num, question) in questions.iter().enumerate() {
            if question.correct_option().is_none() {
                return Err(Error::AnswerOutOfRange {
                    question: num + 1,
                    answer: question.answer,
                    options: question.options.len(),
                });
            }
            if question.options.len() < 2 {
                tracing::warn!(set = id, question = num + 1, "question has a single option");
            }
        }
        Ok(QuestionSet { id, questions })
    }
}
