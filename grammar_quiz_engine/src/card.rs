use rand::{seq::SliceRandom, Rng};

use crate::{config::Engine, question::Question};

/// How a card reacts once the right option has been picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerPolicy {
    /// Self-testing: the card locks on the correct answer and every wrong
    /// guess stays disabled.
    LockOnCorrect,
    /// Classroom demonstration: any option can be clicked again and again.
    Repeatable,
}

impl From<Engine> for AnswerPolicy {
    fn from(engine: Engine) -> Self {
        match engine {
            Engine::Fill => AnswerPolicy::LockOnCorrect,
            Engine::Mcq => AnswerPolicy::Repeatable,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OptionMark {
    #[default]
    Untouched,
    Correct,
    Wrong,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardOption {
    pub text: String,
    /// index in the question's authored `options`
    pub original_index: usize,
    pub mark: OptionMark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Wrong,
    Ignored,
}

/// One rendered question: its options in display order plus answer state.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    question: Question,
    options: Vec<CardOption>,
    policy: AnswerPolicy,
    answered: bool,
}

impl Card {
    /// Build a card with the options shuffled.
    pub fn new<R: Rng + ?Sized>(question: Question, policy: AnswerPolicy, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..question.options.len()).collect();
        order.shuffle(rng);
        Self::with_order(question, policy, &order)
    }

    /// Build a card showing the options in `order` (indices into `options`).
    pub fn with_order(question: Question, policy: AnswerPolicy, order: &[usize]) -> Self {
        let options = order
            .iter()
            .filter_map(|&i| {
                question.options.get(i).map(|text| CardOption {
                    text: text.clone(),
                    original_index: i,
                    mark: OptionMark::Untouched,
                })
            })
            .collect();
        Self {
            question,
            options,
            policy,
            answered: false,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn options(&self) -> &[CardOption] {
        &self.options
    }

    pub fn policy(&self) -> AnswerPolicy {
        self.policy
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// Display position of the correct option.
    ///
    /// Tracked through the original index, so two options with the same text
    /// can't both count as correct.
    pub fn correct_position(&self) -> Option<usize> {
        self.options
            .iter()
            .position(|o| o.original_index == self.question.answer)
    }

    pub fn click(&mut self, position: usize) -> Feedback {
        let Some(option) = self.options.get(position) else {
            return Feedback::Ignored;
        };
        let is_correct = option.original_index == self.question.answer;

        match self.policy {
            AnswerPolicy::LockOnCorrect => {
                if self.answered
                    || matches!(option.mark, OptionMark::Wrong | OptionMark::Disabled)
                {
                    return Feedback::Ignored;
                }
                if is_correct {
                    self.answered = true;
                    for (i, option) in self.options.iter_mut().enumerate() {
                        if i == position {
                            option.mark = OptionMark::Correct;
                        } else if option.mark != OptionMark::Wrong {
                            option.mark = OptionMark::Disabled;
                        }
                    }
                    Feedback::Correct
                } else {
                    self.options[position].mark = OptionMark::Wrong;
                    Feedback::Wrong
                }
            }
            AnswerPolicy::Repeatable => {
                if is_correct {
                    // informational only, nothing is locked
                    self.answered = true;
                    self.options[position].mark = OptionMark::Correct;
                    Feedback::Correct
                } else {
                    self.options[position].mark = OptionMark::Wrong;
                    Feedback::Wrong
                }
            }
        }
    }
}

/// Label of the option shown at `position`: A, B, C, …
pub fn option_letter(position: usize) -> char {
    (b'A' + (position % 26) as u8) as char
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;

    fn question() -> Question {
        Question {
            text: "He ____ a doctor.".to_string(),
            options: vec![
                "is".to_string(),
                "are".to_string(),
                "am".to_string(),
                "be".to_string(),
            ],
            answer: 0,
        }
    }

    #[test]
    fn shuffle_keeps_every_option() {
        let mut rng = Pcg64::seed_from_u64(11);
        for _ in 0..20 {
            let card = Card::new(question(), AnswerPolicy::Repeatable, &mut rng);
            let mut seen: Vec<usize> = card.options().iter().map(|o| o.original_index).collect();
            seen.sort();
            assert_eq!(seen, vec![0, 1, 2, 3]);
            let correct = card.correct_position().unwrap();
            assert_eq!(card.options()[correct].text, "is");
        }
    }

    #[test]
    fn lock_on_correct() {
        // shown as: am, is, be, are
        let mut card = Card::with_order(question(), AnswerPolicy::LockOnCorrect, &[2, 0, 3, 1]);
        assert_eq!(card.correct_position(), Some(1));

        assert_eq!(card.click(0), Feedback::Wrong);
        assert!(!card.is_answered());
        assert_eq!(card.options()[0].mark, OptionMark::Wrong);
        // a wrong option stays disabled
        assert_eq!(card.click(0), Feedback::Ignored);

        assert_eq!(card.click(1), Feedback::Correct);
        assert!(card.is_answered());
        let marks: Vec<OptionMark> = card.options().iter().map(|o| o.mark).collect();
        assert_eq!(
            marks,
            vec![
                OptionMark::Wrong,
                OptionMark::Correct,
                OptionMark::Disabled,
                OptionMark::Disabled
            ]
        );

        for position in 0..4 {
            assert_eq!(card.click(position), Feedback::Ignored);
        }
        assert_eq!(card.options()[1].mark, OptionMark::Correct);
    }

    #[test]
    fn correct_click_always_locks_fill_cards() {
        let mut rng = Pcg64::seed_from_u64(5);
        for _ in 0..20 {
            let mut card = Card::new(question(), Engine::Fill.into(), &mut rng);
            let correct = card.correct_position().unwrap();
            assert_eq!(card.click(correct), Feedback::Correct);
            assert!(card.is_answered());
            assert_eq!(card.click(correct), Feedback::Ignored);
        }
    }

    #[test]
    fn repeatable() {
        let mut card = Card::with_order(question(), Engine::Mcq.into(), &[0, 1, 2, 3]);
        assert_eq!(card.policy(), AnswerPolicy::Repeatable);

        assert_eq!(card.click(2), Feedback::Wrong);
        assert_eq!(card.click(2), Feedback::Wrong);
        assert_eq!(card.click(0), Feedback::Correct);
        assert!(card.is_answered());
        assert_eq!(card.click(0), Feedback::Correct);
        assert_eq!(card.click(3), Feedback::Wrong);

        let marks: Vec<OptionMark> = card.options().iter().map(|o| o.mark).collect();
        assert_eq!(
            marks,
            vec![
                OptionMark::Correct,
                OptionMark::Untouched,
                OptionMark::Wrong,
                OptionMark::Wrong
            ]
        );
    }

    #[test]
    fn duplicate_option_text() {
        let question = Question {
            text: "pick".to_string(),
            options: vec!["same".to_string(), "same".to_string(), "other".to_string()],
            answer: 1,
        };
        let mut card = Card::with_order(question, AnswerPolicy::LockOnCorrect, &[0, 1, 2]);
        assert_eq!(card.correct_position(), Some(1));
        assert_eq!(card.click(0), Feedback::Wrong);
        assert_eq!(card.click(1), Feedback::Correct);
    }

    #[test]
    fn out_of_range_click() {
        let mut card = Card::with_order(question(), AnswerPolicy::Repeatable, &[0, 1]);
        assert_eq!(card.options().len(), 2);
        assert_eq!(card.click(7), Feedback::Ignored);
    }

    #[test]
    fn letters() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(3), 'D');
        assert_eq!(option_letter(4), 'E');
    }
}
