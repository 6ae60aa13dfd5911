use rand::{seq::IndexedRandom, Rng};

use crate::{
    card::{AnswerPolicy, Card},
    question::Question,
};

pub const DEFAULT_RANDOM_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Odd,
    Even,
}

/// The questions of the loaded set and the subset currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionStore {
    questions: Vec<Question>,
    /// indices into `questions`, in display order
    display: Vec<usize>,
    /// bumped on every new selection so the cards get rebuilt
    generation: u64,
}

impl QuestionStore {
    pub fn new(questions: Vec<Question>) -> Self {
        let display = (0..questions.len()).collect();
        Self {
            questions,
            display,
            generation: 0,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Positions (into [`Self::questions`]) of the displayed questions.
    pub fn display_indices(&self) -> &[usize] {
        &self.display
    }

    pub fn displayed(&self) -> impl Iterator<Item = &Question> + '_ {
        self.display.iter().map(|&i| &self.questions[i])
    }

    pub fn select_all(&mut self) {
        self.replace((0..self.questions.len()).collect());
    }

    /// Questions at 1-based positions 1, 3, 5, …
    pub fn select_odd(&mut self) {
        self.select_parity(Parity::Odd);
    }

    /// Questions at 1-based positions 2, 4, 6, …
    pub fn select_even(&mut self) {
        self.select_parity(Parity::Even);
    }

    pub fn select_parity(&mut self, parity: Parity) {
        let wanted = match parity {
            Parity::Odd => 1,
            Parity::Even => 0,
        };
        let display = (0..self.questions.len())
            .filter(|i| (i + 1) % 2 == wanted)
            .collect();
        self.replace(display);
    }

    /// A random sample of `min(count, len)` distinct questions, in random order.
    pub fn select_random<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        let all: Vec<usize> = (0..self.questions.len()).collect();
        let display = all.choose_multiple(rng, count).copied().collect();
        self.replace(display);
    }

    /// Fresh cards for the displayed questions, options shuffled per card.
    pub fn deal<R: Rng + ?Sized>(&self, policy: AnswerPolicy, rng: &mut R) -> Vec<Card> {
        self.displayed()
            .map(|question| Card::new(question.clone(), policy, &mut *rng))
            .collect()
    }

    fn replace(&mut self, display: Vec<usize>) {
        self.display = display;
        self.generation += 1;
    }
}

/// Read the "how many random questions" box: leading digits count, anything
/// else (and zero) means the default.
pub fn parse_random_count(input: &str) -> usize {
    let digits: String = input
        .trim_start()
        .trim_start_matches('+')
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    match digits.parse::<usize>() {
        Ok(0) | Err(_) => DEFAULT_RANDOM_COUNT,
        Ok(count) => count,
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;

    fn store(len: usize) -> QuestionStore {
        QuestionStore::new(
            (0..len)
                .map(|i| Question {
                    text: format!("question {i}"),
                    options: vec!["a".to_string(), "b".to_string()],
                    answer: 0,
                })
                .collect(),
        )
    }

    #[test]
    fn starts_with_everything() {
        let store = store(4);
        assert_eq!(store.display_indices(), &[0, 1, 2, 3]);
        assert_eq!(store.displayed().count(), 4);
    }

    #[test]
    fn odd_and_even() {
        let mut store = store(5);
        store.select_odd();
        assert_eq!(store.display_indices(), &[0, 2, 4]);
        assert_eq!(
            store.displayed().map(|q| q.text.as_str()).collect::<Vec<_>>(),
            vec!["question 0", "question 2", "question 4"]
        );
        store.select_even();
        assert_eq!(store.display_indices(), &[1, 3]);
        store.select_all();
        assert_eq!(store.display_indices(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn odd_even_partition() {
        for len in 0..12 {
            let mut store = store(len);
            store.select_odd();
            let odd: HashSet<usize> = store.display_indices().iter().copied().collect();
            store.select_even();
            let even: HashSet<usize> = store.display_indices().iter().copied().collect();
            assert!(odd.is_disjoint(&even));
            let union: HashSet<usize> = odd.union(&even).copied().collect();
            assert_eq!(union, (0..len).collect::<HashSet<_>>());
        }
    }

    #[test]
    fn random_sample_size() {
        let mut rng = Pcg64::seed_from_u64(7);
        for len in [0, 1, 5, 20] {
            for count in [0, 1, 3, 10, 25] {
                let mut store = store(len);
                store.select_random(count, &mut rng);
                let picked = store.display_indices();
                assert_eq!(picked.len(), count.min(len));
                let unique: HashSet<&usize> = picked.iter().collect();
                assert_eq!(unique.len(), picked.len());
                assert!(picked.iter().all(|&i| i < len));
            }
        }
    }

    #[test]
    fn every_selection_is_a_new_generation() {
        let mut rng = Pcg64::seed_from_u64(1);
        let mut store = store(3);
        assert_eq!(store.generation(), 0);
        store.select_odd();
        store.select_odd();
        store.select_random(2, &mut rng);
        assert_eq!(store.generation(), 3);
        assert_eq!(store.display_indices().len(), 2);
    }

    #[test]
    fn deal_follows_display() {
        let mut rng = Pcg64::seed_from_u64(2);
        let mut store = store(4);
        store.select_even();
        let cards = store.deal(AnswerPolicy::LockOnCorrect, &mut rng);
        let texts: Vec<&str> = cards.iter().map(|c| c.question().text.as_str()).collect();
        assert_eq!(texts, vec!["question 1", "question 3"]);
        assert!(cards.iter().all(|c| !c.is_answered()));
    }

    #[test]
    fn random_count_input() {
        assert_eq!(parse_random_count("5"), 5);
        assert_eq!(parse_random_count(" 12 "), 12);
        assert_eq!(parse_random_count("7abc"), 7);
        assert_eq!(parse_random_count(""), DEFAULT_RANDOM_COUNT);
        assert_eq!(parse_random_count("abc"), DEFAULT_RANDOM_COUNT);
        assert_eq!(parse_random_count("0"), DEFAULT_RANDOM_COUNT);
        assert_eq!(parse_random_count("-3"), DEFAULT_RANDOM_COUNT);
    }

    #[test]
    fn non_numeric_behaves_like_ten() {
        let mut store = store(30);
        let mut rng = Pcg64::seed_from_u64(3);
        store.select_random(parse_random_count("lots"), &mut rng);
        assert_eq!(store.display_indices().len(), 10);
    }
}
