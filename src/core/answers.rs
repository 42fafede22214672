use std::collections::HashMap;

use crate::core::constants::SEED_ANSWERS;

/// Question → answer store consulted by the dispatcher.
///
/// Keys are case-folded on the way in and on lookup, so every comparison is
/// case-insensitive. Entries are only ever added or overwritten.
#[derive(Debug, Clone, Default)]
pub struct AnswerStore {
    answers: HashMap<String, String>,
    learned: Vec<(String, String)>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the built-in greetings.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for &(question, answer) in SEED_ANSWERS {
            store.insert(question, answer);
        }
        store
    }

    /// Adds or replaces a seed entry. Seeds are not reported by [`Self::learned`].
    pub fn insert(&mut self, question: &str, answer: impl Into<String>) {
        self.answers.insert(fold(question), answer.into());
    }

    pub fn extend_seeds<'a, I>(&mut self, seeds: I)
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (question, answer) in seeds {
            self.insert(question, answer.clone());
        }
    }

    pub fn lookup(&self, question: &str) -> Option<&str> {
        self.answers.get(&fold(question)).map(String::as_str)
    }

    pub fn learn(&mut self, question: &str, answer: impl Into<String>) {
        let answer = answer.into();
        self.answers.insert(fold(question), answer.clone());
        self.learned.push((question.to_string(), answer));
    }

    /// Pairs learned this session, oldest first.
    pub fn learned(&self) -> &[(String, String)] {
        &self.learned
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

fn fold(question: &str) -> String {
    question.to_lowercase()
}
