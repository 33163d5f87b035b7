//! Reading comprehension session: same select/submit/score contract as the
//! quiz, but over a pre-authored passage instead of a generated set.

use std::collections::HashMap;

use crate::data::{ReadingPassage, READING_PASSAGES};

#[derive(Clone, Debug, PartialEq)]
pub struct ReadingSession {
    passage: &'static ReadingPassage,
    answers: HashMap<usize, usize>,
    submitted: bool,
}

impl Default for ReadingSession {
    fn default() -> Self {
        Self::new(&READING_PASSAGES[0])
    }
}

impl ReadingSession {
    pub fn new(passage: &'static ReadingPassage) -> Self {
        Self {
            passage,
            answers: HashMap::new(),
            submitted: false,
        }
    }

    pub fn passage(&self) -> &'static ReadingPassage {
        self.passage
    }

    pub fn answer(&self, question: usize) -> Option<usize> {
        self.answers.get(&question).copied()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn record_answer(&mut self, question: usize, option: usize) {
        if self.submitted {
            return;
        }
        let Some(q) = self.passage.questions.get(question) else {
            return;
        };
        if option >= q.options.len() {
            return;
        }
        self.answers.insert(question, option);
    }

    pub fn submit(&mut self) {
        self.submitted = true;
    }

    pub fn score(&self) -> usize {
        if !self.submitted {
            return 0;
        }
        self.passage
            .questions
            .iter()
            .enumerate()
            .filter(|(i, q)| self.answers.get(i) == Some(&q.answer))
            .count()
    }

    /// Switching passage starts a fresh session; unknown ids keep the
    /// current one.
    pub fn select_passage(&mut self, id: u32) {
        if self.passage.id == id {
            return;
        }
        if let Some(passage) = READING_PASSAGES.iter().find(|passage| passage.id == id) {
            *self = Self::new(passage);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_answers_score_full_marks() {
        let mut session = ReadingSession::default();
        let answers: Vec<usize> = session.passage().questions.iter().map(|q| q.answer).collect();
        for (i, a) in answers.into_iter().enumerate() {
            session.record_answer(i, a);
        }
        session.submit();
        assert_eq!(session.score(), session.passage().questions.len());
    }

    #[test]
    fn unanswered_questions_count_as_incorrect() {
        let mut session = ReadingSession::default();
        session.record_answer(0, session.passage().questions[0].answer);
        session.submit();
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn switching_passage_resets_answers_and_flag() {
        let mut session = ReadingSession::default();
        session.record_answer(0, 0);
        session.submit();
        session.select_passage(READING_PASSAGES[1].id);
        assert_eq!(session.passage().id, READING_PASSAGES[1].id);
        assert!(!session.is_submitted());
        assert_eq!(session.answer(0), None);
    }

    #[test]
    fn unknown_passage_id_is_ignored() {
        let mut session = ReadingSession::default();
        session.record_answer(0, 1);
        session.select_passage(999);
        assert_eq!(session.passage().id, READING_PASSAGES[0].id);
        assert_eq!(session.answer(0), Some(1));
    }

    #[test]
    fn answers_are_frozen_after_submit() {
        let mut session = ReadingSession::default();
        session.record_answer(0, 1);
        session.submit();
        session.record_answer(0, 2);
        assert_eq!(session.answer(0), Some(1));
    }
}
