//! Vocabulary quiz engine: builds a multiple-choice question set from the
//! bilingual word pool, tracks selected answers, and scores on submit.

use std::collections::{HashMap, HashSet};

use rand::Rng;

use crate::data::VocabPair;
use crate::sampling::pick_n;

pub const QUIZ_LENGTH: usize = 8;
const DISTRACTORS_PER_QUESTION: usize = 3;

/// Which language the prompt is shown in. The answer is always the other one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    EnToEs,
    EsToEn,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::EnToEs => "EN-ES",
            Direction::EsToEn => "ES-EN",
        }
    }

    pub fn prompt_of(self, pair: &VocabPair) -> &'static str {
        match self {
            Direction::EnToEs => pair.en,
            Direction::EsToEn => pair.es,
        }
    }

    pub fn answer_of(self, pair: &VocabPair) -> &'static str {
        match self {
            Direction::EnToEs => pair.es,
            Direction::EsToEn => pair.en,
        }
    }

    /// BCP-47 tag of the prompt language, for the speech button.
    pub fn prompt_lang(self) -> &'static str {
        match self {
            Direction::EnToEs => "en-US",
            Direction::EsToEn => "es-ES",
        }
    }
}

/// One generated multiple-choice question. Immutable once built: the option
/// order is fixed at generation time and `correct` stays valid for the life
/// of the question set.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub hint: String,
    pub options: Vec<&'static str>,
    pub correct: usize,
    pub pair: VocabPair,
}

fn build_question(
    pair: VocabPair,
    pool: &[VocabPair],
    direction: Direction,
    rng: &mut impl Rng,
) -> QuizQuestion {
    let correct_answer = direction.answer_of(&pair);

    // Candidate distractors: any pair with a different English headword whose
    // answer-side text differs from the correct answer and from each other.
    // Deduping here keeps option lists free of repeated strings even though
    // the curriculum has a few synonym pairs.
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(correct_answer);
    let mut candidates: Vec<&'static str> = Vec::new();
    for other in pool {
        if other.en == pair.en {
            continue;
        }
        let answer = direction.answer_of(other);
        if seen.insert(answer) {
            candidates.push(answer);
        }
    }

    // With a tiny pool this may yield fewer than 3 distractors; the question
    // is still valid, just easier.
    let mut options = pick_n(&candidates, DISTRACTORS_PER_QUESTION, rng);
    let correct = rng.gen_range(0..=options.len());
    options.insert(correct, correct_answer);

    let hint = match direction {
        Direction::EnToEs => {
            format!("Elige la traducción en español para: “{}”", pair.en)
        }
        Direction::EsToEn => format!("Choose the English word for: “{}”", pair.es),
    };

    QuizQuestion {
        prompt: direction.prompt_of(&pair),
        hint,
        options,
        correct,
        pair,
    }
}

/// Samples `count` pairs and builds one question per pair.
pub fn build_question_set(
    pool: &[VocabPair],
    count: usize,
    direction: Direction,
    rng: &mut impl Rng,
) -> Vec<QuizQuestion> {
    pick_n(pool, count, rng)
        .into_iter()
        .map(|pair| build_question(pair, pool, direction, rng))
        .collect()
}

/// One quiz from generation to submission. Answers are only recordable while
/// unsubmitted; a new set (regenerate or direction change) starts fresh.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizSession {
    direction: Direction,
    count: usize,
    questions: Vec<QuizQuestion>,
    answers: HashMap<usize, usize>,
    submitted: bool,
}

impl QuizSession {
    pub fn new(pool: &[VocabPair], count: usize, direction: Direction, rng: &mut impl Rng) -> Self {
        Self {
            direction,
            count,
            questions: build_question_set(pool, count, direction, rng),
            answers: HashMap::new(),
            submitted: false,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn answer(&self, question: usize) -> Option<usize> {
        self.answers.get(&question).copied()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Records a selection. Ignored after submission and for out-of-range
    /// question or option indexes.
    pub fn record_answer(&mut self, question: usize, option: usize) {
        if self.submitted {
            return;
        }
        let Some(q) = self.questions.get(question) else {
            return;
        };
        if option >= q.options.len() {
            return;
        }
        self.answers.insert(question, option);
    }

    /// One-way per question set; calling it again changes nothing.
    pub fn submit(&mut self) {
        self.submitted = true;
    }

    /// Number of questions whose recorded answer matches the correct index.
    /// Unanswered questions count as incorrect. Zero until submitted.
    pub fn score(&self) -> usize {
        if !self.submitted {
            return 0;
        }
        self.questions
            .iter()
            .enumerate()
            .filter(|(i, q)| self.answers.get(i) == Some(&q.correct))
            .count()
    }

    /// Discards the current set and builds a new one in the same direction.
    pub fn regenerate(&mut self, pool: &[VocabPair], rng: &mut impl Rng) {
        self.questions = build_question_set(pool, self.count, self.direction, rng);
        self.answers.clear();
        self.submitted = false;
    }

    /// Changing direction always regenerates.
    pub fn set_direction(&mut self, direction: Direction, pool: &[VocabPair], rng: &mut impl Rng) {
        self.direction = direction;
        self.regenerate(pool, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::all_pairs;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_pool() -> Vec<VocabPair> {
        vec![
            VocabPair { en: "happy", es: "feliz" },
            VocabPair { en: "sad", es: "triste" },
            VocabPair { en: "tired", es: "cansado/a" },
            VocabPair { en: "angry", es: "enojado/a" },
            VocabPair { en: "bored", es: "aburrido/a" },
            VocabPair { en: "glad", es: "contento/a" },
            VocabPair { en: "kind", es: "bondadoso/a" },
            VocabPair { en: "nice", es: "amable" },
            VocabPair { en: "upset", es: "disgustado/a" },
            VocabPair { en: "nervous", es: "nervioso/a" },
            VocabPair { en: "excited", es: "emocionado/a" },
            VocabPair { en: "friendly", es: "amistoso/a" },
        ]
    }

    #[test]
    fn options_contain_the_correct_answer_at_the_recorded_index() {
        let mut rng = StdRng::seed_from_u64(1);
        for direction in [Direction::EnToEs, Direction::EsToEn] {
            let questions = build_question_set(&all_pairs(), QUIZ_LENGTH, direction, &mut rng);
            assert_eq!(questions.len(), QUIZ_LENGTH);
            for q in &questions {
                assert_eq!(q.options[q.correct], direction.answer_of(&q.pair));
                assert_eq!(q.prompt, direction.prompt_of(&q.pair));
            }
        }
    }

    #[test]
    fn options_have_no_duplicates() {
        let mut rng = StdRng::seed_from_u64(2);
        // The full curriculum pool includes synonym pairs ("trash"/"garbage"
        // both map to "basura"); the dedup must still hold.
        for _ in 0..50 {
            let questions =
                build_question_set(&all_pairs(), QUIZ_LENGTH, Direction::EnToEs, &mut rng);
            for q in &questions {
                assert_eq!(q.options.len(), 4);
                let mut sorted = q.options.clone();
                sorted.sort_unstable();
                sorted.dedup();
                assert_eq!(sorted.len(), 4, "duplicate option in {:?}", q.options);
            }
        }
    }

    #[test]
    fn degraded_pool_still_yields_valid_questions() {
        let mut rng = StdRng::seed_from_u64(3);
        let pool = vec![
            VocabPair { en: "happy", es: "feliz" },
            VocabPair { en: "sad", es: "triste" },
        ];
        let questions = build_question_set(&pool, 2, Direction::EnToEs, &mut rng);
        assert_eq!(questions.len(), 2);
        for q in &questions {
            assert!(!q.options.is_empty());
            assert!(q.options.len() <= 4);
            assert_eq!(q.options[q.correct], q.pair.es);
        }
    }

    #[test]
    fn score_is_zero_before_submit_and_with_no_answers() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut session = QuizSession::new(&small_pool(), 5, Direction::EnToEs, &mut rng);
        assert_eq!(session.score(), 0);
        session.submit();
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn all_correct_answers_score_full_marks() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = QuizSession::new(&small_pool(), 5, Direction::EsToEn, &mut rng);
        let correct: Vec<usize> = session.questions().iter().map(|q| q.correct).collect();
        for (i, c) in correct.into_iter().enumerate() {
            session.record_answer(i, c);
        }
        session.submit();
        assert_eq!(session.score(), 5);
    }

    #[test]
    fn answers_are_frozen_after_submit() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut session = QuizSession::new(&small_pool(), 4, Direction::EnToEs, &mut rng);
        session.record_answer(0, 1);
        session.submit();
        session.record_answer(0, 2);
        session.record_answer(1, 0);
        assert_eq!(session.answer(0), Some(1));
        assert_eq!(session.answer(1), None);
        // submit stays idempotent
        session.submit();
        assert!(session.is_submitted());
    }

    #[test]
    fn out_of_range_selections_are_ignored() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = QuizSession::new(&small_pool(), 3, Direction::EnToEs, &mut rng);
        session.record_answer(99, 0);
        session.record_answer(0, 99);
        assert_eq!(session.answer(99), None);
        assert_eq!(session.answer(0), None);
    }

    #[test]
    fn regenerate_clears_answers_and_submitted_flag() {
        let mut rng = StdRng::seed_from_u64(8);
        let pool = small_pool();
        let mut session = QuizSession::new(&pool, 4, Direction::EnToEs, &mut rng);
        session.record_answer(0, 0);
        session.submit();
        session.regenerate(&pool, &mut rng);
        assert!(!session.is_submitted());
        assert_eq!(session.answer(0), None);
        assert_eq!(session.questions().len(), 4);
    }

    #[test]
    fn direction_change_regenerates_in_the_new_direction() {
        let mut rng = StdRng::seed_from_u64(9);
        let pool = small_pool();
        let mut session = QuizSession::new(&pool, 4, Direction::EnToEs, &mut rng);
        session.record_answer(0, 0);
        session.set_direction(Direction::EsToEn, &pool, &mut rng);
        assert_eq!(session.direction(), Direction::EsToEn);
        assert!(!session.is_submitted());
        assert_eq!(session.answer(0), None);
        for q in session.questions() {
            assert_eq!(q.options[q.correct], q.pair.en);
        }
    }

    #[test]
    fn full_forward_quiz_scores_eight_of_eight() {
        let mut rng = StdRng::seed_from_u64(10);
        let pool = all_pairs();
        assert!(pool.len() >= 12);
        let mut session = QuizSession::new(&pool, QUIZ_LENGTH, Direction::EnToEs, &mut rng);
        let correct: Vec<usize> = session.questions().iter().map(|q| q.correct).collect();
        for (i, c) in correct.into_iter().enumerate() {
            session.record_answer(i, c);
        }
        session.submit();
        assert_eq!(session.score(), 8);
        assert_eq!(session.questions().len(), 8);
    }
}
