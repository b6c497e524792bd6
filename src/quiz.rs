//! Linear quiz state machine.
//!
//! A session walks the question list front to back. Each question needs a
//! selection before [`QuizSession::advance`] accepts it, and once a question
//! is left behind its answer is fixed. Timing (the short pause before the
//! results screen appears) is left to the caller.

use thiserror::Error;

use crate::models::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("select an answer before moving on")]
    NoSelection,
    #[error("question {question} has no option worth {points} points")]
    UnknownOption { question: u32, points: u32 },
    #[error("quiz already submitted")]
    Completed,
}

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Answering(usize),
    Submitting { total: u32 },
}

/// Outcome of a successful [`QuizSession::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next(usize),
    Complete { total: u32 },
}

#[derive(Debug, Clone)]
pub struct QuizSession<'q> {
    questions: &'q [Question],
    phase: Phase,
    selected_points: Option<u32>,
    scores: Vec<u32>,
}

impl<'q> QuizSession<'q> {
    pub fn new(questions: &'q [Question]) -> Self {
        Self {
            questions,
            phase: Phase::Answering(0),
            selected_points: None,
            scores: Vec::with_capacity(questions.len()),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    /// Index of the question on screen. Stays on the last question while
    /// submitting.
    pub fn current_index(&self) -> usize {
        match self.phase {
            Phase::Answering(index) => index,
            Phase::Submitting { .. } => self.questions.len().saturating_sub(1),
        }
    }

    pub fn current_question(&self) -> &'q Question {
        &self.questions[self.current_index()]
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index() + 1 == self.questions.len()
    }

    pub fn selected_points(&self) -> Option<u32> {
        self.selected_points
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// Sum of the answers recorded so far.
    pub fn running_total(&self) -> u32 {
        self.scores.iter().sum()
    }

    /// Fraction of the quiz reached, counting the question on screen.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current_index() + 1) as f64 / self.questions.len() as f64
    }

    /// Records a candidate answer for the current question, replacing any
    /// earlier one.
    pub fn select_option(&mut self, points: u32) -> Result<(), SessionError> {
        if self.is_submitting() {
            return Err(SessionError::Completed);
        }

        let question = self.current_question();
        if !question.options.iter().any(|o| o.points == points) {
            return Err(SessionError::UnknownOption {
                question: question.id,
                points,
            });
        }

        self.selected_points = Some(points);
        Ok(())
    }

    /// Locks in the current selection and moves forward.
    pub fn advance(&mut self) -> Result<Step, SessionError> {
        let Phase::Answering(index) = self.phase else {
            return Err(SessionError::Completed);
        };
        let points = self.selected_points.take().ok_or(SessionError::NoSelection)?;
        self.scores.push(points);

        if index + 1 < self.questions.len() {
            self.phase = Phase::Answering(index + 1);
            Ok(Step::Next(index + 1))
        } else {
            let total = self.running_total();
            self.phase = Phase::Submitting { total };
            Ok(Step::Complete { total })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::QUESTIONS;
    use crate::models::Question;
    use crate::results::resolve;

    fn answer_all(session: &mut QuizSession<'_>, pick: impl Fn(&Question) -> u32) -> u32 {
        loop {
            let points = pick(session.current_question());
            session.select_option(points).unwrap();
            match session.advance().unwrap() {
                Step::Next(_) => continue,
                Step::Complete { total } => return total,
            }
        }
    }

    #[test]
    fn test_starts_on_first_question() {
        let session = QuizSession::new(&QUESTIONS);
        assert_eq!(session.phase(), Phase::Answering(0));
        assert!(session.scores().is_empty());
        assert_eq!(session.selected_points(), None);
        assert_eq!(session.running_total(), 0);
    }

    #[test]
    fn test_advance_without_selection_is_rejected() {
        let mut session = QuizSession::new(&QUESTIONS);
        assert_eq!(session.advance(), Err(SessionError::NoSelection));
        assert_eq!(session.phase(), Phase::Answering(0));
        assert!(session.scores().is_empty());
    }

    #[test]
    fn test_reselecting_keeps_latest() {
        let mut session = QuizSession::new(&QUESTIONS);
        session.select_option(1).unwrap();
        session.select_option(5).unwrap();
        session.select_option(3).unwrap();
        assert_eq!(session.selected_points(), Some(3));

        assert_eq!(session.advance(), Ok(Step::Next(1)));
        assert_eq!(session.scores(), &[3]);
        assert_eq!(session.selected_points(), None);
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let mut session = QuizSession::new(&QUESTIONS);
        assert_eq!(
            session.select_option(4),
            Err(SessionError::UnknownOption {
                question: 1,
                points: 4
            })
        );
        assert_eq!(session.selected_points(), None);
    }

    #[test]
    fn test_selection_cleared_after_advance() {
        let mut session = QuizSession::new(&QUESTIONS);
        session.select_option(5).unwrap();
        session.advance().unwrap();
        assert_eq!(session.advance(), Err(SessionError::NoSelection));
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_progress_counts_current_question() {
        let mut session = QuizSession::new(&QUESTIONS);
        assert_eq!(session.progress(), 1.0 / 8.0);
        session.select_option(3).unwrap();
        session.advance().unwrap();
        assert_eq!(session.progress(), 2.0 / 8.0);
    }

    #[test]
    fn test_lowest_answers_resolve_to_shadow_holder() {
        let mut session = QuizSession::new(&QUESTIONS);
        let total = answer_all(&mut session, Question::min_points);
        assert_eq!(total, 8);
        assert_eq!(resolve(total).name, "Shadow Holder");
        assert_eq!(session.phase(), Phase::Submitting { total: 8 });
    }

    #[test]
    fn test_highest_answers_resolve_to_whale_warrior() {
        let mut session = QuizSession::new(&QUESTIONS);
        let total = answer_all(&mut session, Question::max_points);
        assert_eq!(total, 40);
        assert_eq!(resolve(total).name, "Whale Warrior");
    }

    #[test]
    fn test_total_ignores_option_order() {
        let reversed: Vec<Question> = QUESTIONS
            .iter()
            .map(|q| {
                let mut q = *q;
                q.options.reverse();
                q
            })
            .collect();

        // Always pick the middle-valued option by points, wherever it sits.
        let middle = |q: &Question| {
            let mut points: Vec<u32> = q.options.iter().map(|o| o.points).collect();
            points.sort_unstable();
            points[1]
        };

        let mut original = QuizSession::new(&QUESTIONS);
        let mut flipped = QuizSession::new(&reversed);
        let expected: u32 = QUESTIONS.iter().map(middle).sum();

        assert_eq!(answer_all(&mut original, middle), expected);
        assert_eq!(answer_all(&mut flipped, middle), expected);
    }

    #[test]
    fn test_no_transitions_after_submit() {
        let mut session = QuizSession::new(&QUESTIONS);
        answer_all(&mut session, Question::min_points);

        assert_eq!(session.select_option(1), Err(SessionError::Completed));
        assert_eq!(session.advance(), Err(SessionError::Completed));
        assert_eq!(session.current_index(), 7);
        assert_eq!(session.scores().len(), 8);
    }
}
