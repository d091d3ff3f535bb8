// src/session.rs

use crate::error::{QuizError, Result};
use crate::model::{AnswerLetter, Question, QuizMode, Topic};
use crate::store::QuestionStore;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::rc::Rc;

/// Resultado de contestar una pregunta en modo secuencial
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub chosen: AnswerLetter,
    pub correct_letter: AnswerLetter,
    pub correct_text: String,
    pub is_correct: bool,
}

impl AnswerFeedback {
    pub fn message(&self) -> String {
        if self.is_correct {
            "Correct!".to_owned()
        } else {
            format!(
                "Incorrect. Correct: {}. {}",
                self.correct_letter, self.correct_text
            )
        }
    }
}

/// Intento en curso, una pregunta cada vez.
#[derive(Clone, Debug)]
pub struct SequentialRun {
    topic: Topic,
    questions: Vec<Question>,
    cursor: usize,
    score: u32,
    feedback: Option<AnswerFeedback>,
}

impl SequentialRun {
    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.cursor]
    }

    /// Posición 1-based de la pregunta actual
    pub fn number(&self) -> usize {
        self.cursor + 1
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn feedback(&self) -> Option<&AnswerFeedback> {
        self.feedback.as_ref()
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 == self.questions.len()
    }

    pub fn question_ids(&self) -> Vec<i64> {
        self.questions.iter().map(|q| q.id).collect()
    }
}

/// Intento en curso con todas las preguntas a la vez.
#[derive(Clone, Debug)]
pub struct BatchRun {
    topic: Topic,
    questions: Vec<Question>,
    answers: Vec<Option<AnswerLetter>>,
}

impl BatchRun {
    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answer(&self, index: usize) -> Option<AnswerLetter> {
        self.answers.get(index).copied().flatten()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut Option<AnswerLetter>> {
        let total = self.answers.len();
        self.answers.get_mut(index).ok_or_else(|| {
            QuizError::InvalidInput(format!("question index {index} out of range (0..{total})"))
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizResult {
    pub topic_name: String,
    pub score: u32,
    pub total: usize,
    pub pass_threshold: f64,
}

impl QuizResult {
    /// 0 cuando no hubo preguntas
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * f64::from(self.score) / self.total as f64
        }
    }

    pub fn passed(&self) -> bool {
        self.total > 0 && self.percentage() >= self.pass_threshold
    }

    pub fn status_label(&self) -> &'static str {
        if self.passed() { "Pass" } else { "Fail" }
    }

    pub fn summary_line(&self) -> String {
        if self.total == 0 {
            "No questions were asked.".to_owned()
        } else {
            format!(
                "Your final score: {} out of {} ({:.1}%)",
                self.score,
                self.total,
                self.percentage()
            )
        }
    }
}

/// Lo que devuelve `submit_all`: el resultado y cuántas quedaron sin contestar
#[derive(Clone, Debug, PartialEq)]
pub struct BatchOutcome {
    pub result: QuizResult,
    pub unanswered: usize,
}

impl BatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.unanswered == 0
    }
}

#[derive(Clone, Debug)]
pub enum SessionState {
    TopicSelection,
    Sequential(SequentialRun),
    Batch(BatchRun),
    Finished(QuizResult),
}

/// Un intento de quiz: selección de tema, preguntas barajadas, puntuación y resultado.
///
/// El orden se baraja una sola vez al empezar y no cambia durante el intento.
/// Tras `Finished` solo cabe `discard`, que vuelve a la selección de tema.
pub struct QuizSession {
    store: Rc<QuestionStore>,
    pass_threshold: f64,
    rng: StdRng,
    state: SessionState,
}

impl QuizSession {
    pub fn new(store: Rc<QuestionStore>, pass_threshold: f64) -> Self {
        Self::with_rng(store, pass_threshold, StdRng::from_entropy())
    }

    pub fn with_rng(store: Rc<QuestionStore>, pass_threshold: f64, rng: StdRng) -> Self {
        Self {
            store,
            pass_threshold,
            rng,
            state: SessionState::TopicSelection,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn result(&self) -> Option<&QuizResult> {
        match &self.state {
            SessionState::Finished(result) => Some(result),
            _ => None,
        }
    }

    pub fn start_quiz(&mut self, topic_id: i64, mode: QuizMode) -> Result<()> {
        if !matches!(self.state, SessionState::TopicSelection) {
            return Err(QuizError::InvalidState(
                "a quiz is already running; close it before starting another",
            ));
        }

        let topic = self.store.get_topic(topic_id)?;
        let mut questions = self.store.list_questions(topic_id)?;
        if questions.is_empty() {
            warn!("El tema '{}' no tiene preguntas", topic.name);
            return Err(QuizError::NoQuestions { topic: topic.name });
        }

        // Fisher-Yates: todas las permutaciones igual de probables
        questions.shuffle(&mut self.rng);
        info!(
            "Quiz '{}' iniciado ({:?}, {} preguntas)",
            topic.name,
            mode,
            questions.len()
        );

        self.state = match mode {
            QuizMode::Sequential => SessionState::Sequential(SequentialRun {
                topic,
                questions,
                cursor: 0,
                score: 0,
                feedback: None,
            }),
            QuizMode::Batch => {
                let answers = vec![None; questions.len()];
                SessionState::Batch(BatchRun {
                    topic,
                    questions,
                    answers,
                })
            }
        };
        Ok(())
    }

    // ----------- MODO SECUENCIAL -----------

    pub fn current_question(&self) -> Result<&Question> {
        match &self.state {
            SessionState::Sequential(run) => Ok(run.current_question()),
            _ => Err(QuizError::InvalidState("no sequential quiz in progress")),
        }
    }

    /// Solo se acepta una respuesta por pregunta; la comparación no distingue mayúsculas.
    pub fn submit_answer(&mut self, letter: &str) -> Result<AnswerFeedback> {
        let SessionState::Sequential(run) = &mut self.state else {
            return Err(QuizError::InvalidState("no sequential quiz in progress"));
        };
        if run.feedback.is_some() {
            return Err(QuizError::InvalidState(
                "this question has already been answered",
            ));
        }
        let chosen: AnswerLetter = letter.parse()?;

        let fields = &run.questions[run.cursor].fields;
        let is_correct = chosen == fields.correct_answer;
        let feedback = AnswerFeedback {
            chosen,
            correct_letter: fields.correct_answer,
            correct_text: fields.correct_text().to_owned(),
            is_correct,
        };
        if is_correct {
            run.score += 1;
        }
        debug!(
            "Pregunta {} de {}: {} ({})",
            run.number(),
            run.total(),
            chosen,
            if is_correct { "correcta" } else { "incorrecta" }
        );
        run.feedback = Some(feedback.clone());
        Ok(feedback)
    }

    /// Pasa a la siguiente pregunta. Devuelve `true` si el intento ha terminado.
    pub fn advance(&mut self) -> Result<bool> {
        let SessionState::Sequential(run) = &mut self.state else {
            return Err(QuizError::InvalidState("no sequential quiz in progress"));
        };
        if run.feedback.is_none() {
            return Err(QuizError::InvalidState(
                "answer the current question before moving on",
            ));
        }

        run.cursor += 1;
        run.feedback = None;
        if run.cursor < run.questions.len() {
            return Ok(false);
        }

        let result = QuizResult {
            topic_name: run.topic.name.clone(),
            score: run.score,
            total: run.questions.len(),
            pass_threshold: self.pass_threshold,
        };
        self.finish(result);
        Ok(true)
    }

    // ----------- MODO TODAS A LA VEZ -----------

    /// Sobrescribe la respuesta pendiente de una pregunta; sin feedback inmediato.
    pub fn set_answer(&mut self, index: usize, letter: &str) -> Result<()> {
        let SessionState::Batch(run) = &mut self.state else {
            return Err(QuizError::InvalidState("no all-at-once quiz in progress"));
        };
        let letter: AnswerLetter = letter.parse()?;
        *run.slot_mut(index)? = Some(letter);
        Ok(())
    }

    pub fn clear_answer(&mut self, index: usize) -> Result<()> {
        let SessionState::Batch(run) = &mut self.state else {
            return Err(QuizError::InvalidState("no all-at-once quiz in progress"));
        };
        *run.slot_mut(index)? = None;
        Ok(())
    }

    /// Corrige todo de una vez. Las preguntas sin contestar cuentan como fallo
    /// y se informan en `unanswered`, no bloquean el envío.
    pub fn submit_all(&mut self) -> Result<BatchOutcome> {
        let SessionState::Batch(run) = &self.state else {
            return Err(QuizError::InvalidState("no all-at-once quiz in progress"));
        };

        let score = run
            .questions
            .iter()
            .zip(&run.answers)
            .filter(|(q, a)| **a == Some(q.fields.correct_answer))
            .count() as u32;
        let unanswered = run.answers.iter().filter(|a| a.is_none()).count();
        let result = QuizResult {
            topic_name: run.topic.name.clone(),
            score,
            total: run.questions.len(),
            pass_threshold: self.pass_threshold,
        };
        if unanswered > 0 {
            warn!("Quiz enviado con {unanswered} preguntas sin contestar");
        }

        self.finish(result.clone());
        Ok(BatchOutcome { result, unanswered })
    }

    fn finish(&mut self, result: QuizResult) {
        info!(
            "Quiz '{}' terminado: {}/{} ({:.1}%) {}",
            result.topic_name,
            result.score,
            result.total,
            result.percentage(),
            result.status_label()
        );
        self.state = SessionState::Finished(result);
    }

    /// Descarta el intento (en cualquier estado) y vuelve a la selección de tema
    pub fn discard(&mut self) {
        self.state = SessionState::TopicSelection;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fields_answering, store_with_topics, topic_id};

    fn session_with_questions(n: usize) -> (QuizSession, i64) {
        let store = store_with_topics();
        let theater = topic_id(&store, "Theater");
        for i in 0..n {
            let letter = AnswerLetter::ALL[i % 5];
            store
                .create_question(theater, &fields_answering(&format!("Q{i}"), letter))
                .unwrap();
        }
        let session = QuizSession::with_rng(Rc::new(store), 80.0, StdRng::seed_from_u64(7));
        (session, theater)
    }

    fn wrong_letter(correct: AnswerLetter) -> &'static str {
        if correct == AnswerLetter::A { "B" } else { "A" }
    }

    #[test]
    fn topic_without_questions_stays_in_selection() {
        let (mut session, _) = session_with_questions(0);
        let empty = topic_id(&session.store, "DS 3850");

        let err = session.start_quiz(empty, QuizMode::Sequential).unwrap_err();
        assert!(matches!(err, QuizError::NoQuestions { ref topic } if topic == "DS 3850"));
        assert!(matches!(session.state(), SessionState::TopicSelection));
    }

    #[test]
    fn unknown_topic_is_not_found() {
        let (mut session, _) = session_with_questions(1);
        assert!(matches!(
            session.start_quiz(999, QuizMode::Batch),
            Err(QuizError::NotFound { .. })
        ));
        assert!(matches!(session.state(), SessionState::TopicSelection));
    }

    #[test]
    fn shuffle_is_a_permutation_of_the_topic_questions() {
        let (mut session, theater) = session_with_questions(8);
        let mut expected: Vec<i64> = session
            .store
            .list_questions(theater)
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();

        session.start_quiz(theater, QuizMode::Sequential).unwrap();
        let SessionState::Sequential(run) = session.state() else {
            panic!("expected sequential run");
        };
        let mut got = run.question_ids();
        assert_eq!(got.len(), 8);
        got.sort();
        expected.sort();
        assert_eq!(got, expected);
    }

    #[test]
    fn shuffle_does_not_favour_any_position() {
        let (mut session, theater) = session_with_questions(4);
        let ids: Vec<i64> = session
            .store
            .list_questions(theater)
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();

        // cells[posición][pregunta]
        let trials = 8000;
        let mut cells = [[0usize; 4]; 4];
        for _ in 0..trials {
            session.start_quiz(theater, QuizMode::Sequential).unwrap();
            let SessionState::Sequential(run) = session.state() else {
                panic!("expected a sequential run");
            };
            for (position, id) in run.question_ids().into_iter().enumerate() {
                let slot = ids.iter().position(|&known| known == id).unwrap();
                cells[position][slot] += 1;
            }
            session.discard();
        }
        // Esperado 2000 por casilla; margen de ~6 desviaciones típicas
        for row in &cells {
            assert_eq!(row.iter().sum::<usize>(), trials);
            for &count in row {
                assert!((1750..=2250).contains(&count), "{cells:?}");
            }
        }
    }

    #[test]
    fn sequential_accepts_one_answer_per_question() {
        let (mut session, theater) = session_with_questions(2);
        session.start_quiz(theater, QuizMode::Sequential).unwrap();
        let correct = session.current_question().unwrap().fields.correct_answer;

        let feedback = session.submit_answer(&correct.as_str().to_lowercase()).unwrap();
        assert!(feedback.is_correct);
        assert_eq!(feedback.message(), "Correct!");

        let again = session.submit_answer(wrong_letter(correct)).unwrap_err();
        assert!(matches!(again, QuizError::InvalidState(_)));
        let SessionState::Sequential(run) = session.state() else {
            panic!("expected sequential run");
        };
        assert_eq!(run.score(), 1);
    }

    #[test]
    fn invalid_letter_is_rejected_and_question_stays_open() {
        let (mut session, theater) = session_with_questions(1);
        session.start_quiz(theater, QuizMode::Sequential).unwrap();

        assert!(matches!(
            session.submit_answer("F"),
            Err(QuizError::InvalidInput(_))
        ));
        assert!(session.submit_answer("A").is_ok());
    }

    #[test]
    fn advance_requires_an_answer_first() {
        let (mut session, theater) = session_with_questions(2);
        session.start_quiz(theater, QuizMode::Sequential).unwrap();

        assert!(matches!(session.advance(), Err(QuizError::InvalidState(_))));
        session.submit_answer("A").unwrap();
        assert_eq!(session.advance().unwrap(), false);
        let SessionState::Sequential(run) = session.state() else {
            panic!("expected sequential run");
        };
        assert_eq!(run.number(), 2);
        assert!(run.is_last());
        assert!(run.feedback().is_none());
    }

    #[test]
    fn wrong_answer_reports_correct_letter_and_text() {
        let (mut session, theater) = session_with_questions(1);
        session.start_quiz(theater, QuizMode::Sequential).unwrap();
        let correct = session.current_question().unwrap().fields.correct_answer;

        let feedback = session.submit_answer(wrong_letter(correct)).unwrap();
        assert!(!feedback.is_correct);
        assert_eq!(feedback.correct_letter, correct);
        assert_eq!(
            feedback.message(),
            format!("Incorrect. Correct: {correct}. {}", feedback.correct_text)
        );
    }

    #[test]
    fn finishing_sequential_quiz_scores_and_is_terminal() {
        let (mut session, theater) = session_with_questions(3);
        session.start_quiz(theater, QuizMode::Sequential).unwrap();

        for i in 0..3 {
            let correct = session.current_question().unwrap().fields.correct_answer;
            let letter = if i < 2 { correct.as_str() } else { wrong_letter(correct) };
            session.submit_answer(letter).unwrap();
            assert_eq!(session.advance().unwrap(), i == 2);
        }

        let result = session.result().unwrap().clone();
        assert_eq!(result.score, 2);
        assert_eq!(result.total, 3);
        assert!((result.percentage() - 66.666).abs() < 0.01);
        assert!(!result.passed());
        assert!(matches!(session.submit_answer("A"), Err(QuizError::InvalidState(_))));
        assert!(matches!(
            session.start_quiz(theater, QuizMode::Sequential),
            Err(QuizError::InvalidState(_))
        ));

        session.discard();
        assert!(matches!(session.state(), SessionState::TopicSelection));
        assert!(session.start_quiz(theater, QuizMode::Sequential).is_ok());
    }

    #[test]
    fn batch_partial_submission_counts_blanks_as_wrong() {
        let (mut session, theater) = session_with_questions(5);
        session.start_quiz(theater, QuizMode::Batch).unwrap();

        let correct: Vec<AnswerLetter> = match session.state() {
            SessionState::Batch(run) => run
                .questions()
                .iter()
                .map(|q| q.fields.correct_answer)
                .collect(),
            _ => panic!("expected batch run"),
        };
        session.set_answer(0, correct[0].as_str()).unwrap();
        session.set_answer(1, wrong_letter(correct[1])).unwrap();
        session.set_answer(2, wrong_letter(correct[2])).unwrap();
        // sobrescribe la respuesta de la 2: ahora es correcta
        session.set_answer(2, correct[2].as_str()).unwrap();

        let outcome = session.submit_all().unwrap();
        assert_eq!(outcome.result.score, 2);
        assert_eq!(outcome.result.total, 5);
        assert_eq!(outcome.unanswered, 2);
        assert!(!outcome.is_complete());
        assert_eq!(session.result(), Some(&outcome.result));
    }

    #[test]
    fn batch_rejects_bad_index_and_letter() {
        let (mut session, theater) = session_with_questions(2);
        session.start_quiz(theater, QuizMode::Batch).unwrap();

        assert!(matches!(session.set_answer(5, "A"), Err(QuizError::InvalidInput(_))));
        assert!(matches!(session.set_answer(0, "Z"), Err(QuizError::InvalidInput(_))));
        session.set_answer(1, "c").unwrap();
        session.clear_answer(1).unwrap();
        let SessionState::Batch(run) = session.state() else {
            panic!("expected batch run");
        };
        assert_eq!(run.answered_count(), 0);
        assert!(matches!(session.advance(), Err(QuizError::InvalidState(_))));
    }

    #[test]
    fn empty_result_is_zero_percent_and_not_passed() {
        let result = QuizResult {
            topic_name: "Theater".into(),
            score: 0,
            total: 0,
            pass_threshold: 0.0,
        };
        assert_eq!(result.percentage(), 0.0);
        assert!(!result.passed());
        assert_eq!(result.summary_line(), "No questions were asked.");
    }

    #[test]
    fn pass_threshold_is_inclusive_and_stable() {
        let result = QuizResult {
            topic_name: "Theater".into(),
            score: 4,
            total: 5,
            pass_threshold: 80.0,
        };
        for _ in 0..3 {
            assert_eq!(result.percentage(), 80.0);
            assert!(result.passed());
        }
        assert_eq!(result.status_label(), "Pass");
        assert_eq!(result.summary_line(), "Your final score: 4 out of 5 (80.0%)");
    }
}
