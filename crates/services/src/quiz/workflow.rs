use std::sync::Arc;

use rand::rng;

use storage::repository::QuizResultRepository;
use tables_core::generator::QuestionGenerator;
use tables_core::model::{QuizResult, QuizSettings, TableNumber, UserId};

use super::session::QuizSession;
use crate::error::SessionError;

/// Orchestrates quiz start and persisted result saving.
///
/// Production wiring: sessions started here draw from the process entropy
/// source. Seeded sessions for tests go through [`QuizSession::start`]
/// directly.
#[derive(Clone)]
pub struct QuizLoopService {
    generator: QuestionGenerator,
    settings: QuizSettings,
    results: Arc<dyn QuizResultRepository>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(results: Arc<dyn QuizResultRepository>) -> Self {
        Self {
            generator: QuestionGenerator::new(),
            settings: QuizSettings::default(),
            results,
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: QuizSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// Start a new quiz session for the given table.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Generator` if question generation fails.
    pub fn start_quiz(&self, table: TableNumber) -> Result<QuizSession, SessionError> {
        let mut rng = rng();
        QuizSession::start(table, &self.settings, &self.generator, &mut rng)
    }

    /// Restart a session in place: fresh questions, same table.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Generator` if question generation fails.
    pub fn restart(&self, session: &mut QuizSession) -> Result<(), SessionError> {
        let mut rng = rng();
        session.reset(&self.generator, &mut rng)
    }

    /// Persist the result of a completed session for `user_id`.
    ///
    /// The stored record (with its assigned id and timestamp) is returned to
    /// the caller; nothing flows back into the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` while questions remain and
    /// `SessionError::Storage` if persistence fails.
    pub async fn finish_quiz(
        &self,
        session: &QuizSession,
        user_id: UserId,
    ) -> Result<QuizResult, SessionError> {
        let draft = session.build_result(user_id)?;
        let stored = self.results.create_quiz_result(&draft).await?;
        Ok(stored)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryStore;
    use tables_core::time::fixed_clock;

    fn table(value: u8) -> TableNumber {
        TableNumber::new(value).unwrap()
    }

    fn build_service() -> (QuizLoopService, InMemoryStore) {
        let store = InMemoryStore::new(fixed_clock());
        let service = QuizLoopService::new(Arc::new(store.clone()));
        (service, store)
    }

    #[test]
    fn start_quiz_uses_configured_count() {
        let (service, _store) = build_service();
        let session = service.start_quiz(table(5)).unwrap();
        assert_eq!(session.total_questions(), 10);

        let service = service.with_settings(QuizSettings::new(3).unwrap());
        let session = service.start_quiz(table(5)).unwrap();
        assert_eq!(session.total_questions(), 3);
    }

    #[test]
    fn restart_keeps_the_table() {
        let (service, _store) = build_service();
        let mut session = service.start_quiz(table(14)).unwrap();

        let correct = session.current_question().unwrap().correct_index();
        session.record_answer(correct).unwrap();
        session.advance().unwrap();

        service.restart(&mut session).unwrap();
        assert_eq!(session.table(), table(14));
        assert_eq!(session.answered_count(), 0);
    }

    #[tokio::test]
    async fn finish_quiz_rejects_incomplete_sessions() {
        let (service, _store) = build_service();
        let session = service.start_quiz(table(5)).unwrap();

        let err = service
            .finish_quiz(&session, UserId::new(1))
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::NotComplete));
    }

    #[tokio::test]
    async fn finish_quiz_persists_the_score() {
        let (service, store) = build_service();
        let mut session = service.start_quiz(table(5)).unwrap();

        while !session.is_complete() {
            let correct = session.current_question().unwrap().correct_index();
            session.record_answer(correct).unwrap();
            session.advance().unwrap();
        }

        let stored = service
            .finish_quiz(&session, UserId::new(1))
            .await
            .unwrap();

        assert_eq!(stored.correct_answers(), 10);
        assert_eq!(stored.total_questions(), 10);
        assert_eq!(stored.table(), table(5));

        let fetched = store.results_by_user(UserId::new(1)).await.unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0], stored);
    }
}
