use std::sync::Arc;

use services::{QuizLoopService, QuizResultService};
use storage::repository::{InMemoryStore, UserRepository};
use tables_core::model::{QuizSettings, TableNumber};
use tables_core::time::fixed_clock;

#[tokio::test]
async fn quiz_loop_persists_a_readable_result() {
    let store = InMemoryStore::new(fixed_clock());
    let user = store.create_user("smoke").await.unwrap();

    let loop_svc = QuizLoopService::new(Arc::new(store.clone()))
        .with_settings(QuizSettings::new(3).unwrap());
    let table = TableNumber::new(7).unwrap();

    let mut session = loop_svc.start_quiz(table).unwrap();
    let mut expected_correct = 0;

    while !session.is_complete() {
        // alternate right and wrong choices
        let question = session.current_question().unwrap();
        let index = if session.current_index() % 2 == 0 {
            expected_correct += 1;
            question.correct_index()
        } else {
            (question.correct_index() + 1) % 4
        };
        session.record_answer(index).unwrap();
        session.advance().unwrap();
    }

    let stored = loop_svc.finish_quiz(&session, user.id).await.unwrap();
    assert_eq!(stored.correct_answers(), expected_correct);
    assert_eq!(stored.total_questions(), 3);

    let results = QuizResultService::new(Arc::new(store));
    let items = results.list_by_user_and_table(user.id, table).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, stored.id());
    assert_eq!(items[0].correct_answers, expected_correct);
    assert_eq!(items[0].recorded_at, stored.recorded_at());
}

#[tokio::test]
async fn restarted_quiz_can_finish_again() {
    let store = InMemoryStore::new(fixed_clock());
    let user = store.create_user("again").await.unwrap();

    let loop_svc = QuizLoopService::new(Arc::new(store.clone()))
        .with_settings(QuizSettings::new(2).unwrap());
    let table = TableNumber::new(3).unwrap();

    let mut session = loop_svc.start_quiz(table).unwrap();

    // abandon halfway, restart, then run to completion
    let correct = session.current_question().unwrap().correct_index();
    session.record_answer(correct).unwrap();
    session.advance().unwrap();
    loop_svc.restart(&mut session).unwrap();
    assert_eq!(session.answered_count(), 0);

    while !session.is_complete() {
        let correct = session.current_question().unwrap().correct_index();
        session.record_answer(correct).unwrap();
        session.advance().unwrap();
    }

    let stored = loop_svc.finish_quiz(&session, user.id).await.unwrap();
    assert_eq!(stored.correct_answers(), 2);

    let results = QuizResultService::new(Arc::new(store));
    let items = results.list_by_user(user.id).await.unwrap();
    assert_eq!(items.len(), 1);
}
