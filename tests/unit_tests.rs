// Unit tests for Ember Session components

use chrono::{Duration, Utc};
use ember_session::core::{ChatError, ChatStore, DecisionLedger, MatchRegistry, PoolError, ProfilePool, SwipeCursor};
use ember_session::models::{Profile, SwipeOutcome};

fn create_profile(id: &str) -> Profile {
    Profile {
        profile_id: id.to_string(),
        name: format!("User {}", id),
        age: 25,
        bio: "Test bio".to_string(),
        location: "Moscow".to_string(),
        interests: vec!["Travel".to_string()],
        photos: vec!["/placeholder.svg".to_string()],
    }
}

#[test]
fn test_pool_out_of_range() {
    let pool = ProfilePool::new(vec![create_profile("a")]);
    assert!(pool.at(0).is_ok());
    assert!(matches!(
        pool.at(5),
        Err(PoolError::OutOfRange { index: 5, len: 1 })
    ));
}

#[test]
fn test_cursor_settles_to_exhaustion() {
    let mut cursor = SwipeCursor::new(3, false);
    let mut visited = Vec::new();
    while let Some(index) = cursor.current() {
        visited.push(index);
        cursor.settle_current();
    }
    assert_eq!(visited, vec![0, 1, 2]);
    assert!(cursor.is_exhausted());
}

#[test]
fn test_one_decision_per_profile() {
    let mut ledger = DecisionLedger::new();
    ledger.record("a", SwipeOutcome::Accepted, Utc::now()).unwrap();
    ledger.record("b", SwipeOutcome::Rejected, Utc::now()).unwrap();

    assert!(ledger.record("a", SwipeOutcome::Rejected, Utc::now()).is_err());
    assert!(ledger.record("b", SwipeOutcome::Accepted, Utc::now()).is_err());
    assert_eq!(ledger.len(), 2);
}

#[test]
fn test_match_exists_iff_accepting_decision() {
    let mut ledger = DecisionLedger::new();
    let mut registry = MatchRegistry::new();

    let outcomes = [
        ("a", SwipeOutcome::Accepted),
        ("b", SwipeOutcome::Rejected),
        ("c", SwipeOutcome::SuperAccepted),
    ];
    for (i, (id, outcome)) in outcomes.iter().enumerate() {
        let decision = ledger.record(id, *outcome, Utc::now()).unwrap().clone();
        registry.form_match_if_eligible(&decision, format!("m{}", i), Utc::now());
    }

    for (id, outcome) in outcomes {
        assert_eq!(
            registry.match_for_profile(id).is_some(),
            outcome.is_accepting()
        );
    }
}

#[test]
fn test_append_only_message_ordering() {
    let mut store = ChatStore::new();
    store.register_match("m1");

    let texts = ["first", "second", "third", "fourth"];
    for (i, text) in texts.iter().enumerate() {
        store
            .append_message("m1", text, i % 2 == 0, format!("msg{}", i), Utc::now())
            .unwrap();
    }

    let thread = store.thread("m1").unwrap();
    assert_eq!(thread.messages.len(), texts.len());
    for (i, message) in thread.messages.iter().enumerate() {
        assert_eq!(message.seq, i as u64);
        assert_eq!(message.text, texts[i]);
    }
}

#[test]
fn test_open_resets_unread_without_losing_messages() {
    let mut store = ChatStore::new();
    store.register_match("m1");
    store
        .append_message("m1", "hi", false, "msg1".to_string(), Utc::now())
        .unwrap();
    store
        .append_message("m1", "hello?", false, "msg2".to_string(), Utc::now())
        .unwrap();

    assert_eq!(store.unread_count("m1"), 2);
    let thread = store.open_thread("m1").unwrap();
    assert_eq!(thread.unread, 0);
    assert_eq!(thread.messages.len(), 2);
}

#[test]
fn test_whitespace_message_leaves_thread_unchanged() {
    let mut store = ChatStore::new();
    store.register_match("m1");
    store
        .append_message("m1", "Hi", true, "msg1".to_string(), Utc::now())
        .unwrap();

    assert!(matches!(
        store.append_message("m1", "  ", true, "msg2".to_string(), Utc::now()),
        Err(ChatError::EmptyMessage)
    ));
    assert!(matches!(
        store.append_message("m1", "\t\n", true, "msg3".to_string(), Utc::now()),
        Err(ChatError::EmptyMessage)
    ));

    let thread = store.thread("m1").unwrap();
    assert_eq!(thread.messages.len(), 1);
    assert_eq!(thread.messages[0].text, "Hi");
}

#[test]
fn test_summaries_track_latest_activity() {
    let mut store = ChatStore::new();
    store.register_match("m1");
    store.register_match("m2");

    let base = Utc::now();
    store
        .append_message("m1", "early", false, "msg1".to_string(), base)
        .unwrap();
    store
        .append_message("m2", "later", true, "msg2".to_string(), base + Duration::minutes(1))
        .unwrap();
    store
        .append_message("m1", "latest", false, "msg3".to_string(), base + Duration::minutes(2))
        .unwrap();

    let summaries = store.thread_summaries();
    assert_eq!(summaries[0].match_id, "m1");
    assert_eq!(summaries[0].last_message.as_deref(), Some("latest"));
    assert_eq!(summaries[0].unread_count, 2);
    assert_eq!(summaries[1].match_id, "m2");
    assert_eq!(summaries[1].unread_count, 0);
}
