//! Integration tests for the directory API.
//!
//! Tests cover:
//! - User lifecycle: register, look up, list, update, delete
//! - Uniqueness conflicts and their error kinds
//! - Event recording and the rolling 24-hour window as time advances
//! - Delete cascades across every view

use daybook_core::{
    DAY, DirectoryError, Event, EventInput, ManualClock, User, UserProfile,
};
use daybook_store::Directory;

/// Helper: a directory on a manual clock positioned at t=1.
fn test_directory() -> Directory<ManualClock> {
    Directory::with_clock(ManualClock::starting_at(1))
}

fn profile(email: &str, password: &str, phone: Option<&str>) -> UserProfile {
    UserProfile {
        email: email.to_string(),
        password: password.to_string(),
        phone: phone.map(str::to_string),
    }
}

fn expected_event(user: &str, kind: &str, created: i64) -> Event {
    Event {
        user: user.to_string(),
        kind: kind.to_string(),
        created,
    }
}

// ============================================================
// Scenario 1: User lifecycle
// ============================================================

#[test]
fn test_user_lifecycle() {
    let mut dir = test_directory();

    assert!(dir.user("andy").is_none());

    let andy = profile(
        "andy-hanson@protonmail.com",
        "p@ssword",
        Some("703-402-2284"),
    )
    .into_user("andy");
    dir.add_user(andy.clone()).unwrap();

    // A second registration of the same email is rejected, then the same
    // name.
    assert_eq!(
        dir.add_user(profile("andy-hanson@protonmail.com", "randyspass", None).into_user("randy")),
        Err(DirectoryError::DuplicateEmail(
            "andy-hanson@protonmail.com".to_string()
        ))
    );
    assert_eq!(
        dir.add_user(andy.clone()),
        Err(DirectoryError::DuplicateName("andy".to_string()))
    );

    assert_eq!(dir.user("andy"), Some(&andy));
    assert_eq!(dir.users(), vec![&andy]);

    // Update keeps the name, replaces the rest, and misses on unknown
    // names.
    let new_profile = profile(
        "andy-hanson@protonmail.com",
        "Runner4567",
        Some("703-402-2284"),
    );
    dir.update_user("andy", new_profile.clone()).unwrap();
    assert_eq!(
        dir.update_user("duley", profile("d@example.com", "123456", None)),
        Err(DirectoryError::NotFound("duley".to_string()))
    );
    assert_eq!(dir.user("andy"), Some(&new_profile.into_user("andy")));

    dir.delete_user("andy").unwrap();
    assert!(dir.user("andy").is_none());
    assert!(dir.users().is_empty());
}

// ============================================================
// Scenario 2: Events and the rolling window
// ============================================================

#[test]
fn test_events_across_a_day() {
    let mut dir = test_directory();

    for name in ["alice", "bob"] {
        dir.add_user(profile(&format!("{name}@example.com"), "pass", None).into_user(name))
            .unwrap();
    }

    // Two LOGIN events 1ms apart.
    dir.add_event("alice", EventInput::new("LOGIN")).unwrap();
    dir.clock().advance(1);
    dir.add_event("bob", EventInput::new("LOGIN")).unwrap();

    let logins = vec![
        expected_event("alice", "LOGIN", 1),
        expected_event("bob", "LOGIN", 2),
    ];
    assert_eq!(dir.all_events(), logins);
    assert_eq!(dir.recent_events(), logins);
    assert_eq!(
        dir.events_for_user("alice").unwrap(),
        &logins[..1],
    );
    assert_eq!(
        dir.events_for_user("ghost").unwrap_err(),
        DirectoryError::NotFound("ghost".to_string())
    );

    // Half a day later, both users log out.
    dir.clock().advance(DAY / 2);
    dir.add_event("alice", EventInput::new("LOGOUT")).unwrap();
    dir.clock().advance(1);
    dir.add_event("bob", EventInput::new("LOGOUT")).unwrap();

    let all = vec![
        expected_event("alice", "LOGIN", 1),
        expected_event("bob", "LOGIN", 2),
        expected_event("alice", "LOGOUT", DAY / 2 + 2),
        expected_event("bob", "LOGOUT", DAY / 2 + 3),
    ];
    assert_eq!(dir.all_events(), all);
    assert_eq!(dir.recent_events(), all);

    // Another half day: the morning logins have aged out of the window but
    // stay in the permanent views.
    dir.clock().advance(DAY / 2);
    assert_eq!(dir.recent_events(), all[2..].to_vec());
    assert_eq!(dir.all_events(), all);
}

// ============================================================
// Scenario 3: Delete cascades
// ============================================================

#[test]
fn test_delete_user_drops_their_events_everywhere() {
    let mut dir = test_directory();

    for name in ["alice", "bob"] {
        dir.add_user(profile(&format!("{name}@example.com"), "pass", None).into_user(name))
            .unwrap();
    }
    dir.add_event("alice", EventInput::new("LOGIN")).unwrap();
    dir.clock().advance(1);
    dir.add_event("bob", EventInput::new("LOGIN")).unwrap();
    dir.clock().advance(DAY / 2);
    dir.add_event("alice", EventInput::new("LOGOUT")).unwrap();
    dir.clock().advance(1);
    dir.add_event("bob", EventInput::new("LOGOUT")).unwrap();
    dir.clock().advance(DAY / 2);

    dir.delete_user("alice").unwrap();

    assert_eq!(
        dir.all_events(),
        vec![
            expected_event("bob", "LOGIN", 2),
            expected_event("bob", "LOGOUT", DAY / 2 + 3),
        ]
    );
    assert_eq!(
        dir.recent_events(),
        vec![expected_event("bob", "LOGOUT", DAY / 2 + 3)]
    );
    assert_eq!(
        dir.events_for_user("alice").unwrap_err(),
        DirectoryError::NotFound("alice".to_string())
    );
    assert_eq!(dir.users().len(), 1);
}

// ============================================================
// Scenario 4: Real clock construction
// ============================================================

#[test]
fn test_system_clock_directory_records_events() {
    let mut dir = Directory::new();
    dir.add_user(User {
        name: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "pass".to_string(),
        phone: None,
    })
    .unwrap();
    dir.add_event("alice", EventInput::new("LOGIN")).unwrap();

    // A just-recorded event is inside any sane 24-hour window.
    assert_eq!(dir.recent_events().len(), 1);
    assert!(dir.all_events()[0].created > 0);
}
