//! Walkthrough of the directory API with logging enabled
//!
//! Drives a directory on a manual clock through a simulated day, so the
//! rolling window can be watched without waiting for one.
//!
//! ```bash
//! RUST_LOG=trace cargo run -p daybook-store --example activity_log
//! ```

use daybook_core::{DAY, EventInput, ManualClock, UserProfile};
use daybook_store::Directory;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("daybook_store=debug".parse().unwrap()),
        )
        .init();

    let mut dir = Directory::with_clock(ManualClock::starting_at(1));

    for (name, email) in [("alice", "alice@example.com"), ("bob", "bob@example.com")] {
        let user = UserProfile {
            email: email.to_string(),
            password: "correct horse battery staple".to_string(),
            phone: None,
        }
        .into_user(name);
        dir.add_user(user).expect("fresh directory has no conflicts");
    }

    dir.add_event("alice", EventInput::new("LOGIN")).unwrap();
    dir.clock().advance(1);
    dir.add_event("bob", EventInput::new("LOGIN")).unwrap();

    println!("After the morning logins:");
    print_window(&mut dir);

    dir.clock().advance(DAY / 2);
    dir.add_event("alice", EventInput::new("LOGOUT")).unwrap();
    dir.clock().advance(1);
    dir.add_event("bob", EventInput::new("LOGOUT")).unwrap();

    println!("Half a day later, after the logouts:");
    print_window(&mut dir);

    dir.clock().advance(DAY / 2);
    println!("Another half day later (logins have aged out):");
    print_window(&mut dir);

    dir.delete_user("alice").unwrap();
    println!("After deleting alice:");
    print_window(&mut dir);

    println!("Permanent log still holds {} events", dir.all_events().len());
}

fn print_window(dir: &mut Directory<ManualClock>) {
    for event in dir.recent_events() {
        println!("  {} {} @ {}ms", event.user, event.kind, event.created);
    }
    println!();
}
