//! The authoritative in-memory user directory

use std::collections::{BTreeMap, HashSet};

use daybook_core::{
    Clock, DirectoryError, DirectoryResult, Event, EventInput, SystemClock, User, UserProfile,
};
use tracing::debug;

use crate::window::EventWindow;

/// In-memory directory of users and their activity
///
/// The directory is the sole owner and sole mutator of its maps: the user
/// registry, the per-user permanent event logs, the email reservation set,
/// and the rolling activity window. `&mut self` on every mutating operation
/// is the mutual-exclusion boundary; callers dispatching from concurrent
/// tasks must put the whole directory behind a single lock so no partially
/// applied operation is ever observable.
///
/// A user's permanent log exists exactly as long as the user does; both are
/// created and removed together.
pub struct Directory<C: Clock = SystemClock> {
    clock: C,
    users: BTreeMap<String, User>,
    events: BTreeMap<String, Vec<Event>>,
    emails: HashSet<String>,
    recent: EventWindow,
}

impl Directory<SystemClock> {
    /// Directory on the system wall clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Directory<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Directory<C> {
    /// Directory on an injected clock
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            users: BTreeMap::new(),
            events: BTreeMap::new(),
            emails: HashSet::new(),
            recent: EventWindow::new(),
        }
    }

    /// Access the injected clock, e.g. to drive a manual clock in tests
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// All registered users, in name order
    pub fn users(&self) -> Vec<&User> {
        self.users.values().collect()
    }

    /// Look up a user by name
    pub fn user(&self, name: &str) -> Option<&User> {
        self.users.get(name)
    }

    /// Register a new user with an empty event log
    ///
    /// Fails without touching any state if the name or the email is
    /// already taken.
    pub fn add_user(&mut self, user: User) -> DirectoryResult<()> {
        if self.users.contains_key(&user.name) {
            return Err(DirectoryError::DuplicateName(user.name));
        }
        if self.emails.contains(&user.email) {
            return Err(DirectoryError::DuplicateEmail(user.email));
        }
        debug!(user = %user.name, "Registered user");
        self.emails.insert(user.email.clone());
        self.events.insert(user.name.clone(), Vec::new());
        self.users.insert(user.name.clone(), user);
        Ok(())
    }

    /// Replace a user's profile and reset their event history
    ///
    /// The stored record keeps its name; email, password and phone are
    /// replaced wholesale, and the permanent event log starts over empty.
    /// The email reservation set is not consulted or updated here: the
    /// previous address stays reserved and the new one is not checked for
    /// uniqueness. Window entries recorded before the update age out on
    /// their own.
    pub fn update_user(&mut self, name: &str, profile: UserProfile) -> DirectoryResult<()> {
        let Some(user) = self.users.get_mut(name) else {
            return Err(DirectoryError::NotFound(name.to_string()));
        };
        *user = profile.into_user(name);
        self.events.insert(name.to_string(), Vec::new());
        debug!(user = %name, "Replaced user profile and reset event log");
        Ok(())
    }

    /// Remove a user and every trace of their activity
    ///
    /// Drops the user record, the permanent log, the email reservation, and
    /// the user's entries in the activity window. From the caller's point
    /// of view all four happen or none does.
    pub fn delete_user(&mut self, name: &str) -> DirectoryResult<()> {
        let Some(user) = self.users.remove(name) else {
            return Err(DirectoryError::NotFound(name.to_string()));
        };
        let log = self.events.remove(name);
        let email_freed = self.emails.remove(&user.email);
        debug_assert!(
            log.is_some() && email_freed,
            "user maps out of sync for {name}",
        );
        self.recent.remove_user(name);
        debug!(user = %name, "Deleted user");
        Ok(())
    }

    /// Record an event for a user, stamped with the current time
    ///
    /// Appends to the user's permanent log and admits the event into the
    /// rolling window.
    pub fn add_event(&mut self, name: &str, input: EventInput) -> DirectoryResult<()> {
        let Some(log) = self.events.get_mut(name) else {
            return Err(DirectoryError::NotFound(name.to_string()));
        };
        // One clock read per operation: the log and the window see the
        // same timestamp.
        let now = self.clock.now_millis();
        let event = input.into_event(name, now);
        debug!(user = %name, kind = %event.kind, "Recorded event");
        log.push(event.clone());
        self.recent.insert(event, now);
        Ok(())
    }

    /// A user's full event log, oldest first
    ///
    /// This is the permanent history: expiry from the rolling window never
    /// touches it.
    pub fn events_for_user(&self, name: &str) -> DirectoryResult<&[Event]> {
        self.events
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| DirectoryError::NotFound(name.to_string()))
    }

    /// Every event across all users, ascending by creation time
    ///
    /// Per-user logs are visited in name order and the sort is stable, so
    /// equal timestamps break by owner name, deterministically.
    pub fn all_events(&self) -> Vec<Event> {
        let mut all: Vec<Event> = self.events.values().flatten().cloned().collect();
        all.sort_by_key(|e| e.created);
        all
    }

    /// The events of the trailing 24-hour window, ascending by creation
    /// time
    pub fn recent_events(&mut self) -> Vec<Event> {
        let now = self.clock.now_millis();
        self.recent.events(now).cloned().collect()
    }
}
