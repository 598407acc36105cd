//! State-change subject and observer registry.
//!
//! A [`Subject`] holds an integer state and a registry of observers to be
//! notified whenever the state changes. Observers are owned by the caller
//! and handed to the registry as [`ObserverRef`] handles; the registry only
//! keeps weak links, so dropping an observer on the owning side is enough
//! to retire it from future notification passes.
//!
//! # Notification order
//!
//! Observers are notified newest-registration-first: after registering A,
//! then B, then C, a state change notifies C, B, A. This ordering is part
//! of the contract and covered by tests, not an implementation accident.
//!
//! # Mutation during a pass
//!
//! Each pass snapshots the live observers before invoking any of them, so
//! registrations added or removed while the pass runs can never corrupt
//! traversal. An observer added mid-pass is first visited by the *next*
//! pass. Code that shares a `Subject` behind a `RefCell` must not call back
//! into it from inside [`Observer::notify`] — the nested mutable borrow
//! panics. Queue such changes and apply them after `set_state` returns.

use log::debug;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A listener that can be registered with a [`Subject`].
///
/// Contract
/// - `notify` is called synchronously during a notification pass with the
///   value passed to the [`Subject::set_state`] call that started the pass.
/// - Implementations must contain their own failures (log them, count
///   them) and always return normally; the pass has no recovery semantics
///   for a panicking observer.
/// - `notify` must not reach back into the notifying `Subject`; defer any
///   add/remove until the pass has returned.
pub trait Observer {
    /// React to the subject's state changing to `value`.
    fn notify(&mut self, value: i32);
}

/// Shared handle to an observer, owned by the caller.
///
/// The same handle is used to register with and deregister from a
/// [`Subject`], and may be registered with several subjects at once.
pub type ObserverRef = Rc<RefCell<dyn Observer>>;

/// Wrap a concrete observer into an [`ObserverRef`] handle.
pub fn observer_ref<O: Observer + 'static>(observer: O) -> ObserverRef {
    Rc::new(RefCell::new(observer))
}

/// One registry entry. Holds a weak link only: the registry never owns the
/// observer or keeps it alive.
#[derive(Debug)]
struct Registration {
    observer: Weak<RefCell<dyn Observer>>,
}

/// Integer-state subject with an observer registry.
///
/// State starts at 0. Registering, removing and notifying are all
/// synchronous; see the module docs for ordering and reentrancy rules.
pub struct Subject {
    /// Registrations in registration order, oldest first. Passes traverse
    /// in reverse so the newest registration is notified first.
    registrations: Vec<Registration>,
    /// Current state value.
    state: i32,
}

impl Default for Subject {
    fn default() -> Self {
        Self::new()
    }
}

impl Subject {
    /// Create an empty subject with state 0.
    pub fn new() -> Self {
        Self {
            registrations: Vec::new(),
            state: 0,
        }
    }

    /// Register `observer`. O(1).
    ///
    /// No deduplication: registering the same handle twice produces two
    /// registrations and two notifications per pass. A registration made
    /// while a pass is running is not visited by that pass.
    pub fn add_observer(&mut self, observer: &ObserverRef) {
        self.registrations.push(Registration {
            observer: Rc::downgrade(observer),
        });
        debug!(
            "observer registered, registry size is now {}",
            self.registrations.len()
        );
    }

    /// Deregister the first registration of `observer`, in notification
    /// order. Matching is by handle identity, not by value. O(n).
    ///
    /// Removing a handle that is not registered (including a second removal
    /// in a row) is a no-op, not an error.
    pub fn remove_observer(&mut self, observer: &ObserverRef) {
        let target = Rc::downgrade(observer);
        // Notification order is newest-first, so scan from the back.
        let found = self
            .registrations
            .iter()
            .rposition(|reg| Weak::ptr_eq(&reg.observer, &target));
        match found {
            Some(index) => {
                self.registrations.remove(index);
                debug!(
                    "observer removed, registry size is now {}",
                    self.registrations.len()
                );
            }
            None => {
                debug!("remove_observer: handle not registered, ignoring");
            }
        }
    }

    /// Store `value` as the current state and run a notification pass.
    /// Any value is accepted.
    pub fn set_state(&mut self, value: i32) {
        self.state = value;
        self.notify_observers();
    }

    /// Current state. Pure read.
    pub fn state(&self) -> i32 {
        self.state
    }

    /// Number of live registrations (dropped observers excluded).
    pub fn observer_count(&self) -> usize {
        self.registrations
            .iter()
            .filter(|reg| reg.observer.strong_count() > 0)
            .count()
    }

    /// Notify every live observer of the current state, newest
    /// registration first. An empty registry is a valid no-op.
    ///
    /// The live observers are snapshotted before any of them runs;
    /// registrations whose observer has been dropped by its owner are
    /// pruned here.
    pub fn notify_observers(&mut self) {
        let snapshot: SmallVec<[ObserverRef; 8]> = self
            .registrations
            .iter()
            .rev()
            .filter_map(|reg| reg.observer.upgrade())
            .collect();
        // The snapshot holds a strong ref to every live entry, so this only
        // drops registrations that were already dead at pass start.
        self.registrations
            .retain(|reg| reg.observer.strong_count() > 0);
        debug!(
            "notification pass: state={} observers={}",
            self.state,
            snapshot.len()
        );
        let state = self.state;
        for observer in snapshot {
            observer.borrow_mut().notify(state);
        }
    }
}

impl std::fmt::Debug for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subject")
            .field("state", &self.state)
            .field("registrations", &self.registrations.len())
            .finish()
    }
}
