//! The per-session Institute → Class → Subject selection.
//!
//! All mutation goes through the setters below. Each setter computes the
//! fully cascaded next state first and only then commits it, so neither
//! subscribers nor readers ever observe a class without an institute or a
//! subject without a class. A rejected setter leaves the state untouched and
//! notifies nobody.

use std::fmt;
use tracing::{debug, warn};

use edunav_core::SelectionError;
use edunav_models::{Class, Institute, Selection, Subject};

/// Handle returned by [`SelectionContext::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Selection) + Send>;

#[derive(Default)]
pub struct SelectionContext {
    current: Selection,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl fmt::Debug for SelectionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionContext")
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl SelectionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick or clear the institute.
    ///
    /// Clearing, or switching to another institute, clears class and subject.
    pub fn set_institute(&mut self, institute: Option<Institute>) {
        let next = self.current.with_institute(institute);
        self.commit(next);
    }

    /// Pick or clear the class. Picking requires a selected institute.
    pub fn set_class(&mut self, class: Option<Class>) -> Result<(), SelectionError> {
        let next = self.current.with_class(class).inspect_err(|err| {
            warn!(error = %err, "Rejected class selection");
        })?;
        self.commit(next);
        Ok(())
    }

    /// Pick or clear the subject. Picking requires a selected class.
    pub fn set_subject(&mut self, subject: Option<Subject>) -> Result<(), SelectionError> {
        let next = self.current.with_subject(subject).inspect_err(|err| {
            warn!(error = %err, "Rejected subject selection");
        })?;
        self.commit(next);
        Ok(())
    }

    pub fn clear_all(&mut self) {
        self.commit(Selection::empty());
    }

    /// Owned copy of the current selection.
    pub fn snapshot(&self) -> Selection {
        self.current.clone()
    }

    pub fn current(&self) -> &Selection {
        &self.current
    }

    /// Register a callback run after every successful mutation, in
    /// subscription order.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&Selection) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    fn commit(&mut self, next: Selection) {
        self.current = next;
        debug!(depth = ?self.current.depth(), "Selection changed");
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.current);
        }
    }
}
