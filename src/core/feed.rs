//! Push-based event source.
//!
//! Subscribers register per group and receive the complete current event
//! set of that group every time it changes, never a diff.

use crate::models::event::Event;

pub type SubscriptionId = usize;

type Callback<'a> = Box<dyn FnMut(&[Event]) + 'a>;

struct Subscription<'a> {
    id: SubscriptionId,
    group_id: String,
    callback: Callback<'a>,
}

#[derive(Default)]
pub struct EventFeed<'a> {
    next_id: SubscriptionId,
    subscriptions: Vec<Subscription<'a>>,
}

impl<'a> EventFeed<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, group_id: &str, callback: F) -> SubscriptionId
    where
        F: FnMut(&[Event]) + 'a,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            group_id: group_id.to_string(),
            callback: Box::new(callback),
        });
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// Deliver `events` (the full set of `group_id`) to the group's
    /// subscribers, in subscription order.
    pub fn publish(&mut self, group_id: &str, events: &[Event]) {
        for sub in self
            .subscriptions
            .iter_mut()
            .filter(|s| s.group_id == group_id)
        {
            (sub.callback)(events);
        }
    }

    pub fn subscriber_count(&self, group_id: &str) -> usize {
        self.subscriptions
            .iter()
            .filter(|s| s.group_id == group_id)
            .count()
    }
}
