//! Aggregate root abstraction.

use uuid::Uuid;

use crate::event::DomainEvent;

/// Trait for aggregates that record every state transition as an event.
///
/// Domain methods validate, build an event, and `apply` it immediately; the
/// event is then kept as uncommitted until the application layer takes it
/// and forwards it to the presentation shell.
pub trait AggregateRoot: Send + Sync {
    /// The event type this aggregate produces and consumes.
    type Event: DomainEvent;

    /// Returns the aggregate identifier.
    fn aggregate_id(&self) -> Uuid;

    /// Returns the current version (number of events applied).
    fn version(&self) -> i64;

    /// Apply an event to mutate internal state.
    fn apply(&mut self, event: &Self::Event);

    /// Returns events produced since the last `take_uncommitted_events`.
    fn uncommitted_events(&self) -> &[Self::Event];

    /// Drains the uncommitted events for dispatch.
    fn take_uncommitted_events(&mut self) -> Vec<Self::Event>;
}
