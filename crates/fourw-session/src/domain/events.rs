//! Domain events for the game session.
//!
//! These are the notifications the core sends to the presentation shell.

use fourw_catalog::domain::item::CatalogItem;
use fourw_catalog::domain::traversal::Traversal;
use fourw_core::category::Category;
use fourw_core::event::{DomainEvent, EventMetadata};
use fourw_round::options::AnswerOption;
use fourw_round::score::ScoreResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::summary::SessionSummary;

/// Emitted when a session starts or restarts with fresh totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStarted {
    /// The session identifier.
    pub session_id: Uuid,
    /// Fingerprint of the catalog being played.
    pub catalog_fingerprint: String,
    /// Scenarios plus stories in the catalog.
    pub total_items: usize,
    /// Configured play order.
    pub traversal: Traversal,
}

/// Emitted when a round is ready to be played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReady {
    /// The session identifier.
    pub session_id: Uuid,
    /// Play position of this round (equals the number of rounds submitted).
    pub round_index: usize,
    /// The scenario or story to answer.
    pub item: CatalogItem,
    /// The shuffled option pool.
    pub options: Vec<AnswerOption>,
}

/// Emitted when a submission is refused because slots are empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitRejected {
    /// The session identifier.
    pub session_id: Uuid,
    /// Play position of the round.
    pub round_index: usize,
    /// The empty categories.
    pub missing: Vec<Category>,
    /// Message for the player.
    pub reason: String,
}

/// Emitted when a round has been scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundScored {
    /// The session identifier.
    pub session_id: Uuid,
    /// Play position of the round.
    pub round_index: usize,
    /// Per-category outcome.
    pub result: ScoreResult,
    /// Cumulative score after this round.
    pub score: u32,
    /// Rounds submitted including this one.
    pub round_count: u32,
}

/// Emitted when the game is over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEnded {
    /// The session identifier.
    pub session_id: Uuid,
    /// Final totals.
    pub summary: SessionSummary,
}

/// Event type identifier for [`SessionStarted`].
pub const SESSION_STARTED_EVENT_TYPE: &str = "session.started";

/// Event type identifier for [`RoundReady`].
pub const ROUND_READY_EVENT_TYPE: &str = "session.round_ready";

/// Event type identifier for [`SubmitRejected`].
pub const SUBMIT_REJECTED_EVENT_TYPE: &str = "session.submit_rejected";

/// Event type identifier for [`RoundScored`].
pub const ROUND_SCORED_EVENT_TYPE: &str = "session.round_scored";

/// Event type identifier for [`SessionEnded`].
pub const SESSION_ENDED_EVENT_TYPE: &str = "session.ended";

/// Event payload variants for the game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEventKind {
    /// A session has started.
    SessionStarted(SessionStarted),
    /// A round is ready.
    RoundReady(RoundReady),
    /// A submission was refused.
    SubmitRejected(SubmitRejected),
    /// A round was scored.
    RoundScored(RoundScored),
    /// The session ended.
    SessionEnded(SessionEnded),
}

impl SessionEventKind {
    /// Event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            SessionEventKind::SessionStarted(_) => SESSION_STARTED_EVENT_TYPE,
            SessionEventKind::RoundReady(_) => ROUND_READY_EVENT_TYPE,
            SessionEventKind::SubmitRejected(_) => SUBMIT_REJECTED_EVENT_TYPE,
            SessionEventKind::RoundScored(_) => ROUND_SCORED_EVENT_TYPE,
            SessionEventKind::SessionEnded(_) => SESSION_ENDED_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for the game session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: SessionEventKind,
}

impl DomainEvent for SessionEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("SessionEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
