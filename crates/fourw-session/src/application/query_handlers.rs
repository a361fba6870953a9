//! Query handlers for the game session.
//!
//! Read-only views a shell can render or serialize without touching the
//! aggregate.

use std::collections::BTreeMap;

use fourw_core::aggregate::AggregateRoot;
use fourw_core::category::Category;
use fourw_round::options::AnswerOption;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::aggregates::{GameSession, SessionPhase};
use crate::domain::summary::SessionSummary;

/// Read-only view of the active round.
#[derive(Debug, Serialize)]
pub struct RoundView {
    /// Play position of the round.
    pub round_index: usize,
    /// Identifier of the scenario or story.
    pub item_id: String,
    /// Prompt shown to the player.
    pub text: String,
    /// Options not placed in any slot, in pool order.
    pub available: Vec<AnswerOption>,
    /// Options currently placed, by category.
    pub slots: BTreeMap<Category, AnswerOption>,
}

/// Read-only view of a game session.
#[derive(Debug, Serialize)]
pub struct SessionView {
    /// The session identifier.
    pub session_id: Uuid,
    /// Current phase.
    pub phase: SessionPhase,
    /// Cumulative score.
    pub score: u32,
    /// Rounds submitted.
    pub round_count: u32,
    /// Items in the catalog.
    pub total_items: usize,
    /// The active round, if any.
    pub round: Option<RoundView>,
    /// Totals so far, final once the session has ended.
    pub summary: SessionSummary,
    /// Current version (event count).
    pub version: i64,
}

/// Builds the read-only view of `session`.
#[must_use]
pub fn view_session(session: &GameSession) -> SessionView {
    let round = session.current_round().map(|round| RoundView {
        round_index: session.cursor(),
        item_id: round.item().id.clone(),
        text: round.item().text.clone(),
        available: round.available().into_iter().cloned().collect(),
        slots: round.slots().snapshot().clone(),
    });

    SessionView {
        session_id: session.id,
        phase: session.phase(),
        score: session.score(),
        round_count: session.round_count(),
        total_items: session.catalog().total_count(),
        round,
        summary: session.summary(),
        version: session.version(),
    }
}
