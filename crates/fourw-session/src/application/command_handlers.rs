//! Command handlers for the game session.
//!
//! Each handler runs one command against the session aggregate, then drains
//! the events it produced and forwards them to the presentation shell.

use std::sync::Arc;

use fourw_catalog::application::loader;
use fourw_catalog::domain::catalog::Catalog;
use fourw_core::aggregate::AggregateRoot;
use fourw_core::clock::Clock;
use fourw_core::command::Command;
use fourw_core::error::QuizError;
use fourw_core::event::DomainEvent;
use fourw_core::feed::CatalogFeed;
use fourw_core::rng::DeterministicRng;
use fourw_round::options::AnswerOption;
use tracing::{debug, info, instrument, warn};

use crate::domain::aggregates::GameSession;
use crate::domain::commands::{
    AdvanceRound, ClearSlot, EndSession, LoadCatalog, PlaceAnswer, ResetSession, StartSession,
    SubmitRound,
};
use crate::domain::events::{SessionEvent, SessionEventKind};
use crate::presentation::Presentation;

/// Drains the session's uncommitted events and forwards each to the shell.
fn publish(session: &mut GameSession, presentation: &mut dyn Presentation) -> Vec<SessionEvent> {
    let events = session.take_uncommitted_events();
    for event in &events {
        debug!(
            event_type = event.event_type(),
            sequence_number = event.metadata().sequence_number,
            payload = %event.to_payload(),
            "publishing session event"
        );
        match &event.kind {
            SessionEventKind::SessionStarted(_) => {}
            SessionEventKind::RoundReady(payload) => {
                presentation.on_round_ready(&payload.item, &payload.options);
            }
            SessionEventKind::SubmitRejected(payload) => {
                presentation.on_submit_rejected(&payload.reason);
            }
            SessionEventKind::RoundScored(payload) => {
                presentation.on_round_scored(&payload.result);
            }
            SessionEventKind::SessionEnded(payload) => {
                presentation.on_session_ended(&payload.summary);
            }
        }
    }
    events
}

/// Handles the `LoadCatalog` command: performs the one-shot feed fetch.
///
/// On failure the shell is told through `on_load_failed` before the error is
/// returned; there is no retry.
///
/// # Errors
///
/// Returns `QuizError::DataLoad` if the feed is unreachable or invalid.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id))]
pub async fn handle_load_catalog(
    command: &LoadCatalog,
    feed: &dyn CatalogFeed,
    presentation: &mut dyn Presentation,
) -> Result<Arc<Catalog>, QuizError> {
    info!(command_type = command.command_type(), "handling load_catalog command");

    match loader::load(feed).await {
        Ok(catalog) => Ok(Arc::new(catalog)),
        Err(err) => {
            presentation.on_load_failed(&err.to_string());
            Err(err)
        }
    }
}

/// Handles the `StartSession` command.
///
/// # Errors
///
/// Returns `QuizError::Validation` if the session was already started.
#[instrument(skip_all, fields(session_id = %session.id, correlation_id = %command.correlation_id))]
pub fn handle_start_session(
    command: &StartSession,
    session: &mut GameSession,
    clock: &dyn Clock,
    rng: &mut dyn DeterministicRng,
    presentation: &mut dyn Presentation,
) -> Result<Vec<SessionEvent>, QuizError> {
    info!(command_type = command.command_type(), "handling start_session command");

    session.start(command.correlation_id, clock, rng)?;
    Ok(publish(session, presentation))
}

/// Handles the `PlaceAnswer` command. Returns the option evicted from the
/// slot so the shell can put it back among the draggable options.
///
/// # Errors
///
/// Returns `QuizError::Validation` if no round is in progress or the option
/// is unknown.
#[instrument(skip_all, fields(session_id = %session.id, category = %command.category, option_id = command.option_id))]
pub fn handle_place_answer(
    command: &PlaceAnswer,
    session: &mut GameSession,
) -> Result<Option<AnswerOption>, QuizError> {
    debug!(command_type = command.command_type(), "handling place_answer command");
    session.place_answer(command.category, command.option_id)
}

/// Handles the `ClearSlot` command. Returns the option that was in the slot.
///
/// # Errors
///
/// Returns `QuizError::Validation` if no round is in progress.
#[instrument(skip_all, fields(session_id = %session.id, category = %command.category))]
pub fn handle_clear_slot(
    command: &ClearSlot,
    session: &mut GameSession,
) -> Result<Option<AnswerOption>, QuizError> {
    debug!(command_type = command.command_type(), "handling clear_slot command");
    session.clear_slot(command.category)
}

/// Handles the `SubmitRound` command.
///
/// A rejected submission is still published (`on_submit_rejected`) before
/// the error is returned.
///
/// # Errors
///
/// Returns `QuizError::IncompleteAnswer` if a slot is empty, or
/// `QuizError::Validation` if no round is in progress.
#[instrument(skip_all, fields(session_id = %session.id, correlation_id = %command.correlation_id))]
pub fn handle_submit_round(
    command: &SubmitRound,
    session: &mut GameSession,
    clock: &dyn Clock,
    presentation: &mut dyn Presentation,
) -> Result<Vec<SessionEvent>, QuizError> {
    info!(command_type = command.command_type(), "handling submit_round command");

    let outcome = session.submit_current(command.correlation_id, clock);
    let events = publish(session, presentation);

    match outcome {
        Ok(result) => {
            info!(
                correct_count = result.correct_count,
                perfect = result.is_perfect(),
                score = session.score(),
                round_count = session.round_count(),
                "round scored"
            );
            Ok(events)
        }
        Err(err) => {
            warn!(error = %err, "submission rejected");
            Err(err)
        }
    }
}

/// Handles the `AdvanceRound` command.
///
/// # Errors
///
/// Returns `QuizError::Validation` if the current round has not been scored.
#[instrument(skip_all, fields(session_id = %session.id, correlation_id = %command.correlation_id))]
pub fn handle_advance_round(
    command: &AdvanceRound,
    session: &mut GameSession,
    clock: &dyn Clock,
    rng: &mut dyn DeterministicRng,
    presentation: &mut dyn Presentation,
) -> Result<Vec<SessionEvent>, QuizError> {
    info!(command_type = command.command_type(), "handling advance_round command");

    session.advance(command.correlation_id, clock, rng)?;
    Ok(publish(session, presentation))
}

/// Handles the `ResetSession` command. Always succeeds.
#[instrument(skip_all, fields(session_id = %session.id, correlation_id = %command.correlation_id))]
pub fn handle_reset_session(
    command: &ResetSession,
    session: &mut GameSession,
    clock: &dyn Clock,
    rng: &mut dyn DeterministicRng,
    presentation: &mut dyn Presentation,
) -> Vec<SessionEvent> {
    info!(command_type = command.command_type(), "handling reset_session command");

    session.reset(command.correlation_id, clock, rng);
    publish(session, presentation)
}

/// Handles the `EndSession` command. Always succeeds.
#[instrument(skip_all, fields(session_id = %session.id, correlation_id = %command.correlation_id))]
pub fn handle_end_session(
    command: &EndSession,
    session: &mut GameSession,
    clock: &dyn Clock,
    presentation: &mut dyn Presentation,
) -> Vec<SessionEvent> {
    info!(command_type = command.command_type(), "handling end_session command");

    let summary = session.end(command.correlation_id, clock);
    info!(
        round_count = summary.round_count,
        score = summary.score,
        accuracy = summary.accuracy,
        "session ended"
    );
    publish(session, presentation)
}
