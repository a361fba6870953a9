//! Callbacks from the core to the embedding UI shell.

use fourw_catalog::domain::item::CatalogItem;
use fourw_round::options::AnswerOption;
use fourw_round::score::ScoreResult;

use crate::domain::summary::SessionSummary;

/// Receiver for everything the player needs to see.
///
/// Any concrete UI (native drag events, a sortable widget, touch gestures, a
/// terminal) implements this and translates user actions into session
/// commands.
pub trait Presentation: Send {
    /// A round is ready: render `item.text` and the draggable `options`.
    fn on_round_ready(&mut self, item: &CatalogItem, options: &[AnswerOption]);

    /// A submission was refused; state is unchanged.
    fn on_submit_rejected(&mut self, reason: &str);

    /// A round was scored.
    fn on_round_scored(&mut self, result: &ScoreResult);

    /// The game is over.
    fn on_session_ended(&mut self, summary: &SessionSummary);

    /// The catalog could not be loaded; no round will start.
    fn on_load_failed(&mut self, reason: &str);
}
