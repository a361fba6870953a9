//! Aggregate root for the game session.

use std::fmt;
use std::sync::Arc;

use fourw_catalog::domain::catalog::Catalog;
use fourw_catalog::domain::item::CatalogItem;
use fourw_core::aggregate::AggregateRoot;
use fourw_core::category::Category;
use fourw_core::clock::Clock;
use fourw_core::error::QuizError;
use fourw_core::event::EventMetadata;
use fourw_core::rng::DeterministicRng;
use fourw_round::engine::RoundEngine;
use fourw_round::options::AnswerOption;
use fourw_round::score::ScoreResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::config::SessionConfig;
use super::events::{
    RoundReady, RoundScored, SessionEnded, SessionEvent, SessionEventKind, SessionStarted,
    SubmitRejected,
};
use super::summary::SessionSummary;

/// Session phase state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Created, no round yet.
    Idle,
    /// A round is being answered.
    InRound,
    /// The current round was scored; waiting for `advance`.
    RoundComplete,
    /// Game over.
    Ended,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The aggregate root for one play session.
#[derive(Debug)]
pub struct GameSession {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    /// The catalog being played.
    catalog: Arc<Catalog>,
    /// Shell-provided tunables.
    config: SessionConfig,
    /// Current phase.
    pub(crate) phase: SessionPhase,
    /// Cumulative score.
    pub(crate) score: u32,
    /// Rounds submitted.
    pub(crate) round_count: u32,
    /// Play position of the current round.
    pub(crate) cursor: usize,
    /// The active round (set after `RoundReady`).
    pub(crate) round: Option<RoundEngine>,
    /// Final totals (set after `SessionEnded`).
    pub(crate) summary: Option<SessionSummary>,
    /// Events not yet forwarded to the presentation shell.
    uncommitted_events: Vec<SessionEvent>,
}

impl GameSession {
    /// Creates an idle session over `catalog`.
    #[must_use]
    pub fn new(id: Uuid, catalog: Arc<Catalog>, config: SessionConfig) -> Self {
        Self {
            id,
            version: 0,
            catalog,
            config,
            phase: SessionPhase::Idle,
            score: 0,
            round_count: 0,
            cursor: 0,
            round: None,
            summary: None,
            uncommitted_events: Vec::new(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Cumulative score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Rounds submitted so far.
    #[must_use]
    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    /// Play position of the current (or last) round.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The active round, if one is in progress or just scored.
    #[must_use]
    pub fn current_round(&self) -> Option<&RoundEngine> {
        self.round.as_ref()
    }

    /// The item of the active round.
    #[must_use]
    pub fn current_item(&self) -> Option<&CatalogItem> {
        self.round.as_ref().map(RoundEngine::item)
    }

    /// The catalog being played.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Final totals once ended, otherwise the totals accrued so far.
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        self.summary
            .unwrap_or_else(|| SessionSummary::new(self.round_count, self.score))
    }

    fn require_phase(&self, expected: SessionPhase) -> Result<(), QuizError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(QuizError::Validation(format!(
                "session must be in {expected} phase, found {}",
                self.phase
            )))
        }
    }

    fn active_round_mut(&mut self) -> Result<&mut RoundEngine, QuizError> {
        self.require_phase(SessionPhase::InRound)?;
        self.round
            .as_mut()
            .ok_or_else(|| QuizError::Validation("no round in progress".to_owned()))
    }

    /// Builds an event, applies it, and queues it for the shell.
    fn record(&mut self, kind: SessionEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = SessionEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: kind.event_type().to_owned(),
                aggregate_id: self.id,
                sequence_number: self.version + 1,
                correlation_id,
                occurred_at: clock.now(),
            },
            kind,
        };
        self.apply(&event);
        self.uncommitted_events.push(event);
    }

    /// Starts the session at the first catalog item, producing
    /// `SessionStarted` followed by `RoundReady` (or `SessionEnded` for an
    /// empty catalog).
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Validation` if not in `Idle` phase.
    pub fn start(
        &mut self,
        correlation_id: Uuid,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Result<(), QuizError> {
        self.require_phase(SessionPhase::Idle)?;
        self.begin_session(correlation_id, clock, rng);
        Ok(())
    }

    /// Discards all progress from any phase and starts again at the first
    /// catalog item.
    pub fn reset(&mut self, correlation_id: Uuid, clock: &dyn Clock, rng: &mut dyn DeterministicRng) {
        self.begin_session(correlation_id, clock, rng);
    }

    fn begin_session(
        &mut self,
        correlation_id: Uuid,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) {
        let started = SessionStarted {
            session_id: self.id,
            catalog_fingerprint: self.catalog.fingerprint().to_owned(),
            total_items: self.catalog.total_count(),
            traversal: self.config.traversal,
        };
        self.record(SessionEventKind::SessionStarted(started), correlation_id, clock);
        self.begin_round(0, correlation_id, clock, rng);
    }

    fn begin_round(
        &mut self,
        cursor: usize,
        correlation_id: Uuid,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) {
        let ready = self
            .catalog
            .position(cursor, self.config.traversal)
            .map(|item| {
                let round = RoundEngine::start_round(item.clone(), rng);
                RoundReady {
                    session_id: self.id,
                    round_index: cursor,
                    item: round.item().clone(),
                    options: round.options().to_vec(),
                }
            });

        match ready {
            Some(ready) => self.record(SessionEventKind::RoundReady(ready), correlation_id, clock),
            None => self.finish(correlation_id, clock),
        }
    }

    fn finish(&mut self, correlation_id: Uuid, clock: &dyn Clock) {
        let ended = SessionEnded {
            session_id: self.id,
            summary: SessionSummary::new(self.round_count, self.score),
        };
        self.record(SessionEventKind::SessionEnded(ended), correlation_id, clock);
    }

    /// Places option `option_id` into `category` of the active round and
    /// returns the evicted option, if any.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Validation` if no round is in progress or the
    /// option is not part of it.
    pub fn place_answer(
        &mut self,
        category: Category,
        option_id: usize,
    ) -> Result<Option<AnswerOption>, QuizError> {
        self.active_round_mut()?.place(category, option_id)
    }

    /// Empties `category` of the active round.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Validation` if no round is in progress.
    pub fn clear_slot(&mut self, category: Category) -> Result<Option<AnswerOption>, QuizError> {
        Ok(self.active_round_mut()?.clear(category))
    }

    /// Scores the active round, producing `RoundScored`.
    ///
    /// An incomplete submission produces `SubmitRejected` instead and leaves
    /// score and round count untouched.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::IncompleteAnswer` if a slot is empty, or
    /// `QuizError::Validation` if not in `InRound` phase.
    pub fn submit_current(
        &mut self,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<ScoreResult, QuizError> {
        let outcome = self.active_round_mut()?.submit();

        match outcome {
            Ok(result) => {
                let scored = RoundScored {
                    session_id: self.id,
                    round_index: self.cursor,
                    result: result.clone(),
                    score: self.score + result.correct_count,
                    round_count: self.round_count + 1,
                };
                self.record(SessionEventKind::RoundScored(scored), correlation_id, clock);
                Ok(result)
            }
            Err(QuizError::IncompleteAnswer { missing }) => {
                let err = QuizError::IncompleteAnswer {
                    missing: missing.clone(),
                };
                let rejected = SubmitRejected {
                    session_id: self.id,
                    round_index: self.cursor,
                    missing,
                    reason: err.to_string(),
                };
                self.record(SessionEventKind::SubmitRejected(rejected), correlation_id, clock);
                Err(err)
            }
            Err(other) => Err(other),
        }
    }

    /// Moves past a scored round: the next item becomes the active round, or
    /// the session ends when the catalog is exhausted.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Validation` if not in `RoundComplete` phase.
    pub fn advance(
        &mut self,
        correlation_id: Uuid,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Result<(), QuizError> {
        self.require_phase(SessionPhase::RoundComplete)?;
        let next = self.round_count as usize;
        self.begin_round(next, correlation_id, clock, rng);
        Ok(())
    }

    /// Ends the session immediately from any phase with the totals accrued
    /// so far. An unsubmitted round does not count.
    pub fn end(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> SessionSummary {
        self.finish(correlation_id, clock);
        self.summary()
    }
}

impl AggregateRoot for GameSession {
    type Event = SessionEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            SessionEventKind::SessionStarted(_) => {
                self.phase = SessionPhase::Idle;
                self.score = 0;
                self.round_count = 0;
                self.cursor = 0;
                self.round = None;
                self.summary = None;
            }
            SessionEventKind::RoundReady(payload) => {
                self.phase = SessionPhase::InRound;
                self.cursor = payload.round_index;
                match self.round.as_mut() {
                    Some(round) => {
                        round.load_round(payload.item.clone(), payload.options.clone());
                    }
                    None => {
                        self.round = Some(RoundEngine::with_pool(
                            payload.item.clone(),
                            payload.options.clone(),
                        ));
                    }
                }
            }
            SessionEventKind::SubmitRejected(_) => {}
            SessionEventKind::RoundScored(payload) => {
                self.phase = SessionPhase::RoundComplete;
                self.score = payload.score;
                self.round_count = payload.round_count;
            }
            SessionEventKind::SessionEnded(payload) => {
                self.phase = SessionPhase::Ended;
                self.round = None;
                self.summary = Some(payload.summary);
            }
        }
        self.version += 1;
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn take_uncommitted_events(&mut self) -> Vec<Self::Event> {
        std::mem::take(&mut self.uncommitted_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fourw_core::event::DomainEvent;
    use fourw_test_support::{MockRng, SequenceRng, fixed_clock, fixtures};

    use crate::domain::events::{
        ROUND_READY_EVENT_TYPE, ROUND_SCORED_EVENT_TYPE, SESSION_ENDED_EVENT_TYPE,
        SESSION_STARTED_EVENT_TYPE, SUBMIT_REJECTED_EVENT_TYPE,
    };

    fn session(body: &str) -> GameSession {
        session_with(body, SessionConfig::default())
    }

    fn session_with(body: &str, config: SessionConfig) -> GameSession {
        let catalog = Arc::new(Catalog::from_json(body).unwrap());
        GameSession::new(Uuid::new_v4(), catalog, config)
    }

    fn started(body: &str) -> GameSession {
        let mut game = session(body);
        game.start(Uuid::new_v4(), &fixed_clock(), &mut MockRng).unwrap();
        game.take_uncommitted_events();
        game
    }

    fn option_id(game: &GameSession, text: &str) -> usize {
        game.current_round()
            .unwrap()
            .options()
            .iter()
            .find(|o| o.text == text)
            .unwrap()
            .option_id
    }

    /// Places the correct answer in every slot, or a distractor where
    /// `wrong` names the category.
    fn answer(game: &mut GameSession, wrong: &[Category]) {
        let item = game.current_item().unwrap().clone();
        for category in Category::ALL {
            let text = if wrong.contains(&category) {
                item.distractors(category)[0].clone()
            } else {
                item.answers.get(category).to_owned()
            };
            let id = option_id(game, &text);
            game.place_answer(category, id).unwrap();
        }
    }

    fn event_types(events: &[SessionEvent]) -> Vec<&'static str> {
        events.iter().map(DomainEvent::event_type).collect()
    }

    // --- start ---

    #[test]
    fn test_start_produces_started_and_round_ready() {
        let mut game = session(&fixtures::two_scenarios_json());
        let correlation_id = Uuid::new_v4();

        game.start(correlation_id, &fixed_clock(), &mut MockRng).unwrap();

        let events = game.uncommitted_events();
        assert_eq!(
            event_types(events),
            [SESSION_STARTED_EVENT_TYPE, ROUND_READY_EVENT_TYPE]
        );
        assert_eq!(events[0].metadata().sequence_number, 1);
        assert_eq!(events[1].metadata().sequence_number, 2);
        assert_eq!(events[1].metadata().correlation_id, correlation_id);
        assert_eq!(events[1].metadata().occurred_at, fixed_clock().0);

        assert_eq!(game.phase(), SessionPhase::InRound);
        assert_eq!(game.score(), 0);
        assert_eq!(game.round_count(), 0);
        assert_eq!(game.current_item().unwrap().id, "1");
        assert_eq!(game.version(), 2);
    }

    #[test]
    fn test_start_outside_idle_returns_error() {
        let mut game = started(&fixtures::two_scenarios_json());

        let result = game.start(Uuid::new_v4(), &fixed_clock(), &mut MockRng);

        match result.unwrap_err() {
            QuizError::Validation(msg) => {
                assert_eq!(msg, "session must be in Idle phase, found InRound");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_start_with_empty_catalog_ends_immediately() {
        let mut game = session(&fixtures::catalog_json(0, 0));

        game.start(Uuid::new_v4(), &fixed_clock(), &mut MockRng).unwrap();

        assert_eq!(
            event_types(game.uncommitted_events()),
            [SESSION_STARTED_EVENT_TYPE, SESSION_ENDED_EVENT_TYPE]
        );
        assert_eq!(game.phase(), SessionPhase::Ended);
        assert_eq!(game.summary(), SessionSummary::new(0, 0));
    }

    #[test]
    fn test_round_ready_carries_shuffled_pool() {
        let mut game = session(&fixtures::catalog_json(0, 1));
        game.start(Uuid::new_v4(), &fixed_clock(), &mut MockRng)
            .unwrap();

        match &game.uncommitted_events()[1].kind {
            SessionEventKind::RoundReady(payload) => {
                assert_eq!(payload.round_index, 0);
                assert_eq!(payload.item.id, "story-1");
                let texts: Vec<&str> = payload.options.iter().map(|o| o.text.as_str()).collect();
                assert_eq!(
                    texts,
                    ["story what 1", "story when 1", "story why 1", "story who 1"]
                );
            }
            other => panic!("expected RoundReady, got {other:?}"),
        }
    }

    // --- place / clear ---

    #[test]
    fn test_place_answer_outside_round_returns_error() {
        let mut game = session(&fixtures::two_scenarios_json());
        assert!(matches!(
            game.place_answer(Category::Who, 0),
            Err(QuizError::Validation(_))
        ));
        assert!(matches!(
            game.clear_slot(Category::Who),
            Err(QuizError::Validation(_))
        ));
    }

    #[test]
    fn test_place_answer_returns_evicted_option() {
        let mut game = started(&fixtures::single_scenario_json());
        let first = option_id(&game, "wrong who 1a");
        let second = option_id(&game, "who 1");

        game.place_answer(Category::Who, first).unwrap();
        let evicted = game.place_answer(Category::Who, second).unwrap();

        assert_eq!(evicted.unwrap().option_id, first);
        let available = game.current_round().unwrap().available();
        assert_eq!(available.iter().filter(|o| o.option_id == first).count(), 1);
        assert!(game.uncommitted_events().is_empty());
    }

    #[test]
    fn test_clear_slot_returns_option() {
        let mut game = started(&fixtures::single_scenario_json());
        let id = option_id(&game, "why 1");
        game.place_answer(Category::Why, id).unwrap();

        let cleared = game.clear_slot(Category::Why).unwrap();

        assert_eq!(cleared.unwrap().option_id, id);
        assert!(game.clear_slot(Category::Why).unwrap().is_none());
    }

    // --- submit ---

    #[test]
    fn test_submit_incomplete_records_rejection_without_scoring() {
        let mut game = started(&fixtures::single_scenario_json());
        let id = option_id(&game, "who 1");
        game.place_answer(Category::Who, id).unwrap();

        let result = game.submit_current(Uuid::new_v4(), &fixed_clock());

        match result.unwrap_err() {
            QuizError::IncompleteAnswer { missing } => {
                assert_eq!(missing, [Category::What, Category::When, Category::Why]);
            }
            other => panic!("expected IncompleteAnswer, got {other:?}"),
        }
        assert_eq!(game.score(), 0);
        assert_eq!(game.round_count(), 0);
        assert_eq!(game.phase(), SessionPhase::InRound);

        let events = game.uncommitted_events();
        assert_eq!(event_types(events), [SUBMIT_REJECTED_EVENT_TYPE]);
        match &events[0].kind {
            SessionEventKind::SubmitRejected(payload) => {
                assert!(payload.reason.starts_with("please fill all answer slots"));
            }
            other => panic!("expected SubmitRejected, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_scores_and_completes_round() {
        let mut game = started(&fixtures::single_scenario_json());
        answer(&mut game, &[Category::What, Category::Why]);

        let result = game.submit_current(Uuid::new_v4(), &fixed_clock()).unwrap();

        assert_eq!(result.correct_count, 2);
        assert_eq!(game.score(), 2);
        assert_eq!(game.round_count(), 1);
        assert_eq!(game.phase(), SessionPhase::RoundComplete);
        assert_eq!(
            event_types(game.uncommitted_events()),
            [ROUND_SCORED_EVENT_TYPE]
        );
    }

    #[test]
    fn test_submit_twice_without_advance_returns_error() {
        let mut game = started(&fixtures::two_scenarios_json());
        answer(&mut game, &[]);
        game.submit_current(Uuid::new_v4(), &fixed_clock()).unwrap();

        let result = game.submit_current(Uuid::new_v4(), &fixed_clock());

        assert!(matches!(result, Err(QuizError::Validation(_))));
        assert_eq!(game.score(), 4);
        assert_eq!(game.round_count(), 1);
    }

    // --- advance ---

    #[test]
    fn test_advance_loads_next_item() {
        let mut game = started(&fixtures::catalog_json(1, 1));
        answer(&mut game, &[]);
        game.submit_current(Uuid::new_v4(), &fixed_clock()).unwrap();

        game.advance(Uuid::new_v4(), &fixed_clock(), &mut MockRng)
            .unwrap();

        assert_eq!(game.phase(), SessionPhase::InRound);
        assert_eq!(game.cursor(), 1);
        assert_eq!(game.current_item().unwrap().id, "story-1");
        let round = game.current_round().unwrap();
        assert!(round.slots().snapshot().is_empty());
        assert_eq!(round.available().len(), 4);
    }

    #[test]
    fn test_advance_in_round_returns_error() {
        let mut game = started(&fixtures::two_scenarios_json());
        let result = game.advance(Uuid::new_v4(), &fixed_clock(), &mut MockRng);
        assert!(matches!(result, Err(QuizError::Validation(_))));
    }

    #[test]
    fn test_advance_past_last_item_ends_session() {
        let mut game = started(&fixtures::single_scenario_json());
        answer(&mut game, &[]);
        game.submit_current(Uuid::new_v4(), &fixed_clock()).unwrap();

        game.advance(Uuid::new_v4(), &fixed_clock(), &mut MockRng)
            .unwrap();

        assert_eq!(game.phase(), SessionPhase::Ended);
        assert!(game.current_round().is_none());
        let summary = game.summary();
        assert_eq!(summary.round_count, 1);
        assert_eq!(summary.score, 4);
        assert!((summary.accuracy - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_cycle_stories_keeps_playing_after_last_story() {
        let config = SessionConfig {
            traversal: fourw_catalog::domain::traversal::Traversal::CycleStories,
        };
        let mut game = session_with(&fixtures::catalog_json(1, 1), config);
        game.start(Uuid::new_v4(), &fixed_clock(), &mut MockRng)
            .unwrap();

        for _ in 0..3 {
            answer(&mut game, &[]);
            game.submit_current(Uuid::new_v4(), &fixed_clock()).unwrap();
            game.advance(Uuid::new_v4(), &fixed_clock(), &mut MockRng)
                .unwrap();
        }

        assert_eq!(game.phase(), SessionPhase::InRound);
        assert_eq!(game.round_count(), 3);
        assert_eq!(game.current_item().unwrap().id, "story-1");
    }

    // --- reset / end ---

    #[test]
    fn test_reset_returns_to_first_round_with_zero_totals() {
        let mut game = started(&fixtures::two_scenarios_json());
        answer(&mut game, &[Category::Who]);
        game.submit_current(Uuid::new_v4(), &fixed_clock()).unwrap();
        game.advance(Uuid::new_v4(), &fixed_clock(), &mut MockRng)
            .unwrap();
        game.take_uncommitted_events();

        game.reset(Uuid::new_v4(), &fixed_clock(), &mut SequenceRng::new(vec![]));

        assert_eq!(game.score(), 0);
        assert_eq!(game.round_count(), 0);
        assert_eq!(game.cursor(), 0);
        assert_eq!(game.phase(), SessionPhase::InRound);
        assert_eq!(game.current_item().unwrap().id, "1");
        assert_eq!(
            event_types(game.uncommitted_events()),
            [SESSION_STARTED_EVENT_TYPE, ROUND_READY_EVENT_TYPE]
        );
    }

    #[test]
    fn test_reset_after_end_starts_new_game() {
        let mut game = started(&fixtures::single_scenario_json());
        game.end(Uuid::new_v4(), &fixed_clock());

        game.reset(Uuid::new_v4(), &fixed_clock(), &mut MockRng);

        assert_eq!(game.phase(), SessionPhase::InRound);
        assert_eq!(game.summary(), SessionSummary::new(0, 0));
    }

    #[test]
    fn test_end_mid_round_ignores_unsubmitted_answers() {
        let mut game = started(&fixtures::two_scenarios_json());
        answer(&mut game, &[]);
        game.submit_current(Uuid::new_v4(), &fixed_clock()).unwrap();
        game.advance(Uuid::new_v4(), &fixed_clock(), &mut MockRng)
            .unwrap();
        answer(&mut game, &[]);

        let summary = game.end(Uuid::new_v4(), &fixed_clock());

        assert_eq!(summary.round_count, 1);
        assert_eq!(summary.score, 4);
        assert_eq!(game.phase(), SessionPhase::Ended);
        assert!(matches!(
            game.place_answer(Category::Who, 0),
            Err(QuizError::Validation(_))
        ));
    }

    #[test]
    fn test_end_from_idle_reports_zero_accuracy() {
        let mut game = session(&fixtures::two_scenarios_json());

        let summary = game.end(Uuid::new_v4(), &fixed_clock());

        assert_eq!(summary, SessionSummary::new(0, 0));
        assert_eq!(
            event_types(game.uncommitted_events()),
            [SESSION_ENDED_EVENT_TYPE]
        );
    }

    #[test]
    fn test_take_uncommitted_events_drains_queue() {
        let mut game = session(&fixtures::two_scenarios_json());
        game.start(Uuid::new_v4(), &fixed_clock(), &mut MockRng)
            .unwrap();

        let taken = game.take_uncommitted_events();

        assert_eq!(taken.len(), 2);
        assert!(game.uncommitted_events().is_empty());
        assert_eq!(game.version(), 2);
    }

    #[test]
    fn test_apply_round_scored_updates_totals() {
        let mut game = started(&fixtures::single_scenario_json());
        let result = ScoreResult::from_outcomes(Vec::new());
        let event = SessionEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: ROUND_SCORED_EVENT_TYPE.to_owned(),
                aggregate_id: game.id,
                sequence_number: 3,
                correlation_id: Uuid::new_v4(),
                occurred_at: fixed_clock().0,
            },
            kind: SessionEventKind::RoundScored(RoundScored {
                session_id: game.id,
                round_index: 0,
                result,
                score: 3,
                round_count: 1,
            }),
        };

        game.apply(&event);

        assert_eq!(game.phase, SessionPhase::RoundComplete);
        assert_eq!(game.score, 3);
        assert_eq!(game.round_count, 1);
        assert_eq!(game.version, 3);
    }
}
