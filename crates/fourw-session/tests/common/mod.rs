//! Shared helpers for session integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use fourw_catalog::domain::catalog::Catalog;
use fourw_catalog::domain::item::CatalogItem;
use fourw_core::category::Category;
use fourw_round::options::AnswerOption;
use fourw_round::score::ScoreResult;
use fourw_session::application::command_handlers;
use fourw_session::domain::aggregates::GameSession;
use fourw_session::domain::commands::PlaceAnswer;
use fourw_session::domain::config::SessionConfig;
use fourw_session::domain::summary::SessionSummary;
use fourw_session::presentation::Presentation;
use uuid::Uuid;

/// Everything the core told the shell, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    RoundReady {
        item_id: String,
        options: Vec<AnswerOption>,
    },
    SubmitRejected(String),
    RoundScored(ScoreResult),
    SessionEnded(SessionSummary),
    LoadFailed(String),
}

/// A presentation shell that records every callback.
#[derive(Debug, Default)]
pub struct RecordingPresentation {
    pub shown: Vec<Shown>,
}

impl RecordingPresentation {
    /// The options of the most recent `on_round_ready`.
    pub fn last_options(&self) -> Vec<AnswerOption> {
        self.shown
            .iter()
            .rev()
            .find_map(|s| match s {
                Shown::RoundReady { options, .. } => Some(options.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }
}

impl Presentation for RecordingPresentation {
    fn on_round_ready(&mut self, item: &CatalogItem, options: &[AnswerOption]) {
        self.shown.push(Shown::RoundReady {
            item_id: item.id.clone(),
            options: options.to_vec(),
        });
    }

    fn on_submit_rejected(&mut self, reason: &str) {
        self.shown.push(Shown::SubmitRejected(reason.to_owned()));
    }

    fn on_round_scored(&mut self, result: &ScoreResult) {
        self.shown.push(Shown::RoundScored(result.clone()));
    }

    fn on_session_ended(&mut self, summary: &SessionSummary) {
        self.shown.push(Shown::SessionEnded(*summary));
    }

    fn on_load_failed(&mut self, reason: &str) {
        self.shown.push(Shown::LoadFailed(reason.to_owned()));
    }
}

/// An idle session over the JSON catalog `body`.
pub fn new_session(body: &str) -> GameSession {
    new_session_with(body, SessionConfig::default())
}

/// An idle session over the JSON catalog `body` with `config`.
pub fn new_session_with(body: &str, config: SessionConfig) -> GameSession {
    let catalog = Arc::new(Catalog::from_json(body).unwrap());
    GameSession::new(Uuid::new_v4(), catalog, config)
}

/// Drags the option showing `text` into `category`, like a shell would.
pub fn drag(session: &mut GameSession, category: Category, text: &str) -> Option<AnswerOption> {
    let option_id = session
        .current_round()
        .unwrap()
        .available()
        .iter()
        .find(|o| o.text == text)
        .unwrap_or_else(|| panic!("no available option {text:?}"))
        .option_id;
    command_handlers::handle_place_answer(
        &PlaceAnswer {
            correlation_id: Uuid::new_v4(),
            category,
            option_id,
        },
        session,
    )
    .unwrap()
}

/// Fills every slot of the current round; categories in `wrong` get their
/// first distractor instead of the correct answer.
pub fn answer(session: &mut GameSession, wrong: &[Category]) {
    let item = session.current_item().unwrap().clone();
    for category in Category::ALL {
        let text = if wrong.contains(&category) {
            item.distractors(category)[0].clone()
        } else {
            item.answers.get(category).to_owned()
        };
        drag(session, category, &text);
    }
}
