//! Commands the presentation shell sends to the game session.

use fourw_core::category::Category;
use fourw_core::command::Command;
use uuid::Uuid;

/// Command to fetch and parse the scenario catalog.
#[derive(Debug, Clone)]
pub struct LoadCatalog {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for LoadCatalog {
    fn command_type(&self) -> &'static str {
        "session.load_catalog"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to start a session from the first catalog item.
#[derive(Debug, Clone)]
pub struct StartSession {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for StartSession {
    fn command_type(&self) -> &'static str {
        "session.start"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to drop an option into a slot.
#[derive(Debug, Clone)]
pub struct PlaceAnswer {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Target slot.
    pub category: Category,
    /// The dragged option.
    pub option_id: usize,
}

impl Command for PlaceAnswer {
    fn command_type(&self) -> &'static str {
        "session.place_answer"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to empty a slot.
#[derive(Debug, Clone)]
pub struct ClearSlot {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Slot to empty.
    pub category: Category,
}

impl Command for ClearSlot {
    fn command_type(&self) -> &'static str {
        "session.clear_slot"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to submit the current round for scoring.
#[derive(Debug, Clone)]
pub struct SubmitRound {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for SubmitRound {
    fn command_type(&self) -> &'static str {
        "session.submit_round"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to move past a scored round.
#[derive(Debug, Clone)]
pub struct AdvanceRound {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for AdvanceRound {
    fn command_type(&self) -> &'static str {
        "session.advance_round"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to discard all progress and start over.
#[derive(Debug, Clone)]
pub struct ResetSession {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for ResetSession {
    fn command_type(&self) -> &'static str {
        "session.reset"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to end the game now.
#[derive(Debug, Clone)]
pub struct EndSession {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for EndSession {
    fn command_type(&self) -> &'static str {
        "session.end"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
