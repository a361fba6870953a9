//! Command abstractions.

use uuid::Uuid;

/// Trait implemented by every action the presentation shell sends to the core.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Stable command name, used as a logging field.
    fn command_type(&self) -> &'static str;

    /// Correlation ID linking the command to the events it produces.
    fn correlation_id(&self) -> Uuid;
}
