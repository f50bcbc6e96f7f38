/// Lifecycle of a single `run` call.
///
/// `Unstarted -> Validating -> Running -> Aggregating -> Completed`, or
/// `Validating -> Rejected` when the config or transports are unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    #[default]
    Unstarted,
    Validating,
    Running,
    Aggregating,
    Completed,
    Rejected,
}

impl RunPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RunPhase::Unstarted => "unstarted",
            RunPhase::Validating => "validating",
            RunPhase::Running => "running",
            RunPhase::Aggregating => "aggregating",
            RunPhase::Completed => "completed",
            RunPhase::Rejected => "rejected",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, RunPhase::Completed | RunPhase::Rejected)
    }
}
