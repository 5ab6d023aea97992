use std::fmt;

/// The two webhook forms InsightConnect issues for a workflow trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerUrlKind {
    /// `.../connect/v1/workflows/<id>/events/execute`
    EventsExecute,
    /// `.../connect/v1/execute/async/workflows/<id>`
    AsyncExecute,
}

impl fmt::Display for TriggerUrlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerUrlKind::EventsExecute => write!(f, "workflow events execute"),
            TriggerUrlKind::AsyncExecute => write!(f, "async workflow execute"),
        }
    }
}
