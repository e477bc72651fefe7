//! Request lifecycle shared by the login and dashboard flows.
//!
//! `Idle -> Requesting -> {Succeeded | Failed}`. Both outcomes are terminal:
//! there is no retry and no cancellation.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Requesting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    Send,
    Settle { success: bool },
}

impl Phase {
    /// Next phase for `event`, or `None` if the transition is not allowed.
    #[must_use]
    pub fn advance(self, event: PhaseEvent) -> Option<Phase> {
        match (self, event) {
            (Self::Idle, PhaseEvent::Send) => Some(Self::Requesting),
            (Self::Requesting, PhaseEvent::Settle { success: true }) => Some(Self::Succeeded),
            (Self::Requesting, PhaseEvent::Settle { success: false }) => Some(Self::Failed),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// Tracks one flow run and logs each transition under `name`.
#[derive(Debug)]
pub struct FlowTracker {
    name: &'static str,
    phase: Phase,
}

impl FlowTracker {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self { name, phase: Phase::Idle }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn send(&mut self) {
        self.apply(PhaseEvent::Send);
    }

    pub fn settle(&mut self, success: bool) {
        self.apply(PhaseEvent::Settle { success });
    }

    fn apply(&mut self, event: PhaseEvent) {
        match self.phase.advance(event) {
            Some(next) => {
                log::debug!("{}: {:?} -> {:?}", self.name, self.phase, next);
                self.phase = next;
            }
            None => log::warn!("{}: ignored {:?} in {:?}", self.name, event, self.phase),
        }
    }
}
