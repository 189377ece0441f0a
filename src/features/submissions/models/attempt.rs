use std::sync::atomic::{AtomicU8, Ordering};

/// Where a submission attempt currently is.
///
/// `Idle → Capturing → Uploading → Registering → {Succeeded | Failed}`.
/// Both terminal phases stay visible until the next attempt starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AttemptPhase {
    Idle = 0,
    Capturing = 1,
    Uploading = 2,
    Registering = 3,
    Succeeded = 4,
    Failed = 5,
}

impl AttemptPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, AttemptPhase::Succeeded | AttemptPhase::Failed)
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => AttemptPhase::Capturing,
            2 => AttemptPhase::Uploading,
            3 => AttemptPhase::Registering,
            4 => AttemptPhase::Succeeded,
            5 => AttemptPhase::Failed,
            _ => AttemptPhase::Idle,
        }
    }
}

impl std::fmt::Display for AttemptPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttemptPhase::Idle => write!(f, "idle"),
            AttemptPhase::Capturing => write!(f, "capturing"),
            AttemptPhase::Uploading => write!(f, "uploading"),
            AttemptPhase::Registering => write!(f, "registering"),
            AttemptPhase::Succeeded => write!(f, "succeeded"),
            AttemptPhase::Failed => write!(f, "failed"),
        }
    }
}

/// Phase indicator readable while an attempt is suspended
#[derive(Debug, Default)]
pub struct PhaseCell(AtomicU8);

impl PhaseCell {
    pub fn get(&self) -> AttemptPhase {
        AttemptPhase::from_u8(self.0.load(Ordering::Acquire))
    }

    pub fn set(&self, phase: AttemptPhase) {
        self.0.store(phase as u8, Ordering::Release);
    }
}
