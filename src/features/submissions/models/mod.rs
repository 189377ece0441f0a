mod attempt;

pub use attempt::{AttemptPhase, PhaseCell};
