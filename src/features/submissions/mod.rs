mod error;

pub mod models;
pub mod services;

pub use error::SubmissionError;
pub use models::AttemptPhase;
pub use services::SubmissionPipeline;
