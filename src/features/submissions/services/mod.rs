mod submission_pipeline;

pub use submission_pipeline::SubmissionPipeline;
