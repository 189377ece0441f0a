mod capture_coordinator;

pub use capture_coordinator::CaptureCoordinator;
