pub mod fixtures;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
