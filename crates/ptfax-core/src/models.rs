pub mod clinician;
pub mod measurement;
pub mod patient;
pub mod report;
