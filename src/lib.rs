pub mod analyze;
pub mod card;
pub mod cli;
pub mod report;
pub mod scoring;
