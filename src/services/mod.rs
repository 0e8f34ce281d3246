pub mod advisor;
pub mod prompt;
pub mod report;

#[cfg(test)]
mod report_tests;
