pub mod analyzer;
pub mod confidence;
pub mod decision;
pub mod indicators;
pub mod parser;
pub mod perception;
pub mod prompts;
pub mod reporting;

#[cfg(test)]
mod confidence_tests;
#[cfg(test)]
mod parser_tests;
