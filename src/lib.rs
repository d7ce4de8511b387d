pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod prompt;
pub mod scoring;
pub mod table;
