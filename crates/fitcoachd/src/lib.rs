//! Fitcoach daemon library - exposes modules for testing.

pub mod config;
pub mod gemini;
pub mod pipeline;
pub mod prompts;
pub mod retry;
pub mod routes;
pub mod server;
