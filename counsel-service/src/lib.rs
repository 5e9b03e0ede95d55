//! counsel-service: stateless HTTP backend for the Easyskill career survey.
//!
//! Two POST endpoints proxy the caller-supplied profile and Q&A history to
//! Gemini: one returns the next structured interview question, the other the
//! final counseling report. The server keeps no state between requests.
pub mod config;
pub mod dtos;
pub mod handlers;
pub mod prompts;
pub mod services;
pub mod startup;
pub mod utils;
