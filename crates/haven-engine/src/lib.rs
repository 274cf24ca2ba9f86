//! haven-engine
//!
//! The structured intake engine. A fixed script of seven questions is asked
//! in order; each free-text answer is turned into a structured value,
//! checked for crisis indicators, and stored. The finished assessment is
//! scored by `haven-instruments`.
//!
//! [`controller::ConversationController`] is the entry point. Everything it
//! composes is usable on its own:
//!
//! - [`sequencer`]: the question table and phase transitions
//! - [`extract`]: free text to [`haven_core::models::answer::FieldValue`]
//! - [`crisis`]: keyword and crisis-screen checks
//! - [`reply`]: fixed reply texts and streamed delivery

pub mod config;
pub mod controller;
pub mod crisis;
pub mod error;
pub mod extract;
pub mod reply;
pub mod sequencer;
