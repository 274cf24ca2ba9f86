//! haven-core
//!
//! Pure domain types for the intake assessment: phases, scripted questions,
//! extracted answer values, assessment state, and conversation history.
//! No I/O and no model dependency. This is the shared vocabulary of the
//! Haven intake system.

pub mod error;
pub mod models;
