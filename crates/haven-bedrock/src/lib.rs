//! haven-bedrock
//!
//! Text generation for model-assisted answer extraction: the
//! [`generate::TextGenerator`] boundary, a Bedrock Converse implementation,
//! and helpers for pulling a JSON document out of a model reply.

pub mod converse;
pub mod error;
pub mod generate;
pub mod parse;
