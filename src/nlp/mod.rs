//! Lexical collaborator adapters.
//!
//! Built-in implementations of the collaborator traits in
//! [`crate::pipeline::traits`], each a thin wrapper over an established
//! text library. Every adapter is swappable through the pipeline builder.

pub mod contractions;
pub mod lemma;
pub mod markup;
pub mod spelling;
pub mod stemming;
pub mod stopwords;
pub mod symbols;
pub mod translit;
