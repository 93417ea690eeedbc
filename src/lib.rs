//! Spoken-form normalization for an Indonesian TTS front end.
//!
//! An upstream tokenizer classifies each written token (digit string,
//! fraction, telephone number, clock time, URL/handle, symbol run) and
//! hands `(token, class)` pairs to this crate; the matching converter
//! spells the token out as Indonesian words for the downstream
//! grapheme-to-phoneme stage. Each converter is a process-wide singleton
//! built once over compiled-in tables, and conversion itself is pure, so
//! callers may fan tokens out across threads freely.

pub mod converter;
pub mod normalizer;
mod trace_init;

pub use normalizer::{NormalizeError, Normalizer, TokenClass};
pub use trace_init::init_tracing;
