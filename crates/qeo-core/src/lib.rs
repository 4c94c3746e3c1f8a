//! QEO card editor core: the card model, the defaulting policy, and
//! shared configuration.
//!
//! The model is deliberately storage-shaped: every field is a raw string,
//! and empty strings are legitimate stored values. Placeholders and the
//! typed presentation vocabulary are applied at display/encode time only,
//! through the accessors in [`model`].

pub mod config;
pub mod constants;
pub mod error;
pub mod model;
