//! QEO card editor application layer.
//!
//! Owns the editing session, the export glue (file naming, `.vcf` and
//! JSON downloads), and the `qeo` command-line interface. Visual
//! rendering stays behind the [`session::QrRenderer`] collaborator trait.

pub mod cli;
pub mod export;
pub mod messages;
pub mod session;
