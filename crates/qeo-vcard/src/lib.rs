//! vCard 3.0 encoding for the QEO card editor.
//!
//! ## Overview
//!
//! The codec renders the editable card fields as a fixed-shape vCard 3.0
//! text block. The same function feeds the QR payload and the `.vcf`
//! download, so the two are byte-identical by construction.
//!
//! ## Usage
//!
//! ```rust
//! use qeo_core::model::CardFields;
//! use qeo_vcard::encode;
//!
//! let fields = CardFields {
//!     name: "Budi".to_string(),
//!     email: "b@x.com".to_string(),
//!     ..CardFields::default()
//! };
//!
//! let block = encode(&fields);
//! assert!(block.starts_with("BEGIN:VCARD\n"));
//! assert!(block.contains("FN:Budi\n"));
//! ```
//!
//! Empty fields take their placeholder values (the shared defaulting
//! policy in `qeo-core`); encoding never fails.

pub mod build;
pub mod property;

pub use build::encode;
pub use property::{ContentLine, content_lines};
