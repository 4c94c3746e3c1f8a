//! Card model types.
//!
//! [`record`] holds the storage-shaped record (all raw strings) and the
//! defaulting policy; [`options`] holds the typed presentation vocabulary
//! that raw strings resolve to at render time.

pub mod options;
pub mod record;

pub use options::{CardSize, QrDotStyle, QrStyle, Template, Theme};
pub use record::{CardFields, CardRecord, PresentationState, or_placeholder, placeholder};
