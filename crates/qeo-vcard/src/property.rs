//! Field-to-property mapping.
//!
//! The mapping between card fields and vCard properties is an explicit
//! table, not a runtime lookup over field names. Output order is fixed.

use qeo_core::model::CardFields;

/// Property names emitted by the codec.
pub mod names {
    pub const FN: &str = "FN";
    pub const ORG: &str = "ORG";
    pub const TITLE: &str = "TITLE";
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";
    pub const URL: &str = "URL";
    pub const ADR: &str = "ADR";
}

/// One content line of the generated block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name.
    pub name: &'static str,
    /// Property value, emitted verbatim.
    pub value: String,
}

impl ContentLine {
    /// Creates a content line.
    #[must_use]
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Maps the card fields to their vCard properties, in output order.
///
/// Empty fields take their placeholder values here, via the shared
/// defaulting policy. ADR carries only the street component; the other
/// six ADR slots stay empty.
#[must_use]
pub fn content_lines(fields: &CardFields) -> [ContentLine; 7] {
    [
        ContentLine::new(names::FN, fields.display_name()),
        ContentLine::new(names::ORG, fields.display_company()),
        ContentLine::new(names::TITLE, fields.display_title()),
        ContentLine::new(names::TEL, fields.display_phone()),
        ContentLine::new(names::EMAIL, fields.display_email()),
        ContentLine::new(names::URL, fields.display_website()),
        ContentLine::new(names::ADR, format!(";;{};;;;", fields.display_address())),
    ]
}
