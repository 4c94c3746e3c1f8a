//! The card record and the defaulting policy.
//!
//! A record is storage-shaped: every field is a raw string and empty
//! strings are legitimate stored values. The `display_*` accessors apply
//! the placeholder policy; they are the single point the preview and the
//! vCard codec share, so the two can never disagree about what an empty
//! field shows as.

use serde::{Deserialize, Serialize};

use super::options::{CardSize, QrDotStyle, QrStyle, Template, Theme};

/// Placeholder values substituted for empty fields at display/encode time.
pub mod placeholder {
    pub const NAME: &str = "Nama Anda";
    pub const TITLE: &str = "Jabatan Anda";
    pub const COMPANY: &str = "Perusahaan Anda";
    pub const PHONE: &str = "+62 812 3456 7890";
    pub const EMAIL: &str = "email@example.com";
    pub const WEBSITE: &str = "https://example.com";
    pub const ADDRESS: &str = "Jl. Example No. 123, Jakarta";
}

/// Maps an empty value to its placeholder and a non-empty value to itself.
#[must_use]
pub fn or_placeholder<'a>(value: &'a str, placeholder: &'static str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

/// User-editable card content. Raw values; may be empty in storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardFields {
    pub name: String,
    pub title: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub address: String,
}

impl CardFields {
    #[must_use]
    pub fn display_name(&self) -> &str {
        or_placeholder(&self.name, placeholder::NAME)
    }

    #[must_use]
    pub fn display_title(&self) -> &str {
        or_placeholder(&self.title, placeholder::TITLE)
    }

    #[must_use]
    pub fn display_company(&self) -> &str {
        or_placeholder(&self.company, placeholder::COMPANY)
    }

    #[must_use]
    pub fn display_phone(&self) -> &str {
        or_placeholder(&self.phone, placeholder::PHONE)
    }

    #[must_use]
    pub fn display_email(&self) -> &str {
        or_placeholder(&self.email, placeholder::EMAIL)
    }

    #[must_use]
    pub fn display_website(&self) -> &str {
        or_placeholder(&self.website, placeholder::WEBSITE)
    }

    #[must_use]
    pub fn display_address(&self) -> &str {
        or_placeholder(&self.address, placeholder::ADDRESS)
    }
}

/// Styling selection. Stored as raw strings; the typed accessors resolve
/// empty or unknown values to the documented defaults at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PresentationState {
    pub template: String,
    pub theme: String,
    pub size: String,
    pub qr_color: String,
    pub qr_bg_color: String,
    pub qr_dot_style: String,
}

impl PresentationState {
    /// Effective template.
    #[must_use]
    pub fn template(&self) -> Template {
        Template::parse(&self.template).unwrap_or_default()
    }

    /// Effective theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::parse(&self.theme).unwrap_or_default()
    }

    /// Effective card size.
    #[must_use]
    pub fn size(&self) -> CardSize {
        CardSize::parse(&self.size).unwrap_or_default()
    }

    /// Effective QR style options for the rendering collaborator.
    #[must_use]
    pub fn qr_style(&self) -> QrStyle {
        QrStyle {
            color: or_placeholder(&self.qr_color, QrStyle::DEFAULT_COLOR).to_string(),
            bg_color: or_placeholder(&self.qr_bg_color, QrStyle::DEFAULT_BG_COLOR).to_string(),
            dot_style: QrDotStyle::parse(&self.qr_dot_style).unwrap_or_default(),
            ..QrStyle::default()
        }
    }
}

/// The complete editable state of one business card: content plus styling.
///
/// Serializes to the flat all-strings JSON shape used by local storage and
/// data exports. Unknown keys in incoming JSON are ignored; absent keys
/// are left unset (empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    #[serde(flatten)]
    pub fields: CardFields,
    #[serde(flatten)]
    pub presentation: PresentationState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_display_placeholders() {
        let fields = CardFields::default();
        assert_eq!(fields.display_name(), "Nama Anda");
        assert_eq!(fields.display_title(), "Jabatan Anda");
        assert_eq!(fields.display_company(), "Perusahaan Anda");
        assert_eq!(fields.display_phone(), "+62 812 3456 7890");
        assert_eq!(fields.display_email(), "email@example.com");
        assert_eq!(fields.display_website(), "https://example.com");
        assert_eq!(fields.display_address(), "Jl. Example No. 123, Jakarta");
    }

    #[test]
    fn set_fields_display_verbatim() {
        let fields = CardFields {
            name: "Budi Santoso".to_string(),
            ..CardFields::default()
        };
        assert_eq!(fields.display_name(), "Budi Santoso");
        // The stored value is untouched by the display accessor.
        assert_eq!(fields.title, "");
    }

    #[test]
    fn whitespace_is_not_empty() {
        let fields = CardFields {
            name: " ".to_string(),
            ..CardFields::default()
        };
        assert_eq!(fields.display_name(), " ");
    }

    #[test]
    fn presentation_defaults_for_empty_and_unknown() {
        let empty = PresentationState::default();
        assert_eq!(empty.template(), Template::ModernBusiness);
        assert_eq!(empty.theme(), Theme::Standard);
        assert_eq!(empty.size(), CardSize::Iso);

        let unknown = PresentationState {
            template: "vaporwave".to_string(),
            size: "a4".to_string(),
            ..PresentationState::default()
        };
        assert_eq!(unknown.template(), Template::ModernBusiness);
        assert_eq!(unknown.size(), CardSize::Iso);
        // Raw values stay as stored.
        assert_eq!(unknown.template, "vaporwave");
    }

    #[test]
    fn qr_style_resolves_empty_to_defaults() {
        let state = PresentationState {
            qr_color: "#112233".to_string(),
            ..PresentationState::default()
        };
        let style = state.qr_style();
        assert_eq!(style.color, "#112233");
        assert_eq!(style.bg_color, "#ffffff");
        assert_eq!(style.dot_style, QrDotStyle::Square);
    }

    #[test]
    fn record_serializes_flat_with_camel_case_qr_keys() {
        let record = CardRecord::default();
        let json = serde_json::to_value(&record).expect("record serializes");
        let map = json.as_object().expect("flat object");
        for key in [
            "name",
            "title",
            "company",
            "phone",
            "email",
            "website",
            "address",
            "template",
            "theme",
            "size",
            "qrColor",
            "qrBgColor",
            "qrDotStyle",
        ] {
            assert!(map.contains_key(key), "missing key {key}");
        }
        assert_eq!(map.len(), 13);
    }
}
