//! Presentation vocabulary: templates, themes, card sizes, QR styling.
//!
//! Stored records keep these as raw strings; the enums here are the fixed
//! sets those strings resolve to when the card is rendered. Each type
//! parses leniently via [`parse`](Template::parse) (unknown values become
//! `None`, callers fall back to the default) and strictly via [`FromStr`]
//! for command-line input.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Card layout template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Template {
    #[default]
    ModernBusiness,
    ClassicProfessional,
    CreativeBold,
    MinimalistClean,
    TechDigital,
}

impl Template {
    /// Returns the kebab-case identifier used in storage and exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ModernBusiness => "modern-business",
            Self::ClassicProfessional => "classic-professional",
            Self::CreativeBold => "creative-bold",
            Self::MinimalistClean => "minimalist-clean",
            Self::TechDigital => "tech-digital",
        }
    }

    /// Parses a stored identifier, returning `None` for unknown values.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "modern-business" => Some(Self::ModernBusiness),
            "classic-professional" => Some(Self::ClassicProfessional),
            "creative-bold" => Some(Self::CreativeBold),
            "minimalist-clean" => Some(Self::MinimalistClean),
            "tech-digital" => Some(Self::TechDigital),
            _ => None,
        }
    }

    /// Human-readable name (identifier with spaces, as shown in the UI).
    #[must_use]
    pub fn label(self) -> String {
        self.as_str().replace('-', " ")
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Template {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s).ok_or_else(|| CoreError::unknown_option("template", s))
    }
}

/// Card color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Standard,
    Vip,
    Tech,
    Creative,
    Nature,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Vip => "vip",
            Self::Tech => "tech",
            Self::Creative => "creative",
            Self::Nature => "nature",
        }
    }

    /// Parses a stored identifier, returning `None` for unknown values.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "standard" => Some(Self::Standard),
            "vip" => Some(Self::Vip),
            "tech" => Some(Self::Tech),
            "creative" => Some(Self::Creative),
            "nature" => Some(Self::Nature),
            _ => None,
        }
    }

    /// Display label, in the UI locale.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standar",
            Self::Vip => "VIP",
            Self::Tech => "Canggih",
            Self::Creative => "Kreatif",
            Self::Nature => "Alam",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s).ok_or_else(|| CoreError::unknown_option("theme", s))
    }
}

/// Physical card size. Each variant maps to fixed print dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardSize {
    #[default]
    Iso,
    Us,
    Japan,
    Europe,
}

impl CardSize {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iso => "iso",
            Self::Us => "us",
            Self::Japan => "japan",
            Self::Europe => "europe",
        }
    }

    /// Parses a stored identifier, returning `None` for unknown values.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "iso" => Some(Self::Iso),
            "us" => Some(Self::Us),
            "japan" => Some(Self::Japan),
            "europe" => Some(Self::Europe),
            _ => None,
        }
    }

    /// Print dimensions as (width, height) in millimeters.
    #[must_use]
    pub const fn dimensions_mm(self) -> (u32, u32) {
        match self {
            Self::Iso => (90, 54),
            Self::Us => (89, 51),
            Self::Japan => (91, 55),
            Self::Europe => (85, 55),
        }
    }

    /// Display label with dimensions, in the UI locale.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Iso => "ISO/Internasional (90 × 54 mm)",
            Self::Us => "US/Canada (89 × 51 mm)",
            Self::Japan => "Jepang (91 × 55 mm)",
            Self::Europe => "Eropa (85 × 55 mm)",
        }
    }
}

impl fmt::Display for CardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardSize {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s).ok_or_else(|| CoreError::unknown_option("size", s))
    }
}

/// QR module (dot) rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QrDotStyle {
    #[default]
    Square,
    Dots,
    Rounded,
    ExtraRounded,
    Classy,
    ClassyRounded,
}

impl QrDotStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Dots => "dots",
            Self::Rounded => "rounded",
            Self::ExtraRounded => "extra-rounded",
            Self::Classy => "classy",
            Self::ClassyRounded => "classy-rounded",
        }
    }

    /// Parses a stored identifier, returning `None` for unknown values.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "square" => Some(Self::Square),
            "dots" => Some(Self::Dots),
            "rounded" => Some(Self::Rounded),
            "extra-rounded" => Some(Self::ExtraRounded),
            "classy" => Some(Self::Classy),
            "classy-rounded" => Some(Self::ClassyRounded),
            _ => None,
        }
    }
}

impl fmt::Display for QrDotStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QrDotStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s).ok_or_else(|| CoreError::unknown_option("qr dot style", s))
    }
}

/// Style options handed to the QR rendering collaborator alongside the
/// payload text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrStyle {
    /// Foreground (module) color.
    pub color: String,
    /// Background color.
    pub bg_color: String,
    /// Module rendering style.
    pub dot_style: QrDotStyle,
    /// Rendered size in pixels (square).
    pub size_px: u32,
    /// Corner-square rendering style.
    pub corner_square_style: &'static str,
    /// Corner-dot rendering style.
    pub corner_dot_style: &'static str,
    /// Margin around an embedded center image, in pixels.
    pub image_margin: u32,
}

impl QrStyle {
    /// Default foreground color.
    pub const DEFAULT_COLOR: &'static str = "#6a0dad";
    /// Default background color.
    pub const DEFAULT_BG_COLOR: &'static str = "#ffffff";
    /// Rendered size used by the preview.
    pub const SIZE_PX: u32 = 150;
    /// Corner-square style; fixed, not user-selectable.
    pub const CORNER_SQUARE_STYLE: &'static str = "extra-rounded";
    /// Corner-dot style; fixed, not user-selectable.
    pub const CORNER_DOT_STYLE: &'static str = "dot";
    /// Margin around an embedded center image.
    pub const IMAGE_MARGIN: u32 = 5;
}

impl Default for QrStyle {
    fn default() -> Self {
        Self {
            color: Self::DEFAULT_COLOR.to_string(),
            bg_color: Self::DEFAULT_BG_COLOR.to_string(),
            dot_style: QrDotStyle::default(),
            size_px: Self::SIZE_PX,
            corner_square_style: Self::CORNER_SQUARE_STYLE,
            corner_dot_style: Self::CORNER_DOT_STYLE,
            image_margin: Self::IMAGE_MARGIN,
        }
    }
}
