//! Change categories and their display glyphs and colors
use serde::Deserialize;
use thiserror::Error;

const ICON_FEATURE: &str = "✨";
const ICON_BALANCE: &str = "⚖️";
const ICON_FIX: &str = "🔧";
const ICON_UI: &str = "🎨";
const ICON_DEFAULT: &str = "📝";

const COLOR_FEATURE: &str = "#32CD32";
const COLOR_BALANCE: &str = "#ffd700";
const COLOR_FIX: &str = "#ff6b6b";
const COLOR_UI: &str = "#87CEEB";
const COLOR_DEFAULT: &str = "#aaa";

/// Category a change note is filed under. Deserializes from any string tag
/// through [`Category::from_tag`], so unknown tags become `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(from = "String")]
pub enum Category {
    Feature,
    Balance,
    Fix,
    Ui,
    /// Any tag outside the known set
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::Feature,
        Self::Balance,
        Self::Fix,
        Self::Ui,
        Self::Other,
    ];

    /// Resolve a raw tag. Matching is exact and case-sensitive; every
    /// unrecognized tag, including the empty string, is `Other`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "feature" => Self::Feature,
            "balance" => Self::Balance,
            "fix" => Self::Fix,
            "ui" => Self::Ui,
            _ => Self::Other,
        }
    }

    /// Same as [`Category::from_tag`], with a missing tag treated as `Other`.
    #[must_use]
    pub fn from_optional(tag: Option<&str>) -> Self {
        tag.map_or(Self::Other, Self::from_tag)
    }

    /// Canonical tag for known categories; `None` for `Other`.
    #[must_use]
    pub const fn tag(self) -> Option<&'static str> {
        match self {
            Self::Feature => Some("feature"),
            Self::Balance => Some("balance"),
            Self::Fix => Some("fix"),
            Self::Ui => Some("ui"),
            Self::Other => None,
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Feature => ICON_FEATURE,
            Self::Balance => ICON_BALANCE,
            Self::Fix => ICON_FIX,
            Self::Ui => ICON_UI,
            Self::Other => ICON_DEFAULT,
        }
    }

    /// Hex color string (`#rgb` or `#rrggbb`)
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Feature => COLOR_FEATURE,
            Self::Balance => COLOR_BALANCE,
            Self::Fix => COLOR_FIX,
            Self::Ui => COLOR_UI,
            Self::Other => COLOR_DEFAULT,
        }
    }

    /// Decoded form of [`Category::color`].
    #[must_use]
    pub fn rgb(self) -> Rgb {
        parse_hex_color(self.color()).unwrap_or(Rgb::GREY)
    }

    /// Human-readable label used in headings and summaries
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Feature => "New",
            Self::Balance => "Balance",
            Self::Fix => "Fixes",
            Self::Ui => "Interface",
            Self::Other => "Other",
        }
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Feature => write!(f, "feature"),
            Category::Balance => write!(f, "balance"),
            Category::Fix => write!(f, "fix"),
            Category::Ui => write!(f, "ui"),
            Category::Other => write!(f, "other"),
        }
    }
}

/// Icon for a raw category tag. Total: unknown tags get the default glyph.
#[must_use]
pub fn classify_icon(tag: &str) -> &'static str {
    Category::from_tag(tag).icon()
}

/// Hex color for a raw category tag. Total: unknown tags get `#aaa`.
#[must_use]
pub fn classify_color(tag: &str) -> &'static str {
    Category::from_tag(tag).color()
}

/// 24-bit color decoded from a hex string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const GREY: Self = Self {
        r: 0xaa,
        g: 0xaa,
        b: 0xaa,
    };
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color {0:?} must start with '#'")]
    MissingHash(String),
    #[error("color {input:?} has {len} hex digits, expected 3 or 6")]
    BadLength { input: String, len: usize },
    #[error("color {0:?} contains a non-hex digit")]
    InvalidDigit(String),
}

/// Parse `#rgb` or `#rrggbb`. Short form digits are doubled (`#aaa` is `#aaaaaa`).
///
/// # Errors
///
/// Returns an error if the leading `#` is missing, the digit count is not 3 or 6,
/// or any digit is not hexadecimal.
pub fn parse_hex_color(input: &str) -> Result<Rgb, ColorParseError> {
    let digits = input
        .strip_prefix('#')
        .ok_or_else(|| ColorParseError::MissingHash(input.to_string()))?;
    let nibbles = digits
        .chars()
        .map(|c| c.to_digit(16).and_then(|d| u8::try_from(d).ok()))
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(|| ColorParseError::InvalidDigit(input.to_string()))?;

    match nibbles.as_slice() {
        [r, g, b] => Ok(Rgb {
            r: r * 0x11,
            g: g * 0x11,
            b: b * 0x11,
        }),
        [r1, r2, g1, g2, b1, b2] => Ok(Rgb {
            r: (r1 << 4) | r2,
            g: (g1 << 4) | g2,
            b: (b1 << 4) | b2,
        }),
        _ => Err(ColorParseError::BadLength {
            input: input.to_string(),
            len: nibbles.len(),
        }),
    }
}
