use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The compliance category an analyzer or issue belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Colors,
    Typography,
    Logo,
    Layout,
}

impl Category {
    pub const fn all() -> [Category; 4] {
        [
            Category::Colors,
            Category::Typography,
            Category::Logo,
            Category::Layout,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Colors => "colors",
            Category::Typography => "typography",
            Category::Logo => "logo",
            Category::Layout => "layout",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "colors" | "color" => Ok(Category::Colors),
            "typography" => Ok(Category::Typography),
            "logo" => Ok(Category::Logo),
            "layout" => Ok(Category::Layout),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}

/// Ordinal issue priority. Rank 0 is the most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inferred usage role of a scraped color.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    Button,
    Text,
    Background,
    Accent,
}

impl Context {
    pub fn as_str(&self) -> &'static str {
        match self {
            Context::Button => "button",
            Context::Text => "text",
            Context::Background => "background",
            Context::Accent => "accent",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical color value: always derived from a parseable input, always
/// rendered as an uppercase `#RRGGBB` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NormalizedColor {
    channels: [u8; 3],
}

impl NormalizedColor {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            channels: [r, g, b],
        }
    }

    pub fn channels(&self) -> [u8; 3] {
        self.channels
    }

    pub fn red(&self) -> u8 {
        self.channels[0]
    }

    pub fn green(&self) -> u8 {
        self.channels[1]
    }

    pub fn blue(&self) -> u8 {
        self.channels[2]
    }

    pub fn hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            self.channels[0], self.channels[1], self.channels[2]
        )
    }
}

impl fmt::Display for NormalizedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for NormalizedColor {
    type Err = String;

    /// Strict parse of the canonical form only. Loose inputs (`rgb()`,
    /// three-digit hex, missing `#`) go through `normalize::normalize_color`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let rest = s
            .strip_prefix('#')
            .ok_or_else(|| format!("not a canonical color: {}", s))?;
        if rest.len() != 6 || !rest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("not a canonical color: {}", s));
        }
        let r = u8::from_str_radix(&rest[0..2], 16).map_err(|e| e.to_string())?;
        let g = u8::from_str_radix(&rest[2..4], 16).map_err(|e| e.to_string())?;
        let b = u8::from_str_radix(&rest[4..6], 16).map_err(|e| e.to_string())?;
        Ok(NormalizedColor::from_rgb(r, g, b))
    }
}

impl TryFrom<String> for NormalizedColor {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NormalizedColor> for String {
    fn from(color: NormalizedColor) -> Self {
        color.hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_display_and_parse_round_trip() {
        for category in Category::all() {
            let rendered = category.to_string();
            let parsed = Category::from_str(&rendered).expect("parse should succeed");
            assert_eq!(parsed, category);
        }

        let parsed = Category::from_str("COLOR").expect("case insensitive parse");
        assert_eq!(parsed, Category::Colors);

        assert!(Category::from_str("pixels").is_err());
    }

    #[test]
    fn severity_rank_is_strictly_ordered() {
        assert!(Severity::Critical.rank() < Severity::High.rank());
        assert!(Severity::High.rank() < Severity::Medium.rank());
        assert!(Severity::Medium.rank() < Severity::Low.rank());
    }

    #[test]
    fn normalized_color_renders_uppercase_hex() {
        let color = NormalizedColor::from_rgb(255, 0, 170);
        assert_eq!(color.hex(), "#FF00AA");
        assert_eq!(color.hex().len(), 7);
    }

    #[test]
    fn strict_parse_rejects_loose_forms() {
        assert!("#FF0000".parse::<NormalizedColor>().is_ok());
        assert!("#f00".parse::<NormalizedColor>().is_err());
        assert!("FF0000".parse::<NormalizedColor>().is_err());
        assert!("rgb(255,0,0)".parse::<NormalizedColor>().is_err());
    }

    #[test]
    fn serde_round_trips_as_hex_string() {
        let color = NormalizedColor::from_rgb(18, 52, 86);
        let json = serde_json::to_string(&color).expect("serialize");
        assert_eq!(json, "\"#123456\"");
        let back: NormalizedColor = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, color);
    }
}
