// File: crates/wx-core/src/theme.rs
// Summary: Chart colors: a validated CSS color value and the seven-role palette.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::{Error, Result};

/// A CSS color accepted by vector backends: `#rgb`, `#rrggbb` (with optional
/// alpha), a functional form such as `rgb(…)`, or a named color.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let valid = if let Some(hex) = s.strip_prefix('#') {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        } else if let Some(open) = s.find('(') {
            let name = &s[..open];
            matches!(name, "rgb" | "rgba" | "hsl" | "hsla")
                && s.ends_with(')')
                && s[open + 1..s.len() - 1]
                    .chars()
                    .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '%' | ' ' | '-'))
        } else {
            !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
        };
        if valid {
            Ok(Self(s.to_ascii_lowercase()))
        } else {
            Err(Error::InvalidColor(s.to_string()))
        }
    }

    /// Named color known to be valid; for built-in defaults.
    fn named(name: &'static str) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Colors for each chart role. Deserializes from a loose string map: missing or
/// invalid roles fall back to their default and unknown keys are reported.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawPalette")]
pub struct Palette {
    pub background: Color,
    pub grid: Color,
    pub temperature: Color,
    pub precipitation: Color,
    pub wind: Color,
    pub place_name: Color,
    pub hour_label: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::named("white"),
            grid: Color::named("black"),
            temperature: Color::named("red"),
            precipitation: Color::named("blue"),
            wind: Color::named("black"),
            place_name: Color::named("black"),
            hour_label: Color::named("black"),
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawPalette {
    background: Option<Value>,
    grid: Option<Value>,
    temperature: Option<Value>,
    precipitation: Option<Value>,
    wind: Option<Value>,
    #[serde(alias = "placename")]
    place_name: Option<Value>,
    #[serde(alias = "hour")]
    hour_label: Option<Value>,
    #[serde(flatten)]
    unknown: BTreeMap<String, Value>,
}

fn pick(role: &str, raw: Option<Value>, fallback: Color) -> Color {
    match raw {
        None | Some(Value::Null) => fallback,
        Some(Value::String(s)) => match Color::parse(&s) {
            Ok(c) => c,
            Err(e) => {
                warn!(role, error = %e, default = %fallback, "using default color");
                fallback
            }
        },
        Some(other) => {
            warn!(role, value = %other, default = %fallback, "color is not a string; using default");
            fallback
        }
    }
}

impl From<RawPalette> for Palette {
    fn from(raw: RawPalette) -> Self {
        for key in raw.unknown.keys() {
            warn!(key = key.as_str(), "ignoring unknown color role");
        }
        let d = Palette::default();
        Self {
            background: pick("background", raw.background, d.background),
            grid: pick("grid", raw.grid, d.grid),
            temperature: pick("temperature", raw.temperature, d.temperature),
            precipitation: pick("precipitation", raw.precipitation, d.precipitation),
            wind: pick("wind", raw.wind, d.wind),
            place_name: pick("place_name", raw.place_name, d.place_name),
            hour_label: pick("hour_label", raw.hour_label, d.hour_label),
        }
    }
}
