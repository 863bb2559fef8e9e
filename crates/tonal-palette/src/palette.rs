//! Palette assembly — ten tonal shades, four accents, and their text colors.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use tonal_color::{Color, OutputFormat, Rendered};
use tracing::debug;

use crate::accent::{Accent, derive_accent};
use crate::contrast::{contrast_ratio, contrast_text};
use crate::error::{PaletteError, Result};
use crate::shades::{GenerationParameters, SHADE_STEPS, generate_shades};

// ---------------------------------------------------------------------------
// ShadeKey
// ---------------------------------------------------------------------------

/// The fourteen keys of a palette, in palette order.
///
/// Tonal keys `50..=900` correspond to shade indices 0..=9; the accent keys
/// follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShadeKey {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    A100,
    A200,
    A400,
    A700,
}

impl ShadeKey {
    /// All keys in palette order.
    #[rustfmt::skip]
    pub const ALL: [Self; 14] = [
        Self::S50, Self::S100, Self::S200, Self::S300, Self::S400,
        Self::S500, Self::S600, Self::S700, Self::S800, Self::S900,
        Self::A100, Self::A200, Self::A400, Self::A700,
    ];

    /// The ten tonal keys.
    #[rustfmt::skip]
    pub const TONAL: [Self; 10] = [
        Self::S50, Self::S100, Self::S200, Self::S300, Self::S400,
        Self::S500, Self::S600, Self::S700, Self::S800, Self::S900,
    ];

    /// The four accent keys.
    pub const ACCENT: [Self; 4] = [Self::A100, Self::A200, Self::A400, Self::A700];

    /// Position in [`ShadeKey::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Shade index for tonal keys, `None` for accents.
    #[must_use]
    pub const fn tonal_index(self) -> Option<usize> {
        match self.accent() {
            Some(_) => None,
            None => Some(self.index()),
        }
    }

    /// The accent this key names, `None` for tonal keys.
    #[must_use]
    pub const fn accent(self) -> Option<Accent> {
        match self {
            Self::A100 => Some(Accent::A100),
            Self::A200 => Some(Accent::A200),
            Self::A400 => Some(Accent::A400),
            Self::A700 => Some(Accent::A700),
            _ => None,
        }
    }

    /// Design-system name: `"50"` … `"900"`, `"A100"` … `"A700"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::S50 => "50",
            Self::S100 => "100",
            Self::S200 => "200",
            Self::S300 => "300",
            Self::S400 => "400",
            Self::S500 => "500",
            Self::S600 => "600",
            Self::S700 => "700",
            Self::S800 => "800",
            Self::S900 => "900",
            Self::A100 => "A100",
            Self::A200 => "A200",
            Self::A400 => "A400",
            Self::A700 => "A700",
        }
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShadeKey {
    type Err = PaletteError;

    /// Parse a key name; accent names are case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .find(|key| key.name() == upper)
            .copied()
            .ok_or_else(|| PaletteError::InvalidArgument(format!("unknown shade key `{s}`")))
    }
}

impl Serialize for ShadeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// A shade and the text color that reads on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteEntry {
    pub color: Color,
    pub contrast_text: Color,
}

impl PaletteEntry {
    /// Pair `color` with its contrast text.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            contrast_text: contrast_text(color),
        }
    }

    /// WCAG contrast between the text color and the shade it sits on.
    #[must_use]
    pub fn contrast(&self) -> f64 {
        contrast_ratio(self.contrast_text, self.color)
    }
}

/// A complete design-system palette: exactly one entry per [`ShadeKey`].
///
/// Colors are held as exact values; `format` only affects
/// [`Palette::render`] and serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: [PaletteEntry; 14],
    format: OutputFormat,
}

impl Palette {
    /// Build a palette from ten tonal shades, deriving the accents.
    #[must_use]
    pub fn from_tonal(tonal: &[Color; SHADE_STEPS], format: OutputFormat) -> Self {
        let entries = ShadeKey::ALL.map(|key| {
            let color = match key.accent() {
                Some(accent) => derive_accent(tonal[accent.source_index()], accent),
                None => tonal[key.index()],
            };
            PaletteEntry::new(color)
        });
        Self { entries, format }
    }

    #[must_use]
    pub const fn get(&self, key: ShadeKey) -> &PaletteEntry {
        &self.entries[key.index()]
    }

    /// Replace the entry at `key`.
    pub const fn replace(&mut self, key: ShadeKey, entry: PaletteEntry) {
        self.entries[key.index()] = entry;
    }

    /// The output format this palette renders in.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Entries in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (ShadeKey, &PaletteEntry)> {
        ShadeKey::ALL.into_iter().zip(self.entries.iter())
    }

    /// The ten tonal colors, lightest first.
    #[must_use]
    pub fn tonal(&self) -> [Color; SHADE_STEPS] {
        ShadeKey::TONAL.map(|key| self.get(key).color)
    }

    /// `(color, contrast text)` for `key`, rendered in the palette's format.
    #[must_use]
    pub fn render(&self, key: ShadeKey) -> (Rendered, Rendered) {
        let entry = self.get(key);
        (self.format.apply(entry.color), self.format.apply(entry.contrast_text))
    }
}

impl Index<ShadeKey> for Palette {
    type Output = PaletteEntry;

    fn index(&self, key: ShadeKey) -> &PaletteEntry {
        self.get(key)
    }
}

/// Serializes as `{ "50": { "color": …, "contrastText": … }, … }`.
impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ShadeKey::ALL.len()))?;
        for key in ShadeKey::ALL {
            let (color, text) = self.render(key);
            map.serialize_entry(&key, &RenderedEntry { color, text })?;
        }
        map.end()
    }
}

struct RenderedEntry {
    color: Rendered,
    text: Rendered,
}

impl Serialize for RenderedEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut entry = serializer.serialize_struct("PaletteEntry", 2)?;
        entry.serialize_field("color", &self.color)?;
        entry.serialize_field("contrastText", &self.text)?;
        entry.end()
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate the fourteen-entry palette described by `params`.
///
/// Always produces ten tonal shades, whatever `params.steps` says. Accents
/// come from tonal shades 100, 200, 400 and 700.
///
/// # Errors
///
/// Propagates errors from [`generate_shades`].
pub fn generate_material_ui_palette(params: &GenerationParameters) -> Result<Palette> {
    let shades = generate_shades(&params.with_steps(SHADE_STEPS))?;
    let tonal: [Color; SHADE_STEPS] = shades.try_into().map_err(|shades: Vec<Color>| {
        PaletteError::InvalidArgument(format!(
            "expected {SHADE_STEPS} tonal shades, got {}",
            shades.len()
        ))
    })?;
    debug!(
        hue = ?(params.hue_start, params.hue_end),
        sat = ?(params.sat_start, params.sat_end),
        val = ?(params.val_start, params.val_end),
        format = %params.format,
        "assembled palette"
    );
    Ok(Palette::from_tonal(&tonal, params.format))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
