//! # tonal-palette — Design-System Palettes From One Seed
//!
//! Derives a full ramp of shades (ten tonal shades plus four accents, each
//! paired with a legible text color) from a single seed color. No shade is
//! hand-picked: every one falls out of the same curve-paced interpolation.
//!
//! # Architecture
//!
//! ```text
//! seed Color
//!     │
//!     ▼
//! seed.rs:     derive six range endpoints (hue/sat/val start + end)
//!     │
//!     ▼
//! shades.rs:   sample curves (curve.rs), resolve the hue arc (hue.rs),
//!     │        map samples into ranges (range.rs) → 10 tonal shades
//!     ▼
//! accent.rs:   perturb tonal 100/200/400/700 into A100/A200/A400/A700
//!     │
//!     ▼
//! contrast.rs: pick black or white text for every shade
//!     │
//!     ▼
//! palette.rs:  assemble the 14-entry Palette; seed.rs pins `500` to the seed
//! ```
//!
//! Everything is a pure function of its inputs. There is no shared state,
//! so any of these entry points can be called from any thread.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Step indices are converted to curve parameters.
#![allow(clippy::cast_precision_loss)]

pub mod accent;
pub mod config;
pub mod contrast;
pub mod curve;
pub mod error;
pub mod hue;
pub mod palette;
pub mod range;
pub mod seed;
pub mod shades;

pub use accent::Accent;
pub use config::SeedConfig;
pub use curve::{CubicBezier, Curve};
pub use error::{PaletteError, Result};
pub use hue::calc_hue_distance;
pub use palette::{Palette, PaletteEntry, ShadeKey, generate_material_ui_palette};
pub use seed::{
    LogBase, SeedCalibration, derive_palette_from_seed, derive_palette_from_str,
    derive_palette_with, seed_parameters,
};
pub use shades::{GenerationParameters, generate_shades};
pub use tonal_color::{Color, OutputFormat, Rendered};
