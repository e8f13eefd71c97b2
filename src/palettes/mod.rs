use crate::colors::Color;
use crate::CellState;
use log::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{convert::Infallible, fmt, str::FromStr};
use thiserror::Error;

pub mod banana;
pub mod blue_candy;
pub mod contrast;
pub mod high_tech;
pub mod rainbow;
pub mod random;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteKind {
    HighTech,
    Banana,
    BlueCandy,
    Rainbow,
    Contrast,
    Random,
}

impl PaletteKind {
    pub const ALL: [PaletteKind; 6] = [
        PaletteKind::HighTech,
        PaletteKind::Banana,
        PaletteKind::BlueCandy,
        PaletteKind::Rainbow,
        PaletteKind::Contrast,
        PaletteKind::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PaletteKind::HighTech => "high-tech",
            PaletteKind::Banana => "banana",
            PaletteKind::BlueCandy => "blue-candy",
            PaletteKind::Rainbow => "rainbow",
            PaletteKind::Contrast => "contrast",
            PaletteKind::Random => "random",
        }
    }
}

impl Default for PaletteKind {
    fn default() -> Self {
        PaletteKind::HighTech
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Never fails: names that match no palette fall back to the default kind.
impl FromStr for PaletteKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let kind = match normalized.as_str() {
            "hightech" => PaletteKind::HighTech,
            "banana" => PaletteKind::Banana,
            "bluecandy" => PaletteKind::BlueCandy,
            "rainbow" => PaletteKind::Rainbow,
            "contrast" => PaletteKind::Contrast,
            "random" => PaletteKind::Random,
            _ => {
                warn!(
                    "Unknown palette '{}', using {}",
                    s,
                    PaletteKind::default()
                );
                PaletteKind::default()
            }
        };
        Ok(kind)
    }
}

/// Renderer-side fill handle derived from a single palette color.
pub trait Brush: Clone {
    fn solid(color: Color) -> Self;
}

/// Backend-free brush that only remembers its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolidBrush {
    color: Color,
}

impl SolidBrush {
    pub fn color(&self) -> Color {
        self.color
    }
}

impl Brush for SolidBrush {
    fn solid(color: Color) -> Self {
        SolidBrush { color }
    }
}

impl Brush for image::Rgb<u8> {
    fn solid(color: Color) -> Self {
        color.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("Palette needs at least one cell state")]
    NoStates,
    #[error("Cell state {state} has no entry in a palette of {len} colors")]
    InvalidState { state: usize, len: usize },
}

/// Color lookup table for cell states, with a brush prepared for every entry.
///
/// Tables are filled once on construction and never change afterwards. Lookups
/// are bounds checked, except for wrapping palettes (Rainbow) which index
/// modulo their length.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette<B = SolidBrush> {
    kind: PaletteKind,
    colors: Vec<Color>,
    brushes: Vec<B>,
    wrapping: bool,
}

impl<B: Brush> Palette<B> {
    /// Builds a palette, seeding Random from OS entropy.
    pub fn new(kind: PaletteKind, state_count: usize) -> Result<Self, PaletteError> {
        Self::with_rng(kind, state_count, &mut StdRng::from_entropy())
    }

    /// Builds a palette, drawing Random's colors from `rng`. Rainbow ignores `state_count`.
    pub fn with_rng<R: Rng + ?Sized>(
        kind: PaletteKind,
        state_count: usize,
        rng: &mut R,
    ) -> Result<Self, PaletteError> {
        let colors = match kind {
            PaletteKind::Rainbow => return Ok(Self::from_colors(kind, rainbow::build(), true)),
            _ if state_count == 0 => return Err(PaletteError::NoStates),
            PaletteKind::HighTech => high_tech::build(state_count),
            PaletteKind::Banana => banana::build(state_count),
            PaletteKind::BlueCandy => blue_candy::build(state_count),
            PaletteKind::Contrast => contrast::build(state_count),
            PaletteKind::Random => random::build(state_count, rng),
        };
        Ok(Self::from_colors(kind, colors, false))
    }

    fn from_colors(kind: PaletteKind, colors: Vec<Color>, wrapping: bool) -> Self {
        let mut palette = Palette {
            kind,
            colors,
            brushes: Vec::new(),
            wrapping,
        };
        palette.rebuild_brushes();
        debug!("Built {} palette with {} colors", kind, palette.len());
        palette
    }

    fn rebuild_brushes(&mut self) {
        self.brushes = self.colors.iter().copied().map(B::solid).collect();
    }

    pub fn state_to_brush(&self, state: impl Into<CellState>) -> Result<&B, PaletteError> {
        let index = self.index(state.into())?;
        Ok(&self.brushes[index])
    }
}

impl<B> Palette<B> {
    pub fn kind(&self) -> PaletteKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn is_wrapping(&self) -> bool {
        self.wrapping
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn brushes(&self) -> &[B] {
        &self.brushes
    }

    fn index(&self, state: CellState) -> Result<usize, PaletteError> {
        let state = state.index();
        let len = self.colors.len();
        if self.wrapping {
            Ok(state % len)
        } else if state < len {
            Ok(state)
        } else {
            Err(PaletteError::InvalidState { state, len })
        }
    }

    pub fn state_to_color(&self, state: impl Into<CellState>) -> Result<Color, PaletteError> {
        let index = self.index(state.into())?;
        Ok(self.colors[index])
    }
}

/// Builds the palette for `kind` with a brush table of [`SolidBrush`]es.
pub fn make_palette(kind: PaletteKind, state_count: usize) -> Result<Palette, PaletteError> {
    Palette::new(kind, state_count)
}
