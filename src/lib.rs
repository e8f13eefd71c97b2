use anyhow::{Context, Result};
use arrayvec::ArrayVec;
use image::png::PngEncoder;
use image::Rgb;
use log::*;
use rand::{rngs::StdRng, SeedableRng};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub mod colors;
pub mod palettes;

pub use colors::Color;
pub use palettes::{make_palette, Brush, Palette, PaletteError, PaletteKind, SolidBrush};

/// Number of distinct cell states produced by the automaton.
pub const NUM_STATES: usize = 256;

const SWATCH_WIDTH: usize = 256;
const SWATCH_HEIGHT: usize = 32;

/// A cell's discrete state, used directly as a palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CellState(pub usize);

impl CellState {
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<u8> for CellState {
    fn from(state: u8) -> Self {
        CellState(state.into())
    }
}

impl From<u16> for CellState {
    fn from(state: u16) -> Self {
        CellState(state.into())
    }
}

impl From<u32> for CellState {
    fn from(state: u32) -> Self {
        CellState(state as usize)
    }
}

impl From<usize> for CellState {
    fn from(state: usize) -> Self {
        CellState(state)
    }
}

/// Lays the palette out as vertical stripes, `stripe_width` pixels per entry, and returns RGB8 rows.
pub fn render_swatch(palette: &Palette<Rgb<u8>>, stripe_width: usize, height: usize) -> Vec<u8> {
    let row: Vec<u8> = palette
        .brushes()
        .iter()
        .flat_map(|brush| itertools::repeat_n(brush.0, stripe_width))
        .flat_map(|pixel| ArrayVec::from(pixel).into_iter())
        .collect();
    row.repeat(height)
}

/// Writes one `state,r,g,b,hex` row per palette entry, after a header.
pub fn write_csv<B, W: Write>(palette: &Palette<B>, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&["state", "r", "g", "b", "hex"])?;
    for (state, color) in palette.colors().iter().enumerate() {
        wtr.write_record(&[
            state.to_string(),
            color.r.to_string(),
            color.g.to_string(),
            color.b.to_string(),
            color.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn save_image(width: usize, height: usize, imgdata: &[u8], dest: &Path) -> Result<()> {
    info!("Saving {} {}x{}", dest.display(), width, height);
    let f = File::create(dest).with_context(|| format!("Could not create {}", dest.display()))?;
    PngEncoder::new(f)
        .encode(imgdata, width as u32, height as u32, image::ColorType::Rgb8)
        .with_context(|| format!("Could not encode {}", dest.display()))
}

/// Builds a palette and writes it to `dest`: a CSV table for `.csv` (any case), a PNG swatch otherwise.
pub fn export<P: AsRef<Path>>(
    kind: PaletteKind,
    state_count: usize,
    seed: Option<u64>,
    dest: P,
) -> Result<()> {
    let dest = dest.as_ref();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let palette: Palette<Rgb<u8>> = Palette::with_rng(kind, state_count, &mut rng)
        .with_context(|| format!("Could not build {} palette", kind))?;
    info!("Palette {} with {} colors", kind, palette.len());

    match dest.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => {
            info!("Writing {}", dest.display());
            let f = File::create(dest)
                .with_context(|| format!("Could not create {}", dest.display()))?;
            write_csv(&palette, f)
        }
        _ => {
            let stripe_width = (SWATCH_WIDTH / palette.len()).max(1);
            let imgdata = render_swatch(&palette, stripe_width, SWATCH_HEIGHT);
            save_image(
                stripe_width * palette.len(),
                SWATCH_HEIGHT,
                &imgdata,
                dest,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use image::GenericImageView;
    use pretty_assertions::assert_eq;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("automaton-palette-{}-{}", std::process::id(), name))
    }

    #[test]
    fn swatch_has_one_stripe_per_entry() {
        let palette: Palette<Rgb<u8>> = Palette::new(PaletteKind::Contrast, 4).unwrap();
        let data = render_swatch(&palette, 2, 3);
        assert_eq!(data.len(), 4 * 2 * 3 * 3);
        let gray = Color::LIGHT_GRAY.to_array();
        assert_eq!(
            &data[..24],
            &[gray, gray, gray, gray, [0; 3], [0; 3], [0; 3], [0; 3]].concat()[..]
        );
        assert_eq!(&data[..24], &data[24..48]);
    }

    #[test]
    fn csv_lists_every_entry() {
        let palette = make_palette(PaletteKind::HighTech, 4).unwrap();
        let mut out = Vec::new();
        write_csv(&palette, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "state,r,g,b,hex");
        assert_eq!(lines[2], "1,0,50,55,#003237");
    }

    #[test]
    fn export_writes_csv() {
        let path = scratch_path("rainbow.csv");
        export(PaletteKind::Rainbow, NUM_STATES, None, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(text.lines().count(), 9);
        assert!(text.lines().last().unwrap().ends_with("#ffa500"));
    }

    #[test]
    fn export_matches_csv_extension_in_any_case() {
        let path = scratch_path("contrast.CSV");
        export(PaletteKind::Contrast, 4, None, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(text.lines().next(), Some("state,r,g,b,hex"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn export_writes_png() {
        let path = scratch_path("banana.png");
        export(PaletteKind::Banana, 64, None, &path).unwrap();
        let img = image::open(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(img.dimensions(), (256, 32));
        assert_eq!(img.get_pixel(0, 0), image::Rgba([225, 240, 180, 255]));
    }

    #[test]
    fn seeded_export_is_reproducible() {
        let a = scratch_path("random-a.csv");
        let b = scratch_path("random-b.csv");
        export(PaletteKind::Random, 32, Some(5), &a).unwrap();
        export(PaletteKind::Random, 32, Some(5), &b).unwrap();
        let (ta, tb) = (
            std::fs::read_to_string(&a).unwrap(),
            std::fs::read_to_string(&b).unwrap(),
        );
        std::fs::remove_file(&a).unwrap();
        std::fs::remove_file(&b).unwrap();
        assert_eq!(ta, tb);
    }

    #[test]
    fn export_rejects_zero_states() {
        let path = scratch_path("empty.png");
        assert!(export(PaletteKind::HighTech, 0, None, &path).is_err());
        assert!(!path.exists());
    }
}
