use crate::colors::Color;
use rand::Rng;

const MAX_LUM: u32 = 255;

fn next_channel<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    (rng.gen_range(0..i32::MAX as u32) % MAX_LUM) as u8
}

/// Independent random channels per entry, each in `0..255`.
pub fn build<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Color> {
    (0..count)
        .map(|_| {
            let r = next_channel(rng);
            let g = next_channel(rng);
            let b = next_channel(rng);
            Color::rgb(r, g, b)
        })
        .collect()
}
