use crate::colors::{channel, ramp, Color};

/// Dark teal ramp: green climbs from 0 towards 200 over a fixed blue of 55.
pub fn build(count: usize) -> Vec<Color> {
    (0..count)
        .map(|i| {
            let luminance = ramp(i, count, 200);
            Color::rgb(0, channel(luminance), 55)
        })
        .collect()
}
