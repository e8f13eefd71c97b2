use crate::colors::{descend, Color};

pub fn build(count: usize) -> Vec<Color> {
    (0..count)
        .map(|i| {
            Color::rgb(
                descend(225, i, count, 50),
                descend(240, i, count, 200),
                descend(180, i, count, 180),
            )
        })
        .collect()
}
