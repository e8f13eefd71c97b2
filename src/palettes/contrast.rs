use crate::colors::Color;

/// Lower half light gray, upper half black. An odd middle entry goes to the black half.
pub fn build(count: usize) -> Vec<Color> {
    let split = count / 2;
    (0..count)
        .map(|i| if i < split { Color::LIGHT_GRAY } else { Color::BLACK })
        .collect()
}
