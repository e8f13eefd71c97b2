use std::fmt;

/// An opaque RGB color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const DARK_VIOLET: Color = Color::rgb(148, 0, 211);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const LIGHT_BLUE: Color = Color::rgb(173, 216, 230);
    pub const DARK_GREEN: Color = Color::rgb(0, 100, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::rgb(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb(color.to_array())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// `⌊index * span / count⌋` in exact integer arithmetic, so neighbouring
/// entries of very large tables never collapse onto the same step.
pub(crate) fn ramp(index: usize, count: usize, span: u32) -> i64 {
    (index as u128 * u128::from(span) / count as u128) as i64
}

/// Clamps a computed channel into 0..=255
pub(crate) fn channel(value: i64) -> u8 {
    value.max(0).min(255) as u8
}

/// `base - ramp`, clamped
pub(crate) fn descend(base: i64, index: usize, count: usize, span: u32) -> u8 {
    channel(base - ramp(index, count, span))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_is_hex() {
        assert_eq!(Color::ORANGE.to_string(), "#ffa500");
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }

    #[test]
    fn channel_clamps() {
        assert_eq!(channel(-12), 0);
        assert_eq!(channel(199), 199);
        assert_eq!(channel(300), 255);
    }

    #[test]
    fn descend_truncates_the_product() {
        // 200 - ⌊999 * 200 / 1000⌋ = 200 - 199
        assert_eq!(descend(200, 999, 1000, 200), 1);
        assert_eq!(descend(255, 0, 7, 25), 255);
    }

    #[test]
    fn ramp_is_exact_for_huge_tables() {
        let count = (1 << 24) + 1;
        assert_eq!(ramp(count - 1, count, 200), 199);
        assert_eq!(ramp(count / 2, count, 200), 99);
        assert_eq!(ramp(usize::MAX - 1, usize::MAX, 255), 254);
    }

    #[test]
    fn converts_to_image_pixel() {
        let pixel: image::Rgb<u8> = Color::DARK_VIOLET.into();
        assert_eq!(pixel, image::Rgb([148, 0, 211]));
        assert_eq!(Color::from([1, 2, 3]), Color::rgb(1, 2, 3));
    }
}
