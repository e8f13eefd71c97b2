use crate::colors::Color;

pub const COLORS: [Color; 8] = [
    Color::RED,
    Color::DARK_VIOLET,
    Color::BLUE,
    Color::LIGHT_BLUE,
    Color::DARK_GREEN,
    Color::GREEN,
    Color::YELLOW,
    Color::ORANGE,
];

pub fn build() -> Vec<Color> {
    COLORS.to_vec()
}
