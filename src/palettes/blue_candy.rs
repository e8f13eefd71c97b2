use crate::colors::{descend, Color};

pub fn build(count: usize) -> Vec<Color> {
    (0..count)
        .map(|i| {
            Color::rgb(
                descend(200, i, count, 200),
                descend(225, i, count, 100),
                descend(255, i, count, 25),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_pale_and_darkens() {
        let table = build(2);
        assert_eq!(table[0], Color::rgb(200, 225, 255));
        assert_eq!(table[1], Color::rgb(100, 175, 243));
    }
}
