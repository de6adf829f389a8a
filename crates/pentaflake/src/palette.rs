//! Tile fill colours.
//!
//! Random colours use `rand`'s `StdRng`; pass a seed to get the same
//! colours on every run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Where tile fill colours come from.
#[derive(Debug, Clone)]
pub enum TileFill {
    /// Every tile gets the same colour.
    Solid(String),
    /// Every tile gets a fresh random `#rgb` colour.
    Random(StdRng),
}

impl TileFill {
    pub fn solid(color: impl Into<String>) -> Self {
        TileFill::Solid(color.into())
    }

    /// Random colours, reproducible when `seed` is given.
    pub fn random(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        TileFill::Random(rng)
    }

    /// Colour for the next tile.
    pub fn next_color(&mut self) -> String {
        match self {
            TileFill::Solid(color) => color.clone(),
            TileFill::Random(rng) => random_html_color(rng),
        }
    }
}

/// Three-digit hex colour, uniform over `#000`..=`#fff`.
pub fn random_html_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:03x}", rng.random_range(0..=0xFFFu16))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_are_three_digit_hex() {
        let mut fill = TileFill::random(Some(7));
        for _ in 0..500 {
            let c = fill.next_color();
            assert_eq!(c.len(), 4, "{c}");
            assert!(c.starts_with('#'));
            assert!(c[1..].chars().all(|ch| ch.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn seeded_colors_repeat() {
        let mut a = TileFill::random(Some(42));
        let mut b = TileFill::random(Some(42));
        let xs: Vec<_> = (0..20).map(|_| a.next_color()).collect();
        let ys: Vec<_> = (0..20).map(|_| b.next_color()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = TileFill::random(Some(1));
        let mut b = TileFill::random(Some(2));
        let xs: Vec<_> = (0..20).map(|_| a.next_color()).collect();
        let ys: Vec<_> = (0..20).map(|_| b.next_color()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn solid_fill_repeats_its_color() {
        let mut fill = TileFill::solid("#123");
        assert_eq!(fill.next_color(), "#123");
        assert_eq!(fill.next_color(), "#123");
    }
}
