//! Layout of several pentaflakes on one image.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::tiling::Pentaflake;

/// How a canvas places its flakes before rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Arrange {
    /// Leave every flake where it is.
    None,
    /// One equal-width column per flake, each flake centred in its column
    /// and on the vertical middle of the canvas.
    #[default]
    DistributeHorizontally,
}

/// An ordered collection of pentaflakes sharing one image.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    flakes: Vec<Pentaflake>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, flake: Pentaflake) -> &mut Self {
        self.flakes.push(flake);
        self
    }

    #[inline]
    pub fn flakes(&self) -> &[Pentaflake] {
        &self.flakes
    }

    /// Total elements across all flakes.
    pub fn element_count(&self) -> usize {
        self.flakes.iter().map(|f| f.elements().len()).sum()
    }

    /// Place the flakes on a `width` × `height` image.
    pub fn arrange(&mut self, width: f64, height: f64, mode: Arrange) -> &mut Self {
        match mode {
            Arrange::None => {}
            Arrange::DistributeHorizontally => self.distribute_horizontally(width, height),
        }
        self
    }

    fn distribute_horizontally(&mut self, width: f64, height: f64) {
        if self.flakes.is_empty() {
            return;
        }
        let slot = width / self.flakes.len() as f64;

        // Common extent: the widest flake decides whether everything shrinks.
        let extent_width = self
            .flakes
            .iter()
            .map(|f| f.bounding_box().width())
            .fold(0.0, f64::max);

        if extent_width > slot {
            let factor = extent_width / slot;
            debug!("scaling {} flakes down by {:.4} to fit {:.2} wide slots", self.flakes.len(), factor, slot);
            for flake in &mut self.flakes {
                flake.scale(factor, factor);
            }
        }

        for (i, flake) in self.flakes.iter_mut().enumerate() {
            let target = Point::new((i as f64 + 0.5) * slot, height / 2.0);
            let delta = target - flake.center();
            flake.translate(delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiling::TilingOptions;

    const EPS: f64 = 1e-9;

    fn flake(radius: f64, generations: usize) -> Pentaflake {
        let mut f = Pentaflake::new(Point::default(), radius).unwrap();
        f.make_tiling(&TilingOptions::generations(generations)).unwrap();
        f
    }

    #[test]
    fn empty_canvas_is_a_no_op() {
        let mut canvas = Canvas::new();
        canvas.arrange(600.0, 600.0, Arrange::DistributeHorizontally);
        assert!(canvas.flakes().is_empty());
        assert_eq!(canvas.element_count(), 0);
    }

    #[test]
    fn flakes_centred_in_their_slots() {
        let mut canvas = Canvas::new();
        canvas.add(flake(50.0, 1)).add(flake(50.0, 2)).add(flake(30.0, 0));
        canvas.arrange(900.0, 400.0, Arrange::DistributeHorizontally);

        for (i, f) in canvas.flakes().iter().enumerate() {
            let expected = Point::new(150.0 + 300.0 * i as f64, 200.0);
            assert!(f.center().distance(expected) < EPS, "flake {i}: {:?}", f.center());
        }
        assert_eq!(canvas.element_count(), 6 + 36 + 1);
    }

    #[test]
    fn oversize_flakes_shrink_to_fit() {
        let mut canvas = Canvas::new();
        canvas.add(flake(100.0, 1)).add(flake(100.0, 1));
        let widest = canvas.flakes()[0].bounding_box().width();
        assert!(widest > 100.0);

        canvas.arrange(200.0, 200.0, Arrange::DistributeHorizontally);
        for f in canvas.flakes() {
            assert!(f.bounding_box().width() <= 100.0 + EPS);
        }
        // Shapes keep their proportions
        let first = &canvas.flakes()[0];
        let ratio = first.bounding_box().width() / first.bounding_box().height();
        let original = flake(100.0, 1).bounding_box();
        assert!((ratio - original.width() / original.height()).abs() < 1e-9);
    }

    #[test]
    fn small_flakes_keep_their_size() {
        let mut canvas = Canvas::new();
        canvas.add(flake(10.0, 1));
        let before = canvas.flakes()[0].bounding_box().width();
        canvas.arrange(600.0, 600.0, Arrange::DistributeHorizontally);
        assert!((canvas.flakes()[0].bounding_box().width() - before).abs() < EPS);
    }

    #[test]
    fn arrange_none_leaves_positions() {
        let mut canvas = Canvas::new();
        canvas.add(flake(10.0, 1));
        canvas.arrange(600.0, 600.0, Arrange::None);
        assert!(canvas.flakes()[0].center().magnitude() < 10.0);
    }
}
