//! Pentaflake tiles and the inflation step.
//!
//! One inflation replaces a pentagon with six smaller ones: a centre child
//! on the parent's centre and five petals around it, each scaled by 1/φ².
//!
//! ```text
//!            petal 1
//!     petal 2       petal 0  ──► direction of the parent's vertex 0
//!            centre
//!     petal 3       petal 4
//! ```
//!
//! ## Orientation marks
//!
//! Every tile carries a `mark`. Inflating an unmarked tile turns the centre
//! child by π/5 and marks it; inflating a marked tile leaves the centre child
//! unturned and unmarked but turns and marks all five petals. Without this
//! alternation successive generations leave gaps and overlaps.

use std::f64::consts::PI;

use crate::error::Result;
use crate::geometry::{BoundingBox, Point};
use crate::regular::RegularPolygon;

/// Golden ratio, (1 + √5) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Children produced by one inflation: the centre child then five petals.
pub const CHILD_COUNT: usize = 6;

/// Angle between neighbouring petals.
const PETAL_STEP: f64 = 2.0 * PI / 5.0;

/// Turn applied to a child when it becomes marked.
const MARK_TURN: f64 = PI / 5.0;

/// A regular pentagon together with its orientation mark.
///
/// The mark lives next to the shape so cloning a tile can never drop it.
#[derive(Debug, Clone, PartialEq)]
pub struct PentaflakeTile {
    shape: RegularPolygon,
    mark: bool,
}

impl PentaflakeTile {
    /// Unmarked seed tile with vertex 0 at angle 0.
    pub fn new(origin: Point, circumradius: f64) -> Result<Self> {
        Ok(Self {
            shape: RegularPolygon::pentagon(origin, circumradius)?,
            mark: false,
        })
    }

    /// Child tile: a pentagon turned by `angle` about its own centre.
    fn child(center: Point, circumradius: f64, angle: f64, mark: bool) -> Self {
        let mut shape = RegularPolygon::pentagon_from_parent(center, circumradius);
        if angle != 0.0 {
            shape.rotate(angle, center);
        }
        Self { shape, mark }
    }

    #[inline]
    pub fn shape(&self) -> &RegularPolygon {
        &self.shape
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        self.shape.vertices()
    }

    /// Orientation mark; only inflation changes it.
    #[inline]
    pub fn is_marked(&self) -> bool {
        self.mark
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.shape.center()
    }

    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.shape.circumradius()
    }

    #[inline]
    pub fn side_length(&self) -> f64 {
        self.shape.side_length()
    }

    #[inline]
    pub fn inradius(&self) -> f64 {
        self.shape.inradius()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.shape.height()
    }

    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        self.shape.bounding_box()
    }

    pub fn path(&self) -> String {
        self.shape.path()
    }

    pub fn translate(&mut self, delta: Point) -> &mut Self {
        self.shape.translate(delta);
        self
    }

    pub fn rotate(&mut self, theta: f64, origin: Point) -> &mut Self {
        self.shape.rotate(theta, origin);
        self
    }

    /// Divide coordinates by `(sx, sy)`; see [`crate::Polygon::scale`].
    pub fn scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.shape.scale(sx, sy);
        self
    }

    /// Mirror image about the x axis, keeping the mark.
    pub fn conjugate(&self) -> Self {
        Self {
            shape: self.shape.conjugate(),
            mark: self.mark,
        }
    }

    pub(crate) fn flip_x_about(&mut self, pivot: Point) -> &mut Self {
        self.shape.flip_x_about(pivot);
        self
    }

    pub(crate) fn flip_y_about(&mut self, pivot: Point) -> &mut Self {
        self.shape.flip_y_about(pivot);
        self
    }

    /// Radius of the children produced by [`PentaflakeTile::inflate`].
    pub fn child_circumradius(&self) -> f64 {
        let s = self.side_length() / (1.0 + PHI);
        s * ((5.0 + 5f64.sqrt()) / 10.0).sqrt()
    }

    /// Compute the six children of one inflation step.
    ///
    /// Order is `[centre, petal0, …, petal4]`; petal `k` sits at angle
    /// `phase(v0) + k·2π/5` from the parent's centre, where `v0` is the
    /// parent's vertex 0 relative to its centre. Pruning addresses children
    /// by this position. The parent is not modified.
    pub fn inflate(&self) -> [PentaflakeTile; CHILD_COUNT] {
        let r = self.child_circumradius();
        let d = r * PHI;
        let c = self.center();
        let heading = (self.vertices()[0] - c).phase();

        // Children start from the parent's unmarked orientation, so a rotated
        // root rotates the whole figure instead of only the petal positions.
        let base = if self.mark { heading - MARK_TURN } else { heading };

        // ## Rust Lesson #26: array::from_fn
        //
        // Builds a fixed-size array from an index closure. The length comes
        // from the return type, so there is no Vec and no bounds check at
        // the call site.
        std::array::from_fn(|i| {
            if i == 0 {
                if self.mark {
                    Self::child(c, r, base, false)
                } else {
                    Self::child(c, r, base + MARK_TURN, true)
                }
            } else {
                let k = (i - 1) as f64;
                let petal_center = c + Point::from_polar(d, heading + k * PETAL_STEP);
                if self.mark {
                    Self::child(petal_center, r, base + MARK_TURN, true)
                } else {
                    Self::child(petal_center, r, base, false)
                }
            }
        })
    }
}
