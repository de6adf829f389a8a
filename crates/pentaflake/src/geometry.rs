//! Core geometry types for pentaflake.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! `Point` derives `Copy`, so passing it around never moves it: every
//! operation below takes points by value and hands back a new one.
//! `Polygon` owns a `Vec`, so it is `Clone` but not `Copy`.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 2D point with x,y coordinates.
///
/// Doubles as a 2D vector and as a complex number (`x + iy`) for rotations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned bounds of a vertex set.
///
/// Uses the math convention: larger y is "up", so the top-left corner has the
/// largest y and the bottom-right corner the smallest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub top_left: Point,
    pub bottom_right: Point,
}

/// An ordered vertex sequence.
///
/// Vertices are kept in winding order, which is the order `path()` draws
/// them. Transforms replace every vertex in place and never add or remove one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

// ============================================================================
// POINT
// ============================================================================

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at distance `r` from the origin in direction `theta` (radians).
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    /// Distance from the origin.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle from the positive x axis, in (−π, π].
    #[inline]
    pub fn phase(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        (*self - other).magnitude()
    }

    /// Scale each axis independently (`sx` on x, `sy` on y).
    #[inline]
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        Self::new(self.x * sx, self.y * sy)
    }

    /// Rotate by `theta` radians (counter-clockwise) around `origin`.
    #[inline]
    pub fn rotate_about(&self, theta: f64, origin: Point) -> Self {
        (*self - origin) * Point::from_polar(1.0, theta) + origin
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// ## Rust Lesson #24: Operator Overloading
//
// Implementing the `std::ops` traits lets `a + b` work on our own types.
// Since Point is Copy, `self` by value costs nothing.

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Complex multiplication: `(a + bi)(c + di)`.
impl Mul for Point {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: Point) -> Point {
        Point::new(
            self.x * rhs.x - self.y * rhs.y,
            self.x * rhs.y + self.y * rhs.x,
        )
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    #[inline]
    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

// ============================================================================
// BOUNDING BOX
// ============================================================================

impl BoundingBox {
    /// Horizontal extent (never negative).
    #[inline]
    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    /// Vertical extent (never negative).
    #[inline]
    pub fn height(&self) -> f64 {
        self.top_left.y - self.bottom_right.y
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            (self.top_left.x + self.bottom_right.x) / 2.0,
            (self.top_left.y + self.bottom_right.y) / 2.0,
        )
    }

    /// Smallest box covering both.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            top_left: Point::new(
                self.top_left.x.min(other.top_left.x),
                self.top_left.y.max(other.top_left.y),
            ),
            bottom_right: Point::new(
                self.bottom_right.x.max(other.bottom_right.x),
                self.bottom_right.y.min(other.bottom_right.y),
            ),
        }
    }
}

// ============================================================================
// POLYGON
// ============================================================================

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Apply `f` to every vertex, keeping order.
    ///
    /// ## Rust Lesson #25: Closures as Parameters
    ///
    /// `impl Fn(Point) -> Point` accepts any closure with that signature.
    /// Each call site gets its own monomorphized copy, so there is no
    /// dynamic dispatch.
    fn map_vertices(&mut self, f: impl Fn(Point) -> Point) -> &mut Self {
        self.vertices = self.vertices.iter().map(|&v| f(v)).collect();
        self
    }

    /// Move every vertex by `delta`.
    pub fn translate(&mut self, delta: Point) -> &mut Self {
        self.map_vertices(|v| v + delta)
    }

    /// Rotate every vertex by `theta` radians (counter-clockwise) about `origin`.
    pub fn rotate(&mut self, theta: f64, origin: Point) -> &mut Self {
        let rot = Point::from_polar(1.0, theta);
        self.map_vertices(|v| (v - origin) * rot + origin)
    }

    /// Divide every x by `sx` and every y by `sy`.
    ///
    /// Note the direction: `scale(2.0, 2.0)` halves the figure. Use
    /// [`Polygon::scale_by`] to multiply instead.
    pub fn scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.map_vertices(|v| Point::new(v.x / sx, v.y / sy))
    }

    /// Multiply every x by `sx` and every y by `sy`.
    pub fn scale_by(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.map_vertices(|v| v.scale(sx, sy))
    }

    /// Reflect about the x axis (negate every y).
    pub fn mirror_x(&mut self) -> &mut Self {
        self.map_vertices(|v| Point::new(v.x, -v.y))
    }

    /// Get the bounding box, or `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = *self.vertices.first()?;

        let mut top_left = first;
        let mut bottom_right = first;
        for v in &self.vertices[1..] {
            top_left.x = top_left.x.min(v.x);
            top_left.y = top_left.y.max(v.y);
            bottom_right.x = bottom_right.x.max(v.x);
            bottom_right.y = bottom_right.y.min(v.y);
        }

        Some(BoundingBox { top_left, bottom_right })
    }

    /// Arithmetic mean of the vertices, or `None` for an empty polygon.
    pub fn centroid(&self) -> Option<Point> {
        if self.vertices.is_empty() {
            return None;
        }
        let sum = self.vertices.iter().fold(Point::default(), |acc, &v| acc + v);
        Some(sum / self.vertices.len() as f64)
    }

    /// SVG path data: absolute move to vertex 0, a relative line to each
    /// following vertex in stored order, then close.
    ///
    /// An empty polygon yields an empty string.
    pub fn path(&self) -> String {
        let Some(first) = self.vertices.first() else {
            return String::new();
        };

        let mut d = String::with_capacity(self.vertices.len() * 24);
        d.push_str(&format!("m{},{} ", first.x, first.y));
        for pair in self.vertices.windows(2) {
            let dl = pair[1] - pair[0];
            d.push_str(&format!("l{},{} ", dl.x, dl.y));
        }
        d.push('z');
        d
    }

    /// Signed area using the shoelace formula.
    ///
    /// Positive for counter-clockwise winding, negative for clockwise.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }

        let mut area = 0.0;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            area += a.x * b.y - b.x * a.y;
        }
        area / 2.0
    }
}

// ============================================================================
// TESTS
// ============================================================================
