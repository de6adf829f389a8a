//! Regular polygons and the regular pentagon.
//!
//! A regular polygon is a [`Polygon`] plus the parameters it was built from.
//! After a translate or rotate the vertices move but `origin` and
//! `circumradius` stay as they were; use [`RegularPolygon::center`] for the
//! live position. A scale rescales both, so a scaled pentagon still inflates
//! into children that fit it.

use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::geometry::{BoundingBox, Point, Polygon};

/// Generate `n` vertices evenly spaced on the circle of radius `circumradius`
/// around `origin`.
///
/// Vertex 0 sits at angle 0 (`origin + (circumradius, 0)`) and the rest
/// follow counter-clockwise in steps of `2π/n`.
pub fn regular_polygon_vertices(origin: Point, circumradius: f64, n: usize) -> Result<Vec<Point>> {
    if n < 3 {
        return Err(GeometryError::invalid(format!(
            "a regular polygon needs at least 3 sides, got {n}"
        )));
    }
    if !circumradius.is_finite() || circumradius <= 0.0 {
        return Err(GeometryError::invalid(format!(
            "circumradius must be a finite value > 0, got {circumradius}"
        )));
    }
    if !origin.is_finite() {
        return Err(GeometryError::invalid(format!(
            "origin must be finite, got ({}, {})",
            origin.x, origin.y
        )));
    }

    Ok(circle_points(origin, circumradius, n))
}

fn circle_points(origin: Point, circumradius: f64, n: usize) -> Vec<Point> {
    let step = 2.0 * PI / n as f64;
    (0..n)
        .map(|i| origin + Point::from_polar(circumradius, i as f64 * step))
        .collect()
}

/// A regular polygon with its construction parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularPolygon {
    polygon: Polygon,
    origin: Point,
    circumradius: f64,
    n: usize,
}

impl RegularPolygon {
    /// Build a regular `n`-gon.
    ///
    /// Fails with [`GeometryError::InvalidGeometry`] for `n < 3`, a
    /// non-positive or non-finite radius, or a non-finite origin.
    pub fn new(origin: Point, circumradius: f64, n: usize) -> Result<Self> {
        let vertices = regular_polygon_vertices(origin, circumradius, n)?;
        Ok(Self {
            polygon: Polygon::new(vertices),
            origin,
            circumradius,
            n,
        })
    }

    /// Regular pentagon with vertex 0 at angle 0.
    pub fn pentagon(origin: Point, circumradius: f64) -> Result<Self> {
        Self::new(origin, circumradius, 5)
    }

    /// Pentagon from parameters already known to be valid (a child derived
    /// from a valid parent).
    pub(crate) fn pentagon_from_parent(origin: Point, circumradius: f64) -> Self {
        Self {
            polygon: Polygon::new(circle_points(origin, circumradius, 5)),
            origin,
            circumradius,
            n: 5,
        }
    }

    #[inline]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.polygon.vertices
    }

    /// Centre this shape was constructed around.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// Symmetry order (number of sides).
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Mean of the current vertices. Follows translations, unlike `origin`.
    #[inline]
    pub fn center(&self) -> Point {
        // n >= 3 is enforced at construction, so there is always a centroid
        self.polygon.centroid().unwrap_or(self.origin)
    }

    #[inline]
    pub fn side_length(&self) -> f64 {
        2.0 * self.circumradius * (PI / self.n as f64).sin()
    }

    #[inline]
    pub fn inradius(&self) -> f64 {
        self.circumradius * (PI / self.n as f64).cos()
    }

    /// Distance from a vertex to the opposite side (exact for odd `n`).
    #[inline]
    pub fn height(&self) -> f64 {
        self.circumradius + self.inradius()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let c = self.center();
        self.polygon
            .bounding_box()
            .unwrap_or(BoundingBox { top_left: c, bottom_right: c })
    }

    pub fn path(&self) -> String {
        self.polygon.path()
    }

    pub fn translate(&mut self, delta: Point) -> &mut Self {
        self.polygon.translate(delta);
        self
    }

    /// Rotate about an explicit `origin` (pass `self.center()` to spin in place).
    pub fn rotate(&mut self, theta: f64, origin: Point) -> &mut Self {
        self.polygon.rotate(theta, origin);
        self
    }

    /// Divide coordinates by `(sx, sy)`; see [`Polygon::scale`].
    ///
    /// `origin` and `circumradius` follow. After a non-uniform scale the
    /// shape is no longer regular and `circumradius` becomes the distance
    /// from the centre to vertex 0.
    pub fn scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.polygon.scale(sx, sy);
        self.origin = Point::new(self.origin.x / sx, self.origin.y / sy);
        self.circumradius = if sx.abs() == sy.abs() {
            self.circumradius / sx.abs()
        } else {
            self.vertices()[0].distance(self.center())
        };
        self
    }

    /// Mirror image about the x axis (every y negated).
    ///
    /// The construction parameters carry over with the origin mirrored too,
    /// so the result is still a regular polygon of the same size.
    pub fn conjugate(&self) -> Self {
        let mut polygon = self.polygon.clone();
        polygon.mirror_x();
        Self {
            polygon,
            origin: Point::new(self.origin.x, -self.origin.y),
            circumradius: self.circumradius,
            n: self.n,
        }
    }

    /// Mirror about the horizontal line through `pivot`.
    pub(crate) fn flip_x_about(&mut self, pivot: Point) -> &mut Self {
        self.polygon
            .translate(-pivot)
            .mirror_x()
            .translate(pivot);
        self
    }

    /// Mirror about the vertical line through `pivot`.
    pub(crate) fn flip_y_about(&mut self, pivot: Point) -> &mut Self {
        // A vertical mirror is a horizontal mirror followed by a half turn.
        self.flip_x_about(pivot).rotate(PI, pivot)
    }
}
