//! The pentaflake driver: a seed tile and its current generation.
//!
//! ## Pivots
//!
//! Three rotations exist and each has a fixed pivot:
//! - [`PentaflakeTile::rotate`] takes the pivot explicitly.
//! - [`TilingOptions::rotate`] turns the seed about the seed's own centre
//!   before inflating.
//! - [`Pentaflake::rotate`] turns the current generation about the root's
//!   centre.
//!
//! ## Growth
//!
//! Each generation multiplies the element count by six (or by six minus the
//! number of pruned positions). Bounding the generation count is up to the
//! caller.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::geometry::{BoundingBox, Point};
use crate::tile::{CHILD_COUNT, PentaflakeTile};

/// How to build a tiling. Passed by value; every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilingOptions {
    /// Number of inflation steps.
    pub generations: usize,
    /// Seed rotation in radians (counter-clockwise, about the seed's centre).
    pub rotate: f64,
    /// Mirror the seed about its horizontal centre line.
    pub flip_x: bool,
    /// Mirror the seed about its vertical centre line.
    pub flip_y: bool,
    /// Child positions pruned from every tile at every step.
    pub remove_indices: Option<Vec<usize>>,
}

impl TilingOptions {
    pub fn generations(generations: usize) -> Self {
        Self { generations, ..Self::default() }
    }
}

/// A pentaflake: the seed tile and the generation grown from it.
#[derive(Debug, Clone)]
pub struct Pentaflake {
    root: PentaflakeTile,
    elements: Vec<PentaflakeTile>,
    generation_count: usize,
}

impl Pentaflake {
    /// Seed a pentaflake with an upright, unmarked pentagon.
    pub fn new(origin: Point, circumradius: f64) -> Result<Self> {
        Ok(Self::from_root(PentaflakeTile::new(origin, circumradius)?))
    }

    pub fn from_root(root: PentaflakeTile) -> Self {
        Self {
            elements: vec![root.clone()],
            root,
            generation_count: 0,
        }
    }

    #[inline]
    pub fn root(&self) -> &PentaflakeTile {
        &self.root
    }

    /// Current generation, in inflation order.
    #[inline]
    pub fn elements(&self) -> &[PentaflakeTile] {
        &self.elements
    }

    #[inline]
    pub fn generation_count(&self) -> usize {
        self.generation_count
    }

    /// Rebuild the tiling from the root.
    ///
    /// The seed is a copy of the root, rotated then flipped about its own
    /// centre; the stored root itself is not changed, so calling this twice
    /// with the same options gives the same result.
    pub fn make_tiling(&mut self, options: &TilingOptions) -> Result<()> {
        // Validate up front so a bad index leaves the previous tiling intact.
        let remove = options.remove_indices.as_deref();
        if let Some(indices) = remove {
            validate_indices(indices)?;
        }

        let mut seed = self.root.clone();
        let pivot = seed.center();
        if options.rotate != 0.0 {
            seed.rotate(options.rotate, pivot);
        }
        if options.flip_x {
            seed.flip_x_about(pivot);
        }
        if options.flip_y {
            seed.flip_y_about(pivot);
        }

        self.elements = vec![seed];
        self.generation_count = 0;
        for _ in 0..options.generations {
            self.inflate(remove)?;
        }
        Ok(())
    }

    /// Replace the current generation with the children of every element.
    ///
    /// `remove_indices` prunes the same child positions from each element's
    /// own six children, not from the concatenated list. Indices must be in
    /// `0..6`; duplicates count once. On error nothing changes.
    pub fn inflate(&mut self, remove_indices: Option<&[usize]>) -> Result<()> {
        let mut keep = [true; CHILD_COUNT];
        if let Some(indices) = remove_indices {
            validate_indices(indices)?;
            for &i in indices {
                keep[i] = false;
            }
            trace!("pruning child positions {:?}", indices);
        }

        let next = inflate_all(&self.elements, &keep);
        self.elements = next;
        self.generation_count += 1;

        debug!(
            "generation {}: {} elements",
            self.generation_count,
            self.elements.len()
        );
        Ok(())
    }

    /// Rotate the whole generation by `theta` radians about the root's centre.
    pub fn rotate(&mut self, theta: f64) {
        let pivot = self.root.center();
        for element in &mut self.elements {
            element.rotate(theta, pivot);
        }
    }

    /// Mirror the whole generation about the root centre's horizontal line.
    pub fn flip_x(&mut self) {
        let pivot = self.root.center();
        for element in &mut self.elements {
            element.flip_x_about(pivot);
        }
    }

    /// Mirror the whole generation about the root centre's vertical line.
    pub fn flip_y(&mut self) {
        let pivot = self.root.center();
        for element in &mut self.elements {
            element.flip_y_about(pivot);
        }
    }

    /// Bounds of every element of the current generation.
    pub fn bounding_box(&self) -> BoundingBox {
        self.elements
            .iter()
            .map(PentaflakeTile::bounding_box)
            .reduce(|acc, bb| acc.union(&bb))
            .unwrap_or_else(|| self.root.bounding_box())
    }

    /// Centre of the current generation's bounding box.
    pub fn center(&self) -> Point {
        self.bounding_box().center()
    }

    /// Move the generation and the root by `delta`.
    pub fn translate(&mut self, delta: Point) {
        self.root.translate(delta);
        for element in &mut self.elements {
            element.translate(delta);
        }
    }

    /// Divide every coordinate of the generation and the root by `(sx, sy)`.
    ///
    /// Scaling is about the coordinate origin, matching [`crate::Polygon::scale`].
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.root.scale(sx, sy);
        for element in &mut self.elements {
            element.scale(sx, sy);
        }
    }
}

fn validate_indices(indices: &[usize]) -> Result<()> {
    match indices.iter().find(|&&i| i >= CHILD_COUNT) {
        Some(&index) => Err(GeometryError::IndexOutOfRange {
            index,
            children: CHILD_COUNT,
        }),
        None => Ok(()),
    }
}

fn kept_children(tile: &PentaflakeTile, keep: &[bool; CHILD_COUNT]) -> Vec<PentaflakeTile> {
    tile.inflate()
        .into_iter()
        .zip(keep)
        .filter_map(|(child, &k)| k.then_some(child))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn inflate_all(elements: &[PentaflakeTile], keep: &[bool; CHILD_COUNT]) -> Vec<PentaflakeTile> {
    let per_tile = keep.iter().filter(|&&k| k).count();
    let mut next = Vec::with_capacity(elements.len() * per_tile);
    for element in elements {
        next.extend(kept_children(element, keep));
    }
    next
}

/// Parallel variant. `par_iter` is indexed, so `collect` keeps input order and
/// pruning stays deterministic.
#[cfg(feature = "parallel")]
fn inflate_all(elements: &[PentaflakeTile], keep: &[bool; CHILD_COUNT]) -> Vec<PentaflakeTile> {
    use rayon::prelude::*;

    elements
        .par_iter()
        .flat_map_iter(|element| kept_children(element, keep))
        .collect()
}
