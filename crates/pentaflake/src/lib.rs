//! # pentaflake
//!
//! Pentaflake fractal geometry and rendering.
//!
//! A pentaflake starts as one regular pentagon. Every inflation step
//! replaces each pentagon with six smaller ones: one on its centre and five
//! petals around it. After a few generations the tiles go to the SVG
//! renderer.
//!
//! ```
//! use pentaflake::{Canvas, Pentaflake, Point, SvgStyle, TilingOptions, render_svg};
//!
//! let mut flake = Pentaflake::new(Point::new(0.0, 0.0), 100.0)?;
//! flake.make_tiling(&TilingOptions::generations(2))?;
//! assert_eq!(flake.elements().len(), 36);
//!
//! let mut canvas = Canvas::new();
//! canvas.add(flake);
//! let svg = render_svg(&mut canvas, &SvgStyle::default());
//! assert!(svg.contains("<path"));
//! # Ok::<(), pentaflake::GeometryError>(())
//! ```
//!
//! ## Rust Lesson #7: Modules
//!
//! Each `pub mod` below is one file in `src/`. The `pub use` lines re-export
//! the main types so callers can write `pentaflake::Pentaflake` instead of
//! `pentaflake::tiling::Pentaflake`.

pub mod canvas;
pub mod error;
pub mod geometry;
pub mod palette;
pub mod regular;
pub mod svg;
pub mod tile;
pub mod tiling;

// Re-export common types at crate root for convenience.
pub use canvas::{Arrange, Canvas};
pub use error::{GeometryError, Result};
pub use geometry::{BoundingBox, Point, Polygon};
pub use palette::TileFill;
pub use regular::{RegularPolygon, regular_polygon_vertices};
pub use svg::{SvgStyle, render_svg};
pub use tile::{CHILD_COUNT, PHI, PentaflakeTile};
pub use tiling::{Pentaflake, TilingOptions};
