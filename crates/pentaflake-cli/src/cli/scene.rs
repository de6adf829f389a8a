//! Scene files: declarative descriptions of a canvas.
//!
//! A scene is a YAML file with a `style` block (an [`SvgStyle`]) and a list
//! of flakes, each with its own tiling options. Anything left out takes its
//! default.
//!
//! ```yaml
//! style:
//!   width: 900
//!   random_tile_colors: true
//! flakes:
//!   - generations: 3
//!   - generations: 2
//!     remove_indices: [0]
//!     rotate: 0.628   # radians
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use pentaflake::{Canvas, Pentaflake, Point, SvgStyle, TilingOptions};

/// Deepest tiling the CLI will build (6^8 ≈ 1.7 million tiles).
pub const MAX_GENERATIONS: usize = 8;

/// A complete scene: style plus the flakes to draw.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub style: SvgStyle,
    pub flakes: Vec<FlakeSpec>,
}

/// One pentaflake in a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlakeSpec {
    /// Seed centre `[x, y]`; the canvas layout usually moves it anyway.
    pub origin: [f64; 2],
    pub circumradius: f64,
    pub generations: usize,
    /// Seed rotation in radians.
    pub rotate: f64,
    pub flip_x: bool,
    pub flip_y: bool,
    pub remove_indices: Option<Vec<usize>>,
}

impl Default for FlakeSpec {
    fn default() -> Self {
        Self {
            origin: [0.0, 0.0],
            circumradius: 100.0,
            generations: 3,
            rotate: 0.0,
            flip_x: false,
            flip_y: false,
            remove_indices: None,
        }
    }
}

impl FlakeSpec {
    pub fn tiling_options(&self) -> TilingOptions {
        TilingOptions {
            generations: self.generations,
            rotate: self.rotate,
            flip_x: self.flip_x,
            flip_y: self.flip_y,
            remove_indices: self.remove_indices.clone(),
        }
    }

    /// Seed the flake and grow it.
    pub fn build(&self) -> Result<Pentaflake> {
        if self.generations > MAX_GENERATIONS {
            bail!(
                "{} generations requested, at most {} are supported",
                self.generations,
                MAX_GENERATIONS
            );
        }

        let origin = Point::new(self.origin[0], self.origin[1]);
        let mut flake = Pentaflake::new(origin, self.circumradius)?;
        flake.make_tiling(&self.tiling_options())?;
        Ok(flake)
    }
}

impl Scene {
    /// Load a scene from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read scene file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("invalid scene file {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let scene: Scene = serde_yaml::from_str(content)?;
        if scene.flakes.is_empty() {
            bail!("scene has no flakes");
        }
        Ok(scene)
    }

    /// Build every flake into a canvas, in scene order.
    pub fn build(&self) -> Result<Canvas> {
        let mut canvas = Canvas::new();
        for (i, spec) in self.flakes.iter().enumerate() {
            let flake = spec.build().with_context(|| format!("flake {i}"))?;
            log::debug!("flake {}: {} elements", i, flake.elements().len());
            canvas.add(flake);
        }
        Ok(canvas)
    }
}
