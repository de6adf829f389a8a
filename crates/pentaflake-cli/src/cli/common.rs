//! Arguments shared across CLI commands.

use clap::Args;

use pentaflake::SvgStyle;

use super::scene::{FlakeSpec, MAX_GENERATIONS, Scene};

/// Tiling options given on the command line.
#[derive(Args, Debug, Clone)]
pub struct FlakeArgs {
    /// Number of inflation steps
    #[arg(short = 'n', long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(0..=MAX_GENERATIONS as i64))]
    pub generations: u8,

    /// Circumradius of the seed pentagon
    #[arg(short = 'r', long, default_value_t = 100.0)]
    pub radius: f64,

    /// Number of flakes side by side
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=64))]
    pub count: u32,

    /// Seed rotation in degrees (counter-clockwise)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rotate: f64,

    /// Mirror the seed about its horizontal centre line
    #[arg(long)]
    pub flip_x: bool,

    /// Mirror the seed about its vertical centre line
    #[arg(long)]
    pub flip_y: bool,

    /// Child positions (0-5) pruned at every generation, comma-separated
    #[arg(long, value_delimiter = ',', value_name = "I,J,...")]
    pub remove: Vec<usize>,
}

impl FlakeArgs {
    pub fn flake_spec(&self) -> FlakeSpec {
        FlakeSpec {
            circumradius: self.radius,
            generations: usize::from(self.generations),
            rotate: self.rotate.to_radians(),
            flip_x: self.flip_x,
            flip_y: self.flip_y,
            remove_indices: (!self.remove.is_empty()).then(|| self.remove.clone()),
            ..FlakeSpec::default()
        }
    }

    /// Scene of `count` identical flakes with default styling.
    pub fn scene(&self) -> Scene {
        let spec = self.flake_spec();
        Scene {
            style: SvgStyle::default(),
            flakes: vec![spec; self.count as usize],
        }
    }
}

/// Styling overrides. Unset flags keep the scene's (or the default) value.
#[derive(Args, Debug, Clone, Default)]
pub struct StyleArgs {
    /// Image width (must be positive)
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<f64>,

    /// Image height (must be positive)
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// Outline colour
    #[arg(long)]
    pub stroke_color: Option<String>,

    /// Outline width
    #[arg(long)]
    pub stroke_width: Option<f64>,

    /// Fill colour for every tile
    #[arg(long)]
    pub tile_color: Option<String>,

    /// Fill opacity (0-1)
    #[arg(long)]
    pub opacity: Option<f64>,

    /// Draw outlines only
    #[arg(long)]
    pub outline_only: bool,

    /// Random colour per tile
    #[arg(long)]
    pub random_colors: bool,

    /// Seed for random colours
    #[arg(long)]
    pub seed: Option<u64>,
}

impl StyleArgs {
    pub fn apply(&self, style: &mut SvgStyle) {
        if let Some(w) = self.width {
            style.width = w;
        }
        if let Some(h) = self.height {
            style.height = h;
        }
        if let Some(c) = &self.stroke_color {
            style.stroke_color = c.clone();
        }
        if let Some(w) = self.stroke_width {
            style.base_stroke_width = w;
        }
        if let Some(c) = &self.tile_color {
            style.tile_color = c.clone();
        }
        if let Some(o) = self.opacity {
            style.tile_opacity = o;
        }
        if self.outline_only {
            style.draw_tiles = false;
        }
        if self.random_colors {
            style.random_tile_colors = true;
        }
        if self.seed.is_some() {
            style.seed = self.seed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flake_args() -> FlakeArgs {
        FlakeArgs {
            generations: 2,
            radius: 50.0,
            count: 3,
            rotate: 90.0,
            flip_x: false,
            flip_y: true,
            remove: vec![0, 2],
        }
    }

    #[test]
    fn flake_args_convert_degrees() {
        let spec = flake_args().flake_spec();
        assert!((spec.rotate - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(spec.remove_indices, Some(vec![0, 2]));
        assert!(spec.flip_y);
    }

    #[test]
    fn no_removal_means_none() {
        let args = FlakeArgs { remove: vec![], ..flake_args() };
        assert_eq!(args.flake_spec().remove_indices, None);
    }

    #[test]
    fn count_repeats_the_flake() {
        let scene = flake_args().scene();
        assert_eq!(scene.flakes.len(), 3);
        assert!(scene.flakes.iter().all(|f| f.circumradius == 50.0));
    }

    #[test]
    fn style_overrides_only_what_is_set() {
        let mut style = SvgStyle::default();
        StyleArgs {
            width: Some(1200.0),
            outline_only: true,
            seed: Some(3),
            ..Default::default()
        }
        .apply(&mut style);

        assert_eq!(style.width, 1200.0);
        assert_eq!(style.height, 600.0);
        assert!(!style.draw_tiles);
        assert_eq!(style.seed, Some(3));
        assert_eq!(style.stroke_color, "#000");
    }
}
