//! `pentaflake stats` - report on tilings without rendering them.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use pentaflake::Pentaflake;

use super::common::FlakeArgs;
use super::scene::Scene;

#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub flake: FlakeArgs,

    /// YAML scene file; replaces the tiling flags
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Summary of one built flake.
#[derive(Debug, Serialize)]
pub struct FlakeStats {
    pub generations: usize,
    pub elements: usize,
    pub root_circumradius: f64,
    /// Circumradius of the smallest tiles.
    pub tile_circumradius: f64,
    /// `[min_x, min_y, max_x, max_y]`
    pub bounding_box: [f64; 4],
}

impl FlakeStats {
    pub fn new(flake: &Pentaflake) -> Self {
        let tile_circumradius = flake
            .elements()
            .first()
            .map_or(flake.root().circumradius(), |t| t.circumradius());
        let b = flake.bounding_box();
        let bounding_box = [b.top_left.x, b.bottom_right.y, b.bottom_right.x, b.top_left.y];

        Self {
            generations: flake.generation_count(),
            elements: flake.elements().len(),
            root_circumradius: flake.root().circumradius(),
            tile_circumradius,
            bounding_box,
        }
    }
}

pub fn cmd_stats(args: &StatsArgs) -> Result<()> {
    let scene = match &args.config {
        Some(path) => Scene::load(path)?,
        None => args.flake.scene(),
    };
    let canvas = scene.build()?;
    let stats: Vec<FlakeStats> = canvas.flakes().iter().map(FlakeStats::new).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    for (i, s) in stats.iter().enumerate() {
        println!("flake {i}");
        println!("  generations:        {}", s.generations);
        println!("  elements:           {}", s.elements);
        println!("  root circumradius:  {:.3}", s.root_circumradius);
        println!("  tile circumradius:  {:.3}", s.tile_circumradius);
        let [x0, y0, x1, y1] = s.bounding_box;
        println!("  bounds:             ({x0:.3}, {y0:.3}) .. ({x1:.3}, {y1:.3})");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pentaflake::{Point, TilingOptions};

    #[test]
    fn stats_for_two_generations() {
        let mut flake = Pentaflake::new(Point::default(), 100.0).unwrap();
        flake.make_tiling(&TilingOptions::generations(2)).unwrap();

        let s = FlakeStats::new(&flake);
        assert_eq!(s.generations, 2);
        assert_eq!(s.elements, 36);
        let phi = pentaflake::PHI;
        assert!((s.tile_circumradius - 100.0 / phi.powi(4)).abs() < 1e-9);
        let [x0, y0, x1, y1] = s.bounding_box;
        assert!(x1 > x0 && y1 > y0);
    }

    #[test]
    fn json_shape() {
        let mut flake = Pentaflake::new(Point::default(), 100.0).unwrap();
        flake.make_tiling(&TilingOptions::generations(1)).unwrap();

        let value = serde_json::to_value(FlakeStats::new(&flake)).unwrap();
        assert_eq!(value["elements"], 6);
        assert_eq!(value["generations"], 1);
        assert_eq!(value["bounding_box"].as_array().unwrap().len(), 4);
    }
}
