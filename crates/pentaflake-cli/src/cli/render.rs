//! `pentaflake render` - build flakes and write SVG (and optionally PNG).

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::Args;

use pentaflake::render_svg;

use super::common::{FlakeArgs, StyleArgs};
use super::png::write_png;
use super::scene::Scene;

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub flake: FlakeArgs,

    #[command(flatten)]
    pub style: StyleArgs,

    /// YAML scene file; replaces the tiling flags, style flags still apply
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output SVG path, or `-` for stdout
    #[arg(short = 'o', long, default_value = "pentaflake.svg")]
    pub output: String,

    /// Also rasterize to this PNG file
    #[arg(long, value_name = "FILE")]
    pub png: Option<PathBuf>,

    /// Pixel scale for PNG output
    #[arg(long, default_value_t = 2.0)]
    pub png_scale: f32,
}

impl RenderArgs {
    /// Scene from `--config` when given, else from the flags.
    pub fn scene(&self) -> Result<Scene> {
        let mut scene = match &self.config {
            Some(path) => Scene::load(path)?,
            None => self.flake.scene(),
        };
        self.style.apply(&mut scene.style);
        validate_canvas_size(scene.style.width, scene.style.height)?;
        Ok(scene)
    }
}

/// Width and height must be finite and positive; layout divides by them.
fn validate_canvas_size(width: f64, height: f64) -> Result<()> {
    ensure!(
        width.is_finite() && width > 0.0,
        "canvas width must be a positive number, got {width}"
    );
    ensure!(
        height.is_finite() && height > 0.0,
        "canvas height must be a positive number, got {height}"
    );
    Ok(())
}

pub fn cmd_render(args: &RenderArgs) -> Result<()> {
    let scene = args.scene()?;
    let mut canvas = scene.build()?;
    log::info!(
        "{} flake(s), {} tiles",
        canvas.flakes().len(),
        canvas.element_count()
    );

    let svg = render_svg(&mut canvas, &scene.style);

    if args.output == "-" {
        io::stdout()
            .lock()
            .write_all(svg.as_bytes())
            .context("failed to write SVG to stdout")?;
    } else {
        fs::write(&args.output, &svg)
            .with_context(|| format!("failed to write {}", args.output))?;
        eprintln!("Wrote: {}", args.output);
    }

    if let Some(png_path) = &args.png {
        let (w, h) = write_png(&svg, png_path, args.png_scale)?;
        eprintln!("Wrote: {} ({}x{})", png_path.display(), w, h);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        render: RenderArgs,
    }

    fn parse(args: &[&str]) -> RenderArgs {
        let mut argv = vec!["render"];
        argv.extend_from_slice(args);
        Harness::try_parse_from(argv).unwrap().render
    }

    #[test]
    fn accepts_default_size() {
        let scene = parse(&[]).scene().unwrap();
        assert_eq!(scene.style.width, 600.0);
        assert_eq!(scene.flakes.len(), 1);
    }

    #[test]
    fn rejects_bad_canvas_size() {
        for (w, h) in [("0", "100"), ("-200", "100"), ("NaN", "100"), ("100", "-1"), ("inf", "100")] {
            let args = parse(&["--width", w, "--height", h]);
            let err = args.scene().unwrap_err();
            assert!(err.to_string().contains("must be a positive number"), "{w}x{h}: {err}");
        }
    }

    #[test]
    fn scene_file_size_is_checked_too() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.yaml");
        std::fs::write(&path, "style:\n  width: -300\nflakes:\n  - {}\n").unwrap();

        let args = RenderArgs {
            config: Some(path),
            style: StyleArgs::default(),
            ..parse(&[])
        };
        assert!(args.scene().is_err());
    }
}
