//! Rasterize a rendered SVG to PNG.

use std::path::Path;

use anyhow::{Context, Result};
use resvg::usvg;
use tiny_skia::Pixmap;

/// Render `svg_content` at `scale` and save it to `png_path`.
///
/// Returns the pixel size of the written image.
pub fn write_png(svg_content: &str, png_path: &Path, scale: f32) -> Result<(u32, u32)> {
    anyhow::ensure!(scale > 0.0 && scale.is_finite(), "PNG scale must be positive, got {scale}");

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options).context("rendered SVG did not parse")?;

    let size = tree.size();
    let pixmap_width = (size.width() * scale).ceil() as u32;
    let pixmap_height = (size.height() * scale).ceil() as u32;

    let mut pixmap = Pixmap::new(pixmap_width, pixmap_height)
        .with_context(|| format!("could not create a {pixmap_width}x{pixmap_height} pixmap"))?;

    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .save_png(png_path)
        .with_context(|| format!("failed to write {}", png_path.display()))?;

    Ok((pixmap_width, pixmap_height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pentaflake::{Canvas, Pentaflake, Point, SvgStyle, TilingOptions, render_svg};

    fn sample_svg(style: &SvgStyle) -> String {
        let mut flake = Pentaflake::new(Point::default(), 100.0).unwrap();
        flake.make_tiling(&TilingOptions::generations(1)).unwrap();
        let mut canvas = Canvas::new();
        canvas.add(flake);
        render_svg(&mut canvas, style)
    }

    #[test]
    fn writes_scaled_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flake.png");
        let style = SvgStyle { width: 300.0, height: 200.0, ..Default::default() };

        let (w, h) = write_png(&sample_svg(&style), &path, 2.0).unwrap();
        assert_eq!((w, h), (600, 400));

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn rejects_bad_scale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flake.png");
        assert!(write_png(&sample_svg(&SvgStyle::default()), &path, 0.0).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        assert!(write_png("not svg", &dir.path().join("x.png"), 1.0).is_err());
    }
}
