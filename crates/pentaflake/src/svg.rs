//! SVG output - turn a canvas of pentaflakes into a document.
//!
//! Each tile becomes one `<path>` whose `d` attribute is the tile's
//! [`path()`](crate::PentaflakeTile::path). Styling lives on a single `<g>`.
//! Coordinates are written as-is, with no y flip.

use quick_xml::escape::escape;
use serde::{Deserialize, Serialize};

use crate::canvas::{Arrange, Canvas};
use crate::palette::TileFill;

/// Document size and styling. Every field has a default, so a scene file only
/// lists what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgStyle {
    pub width: f64,
    pub height: f64,
    pub stroke_color: String,
    pub base_stroke_width: f64,
    /// Fill tiles; when false only outlines are drawn.
    pub draw_tiles: bool,
    pub tile_color: String,
    pub tile_opacity: f64,
    /// Pick a random colour per tile instead of `tile_color`.
    pub random_tile_colors: bool,
    pub arrange: Arrange,
    /// Seed for random tile colours.
    pub seed: Option<u64>,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            stroke_color: "#000".to_string(),
            base_stroke_width: 5.0,
            draw_tiles: true,
            tile_color: "#000".to_string(),
            tile_opacity: 1.0,
            random_tile_colors: false,
            arrange: Arrange::DistributeHorizontally,
            seed: None,
        }
    }
}

/// Arrange `canvas` per `style` and render it.
pub fn render_svg(canvas: &mut Canvas, style: &SvgStyle) -> String {
    canvas.arrange(style.width, style.height, style.arrange);

    let mut fill = if style.random_tile_colors {
        TileFill::random(style.seed)
    } else {
        TileFill::solid(style.tile_color.as_str())
    };

    let mut svg = String::with_capacity(256 + canvas.element_count() * 160);

    svg.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    svg.push_str(&format!(
        "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" baseProfile=\"full\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        w = style.width,
        h = style.height,
    ));
    svg.push_str(&format!(
        "<g style=\"stroke:{}; stroke-width: {}; stroke-linejoin: round;\">\n",
        escape(style.stroke_color.as_str()),
        style.base_stroke_width,
    ));

    for flake in canvas.flakes() {
        for element in flake.elements() {
            if style.draw_tiles {
                svg.push_str(&format!(
                    "<path fill=\"{}\" fill-opacity=\"{}\" d=\"{}\"/>\n",
                    escape(fill.next_color().as_str()),
                    style.tile_opacity,
                    element.path(),
                ));
            } else {
                svg.push_str(&format!("<path fill=\"none\" d=\"{}\"/>\n", element.path()));
            }
        }
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::tiling::{Pentaflake, TilingOptions};

    fn canvas_with(generations: &[usize]) -> Canvas {
        let mut canvas = Canvas::new();
        for &g in generations {
            let mut flake = Pentaflake::new(Point::default(), 100.0).unwrap();
            flake.make_tiling(&TilingOptions::generations(g)).unwrap();
            canvas.add(flake);
        }
        canvas
    }

    /// Count paths the way a consumer sees them, after usvg resolves the tree.
    fn count_paths(group: &usvg::Group) -> usize {
        group
            .children()
            .iter()
            .map(|node| match node {
                usvg::Node::Group(g) => count_paths(g),
                usvg::Node::Path(_) => 1,
                _ => 0,
            })
            .sum()
    }

    #[test]
    fn document_shape() {
        let svg = render_svg(&mut canvas_with(&[1]), &SvgStyle::default());
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
        assert!(svg.contains(r#"viewBox="0 0 600 600""#));
        assert!(svg.contains("stroke:#000; stroke-width: 5;"));
        assert_eq!(svg.matches("<path ").count(), 6);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn parses_with_one_path_per_element() {
        let mut canvas = canvas_with(&[2, 1]);
        let svg = render_svg(&mut canvas, &SvgStyle::default());

        let tree = usvg::Tree::from_str(&svg, &usvg::Options::default())
            .expect("rendered SVG should parse");
        assert_eq!(count_paths(tree.root()), 36 + 6);
        assert_eq!(tree.size().width(), 600.0);
    }

    #[test]
    fn outline_mode_has_no_fill() {
        let style = SvgStyle { draw_tiles: false, ..Default::default() };
        let svg = render_svg(&mut canvas_with(&[1]), &style);
        assert_eq!(svg.matches(r#"fill="none""#).count(), 6);
        assert!(!svg.contains("fill-opacity"));
    }

    #[test]
    fn solid_fill_uses_tile_color() {
        let style = SvgStyle {
            tile_color: "#abc".to_string(),
            tile_opacity: 0.6,
            ..Default::default()
        };
        let svg = render_svg(&mut canvas_with(&[1]), &style);
        assert_eq!(svg.matches(r##"fill="#abc" fill-opacity="0.6""##).count(), 6);
    }

    #[test]
    fn seeded_random_colors_are_reproducible() {
        let style = SvgStyle {
            random_tile_colors: true,
            seed: Some(99),
            ..Default::default()
        };
        let a = render_svg(&mut canvas_with(&[2]), &style);
        let b = render_svg(&mut canvas_with(&[2]), &style);
        assert_eq!(a, b);
    }

    #[test]
    fn attribute_values_are_escaped() {
        let style = SvgStyle {
            stroke_color: r#"red" onload="x"#.to_string(),
            ..Default::default()
        };
        let svg = render_svg(&mut canvas_with(&[0]), &style);
        assert!(svg.contains("red&quot; onload=&quot;x"));
    }

    #[test]
    fn path_data_visits_vertices_in_order() {
        let mut flake = Pentaflake::new(Point::new(3.0, -2.0), 10.0).unwrap();
        flake.make_tiling(&TilingOptions::generations(1)).unwrap();

        for tile in flake.elements() {
            let mut current = Point::default();
            let mut visited = Vec::new();
            let mut closed = false;
            for segment in svgtypes::PathParser::from(tile.path().as_str()) {
                match segment.expect("path data should parse") {
                    svgtypes::PathSegment::MoveTo { abs, x, y }
                    | svgtypes::PathSegment::LineTo { abs, x, y } => {
                        current = if abs { Point::new(x, y) } else { current + Point::new(x, y) };
                        visited.push(current);
                    }
                    svgtypes::PathSegment::ClosePath { .. } => closed = true,
                    other => panic!("unexpected segment {other:?}"),
                }
            }

            assert!(closed);
            assert_eq!(visited.len(), tile.vertices().len());
            for (a, b) in visited.iter().zip(tile.vertices()) {
                assert!(a.distance(*b) < 1e-9);
            }
        }
    }
}
