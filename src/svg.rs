//! SVG diagram of an image placement.
//!
//! Draws three stacked panels: the pixel grid, the data-space rectangle it
//! is stretched over, and the canvas rectangle produced by the host's
//! transforms. The `min` corner is marked in every panel so a flipped axis
//! is visible at a glance. Pixel values are never drawn.
//!
//! # Example
//!
//! ```
//! use zenplot::{ImagePlacement, PixelBuffer, svg::render_placement_svg};
//!
//! let img = PixelBuffer::from_fn(8, 4, |c, r| (c ^ r) as u8);
//! let placement = ImagePlacement::new(&img, 0.0, 0.0, 80.0, 20.0);
//!
//! // Screen transform: 2 units per data unit, Y pointing down.
//! let svg = render_placement_svg(&placement, |x| 2.0 * x, |y| 100.0 - 2.0 * y);
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("inverted y"));
//! ```

use num_traits::Float;

use crate::geom::Rectangle;
use crate::grid::PixelGrid;
use crate::image::ImagePlacement;

/// Maximum pixel width for any panel in the SVG output.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum pixel height for any panel in the SVG output.
const MAX_PANEL_H: f64 = 200.0;
/// Vertical gap between panels.
const PANEL_GAP: f64 = 50.0;
/// Horizontal margin.
const MARGIN_X: f64 = 50.0;
/// Top margin for first panel.
const MARGIN_TOP: f64 = 30.0;
/// Height of label text area above each panel.
const LABEL_H: f64 = 22.0;
/// Grid lines per axis above which cell lines are omitted.
const MAX_GRID_LINES: u32 = 32;
/// Radius of the `min` corner marker.
const MARKER_R: f64 = 4.0;

/// One panel of the diagram.
struct Panel {
    label: String,
    annotation: String,
    /// Unsigned extent in the panel's own units.
    width: f64,
    height: f64,
    /// Cell lines to draw, as (columns, rows).
    cells: Option<(u32, u32)>,
    /// Which corner the `min` marker sits on: (right, bottom).
    min_corner: (bool, bool),
}

/// Render the placement as a complete SVG document.
///
/// `tr_x` and `tr_y` are the same transforms the host would pass to
/// [`ImagePlacement::draw`].
pub fn render_placement_svg<G: PixelGrid, F: Float>(
    placement: &ImagePlacement<G, F>,
    tr_x: impl Fn(F) -> F,
    tr_y: impl Fn(F) -> F,
) -> String {
    let rect = placement.canvas_rect(tr_x, tr_y);
    let panels = build_panels(placement, &rect);
    render_panels(&panels)
}

fn build_panels<G: PixelGrid, F: Float>(
    placement: &ImagePlacement<G, F>,
    rect: &Rectangle<F>,
) -> Vec<Panel> {
    let cols = placement.columns();
    let rows = placement.rows();
    let range = placement.data_range();
    let cells = (cols <= MAX_GRID_LINES && rows <= MAX_GRID_LINES).then_some((cols, rows));

    let mut panels = Vec::with_capacity(3);

    // Pixel grid: row 0 at the top, as stored.
    panels.push(Panel {
        label: format!("Image  {cols}×{rows}"),
        annotation: String::new(),
        width: cols as f64,
        height: rows as f64,
        cells,
        min_corner: (false, false),
    });

    // Data space: Y up, so an ordered min corner is bottom-left.
    let (x0, x1) = (f(range.x_min), f(range.x_max));
    let (y0, y1) = (f(range.y_min), f(range.y_max));
    let mut notes = format!(
        "dx {}, dy {}",
        fmt_num(f(placement.dx())),
        fmt_num(f(placement.dy()))
    );
    if x0 > x1 || y0 > y1 {
        notes.push_str(", reversed bounds");
    }
    panels.push(Panel {
        label: format!(
            "Data  x {}..{}  y {}..{}",
            fmt_num(x0),
            fmt_num(x1),
            fmt_num(y0),
            fmt_num(y1)
        ),
        annotation: notes,
        width: (x1 - x0).abs(),
        height: (y1 - y0).abs(),
        cells,
        min_corner: (x0 > x1, y0 <= y1),
    });

    // Canvas space: Y down.
    let inv_x = rect.is_inverted_x();
    let inv_y = rect.is_inverted_y();
    let mut flags = Vec::new();
    if inv_x {
        flags.push("inverted x");
    }
    if inv_y {
        flags.push("inverted y");
    }
    panels.push(Panel {
        label: format!(
            "Canvas  ({}, {}) → ({}, {})",
            fmt_num(f(rect.min.x)),
            fmt_num(f(rect.min.y)),
            fmt_num(f(rect.max.x)),
            fmt_num(f(rect.max.y))
        ),
        annotation: flags.join(", "),
        width: f(rect.width()).abs(),
        height: f(rect.height()).abs(),
        cells: None,
        min_corner: (inv_x, inv_y),
    });

    panels
}

fn f<F: Float>(v: F) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

/// Up to three decimals, trailing zeros dropped.
fn fmt_num(v: f64) -> String {
    let s = format!("{v:.3}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Scale an extent to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(w: f64, h: f64) -> (f64, f64) {
    if !(w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite()) {
        return (MAX_PANEL_W, MAX_PANEL_H);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale)
}

fn render_panels(panels: &[Panel]) -> String {
    let n = panels.len() as f64;
    let total_h =
        2.0 * MARGIN_TOP + n * (LABEL_H + MAX_PANEL_H) + (n - 1.0).max(0.0) * PANEL_GAP;
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;

    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .panel { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  .cell { stroke: #2c6faa; stroke-width: 0.5; }
  .min { fill: #d65a31; }
  .arrow { stroke: #666; stroke-width: 1.5; fill: none; marker-end: url(#arrowhead); }
  .arrowhead { fill: #666; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .panel { fill: #3a72a4; stroke: #5a9fd4; }
    .cell { stroke: #5a9fd4; }
    .arrow { stroke: #888; }
    .arrowhead { fill: #888; }
  }
</style>
<defs>
  <marker id="arrowhead" markerWidth="8" markerHeight="6" refX="8" refY="3" orient="auto">
    <polygon points="0 0, 8 3, 0 6" class="arrowhead"/>
  </marker>
</defs>
"##,
    );

    let center_x = total_w / 2.0;
    let mut y = MARGIN_TOP;

    for (i, panel) in panels.iter().enumerate() {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            center_x,
            y + 14.0,
            escape_xml(&panel.label)
        ));
        svg.push('\n');
        y += LABEL_H;

        let (pw, ph) = scale_to_fit(panel.width, panel.height);
        let px = center_x - pw / 2.0;
        let py = y;

        svg.push_str(&format!(
            r#"<rect x="{px:.1}" y="{py:.1}" width="{pw:.1}" height="{ph:.1}" class="panel"/>"#
        ));
        svg.push('\n');

        if let Some((cols, rows)) = panel.cells {
            for c in 1..cols {
                let lx = px + pw * c as f64 / cols as f64;
                svg.push_str(&format!(
                    r#"<line x1="{lx:.1}" y1="{py:.1}" x2="{lx:.1}" y2="{:.1}" class="cell"/>"#,
                    py + ph
                ));
                svg.push('\n');
            }
            for r in 1..rows {
                let ly = py + ph * r as f64 / rows as f64;
                svg.push_str(&format!(
                    r#"<line x1="{px:.1}" y1="{ly:.1}" x2="{:.1}" y2="{ly:.1}" class="cell"/>"#,
                    px + pw
                ));
                svg.push('\n');
            }
        }

        let (right, bottom) = panel.min_corner;
        let mx = if right { px + pw } else { px };
        let my = if bottom { py + ph } else { py };
        svg.push_str(&format!(
            r#"<circle cx="{mx:.1}" cy="{my:.1}" r="{MARKER_R}" class="min"/>"#
        ));
        svg.push('\n');

        if !panel.annotation.is_empty() {
            svg.push_str(&format!(
                r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
                center_x,
                py + ph + 14.0,
                escape_xml(&panel.annotation)
            ));
            svg.push('\n');
        }

        y += MAX_PANEL_H;

        if i + 1 < panels.len() {
            svg.push_str(&format!(
                r#"<line x1="{center_x}" y1="{:.1}" x2="{center_x}" y2="{:.1}" class="arrow"/>"#,
                y + 8.0,
                y + PANEL_GAP - 8.0
            ));
            svg.push('\n');
            y += PANEL_GAP;
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
