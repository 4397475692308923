use crate::core::{DataPoint, Viewport};
use crate::render::{LinePrimitive, PointPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::engine::GraphLabels;
use super::{GraphConfig, MarkerStyle, StrokeStyle, TextStyle};

/// Materializes the draw-command frame for one paint pass.
///
/// Deterministic and side-effect free so rendering and tests consume the
/// exact same scene: four inset border lines, up to three labels, then
/// either a single marker dot or N-1 segments connecting consecutive
/// points in ascending time order.
pub(super) fn build_render_frame(
    points: &[DataPoint],
    labels: &GraphLabels,
    viewport: Viewport,
    config: &GraphConfig,
) -> RenderFrame {
    let indent = config.indent_px;
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let style = &config.style;

    let mut frame = RenderFrame::new(viewport);

    let border = [
        (indent, indent, width - indent, indent),
        (indent, height - indent, width - indent, height - indent),
        (indent, indent, indent, height - indent),
        (width - indent, indent, width - indent, height - indent),
    ];
    for (x1, y1, x2, y2) in border {
        frame = frame.with_line(stroke_line(x1, y1, x2, y2, style.border));
    }

    // Labels stay empty until the first non-degenerate aggregation.
    if !labels.max_amount.is_empty() {
        frame = frame.with_text(label_text(
            &labels.max_amount,
            width - indent,
            indent + style.label.size_px,
            TextHAlign::Right,
            style.label,
        ));
    }
    if !labels.window_start.is_empty() {
        frame = frame.with_text(label_text(
            &labels.window_start,
            indent,
            height - 2.0 * indent,
            TextHAlign::Left,
            style.label,
        ));
    }
    if !labels.window_end.is_empty() {
        frame = frame.with_text(label_text(
            &labels.window_end,
            width - indent,
            height - 2.0 * indent,
            TextHAlign::Right,
            style.label,
        ));
    }

    match points {
        [] => {}
        [only] => {
            frame = frame.with_point(marker_dot(only, style.marker));
        }
        _ => {
            for pair in points.windows(2) {
                frame = frame.with_line(stroke_line(
                    pair[0].pixel_x,
                    pair[0].pixel_y,
                    pair[1].pixel_x,
                    pair[1].pixel_y,
                    style.series,
                ));
            }
        }
    }

    frame
}

fn stroke_line(x1: f64, y1: f64, x2: f64, y2: f64, stroke: StrokeStyle) -> LinePrimitive {
    LinePrimitive {
        x1,
        y1,
        x2,
        y2,
        stroke_width: stroke.width_px,
        color: stroke.color,
        stroke_style: stroke.line_style,
        anti_alias: stroke.anti_alias,
    }
}

fn marker_dot(point: &DataPoint, marker: MarkerStyle) -> PointPrimitive {
    PointPrimitive {
        x: point.pixel_x,
        y: point.pixel_y,
        diameter_px: marker.diameter_px,
        color: marker.color,
        anti_alias: marker.anti_alias,
    }
}

fn label_text(
    text: &str,
    x: f64,
    y: f64,
    h_align: TextHAlign,
    label_style: TextStyle,
) -> TextPrimitive {
    TextPrimitive {
        text: text.to_owned(),
        x,
        y,
        font_size_px: label_style.size_px,
        color: label_style.color,
        h_align,
    }
}
