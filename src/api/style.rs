use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::render::{Color, LineStrokeStyle};

/// Stroke descriptor shared by border and series lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width_px: f64,
    #[serde(default)]
    pub line_style: LineStrokeStyle,
    #[serde(default = "default_anti_alias")]
    pub anti_alias: bool,
}

/// Enlarged dot drawn when exactly one day survives aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub color: Color,
    pub diameter_px: f64,
    #[serde(default = "default_anti_alias")]
    pub anti_alias: bool,
}

/// Label text styling shared by all three graph labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub color: Color,
    pub size_px: f64,
}

/// Complete paint configuration for one graph.
///
/// Constructed once and reused on every frame; the frame builder reads it
/// immutably, so there is no per-instance mutable paint state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphStyle {
    #[serde(default = "default_border")]
    pub border: StrokeStyle,
    #[serde(default = "default_series")]
    pub series: StrokeStyle,
    #[serde(default = "default_marker")]
    pub marker: MarkerStyle,
    #[serde(default = "default_label")]
    pub label: TextStyle,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            border: default_border(),
            series: default_series(),
            marker: default_marker(),
            label: default_label(),
        }
    }
}

impl GraphStyle {
    pub fn validate(&self) -> GraphResult<()> {
        for (name, stroke) in [("border", self.border), ("series", self.series)] {
            if !stroke.width_px.is_finite() || stroke.width_px <= 0.0 {
                return Err(GraphError::InvalidConfig(format!(
                    "{name} stroke width must be finite and > 0"
                )));
            }
            stroke.line_style.validate().map_err(|_| {
                GraphError::InvalidConfig(format!("{name} dash run lengths must be finite and > 0"))
            })?;
            stroke
                .color
                .validate()
                .map_err(|_| GraphError::InvalidConfig(format!("{name} color out of range")))?;
        }

        if !self.marker.diameter_px.is_finite() || self.marker.diameter_px <= 0.0 {
            return Err(GraphError::InvalidConfig(
                "marker diameter must be finite and > 0".to_owned(),
            ));
        }
        self.marker
            .color
            .validate()
            .map_err(|_| GraphError::InvalidConfig("marker color out of range".to_owned()))?;

        if !self.label.size_px.is_finite() || self.label.size_px <= 0.0 {
            return Err(GraphError::InvalidConfig(
                "label text size must be finite and > 0".to_owned(),
            ));
        }
        self.label
            .color
            .validate()
            .map_err(|_| GraphError::InvalidConfig("label color out of range".to_owned()))
    }
}

fn default_anti_alias() -> bool {
    true
}

fn default_border() -> StrokeStyle {
    StrokeStyle {
        color: Color::GRAY,
        width_px: 1.0,
        line_style: LineStrokeStyle::Dashed {
            on_px: 10.0,
            off_px: 10.0,
        },
        anti_alias: true,
    }
}

fn default_series() -> StrokeStyle {
    StrokeStyle {
        color: Color::BLACK,
        width_px: 3.0,
        line_style: LineStrokeStyle::Solid,
        anti_alias: true,
    }
}

fn default_marker() -> MarkerStyle {
    MarkerStyle {
        color: Color::BLACK,
        diameter_px: 6.0,
        anti_alias: true,
    }
}

fn default_label() -> TextStyle {
    TextStyle {
        color: Color::GRAY,
        size_px: 12.0,
    }
}
