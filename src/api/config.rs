use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

use super::{GraphStyle, LabelBehavior};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load graph
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Margin inset applied symmetrically on all four sides of the surface.
    #[serde(default = "default_indent_px")]
    pub indent_px: f64,
    /// Fallback square size when the host imposes no measure constraint.
    #[serde(default = "default_base_size_px")]
    pub base_size_px: u32,
    #[serde(default)]
    pub style: GraphStyle,
    #[serde(default)]
    pub labels: LabelBehavior,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            indent_px: default_indent_px(),
            base_size_px: default_base_size_px(),
            style: GraphStyle::default(),
            labels: LabelBehavior::default(),
        }
    }
}

impl GraphConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the margin inset in pixels.
    #[must_use]
    pub fn with_indent_px(mut self, indent_px: f64) -> Self {
        self.indent_px = indent_px;
        self
    }

    /// Sets the fallback size used by unconstrained measurement.
    #[must_use]
    pub fn with_base_size_px(mut self, base_size_px: u32) -> Self {
        self.base_size_px = base_size_px;
        self
    }

    /// Sets the paint configuration.
    #[must_use]
    pub fn with_style(mut self, style: GraphStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the label formatting behavior.
    #[must_use]
    pub fn with_labels(mut self, labels: LabelBehavior) -> Self {
        self.labels = labels;
        self
    }

    pub fn validate(&self) -> GraphResult<()> {
        if !self.indent_px.is_finite() || self.indent_px < 0.0 {
            return Err(GraphError::InvalidConfig(
                "indent must be finite and >= 0".to_owned(),
            ));
        }
        if self.base_size_px == 0 {
            return Err(GraphError::InvalidConfig(
                "base size must be > 0".to_owned(),
            ));
        }
        self.style.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GraphError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GraphError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_indent_px() -> f64 {
    4.0
}

fn default_base_size_px() -> u32 {
    200
}
