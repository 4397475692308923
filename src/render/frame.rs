use crate::core::Viewport;
use crate::error::GraphResult;
use crate::render::{LinePrimitive, PointPrimitive, TextPrimitive};

/// Backend-agnostic scene for one graph draw pass.
///
/// A frame with a zero viewport is still a legal, degenerate scene: before
/// the first resize every coordinate sits at the origin and backends simply
/// paint nothing useful.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub points: Vec<PointPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            points: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_point(mut self, point: PointPrimitive) -> Self {
        self.points.push(point);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> GraphResult<()> {
        for line in &self.lines {
            line.validate()?;
        }
        for point in &self.points {
            point.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.points.is_empty() && self.texts.is_empty()
    }
}
