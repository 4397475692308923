use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::core::{
    ChargeEvent, DataPoint, DateWindow, Viewport, aggregate_charges, reproject_points,
};
use crate::error::GraphResult;
use crate::render::{RenderFrame, Renderer};

use super::{GraphConfig, MeasureSpec, frame_builder};

/// Formatted label strings cached between aggregations.
///
/// A degenerate `set_charges` (every charge outside the window) clears the
/// points but keeps these at their previous values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphLabels {
    pub max_amount: String,
    pub window_start: String,
    pub window_end: String,
}

/// Spending graph engine facade driven by host callbacks.
///
/// The host calls [`set_charges`](Self::set_charges) when source data or the
/// visible window changes, [`on_resize`](Self::on_resize) when the surface
/// size changes, and [`render`](Self::render) on every paint pass. All calls
/// are synchronous and single-threaded by contract; frame building never
/// mutates engine state.
pub struct GraphEngine<R: Renderer> {
    renderer: R,
    config: GraphConfig,
    viewport: Viewport,
    points: Vec<DataPoint>,
    labels: GraphLabels,
    redraw_pending: bool,
}

impl<R: Renderer> GraphEngine<R> {
    pub fn new(renderer: R, config: GraphConfig) -> GraphResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            viewport: Viewport::unknown(),
            points: Vec::new(),
            labels: GraphLabels::default(),
            redraw_pending: false,
        })
    }

    /// Replaces the aggregated point sequence from raw charges.
    ///
    /// `max_amount` is the caller-supplied scale ceiling; it is not derived
    /// from the data here. Points are projected with the last-known surface
    /// size (zero dimensions project to the origin until the next resize).
    pub fn set_charges(
        &mut self,
        charges: &[ChargeEvent],
        start_date: NaiveDate,
        end_date: NaiveDate,
        max_amount: i64,
    ) {
        let window = DateWindow::new(start_date, end_date);
        let points = aggregate_charges(charges, window, max_amount);
        debug!(
            charge_count = charges.len(),
            point_count = points.len(),
            max_amount,
            viewport_known = self.viewport.is_known(),
            "set charges"
        );

        if points.is_empty() {
            self.points.clear();
            self.schedule_redraw();
            return;
        }

        self.points = points;
        reproject_points(&mut self.points, self.viewport, self.config.indent_px);

        self.labels.max_amount = self.config.labels.format_max_amount(max_amount);
        self.labels.window_start = self.config.labels.format_date(start_date);
        self.labels.window_end = self.config.labels.format_date(end_date);
        self.schedule_redraw();
    }

    /// Re-projects stored points to a new surface size.
    ///
    /// Aggregation state and fractions are untouched; only pixel coordinates
    /// change.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        reproject_points(&mut self.points, self.viewport, self.config.indent_px);
        trace!(
            width,
            height,
            point_count = self.points.len(),
            "surface resized"
        );
        self.schedule_redraw();
    }

    /// Builds the draw-command frame for the current state.
    ///
    /// Pure read; callers that only need geometry can use this without a
    /// backend.
    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        frame_builder::build_render_frame(&self.points, &self.labels, self.viewport, &self.config)
    }

    /// Renders the current frame through the owned backend.
    pub fn render(&mut self) -> GraphResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)
    }

    /// Renders only when a redraw was scheduled; returns whether a frame was
    /// drawn. The pending request is drained either way it fires.
    pub fn render_if_needed(&mut self) -> GraphResult<bool> {
        if !self.take_redraw_request() {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    /// Resolves the surface size the graph asks for under host layout
    /// constraints.
    #[must_use]
    pub fn measure(&self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> (u32, u32) {
        (
            width_spec.resolve(self.config.base_size_px),
            height_spec.resolve(self.config.base_size_px),
        )
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn labels(&self) -> &GraphLabels {
        &self.labels
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn has_pending_redraw(&self) -> bool {
        self.redraw_pending
    }

    /// Clears and returns the pending redraw request, host-invalidate style.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_pending)
    }

    fn schedule_redraw(&mut self) {
        self.redraw_pending = true;
    }
}
