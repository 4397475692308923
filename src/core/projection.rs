use crate::core::{DataPoint, Viewport};

/// Maps a normalized fraction into the usable span `[indent, dimension - indent]`.
///
/// A zero dimension means the host has not reported a size yet; the pixel
/// coordinate stays at the origin until the next resize.
#[must_use]
pub fn project_fraction(fraction: f64, dimension: u32, indent: f64) -> f64 {
    if dimension == 0 {
        return 0.0;
    }
    (f64::from(dimension) - 2.0 * indent) * fraction + indent
}

/// Recomputes pixel coordinates in place for every point against `viewport`.
///
/// Fractions are read-only inputs here; aggregation state is untouched.
pub fn reproject_points(points: &mut [DataPoint], viewport: Viewport, indent: f64) {
    for point in points {
        point.pixel_x = project_fraction(point.time_fraction, viewport.width, indent);
        point.pixel_y = project_fraction(point.amount_fraction, viewport.height, indent);
    }
}
