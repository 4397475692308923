pub mod aggregate;
pub mod projection;
pub mod types;
pub mod window;

pub use aggregate::aggregate_charges;
pub use projection::{project_fraction, reproject_points};
pub use types::{ChargeEvent, DataPoint, Viewport};
pub use window::DateWindow;
