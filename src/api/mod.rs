mod config;
mod engine;
mod frame_builder;
mod labels;
mod measure;
mod style;

pub use config::GraphConfig;
pub use engine::{GraphEngine, GraphLabels};
pub use labels::LabelBehavior;
pub use measure::MeasureSpec;
pub use style::{GraphStyle, MarkerStyle, StrokeStyle, TextStyle};
