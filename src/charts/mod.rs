//! Charts module - scales, scene building and rendering

mod layout;
mod plotter;
mod renderer;
pub mod scale;
mod scene;
mod state;
mod tooltip;
mod transition;

pub use layout::ChartLayout;
pub use plotter::ChartPlotter;
pub use renderer::{ExportFormat, StaticChartRenderer};
pub use scene::ChartScene;
pub use state::ChartState;
pub use tooltip::{tooltip_anchor, tooltip_text};
pub use transition::Transition;
