pub mod activity;
pub mod energy_chart;
pub mod log_panel;
pub mod usage_panel;

pub use activity::Activity;
