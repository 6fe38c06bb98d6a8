pub mod battery_section;
pub mod dashboard;
pub mod devices_table;
pub mod lights_grid;
pub mod solar_section;

pub use dashboard::Dashboard;
