pub mod activity;
pub mod dashboard;
pub mod devices;
pub mod layout;
pub mod modals;

pub use activity::Activity;
pub use dashboard::Dashboard;
