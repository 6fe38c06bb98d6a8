pub mod dashboard;
pub mod reconciler;
pub mod safe_mode;

pub use dashboard::{provide_dashboard, use_dashboard, DashboardState, FeedStatus, Modal};
pub use reconciler::{ReconcileOutcome, Reconciler, RenderedCard};
pub use safe_mode::{provide_safe_mode_context, use_safe_mode, SafeModeContext};
