pub mod control;
pub mod device;
pub mod log;
pub mod series;
pub mod snapshot;
pub mod usage;

pub use control::ControlRequest;
pub use device::{
    device_icon, sleep_timer_label, ColorTemp, Container, DeviceId, DeviceKind, Sensitivity,
    SLEEP_TIMER_OPTIONS,
};
pub use log::{LogBatch, LogEntry, LogRecord};
pub use series::{BatterySolarBatch, BatterySolarPoint, EnergySeries};
pub use snapshot::{DeviceSnapshot, DeviceState, PowerState};
pub use usage::{
    rank_usage, usage_metrics, AggregatedConsumption, AggregatedConsumptionEntry, UsageMetrics,
    UsageRow,
};
