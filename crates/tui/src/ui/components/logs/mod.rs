mod logs_component;
mod state;

pub use logs_component::LogsComponent;
pub use state::{LogLine, LogsState, MAX_LOG_ENTRIES};
