mod qr_component;
mod state;

pub use qr_component::QrComponent;
pub use state::{QrState, ScanPhase};
