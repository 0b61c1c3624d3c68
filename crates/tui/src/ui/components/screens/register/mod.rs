mod register_component;
mod state;

pub use register_component::RegisterComponent;
pub use state::{RegisterState, SubmitStatus};
