mod icons;
mod nav_rail_component;
mod state;

pub use nav_rail_component::NavRailComponent;
pub use state::{NavRailState, RailOrientation, RailPresentation};
