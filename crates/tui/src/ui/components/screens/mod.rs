//! Content screens, one per route.

mod batches;
mod categories;
mod dashboard;
mod packages;
mod products;
pub mod qr;
pub mod register;
mod shipments;

pub use batches::BatchesComponent;
pub use categories::CategoriesComponent;
pub use dashboard::DashboardComponent;
pub use packages::PackagesComponent;
pub use products::ProductsComponent;
pub use qr::{QrComponent, QrState};
pub use register::{RegisterComponent, RegisterState};
pub use shipments::ShipmentsComponent;
