//! UI components: navigation rail, header, screens and the activity log.

pub mod common;
pub mod component;
pub mod header;
pub mod logs;
pub mod nav_rail;
pub mod screens;

pub(crate) use component::Component;
pub use header::HeaderComponent;
pub use logs::LogsComponent;
pub use nav_rail::NavRailComponent;
pub use screens::{
    BatchesComponent, CategoriesComponent, DashboardComponent, PackagesComponent, ProductsComponent, QrComponent,
    RegisterComponent, ShipmentsComponent,
};
