pub mod table_view;

pub use table_view::{TABLE_HINTS, TableKeyOutcome, TableScreen, TableViewState, render_table_screen};
