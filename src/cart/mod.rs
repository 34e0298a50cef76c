//! Cart aggregate: lines, selection, totals.

pub mod errors;
pub mod models;
pub mod view;

pub use errors::CartViewError;
pub use models::CartLine;
pub use view::CartView;
