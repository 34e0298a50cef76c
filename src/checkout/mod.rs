//! Checkout: gift-note draft, validation, order submission.

pub mod draft;
pub mod errors;
pub mod flow;

pub use draft::{GiftNote, GiftNoteField, LedChoice};
pub use errors::CheckoutError;
pub use flow::{place_order, validate};
