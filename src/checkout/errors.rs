//! Checkout errors.

use thiserror::Error;

use crate::{api::ApiError, checkout::draft::GiftNoteField};

/// Errors raised while validating or submitting an order.
///
/// The first four variants are client-side validation failures; none of
/// them is preceded by a network call and none mutates the cart view.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// No cart line is selected for checkout.
    #[error("Chưa chọn sản phẩm nào để đặt hàng")]
    EmptySelection,

    /// No shipping address is chosen.
    #[error("Chưa chọn địa chỉ giao hàng")]
    NoAddressChosen,

    /// The chosen address is no longer in the usable subset.
    #[error("Địa chỉ giao hàng không hợp lệ, vui lòng chọn lại")]
    AddressNotUsable,

    /// A gift-note field is empty or whitespace.
    #[error("Vui lòng điền mục {0} trong ghi chú quà tặng")]
    MissingGiftNoteField(GiftNoteField),

    /// The backend rejected the order; cart and selection are untouched
    /// and the order can be resubmitted.
    #[error(transparent)]
    Api(#[from] ApiError),
}
