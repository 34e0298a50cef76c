//! Order submission: validation, request assembly, cleanup.

use tracing::warn;

use crate::{
    api::{OrderConfirmation, OrderItem, OrderRequest, StorefrontApi},
    cart::CartView,
    checkout::errors::CheckoutError,
};

/// Payment method submitted with every order in this flow.
const METHOD: &str = "COD";

/// Shipping fee submitted with every order in this flow, in whole đồng.
const SHIPPING_FEE: u64 = 0;

/// Check the checkout preconditions, in order, failing fast on the first
/// violation: non-empty selection, an address chosen, the chosen address
/// still usable, and a complete gift note.
///
/// # Errors
///
/// Returns the first violated precondition as a distinct variant. No
/// network call is made and no state is mutated.
pub fn validate(view: &CartView) -> Result<(), CheckoutError> {
    if view.selection_len() == 0 {
        return Err(CheckoutError::EmptySelection);
    }

    let chosen = view
        .chosen_address()
        .ok_or(CheckoutError::NoAddressChosen)?;

    // Defends against a choice that went stale after addresses changed.
    if !view
        .usable_addresses()
        .iter()
        .any(|a| a.address_id == chosen)
    {
        return Err(CheckoutError::AddressNotUsable);
    }

    if let Some(field) = view.gift_note.first_missing_field() {
        return Err(CheckoutError::MissingGiftNoteField(field));
    }

    Ok(())
}

/// Assemble the composite order payload from the validated view.
fn build_request(view: &CartView, shipping_address_id: i64) -> OrderRequest {
    OrderRequest {
        shipping_address_id,
        shipping_fee: SHIPPING_FEE,
        method: METHOD.to_owned(),
        comment: view.gift_note.comment(),
        items: view
            .selected_lines()
            .map(|line| OrderItem {
                product_id: line.product_id,
                quantity: line.quantity,
            })
            .collect(),
    }
}

/// Validate, submit exactly one order-creation request, and reconcile the
/// cart afterwards.
///
/// On acceptance, each originally selected line is deleted from the
/// server-side cart independently and best-effort (failures are logged,
/// never surfaced), the lines are dropped locally regardless of those
/// outcomes, the selection is cleared, and an explicit cart reload
/// re-synchronizes against the server.
///
/// # Errors
///
/// Returns a validation error before any network call, or the backend's
/// rejection with cart and selection untouched, allowing resubmission.
pub async fn place_order(
    api: &dyn StorefrontApi,
    view: &mut CartView,
) -> Result<OrderConfirmation, CheckoutError> {
    validate(view)?;

    let chosen = view
        .chosen_address()
        .ok_or(CheckoutError::NoAddressChosen)?;
    let request = build_request(view, chosen);
    let selected: Vec<i64> = view.selected_lines().map(|l| l.line_id).collect();

    let confirmation = api.create_order(request).await?;

    for line_id in &selected {
        if let Err(error) = api.remove_item(*line_id).await {
            warn!(line_id, error = %error, "post-order cart cleanup failed");
        }
    }

    view.forget_lines(&selected);

    if let Err(error) = view.reload(api).await {
        warn!(error = %error, "post-order cart reload failed");
    }

    Ok(confirmation)
}
