//! The cart aggregate view-model.

use rustc_hash::FxHashSet;
use tracing::error;

use crate::{
    addresses::{self, ShippingAddress},
    api::StorefrontApi,
    cart::{errors::CartViewError, models::CartLine},
    checkout::GiftNote,
    session::SessionHandle,
};

/// Reason tag carried on the authentication redirect from this view.
const AUTH_REASON: &str = "cart";

/// The authenticated account's cart, combined with the locally derived
/// state checkout needs: the selection subset, the usable shipping
/// addresses with a chosen one, and the gift-note draft.
#[derive(Debug, Default)]
pub struct CartView {
    lines: Vec<CartLine>,
    selection: FxHashSet<i64>,
    usable_addresses: Vec<ShippingAddress>,
    chosen_address: Option<i64>,
    /// Ephemeral gift-note form state, folded into the order comment at
    /// submission time.
    pub gift_note: GiftNote,
}

impl CartView {
    /// Load the view: fetch cart and profile, derive the usable-address
    /// subset and pre-select the default usable address.
    ///
    /// Either fetch failing is logged and degrades to an empty list; the
    /// next reload re-synchronizes from the server.
    ///
    /// # Errors
    ///
    /// Returns [`CartViewError::NotAuthenticated`] when no session is
    /// established.
    pub async fn load(
        api: &dyn StorefrontApi,
        session: &SessionHandle,
    ) -> Result<Self, CartViewError> {
        if !session.is_authenticated() {
            return Err(CartViewError::NotAuthenticated {
                reason: AUTH_REASON,
            });
        }

        let (cart, profile) = tokio::join!(api.get_cart(), api.get_profile());

        let lines = cart.unwrap_or_else(|e| {
            error!(error = %e, "cart fetch failed, starting empty");
            Vec::new()
        });

        let saved = profile.map(|p| p.addresses).unwrap_or_else(|e| {
            error!(error = %e, "profile fetch failed, no saved addresses");
            Vec::new()
        });

        let usable_addresses = addresses::usable_addresses(&saved);
        let chosen_address = addresses::pick_default(&usable_addresses);

        Ok(Self {
            lines,
            selection: FxHashSet::default(),
            usable_addresses,
            chosen_address,
            gift_note: GiftNote::default(),
        })
    }

    /// Re-fetch the cart from the server, dropping selection entries whose
    /// lines no longer exist. Addresses and the gift note are kept.
    ///
    /// # Errors
    ///
    /// Returns an error when the fetch fails; local state is unchanged.
    pub async fn reload(&mut self, api: &dyn StorefrontApi) -> Result<(), CartViewError> {
        let lines = api.get_cart().await?;

        self.selection
            .retain(|id| lines.iter().any(|l| l.line_id == *id));
        self.lines = lines;

        Ok(())
    }

    /// The visible cart lines, in cart order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The usable shipping addresses derived at load time.
    #[must_use]
    pub fn usable_addresses(&self) -> &[ShippingAddress] {
        &self.usable_addresses
    }

    /// The currently chosen shipping address, if any.
    #[must_use]
    pub fn chosen_address(&self) -> Option<i64> {
        self.chosen_address
    }

    /// Point the address choice at the given id, or clear it.
    ///
    /// Stale choices are tolerated here; checkout validation re-checks
    /// membership in the usable subset before any network call.
    pub fn choose_address(&mut self, address_id: Option<i64>) {
        self.chosen_address = address_id;
    }

    /// Whether the decrement affordance is enabled for this line.
    ///
    /// Decrementing below quantity 1 is disallowed at the control level;
    /// reaching zero requires typing the quantity deliberately.
    #[must_use]
    pub fn can_decrement(&self, line_id: i64) -> bool {
        self.lines
            .iter()
            .any(|l| l.line_id == line_id && l.quantity > 1)
    }

    /// Set the quantity of one line, server first.
    ///
    /// Local state changes only after the backend acknowledges. A line
    /// acknowledged at quantity zero vanishes from the visible set and the
    /// selection without further confirmation; this is distinct from
    /// [`CartView::remove`], which is always an explicit, confirmed action.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown line or a failed backend call; in
    /// both cases local state is unchanged.
    pub async fn set_quantity(
        &mut self,
        api: &dyn StorefrontApi,
        line_id: i64,
        quantity: u32,
    ) -> Result<(), CartViewError> {
        let position = self.position(line_id)?;

        api.update_quantity(line_id, quantity).await?;

        if quantity == 0 {
            self.lines.remove(position);
            self.selection.remove(&line_id);
        } else if let Some(line) = self.lines.get_mut(position) {
            line.quantity = quantity;
        }

        Ok(())
    }

    /// Remove one line explicitly, server first.
    ///
    /// Callers are expected to have confirmed the removal with the user,
    /// naming the product.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown line or a failed backend call; in
    /// both cases local state is unchanged.
    pub async fn remove(
        &mut self,
        api: &dyn StorefrontApi,
        line_id: i64,
    ) -> Result<(), CartViewError> {
        let position = self.position(line_id)?;

        api.remove_item(line_id).await?;

        self.lines.remove(position);
        self.selection.remove(&line_id);

        Ok(())
    }

    /// Flip one line's membership in the checkout selection.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown line, keeping the invariant that
    /// the selection only ever references present lines.
    pub fn toggle_select(&mut self, line_id: i64) -> Result<(), CartViewError> {
        self.position(line_id)?;

        if !self.selection.remove(&line_id) {
            self.selection.insert(line_id);
        }

        Ok(())
    }

    /// Select every line, or clear the selection when everything is
    /// already selected.
    pub fn toggle_select_all(&mut self) {
        if self.is_all_selected() {
            self.selection.clear();
        } else {
            self.selection = self.lines.iter().map(|l| l.line_id).collect();
        }
    }

    /// Whether every current line is selected.
    ///
    /// Derived from the selection and line sets on each call, so removing
    /// lines can never leave a stale "all selected" answer behind.
    #[must_use]
    pub fn is_all_selected(&self) -> bool {
        !self.lines.is_empty() && self.selection.len() == self.lines.len()
    }

    /// Whether the given line is selected.
    #[must_use]
    pub fn is_selected(&self, line_id: i64) -> bool {
        self.selection.contains(&line_id)
    }

    /// Number of selected lines.
    #[must_use]
    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// The selected lines, in cart order.
    pub fn selected_lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines
            .iter()
            .filter(|l| self.selection.contains(&l.line_id))
    }

    /// Total over the selected lines, recomputed on every call.
    #[must_use]
    pub fn selected_total(&self) -> u64 {
        self.selected_lines().map(CartLine::line_total).sum()
    }

    /// Drop the given lines from local state and clear the selection.
    ///
    /// Used by checkout after the backend accepted the order; the server
    /// remains the source of truth on the next reload.
    pub(crate) fn forget_lines(&mut self, line_ids: &[i64]) {
        self.lines.retain(|l| !line_ids.contains(&l.line_id));
        self.selection.clear();
    }

    fn position(&self, line_id: i64) -> Result<usize, CartViewError> {
        self.lines
            .iter()
            .position(|l| l.line_id == line_id)
            .ok_or(CartViewError::UnknownLine(line_id))
    }

    #[cfg(test)]
    pub(crate) fn with_lines(lines: Vec<CartLine>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub(crate) fn set_usable_addresses(&mut self, usable: Vec<ShippingAddress>) {
        self.usable_addresses = usable;
    }
}
