//! Cart models.

/// A line in the authenticated account's cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// Backend cart-line identifier.
    pub line_id: i64,

    /// Identifier of the product the line refers to.
    pub product_id: i64,

    /// Product display name.
    pub product_name: String,

    /// Quantity in the cart.
    pub quantity: u32,

    /// Unit price in whole đồng.
    pub unit_price: u64,
}

impl CartLine {
    /// Line total, always recomputed from quantity and unit price.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        u64::from(self.quantity) * self.unit_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_is_quantity_times_unit_price() {
        let line = CartLine {
            line_id: 1,
            product_id: 10,
            product_name: "Hộp quà".to_owned(),
            quantity: 3,
            unit_price: 100_000,
        };

        assert_eq!(line.line_total(), 300_000);
    }
}
