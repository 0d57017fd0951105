//! Derives the stored summary columns of an order from its cart.

use crate::server::model::item::CartItem;

/// Sum of all cart quantities, `0` for an empty cart.
pub(crate) fn total_quantity(cart: &[CartItem]) -> i64 {
    cart.iter().map(|item| i64::from(item.quantity)).sum()
}

/// Renders the cart as `"<qty>x <name>"` entries joined by `", "`, keeping cart order.
pub(crate) fn items_bought(cart: &[CartItem]) -> String {
    cart.iter()
        .map(|item| format!("{}x {}", item.quantity, item.name))
        .collect::<Vec<_>>()
        .join(", ")
}
