use serde::{Deserialize, Serialize};
use crate::server::model::item::CartItem;
use crate::server::normalizer;

/// Body of `POST /api/save_order`. Free-form fields and the cart may be absent or `null`.
#[derive(Debug, Deserialize)]
pub(crate) struct SaveOrderRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub cart: Option<Vec<CartItem>>,
    pub delivery_type: Option<String>,
    pub total_amount: i64,
}

/// An order ready to be written, with the cart already collapsed into its derived columns.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewOrder {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub items_bought: String,
    pub total_quantity: i64,
    pub delivery_type: String,
    pub total_amount: i64,
}

impl From<SaveOrderRequest> for NewOrder {
    fn from(req: SaveOrderRequest) -> Self {
        let cart = req.cart.unwrap_or_default();
        Self {
            items_bought: normalizer::items_bought(&cart),
            total_quantity: normalizer::total_quantity(&cart),
            customer_name: req.name.unwrap_or_default(),
            customer_phone: req.phone.unwrap_or_default(),
            customer_address: req.address.unwrap_or_default(),
            delivery_type: req.delivery_type.unwrap_or_default(),
            total_amount: req.total_amount,
        }
    }
}

/// A persisted order row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Order {
    pub order_id: i64,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub items_bought: String,
    pub total_quantity: i64,
    pub delivery_type: String,
    pub total_amount: i64,
    pub order_date: String,
}
