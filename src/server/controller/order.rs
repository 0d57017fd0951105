use actix_web::{post, web, HttpResponse, Responder};
use log::{error, info};
use crate::server::controller::error::CustomError;
use crate::server::model::order::{NewOrder, SaveOrderRequest};
use crate::server::model::StatusResponse;
use crate::server::state::AppState;

pub(crate) const SAVE_OK_MSG: &str = "Order saved to database!";

#[post("/api/save_order")]
/// Normalize the submitted cart and persist the order
async fn save_order(body: web::Json<SaveOrderRequest>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let order = NewOrder::from(body.into_inner());
    let (name, total_quantity, total_amount) = (order.customer_name.clone(), order.total_quantity, order.total_amount);

    match data.with_store(move |store| store.insert(&order)).await {
        Ok(order_id) => {
            info!(
                "new order saved, id={}, customer={} bought {} items (total: {})",
                order_id, name, total_quantity, total_amount
            );
            Ok(HttpResponse::Ok().json(StatusResponse::success(SAVE_OK_MSG)))
        }
        Err(e) => {
            error!("save_order failed, {}", e);
            Err(CustomError::SaveFailed)
        }
    }
}
