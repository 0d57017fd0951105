use actix_web::{get, web, Responder};
use log::error;
use crate::server::controller::error::CustomError;
use crate::server::state::AppState;

#[get("/admin/orders")]
/// list every saved order, newest first
async fn list_orders(data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    match data.with_store(|store| store.list_all()).await {
        Ok(orders) => Ok(web::Json(orders)),
        Err(e) => {
            error!("list_orders failed, {}", e);
            Err(CustomError::ListFailed { message: e.to_string() })
        }
    }
}
