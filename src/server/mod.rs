//! main file for the server

pub mod model;
mod controller;
mod database;
mod normalizer;
mod state;
mod util;

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};
use crate::server::controller::admin::list_orders;
use crate::server::controller::error::json_error_handler;
use crate::server::controller::order::save_order;
use crate::server::database::store::{OrderStore, SqliteStore};
use crate::server::model::config::ServerConfig;
use crate::server::state::AppState;

/// Run the server
pub async fn run(ServerConfig{ addr, db_path }: ServerConfig) -> io::Result<()> {
    let store = SqliteStore::new(db_path);
    // schema must be in place before the first request is accepted
    if let Err(e) = store.init() {
        error!("failed to initialize store at {}, {}", store.path().display(), e);
        return Err(io::Error::other(e.to_string()));
    }
    info!("store ready at {}", store.path().display());

    let state = web::Data::new(AppState::new(Arc::new(store)));
    info!("listening on http://{}", addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .configure(routes)
    })
        .bind(addr)?
        .run()
        .await
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(save_order)
        .service(list_orders);
}
