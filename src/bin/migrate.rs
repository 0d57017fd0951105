use anyhow::{Context, Error};
use rusqlite::Connection;
use std::env;

mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("src/server/database/migrations");
}

fn main() -> Result<(), Error> {
    let db_path = env::var("DB_PATH").unwrap_or("brand_magic_orders.db".to_string());
    let mut conn = Connection::open(&db_path)
        .with_context(|| format!("failed to open store at {db_path}"))?;
    let report = embedded::migrations::runner().run(&mut conn)?;
    println!("report={:?}", report);
    // columns missing from pre-migration tables and the order_date index are added by the server's schema init
    println!("start the server once against {db_path} to backfill legacy columns and build indexes");
    Ok(())
}
