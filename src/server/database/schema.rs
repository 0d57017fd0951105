//! Schema initialization for the order store.
//!
//! Versioned DDL lives in `migrations/` and is applied through refinery. Store files written before a
//! column existed are brought up to date by [`add_missing_columns`], which only ever adds columns.

use crate::server::database::error::StorageError;
use log::{info, warn};
use rusqlite::Connection;
use std::collections::HashSet;

pub(crate) mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("src/server/database/migrations");
}

pub(crate) const ORDERS_TABLE: &str = "orders";

/// Every non-key column of `orders` with the type it is added with when missing.
const ORDER_COLUMNS: &[(&str, &str)] = &[
    ("customer_name", "TEXT"),
    ("customer_phone", "TEXT"),
    ("customer_address", "TEXT"),
    ("items_bought", "TEXT"),
    ("total_quantity", "INTEGER"),
    ("delivery_type", "TEXT"),
    ("total_amount", "INTEGER"),
    ("order_date", "DATETIME"),
];

/// Apply pending migrations, backfill columns absent from an older `orders` table, then index it.
pub(crate) fn init(conn: &mut Connection) -> Result<(), StorageError> {
    let report = embedded::migrations::runner().run(conn)?;
    for migration in report.applied_migrations() {
        info!("applied migration {}", migration);
    }
    add_missing_columns(conn)?;
    // needs order_date, which legacy tables only have after the backfill
    conn.execute(
        &format!("CREATE INDEX IF NOT EXISTS idx_orders_order_date ON {}(order_date)", ORDERS_TABLE),
        [],
    )?;
    Ok(())
}

pub(crate) fn get_columns(conn: &Connection, table: &str) -> Result<HashSet<String>, StorageError> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(1))?;
    let mut out = HashSet::new();
    for r in rows {
        out.insert(r?);
    }
    Ok(out)
}

fn add_missing_columns(conn: &Connection) -> Result<(), StorageError> {
    let cols = get_columns(conn, ORDERS_TABLE)?;
    for (col, ty) in ORDER_COLUMNS {
        if !cols.contains(*col) {
            warn!("{} is missing column {}, adding it", ORDERS_TABLE, col);
            conn.execute(&format!("ALTER TABLE {} ADD COLUMN {} {}", ORDERS_TABLE, col, ty), [])?;
        }
    }
    Ok(())
}
