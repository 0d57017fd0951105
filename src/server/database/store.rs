use crate::server::database::error::StorageError;
use crate::server::database::schema;
use crate::server::model::order::{NewOrder, Order};
use crate::server::util::time;
use rusqlite::{params, Connection, OpenFlags, Row};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How long a connection waits on another writer's file lock before giving up.
const BUSY_TIMEOUT_SECONDS: u64 = 5;

/// Durable home of submitted orders, shared by every request handler.
pub(crate) trait OrderStore: Send + Sync + 'static {
    /// Create or upgrade the schema. Safe to call any number of times.
    fn init(&self) -> Result<(), StorageError>;
    /// Persist one order and return its id. Committed once this returns `Ok`.
    fn insert(&self, order: &NewOrder) -> Result<i64, StorageError>;
    /// All orders, newest first.
    fn list_all(&self) -> Result<Vec<Order>, StorageError>;
}

/// Sqlite file backed store. Holds no connection; every operation opens its own and drops it on return.
#[derive(Debug, Clone)]
pub(crate) struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, StorageError> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.busy_timeout(Duration::from_secs(BUSY_TIMEOUT_SECONDS))?;
        Ok(conn)
    }
}

impl OrderStore for SqliteStore {
    fn init(&self) -> Result<(), StorageError> {
        let mut conn = self.connect()?;
        schema::init(&mut conn)
    }

    fn insert(&self, order: &NewOrder) -> Result<i64, StorageError> {
        let conn = self.connect()?;
        let order_date = time::format_order_date(time::helper::get_utc_now());
        // autocommit, the row is durable once execute returns
        conn.execute(
            r#"
            INSERT INTO orders (customer_name, customer_phone, customer_address, items_bought, total_quantity, delivery_type, total_amount, order_date)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                order.customer_name,
                order.customer_phone,
                order.customer_address,
                order.items_bought,
                order.total_quantity,
                order.delivery_type,
                order.total_amount,
                order_date,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn list_all(&self) -> Result<Vec<Order>, StorageError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT order_id, customer_name, customer_phone, customer_address, items_bought,
                   total_quantity, delivery_type, total_amount, order_date
            FROM orders
            ORDER BY order_date DESC, order_id DESC
            "#,
        )?;
        let rows = stmt.query_map([], order_from_row)?;

        let mut orders = Vec::new();
        for r in rows {
            orders.push(r?);
        }
        Ok(orders)
    }
}

/// Rows written by other tools may carry NULLs; those read back as empty text or zero.
fn order_from_row(row: &Row<'_>) -> rusqlite::Result<Order> {
    Ok(Order {
        order_id: row.get(0)?,
        customer_name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        customer_phone: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        customer_address: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        items_bought: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        total_quantity: row.get::<_, Option<i64>>(5)?.unwrap_or_default(),
        delivery_type: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
        total_amount: row.get::<_, Option<i64>>(7)?.unwrap_or_default(),
        order_date: row.get::<_, Option<String>>(8)?.unwrap_or_default(),
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::util::time::helper::set_mock_now;
    use tempfile::TempDir;

    fn new_store() -> (TempDir, SqliteStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::new(dir.path().join("orders.db"));
        store.init().unwrap();
        (dir, store)
    }

    fn order(name: &str) -> NewOrder {
        NewOrder {
            customer_name: name.to_string(),
            customer_phone: "9876543210".to_string(),
            customer_address: "12 MG Road, Pune".to_string(),
            items_bought: "2x Shot Glass, 1x Whiskey Glass".to_string(),
            total_quantity: 3,
            delivery_type: "standard".to_string(),
            total_amount: 1299,
        }
    }

    #[test]
    fn list_empty_store() {
        let (_dir, store) = new_store();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn insert_then_list() {
        let (_dir, store) = new_store();
        set_mock_now(1_700_000_000);

        let id = store.insert(&order("Asha")).unwrap();
        let orders = store.list_all().unwrap();

        assert_eq!(
            orders,
            vec![Order {
                order_id: id,
                customer_name: "Asha".to_string(),
                customer_phone: "9876543210".to_string(),
                customer_address: "12 MG Road, Pune".to_string(),
                items_bought: "2x Shot Glass, 1x Whiskey Glass".to_string(),
                total_quantity: 3,
                delivery_type: "standard".to_string(),
                total_amount: 1299,
                order_date: "2023-11-14 22:13:20".to_string(),
            }]
        );
    }

    #[test]
    fn ids_increase() {
        let (_dir, store) = new_store();
        let first = store.insert(&order("A")).unwrap();
        let second = store.insert(&order("B")).unwrap();
        assert!(second > first);
    }

    #[test]
    fn newest_first() {
        let (_dir, store) = new_store();
        set_mock_now(1_700_000_000);
        store.insert(&order("A")).unwrap();
        set_mock_now(1_700_000_060);
        store.insert(&order("B")).unwrap();

        let names = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|o| o.customer_name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn orders_by_date_not_id() {
        let (_dir, store) = new_store();
        set_mock_now(1_700_000_060);
        store.insert(&order("late")).unwrap();
        set_mock_now(1_700_000_000);
        store.insert(&order("early")).unwrap();

        let names = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|o| o.customer_name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["late", "early"]);
    }

    #[test]
    fn same_second_lists_later_insert_first() {
        let (_dir, store) = new_store();
        set_mock_now(1_700_000_000);
        store.insert(&order("A")).unwrap();
        store.insert(&order("B")).unwrap();

        let names = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|o| o.customer_name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn init_is_idempotent_and_keeps_rows() {
        let (_dir, store) = new_store();
        store.insert(&order("A")).unwrap();
        store.init().unwrap();
        store.init().unwrap();
        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn reads_rows_with_nulls() {
        let (_dir, store) = new_store();
        let conn = Connection::open(store.path()).unwrap();
        conn.execute("INSERT INTO orders (customer_name) VALUES (NULL)", []).unwrap();
        drop(conn);

        let orders = store.list_all().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].customer_name, "");
        assert_eq!(orders[0].total_quantity, 0);
        // store default kicks in when the server did not stamp the row
        assert!(!orders[0].order_date.is_empty());
    }

    #[test]
    fn insert_waits_for_concurrent_writer() {
        let (_dir, store) = new_store();
        let holder = Connection::open(store.path()).unwrap();
        holder.execute_batch("BEGIN IMMEDIATE").unwrap();

        let writer = store.clone();
        let handle = std::thread::spawn(move || writer.insert(&order("waiting")));
        std::thread::sleep(Duration::from_millis(300));
        // still parked on the write lock
        assert!(!handle.is_finished());

        holder.execute_batch("COMMIT").unwrap();
        let id = handle.join().unwrap().unwrap();

        let orders = store.list_all().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order_id, id);
        assert_eq!(orders[0].customer_name, "waiting");
    }

    #[test]
    fn unreachable_store_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::new(dir.path().join("missing").join("orders.db"));
        assert!(matches!(store.init(), Err(StorageError::Sqlite { .. })));
        assert!(store.insert(&order("A")).is_err());
        assert!(store.list_all().is_err());
    }

    #[test]
    fn mock_store_matches_sqlite_ordering() {
        let store = mock::MockStore::default();
        set_mock_now(1_700_000_000);
        store.insert(&order("A")).unwrap();
        store.insert(&order("B")).unwrap();
        let names = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|o| o.customer_name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["B", "A"]);
        assert!(mock::MockStore::failing().list_all().is_err());
    }
}
