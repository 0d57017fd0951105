pub(crate) mod error;
pub(crate) mod schema;
pub(crate) mod store;
