use std::net::SocketAddrV4;
use std::path::PathBuf;

/// Server configs
#[derive(Debug)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddrV4,
    /// sqlite file holding the orders table
    pub db_path: PathBuf,
}

impl ServerConfig {
    pub fn new(addr: SocketAddrV4, db_path: PathBuf) -> Self {
        Self {
            addr,
            db_path,
        }
    }
}
