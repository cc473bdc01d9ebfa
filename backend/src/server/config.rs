//! HTTP server configuration object.

use std::net::SocketAddr;

use user_service::outbound::persistence::DbPool;

/// Everything `create_server` needs beyond the health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration.
    #[must_use]
    pub const fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self { bind_addr, db_pool }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
