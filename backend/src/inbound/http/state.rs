//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` so they depend only on the driving
//! ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::UserService;
use crate::domain::ports::{UserRepository, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read side.
    pub users: Arc<dyn UsersQuery>,
    /// Write side.
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    #[must_use]
    pub const fn new(users: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users,
            users_command,
        }
    }

    /// Construct state backed by a [`UserService`] over `repository`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use user_service::inbound::http::state::HttpState;
    /// use user_service::outbound::in_memory::InMemoryUserRepository;
    ///
    /// let state = HttpState::from_repository(Arc::new(InMemoryUserRepository::new()));
    /// # let _ = state;
    /// ```
    #[must_use]
    pub fn from_repository<R>(repository: Arc<R>) -> Self
    where
        R: UserRepository + 'static,
    {
        let service = Arc::new(UserService::new(repository));
        Self::new(service.clone(), service)
    }
}
