//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{OrderingCommand, OrderingQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub ordering: Arc<dyn OrderingCommand>,
    pub ordering_query: Arc<dyn OrderingQuery>,
}

impl HttpState {
    /// Construct state from the command and query ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use togohub::domain::ports::{FixtureOrderingCommand, FixtureOrderingQuery};
    /// use togohub::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureOrderingCommand),
    ///     Arc::new(FixtureOrderingQuery),
    /// );
    /// let _query = state.ordering_query.clone();
    /// ```
    pub fn new(ordering: Arc<dyn OrderingCommand>, ordering_query: Arc<dyn OrderingQuery>) -> Self {
        Self {
            ordering,
            ordering_query,
        }
    }

    /// Build state from one service implementing both ordering ports.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: OrderingCommand + OrderingQuery + 'static,
    {
        Self::new(service.clone(), service)
    }
}
