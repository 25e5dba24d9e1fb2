//! Builder for the HTTP state from the configured store.

use std::sync::Arc;

use actix_web::web;

use togohub::domain::OrderingService;
use togohub::domain::ports::{ItemRepository, OrderRepository, UserRepository};
use togohub::inbound::http::state::HttpState;
use togohub::outbound::memory::InMemoryStore;
use togohub::outbound::persistence::{
    DbPool, DieselItemRepository, DieselOrderRepository, DieselUserRepository,
};

use super::ServerConfig;

fn state_for<U, I, O>(users: Arc<U>, items: Arc<I>, orders: Arc<O>) -> HttpState
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    O: OrderRepository + 'static,
{
    HttpState::from_service(Arc::new(OrderingService::new(users, items, orders)))
}

fn diesel_state(pool: &DbPool) -> HttpState {
    state_for(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselItemRepository::new(pool.clone())),
        Arc::new(DieselOrderRepository::new(pool.clone())),
    )
}

fn in_memory_state() -> HttpState {
    let store = Arc::new(InMemoryStore::new());
    state_for(store.clone(), store.clone(), store)
}

/// Build the shared HTTP state, preferring PostgreSQL when a pool is set.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => diesel_state(pool),
        None => in_memory_state(),
    };
    web::Data::new(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    use rstest::rstest;
    use togohub::domain::{NewItem, NewUser};

    #[rstest]
    #[tokio::test]
    async fn without_pool_uses_a_fresh_in_memory_store() {
        let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)));
        let state = build_http_state(&config);

        let pizza = NewItem::try_new("Pizza").expect("valid item");
        let item_id = state.ordering.create_item(pizza).await.expect("item stored");
        let user = NewUser::try_from_parts("Ada", "ada@example.com").expect("valid user");
        state.ordering.create_user(user).await.expect("user stored");

        let items = state.ordering_query.list_items().await.expect("items listed");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id(), item_id);
        assert!(state.ordering_query.list_orders().await.expect("orders listed").is_empty());
    }
}
