//! In-process store implementing every store port.
//!
//! Used when no database URL is configured and by the end-to-end HTTP tests.
//! Tables live in ordered maps behind one mutex, so listings come back in id
//! order without sorting. Identifiers start at 1 per table, and references
//! and email uniqueness are checked the way the relational constraints
//! check them.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{ItemRepository, OrderRepository, StoreError, UserRepository};
use crate::domain::{
    Item, ItemId, NewItem, NewOrderLine, NewUser, Order, OrderId, OrderLine, User, UserId,
};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    emails: BTreeSet<String>,
    items: BTreeMap<ItemId, Item>,
    orders: BTreeMap<OrderId, UserId>,
    order_items: BTreeMap<(OrderId, ItemId), i32>,
    last_user_id: i32,
    last_item_id: i32,
    last_order_id: i32,
}

impl Tables {
    fn assemble(&self, order_id: OrderId, user_id: UserId) -> Order {
        let lines = self
            .order_items
            .range((order_id, ItemId::new(i32::MIN))..=(order_id, ItemId::new(i32::MAX)))
            .filter_map(|(&(_, item_id), &count)| {
                self.items
                    .get(&item_id)
                    .map(|item| OrderLine::new(item.clone(), count))
            })
            .collect();
        Order::new(order_id, user_id, lines)
    }
}

/// Mutex-guarded tables shared by the three repository ports.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use togohub::domain::OrderingService;
/// use togohub::outbound::memory::InMemoryStore;
///
/// let store = Arc::new(InMemoryStore::new());
/// let service = OrderingService::new(store.clone(), store.clone(), store);
/// # let _ = service;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        self.tables
            .lock()
            .map_err(|_| StoreError::connection("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, user: &NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables()?;
        if tables.emails.contains(user.email()) {
            return Err(StoreError::duplicate("users_email_key"));
        }
        tables.last_user_id += 1;
        let id = UserId::new(tables.last_user_id);
        let stored = User::new(id, user.name(), user.email());
        tables.emails.insert(user.email().to_owned());
        tables.users.insert(id, stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl ItemRepository for InMemoryStore {
    async fn insert(&self, item: &NewItem) -> Result<Item, StoreError> {
        let mut tables = self.tables()?;
        tables.last_item_id += 1;
        let stored = Item::new(ItemId::new(tables.last_item_id), item.name());
        tables.items.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.tables()?.items.values().cloned().collect())
    }
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    async fn insert_order(&self, user_id: UserId) -> Result<OrderId, StoreError> {
        let mut tables = self.tables()?;
        if !tables.users.contains_key(&user_id) {
            return Err(StoreError::missing_reference("orders_user_id_fkey"));
        }
        tables.last_order_id += 1;
        let id = OrderId::new(tables.last_order_id);
        tables.orders.insert(id, user_id);
        Ok(id)
    }

    async fn insert_lines(
        &self,
        order_id: OrderId,
        lines: &[NewOrderLine],
    ) -> Result<(), StoreError> {
        let mut tables = self.tables()?;
        if !tables.orders.contains_key(&order_id) {
            return Err(StoreError::missing_reference("order_items_order_id_fkey"));
        }

        // Check the whole batch before writing so a rejected batch leaves no lines.
        let mut batch = BTreeSet::new();
        for line in lines {
            if !tables.items.contains_key(&line.item_id()) {
                return Err(StoreError::missing_reference("order_items_item_id_fkey"));
            }
            let key = (order_id, line.item_id());
            if !batch.insert(key) || tables.order_items.contains_key(&key) {
                return Err(StoreError::duplicate("order_items_pkey"));
            }
        }

        for line in lines {
            tables
                .order_items
                .insert((order_id, line.item_id()), line.item_count());
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Order>, StoreError> {
        let tables = self.tables()?;
        Ok(tables
            .orders
            .iter()
            .map(|(&id, &user_id)| tables.assemble(id, user_id))
            .collect())
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Order>, StoreError> {
        let tables = self.tables()?;
        Ok(tables
            .orders
            .iter()
            .filter(|&(_, &owner)| owner == user_id)
            .map(|(&id, &owner)| tables.assemble(id, owner))
            .collect())
    }

    async fn find_by_id(&self, order_id: OrderId) -> Result<Option<Order>, StoreError> {
        let tables = self.tables()?;
        Ok(tables
            .orders
            .get(&order_id)
            .map(|&user_id| tables.assemble(order_id, user_id)))
    }
}
