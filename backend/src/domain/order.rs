//! Orders and their lines.
//!
//! An [`Order`] belongs to one user and lists menu items with a quantity
//! each. The association between an order and an item is an [`OrderLine`];
//! the store keys it by the `(order, item)` pair, so an item appears at most
//! once per order.

use std::collections::HashSet;

use super::{Item, ItemId, OrderId, UserId};

/// Validation errors returned by [`NewOrder::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OrderValidationError {
    #[error("order must list at least one item")]
    NoLines,
    #[error("item {item_id} is listed more than once")]
    DuplicateItem { item_id: ItemId },
}

/// One item of a stored order together with its quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    item: Item,
    item_count: i32,
}

impl OrderLine {
    /// Pair a stored item with the ordered quantity.
    pub fn new(item: Item, item_count: i32) -> Self {
        Self { item, item_count }
    }

    /// The ordered item.
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Ordered quantity.
    pub fn item_count(&self) -> i32 {
        self.item_count
    }
}

/// A stored order with its lines fully loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    user_id: UserId,
    lines: Vec<OrderLine>,
}

impl Order {
    /// Assemble an order from its stored header and lines.
    pub fn new(id: OrderId, user_id: UserId, lines: Vec<OrderLine>) -> Self {
        Self { id, user_id, lines }
    }

    /// Store-generated identifier.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Owner of the order.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Ordered items, ascending by item id.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }
}

/// Requested quantity of one item in a new order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrderLine {
    item_id: ItemId,
    item_count: i32,
}

impl NewOrderLine {
    /// Build a requested line. Quantities are stored as given.
    pub fn new(item_id: ItemId, item_count: i32) -> Self {
        Self {
            item_id,
            item_count,
        }
    }

    /// Item being ordered.
    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    /// Requested quantity.
    pub fn item_count(&self) -> i32 {
        self.item_count
    }
}

/// Draft of an order that has not been stored yet.
///
/// The user and item references are not checked here; the store rejects them
/// when they do not resolve.
///
/// # Examples
/// ```
/// use togohub::domain::{ItemId, NewOrder, NewOrderLine, OrderValidationError, UserId};
///
/// let lines = vec![
///     NewOrderLine::new(ItemId::new(1), 3),
///     NewOrderLine::new(ItemId::new(4), 2),
/// ];
/// let draft = NewOrder::try_new(UserId::new(1), lines).expect("valid draft");
/// assert_eq!(draft.lines().len(), 2);
///
/// assert_eq!(
///     NewOrder::try_new(UserId::new(1), Vec::new()),
///     Err(OrderValidationError::NoLines)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    user_id: UserId,
    lines: Vec<NewOrderLine>,
}

impl NewOrder {
    /// Validate the requested lines for the given user.
    pub fn try_new(user_id: UserId, lines: Vec<NewOrderLine>) -> Result<Self, OrderValidationError> {
        if lines.is_empty() {
            return Err(OrderValidationError::NoLines);
        }
        let mut seen = HashSet::with_capacity(lines.len());
        if let Some(duplicate) = lines.iter().find(|line| !seen.insert(line.item_id)) {
            return Err(OrderValidationError::DuplicateItem {
                item_id: duplicate.item_id,
            });
        }
        Ok(Self { user_id, lines })
    }

    /// Customer placing the order.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Requested lines in submission order.
    pub fn lines(&self) -> &[NewOrderLine] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn line(item: i32, count: i32) -> NewOrderLine {
        NewOrderLine::new(ItemId::new(item), count)
    }

    #[rstest]
    fn rejects_empty_line_list() {
        assert_eq!(
            NewOrder::try_new(UserId::new(1), Vec::new()),
            Err(OrderValidationError::NoLines)
        );
    }

    #[rstest]
    fn rejects_repeated_item() {
        let result = NewOrder::try_new(UserId::new(1), vec![line(1, 3), line(4, 2), line(1, 1)]);
        assert_eq!(
            result,
            Err(OrderValidationError::DuplicateItem {
                item_id: ItemId::new(1)
            })
        );
    }

    #[rstest]
    fn keeps_submission_order() {
        let draft = NewOrder::try_new(UserId::new(9), vec![line(4, 2), line(1, 3)]).expect("valid");
        let ids: Vec<i32> = draft.lines().iter().map(|l| l.item_id().get()).collect();
        assert_eq!(ids, vec![4, 1]);
        assert_eq!(draft.user_id(), UserId::new(9));
    }
}
