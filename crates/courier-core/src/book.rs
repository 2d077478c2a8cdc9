use crate::domain::{
    CustomerRecord, DriverId, Order, OrderDraft, OrderId, OrderStatus, StoreId, StoreRef,
};
use crate::error::CoreError;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub picked_up: usize,
    pub delivered: usize,
}

/// Single owner of every order in a session. Dashboards read from it and all
/// mutations go through its methods.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: OrderId) -> Result<&Order, CoreError> {
        self.orders
            .iter()
            .find(|order| order.id == id)
            .ok_or(CoreError::OrderNotFound(id))
    }

    pub fn for_store(&self, store_id: StoreId) -> impl Iterator<Item = &Order> {
        self.orders
            .iter()
            .filter(move |order| order.store_id() == Some(store_id))
    }

    pub fn with_status(&self, status: OrderStatus) -> impl Iterator<Item = &Order> {
        self.orders
            .iter()
            .filter(move |order| order.status == status)
    }

    pub fn add(&mut self, draft: OrderDraft, now_utc: i64) -> OrderId {
        let id = self.next_id();
        self.orders.push(Order {
            id,
            draft,
            status: OrderStatus::Pending,
            assigned_driver: None,
            created_at: now_utc,
        });
        id
    }

    /// Turns extracted records into pending, unassigned orders, in order.
    pub fn import_records(
        &mut self,
        records: &[CustomerRecord],
        store: Option<StoreRef>,
        now_utc: i64,
    ) -> Result<Vec<OrderId>, CoreError> {
        if records.is_empty() {
            return Err(CoreError::NoCustomerData);
        }

        let ids = records
            .iter()
            .map(|record| self.add(OrderDraft::from_record(record, store.clone()), now_utc))
            .collect::<Vec<_>>();
        debug!(count = ids.len(), "imported orders");
        Ok(ids)
    }

    /// Replaces customer and item fields; id, status, driver and creation
    /// time are kept.
    pub fn update(&mut self, id: OrderId, draft: OrderDraft) -> Result<(), CoreError> {
        self.get_mut(id)?.draft = draft;
        Ok(())
    }

    pub fn set_status(&mut self, id: OrderId, status: OrderStatus) -> Result<(), CoreError> {
        self.get_mut(id)?.status = status;
        Ok(())
    }

    pub fn advance(&mut self, id: OrderId) -> Result<OrderStatus, CoreError> {
        let order = self.get_mut(id)?;
        let next = order.status.next().ok_or(CoreError::AlreadyDelivered(id))?;
        order.status = next;
        Ok(next)
    }

    pub fn assign_driver(&mut self, id: OrderId, driver: Option<DriverId>) -> Result<(), CoreError> {
        self.get_mut(id)?.assigned_driver = driver;
        Ok(())
    }

    pub fn remove_delivered(&mut self, id: OrderId) -> Result<Order, CoreError> {
        let index = self
            .orders
            .iter()
            .position(|order| order.id == id)
            .ok_or(CoreError::OrderNotFound(id))?;
        if self.orders[index].status != OrderStatus::Delivered {
            return Err(CoreError::OrderNotDelivered(id));
        }
        Ok(self.orders.remove(index))
    }

    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for order in &self.orders {
            match order.status {
                OrderStatus::Pending => counts.pending += 1,
                OrderStatus::PickedUp => counts.picked_up += 1,
                OrderStatus::Delivered => counts.delivered += 1,
            }
        }
        counts
    }

    fn next_id(&self) -> OrderId {
        let max = self.orders.iter().map(|order| order.id.get()).max().unwrap_or(0);
        OrderId::new(max + 1)
    }

    fn get_mut(&mut self, id: OrderId) -> Result<&mut Order, CoreError> {
        self.orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or(CoreError::OrderNotFound(id))
    }
}
