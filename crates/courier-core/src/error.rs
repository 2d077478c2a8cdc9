use crate::domain::OrderId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("no valid customer data found; include at least a phone number per customer")]
    NoCustomerData,
    #[error("order not found: {0}")]
    OrderNotFound(OrderId),
    #[error("order {0} has not been delivered")]
    OrderNotDelivered(OrderId),
    #[error("order {0} is already delivered")]
    AlreadyDelivered(OrderId),
    #[error("invalid order status: {0}")]
    InvalidOrderStatus(String),
}
