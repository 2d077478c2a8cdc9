use crate::book::{OrderBook, StatusCounts};
use crate::domain::Order;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderListDto {
    pub orders: Vec<Order>,
    pub counts: StatusCounts,
}

impl From<&OrderBook> for OrderListDto {
    fn from(book: &OrderBook) -> Self {
        Self {
            orders: book.orders().to_vec(),
            counts: book.status_counts(),
        }
    }
}
