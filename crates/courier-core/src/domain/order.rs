use crate::domain::ids::{DriverId, OrderId, StoreId};
use crate::domain::record::CustomerRecord;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const IMPORTED_ITEMS: &str = "Imported order";
pub const IMPORTED_INSTRUCTIONS: &str = "Imported from data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    PickedUp,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::PickedUp => "picked_up",
            Self::Delivered => "delivered",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::PickedUp => "Picked Up",
            Self::Delivered => "Delivered",
        }
    }

    /// The next step in the delivery lifecycle, if any.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::PickedUp),
            Self::PickedUp => Some(Self::Delivered),
            Self::Delivered => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "picked_up" => Ok(Self::PickedUp),
            "delivered" => Ok(Self::Delivered),
            _ => Err(CoreError::InvalidOrderStatus(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRef {
    pub id: StoreId,
    pub name: String,
}

/// Customer and item fields of an order before it enters the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub customer_location: String,
    pub items: String,
    pub special_instructions: String,
    pub store: Option<StoreRef>,
}

impl OrderDraft {
    pub fn from_record(record: &CustomerRecord, store: Option<StoreRef>) -> Self {
        Self {
            customer_name: record.name.clone(),
            customer_phone: record.phone.clone(),
            customer_address: record.address.clone(),
            customer_location: record.location.clone(),
            items: IMPORTED_ITEMS.to_string(),
            special_instructions: IMPORTED_INSTRUCTIONS.to_string(),
            store,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(flatten)]
    pub draft: OrderDraft,
    pub status: OrderStatus,
    pub assigned_driver: Option<DriverId>,
    pub created_at: i64,
}

impl Order {
    pub fn store_id(&self) -> Option<StoreId> {
        self.draft.store.as_ref().map(|store| store.id)
    }
}
