pub mod ids;
pub mod order;
pub mod phone;
pub mod record;

pub use ids::{DriverId, OrderId, StoreId};
pub use order::{Order, OrderDraft, OrderStatus, StoreRef, IMPORTED_INSTRUCTIONS, IMPORTED_ITEMS};
pub use phone::normalize_phone;
pub use record::{CustomerRecord, UNKNOWN};
