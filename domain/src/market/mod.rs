//! Market data types and ticker resolution

pub mod snapshot;
pub mod ticker;

pub use snapshot::{PricePoint, StockSnapshot};
pub use ticker::resolve_ticker;
