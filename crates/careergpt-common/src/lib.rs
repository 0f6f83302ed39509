pub mod errors;
pub mod id;
pub mod types;

pub use errors::{CareerError, ConfigError};
pub use id::{new_correlation_id, HistoryId};
pub use types::{HistoryEntry, Message, Role};
