pub mod errors;
pub mod id;
pub mod notifications;

pub use errors::{ConfigError, DocchatError};
pub use id::{new_id, SessionId};
pub use notifications::{Notification, NotificationLevel};

pub type Result<T> = std::result::Result<T, DocchatError>;
