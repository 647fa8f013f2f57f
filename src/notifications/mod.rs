//! Month-scoped memory of which budget alerts were shown, dismissed or muted.
//!
//! State lives in a small line-oriented `key=value` file:
//!
//! ```text
//! disabled=4,9
//! notified.2024-03=2,5
//! dismissed.2024-03=2:150,5:80.5
//! ```
//!
//! The whole file is rewritten after every mutation. There is no locking, so
//! only one process should write a given file.

pub mod format;
pub mod registry;
pub mod store;

pub use format::NotificationState;
pub use registry::SharedStore;
pub use store::NotificationStore;
