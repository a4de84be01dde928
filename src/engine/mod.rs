mod core;
mod messages;
mod refresh;

pub use self::core::TimelineEngine;
pub use messages::RefreshRequest;
pub use refresh::RefreshQueue;
