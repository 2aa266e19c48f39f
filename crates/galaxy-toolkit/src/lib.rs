//! Samsung device utility calculators: reference catalog, scoring tools,
//! request sessions and the HTTP surface that exposes them.

pub mod catalog;
pub mod config;
pub mod directory;
pub mod error;
pub mod notifications;
pub mod session;
pub mod telemetry;
pub mod tools;

pub use error::AppError;
pub use notifications::{Notification, NotificationKind, NotificationSink};
pub use session::{ToolSession, Workspace};
pub use tools::{tool_router, ToolError, ToolKind, ToolOutcome, ToolRequest, ToolService};
