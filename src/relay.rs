//! The message-passing front door: a single actor task owns a
//! `StatusBroadcaster` and serves registration and dispatch requests in
//! arrival order.
//!
//! 消息传递入口：单个 actor 任务拥有 `StatusBroadcaster`，并按到达顺序处理注册和派发请求。
pub mod actor;
pub mod command;
pub mod handle;

pub use command::RelayCommand;
pub use handle::StatusRelay;
