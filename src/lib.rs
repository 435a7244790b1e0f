#![deny(clippy::expect_used, clippy::unwrap_used)]

//! Republishes push-transport connection events as normalized status
//! notifications to a set of registered observers.
//! 将推送传输的连接事件重新发布为规范化的状态通知，并分发给已注册的观察者。

pub mod config;
pub mod error;
pub mod event;
pub mod normalize;
pub mod observer;
pub mod status;

pub mod broadcaster;
pub mod listener;
pub mod relay;

mod testing;

pub use broadcaster::StatusBroadcaster;
pub use error::{Error, ObserverError, Result};
pub use event::{SessionMode, TransportEvent, TransportFailure};
pub use listener::ConnectionListener;
pub use normalize::{StatusUpdate, normalize};
pub use observer::{ChannelObserver, StatusObserver};
pub use relay::StatusRelay;
pub use status::Status;
