//! The observer capability that receives normalized status notifications.
//!
//! 接收规范化状态通知的观察者能力。

use crate::{error::ObserverError, normalize::StatusUpdate, status::Status};
use std::borrow::Cow;
use tokio::sync::mpsc;

/// Receives status notifications from a `StatusBroadcaster`.
///
/// Calls are synchronous: the broadcaster waits for this method to return
/// before notifying the next observer. Returning an error stops the current
/// delivery and surfaces the error to whoever dispatched the event.
///
/// 从 `StatusBroadcaster` 接收状态通知。
///
/// 调用是同步的：广播器会等待此方法返回后再通知下一个观察者。
/// 返回错误会中止本次传递，并将错误交给派发该事件的调用方。
pub trait StatusObserver: Send + Sync + 'static {
    fn on_status_change(&self, status: Status, message: &str) -> Result<(), ObserverError>;
}

impl<F> StatusObserver for F
where
    F: Fn(Status, &str) -> Result<(), ObserverError> + Send + Sync + 'static,
{
    fn on_status_change(&self, status: Status, message: &str) -> Result<(), ObserverError> {
        self(status, message)
    }
}

/// An observer that forwards every notification into an unbounded channel.
///
/// Useful for moving status handling onto an async task. Fails once the
/// receiving side has been dropped.
///
/// 将每个通知转发到无界通道的观察者。适合将状态处理转移到异步任务上。
/// 一旦接收端被丢弃，就会失败。
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<StatusUpdate>,
}

impl ChannelObserver {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<StatusUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl StatusObserver for ChannelObserver {
    fn on_status_change(&self, status: Status, message: &str) -> Result<(), ObserverError> {
        self.tx
            .send(StatusUpdate {
                status,
                message: Cow::Owned(message.to_owned()),
            })
            .map_err(|_| "status channel receiver dropped".into())
    }
}
