//! Commands used by the relay actor.

use crate::{error::Result, event::TransportEvent, observer::StatusObserver};
use std::sync::Arc;
use tokio::sync::oneshot;

/// Commands sent to the `RelayActor`.
///
/// Every command carries a oneshot sender the actor answers once the
/// request has been fully applied.
///
/// 发送到 `RelayActor` 的命令。每个命令都携带一个 oneshot 发送端，
/// actor 在请求完全执行后通过它应答。
pub enum RelayCommand {
    /// Append an observer to the registry.
    /// 向注册表追加一个观察者。
    Register {
        observer: Arc<dyn StatusObserver>,
        response_tx: oneshot::Sender<Result<()>>,
    },
    /// Normalize an event and deliver it to every observer.
    /// 规范化一个事件并将其传递给每个观察者。
    Dispatch {
        event: TransportEvent,
        response_tx: oneshot::Sender<Result<()>>,
    },
    /// Report the number of registered observers.
    /// 报告已注册观察者的数量。
    ObserverCount {
        response_tx: oneshot::Sender<usize>,
    },
    /// Stop the actor after answering.
    /// 应答后停止 actor。
    Shutdown { response_tx: oneshot::Sender<()> },
}

impl std::fmt::Debug for RelayCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelayCommand::Register { .. } => f.write_str("Register"),
            RelayCommand::Dispatch { event, .. } => {
                f.debug_struct("Dispatch").field("event", event).finish()
            }
            RelayCommand::ObserverCount { .. } => f.write_str("ObserverCount"),
            RelayCommand::Shutdown { .. } => f.write_str("Shutdown"),
        }
    }
}
