//! The user-facing handle to the relay actor.

use super::{actor::RelayActor, command::RelayCommand};
use crate::{
    broadcaster::StatusBroadcaster,
    config::Config,
    error::{Error, Result},
    event::TransportEvent,
    listener::ConnectionListener,
    observer::StatusObserver,
};
use std::{sync::Arc, time::Duration};
use tokio::sync::{mpsc, oneshot};
use tracing::info;

/// A cloneable handle to a running status relay.
///
/// Async requests are bounded by `Config::request_timeout`.
///
/// 正在运行的状态中继的可克隆句柄。异步请求受 `Config::request_timeout` 限制。
#[derive(Debug, Clone)]
pub struct StatusRelay {
    command_tx: mpsc::Sender<RelayCommand>,
    request_timeout: Duration,
}

impl StatusRelay {
    /// Spawns a relay actor on the current tokio runtime, seeded with one
    /// observer.
    ///
    /// 在当前 tokio 运行时上生成一个中继 actor，并以一个观察者作为初始值。
    pub fn spawn(observer: Arc<dyn StatusObserver>, config: Config) -> Self {
        Self::spawn_with(StatusBroadcaster::new(observer), config)
    }

    /// Spawns a relay actor that takes ownership of an existing broadcaster.
    ///
    /// 生成一个接管现有广播器所有权的中继 actor。
    pub fn spawn_with(broadcaster: StatusBroadcaster, config: Config) -> Self {
        let (command_tx, command_rx) = mpsc::channel(config.command_channel_capacity);
        let actor = RelayActor {
            broadcaster: Arc::new(broadcaster),
            command_rx,
        };
        info!(
            capacity = config.command_channel_capacity,
            timeout = ?config.request_timeout,
            "Spawning status relay actor"
        );
        tokio::spawn(actor.run());

        Self {
            command_tx,
            request_timeout: config.request_timeout,
        }
    }

    /// Appends an observer. Every dispatch issued after this resolves
    /// reaches the new observer.
    ///
    /// 追加一个观察者。在此调用完成后发出的每次派发都会到达新观察者。
    pub async fn register(&self, observer: Arc<dyn StatusObserver>) -> Result<()> {
        self.request(|response_tx| RelayCommand::Register {
            observer,
            response_tx,
        })
        .await?
    }

    /// Delivers an event and waits until every observer has handled it.
    ///
    /// 传递一个事件，并等待所有观察者处理完毕。
    pub async fn dispatch(&self, event: TransportEvent) -> Result<()> {
        self.request(|response_tx| RelayCommand::Dispatch { event, response_tx })
            .await?
    }

    /// Number of observers the actor currently holds.
    /// actor 当前持有的观察者数量。
    pub async fn observer_count(&self) -> Result<usize> {
        self.request(|response_tx| RelayCommand::ObserverCount { response_tx })
            .await
    }

    /// Stops the actor. Later requests on any handle fail with
    /// `Error::ChannelClosed`.
    ///
    /// 停止 actor。之后任何句柄上的请求都会以 `Error::ChannelClosed` 失败。
    pub async fn shutdown(&self) -> Result<()> {
        self.request(|response_tx| RelayCommand::Shutdown { response_tx })
            .await
    }

    /// Dispatches from a thread outside the tokio runtime, blocking until
    /// every observer has handled the event.
    ///
    /// Panics if called from within an async context.
    ///
    /// 从 tokio 运行时之外的线程派发，阻塞直到所有观察者处理完该事件。
    /// 如果在异步上下文中调用则会 panic。
    pub fn blocking_dispatch(&self, event: TransportEvent) -> Result<()> {
        let (response_tx, response_rx) = oneshot::channel();
        self.command_tx
            .blocking_send(RelayCommand::Dispatch { event, response_tx })
            .map_err(|_| Error::ChannelClosed)?;
        response_rx
            .blocking_recv()
            .map_err(|_| Error::ChannelClosed)?
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> RelayCommand,
    ) -> Result<T> {
        let (response_tx, response_rx) = oneshot::channel();
        let command = build(response_tx);
        let exchange = async {
            self.command_tx
                .send(command)
                .await
                .map_err(|_| Error::ChannelClosed)?;
            response_rx.await.map_err(|_| Error::ChannelClosed)
        };
        tokio::time::timeout(self.request_timeout, exchange)
            .await
            .map_err(|_| Error::Timeout)?
    }
}

/// Lets a transport running on its own threads drive the relay directly.
impl ConnectionListener for StatusRelay {
    fn on_event(&self, event: TransportEvent) -> Result<()> {
        self.blocking_dispatch(event)
    }
}
