//! The relay actor's event loop.
//!
//! 中继 actor 的事件循环。

use super::command::RelayCommand;
use crate::{broadcaster::StatusBroadcaster, error::Error};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, trace};

/// The actor that exclusively owns a `StatusBroadcaster`.
///
/// Observers run on the blocking pool, so a slow observer never stalls the
/// runtime thread the actor lives on. A request is answered only after its
/// delivery has finished, so requests never overlap. Requests whose caller
/// has already given up are dropped without being applied.
///
/// 独占拥有 `StatusBroadcaster` 的 actor。观察者在阻塞线程池上运行，
/// 因此慢观察者不会阻塞 actor 所在的运行时线程。请求仅在其传递完成后才被应答，
/// 因此请求之间永不重叠。调用方已放弃的请求会被直接丢弃而不执行。
pub(crate) struct RelayActor {
    pub(crate) broadcaster: Arc<StatusBroadcaster>,
    pub(crate) command_rx: mpsc::Receiver<RelayCommand>,
}

impl RelayActor {
    /// Runs the actor until shut down or until every handle is dropped.
    ///
    /// 运行 actor，直到被关闭或所有句柄都被丢弃。
    pub(crate) async fn run(mut self) {
        info!("Status relay actor started");
        while let Some(command) = self.command_rx.recv().await {
            trace!(?command, "Relay command received");
            match command {
                RelayCommand::Register {
                    observer,
                    response_tx,
                } => {
                    if response_tx.is_closed() {
                        debug!("Dropping abandoned register request");
                        continue;
                    }
                    self.broadcaster.register(observer);
                    let _ = response_tx.send(Ok(()));
                }
                RelayCommand::Dispatch { event, response_tx } => {
                    if response_tx.is_closed() {
                        debug!(event = event.kind(), "Dropping abandoned dispatch request");
                        continue;
                    }
                    let broadcaster = self.broadcaster.clone();
                    let delivery =
                        tokio::task::spawn_blocking(move || broadcaster.dispatch(&event)).await;
                    let result = match delivery {
                        Ok(result) => result,
                        // An observer panic unwinds out of the actor like it would out of
                        // a direct `dispatch`; pending handles then see `ChannelClosed`.
                        Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
                        Err(_) => Err(Error::ChannelClosed),
                    };
                    let _ = response_tx.send(result);
                }
                RelayCommand::ObserverCount { response_tx } => {
                    let _ = response_tx.send(self.broadcaster.observer_count());
                }
                RelayCommand::Shutdown { response_tx } => {
                    debug!("Status relay shutdown requested");
                    let _ = response_tx.send(());
                    break;
                }
            }
        }
        info!(
            observers = self.broadcaster.observer_count(),
            "Status relay actor stopped"
        );
    }
}
