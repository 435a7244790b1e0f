//! The fan-out listener: an append-only observer registry that republishes
//! every transport event as one normalized status notification.
//!
//! The registry is an immutable snapshot behind an `ArcSwap`. Registration
//! copies the current list, appends and swaps the new list in; delivery loads
//! a snapshot and walks it without holding any lock.
//!
//! 扇出监听器：一个只追加的观察者注册表，将每个传输事件重新发布为一条规范化的状态通知。
//!
//! 注册表是 `ArcSwap` 之后的不可变快照。注册时复制当前列表、追加并换入新列表；
//! 传递时加载快照并在不持有任何锁的情况下遍历。

use crate::{
    error::{Error, Result},
    event::{SessionMode, TransportEvent},
    normalize::{StatusUpdate, normalize},
    observer::StatusObserver,
};
use arc_swap::ArcSwap;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tracing::{debug, trace};

type Registry = Vec<Arc<dyn StatusObserver>>;

/// Republishes transport events to every registered observer.
///
/// 将传输事件重新发布给每个已注册的观察者。
pub struct StatusBroadcaster {
    observers: ArcSwap<Registry>,
    /// Mode recorded by the most recent `SessionStarted`.
    /// 最近一次 `SessionStarted` 记录的模式。
    polling: AtomicBool,
}

impl std::fmt::Debug for StatusBroadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusBroadcaster")
            .field("observers", &self.observer_count())
            .field("session_mode", &self.session_mode())
            .finish()
    }
}

impl StatusBroadcaster {
    /// Creates a broadcaster with a single initial observer.
    ///
    /// 使用单个初始观察者创建广播器。
    pub fn new(observer: Arc<dyn StatusObserver>) -> Self {
        Self::with_registry(vec![observer])
    }

    /// Creates a broadcaster from a list of observers, preserving their order.
    ///
    /// Fails with `Error::InvalidArgument` if `observers` is empty.
    ///
    /// 从观察者列表创建广播器，并保持其顺序。如果 `observers` 为空，则以
    /// `Error::InvalidArgument` 失败。
    pub fn from_observers<I>(observers: I) -> Result<Self>
    where
        I: IntoIterator<Item = Arc<dyn StatusObserver>>,
    {
        let registry: Registry = observers.into_iter().collect();
        if registry.is_empty() {
            return Err(Error::InvalidArgument("observer"));
        }
        Ok(Self::with_registry(registry))
    }

    fn with_registry(registry: Registry) -> Self {
        debug!(observers = registry.len(), "Status broadcaster created");
        Self {
            observers: ArcSwap::from_pointee(registry),
            polling: AtomicBool::new(false),
        }
    }

    /// Appends an observer. Duplicates are kept; observers are never removed.
    ///
    /// 追加一个观察者。保留重复项；观察者永远不会被移除。
    pub fn register(&self, observer: Arc<dyn StatusObserver>) {
        let previous = self.observers.rcu(|current| {
            let mut next = Registry::with_capacity(current.len() + 1);
            next.extend(current.iter().cloned());
            next.push(observer.clone());
            next
        });
        debug!(observers = previous.len() + 1, "Registered status observer");
    }

    /// Number of observers currently registered.
    /// 当前已注册的观察者数量。
    pub fn observer_count(&self) -> usize {
        self.observers.load().len()
    }

    /// The session mode recorded by the last `SessionStarted` event.
    /// 最近一次 `SessionStarted` 事件记录的会话模式。
    pub fn session_mode(&self) -> SessionMode {
        SessionMode::from_polling(self.polling.load(Ordering::Acquire))
    }

    /// Normalizes `event` and delivers the result to every observer, in
    /// registration order.
    ///
    /// Returns once every observer has returned. The first observer error
    /// aborts the delivery and is returned as `Error::Observer`.
    ///
    /// 规范化 `event`，并按注册顺序将结果传递给每个观察者。
    /// 在所有观察者返回后才返回。第一个观察者错误会中止传递，并以 `Error::Observer` 返回。
    pub fn dispatch(&self, event: &TransportEvent) -> Result<()> {
        if let TransportEvent::SessionStarted { mode } = event {
            self.polling.store(mode.is_polling(), Ordering::Release);
        }

        match normalize(event, self.session_mode()) {
            Some(update) => self.notify(&update),
            None => {
                trace!(event = event.kind(), "Transport event ignored");
                Ok(())
            }
        }
    }

    /// Delivers `update` to the current registry snapshot.
    /// 将 `update` 传递给当前注册表快照。
    fn notify(&self, update: &StatusUpdate) -> Result<()> {
        let snapshot = self.observers.load_full();
        trace!(
            status = %update.status,
            message = %update.message,
            observers = snapshot.len(),
            "Delivering status notification"
        );
        for (index, observer) in snapshot.iter().enumerate() {
            observer
                .on_status_change(update.status, &update.message)
                .map_err(|source| Error::Observer { index, source })?;
        }
        Ok(())
    }
}
