//! Maps transport events onto normalized status notifications.
//!
//! This is a pure function of the event and the last recorded session mode;
//! it holds no state and never touches observers.
//!
//! 将传输事件映射为规范化的状态通知。
//! 这是事件与最近记录的会话模式的纯函数；它不持有状态，也不接触观察者。

use crate::{
    event::{SessionMode, TransportEvent},
    status::Status,
};
use std::borrow::Cow;

pub const MSG_CONNECTED: &str = "Connected to Lightstreamer Server...";
pub const MSG_POLLING: &str = "Lightstreamer is pushing (smart polling mode)...";
pub const MSG_STREAMING: &str = "Lightstreamer is pushing (streaming mode)...";
pub const MSG_DATA_ERROR: &str = "Data error";
pub const MSG_STALLED: &str = "Connection stalled";
pub const MSG_CLOSED: &str = "Connection closed";
pub const MSG_FORCIBLY_CLOSED: &str = "Connection forcibly closed";
pub const PREFIX_SERVER_FAILURE: &str = "Server failure";
pub const PREFIX_CONNECTION_FAILURE: &str = "Connection failure ";

/// A normalized `(status, message)` pair delivered to every observer.
///
/// 传递给每个观察者的规范化 `(状态, 消息)` 对。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: Status,
    pub message: Cow<'static, str>,
}

impl StatusUpdate {
    pub const fn fixed(status: Status, message: &'static str) -> Self {
        Self {
            status,
            message: Cow::Borrowed(message),
        }
    }

    /// The update a freshly started (or resumed) session reports.
    /// 新启动（或恢复）的会话所报告的更新。
    pub const fn for_session(mode: SessionMode) -> Self {
        match mode {
            SessionMode::Polling => Self::fixed(Status::Polling, MSG_POLLING),
            SessionMode::Streaming => Self::fixed(Status::Streaming, MSG_STREAMING),
        }
    }
}

/// Normalizes one transport event.
///
/// `last_mode` is the mode recorded by the most recent `SessionStarted`, and
/// is only consulted when an activity warning clears. Returns `None` for
/// events that produce no notification.
///
/// 规范化一个传输事件。`last_mode` 是最近一次 `SessionStarted` 记录的模式，
/// 仅在活动警告解除时使用。对于不产生通知的事件返回 `None`。
pub fn normalize(event: &TransportEvent, last_mode: SessionMode) -> Option<StatusUpdate> {
    let update = match event {
        TransportEvent::ConnectionEstablished => {
            StatusUpdate::fixed(Status::Connected, MSG_CONNECTED)
        }
        TransportEvent::SessionStarted { mode } => StatusUpdate::for_session(*mode),
        TransportEvent::NewBytes { .. } => return None,
        TransportEvent::DataError { .. } => StatusUpdate::fixed(Status::Error, MSG_DATA_ERROR),
        TransportEvent::ActivityWarning { active: true } => {
            StatusUpdate::fixed(Status::Stalled, MSG_STALLED)
        }
        TransportEvent::ActivityWarning { active: false } => StatusUpdate::for_session(last_mode),
        TransportEvent::Closed => StatusUpdate::fixed(Status::Disconnected, MSG_CLOSED),
        TransportEvent::Ended { .. } => {
            StatusUpdate::fixed(Status::Disconnected, MSG_FORCIBLY_CLOSED)
        }
        TransportEvent::ServerFailure { detail } => StatusUpdate {
            status: Status::Error,
            message: Cow::Owned(format!("{PREFIX_SERVER_FAILURE}{detail}")),
        },
        TransportEvent::ConnectionFailure { detail } => StatusUpdate {
            status: Status::Error,
            message: Cow::Owned(format!("{PREFIX_CONNECTION_FAILURE}{detail}")),
        },
    };
    Some(update)
}
