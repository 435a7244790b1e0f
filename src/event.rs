//! Lifecycle events raised by the push transport.
//! 推送传输引发的生命周期事件。

use std::fmt;

/// The delivery mode of a push session.
///
/// The transport reports this when a session starts. It is remembered so the
/// right status can be restored once an activity warning clears.
///
/// 推送会话的传递模式。会话开始时由传输报告，并被记录下来，
/// 以便在活动警告解除后恢复正确的状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionMode {
    #[default]
    Streaming,
    Polling,
}

impl SessionMode {
    /// Maps the transport's polling flag onto a mode.
    /// 将传输的轮询标志映射为模式。
    pub const fn from_polling(is_polling: bool) -> Self {
        if is_polling {
            SessionMode::Polling
        } else {
            SessionMode::Streaming
        }
    }

    /// The polling flag this mode corresponds to.
    /// 此模式对应的轮询标志。
    pub const fn is_polling(self) -> bool {
        matches!(self, SessionMode::Polling)
    }
}

/// Diagnostic information attached to a transport failure.
///
/// Only its textual description reaches observers.
///
/// 附加在传输故障上的诊断信息。只有其文本描述会传递给观察者。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    description: String,
}

impl TransportFailure {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Captures the `Display` text of any transport error.
    /// 捕获任意传输错误的 `Display` 文本。
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Self::new(err.to_string())
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// One connection lifecycle callback from the transport client.
///
/// 来自传输客户端的一个连接生命周期回调。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// The transport reached the server.
    /// 传输已连接到服务器。
    ConnectionEstablished,
    /// A push session started in the given mode.
    /// 推送会话以给定模式启动。
    SessionStarted { mode: SessionMode },
    /// Throughput report. Never produces a notification.
    /// 吞吐量报告。从不产生通知。
    NewBytes { bytes: u64 },
    /// The server sent data the client could not process.
    /// 服务器发送了客户端无法处理的数据。
    DataError { detail: TransportFailure },
    /// Inbound activity stopped (`active = true`) or resumed (`active = false`).
    /// 入站活动停止（`active = true`）或恢复（`active = false`）。
    ActivityWarning { active: bool },
    /// The connection closed gracefully.
    /// 连接正常关闭。
    Closed,
    /// The server ended the connection. `cause` is kept for completeness and
    /// is not forwarded to observers.
    ///
    /// 服务器终止了连接。保留 `cause` 以求完整，但不转发给观察者。
    Ended { cause: i32 },
    /// The server refused or failed the session.
    /// 服务器拒绝会话或会话失败。
    ServerFailure { detail: TransportFailure },
    /// The network connection to the server failed.
    /// 与服务器的网络连接失败。
    ConnectionFailure { detail: TransportFailure },
}

impl TransportEvent {
    /// A short static name for log fields.
    /// 用于日志字段的简短静态名称。
    pub const fn kind(&self) -> &'static str {
        match self {
            TransportEvent::ConnectionEstablished => "connection_established",
            TransportEvent::SessionStarted { .. } => "session_started",
            TransportEvent::NewBytes { .. } => "new_bytes",
            TransportEvent::DataError { .. } => "data_error",
            TransportEvent::ActivityWarning { .. } => "activity_warning",
            TransportEvent::Closed => "closed",
            TransportEvent::Ended { .. } => "ended",
            TransportEvent::ServerFailure { .. } => "server_failure",
            TransportEvent::ConnectionFailure { .. } => "connection_failure",
        }
    }
}
