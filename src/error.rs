//! 定义了库中所有可能的错误类型。
//! Defines all possible error types in the library.

use thiserror::Error;

/// The error an observer returns from `on_status_change`.
///
/// 观察者在 `on_status_change` 中返回的错误。
pub type ObserverError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The primary error type for the status fan-out library.
/// 状态广播库的主要错误类型。
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was missing. Raised when a registry is built
    /// without an initial observer.
    ///
    /// 缺少必需的参数。在没有初始观察者的情况下构建注册表时引发。
    #[error("invalid argument: {0} is required")]
    InvalidArgument(&'static str),

    /// An observer failed while receiving a notification. Observers after
    /// `index` in the registry were not notified.
    ///
    /// 观察者在接收通知时失败。注册表中位于 `index` 之后的观察者未被通知。
    #[error("observer #{index} failed: {source}")]
    Observer {
        index: usize,
        #[source]
        source: ObserverError,
    },

    /// A request to the relay actor was not answered in time.
    /// 对中继 actor 的请求未能及时得到响应。
    #[error("relay request timed out")]
    Timeout,

    /// An internal channel for communication between tasks was closed unexpectedly.
    /// 用于任务间通信的内部通道意外关闭。
    #[error("Internal channel is broken")]
    ChannelClosed,

    /// A numeric status code outside the known range.
    /// 超出已知范围的数字状态码。
    #[error("unknown status code: {0}")]
    UnknownStatusCode(u8),
}

/// A specialized `Result` type for this library.
/// 本库专用的 `Result` 类型。
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        use std::io::ErrorKind;
        match err {
            Error::InvalidArgument(_) => ErrorKind::InvalidInput.into(),
            Error::Observer { source, .. } => std::io::Error::other(source),
            Error::Timeout => ErrorKind::TimedOut.into(),
            Error::ChannelClosed => ErrorKind::BrokenPipe.into(),
            Error::UnknownStatusCode(code) => std::io::Error::new(
                ErrorKind::InvalidData,
                format!("unknown status code: {code}"),
            ),
        }
    }
}
