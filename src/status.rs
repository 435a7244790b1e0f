//! The normalized connection status vocabulary shared by the transport layer
//! and observers.
//!
//! 传输层与观察者之间共享的规范化连接状态词汇表。

use crate::error::Error;
use std::fmt;

/// A normalized connection state.
///
/// Any status may follow any other; transitions are driven by the transport
/// and are not validated.
///
/// 规范化的连接状态。任何状态都可以跟随任何其他状态；转换由传输驱动，不做校验。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Disconnected,
    Connecting,
    Connected,
    Streaming,
    Polling,
    Stalled,
    Error,
}

impl Status {
    /// Every status, in code order.
    /// 按代码顺序排列的所有状态。
    pub const ALL: [Status; 7] = [
        Status::Disconnected,
        Status::Connecting,
        Status::Connected,
        Status::Streaming,
        Status::Polling,
        Status::Stalled,
        Status::Error,
    ];

    /// The stable numeric code of this status, as used by legacy handlers.
    ///
    /// 此状态的稳定数字代码，供旧版处理程序使用。
    pub const fn code(self) -> u8 {
        match self {
            Status::Disconnected => 0,
            Status::Connecting => 1,
            Status::Connected => 2,
            Status::Streaming => 3,
            Status::Polling => 4,
            Status::Stalled => 5,
            Status::Error => 6,
        }
    }

    /// A lowercase name for logs and display.
    /// 用于日志和显示的小写名称。
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Disconnected => "disconnected",
            Status::Connecting => "connecting",
            Status::Connected => "connected",
            Status::Streaming => "streaming",
            Status::Polling => "polling",
            Status::Stalled => "stalled",
            Status::Error => "error",
        }
    }
}

impl TryFrom<u8> for Status {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Error> {
        Status::ALL
            .get(code as usize)
            .copied()
            .ok_or(Error::UnknownStatusCode(code))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
