//! 定义了状态中继的可配置参数。
//! Defines configurable parameters for the status relay.

use std::time::Duration;

/// Parameters for a `StatusRelay` actor.
///
/// `StatusRelay` actor 的参数。
#[derive(Debug, Clone)]
pub struct Config {
    /// Capacity of the command channel between handles and the relay actor.
    /// 句柄与中继 actor 之间命令通道的容量。
    pub command_channel_capacity: usize,
    /// How long a handle waits for the actor to accept and answer a request
    /// before failing with `Error::Timeout`. This covers the time observers
    /// spend handling a dispatched event.
    ///
    /// 句柄等待 actor 接受并应答请求的最长时间，超时则以 `Error::Timeout` 失败。
    /// 这包括观察者处理所派发事件所花费的时间。
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command_channel_capacity: 128,
            request_timeout: Duration::from_secs(15),
        }
    }
}
