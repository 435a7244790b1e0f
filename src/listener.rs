//! The callback surface a push transport drives.
//!
//! Transport clients that report lifecycle changes through one method per
//! event can call a `ConnectionListener` directly; every method folds into a
//! single `TransportEvent`.
//!
//! 推送传输所驱动的回调接口。每个方法都会归并为一个 `TransportEvent`。

use crate::{
    broadcaster::StatusBroadcaster,
    error::Result,
    event::{SessionMode, TransportEvent, TransportFailure},
};

/// Connection lifecycle callbacks, one per transport event.
///
/// Only `on_event` is required; the per-event methods build the matching
/// `TransportEvent` and forward it.
///
/// 连接生命周期回调，每个传输事件对应一个方法。只需实现 `on_event`。
pub trait ConnectionListener: Send + Sync {
    fn on_event(&self, event: TransportEvent) -> Result<()>;

    fn on_connection_established(&self) -> Result<()> {
        self.on_event(TransportEvent::ConnectionEstablished)
    }

    fn on_session_started(&self, is_polling: bool) -> Result<()> {
        self.on_event(TransportEvent::SessionStarted {
            mode: SessionMode::from_polling(is_polling),
        })
    }

    fn on_new_bytes(&self, bytes: u64) -> Result<()> {
        self.on_event(TransportEvent::NewBytes { bytes })
    }

    fn on_data_error(&self, detail: TransportFailure) -> Result<()> {
        self.on_event(TransportEvent::DataError { detail })
    }

    fn on_activity_warning(&self, active: bool) -> Result<()> {
        self.on_event(TransportEvent::ActivityWarning { active })
    }

    fn on_close(&self) -> Result<()> {
        self.on_event(TransportEvent::Closed)
    }

    fn on_end(&self, cause: i32) -> Result<()> {
        self.on_event(TransportEvent::Ended { cause })
    }

    fn on_server_failure(&self, detail: TransportFailure) -> Result<()> {
        self.on_event(TransportEvent::ServerFailure { detail })
    }

    fn on_connection_failure(&self, detail: TransportFailure) -> Result<()> {
        self.on_event(TransportEvent::ConnectionFailure { detail })
    }
}

impl ConnectionListener for StatusBroadcaster {
    fn on_event(&self, event: TransportEvent) -> Result<()> {
        self.dispatch(&event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        normalize::{MSG_CONNECTED, MSG_POLLING, MSG_STREAMING},
        status::Status,
        testing::{RecordingObserver, delivery, new_log, take},
    };
    use std::sync::Mutex;

    /// Records the events it receives without normalizing them.
    #[derive(Default)]
    struct EventSink(Mutex<Vec<TransportEvent>>);

    impl ConnectionListener for EventSink {
        fn on_event(&self, event: TransportEvent) -> Result<()> {
            self.0.lock().unwrap().push(event);
            Ok(())
        }
    }

    #[test]
    fn test_callbacks_build_events() {
        let sink = EventSink::default();
        sink.on_session_started(true).unwrap();
        sink.on_session_started(false).unwrap();
        sink.on_end(4).unwrap();
        sink.on_new_bytes(99).unwrap();

        assert_eq!(
            *sink.0.lock().unwrap(),
            vec![
                TransportEvent::SessionStarted {
                    mode: SessionMode::Polling
                },
                TransportEvent::SessionStarted {
                    mode: SessionMode::Streaming
                },
                TransportEvent::Ended { cause: 4 },
                TransportEvent::NewBytes { bytes: 99 },
            ]
        );
    }

    #[test]
    fn test_broadcaster_as_listener() {
        let log = new_log();
        let broadcaster = StatusBroadcaster::new(RecordingObserver::new(1, &log));
        let listener: &dyn ConnectionListener = &broadcaster;

        listener.on_connection_established().unwrap();
        listener.on_session_started(true).unwrap();
        listener.on_activity_warning(true).unwrap();
        listener.on_activity_warning(false).unwrap();
        listener.on_new_bytes(1024).unwrap();
        listener.on_session_started(false).unwrap();
        listener
            .on_server_failure(TransportFailure::new(" (code 60)"))
            .unwrap();
        listener
            .on_connection_failure(TransportFailure::new("timed out"))
            .unwrap();
        listener.on_data_error(TransportFailure::new("bad")).unwrap();
        listener.on_end(41).unwrap();
        listener.on_close().unwrap();

        assert_eq!(
            take(&log),
            vec![
                delivery(1, Status::Connected, MSG_CONNECTED),
                delivery(1, Status::Polling, MSG_POLLING),
                delivery(1, Status::Stalled, "Connection stalled"),
                delivery(1, Status::Polling, MSG_POLLING),
                delivery(1, Status::Streaming, MSG_STREAMING),
                delivery(1, Status::Error, "Server failure (code 60)"),
                delivery(1, Status::Error, "Connection failure timed out"),
                delivery(1, Status::Error, "Data error"),
                delivery(1, Status::Disconnected, "Connection forcibly closed"),
                delivery(1, Status::Disconnected, "Connection closed"),
            ]
        );
    }
}
