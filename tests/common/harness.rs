//! tests/common/harness.rs
use push_status::{ObserverError, Status, StatusObserver};
use std::sync::{Arc, Mutex, Once};
use tracing_subscriber::fmt::format::FmtSpan;

/// Initializes tracing for tests, ensuring it's only done once.
pub fn init_tracing() {
    static TRACING_INIT: Once = Once::new();
    TRACING_INIT.call_once(|| {
        let filter = std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "push_status=trace".to_string());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::FULL)
            .with_test_writer()
            .init();
    });
}

/// One `(observer, status, message)` triple, in delivery order.
pub type Received = (usize, Status, String);

/// A set of observers writing into one shared log, so tests can assert on
/// the global delivery order.
#[derive(Clone, Default)]
pub struct ObserverHarness {
    log: Arc<Mutex<Vec<Received>>>,
}

impl ObserverHarness {
    pub fn new() -> Self {
        init_tracing();
        Self::default()
    }

    /// Creates an observer that tags its deliveries with `id`.
    pub fn observer(&self, id: usize) -> Arc<dyn StatusObserver> {
        let log = self.log.clone();
        Arc::new(move |status: Status, message: &str| -> Result<(), ObserverError> {
            log.lock().unwrap().push((id, status, message.to_string()));
            Ok(())
        })
    }

    /// Drains everything received so far.
    pub fn drain(&self) -> Vec<Received> {
        std::mem::take(&mut *self.log.lock().unwrap())
    }
}

pub fn received(id: usize, status: Status, message: &str) -> Received {
    (id, status, message.to_string())
}
