//! 测试辅助工具模块
//! Test utilities module

#![cfg(test)]

use crate::{error::ObserverError, observer::StatusObserver, status::Status};
use std::sync::{Arc, Mutex};

/// A single notification as seen by a `RecordingObserver`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub observer: usize,
    pub status: Status,
    pub message: String,
}

/// A shared, ordered log of deliveries across several observers.
pub type DeliveryLog = Arc<Mutex<Vec<Delivery>>>;

pub fn new_log() -> DeliveryLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn take(log: &DeliveryLog) -> Vec<Delivery> {
    std::mem::take(&mut *log.lock().unwrap())
}

/// An observer that appends every notification to a shared log, tagged with
/// its own id.
#[derive(Debug)]
pub struct RecordingObserver {
    id: usize,
    log: DeliveryLog,
}

impl RecordingObserver {
    pub fn new(id: usize, log: &DeliveryLog) -> Arc<Self> {
        Arc::new(Self {
            id,
            log: log.clone(),
        })
    }
}

impl StatusObserver for RecordingObserver {
    fn on_status_change(&self, status: Status, message: &str) -> Result<(), ObserverError> {
        self.log.lock().unwrap().push(Delivery {
            observer: self.id,
            status,
            message: message.to_owned(),
        });
        Ok(())
    }
}

/// An observer that always fails.
#[derive(Debug)]
pub struct FailingObserver;

impl StatusObserver for FailingObserver {
    fn on_status_change(&self, _status: Status, _message: &str) -> Result<(), ObserverError> {
        Err("observer refused notification".into())
    }
}

pub fn delivery(observer: usize, status: Status, message: &str) -> Delivery {
    Delivery {
        observer,
        status,
        message: message.to_owned(),
    }
}
