// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    failed: usize,
    rows: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, failed: 0, rows: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, _label: &str, rows: usize) {
        self.done += 1;
        self.rows += rows;
        self.set_status(format!("Read page {}/{}", self.done + self.failed, self.total));
    }
    fn item_failed(&mut self, label: &str, err: &str) {
        self.failed += 1;
        self.set_status(format!("Failed to read {}: {}", label, err));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("No pages loaded"));
        } else if self.failed > 0 {
            self.set_status(format!(
                "{} row(s) from {}/{} page(s), {} failed",
                self.rows, self.done, self.total, self.failed
            ));
        } else {
            self.set_status(format!("{} row(s) from {} page(s)", self.rows, self.done));
        }
    }
}
