// src/progress.rs
/// Lightweight progress reporting for multi-page runs.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages to read.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page was read and extracted into `rows` records.
    fn item_done(&mut self, _label: &str, _rows: usize) {}

    /// One page could not be read.
    fn item_failed(&mut self, _label: &str, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
