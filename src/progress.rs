// src/progress.rs

/// Lightweight progress reporting for the pipeline stages.
/// Frontends (CLI/GUI) implement this to surface status to the operator.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Something went wrong but the stage carries on.
    fn warn(&mut self, _msg: &str) {}

    /// One readiness poll finished with `found` listing cards on the page.
    fn poll(&mut self, _attempt: usize, _found: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints straight to the terminal.
#[derive(Default)]
pub struct ConsoleProgress {
    total: Option<usize>,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = Some(total);
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn warn(&mut self, msg: &str) {
        eprintln!("WARNING: {msg}");
    }
    fn poll(&mut self, attempt: usize, found: usize) {
        println!("  poll #{attempt}: {found} listing(s) on page");
    }
    fn finish(&mut self) {
        if let Some(n) = self.total {
            println!("Done ({n} item(s)).");
        }
    }
}
