//! Log output handed to charts explicitly instead of through a global logger.

use eyre::{Result, WrapErr};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

/// A `tracing` subscriber plus the file it writes to, if any.
///
/// Open one at startup, pass it to [`crate::BarChart::render_logged`], and
/// close it at shutdown. Dropping it also flushes.
pub struct LogSink {
    dispatch: Dispatch,
    file: Option<Arc<File>>,
}

impl LogSink {
    /// Appends to the log file at `path`, creating it if needed.
    /// `filter` uses `RUST_LOG` syntax, e.g. `"bar_chart=debug"`.
    pub fn open(path: impl AsRef<Path>, filter: &str) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;
        let file = Arc::new(file);

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_ansi(false)
            .with_writer(Arc::clone(&file))
            .finish();

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
            file: Some(file),
        })
    }

    pub fn stderr(filter: &str) -> Self {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(io::stderr)
            .finish();
        Self {
            dispatch: Dispatch::new(subscriber),
            file: None,
        }
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Runs `f` with this sink receiving its events.
    pub fn in_scope<R>(&self, f: impl FnOnce() -> R) -> R {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    pub fn flush(&self) -> io::Result<()> {
        match &self.file {
            Some(file) => {
                (&**file).flush()?;
                file.sync_data()
            }
            None => io::stderr().flush(),
        }
    }

    pub fn close(self) -> io::Result<()> {
        self.flush()
    }
}

impl Drop for LogSink {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
