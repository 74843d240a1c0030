//! Request log writer
//!
//! Appends one line per request to the configured log file, creating it if
//! absent. Writes run on a dedicated drain task fed by a channel so the
//! request pipeline never waits on file I/O; append failures are reported to
//! stderr and otherwise swallowed.

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;

use super::format::RequestLogEntry;

/// Handle to the request log drain task.
///
/// `record` never blocks and never errors; entries are echoed to stdout and
/// appended to the log file in arrival order by the single drain task.
#[derive(Clone)]
pub struct RequestLog {
    tx: mpsc::UnboundedSender<RequestLogEntry>,
}

impl RequestLog {
    /// Spawn the drain task writing to `log_file` and return its handle.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(log_file: String) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<RequestLogEntry>();

        tokio::spawn(async move {
            while let Some(entry) = rx.recv().await {
                let line = entry.format();
                println!("{line}");
                if let Err(e) = append_line(&log_file, &line).await {
                    eprintln!("Unable to append to {log_file}: {e}");
                }
            }
        });

        Self { tx }
    }

    /// Queue an entry for the drain task. Fire-and-forget.
    pub fn record(&self, entry: RequestLogEntry) {
        // Send only fails once the drain task is gone, at process teardown
        let _ = self.tx.send(entry);
    }
}

/// Append `line` plus a newline to `path`, creating the file if absent
async fn append_line(path: &str, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    file.write_all(b"\n").await?;
    file.flush().await?;
    Ok(())
}
