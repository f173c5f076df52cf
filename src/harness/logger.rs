//! Timestamped event logging.

use chrono::Local;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Timestamped line logger shared by the machine and the command loop.
///
/// Cloning is cheap and hands out another handle to the same sink, so all
/// components write to one stream in order. Write failures are discarded.
///
/// # Example
///
/// ```rust
/// use cabsim::EventLogger;
///
/// let quiet = EventLogger::with_writer(std::io::sink());
/// quiet.log("door_open observed");
/// ```
#[derive(Clone)]
pub struct EventLogger {
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl EventLogger {
    /// Logger writing to standard output.
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Logger writing to an arbitrary sink.
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            sink: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Emit one `[<timestamp>] <message>` line, local time at second
    /// precision.
    pub fn log(&self, message: &str) {
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Ok(mut sink) = self.sink.lock() {
            let _ = writeln!(sink, "[{stamp}] {message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[derive(Clone)]
    struct CaptureSink(Arc<Mutex<Vec<u8>>>);

    impl Write for CaptureSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured_logger() -> (EventLogger, Arc<Mutex<Vec<u8>>>) {
        let buf = Arc::new(Mutex::new(Vec::new()));
        (
            EventLogger::with_writer(CaptureSink(Arc::clone(&buf))),
            buf,
        )
    }

    fn lines(buf: &Arc<Mutex<Vec<u8>>>) -> Vec<String> {
        String::from_utf8(buf.lock().unwrap().clone())
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn log_emits_one_line_per_call() {
        let (logger, buf) = captured_logger();

        logger.log("first");
        logger.log("second");

        let lines = lines(&buf);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("] first"));
        assert!(lines[1].ends_with("] second"));
    }

    #[test]
    fn timestamp_has_second_precision_format() {
        let (logger, buf) = captured_logger();

        logger.log("stamped");

        let line = lines(&buf).remove(0);
        let close = line.find(']').unwrap();
        assert!(line.starts_with('['));

        let stamp = &line[1..close];
        assert!(NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S").is_ok());
        assert_eq!(&line[close..], "] stamped");
    }

    #[test]
    fn clones_share_one_sink() {
        let (logger, buf) = captured_logger();
        let other = logger.clone();

        logger.log("from original");
        other.log("from clone");

        let lines = lines(&buf);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("from original"));
        assert!(lines[1].ends_with("from clone"));
    }
}
