use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Opens the debug log in append mode. Later calls are ignored once a file is open.
pub fn init(path: &Path) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if logger.is_none()
        && let Ok(file) = OpenOptions::new().create(true).append(true).open(path)
    {
        *logger = Some(file);
    }
}

pub fn log(message: &str) {
    if let Ok(mut logger) = LOGGER.lock()
        && let Some(file) = logger.as_mut()
    {
        let _ = write_entry(file, message);
    }
}

fn write_entry<W: Write>(out: &mut W, message: &str) -> std::io::Result<()> {
    let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT);
    writeln!(out, "[{}] {}", timestamp, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Seek, SeekFrom};

    #[test]
    fn test_logger_init() {
        let dir = tempfile::tempdir().unwrap();
        init(&dir.path().join("quiz_debug.log"));
    }

    #[test]
    fn test_log_does_not_panic() {
        log("Test log message");
    }

    #[test]
    fn test_entry_format() {
        let mut file = tempfile::tempfile().unwrap();
        write_entry(&mut file, "Submitted: 1 / 2").unwrap();
        write_entry(&mut file, "Restarted").unwrap();

        file.seek(SeekFrom::Start(0)).unwrap();
        let mut contents = String::new();
        file.read_to_string(&mut contents).unwrap();

        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("] Submitted: 1 / 2"));
        assert!(lines[1].ends_with("] Restarted"));
    }
}
