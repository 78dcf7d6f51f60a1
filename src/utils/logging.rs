//! Transcript logging: a plain-text copy of the conversation on disk.

use crate::core::message::Message;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct LoggingState {
    file_path: Option<String>,
}

impl LoggingState {
    /// Start logging to `log_file` when given. The file is opened once up
    /// front so a bad path is reported before the UI starts.
    pub fn new(log_file: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(path) = log_file.as_deref() {
            Self::test_file_access(path)?;
        }
        Ok(LoggingState {
            file_path: log_file,
        })
    }

    /// Append one message as `[time] Label:` followed by its content and a blank line.
    pub fn log_message(&self, message: &Message) -> Result<(), Box<dyn std::error::Error>> {
        let Some(file_path) = self.file_path.as_deref() else {
            return Ok(());
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;
        let mut writer = BufWriter::new(file);

        let error_marker = if message.is_error() { " (error)" } else { "" };
        writeln!(
            writer,
            "[{}] {}{}:",
            message.formatted_time(),
            message.role().display_name(),
            error_marker
        )?;
        for line in message.content().lines() {
            writeln!(writer, "{line}")?;
        }
        writeln!(writer)?;

        writer.flush()?;
        Ok(())
    }

    pub fn get_status_string(&self) -> String {
        match &self.file_path {
            Some(path) => format!(
                "active ({})",
                Path::new(path)
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
            ),
            None => "disabled".to_string(),
        }
    }

    fn test_file_access(path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn disabled_logging_writes_nothing() {
        let logging = LoggingState::new(None).expect("logging");
        assert_eq!(logging.get_status_string(), "disabled");
        logging
            .log_message(&Message::user("Hello"))
            .expect("no-op log");
    }

    #[test]
    fn messages_are_appended_with_labels() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("chat.log");
        let logging =
            LoggingState::new(Some(path.to_string_lossy().into_owned())).expect("logging");
        assert_eq!(logging.get_status_string(), "active (chat.log)");

        let user = Message::user("Hello\nsecond line");
        let failed = Message::assistant_error("Sorry");
        logging.log_message(&user).expect("log user");
        logging.log_message(&failed).expect("log assistant");

        let contents = fs::read_to_string(&path).expect("read log");
        let expected = format!(
            "[{}] You:\nHello\nsecond line\n\n[{}] Gemini (error):\nSorry\n\n",
            user.formatted_time(),
            failed.formatted_time()
        );
        assert_eq!(contents, expected);
    }

    #[test]
    fn unwritable_path_is_rejected_up_front() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("missing-dir").join("chat.log");
        assert!(LoggingState::new(Some(path.to_string_lossy().into_owned())).is_err());
    }
}
