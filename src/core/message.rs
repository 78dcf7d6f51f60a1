use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranscriptRole {
    User,
    Assistant,
}

impl TranscriptRole {
    /// Label shown next to the message in the transcript and the log file.
    pub fn display_name(self) -> &'static str {
        match self {
            TranscriptRole::User => "You",
            TranscriptRole::Assistant => "Gemini",
        }
    }

    pub fn is_user(self) -> bool {
        self == TranscriptRole::User
    }
}

/// One entry of the conversation. Messages are never edited after they are
/// appended, so the fields are only readable through accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    role: TranscriptRole,
    content: String,
    timestamp: DateTime<Local>,
    error: bool,
}

impl Message {
    pub fn new(role: TranscriptRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Local::now(),
            error: false,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(TranscriptRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(TranscriptRole::Assistant, content)
    }

    /// Assistant-role message flagged as a failed reply.
    pub fn assistant_error(content: impl Into<String>) -> Self {
        Self {
            error: true,
            ..Self::assistant(content)
        }
    }

    pub fn role(&self) -> TranscriptRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    pub fn is_user(&self) -> bool {
        self.role.is_user()
    }

    /// 12-hour clock time, e.g. `09:05 PM`.
    pub fn formatted_time(&self) -> String {
        format_time(&self.timestamp)
    }
}

pub fn format_time(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn constructors_set_role_and_error_flag() {
        assert!(Message::user("hi").is_user());
        assert!(!Message::user("hi").is_error());
        assert_eq!(Message::assistant("hello").role(), TranscriptRole::Assistant);
        assert!(!Message::assistant("hello").is_error());

        let failed = Message::assistant_error("oops");
        assert_eq!(failed.role(), TranscriptRole::Assistant);
        assert!(failed.is_error());
        assert_eq!(failed.content(), "oops");
    }

    #[test]
    fn time_uses_two_digit_twelve_hour_clock() {
        let morning = Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 0).unwrap();
        let evening = Local.with_ymd_and_hms(2024, 3, 1, 21, 45, 0).unwrap();
        assert_eq!(format_time(&morning), "09:05 AM");
        assert_eq!(format_time(&evening), "09:45 PM");
    }
}
