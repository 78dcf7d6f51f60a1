use crate::core::constants::GREETING;
use crate::core::message::Message;

/// Append-only, insertion-ordered message list.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// A conversation holding only the assistant greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![Message::assistant(GREETING)],
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::TranscriptRole;

    #[test]
    fn starts_with_greeting() {
        let conversation = Conversation::new();
        assert_eq!(conversation.messages().len(), 1);
        let greeting = &conversation.messages()[0];
        assert_eq!(greeting.role(), TranscriptRole::Assistant);
        assert!(!greeting.is_error());
        assert_eq!(greeting.content(), GREETING);
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut conversation = Conversation::new();
        conversation.push(Message::user("first"));
        conversation.push(Message::assistant("second"));
        let contents: Vec<_> = conversation
            .messages()
            .iter()
            .map(|m| m.content())
            .collect();
        assert_eq!(contents, vec![GREETING, "first", "second"]);
    }
}
