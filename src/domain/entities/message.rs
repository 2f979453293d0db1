use std::fmt;

/// Text passed from one colleague to another through the mediator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_keeps_text_verbatim() {
        let msg = Message::new("  How are you?  ");
        assert_eq!(msg.text(), "  How are you?  ");
        assert_eq!(msg.to_string(), "  How are you?  ");
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Message::from("hi"), Message::new("hi"));
        assert_eq!(Message::from(String::from("hi")).text(), "hi");
    }
}
