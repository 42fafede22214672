use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TranscriptRole {
    User,
    Bot,
    Translated,
    AppInfo,
    AppError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: TranscriptRole,
    pub content: String,
}

impl TranscriptRole {
    pub fn as_str(self) -> &'static str {
        match self {
            TranscriptRole::User => "user",
            TranscriptRole::Bot => "bot",
            TranscriptRole::Translated => "translated",
            TranscriptRole::AppInfo => "app/info",
            TranscriptRole::AppError => "app/error",
        }
    }

    /// Notices from the program itself rather than the conversation.
    pub fn is_app(self) -> bool {
        matches!(self, TranscriptRole::AppInfo | TranscriptRole::AppError)
    }
}

impl TryFrom<&str> for TranscriptRole {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "user" => Ok(TranscriptRole::User),
            "bot" => Ok(TranscriptRole::Bot),
            "translated" => Ok(TranscriptRole::Translated),
            "app/info" => Ok(TranscriptRole::AppInfo),
            "app/error" => Ok(TranscriptRole::AppError),
            _ => Err(format!("invalid transcript role: {value}")),
        }
    }
}

impl TryFrom<String> for TranscriptRole {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<TranscriptRole> for String {
    fn from(value: TranscriptRole) -> Self {
        value.as_str().to_string()
    }
}

impl Message {
    pub fn new(role: TranscriptRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(TranscriptRole::User, content)
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self::new(TranscriptRole::Bot, content)
    }

    pub fn translated(content: impl Into<String>) -> Self {
        Self::new(TranscriptRole::Translated, content)
    }

    pub fn app_info(content: impl Into<String>) -> Self {
        Self::new(TranscriptRole::AppInfo, content)
    }

    pub fn app_error(content: impl Into<String>) -> Self {
        Self::new(TranscriptRole::AppError, content)
    }
}

/// Where rendered conversation entries go.
///
/// Flows finish in any order, so the sink is a channel: every producer holds
/// a clone of the sender and the front-end drains the receiver in arrival
/// order. Sending never fails from the caller's point of view; once the
/// receiver is gone, entries are dropped.
#[derive(Clone, Debug)]
pub struct MessageSink {
    tx: mpsc::UnboundedSender<Message>,
}

impl MessageSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Message>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn render(&self, message: Message) {
        let _ = self.tx.send(message);
    }
}

/// Append-only record of everything the front-end has shown.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Message>,
}

impl Transcript {
    pub fn push(&mut self, message: Message) {
        self.entries.push(message);
    }

    pub fn entries(&self) -> &[Message] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_round_trip_through_strings() {
        for role in [
            TranscriptRole::User,
            TranscriptRole::Bot,
            TranscriptRole::Translated,
            TranscriptRole::AppInfo,
            TranscriptRole::AppError,
        ] {
            assert_eq!(TranscriptRole::try_from(role.as_str()), Ok(role));
        }
    }

    #[test]
    fn invalid_role_strings_are_rejected() {
        assert!(TranscriptRole::try_from("assistant").is_err());
        assert!(TranscriptRole::try_from("app/warning").is_err());
    }

    #[test]
    fn app_roles_are_flagged() {
        assert!(TranscriptRole::AppInfo.is_app());
        assert!(TranscriptRole::AppError.is_app());
        assert!(!TranscriptRole::Translated.is_app());
        assert!(!TranscriptRole::User.is_app());
    }

    #[test]
    fn sink_preserves_order_and_ignores_closed_receiver() {
        let (sink, mut rx) = MessageSink::new();
        sink.render(Message::user("ola"));
        sink.render(Message::bot("Olá!"));

        assert_eq!(rx.try_recv().unwrap(), Message::user("ola"));
        assert_eq!(rx.try_recv().unwrap(), Message::bot("Olá!"));

        drop(rx);
        sink.render(Message::bot("nobody listening"));
    }

    #[test]
    fn messages_serialize_with_string_roles() {
        let json = serde_json::to_string(&Message::translated("Hello")).unwrap();
        assert_eq!(json, r#"{"role":"translated","content":"Hello"}"#);
    }
}
