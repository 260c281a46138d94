//! Messages raised by the rendered sidebar.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw message as posted by the webview: `{ "type": ..., "value"?: ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Message type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Optional payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl InboundMessage {
    /// Creates a message with a text value.
    #[must_use]
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: Some(Value::String(value.into())),
        }
    }

    /// Creates a message without a value.
    #[must_use]
    pub fn bare(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: None,
        }
    }
}

/// Sidebar event decoded from an `InboundMessage`.
///
/// Values are `Some` only when the message carried a non-empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEvent {
    /// `onInfo`: show an informational notification.
    Info(Option<String>),
    /// `onError`: show an error notification.
    Error(Option<String>),
    /// `openApiManagement`: open the panel named by the value.
    OpenPanel(Option<String>),
    /// `backButton`: return to the button menu.
    Back,
    /// `newRequest`: open the request detail view.
    NewRequest,
    /// Any other message type.
    Unknown(String),
}

impl From<InboundMessage> for SidebarEvent {
    fn from(message: InboundMessage) -> Self {
        let value = message.value.and_then(|value| match value {
            Value::String(text) if !text.is_empty() => Some(text),
            _ => None,
        });

        match message.kind.as_str() {
            "onInfo" => Self::Info(value),
            "onError" => Self::Error(value),
            "openApiManagement" => Self::OpenPanel(value),
            "backButton" => Self::Back,
            "newRequest" => Self::NewRequest,
            _ => Self::Unknown(message.kind),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn decode(json: &str) -> SidebarEvent {
        let message: InboundMessage = serde_json::from_str(json).expect("valid message");
        SidebarEvent::from(message)
    }

    #[test]
    fn test_decodes_known_types() {
        assert_eq!(
            decode(r#"{"type":"onInfo","value":"saved"}"#),
            SidebarEvent::Info(Some("saved".to_string()))
        );
        assert_eq!(
            decode(r#"{"type":"openApiManagement","value":"chatRepo"}"#),
            SidebarEvent::OpenPanel(Some("chatRepo".to_string()))
        );
        assert_eq!(decode(r#"{"type":"backButton"}"#), SidebarEvent::Back);
        assert_eq!(decode(r#"{"type":"newRequest"}"#), SidebarEvent::NewRequest);
    }

    #[test]
    fn test_empty_or_non_text_values_are_absent() {
        assert_eq!(
            decode(r#"{"type":"onError","value":""}"#),
            SidebarEvent::Error(None)
        );
        assert_eq!(
            decode(r#"{"type":"onError","value":null}"#),
            SidebarEvent::Error(None)
        );
        assert_eq!(
            decode(r#"{"type":"openApiManagement","value":42}"#),
            SidebarEvent::OpenPanel(None)
        );
        assert_eq!(decode(r#"{"type":"onInfo"}"#), SidebarEvent::Info(None));
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(
            decode(r#"{"type":"refreshAll","value":"x"}"#),
            SidebarEvent::Unknown("refreshAll".to_string())
        );
    }
}
