use serde::Serialize;

/// Outcome of dispatching a single command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActionResult {
    Link { url: String, message: String },
    Effect { message: String },
    Error { message: String },
    Success { message: String },
}

impl ActionResult {
    pub fn link(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Link {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn effect(message: impl Into<String>) -> Self {
        Self::Effect {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Link { message, .. }
            | Self::Effect { message }
            | Self::Error { message }
            | Self::Success { message } => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_serializes_with_lowercase_type_tag() {
        let result = ActionResult::link("https://www.google.com", "🌐 Opening Google...");

        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "type": "link",
                "url": "https://www.google.com",
                "message": "🌐 Opening Google...",
            })
        );
    }

    #[test]
    fn error_serializes_without_url() {
        let json = serde_json::to_value(ActionResult::error("nope")).unwrap();

        assert_eq!(json, serde_json::json!({ "type": "error", "message": "nope" }));
    }

    #[test]
    fn message_is_available_for_every_variant() {
        assert_eq!(ActionResult::effect("a").message(), "a");
        assert_eq!(ActionResult::success("b").message(), "b");
        assert_eq!(ActionResult::link("u", "c").message(), "c");
        assert!(ActionResult::error("d").is_error());
        assert!(!ActionResult::success("d").is_error());
    }
}
