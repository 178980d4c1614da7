use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// The new-state image of a changed record: field name to string value.
///
/// The upstream stream delivers every attribute as a string; richer
/// attribute types are out of scope for the relay.
pub type NewImage = HashMap<String, String>;

/// Classification of a change notification.
///
/// Carried for logging and diagnostics. The pipeline processes every
/// notification's new-state image regardless of kind — deletion events are
/// not handled specially.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A new record was inserted upstream.
    Insert,
    /// An existing record was modified upstream.
    Modify,
    /// A record was removed upstream.
    Remove,
}

impl EventKind {
    /// Parse the upstream event-name string (`"INSERT"`, `"MODIFY"`,
    /// `"REMOVE"`).
    pub fn parse(name: &str) -> Result<Self, FieldError> {
        match name {
            "INSERT" => Ok(Self::Insert),
            "MODIFY" => Ok(Self::Modify),
            "REMOVE" => Ok(Self::Remove),
            other => Err(FieldError::UnknownEventKind(other.to_string())),
        }
    }

    /// The upstream event-name string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insert => "INSERT",
            Self::Modify => "MODIFY",
            Self::Remove => "REMOVE",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry in an upstream change-event batch.
///
/// Constructed by the external event source, consumed once per ingestion
/// call, never persisted by the relay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeNotification {
    /// Upstream identifier of the stream record.
    pub id: String,
    /// Insert/modify/remove classification.
    pub kind: EventKind,
    /// The new state of the changed record.
    pub new_image: NewImage,
}

impl ChangeNotification {
    /// Build a notification from its parts.
    pub fn new(id: impl Into<String>, kind: EventKind, new_image: NewImage) -> Self {
        Self {
            id: id.into(),
            kind,
            new_image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_parses_upstream_names() {
        assert_eq!(EventKind::parse("INSERT").unwrap(), EventKind::Insert);
        assert_eq!(EventKind::parse("MODIFY").unwrap(), EventKind::Modify);
        assert_eq!(EventKind::parse("REMOVE").unwrap(), EventKind::Remove);
    }

    #[test]
    fn event_kind_rejects_unknown_names() {
        let err = EventKind::parse("UPSERT").unwrap_err();
        assert_eq!(err, FieldError::UnknownEventKind("UPSERT".to_string()));
    }

    #[test]
    fn event_kind_display_matches_upstream_form() {
        assert_eq!(format!("{}", EventKind::Insert), "INSERT");
        assert_eq!(format!("{}", EventKind::Remove), "REMOVE");
    }

    #[test]
    fn notification_serde_roundtrip() {
        let mut image = NewImage::new();
        image.insert("filename".to_string(), "report.xml".to_string());
        let notification = ChangeNotification::new("evt-1", EventKind::Insert, image);

        let json = serde_json::to_string(&notification).unwrap();
        let decoded: ChangeNotification = serde_json::from_str(&json).unwrap();
        assert_eq!(notification, decoded);
    }
}
