//! Register change notifications.
//!
//! Mutations append an event; presentation (toasts, audit lines) is left to
//! whoever drains the buffer.

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterEvent {
    Added {
        id: Uuid,
        title: String,
    },
    Updated {
        id: Uuid,
        title: String,
        version: u64,
        reassessed: bool,
    },
    CommentAdded {
        id: Uuid,
        comment_id: Uuid,
        version: u64,
    },
    Deleted {
        id: Uuid,
        title: String,
    },
    PolicyReplaced {
        reassessed: usize,
    },
}

impl RegisterEvent {
    /// One-line human message for this event.
    pub fn message(&self) -> String {
        match self {
            Self::Added { title, .. } => format!("{title} has been added to the risk register"),
            Self::Updated { title, .. } => format!("{title} has been updated"),
            Self::CommentAdded { .. } => "Comment added".to_string(),
            Self::Deleted { title, .. } => format!("{title} has been removed"),
            Self::PolicyReplaced { reassessed } => {
                format!("Quantification policy replaced; {reassessed} risks reassessed")
            }
        }
    }

    /// Whether the event reports a destructive change.
    pub fn is_destructive(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }
}
