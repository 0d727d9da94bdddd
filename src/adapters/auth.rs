use crate::domain::model::EventId;
use crate::domain::ports::AuthContext;

/// Auth facts extracted from one admin request: the action the request's
/// anti-forgery token was issued for (if it carried a valid one) and the
/// events the actor may edit.
#[derive(Debug, Clone, Default)]
pub struct RequestAuth {
    nonce_action: Option<String>,
    editable: Vec<EventId>,
}

impl RequestAuth {
    /// A request with a valid token for `action` and edit rights on `event`.
    pub fn editor_of(event: EventId, action: &str) -> Self {
        Self {
            nonce_action: Some(action.to_string()),
            editable: vec![event],
        }
    }

    /// A request whose token is missing or failed verification.
    pub fn without_nonce(event: EventId) -> Self {
        Self {
            nonce_action: None,
            editable: vec![event],
        }
    }

    /// A request with a valid token but no edit rights.
    pub fn read_only(action: &str) -> Self {
        Self {
            nonce_action: Some(action.to_string()),
            editable: Vec::new(),
        }
    }
}

impl AuthContext for RequestAuth {
    fn verify_nonce(&self, action: &str) -> bool {
        self.nonce_action.as_deref() == Some(action)
    }

    fn can_edit_event(&self, event: EventId) -> bool {
        self.editable.contains(&event)
    }
}
