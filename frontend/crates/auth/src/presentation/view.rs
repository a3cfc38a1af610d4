//! Controller view snapshot

use serde::Serialize;

use crate::application::controller::ControllerState;
use crate::domain::entity::session::Session;

/// What a login page renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthView {
    pub state: ControllerState,
    pub error: Option<String>,
    pub user: Option<Session>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_view() {
        let view = AuthView {
            state: ControllerState::Anonymous,
            error: Some("Missing credentials".to_string()),
            user: None,
        };

        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({ "state": "anonymous", "error": "Missing credentials", "user": null })
        );
    }
}
