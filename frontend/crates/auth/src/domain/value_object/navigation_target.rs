//! Navigation Target Value Object
//!
//! Where the user goes after a successful authentication.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Destination remembered by the navigator before an auth-gated redirect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("{name}")]
pub struct PriorDestination {
    /// Route name (e.g. `articles.create`)
    pub name: String,
    /// Route parameters
    #[serde(default)]
    pub params: Map<String, Value>,
    /// Resolved path, when the router knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl PriorDestination {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Map::new(),
            href: None,
        }
    }

    pub fn with_params(mut self, params: Map<String, Value>) -> Self {
        self.params = params;
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// `href` if known, otherwise a path derived from the dotted route name
    pub fn path(&self) -> String {
        match &self.href {
            Some(href) => href.clone(),
            None => format!("/{}", self.name.replace('.', "/")),
        }
    }
}

/// Post-authentication destination
#[derive(Debug, Clone, PartialEq, Display)]
pub enum NavigationTarget {
    #[display("{_0}")]
    Prior(PriorDestination),
    #[display("home")]
    Home,
}

impl NavigationTarget {
    pub fn is_home(&self) -> bool {
        matches!(self, NavigationTarget::Home)
    }
}

impl From<Option<PriorDestination>> for NavigationTarget {
    fn from(prior: Option<PriorDestination>) -> Self {
        prior.map_or(NavigationTarget::Home, NavigationTarget::Prior)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_option() {
        assert_eq!(NavigationTarget::from(None), NavigationTarget::Home);

        let target = NavigationTarget::from(Some(PriorDestination::new("articles.create")));
        assert!(!target.is_home());
        assert_eq!(target.to_string(), "articles.create");
    }

    #[test]
    fn test_path_prefers_href() {
        let destination = PriorDestination::new("articles.create");
        assert_eq!(destination.path(), "/articles/create");

        let destination = destination.with_href("/articles/new");
        assert_eq!(destination.path(), "/articles/new");
    }

    #[test]
    fn test_deserialize_without_params() {
        let destination: PriorDestination =
            serde_json::from_value(json!({ "name": "articles.view" })).unwrap();
        assert!(destination.params.is_empty());
        assert_eq!(destination.href, None);
    }
}
