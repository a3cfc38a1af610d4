//! In-memory `Navigator`
//!
//! Keeps the current location, the remembered prior destination and a log of
//! every navigation instruction. Used by the command-line driver and tests.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::port::Navigator;
use crate::domain::value_object::navigation_target::PriorDestination;

/// A navigation instruction the navigator received
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationEvent {
    Home,
    Destination(PriorDestination),
    External(String),
}

#[derive(Debug)]
struct NavigatorState {
    location: String,
    previous: Option<PriorDestination>,
    location_error: Option<String>,
    history: Vec<NavigationEvent>,
}

#[derive(Debug)]
pub struct MemoryNavigator {
    home_path: String,
    state: Mutex<NavigatorState>,
}

impl MemoryNavigator {
    /// Start at the login page with no remembered destination
    pub fn new(home_path: impl Into<String>) -> Self {
        Self {
            home_path: home_path.into(),
            state: Mutex::new(NavigatorState {
                location: "/authentication/signin".to_string(),
                previous: None,
                location_error: None,
                history: Vec::new(),
            }),
        }
    }

    /// Error carried by the current location's query string
    pub fn with_location_error(self, error: impl Into<String>) -> Self {
        self.lock().location_error = Some(error.into());
        self
    }

    /// Record where the user was headed before being sent to sign in
    pub fn remember_destination(&self, destination: PriorDestination) {
        tracing::debug!(destination = %destination, "Remembering prior destination");
        self.lock().previous = Some(destination);
    }

    pub fn location(&self) -> String {
        self.lock().location.clone()
    }

    pub fn history(&self) -> Vec<NavigationEvent> {
        self.lock().history.clone()
    }

    fn lock(&self) -> MutexGuard<'_, NavigatorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for MemoryNavigator {
    fn go_home(&self) {
        let mut state = self.lock();
        state.location = self.home_path.clone();
        state.history.push(NavigationEvent::Home);
    }

    fn go_to(&self, destination: &PriorDestination) {
        let mut state = self.lock();
        state.location = destination.path();
        state
            .history
            .push(NavigationEvent::Destination(destination.clone()));
    }

    fn go_external(&self, url: &str) {
        let mut state = self.lock();
        state.location = url.to_string();
        state.history.push(NavigationEvent::External(url.to_string()));
    }

    fn previous_destination(&self) -> Option<PriorDestination> {
        self.lock().previous.clone()
    }

    fn take_previous_destination(&self) -> Option<PriorDestination> {
        self.lock().previous.take()
    }

    fn location_error(&self) -> Option<String> {
        self.lock().location_error.clone()
    }
}
