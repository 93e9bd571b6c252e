use tracing::info;

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Form,
    Success,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Form => "/",
            Self::Success => "/success",
        }
    }

    /// Unknown paths land on the form.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/success" | "success" => Self::Success,
            _ => Self::Form,
        }
    }
}

/// In-memory state carried with a navigation; gone after a restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub user_name: Option<String>,
}

impl NavigationState {
    pub fn with_user_name(name: &str) -> Self {
        let name = name.trim();
        Self {
            user_name: (!name.is_empty()).then(|| name.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub route: Route,
    pub state: NavigationState,
}

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
}

impl History {
    pub fn new(route: Route) -> Self {
        Self {
            entries: vec![Location {
                route,
                state: NavigationState::default(),
            }],
        }
    }

    pub fn current(&self) -> &Location {
        // Never empty: created with one entry and `back` keeps the last.
        &self.entries[self.entries.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, route: Route, state: NavigationState) {
        self.entries.push(Location { route, state });
    }

    pub fn replace(&mut self, route: Route, state: NavigationState) {
        if let Some(last) = self.entries.last_mut() {
            *last = Location { route, state };
        }
    }

    pub fn back(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    pub fn routes(&self) -> Vec<Route> {
        self.entries.iter().map(|location| location.route).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Stayed,
    Redirected,
}

/// History plus the re-entry guard that runs whenever the form is mounted.
#[derive(Debug, Clone)]
pub struct Navigator {
    history: History,
}

impl Navigator {
    pub fn start(session: &Session, path: &str) -> Self {
        let mut navigator = Self {
            history: History::new(Route::from_path(path)),
        };
        navigator.mount(session);
        navigator
    }

    pub fn current(&self) -> &Location {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn navigate(
        &mut self,
        session: &Session,
        route: Route,
        state: NavigationState,
    ) -> GuardOutcome {
        self.history.push(route, state);
        self.mount(session)
    }

    pub fn back(&mut self, session: &Session) -> GuardOutcome {
        if !self.history.back() {
            return GuardOutcome::Stayed;
        }
        self.mount(session)
    }

    fn mount(&mut self, session: &Session) -> GuardOutcome {
        if self.current().route != Route::Form || !session.is_submitted() {
            return GuardOutcome::Stayed;
        }

        info!("navigation: form already submitted, redirecting to confirmation");
        // Replace so that going back cannot reach the form again.
        self.history
            .replace(Route::Success, NavigationState::default());
        GuardOutcome::Redirected
    }
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
