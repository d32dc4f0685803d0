//! History strategy and navigation over a [`RouteTable`].
//!
//! In the browser the dioxus router drives the real history API. The types
//! here model the same navigation rules so they can run anywhere.

use crate::routes::{same_location, Route, RouteTable};

pub trait History {
    fn current(&self) -> &str;
    fn push(&mut self, path: &str);
    fn replace(&mut self, path: &str);
    /// Returns `false` when already at the oldest entry.
    fn go_back(&mut self) -> bool;
    /// Returns `false` when already at the newest entry.
    fn go_forward(&mut self) -> bool;
}

/// History kept in memory. Pushing discards forward entries.
#[derive(Clone, Debug)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        MemoryHistory {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    /// Every entry, oldest first. Never empty.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn current(&self) -> &str {
        &self.entries[self.index]
    }

    fn push(&mut self, path: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(path.to_string());
        self.index += 1;
    }

    fn replace(&mut self, path: &str) {
        self.entries[self.index] = path.to_string();
    }

    fn go_back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    fn go_forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No route named {0:?}")]
    UnknownRoute(String),
}

pub struct Navigator<H> {
    routes: RouteTable,
    history: H,
}

impl<H: History> Navigator<H> {
    pub fn new(routes: RouteTable, history: H) -> Self {
        Navigator { routes, history }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn current_location(&self) -> &str {
        self.history.current()
    }

    pub fn current_route(&self) -> Option<&Route> {
        self.routes.resolve(self.history.current())
    }

    /// Navigates to `path`. Navigating to the current location, under route
    /// matching rules, is a no-op and leaves history untouched.
    pub fn push(&mut self, path: &str) -> Option<&Route> {
        if !same_location(self.history.current(), path) {
            log::debug!("Navigating from {} to {}", self.history.current(), path);
            self.history.push(path);
        }
        let route = self.routes.resolve(self.history.current());
        if route.is_none() {
            log::warn!("No route matches {}", self.history.current());
        }
        route
    }

    pub fn push_named(&mut self, name: &str) -> Result<&Route, NavigationError> {
        let path = self
            .routes
            .href(name)
            .ok_or_else(|| NavigationError::UnknownRoute(name.to_string()))?;
        self.push(path)
            .ok_or_else(|| NavigationError::UnknownRoute(name.to_string()))
    }

    pub fn back(&mut self) -> Option<&Route> {
        self.history.go_back();
        self.current_route()
    }

    pub fn forward(&mut self) -> Option<&Route> {
        self.history.go_forward();
        self.current_route()
    }
}
