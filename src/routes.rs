//! Client-side route table.
//!
//! The table is plain data: an ordered list of `(path, name, view)` records
//! validated once at startup. Both the browser app and the host server build
//! it through [`RouteTable::app`] and hand it around explicitly.

use std::collections::HashSet;

/// Page a route renders. The client maps each variant to a component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    GameForm,
    About,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

impl Route {
    pub const fn new(path: &'static str, name: &'static str, view: View) -> Self {
        Route { path, name, view }
    }
}

pub const APP_ROUTES: [Route; 2] = [
    Route::new("/", "Home", View::GameForm),
    Route::new("/about", "About", View::About),
];

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("Route path {0:?} is declared more than once")]
    DuplicatePath(&'static str),
    #[error("Route name {0:?} is declared more than once")]
    DuplicateName(&'static str),
    #[error("Route path {0:?} must start with '/' and contain no query or fragment")]
    InvalidPath(&'static str),
    #[error("Route for path {0:?} has an empty name")]
    EmptyName(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: impl IntoIterator<Item = Route>) -> Result<Self, RouteTableError> {
        let routes: Vec<Route> = routes.into_iter().collect();
        let mut paths = HashSet::new();
        let mut names = HashSet::new();
        for route in &routes {
            if !route.path.starts_with('/') || route.path.contains(['?', '#']) {
                return Err(RouteTableError::InvalidPath(route.path));
            }
            if route.name.is_empty() {
                return Err(RouteTableError::EmptyName(route.path));
            }
            if !paths.insert(route.path.to_ascii_lowercase()) {
                return Err(RouteTableError::DuplicatePath(route.path));
            }
            if !names.insert(route.name) {
                return Err(RouteTableError::DuplicateName(route.name));
            }
        }
        Ok(RouteTable { routes })
    }

    /// Table for the card generator app: the game form at `/`, about page at
    /// `/about`.
    pub fn app() -> Result<Self, RouteTableError> {
        Self::new(APP_ROUTES)
    }

    /// Exact, case-insensitive match on the path component of `location`.
    /// Query, fragment and a trailing slash on non-root paths are ignored.
    /// Undeclared paths resolve to `None`; there is no catch-all route.
    pub fn resolve(&self, location: &str) -> Option<&Route> {
        let (path, _) = split_location(location);
        self.routes
            .iter()
            .find(|route| route.path.eq_ignore_ascii_case(path))
    }

    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    pub fn href(&self, name: &str) -> Option<&'static str> {
        self.by_name(name).map(|route| route.path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Whether two locations name the same place: equal paths under route
/// matching rules, and identical query and fragment.
pub fn same_location(a: &str, b: &str) -> bool {
    let (a_path, a_rest) = split_location(a);
    let (b_path, b_rest) = split_location(b);
    a_path.eq_ignore_ascii_case(b_path) && a_rest == b_rest
}

/// Splits a location into its normalized path and the query/fragment suffix.
fn split_location(location: &str) -> (&str, &str) {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let (path, rest) = location.split_at(end);
    let path = match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    };
    (path, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::app().unwrap()
    }

    #[test]
    fn test_root_resolves_to_game_form() {
        let table = table();
        let route = table.resolve("/").unwrap();
        assert_eq!(route.name, "Home");
        assert_eq!(route.view, View::GameForm);
    }

    #[test]
    fn test_about_resolves_to_about() {
        let table = table();
        let route = table.resolve("/about").unwrap();
        assert_eq!(route.name, "About");
        assert_eq!(route.view, View::About);
    }

    #[test]
    fn test_app_routes_are_unique() {
        let names: HashSet<_> = APP_ROUTES.iter().map(|r| r.name).collect();
        let paths: HashSet<_> = APP_ROUTES.iter().map(|r| r.path).collect();
        assert_eq!(names.len(), APP_ROUTES.len());
        assert_eq!(paths.len(), APP_ROUTES.len());
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let names: Vec<_> = table().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Home", "About"]);
    }

    #[test]
    fn test_undeclared_path_resolves_to_nothing() {
        let table = table();
        assert_eq!(table.resolve("/nonexistent"), None);
        assert_eq!(table.resolve("/about/team"), None);
        assert_eq!(table.resolve(""), None);
    }

    #[test]
    fn test_query_fragment_and_trailing_slash_are_ignored() {
        let table = table();
        assert_eq!(table.resolve("/about/").map(|r| r.name), Some("About"));
        assert_eq!(table.resolve("/about?ref=nav").map(|r| r.name), Some("About"));
        assert_eq!(table.resolve("/#top").map(|r| r.name), Some("Home"));
        assert_eq!(table.resolve("/?theme=space").map(|r| r.name), Some("Home"));
    }

    #[test]
    fn test_matching_ignores_case() {
        let table = table();
        assert_eq!(table.resolve("/About").map(|r| r.name), Some("About"));
        assert_eq!(table.resolve("/ABOUT/").map(|r| r.name), Some("About"));
    }

    #[test]
    fn test_same_location() {
        assert!(same_location("/about", "/about/"));
        assert!(same_location("/about", "/About"));
        assert!(same_location("/about?x=1", "/about/?x=1"));
        assert!(!same_location("/about?x=1", "/about?x=2"));
        assert!(!same_location("/about", "/about#team"));
        assert!(!same_location("/", "/about"));
    }

    #[test]
    fn test_lookup_by_name() {
        let table = table();
        assert_eq!(table.by_name("About").map(|r| r.view), Some(View::About));
        assert_eq!(table.href("Home"), Some("/"));
        assert_eq!(table.href("Missing"), None);
    }

    #[test]
    fn test_duplicate_path_is_rejected() {
        let err = RouteTable::new([
            Route::new("/", "Home", View::GameForm),
            Route::new("/", "Start", View::About),
        ])
        .unwrap_err();
        assert_eq!(err, RouteTableError::DuplicatePath("/"));
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let err = RouteTable::new([
            Route::new("/", "Home", View::GameForm),
            Route::new("/home", "Home", View::GameForm),
        ])
        .unwrap_err();
        assert_eq!(err, RouteTableError::DuplicateName("Home"));
    }

    #[test]
    fn test_paths_differing_only_in_case_are_duplicates() {
        let err = RouteTable::new([
            Route::new("/about", "About", View::About),
            Route::new("/About", "AboutAgain", View::About),
        ])
        .unwrap_err();
        assert_eq!(err, RouteTableError::DuplicatePath("/About"));
    }

    #[test]
    fn test_malformed_routes_are_rejected() {
        assert_eq!(
            RouteTable::new([Route::new("about", "About", View::About)]).unwrap_err(),
            RouteTableError::InvalidPath("about")
        );
        assert_eq!(
            RouteTable::new([Route::new("/about?x", "About", View::About)]).unwrap_err(),
            RouteTableError::InvalidPath("/about?x")
        );
        assert_eq!(
            RouteTable::new([Route::new("/about", "", View::About)]).unwrap_err(),
            RouteTableError::EmptyName("/about")
        );
    }
}
