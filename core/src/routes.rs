//! Route table: maps application paths to views.
//!
//! | Path | Route |
//! |---|---|
//! | `` (empty) | redirect to `dashboard` |
//! | `dashboard` | [`Route::Dashboard`] |
//! | `detail/:id` | [`Route::Detail`] |
//! | `heroes` | [`Route::Heroes`] |

use std::fmt;

use crate::types::HeroId;

/// Path the empty route redirects to.
pub const DEFAULT_PATH: &str = "dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Detail(HeroId),
    Heroes,
}

impl Route {
    /// Resolve `path`, ignoring leading and trailing slashes. Unknown paths
    /// and detail ids that are not in canonical form yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim_matches('/');
        let path = if path.is_empty() { DEFAULT_PATH } else { path };
        match path.split_once('/') {
            None if path == "dashboard" => Some(Route::Dashboard),
            None if path == "heroes" => Some(Route::Heroes),
            Some(("detail", id)) => parse_id(id).map(Route::Detail),
            _ => None,
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "dashboard".to_string(),
            Route::Detail(id) => format!("detail/{id}"),
            Route::Heroes => "heroes".to_string(),
        }
    }
}

/// Plain ASCII digits, no sign, no leading zero: the form `path()` renders.
fn parse_id(id: &str) -> Option<HeroId> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if id.len() > 1 && id.starts_with('0') {
        return None;
    }
    id.parse().ok()
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
