//! Hash Routes
//!
//! `#/` shows the board, `#/candidates/{id}` shows a profile.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

const PROFILE_PREFIX: &str = "#/candidates/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Board,
    Profile(String),
}

impl Route {
    pub fn parse(hash: &str) -> Self {
        match hash.strip_prefix(PROFILE_PREFIX) {
            Some(raw) => {
                let raw = raw.trim_end_matches('/');
                if raw.is_empty() || raw.contains('/') {
                    return Route::Board;
                }
                Route::Profile(percent_decode_str(raw).decode_utf8_lossy().into_owned())
            }
            None => Route::Board,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Board => "#/".to_string(),
            Route::Profile(id) => format!("{}{}", PROFILE_PREFIX, utf8_percent_encode(id, NON_ALPHANUMERIC)),
        }
    }

    /// Route for the page's current location hash
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::parse(&hash)
    }

    /// Point the location hash at this route (fires `hashchange`)
    pub fn navigate(&self) {
        if let Some(win) = web_sys::window() {
            if let Err(e) = win.location().set_hash(&self.href()) {
                log::warn!("navigation to {} failed: {:?}", self.href(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse(""), Route::Board);
        assert_eq!(Route::parse("#/"), Route::Board);
        assert_eq!(Route::parse("#/candidates/c-42"), Route::Profile("c-42".into()));
        assert_eq!(Route::parse("#/candidates/c-42/"), Route::Profile("c-42".into()));
        assert_eq!(Route::parse("#/candidates/"), Route::Board);
        assert_eq!(Route::parse("#/jobs/j-1"), Route::Board);
    }

    #[test]
    fn test_id_is_percent_decoded() {
        assert_eq!(Route::parse("#/candidates/a%20b"), Route::Profile("a b".into()));
    }

    #[test]
    fn test_href_parses_back() {
        let route = Route::Profile("id with/slash".into());
        assert_eq!(Route::parse(&route.href()), route);
        assert_eq!(Route::Board.href(), "#/");
    }
}
