use contracts::shared::route::{ConsoleRoute, RouteQuery};
use leptos::prelude::*;
use web_sys::window;

/// Current console route, mirrored into the URL query string.
#[derive(Clone, Copy)]
pub struct RouteContext {
    pub current: RwSignal<ConsoleRoute>,
}

impl RouteContext {
    pub fn new() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self {
            current: RwSignal::new(route_from_search(&search)),
        }
    }

    pub fn navigate(&self, route: ConsoleRoute) {
        log::debug!("navigate to {}", route.name());
        self.current.set(route);
    }

    /// Keeps `?route=...` in sync with the current route.
    pub fn init_url_sync(&self) {
        let this = *self;
        Effect::new(move |_| {
            let new_url = search_for_route(&this.current.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.push_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for RouteContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_route() -> RouteContext {
    use_context::<RouteContext>().expect("RouteContext not provided in context")
}

/// Parses `?route=...`; malformed queries fall back to the home page.
pub fn route_from_search(search: &str) -> ConsoleRoute {
    let query: RouteQuery = match serde_qs::from_str(search.trim_start_matches('?')) {
        Ok(query) => query,
        Err(e) => {
            log::warn!("invalid route query '{}': {}", search, e);
            return ConsoleRoute::Home;
        }
    };
    ConsoleRoute::from_query(query).unwrap_or_else(|e| {
        log::warn!("{}", e);
        ConsoleRoute::Home
    })
}

pub fn search_for_route(route: &ConsoleRoute) -> String {
    match serde_qs::to_string(&route.to_query()) {
        Ok(query) => format!("?{}", query),
        Err(e) => {
            log::error!("failed to encode route {}: {}", route.name(), e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_round_trip() {
        let route = ConsoleRoute::TrackerResults {
            namespace: "default".to_string(),
            search_query: Some("purchase history".to_string()),
        };
        let search = search_for_route(&route);
        assert!(search.starts_with("?route="));
        assert!(search.contains("namespace=default"));
        assert_eq!(route_from_search(&search), route);
    }

    #[test]
    fn test_bad_search_falls_back_home() {
        assert_eq!(route_from_search(""), ConsoleRoute::Home);
        assert_eq!(route_from_search("?route=nowhere"), ConsoleRoute::Home);
        assert_eq!(
            route_from_search("?route=tracker.entity&entityType=datasets"),
            ConsoleRoute::Home
        );
    }
}
