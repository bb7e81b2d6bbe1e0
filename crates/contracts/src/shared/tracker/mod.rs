pub mod entity;
pub mod score;

pub use entity::{
    is_explorable, EntityCategory, EntityInfo, EntityMetadataResolver, EntityResolution,
    EntityResolveError, EntityRouteKey, EXPLORE_TAG,
};
pub use score::{ScoreSource, StaticScoreTable};

use crate::shared::route::ConsoleRoute;

/// Destination of the entity page's "back" action: the search results of the
/// current namespace, carrying the search term forward.
pub fn back_route(namespace: &str, search_term: Option<&str>) -> ConsoleRoute {
    ConsoleRoute::TrackerResults {
        namespace: namespace.to_string(),
        search_query: search_term.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_route_carries_namespace_and_search() {
        assert_eq!(
            back_route("default", Some("purchase")),
            ConsoleRoute::TrackerResults {
                namespace: "default".to_string(),
                search_query: Some("purchase".to_string()),
            }
        );
        assert_eq!(
            back_route("ns1", None),
            ConsoleRoute::TrackerResults {
                namespace: "ns1".to_string(),
                search_query: None,
            }
        );
    }
}
