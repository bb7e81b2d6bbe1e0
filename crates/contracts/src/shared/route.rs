//! Console routes and their flat query-string form.
//!
//! The frontend keeps the current [`ConsoleRoute`] in a signal and mirrors it
//! into `?route=...&namespace=...` so a page can be reloaded or linked.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ROUTE_HOME: &str = "home";
pub const ROUTE_TRACKER_ENTITY: &str = "tracker.entity";
pub const ROUTE_TRACKER_RESULTS: &str = "tracker.detail.result";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConsoleRoute {
    /// Wizard launcher.
    #[default]
    Home,
    TrackerEntity {
        namespace: String,
        entity_type: String,
        entity_id: String,
        search_term: Option<String>,
    },
    TrackerResults {
        namespace: String,
        search_query: Option<String>,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("unknown route '{0}'")]
    UnknownRoute(String),

    #[error("route '{route}' requires parameter '{param}'")]
    MissingParam { route: String, param: &'static str },
}

/// Flat representation used for the URL query string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteQuery {
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
}

impl ConsoleRoute {
    pub fn name(&self) -> &'static str {
        match self {
            ConsoleRoute::Home => ROUTE_HOME,
            ConsoleRoute::TrackerEntity { .. } => ROUTE_TRACKER_ENTITY,
            ConsoleRoute::TrackerResults { .. } => ROUTE_TRACKER_RESULTS,
        }
    }

    pub fn to_query(&self) -> RouteQuery {
        let mut query = RouteQuery {
            route: Some(self.name().to_string()),
            ..Default::default()
        };
        match self {
            ConsoleRoute::Home => {}
            ConsoleRoute::TrackerEntity {
                namespace,
                entity_type,
                entity_id,
                search_term,
            } => {
                query.namespace = Some(namespace.clone());
                query.entity_type = Some(entity_type.clone());
                query.entity_id = Some(entity_id.clone());
                query.search_term = search_term.clone();
            }
            ConsoleRoute::TrackerResults {
                namespace,
                search_query,
            } => {
                query.namespace = Some(namespace.clone());
                query.search_query = search_query.clone();
            }
        }
        query
    }

    /// An empty query (no `route`) maps to [`ConsoleRoute::Home`].
    pub fn from_query(query: RouteQuery) -> Result<Self, RouteError> {
        let route = match query.route.as_deref() {
            None | Some("") | Some(ROUTE_HOME) => return Ok(ConsoleRoute::Home),
            Some(route) => route.to_string(),
        };
        let require = |value: Option<String>, param: &'static str| {
            value.ok_or_else(|| RouteError::MissingParam {
                route: route.clone(),
                param,
            })
        };

        match route.as_str() {
            ROUTE_TRACKER_ENTITY => Ok(ConsoleRoute::TrackerEntity {
                namespace: require(query.namespace, "namespace")?,
                entity_type: require(query.entity_type, "entityType")?,
                entity_id: query.entity_id.unwrap_or_default(),
                search_term: query.search_term,
            }),
            ROUTE_TRACKER_RESULTS => Ok(ConsoleRoute::TrackerResults {
                namespace: require(query.namespace, "namespace")?,
                search_query: query.search_query,
            }),
            _ => Err(RouteError::UnknownRoute(route.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_route_query() {
        let route = ConsoleRoute::TrackerEntity {
            namespace: "default".to_string(),
            entity_type: "datasets".to_string(),
            entity_id: "history".to_string(),
            search_term: Some("purch*".to_string()),
        };
        let query = route.to_query();
        assert_eq!(query.route.as_deref(), Some(ROUTE_TRACKER_ENTITY));
        assert_eq!(query.search_query, None);
        assert_eq!(ConsoleRoute::from_query(query).unwrap(), route);
    }

    #[test]
    fn test_empty_query_is_home() {
        assert_eq!(
            ConsoleRoute::from_query(RouteQuery::default()).unwrap(),
            ConsoleRoute::Home
        );
    }

    #[test]
    fn test_missing_namespace() {
        let query = RouteQuery {
            route: Some(ROUTE_TRACKER_RESULTS.to_string()),
            ..Default::default()
        };
        assert_eq!(
            ConsoleRoute::from_query(query).unwrap_err(),
            RouteError::MissingParam {
                route: ROUTE_TRACKER_RESULTS.to_string(),
                param: "namespace",
            }
        );
    }

    #[test]
    fn test_unknown_route() {
        let query = RouteQuery {
            route: Some("tracker.lineage".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            ConsoleRoute::from_query(query),
            Err(RouteError::UnknownRoute(r)) if r == "tracker.lineage"
        ));
    }
}
