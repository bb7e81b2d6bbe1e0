use super::score::ScoreSource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// System tag marking a dataset as explorable.
pub const EXPLORE_TAG: &str = "explore";

/// Catalog entity categories the tracker can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityCategory {
    Streams,
    Datasets,
    Views,
}

impl EntityCategory {
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "streams" => Some(EntityCategory::Streams),
            "datasets" => Some(EntityCategory::Datasets),
            "views" => Some(EntityCategory::Views),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityCategory::Streams => "streams",
            EntityCategory::Datasets => "datasets",
            EntityCategory::Views => "views",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EntityCategory::Streams => "Stream",
            EntityCategory::Datasets => "Dataset",
            EntityCategory::Views => "Stream View",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            EntityCategory::Streams | EntityCategory::Views => "icon-streams",
            EntityCategory::Datasets => "icon-datasets",
        }
    }
}

/// Route key of the form `category:rest`, split on the first `:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRouteKey {
    pub raw: String,
    pub category: String,
    pub rest: String,
}

impl EntityRouteKey {
    pub fn parse(raw: &str) -> Self {
        let (category, rest) = raw.split_once(':').unwrap_or((raw, ""));
        Self {
            raw: raw.to_string(),
            category: category.to_string(),
            rest: rest.to_string(),
        }
    }

    /// Entity id used for lookups: the explicit route id when present and
    /// non-empty, otherwise the part after the first `:`.
    pub fn entity_id<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
        explicit
            .filter(|id| !id.is_empty())
            .unwrap_or(self.rest.as_str())
    }
}

/// Display metadata of a tracked entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityInfo {
    pub name: String,
    pub icon: String,
    pub score: Option<u32>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntityResolveError {
    #[error("unknown entity type '{category}' in route key '{route_key}'")]
    UnknownCategory { category: String, route_key: String },
}

/// Everything the entity page derives from its route and classification inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityResolution {
    pub info: Result<EntityInfo, EntityResolveError>,
    /// Published for the explore panel; not used by the resolver itself.
    pub dataset_explorable: bool,
    pub dataset_type: serde_json::Value,
}

/// True only when `system_tags` is an array containing `"explore"`.
pub fn is_explorable(system_tags: &serde_json::Value) -> bool {
    system_tags
        .as_array()
        .map(|tags| tags.iter().any(|tag| tag.as_str() == Some(EXPLORE_TAG)))
        .unwrap_or(false)
}

pub struct EntityMetadataResolver<S> {
    scores: S,
}

impl<S: ScoreSource> EntityMetadataResolver<S> {
    pub fn new(scores: S) -> Self {
        Self { scores }
    }

    /// Resolves display metadata for `route_key`.
    ///
    /// `entity_id` is the separate id route parameter, see [`EntityRouteKey::entity_id`].
    pub fn resolve(
        &self,
        route_key: &str,
        entity_id: Option<&str>,
        dataset_type: serde_json::Value,
        system_tags: &serde_json::Value,
    ) -> EntityResolution {
        let key = EntityRouteKey::parse(route_key);
        let dataset_explorable = is_explorable(system_tags);

        let info = match EntityCategory::from_segment(&key.category) {
            Some(category) => {
                Ok(EntityInfo {
                    name: category.display_name().to_string(),
                    icon: category.icon().to_string(),
                    score: self
                        .scores
                        .score(category.as_str(), key.entity_id(entity_id)),
                })
            }
            None => Err(EntityResolveError::UnknownCategory {
                category: key.category.clone(),
                route_key: key.raw.clone(),
            }),
        };

        EntityResolution {
            info,
            dataset_explorable,
            dataset_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::score::StaticScoreTable;
    use super::*;
    use serde_json::{json, Value};

    fn resolver() -> EntityMetadataResolver<StaticScoreTable> {
        EntityMetadataResolver::new(StaticScoreTable::placeholder())
    }

    #[test]
    fn test_dataset_with_explore_tag() {
        let res = resolver().resolve("datasets:history", None, json!("table"), &json!(["explore"]));
        assert_eq!(
            res.info,
            Ok(EntityInfo {
                name: "Dataset".to_string(),
                icon: "icon-datasets".to_string(),
                score: Some(80),
            })
        );
        assert!(res.dataset_explorable);
        assert_eq!(res.dataset_type, json!("table"));
    }

    #[test]
    fn test_stream_without_tags() {
        let res = resolver().resolve("streams:purchaseStream", None, Value::Null, &json!([]));
        assert_eq!(
            res.info,
            Ok(EntityInfo {
                name: "Stream".to_string(),
                icon: "icon-streams".to_string(),
                score: Some(44),
            })
        );
        assert!(!res.dataset_explorable);
    }

    #[test]
    fn test_stream_view_uses_stream_icon_and_has_no_score() {
        let res = resolver().resolve("views:purchaseStream", None, Value::Null, &json!([]));
        let info = res.info.unwrap();
        assert_eq!(info.name, "Stream View");
        assert_eq!(info.icon, "icon-streams");
        assert_eq!(info.score, None);
    }

    #[test]
    fn test_unknown_category_still_computes_explorable() {
        let res = resolver().resolve("widgets:foo", None, Value::Null, &json!(["explore"]));
        assert_eq!(
            res.info,
            Err(EntityResolveError::UnknownCategory {
                category: "widgets".to_string(),
                route_key: "widgets:foo".to_string(),
            })
        );
        assert!(res.dataset_explorable);
    }

    #[test]
    fn test_non_array_tags_are_not_explorable() {
        assert!(!is_explorable(&json!("explore")));
        assert!(!is_explorable(&json!({"explore": true})));
        assert!(!is_explorable(&Value::Null));
        assert!(!is_explorable(&json!(["system", "batch"])));
    }

    #[test]
    fn test_explicit_entity_id_wins_over_key_rest() {
        let res = resolver().resolve("datasets", Some("purchases"), Value::Null, &json!([]));
        assert_eq!(res.info.unwrap().score, Some(26));

        let res = resolver().resolve("datasets:history", Some(""), Value::Null, &json!([]));
        assert_eq!(res.info.unwrap().score, Some(80));
    }

    #[test]
    fn test_route_key_split_once() {
        let key = EntityRouteKey::parse("datasets:ns:history");
        assert_eq!(key.category, "datasets");
        assert_eq!(key.rest, "ns:history");

        let key = EntityRouteKey::parse("streams");
        assert_eq!(key.category, "streams");
        assert_eq!(key.rest, "");
    }
}
