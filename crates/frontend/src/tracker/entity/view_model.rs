use super::model;
use crate::layout::route_context::RouteContext;
use contracts::shared::config::ConsoleConfig;
use contracts::shared::tracker::{
    back_route, EntityCategory, EntityMetadataResolver, EntityResolution, EntityRouteKey,
};
use leptos::prelude::*;
use serde_json::Value;

/// Route parameters of the entity page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityPageParams {
    pub namespace: String,
    pub entity_type: String,
    pub entity_id: String,
    pub search_term: Option<String>,
}

/// ViewModel for the tracker entity page
#[derive(Clone, Copy)]
pub struct TrackerEntityViewModel {
    pub resolution: RwSignal<Option<EntityResolution>>,
    pub loading: RwSignal<bool>,
}

impl TrackerEntityViewModel {
    pub fn new() -> Self {
        Self {
            resolution: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    /// Resolves the entity right away, then again once the dataset
    /// classification (type, system tags) has been fetched.
    pub fn load(&self, params: EntityPageParams, config: &ConsoleConfig) {
        let resolver = EntityMetadataResolver::new(config.score_table());
        self.resolution.set(Some(resolver.resolve(
            &params.entity_type,
            Some(&params.entity_id),
            Value::Null,
            &Value::Null,
        )));

        let key = EntityRouteKey::parse(&params.entity_type);
        if EntityCategory::from_segment(&key.category) != Some(EntityCategory::Datasets) {
            return;
        }

        let dataset_id = key.entity_id(Some(&params.entity_id)).to_string();
        let api = config.api.clone();
        let resolution = self.resolution;
        let loading = self.loading;
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let dataset_type = model::fetch_dataset_type(&api, &params.namespace, &dataset_id)
                .await
                .unwrap_or_else(|e| {
                    log::warn!("dataset type of {} unavailable: {}", dataset_id, e);
                    Value::Null
                });
            let system_tags = model::fetch_system_tags(&api, &params.namespace, &dataset_id)
                .await
                .unwrap_or_else(|e| {
                    log::warn!("system tags of {} unavailable: {}", dataset_id, e);
                    Value::Null
                });

            resolution.set(Some(resolver.resolve(
                &params.entity_type,
                Some(&params.entity_id),
                dataset_type,
                &system_tags,
            )));
            loading.set(false);
        });
    }

    /// Returns to the search results of the current namespace.
    pub fn go_back(&self, routes: RouteContext, params: &EntityPageParams) {
        routes.navigate(back_route(&params.namespace, params.search_term.as_deref()));
    }
}

impl Default for TrackerEntityViewModel {
    fn default() -> Self {
        Self::new()
    }
}
