use crate::layout::route_context::use_route;
use contracts::shared::route::ConsoleRoute;
use contracts::shared::tracker::EntityRouteKey;
use leptos::prelude::*;
use thaw::*;

/// Tracker search results of a namespace.
///
/// Entities are opened by route key (`datasets:history`, `streams:purchaseStream`).
#[component]
pub fn TrackerResultsPage(
    namespace: String,
    search_query: Option<String>,
) -> impl IntoView {
    let routes = use_route();
    let entity_key = RwSignal::new(String::new());

    let title = match &search_query {
        Some(q) if !q.is_empty() => format!("Results for \"{}\" in {}", q, namespace),
        _ => format!("Entities in {}", namespace),
    };

    let open_entity = move |_: leptos::ev::MouseEvent| {
        let raw = entity_key.get().trim().to_string();
        if raw.is_empty() {
            return;
        }
        let key = EntityRouteKey::parse(&raw);
        routes.navigate(ConsoleRoute::TrackerEntity {
            namespace: namespace.clone(),
            entity_type: key.category,
            entity_id: key.rest,
            search_term: search_query.clone(),
        });
    };

    view! {
        <div class="page tracker-results">
            <div class="page-header">
                <h2>{title}</h2>
            </div>
            <div class="tracker-results__open">
                <Input value=entity_key placeholder="datasets:history" />
                <Button appearance=ButtonAppearance::Primary on_click=open_entity>
                    "Open"
                </Button>
            </div>
        </div>
    }
}
