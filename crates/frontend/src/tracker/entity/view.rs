use super::view_model::{EntityPageParams, TrackerEntityViewModel};
use crate::layout::route_context::use_route;
use crate::shared::icons::icon;
use contracts::shared::config::ConsoleConfig;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TrackerEntityPage(
    namespace: String,
    entity_type: String,
    entity_id: String,
    search_term: Option<String>,
) -> impl IntoView {
    let config = use_context::<ConsoleConfig>().expect("ConsoleConfig not provided in context");
    let routes = use_route();
    let params = EntityPageParams {
        namespace,
        entity_type,
        entity_id,
        search_term,
    };

    let vm = TrackerEntityViewModel::new();
    vm.load(params.clone(), &config);

    let go_back = {
        let params = params.clone();
        move |_: leptos::ev::MouseEvent| vm.go_back(routes, &params)
    };

    let entity_id = params.entity_id.clone();

    view! {
        <div class="page tracker-entity">
            <div class="page-header">
                <Button appearance=ButtonAppearance::Subtle on_click=go_back>
                    {icon("arrow-left")}
                    " Back to results"
                </Button>
            </div>

            {move || {
                let Some(resolution) = vm.resolution.get() else {
                    return view! { <Spinner /> }.into_any();
                };
                let explorable = resolution.dataset_explorable;
                let dataset_type = match &resolution.dataset_type {
                    serde_json::Value::Null => None,
                    serde_json::Value::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                };
                match resolution.info {
                    Ok(info) => {
                        let score = info
                            .score
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| "—".to_string());
                        view! {
                            <div class="tracker-entity__header">
                                <span class=format!("entity-icon {}", info.icon)>{icon(&info.icon)}</span>
                                <div>
                                    <div class="tracker-entity__kind">{info.name}</div>
                                    <h2 class="tracker-entity__id">{entity_id.clone()}</h2>
                                </div>
                                <div class="tracker-entity__score">
                                    <span class="label">"Truth Meter"</span>
                                    <span class="value">{score}</span>
                                </div>
                            </div>
                            <div class="tracker-entity__meta">
                                {dataset_type.map(|t| view! {
                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>{t}</Badge>
                                })}
                                {explorable.then(|| view! {
                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Explorable"</Badge>
                                })}
                            </div>
                        }
                        .into_any()
                    }
                    Err(e) => view! {
                        <div class="tracker-entity__unknown">
                            {icon("alert")}
                            <span>{e.to_string()}</span>
                        </div>
                    }
                    .into_any(),
                }
            }}

            <Show when=move || vm.loading.get()>
                <div class="tracker-entity__loading">
                    <Spinner />
                </div>
            </Show>
        </div>
    }
}
