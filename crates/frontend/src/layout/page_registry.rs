//! Page registry - the single mapping from a console route to its view.

use crate::tracker::{TrackerEntityPage, TrackerResultsPage};
use crate::wizards::WizardLauncher;
use contracts::shared::route::ConsoleRoute;
use leptos::prelude::*;

/// Renders the page for `route`.
pub fn render_page(route: ConsoleRoute) -> AnyView {
    match route {
        ConsoleRoute::Home => view! { <WizardLauncher /> }.into_any(),

        ConsoleRoute::TrackerEntity {
            namespace,
            entity_type,
            entity_id,
            search_term,
        } => view! {
            <TrackerEntityPage
                namespace=namespace
                entity_type=entity_type
                entity_id=entity_id
                search_term=search_term
            />
        }
        .into_any(),

        ConsoleRoute::TrackerResults {
            namespace,
            search_query,
        } => view! {
            <TrackerResultsPage
                namespace=namespace
                search_query=search_query
            />
        }
        .into_any(),
    }
}
