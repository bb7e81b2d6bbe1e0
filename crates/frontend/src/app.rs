use crate::layout::page_registry::render_page;
use crate::layout::route_context::RouteContext;
use crate::layout::Shell;
use crate::wizards::WizardStores;
use contracts::shared::config::ConsoleConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: ConsoleConfig) -> impl IntoView {
    provide_context(config);

    // One store per wizard family, shared by every wizard that uses it.
    provide_context(WizardStores::new());

    let routes = RouteContext::new();
    provide_context(routes);
    routes.init_url_sync();

    view! {
        <Shell>
            {move || render_page(routes.current.get())}
        </Shell>
    }
}
