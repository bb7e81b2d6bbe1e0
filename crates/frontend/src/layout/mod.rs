pub mod page_registry;
pub mod route_context;

use crate::shared::icons::icon;
use contracts::shared::route::ConsoleRoute;
use leptos::prelude::*;
use route_context::use_route;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |                 Content                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <div class="app-main">{children()}</div>
            </div>
        </div>
    }
}

#[component]
fn TopHeader() -> impl IntoView {
    let routes = use_route();

    view! {
        <header class="top-header">
            <span class="top-header__title">"Data Console"</span>
            <nav class="top-header__nav">
                <button class="button button--ghost" on:click=move |_| routes.navigate(ConsoleRoute::Home)>
                    {icon("wizard")}
                    " Wizards"
                </button>
                <button
                    class="button button--ghost"
                    on:click=move |_| {
                        routes.navigate(ConsoleRoute::TrackerResults {
                            namespace: "default".to_string(),
                            search_query: None,
                        })
                    }
                >
                    {icon("icon-datasets")}
                    " Tracker"
                </button>
            </nav>
        </header>
    }
}
