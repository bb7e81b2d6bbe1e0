use super::loader::{StepWizardLoader, ViewLoader, WizardViewFn, WizardViewProps};
use super::store::WizardStores;
use contracts::shared::wizard::{
    standard, StandardDispatchTable, ViewLoadError, WizardParams, WizardResolution, WizardView,
};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Opens the wizard registered for `wizard_type`.
///
/// Renders nothing while closed and an inline message for unknown types.
/// `table` and `loader` default to the console's standard table and loader.
#[component]
pub fn AbstractWizard(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] wizard_type: Signal<String>,
    on_close: Callback<()>,
    /// Opaque input handed to the wizard view.
    #[prop(optional, into)]
    input: Option<Signal<serde_json::Value>>,
    /// Close the wizard on overlay click.
    #[prop(optional)]
    backdrop: bool,
    /// Show the call-to-action panel after the last step.
    #[prop(optional, into)]
    display_cta: Option<Signal<bool>>,
    #[prop(optional)] table: Option<&'static StandardDispatchTable>,
    #[prop(optional)] loader: Option<Arc<dyn ViewLoader>>,
) -> impl IntoView {
    let table = table.unwrap_or_else(standard);
    let loader = loader.unwrap_or_else(|| Arc::new(StepWizardLoader) as Arc<dyn ViewLoader>);
    let input = input.unwrap_or_else(|| Signal::derive(|| serde_json::Value::Null));
    let display_cta = display_cta.unwrap_or_else(|| Signal::derive(|| false));
    let stores = use_context::<WizardStores>()
        .expect("WizardStores not provided in context (provide it in app root)");

    let params = params_memo(is_open, wizard_type, input, backdrop, display_cta);

    move || {
        let params = params.get();
        match table.resolve(&params) {
            WizardResolution::Closed => view! { <></> }.into_any(),
            WizardResolution::Unknown { wizard_type } => {
                log::warn!("wizard type '{}' not found", wizard_type);
                view! { <h1>" Wizard Type " {wizard_type} " not found "</h1> }.into_any()
            }
            WizardResolution::Render { kind, entry } => match stores.get(entry.store) {
                Some(store) => {
                    log::debug!("opening wizard {} with store {:?}", kind, entry.store);
                    let props = WizardViewProps {
                        kind,
                        view: entry.view,
                        store,
                        on_close,
                        input: params.input,
                        backdrop: params.backdrop,
                        display_cta: params.display_cta,
                    };
                    view! { <LoadedWizard wizard_view=entry.view props=props loader=loader.clone() /> }
                        .into_any()
                }
                None => {
                    log::error!("wizard store {:?} is not registered", entry.store);
                    view! { <div class="error">{format!("Wizard store for {} is not available", kind)}</div> }
                        .into_any()
                }
            },
        }
    }
}

/// Tracks what selects and seeds the wizard. `display_cta` is read untracked:
/// it only matters once the last step is reached and must not remount an open wizard.
fn params_memo(
    is_open: Signal<bool>,
    wizard_type: Signal<String>,
    input: Signal<serde_json::Value>,
    backdrop: bool,
    display_cta: Signal<bool>,
) -> Memo<WizardParams> {
    Memo::new(move |_| WizardParams {
        is_open: is_open.get(),
        wizard_type: wizard_type.get(),
        input: input.get(),
        backdrop,
        display_cta: display_cta.get_untracked(),
    })
}

/// Shows a placeholder until `wizard_view` is loaded, then renders it.
#[component]
fn LoadedWizard(
    wizard_view: WizardView,
    props: WizardViewProps,
    loader: Arc<dyn ViewLoader>,
) -> impl IntoView {
    let loaded: RwSignal<Option<Result<WizardViewFn, ViewLoadError>>> = RwSignal::new(None);

    let pending = loader.load(wizard_view);
    spawn_local(async move {
        let result = pending.await;
        if let Err(e) = &result {
            log::error!("{}", e);
        }
        loaded.set(Some(result));
    });

    move || match loaded.get() {
        None => view! {
            <div class="wizard-loading">
                <Spinner />
            </div>
        }
        .into_any(),
        Some(Ok(render)) => render(props.clone()),
        Some(Err(e)) => view! {
            <div class="error">{format!("Unable to load wizard: {}", e)}</div>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_cta_toggle_keeps_open_wizard() {
        let owner = Owner::new();
        owner.set();

        let is_open = RwSignal::new(true);
        let wizard_type = RwSignal::new("create_stream".to_string());
        let display_cta = RwSignal::new(true);
        let params = params_memo(
            is_open.into(),
            wizard_type.into(),
            Signal::derive(|| serde_json::Value::Null),
            true,
            display_cta.into(),
        );
        assert!(params.get_untracked().display_cta);

        display_cta.set(false);
        let unchanged = params.get_untracked();
        assert!(unchanged.display_cta);
        assert_eq!(unchanged.wizard_type, "create_stream");

        // The next open picks up the current flag.
        is_open.set(false);
        is_open.set(true);
        wizard_type.set("add_namespace".to_string());
        let reopened = params.get_untracked();
        assert!(!reopened.display_cta);
        assert_eq!(reopened.wizard_type, "add_namespace");
    }
}
