use super::step_wizard::StepWizard;
use super::store::WizardStore;
use contracts::shared::wizard::{ViewLoadError, WizardKind, WizardView};
use leptos::prelude::*;
use std::future::Future;
use std::pin::Pin;

/// Everything a wizard view is bound to when rendered.
#[derive(Clone)]
pub struct WizardViewProps {
    pub kind: WizardKind,
    pub view: WizardView,
    pub store: WizardStore,
    pub on_close: Callback<()>,
    pub input: serde_json::Value,
    pub backdrop: bool,
    pub display_cta: bool,
}

/// Renders a loaded wizard view.
pub type WizardViewFn = fn(WizardViewProps) -> AnyView;

pub type ViewLoadFuture = Pin<Box<dyn Future<Output = Result<WizardViewFn, ViewLoadError>>>>;

/// Materializes the view component for a wizard view key.
pub trait ViewLoader: Send + Sync {
    fn load(&self, view: WizardView) -> ViewLoadFuture;
}

/// Loader used by the console: every view is rendered by the generic step wizard.
pub struct StepWizardLoader;

fn render_step_wizard(props: WizardViewProps) -> AnyView {
    view! { <StepWizard props=props /> }.into_any()
}

impl ViewLoader for StepWizardLoader {
    fn load(&self, view: WizardView) -> ViewLoadFuture {
        Box::pin(async move {
            log::debug!("loading wizard view {:?}", view);
            Ok(render_step_wizard as WizardViewFn)
        })
    }
}
