use super::abstract_wizard::AbstractWizard;
use crate::shared::icons::icon;
use contracts::shared::wizard::WizardKind;
use leptos::prelude::*;
use thaw::*;

/// Landing page listing every wizard the console can open.
#[component]
pub fn WizardLauncher() -> impl IntoView {
    let active: RwSignal<Option<String>> = RwSignal::new(None);
    let custom_type = RwSignal::new(String::new());
    let display_cta = RwSignal::new(true);

    let on_close = Callback::new(move |_| active.set(None));

    let buttons = WizardKind::ALL
        .iter()
        .map(|&kind| {
            view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| active.set(Some(kind.as_str().to_string()))
                >
                    {kind.as_str()}
                </Button>
            }
        })
        .collect_view();

    let open_custom = move |_: leptos::ev::MouseEvent| {
        let wizard_type = custom_type.get().trim().to_string();
        if !wizard_type.is_empty() {
            active.set(Some(wizard_type));
        }
    };

    view! {
        <div class="page wizard-launcher">
            <div class="page-header">
                {icon("wizard")}
                <h2>"Wizards"</h2>
            </div>

            <div class="wizard-launcher__options">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || display_cta.get()
                        on:change=move |ev| display_cta.set(event_target_checked(&ev))
                    />
                    " Show call to action after finishing"
                </label>
            </div>

            <Flex gap=FlexGap::Small>
                {buttons}
            </Flex>

            <div class="wizard-launcher__custom">
                <Input value=custom_type placeholder="Wizard type, e.g. create_stream" />
                <Button appearance=ButtonAppearance::Primary on_click=open_custom>
                    "Open"
                </Button>
            </div>

            <AbstractWizard
                is_open=Signal::derive(move || active.get().is_some())
                wizard_type=Signal::derive(move || active.get().unwrap_or_default())
                on_close=on_close
                backdrop=true
                display_cta=display_cta
            />
        </div>
    }
}
