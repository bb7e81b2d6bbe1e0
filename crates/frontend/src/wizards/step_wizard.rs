use super::loader::WizardViewProps;
use super::store::WizardStore;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::shared::wizard::WizardStep;
use leptos::prelude::*;
use thaw::*;

/// Generic multi-step wizard bound to a shared store.
#[component]
pub fn StepWizard(props: WizardViewProps) -> impl IntoView {
    let WizardViewProps {
        kind,
        view: wizard_view,
        store,
        on_close,
        input,
        backdrop,
        display_cta,
    } = props;
    let descriptor = wizard_view.descriptor();
    let step_count = descriptor.step_count();

    store.start(&input);

    let close = Callback::new(move |_| {
        store.reset();
        on_close.run(());
    });

    let finish = move |_: leptos::ev::MouseEvent| {
        store.finish();
        if display_cta {
            log::info!("wizard {} finished", kind);
        } else {
            close.run(());
        }
    };

    let step_labels = descriptor
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let class = move || {
                if store.active_step() == index {
                    "wizard-step wizard-step--active"
                } else {
                    "wizard-step"
                }
            };
            view! { <li class=class>{format!("{}. {}", index + 1, step.label)}</li> }
        })
        .collect_view();

    let body = move || {
        if store.is_finished() {
            return view! {
                <div class="wizard-cta">
                    <p>{format!("{} completed.", descriptor.title)}</p>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| close.run(())>
                        "Done"
                    </Button>
                </div>
            }
            .into_any();
        }
        match descriptor.steps.get(store.active_step()) {
            Some(step) => render_step(*step, store),
            None => view! { <></> }.into_any(),
        }
    };

    view! {
        <ModalFrame on_close=close close_on_overlay=backdrop modal_class="wizard-modal">
            <div class="wizard-header">
                <h3>{descriptor.title}</h3>
                <button class="button button--icon modal__close" on:click=move |_| close.run(())>
                    {icon("x")}
                </button>
            </div>
            <ul class="wizard-steps">{step_labels}</ul>
            <div class="wizard-body">{body}</div>
            <Show when=move || !store.is_finished()>
                <div class="wizard-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || store.active_step() == 0)
                        on_click=move |_| store.back()
                    >
                        "Back"
                    </Button>
                    {move || {
                        if descriptor.is_last_step(store.active_step()) {
                            view! {
                                <Button appearance=ButtonAppearance::Primary on_click=finish>
                                    "Finish"
                                </Button>
                            }
                            .into_any()
                        } else {
                            view! {
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| store.next(step_count)
                                >
                                    "Next"
                                </Button>
                            }
                            .into_any()
                        }
                    }}
                </div>
            </Show>
        </ModalFrame>
    }
}

/// Field inputs of one step, or a summary of the store when the step has none.
fn render_step(step: WizardStep, store: WizardStore) -> AnyView {
    if step.fields.is_empty() {
        let summary = move || {
            store
                .state()
                .values
                .into_iter()
                .map(|(key, value)| {
                    let text = match value {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    };
                    view! {
                        <div class="wizard-summary-row">
                            <span class="wizard-summary-key">{key}</span>
                            <span class="wizard-summary-value">{text}</span>
                        </div>
                    }
                })
                .collect_view()
        };
        return view! { <div class="wizard-summary">{summary}</div> }.into_any();
    }

    step.fields
        .iter()
        .map(|&field| {
            view! {
                <div class="form-group">
                    <label for=field>{field}</label>
                    <input
                        type="text"
                        id=field
                        prop:value=move || store.value_text(field)
                        on:input=move |ev| store.set_value(field, event_target_value(&ev))
                    />
                </div>
            }
        })
        .collect_view()
        .into_any()
}
