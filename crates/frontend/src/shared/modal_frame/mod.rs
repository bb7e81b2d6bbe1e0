use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::window_event_listener;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn is_escape(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

/// Modal frame container (overlay + positioned surface) used by wizards.
///
/// The frame renders no header; each wizard view draws its own.
#[component]
pub fn ModalFrame(
    /// Called when the modal should close (overlay click, Escape).
    on_close: Callback<()>,
    /// Close when clicking on the overlay (the wizard `backdrop` flag).
    #[prop(optional)]
    close_on_overlay: bool,
    /// z-index for overlay stacking (default: 1000).
    #[prop(optional)]
    z_index: Option<i32>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional, into)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let overlay_mouse_down = RwSignal::new(false);

    // Escape closes the frame; the listener goes away with the frame.
    let escape_listener = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if is_escape(&ev.key()) {
            on_close.run(());
        }
    });
    on_cleanup(move || escape_listener.remove());

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the overlay itself,
    // so selecting text inside the modal and releasing outside keeps it open.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close =
            close_on_overlay && overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Defer to next tick: the overlay is removed during its own click dispatch.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let surface_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=surface_class style="position: relative;" on:click=stop_propagation>
                {children()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_escape_closes() {
        assert!(is_escape("Escape"));
        assert!(is_escape("Esc"));
        assert!(!is_escape("Enter"));
        assert!(!is_escape("e"));
    }
}
