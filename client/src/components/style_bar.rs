//! Stroke and fill styling controls for the shared session style.
//!
//! Edits write through to [`UiState::style`]; the canvas host mirrors the
//! signal into the session, so a change restyles the whole drawing on the
//! next repaint.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::state::ui::UiState;

fn input_value(ev: &leptos::ev::Event) -> Option<String> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
}

/// Stroke color, fill color, and stroke width inputs.
#[component]
pub fn StyleBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_stroke_color = move |ev: leptos::ev::Event| {
        if let Some(value) = input_value(&ev) {
            ui.update(|u| u.style.stroke_color = value);
        }
    };

    let on_fill_color = move |ev: leptos::ev::Event| {
        if let Some(value) = input_value(&ev) {
            ui.update(|u| u.style.fill_color = value);
        }
    };

    let on_stroke_width = move |ev: leptos::ev::Event| {
        let Some(value) = input_value(&ev) else {
            return;
        };
        if let Ok(width) = value.parse::<f64>() {
            ui.update(|u| u.style.stroke_width = width);
        }
    };

    view! {
        <div class="style-bar">
            <label class="style-bar__field">
                "Stroke"
                <input
                    type="color"
                    prop:value=move || ui.get().style.stroke_color
                    on:change=on_stroke_color
                />
            </label>
            <label class="style-bar__field">
                "Fill"
                <input
                    type="color"
                    prop:value=move || ui.get().style.fill_color
                    on:change=on_fill_color
                />
            </label>
            <label class="style-bar__field">
                "Width"
                <input
                    type="number"
                    min="1"
                    max="50"
                    prop:value=move || ui.get().style.stroke_width.to_string()
                    on:input=on_stroke_width
                />
            </label>
        </div>
    }
}
