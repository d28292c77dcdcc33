//! Vertical strip of tool buttons for selecting the active drawing tool.
//!
//! DESIGN
//! ======
//! Buttons carry a `data-tool` name attribute; the click handler parses it
//! through [`Tool::from_name`], so an unrecognized name simply leaves the
//! previous tool active instead of erroring.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use canvas::input::Tool;

use crate::state::ui::UiState;

#[derive(Clone, Copy)]
struct ToolDef {
    name: &'static str,
    label: &'static str,
}

const TOOLS: &[ToolDef] = &[
    ToolDef { name: "select", label: "Select" },
    ToolDef { name: "pen", label: "Pen" },
    ToolDef { name: "rectangle", label: "Rectangle" },
    ToolDef { name: "circle", label: "Circle" },
    ToolDef { name: "line", label: "Line" },
];

/// Vertical strip of mutually-exclusive tool selection buttons.
#[component]
pub fn ToolRail() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="tool-rail">
            {TOOLS
                .iter()
                .map(|td| {
                    let td = *td;
                    let is_active = move || Tool::from_name(td.name) == Some(ui.get().active_tool);

                    let on_click = move |ev: leptos::ev::MouseEvent| {
                        let tool = ev
                            .current_target()
                            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                            .and_then(|el| el.get_attribute("data-tool"))
                            .and_then(|name| Tool::from_name(&name));
                        if let Some(tool) = tool {
                            ui.update(|u| u.active_tool = tool);
                        }
                    };

                    view! {
                        <button
                            class="tool-rail__btn"
                            class:tool-rail__btn--active=is_active
                            title=td.label
                            attr:data-tool=td.name
                            on:click=on_click
                        >
                            {render_icon(td.name)}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

fn render_icon(name: &'static str) -> impl IntoView {
    match name {
        "pen" => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M3 17 L14 6 L16 4 L17 3 L14 6" />
                <path d="M14 6 L16 8" />
                <line x1="3" y1="17" x2="5" y2="15" />
            </svg>
        }
        .into_any(),
        "rectangle" => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <rect x="2" y="4" width="16" height="12" />
            </svg>
        }
        .into_any(),
        "circle" => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="10" cy="10" r="7" />
            </svg>
        }
        .into_any(),
        "line" => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <line x1="3" y1="17" x2="17" y2="3" />
            </svg>
        }
        .into_any(),
        _ => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M4 2 L4 16 L8 12 L12 18 L14 17 L10 11 L15 11 Z" />
            </svg>
        }
        .into_any(),
    }
}
