//! Application shell: context providers and the single-page layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell provides shared signals (tool/style, layer list) via Leptos
//! context; the components below read and write them without any direct DOM
//! coupling between each other. The canvas host is the only component that
//! talks to the drawing session.

use leptos::prelude::*;

use crate::components::canvas_host::CanvasHost;
use crate::components::layer_panel::LayerPanel;
use crate::components::style_bar::StyleBar;
use crate::components::tool_rail::ToolRail;
use crate::state::layers::LayersState;
use crate::state::ui::UiState;

/// Root component: toolbar on top, tool rail / canvas / layer panel below.
#[component]
pub fn App() -> impl IntoView {
    let ui = RwSignal::new(UiState::default());
    let layers = RwSignal::new(LayersState::default());
    provide_context(ui);
    provide_context(layers);

    view! {
        <div class="app">
            <header class="app__toolbar">
                <span class="app__title">"sketchboard"</span>
                <StyleBar/>
            </header>
            <div class="app__body">
                <ToolRail/>
                <main class="canvas-container">
                    <CanvasHost/>
                </main>
                <LayerPanel/>
            </div>
        </div>
    }
}
