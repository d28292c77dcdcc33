//! Cosmetic layer panel: an add-layer control and a single-select list.
//!
//! The list is presentational only — entries never bind to shapes or affect
//! rendering.

use leptos::prelude::*;

use crate::state::layers::LayersState;

/// Right sidebar listing layer entries with an exclusive highlight.
#[component]
pub fn LayerPanel() -> impl IntoView {
    let layers = expect_context::<RwSignal<LayersState>>();

    let on_add = move |_ev: leptos::ev::MouseEvent| {
        layers.update(|l| {
            l.add_layer();
        });
    };

    view! {
        <aside class="layer-panel">
            <div class="layer-panel__header">
                <span>"Layers"</span>
                <button class="layer-panel__add" on:click=on_add>
                    "+ Add layer"
                </button>
            </div>
            <div class="layer-panel__list">
                {move || {
                    let state = layers.get();
                    state
                        .layers()
                        .iter()
                        .enumerate()
                        .map(|(index, layer)| {
                            let name = layer.name.clone();
                            let is_active = state.is_active(index);
                            let on_select = move |_ev: leptos::ev::MouseEvent| {
                                layers.update(|l| l.set_active(index));
                            };
                            view! {
                                <button
                                    class="layer-panel__item"
                                    class:layer-panel__item--active=is_active
                                    on:click=on_select
                                >
                                    {name}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </aside>
    }
}
