//! Bridge component between Leptos state and the imperative [`Session`].
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns document and repaint state while this host maps DOM
//! pointer events into session calls. All work happens synchronously inside
//! the event callbacks: a handler mutates the session, and any resulting
//! `RenderNeeded` action repaints before the callback returns. Pointer events
//! carry mouse, first-touch, and stylus contact natively, so no touch-event
//! re-dispatch exists.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use canvas::geom::Point;
use canvas::session::{Action, Session};

use crate::state::ui::UiState;

/// Canvas-local coordinates for a pointer event.
fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Re-derive the drawing surface's pixel dimensions from its container.
/// Committed shape coordinates are left untouched.
fn sync_viewport(session: &mut Session, canvas: &web_sys::HtmlCanvasElement) {
    let Some(container) = canvas.parent_element() else {
        return;
    };
    let rect = container.get_bounding_client_rect();
    let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
    session.set_viewport(rect.width(), rect.height(), dpr);
}

/// Repaint now. A failed frame is logged and dropped — it only costs this
/// frame, the next repaint starts from scratch anyway.
fn render_now(session: &Session) {
    if let Err(err) = session.render() {
        log::error!("render failed: {err:?}");
    }
}

fn apply_actions(session: &Session, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::RenderNeeded => render_now(session),
            Action::ShapeCommitted(shape) => {
                log::debug!("committed {} ({} total)", shape.label(), session.core.doc.len());
            }
        }
    }
}

/// Canvas host component.
///
/// Mounts a [`Session`] on the canvas node, mirrors the tool/style signals
/// into it, re-syncs the viewport on window resize, and repaints on demand.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let session = Rc::new(RefCell::new(None::<Session>));

    // Mount the session once the canvas node exists.
    {
        let session = Rc::clone(&session);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if session.borrow().is_some() {
                return;
            }

            let mut instance = Session::new(canvas.clone());
            let state = ui.get_untracked();
            instance.set_tool(state.active_tool);
            instance.set_style(state.style);
            sync_viewport(&mut instance, &canvas);
            render_now(&instance);
            log::info!("drawing session mounted");
            *session.borrow_mut() = Some(instance);
        });
    }

    // Mirror tool and style changes into the session. Style is applied at
    // repaint time, so a style edit restyles the whole drawing.
    {
        let session = Rc::clone(&session);
        Effect::new(move || {
            let state = ui.get();
            if let Some(session) = session.borrow_mut().as_mut() {
                session.set_tool(state.active_tool);
                session.set_style(state.style);
                render_now(session);
            }
        });
    }

    // Window resize: recompute surface dimensions from the container, then
    // repaint.
    {
        let session = Rc::clone(&session);
        Effect::new(move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let session = Rc::clone(&session);
            let on_resize = Closure::<dyn FnMut()>::new(move || {
                let Some(canvas) = canvas_ref.get_untracked() else {
                    return;
                };
                if let Some(session) = session.borrow_mut().as_mut() {
                    sync_viewport(session, &canvas);
                    render_now(session);
                }
            });
            if window
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("could not attach resize listener");
            }
            // The listener lives as long as the page.
            on_resize.forget();
        });
    }

    let on_pointer_down = {
        let session = Rc::clone(&session);
        move |ev: leptos::ev::PointerEvent| {
            ev.prevent_default();
            if let Some(session) = session.borrow_mut().as_mut() {
                let actions = session.on_pointer_down(pointer_point(&ev));
                apply_actions(session, actions);
            }
        }
    };

    let on_pointer_move = {
        let session = Rc::clone(&session);
        move |ev: leptos::ev::PointerEvent| {
            if let Some(session) = session.borrow_mut().as_mut() {
                let actions = session.on_pointer_move(pointer_point(&ev));
                apply_actions(session, actions);
            }
        }
    };

    let on_pointer_up = {
        let session = Rc::clone(&session);
        move |_ev: leptos::ev::PointerEvent| {
            if let Some(session) = session.borrow_mut().as_mut() {
                let actions = session.on_pointer_up();
                apply_actions(session, actions);
            }
        }
    };

    // Leaving the canvas mid-drag commits like a release inside it.
    let on_pointer_leave = {
        let session = Rc::clone(&session);
        move |_ev: leptos::ev::PointerEvent| {
            if let Some(session) = session.borrow_mut().as_mut() {
                let actions = session.on_pointer_leave();
                apply_actions(session, actions);
            }
        }
    };

    view! {
        <canvas
            class="canvas-host"
            node_ref=canvas_ref
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
