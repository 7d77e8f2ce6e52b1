//! Safe-area editor popup: launcher button, snapshot canvas, and controls.
//!
//! ARCHITECTURE
//! ============
//! The component owns one `editor::session::Editor` behind `Rc<RefCell<..>>`
//! and forwards DOM events to it. Loads and saves go through the editor's
//! two-phase API (`begin_*` / async step / `finish_*`) so no borrow is held
//! across an await. Keyboard and resize listeners are attached to the window
//! only while the popup is open.

use leptos::prelude::*;

use editor::session::{CameraId, CameraLink};

use crate::state::editor_ui::{EditorUiState, launcher_enabled, launcher_title};

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use editor::drawing::Action;
#[cfg(feature = "csr")]
use editor::input::{Button, Shortcut};
#[cfg(feature = "csr")]
use editor::render::paint_canvas;
#[cfg(feature = "csr")]
use editor::session::{Editor, EditorError, Outcome, SaveOutcome, load_session, save_session};
#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "csr")]
use leptos::leptos_dom::helpers::WindowListenerHandle;
#[cfg(feature = "csr")]
use web_sys::HtmlImageElement;

#[cfg(feature = "csr")]
use crate::net::api::{HttpBackend, fetch_camera_status, now_ms};
#[cfg(feature = "csr")]
use crate::util::canvas_input::{alert, confirm, key_shortcut, mouse_point, window_bounds};

#[cfg(feature = "csr")]
const CLEAR_ALL_PROMPT: &str = "Remove all safe areas for this camera?";
const HINT: &str = "Click to add points. Click the first point to close a polygon. Right-click removes the last point.";

/// Event glue between the popup's DOM and the editor.
#[cfg(feature = "csr")]
#[derive(Clone)]
struct Controller {
    editor: Rc<RefCell<Editor<HtmlImageElement>>>,
    listeners: Rc<RefCell<Vec<WindowListenerHandle>>>,
    ui: RwSignal<EditorUiState>,
    canvas_ref: NodeRef<leptos::html::Canvas>,
}

#[cfg(feature = "csr")]
impl Controller {
    fn new(ui: RwSignal<EditorUiState>, canvas_ref: NodeRef<leptos::html::Canvas>) -> Self {
        Self {
            editor: Rc::new(RefCell::new(Editor::default())),
            listeners: Rc::new(RefCell::new(Vec::new())),
            ui,
            canvas_ref,
        }
    }

    fn repaint(&self) {
        let Some(canvas) = self.canvas_ref.get_untracked() else {
            return;
        };
        if let Err(err) = paint_canvas(&self.editor.borrow(), &canvas) {
            log::error!("safe area repaint failed: {err:?}");
        }
    }

    fn apply(&self, action: Action) {
        if action.is_edit() {
            self.ui.update(EditorUiState::after_edit);
        }
        if action.needs_render() {
            self.repaint();
        }
    }

    fn edit(&self, f: impl FnOnce(&mut Editor<HtmlImageElement>) -> Action) {
        let action = f(&mut self.editor.borrow_mut());
        self.apply(action);
    }

    // --- Lifecycle ---

    fn open(&self, camera_id: CameraId, link: CameraLink) {
        let config = *self.editor.borrow().config();
        let (max_width, max_height) = window_bounds(&config);
        self.editor.borrow_mut().set_bounds(max_width, max_height);

        let opened = self.editor.borrow_mut().begin_open(camera_id, link);
        let ticket = match opened {
            Ok(ticket) => ticket,
            Err(EditorError::AlreadyOpen(_)) => return,
            Err(err) => {
                let mut message = String::new();
                self.ui.update(|s| message = s.open_failed(&err));
                alert(&message);
                return;
            }
        };
        self.ui.update(|s| s.loading(&ticket.camera_id));
        self.attach_listeners();

        let this = self.clone();
        leptos::task::spawn_local(async move {
            let loaded = load_session(&HttpBackend, &ticket, now_ms()).await;
            let finished = this.editor.borrow_mut().finish_open(&ticket, loaded);
            match finished {
                Ok(Outcome::Applied(())) => {
                    this.ui.update(EditorUiState::ready);
                    this.repaint();
                }
                Ok(Outcome::Stale) => {}
                Err(err) => {
                    log::warn!("safe area editor failed to open camera={}: {err}", ticket.camera_id);
                    this.detach_listeners();
                    let mut message = String::new();
                    this.ui.update(|s| message = s.open_failed(&err));
                    alert(&message);
                }
            }
        });
    }

    fn save(&self) {
        let Some(ticket) = self.editor.borrow_mut().begin_save() else {
            return;
        };
        self.ui.update(EditorUiState::saving);
        self.repaint();

        let this = self.clone();
        leptos::task::spawn_local(async move {
            let result = save_session(&HttpBackend, &ticket).await;
            let outcome = this.editor.borrow_mut().finish_save(&ticket, result);
            match outcome {
                Outcome::Stale => {
                    log::debug!("discarding save result for closed editor camera={}", ticket.camera_id);
                }
                Outcome::Applied(SaveOutcome::Saved { close_after_ms, generation }) => {
                    this.ui.update(|s| s.saved(ticket.safe_areas.len()));
                    let closer = this.clone();
                    Timeout::new(close_after_ms, move || {
                        if closer.editor.borrow_mut().close_if_saved(generation) {
                            closer.closed();
                        }
                    })
                    .forget();
                }
                Outcome::Applied(SaveOutcome::Failed(message)) => {
                    this.ui.update(|s| s.save_failed(&message));
                }
            }
        });
    }

    fn cancel(&self) {
        self.editor.borrow_mut().cancel();
        self.closed();
    }

    fn closed(&self) {
        self.detach_listeners();
        self.ui.update(EditorUiState::close);
    }

    // --- Controls ---

    fn new_polygon(&self) {
        self.edit(Editor::new_polygon);
    }

    fn undo(&self) {
        self.edit(Editor::secondary_click);
    }

    fn clear_all(&self) {
        if self.editor.borrow().session().is_none() {
            return;
        }
        if confirm(CLEAR_ALL_PROMPT) {
            self.edit(Editor::clear_all);
        }
    }

    fn on_key(&self, ev: &leptos::ev::KeyboardEvent) {
        let Some(shortcut) = key_shortcut(ev) else {
            return;
        };
        ev.prevent_default();
        match shortcut {
            Shortcut::Cancel => self.cancel(),
            Shortcut::Save => self.save(),
            Shortcut::UndoVertex => self.undo(),
            Shortcut::NewPolygon => self.new_polygon(),
        }
    }

    fn on_resize(&self) {
        let config = *self.editor.borrow().config();
        let (max_width, max_height) = window_bounds(&config);
        let action = self.editor.borrow_mut().set_bounds(max_width, max_height);
        if action.needs_render() {
            self.repaint();
        }
    }

    // --- Window listeners ---

    fn attach_listeners(&self) {
        self.detach_listeners();
        let on_key = self.clone();
        let keydown = window_event_listener(leptos::ev::keydown, move |ev| on_key.on_key(&ev));
        let on_resize = self.clone();
        let resize = window_event_listener(leptos::ev::resize, move |_| on_resize.on_resize());
        self.listeners.borrow_mut().extend([keydown, resize]);
    }

    fn detach_listeners(&self) {
        let handles: Vec<WindowListenerHandle> = self.listeners.borrow_mut().drain(..).collect();
        for handle in handles {
            handle.remove();
        }
    }
}

#[cfg(feature = "csr")]
fn on_click(controller: &Controller, f: fn(&Controller)) -> impl Fn(leptos::ev::MouseEvent) + 'static + use<> {
    let controller = controller.clone();
    move |_ev| f(&controller)
}

/// Launcher and popup for editing one camera's safe areas.
///
/// `link` is the last known camera status. Every launch re-probes it and
/// writes the result back, and a disconnected camera is refused without
/// opening the popup.
#[component]
pub fn SafeAreaEditor(camera_id: CameraId, link: RwSignal<CameraLink>) -> impl IntoView {
    let ui = expect_context::<RwSignal<EditorUiState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    let controller = Controller::new(ui, canvas_ref);

    let on_launch = {
        #[cfg(feature = "csr")]
        {
            let controller = controller.clone();
            move |_ev: leptos::ev::MouseEvent| {
                let controller = controller.clone();
                let camera_id = camera_id.clone();
                leptos::task::spawn_local(async move {
                    let status = fetch_camera_status(&camera_id).await;
                    link.set(status);
                    controller.open(camera_id, status);
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            drop(camera_id);
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_down = {
        #[cfg(feature = "csr")]
        {
            let controller = controller.clone();
            move |ev: leptos::ev::MouseEvent| {
                if Button::from_dom(ev.button()) != Button::Primary {
                    return;
                }
                let point = mouse_point(&ev);
                controller.edit(|editor| editor.primary_click(point));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_context_menu = {
        #[cfg(feature = "csr")]
        {
            let controller = controller.clone();
            move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                controller.undo();
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |ev: leptos::ev::MouseEvent| ev.prevent_default()
        }
    };

    let on_mouse_move = {
        #[cfg(feature = "csr")]
        {
            let controller = controller.clone();
            move |ev: leptos::ev::MouseEvent| {
                let point = mouse_point(&ev);
                controller.edit(|editor| editor.pointer_move(point));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_leave = {
        #[cfg(feature = "csr")]
        {
            let controller = controller.clone();
            move |_ev: leptos::ev::MouseEvent| controller.edit(Editor::pointer_leave)
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    #[cfg(feature = "csr")]
    let (on_new_polygon, on_undo, on_clear_all, on_save, on_cancel) = (
        on_click(&controller, Controller::new_polygon),
        on_click(&controller, Controller::undo),
        on_click(&controller, Controller::clear_all),
        on_click(&controller, Controller::save),
        on_click(&controller, Controller::cancel),
    );
    #[cfg(not(feature = "csr"))]
    let (on_new_polygon, on_undo, on_clear_all, on_save, on_cancel) = {
        let noop = |_ev: leptos::ev::MouseEvent| {};
        (noop, noop, noop, noop, noop)
    };

    let busy = move || ui.with(|s| s.busy);
    let backdrop_class = move || {
        if ui.with(|s| s.open) {
            "safe-area-backdrop safe-area-backdrop--open"
        } else {
            "safe-area-backdrop"
        }
    };
    let title = move || {
        ui.with(|s| match &s.camera_id {
            Some(camera_id) => format!("Safe areas: {camera_id}"),
            None => "Safe areas".to_owned(),
        })
    };

    view! {
        <button
            class="btn safe-area-launcher"
            title=move || launcher_title(link.get())
            disabled=move || !ui.with(|s| launcher_enabled(link.get(), s))
            on:click=on_launch
        >
            "Edit safe areas"
        </button>
        <div class=backdrop_class>
            <div class="safe-area-popup" role="dialog" aria-modal="true">
                <header class="safe-area-popup__title">{title}</header>
                <canvas
                    class="safe-area-canvas"
                    node_ref=canvas_ref
                    on:mousedown=on_mouse_down
                    on:contextmenu=on_context_menu
                    on:mousemove=on_mouse_move
                    on:mouseleave=on_mouse_leave
                >
                    "Your browser does not support canvas."
                </canvas>
                <p class="safe-area-hint">{HINT}</p>
                <div class=move || ui.with(|s| s.status.class())>
                    {move || ui.with(|s| s.status.text().unwrap_or_default().to_owned())}
                </div>
                <div class="safe-area-popup__actions">
                    <button class="btn" disabled=busy on:click=on_new_polygon title="Shortcut: N">
                        "New polygon"
                    </button>
                    <button class="btn" disabled=busy on:click=on_undo title="Shortcut: Backspace">
                        "Undo point"
                    </button>
                    <button class="btn btn--danger" disabled=busy on:click=on_clear_all>
                        "Clear all"
                    </button>
                    <span class="safe-area-popup__spacer"></span>
                    <button class="btn" on:click=on_cancel title="Shortcut: Escape">
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=busy on:click=on_save title="Shortcut: Enter">
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
