//! Board DragDrop
//!
//! Mouse-event drag-and-drop for the board columns, using a movement
//! threshold to distinguish click from drag.
//!
//! Gesture lifecycle: mousedown records a pending pick-up; once the
//! pointer moves past the threshold the gesture becomes an active drag
//! tracking a tentative drop target; the global mouseup either commits
//! (source + target resolved into exactly one reducer operation, see
//! [`resolve_drop`]) or cancels with no state change.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

mod resolve;

pub use resolve::{resolve_drop, DropOp};

/// Composite identity of a grabbed item: which list it currently lives
/// in, and which item it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemRef {
    pub list_id: String,
    pub item_id: String,
}

/// Tentative drop target, recomputed as the pointer moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Over a column but not over any row: append at the end of that list.
    List(String),
    /// Over a specific row: take that row's position.
    Item { list_id: String, item_id: String },
}

/// DnD state signals. At most one gesture is active at a time.
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging: ReadSignal<Option<ItemRef>>,
    dragging_write: WriteSignal<Option<ItemRef>>,
    pub drop_target: ReadSignal<Option<DropTarget>>,
    drop_target_write: WriteSignal<Option<DropTarget>>,
    /// Set briefly after a drop so the click synthesized by the browser
    /// does not trigger row actions.
    pub drag_just_ended: ReadSignal<bool>,
    drag_just_ended_write: WriteSignal<bool>,
    /// Pending pick-up (mousedown but below the movement threshold).
    pending: ReadSignal<Option<ItemRef>>,
    pending_write: WriteSignal<Option<ItemRef>>,
    start_x: ReadSignal<i32>,
    start_x_write: WriteSignal<i32>,
    start_y: ReadSignal<i32>,
    start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels before a pick-up becomes a drag.
const DRAG_THRESHOLD_PX: i32 = 8;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging, dragging_write) = signal(None::<ItemRef>);
    let (drop_target, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended, drag_just_ended_write) = signal(false);
    let (pending, pending_write) = signal(None::<ItemRef>);
    let (start_x, start_x_write) = signal(0i32);
    let (start_y, start_y_write) = signal(0i32);
    DndSignals {
        dragging,
        dragging_write,
        drop_target,
        drop_target_write,
        drag_just_ended,
        drag_just_ended_write,
        pending,
        pending_write,
        start_x,
        start_x_write,
        start_y,
        start_y_write,
    }
}

/// Reset to Idle. Latches `drag_just_ended` for 100ms to swallow the
/// trailing click.
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            100,
        );
        cb.forget();
    }
}

/// Mousedown handler for a row's drag handle: records a pending pick-up.
/// Ignored while another gesture is active, and when the press lands on
/// an input or button inside the row.
pub fn make_on_mousedown(
    dnd: DndSignals,
    list_id: String,
    item_id: String,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if dnd.dragging.get_untracked().is_some() {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                return;
            }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                return;
            }
        }
        dnd.pending_write.set(Some(ItemRef {
            list_id: list_id.clone(),
            item_id: item_id.clone(),
        }));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Global mousemove: promotes a pending pick-up to an active drag once
/// the pointer has moved past the threshold.
fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending.get_untracked();
        if pending.is_some() && dnd.dragging.get_untracked().is_none() {
            let dx = (ev.client_x() - dnd.start_x.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y.get_untracked()).abs();
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc
                .add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Mouseenter handler for a row: retargets the drop onto that row's
/// position. Dropping an item onto itself is not a target.
pub fn make_on_item_mouseenter(
    dnd: DndSignals,
    list_id: String,
    item_id: String,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(active) = dnd.dragging.get_untracked() {
            if active.item_id != item_id {
                dnd.drop_target_write.set(Some(DropTarget::Item {
                    list_id: list_id.clone(),
                    item_id: item_id.clone(),
                }));
            }
        }
    }
}

/// Mouseenter handler for a column body: append-at-end target.
pub fn make_on_list_mouseenter(
    dnd: DndSignals,
    list_id: String,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::List(list_id.clone())));
        }
    }
}

/// Mouseleave handler: leaving a drop surface clears the target, so a
/// drop outside any surface cancels the gesture.
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind the global mouseup (commit/cancel) and mousemove handlers.
///
/// `on_drop` runs exactly once per committed gesture, with the source
/// identity and the resolved target.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(ItemRef, DropTarget) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging.get_untracked();
        let target = dnd.drop_target.get_untracked();

        dnd.pending_write.set(None);

        if let (Some(source), Some(target)) = (dragging, target) {
            end_drag(&dnd);
            on_drop(source, target);
        } else {
            // No target (or never left the threshold): plain cancel.
            end_drag(&dnd);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc
                .add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}
