//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Generic over the dragged key `K` (e.g. a record id) and the drop
//! target `T` (e.g. a board column).

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Result of a finished drag, handed to the drop callback.
///
/// `over` is `None` when the pointer was released outside every target.
#[derive(Clone, Debug, PartialEq)]
pub struct DragEnd<K, T> {
    pub dragged: K,
    pub over: Option<T>,
}

/// DnD state signals
pub struct DndSignals<K: 'static, T: 'static> {
    pub dragging_id_read: ReadSignal<Option<K>>,
    pub dragging_id_write: WriteSignal<Option<K>>,
    pub drop_target_read: ReadSignal<Option<T>>,
    pub drop_target_write: WriteSignal<Option<T>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending key (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<K>>,
    pub pending_id_write: WriteSignal<Option<K>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

impl<K: 'static, T: 'static> Clone for DndSignals<K, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: 'static, T: 'static> Copy for DndSignals<K, T> {}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long `drag_just_ended` stays raised, so the trailing click can be ignored
const DRAG_END_CLICK_GUARD_MS: u32 = 100;

/// Whether the primary button is down, from `MouseEvent::buttons()`
pub fn primary_button_held(buttons: u16) -> bool {
    buttons & 1 != 0
}

/// Whether the pointer moved far enough from `start` to count as a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

pub fn create_dnd_signals<K, T>() -> DndSignals<K, T>
where
    K: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    let (dragging_id_read, dragging_id_write) = signal(None::<K>);
    let (drop_target_read, drop_target_write) = signal(None::<T>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<K>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_read,
        start_write,
    }
}

/// End drag operation
pub fn end_drag<K, T>(dnd: &DndSignals<K, T>)
where
    K: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    let clear = dnd.drag_just_ended_write;
    gloo_timers::callback::Timeout::new(DRAG_END_CLICK_GUARD_MS, move || clear.set(false)).forget();
}

/// Create mousedown handler for draggable elements
/// Records pending drag with start position
pub fn make_on_mousedown<K, T>(dnd: DndSignals<K, T>, key: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_id_write.set(Some(key.clone()));
            dnd.start_write.set((ev.client_x(), ev.client_y()));
        }
    }
}

/// Create mouseenter handler for a drop target
pub fn make_on_target_mouseenter<K, T>(dnd: DndSignals<K, T>, target: T) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.with_untracked(Option::is_some) {
            dnd.drop_target_write.set(Some(target.clone()));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<K, T>(dnd: DndSignals<K, T>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.with_untracked(Option::is_some) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind window mousemove/mouseup handlers for drag start and drop detection.
///
/// `on_drop` fires once per real drag (not for plain clicks), with or
/// without a target. Listeners are removed when the owning scope is cleaned up.
pub fn bind_global_handlers<K, T, F>(dnd: DndSignals<K, T>, on_drop: F)
where
    K: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
    F: Fn(DragEnd<K, T>) + 'static,
{
    let mousemove = window_event_listener(ev::mousemove, move |ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.with_untracked(Option::is_some) {
            return;
        }
        // Pending drag that hasn't started yet
        let Some(pending) = dnd.pending_id_read.get_untracked() else { return };
        // Button was released outside the window; mouseup never reached us
        if !primary_button_held(ev.buttons()) {
            dnd.pending_id_write.set(None);
            return;
        }
        if exceeds_threshold(dnd.start_read.get_untracked(), (ev.client_x(), ev.client_y())) {
            dnd.dragging_id_write.set(Some(pending));
        }
    });

    let mouseup = window_event_listener(ev::mouseup, move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_id_read.get_untracked();
        let over = dnd.drop_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_id_write.set(None);

        // Not dragging: the click event will fire naturally on the element
        if let Some(dragged) = dragging {
            end_drag(&dnd);
            on_drop(DragEnd { dragged, over });
        }
    });

    on_cleanup(move || {
        mousemove.remove();
        mouseup.remove();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_movement_is_a_click() {
        assert!(!exceeds_threshold((100, 100), (103, 96)));
        assert!(!exceeds_threshold((100, 100), (105, 105)));
    }

    #[test]
    fn test_primary_button_mask() {
        assert!(primary_button_held(1));
        assert!(primary_button_held(1 | 2));
        assert!(!primary_button_held(0));
        assert!(!primary_button_held(2));
    }

    #[test]
    fn test_movement_past_threshold_starts_drag() {
        assert!(exceeds_threshold((100, 100), (106, 100)));
        assert!(exceeds_threshold((100, 100), (100, 90)));
    }
}
