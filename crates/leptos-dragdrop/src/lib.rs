//! Leptos DragDrop Utilities
//!
//! Native HTML5 drag-and-drop for Leptos. The dragged item's id travels in
//! the DataTransfer payload; a pair of signals tracks drag state so rows can
//! style themselves while a drag is in flight.

use leptos::prelude::*;
use web_sys::DragEvent;

/// DataTransfer key carrying the dragged item's id
pub const DRAG_SOURCE_KEY: &str = "source_task_id";

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Item currently hovered as a drop target
    pub hover_target_read: ReadSignal<Option<u32>>,
    pub hover_target_write: WriteSignal<Option<u32>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (hover_target_read, hover_target_write) = signal(None::<u32>);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        hover_target_read,
        hover_target_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.hover_target_write.set(None);
}

/// Encode an item id for the DataTransfer payload
pub fn encode_drag_source(id: u32) -> String {
    id.to_string()
}

/// Parse an item id back out of the DataTransfer payload
pub fn parse_drag_source(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Whether dropping `source` onto `target` moves anything.
/// Dropping an item onto itself is a no-op.
pub fn should_reparent(source: u32, target: u32) -> bool {
    source != target
}

/// Read the dragged item's id out of a drop event
pub fn drag_source(ev: &DragEvent) -> Option<u32> {
    let data = ev.data_transfer()?.get_data(DRAG_SOURCE_KEY).ok()?;
    parse_drag_source(&data)
}

/// Create dragstart handler for draggable items
pub fn make_on_dragstart(dnd: DndSignals, item_id: u32) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            let _ = transfer.set_data(DRAG_SOURCE_KEY, &encode_drag_source(item_id));
        }
        dnd.dragging_id_write.set(Some(item_id));
    }
}

/// Create dragover handler for drop targets.
/// Must prevent the default or the browser refuses the drop.
pub fn make_on_dragover(dnd: DndSignals, item_id: u32) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        // Don't highlight the item being dragged as its own target
        if dnd.dragging_id_read.get_untracked() != Some(item_id) {
            dnd.hover_target_write.set(Some(item_id));
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        dnd.hover_target_write.set(None);
    }
}

/// Create dragend handler (fires on the source however the drag finishes)
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        end_drag(&dnd);
    }
}

/// Create drop handler. Reads the payload, guards self-drops, and hands
/// `(source_id, target_id)` to `on_reparent`.
pub fn make_on_drop<F>(
    dnd: DndSignals,
    item_id: u32,
    on_reparent: F,
) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn(u32, u32) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        end_drag(&dnd);
        if let Some(source_id) = drag_source(&ev) {
            if should_reparent(source_id, item_id) {
                on_reparent(source_id, item_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_round_trips() {
        assert_eq!(parse_drag_source(&encode_drag_source(42)), Some(42));
    }

    #[test]
    fn payload_rejects_garbage() {
        assert_eq!(parse_drag_source(""), None);
        assert_eq!(parse_drag_source("not-an-id"), None);
        assert_eq!(parse_drag_source("-3"), None);
    }

    #[test]
    fn self_drop_is_a_noop() {
        assert!(!should_reparent(3, 3));
        assert!(should_reparent(5, 2));
    }
}
