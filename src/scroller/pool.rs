//! ViewPool - fixed-size arena of reusable row slots

use super::host::{SlotTemplate, SlotView};
use super::types::{ItemIndex, SlotIndex};
use tracing::debug;

/// Number of slots needed to cover the viewport plus overscan.
///
/// `ceil(viewport_height / average_item_height) + overscan`, at least 1 when
/// there are items, never more than `item_count`.
///
/// # Examples
///
/// ```
/// # use vscroll::scroller::pool::required_slot_count;
/// // 48 high rows plus 6 spacing in a 480 viewport, overscan 4
/// assert_eq!(required_slot_count(480, 54, 4, 100), 13);
/// assert_eq!(required_slot_count(480, 54, 4, 5), 5);
/// assert_eq!(required_slot_count(480, 54, 4, 0), 0);
/// ```
pub fn required_slot_count(
    viewport_height: u32,
    average_item_height: u32,
    overscan: usize,
    item_count: usize,
) -> usize {
    if item_count == 0 {
        return 0;
    }

    let average = average_item_height.max(1);
    let visible = viewport_height.div_ceil(average) as usize;
    visible.saturating_add(overscan).clamp(1, item_count)
}

/// A pool slot: one row handle plus the item it currently shows.
#[derive(Debug)]
pub struct Slot<V> {
    view: V,
    bound: Option<ItemIndex>,
    active: bool,
}

impl<V: SlotView> Slot<V> {
    fn new(view: V) -> Self {
        Self {
            view,
            bound: None,
            active: false,
        }
    }

    /// Item currently bound to this slot, `None` when unbound.
    pub fn bound(&self) -> Option<ItemIndex> {
        self.bound
    }

    /// Whether the row is shown.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Row handle.
    pub fn view(&self) -> &V {
        &self.view
    }

    pub(crate) fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Hide the row and forget its binding. The handle is kept.
    pub(crate) fn deactivate(&mut self) {
        self.bound = None;
        if self.active {
            self.active = false;
            self.view.set_active(false);
        }
    }

    pub(crate) fn activate(&mut self) {
        if !self.active {
            self.active = true;
            self.view.set_active(true);
        }
    }

    /// Record a new binding. Returns true if it differs from the previous one.
    pub(crate) fn bind(&mut self, index: ItemIndex) -> bool {
        let changed = self.bound != Some(index);
        self.bound = Some(index);
        changed
    }
}

/// Fixed-length arena of slots.
///
/// The pool is rebuilt wholesale when its length changes and slots are never
/// created or destroyed singly. Scrolling only rebinds existing slots.
#[derive(Debug)]
pub struct ViewPool<V> {
    slots: Vec<Slot<V>>,
}

impl<V: SlotView> ViewPool<V> {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Rebuild the pool with `desired` slots if its length differs.
    ///
    /// Every existing handle is released through `template` before the new
    /// ones are instantiated. Returns true if the pool was rebuilt.
    pub fn resize<T>(&mut self, desired: usize, template: &mut T) -> bool
    where
        T: SlotTemplate<View = V>,
    {
        if desired == self.slots.len() {
            return false;
        }

        debug!(
            from = self.slots.len(),
            to = desired,
            "Rebuilding view pool"
        );
        self.dispose(template);
        self.slots.reserve_exact(desired);
        for i in 0..desired {
            let mut view = template.instantiate(SlotIndex::new(i));
            view.set_active(false);
            self.slots.push(Slot::new(view));
        }
        true
    }

    /// Release every handle. The pool is empty afterwards.
    pub fn dispose<T>(&mut self, template: &mut T)
    where
        T: SlotTemplate<View = V>,
    {
        for slot in self.slots.drain(..) {
            template.release(slot.view);
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot at `index`.
    pub fn get(&self, index: SlotIndex) -> Option<&Slot<V>> {
        self.slots.get(index.get())
    }

    /// All slots in order.
    pub fn slots(&self) -> &[Slot<V>] {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Slot<V>] {
        &mut self.slots
    }
}

impl<V: SlotView> Default for ViewPool<V> {
    fn default() -> Self {
        Self::new()
    }
}
