//! VerticalScroller - binds a pool of row slots to the items under the viewport

use super::config::{ScrollerConfig, DEFAULT_BOTTOM_EPSILON};
use super::error::SetupError;
use super::host::{ItemSource, ScrollSurface, SlotTemplate, SlotView};
use super::layout::LayoutTable;
use super::pool::{required_slot_count, Slot, ViewPool};
use super::types::{ItemIndex, SlotFrame};
use super::window::resolve_window_start;
use tracing::{debug, error, info, trace};

/// Lifecycle of a [`VerticalScroller`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollerState {
    /// Host resources missing, or torn down. Every operation is a no-op.
    Uninitialized,
    /// Tables, pool and bindings match the current data.
    Idle,
    /// A data reset is rebuilding tables and pool.
    PendingLayout,
    /// A data reset is waiting for the viewport to report a usable width.
    ///
    /// Polled on every [`VerticalScroller::tick`].
    PendingMeasure {
        /// Whether to scroll to the bottom once the reset completes.
        keep_bottom: bool,
    },
}

/// How much rebinding a refresh pass should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rebind {
    /// Only when the window start moved.
    IfMoved,
    /// Walk the slots even if the window start is unchanged; fill changed slots only.
    Stale,
    /// Walk the slots and fill every bound one.
    Force,
}

#[derive(Debug)]
struct Host<S, T> {
    surface: S,
    template: T,
}

/// Variable-height virtualized vertical list.
///
/// Owns the offset/height tables and a pool of row slots sized to the
/// viewport plus overscan. On every refresh it maps slot `s` to item
/// `window_start + s` and calls [`ItemSource::fill`] only for slots whose
/// item changed, so fill work is proportional to the number of rows that
/// scrolled in rather than to pool size or item count.
///
/// # Example
///
/// ```
/// use vscroll::scroller::{FnSource, ScrollerConfig, VerticalScroller};
/// # use vscroll::scroller::{ScrollSurface, SlotFrame, SlotIndex, SlotTemplate, SlotView, ViewportSize};
/// # #[derive(Debug, Default)] struct Surface { top: usize, extent: usize }
/// # impl ScrollSurface for Surface {
/// #     fn viewport_size(&self) -> ViewportSize { ViewportSize::new(320, 480) }
/// #     fn scroll_top(&self) -> usize { self.top }
/// #     fn set_scroll_top(&mut self, offset: usize) { self.top = offset }
/// #     fn set_content_extent(&mut self, extent: usize) { self.extent = extent }
/// # }
/// # #[derive(Debug)] struct Row;
/// # impl SlotView for Row { fn set_active(&mut self, _: bool) {} fn place(&mut self, _: SlotFrame) {} }
/// # #[derive(Debug)] struct Template;
/// # impl SlotTemplate for Template { type View = Row; fn instantiate(&mut self, _: SlotIndex) -> Row { Row } }
///
/// let mut scroller = VerticalScroller::setup(
///     ScrollerConfig::default(),
///     Some(Surface::default()),
///     Some(Template),
/// );
/// let mut fills = 0;
/// let mut source = FnSource::new(|_, _| 48, |_, _: &mut Row| fills += 1);
///
/// scroller.set_data(100, false, &mut source);
/// assert_eq!(scroller.pool_len(), 13);
/// assert_eq!(scroller.content_extent(), 5414);
/// drop(source);
/// assert_eq!(fills, 13);
/// ```
#[derive(Debug)]
pub struct VerticalScroller<S, T>
where
    S: ScrollSurface,
    T: SlotTemplate,
{
    config: ScrollerConfig,
    state: ScrollerState,
    setup_error: Option<SetupError>,
    host: Option<Host<S, T>>,
    layout: LayoutTable,
    pool: ViewPool<T::View>,
    count: usize,
    /// Item bound to slot 0 by the last rebind pass.
    window_start: Option<ItemIndex>,
    /// Width the height table was measured at.
    measured_width: Option<u32>,
    /// Viewport height the pool was sized for.
    last_container_height: Option<u32>,
}

impl<S, T> VerticalScroller<S, T>
where
    S: ScrollSurface,
    T: SlotTemplate,
{
    /// Set up a scroller over the host's surface and row template.
    ///
    /// If either resource is missing the error is logged, the scroller
    /// stays [`ScrollerState::Uninitialized`] and every operation is a no-op.
    pub fn setup(config: ScrollerConfig, surface: Option<S>, template: Option<T>) -> Self {
        let mut scroller = Self {
            config,
            state: ScrollerState::Uninitialized,
            setup_error: None,
            host: None,
            layout: LayoutTable::new(config.layout),
            pool: ViewPool::new(),
            count: 0,
            window_start: None,
            measured_width: None,
            last_container_height: None,
        };

        match (surface, template) {
            (Some(mut surface), Some(template)) => {
                surface.set_content_extent(scroller.layout.content_extent());
                scroller.host = Some(Host { surface, template });
                scroller.state = ScrollerState::Idle;
                info!(config = ?config, "VerticalScroller initialized");
            }
            (None, _) => scroller.fail_setup(SetupError::MissingSurface),
            (Some(_), None) => scroller.fail_setup(SetupError::MissingTemplate),
        }

        scroller
    }

    fn fail_setup(&mut self, err: SetupError) {
        error!("{err}");
        self.setup_error = Some(err);
    }

    // === Data ===

    /// Replace the data with `count` items.
    ///
    /// Rebuilds the whole height/offset table, resizes the pool if its
    /// required length changed and rebinds every slot. If the viewport has no
    /// usable width yet the work is deferred until a [`tick`](Self::tick)
    /// observes one.
    pub fn set_data<Src>(&mut self, count: usize, keep_bottom: bool, source: &mut Src)
    where
        Src: ItemSource<T::View>,
    {
        if !self.is_initialized() {
            return;
        }

        self.state = ScrollerState::PendingLayout;
        self.count = count;
        self.window_start = None;

        if count == 0 {
            self.clear_items();
            self.state = ScrollerState::Idle;
            return;
        }

        let Some(host) = self.host.as_ref() else {
            return;
        };
        if !host.surface.viewport_size().has_measurable_width() {
            debug!(count, "Viewport width unavailable, deferring layout");
            // nothing from the previous data may stay on screen
            self.clear_items();
            self.state = ScrollerState::PendingMeasure { keep_bottom };
            return;
        }

        self.complete_reset(keep_bottom, source);
    }

    /// Append one item using the latest height query.
    ///
    /// Extends the tables by one entry instead of rebuilding them. If the
    /// viewport was at the bottom it follows the new item; otherwise the
    /// scroll position is left alone.
    pub fn append_one<Src>(&mut self, source: &mut Src)
    where
        Src: ItemSource<T::View>,
    {
        match self.state {
            ScrollerState::Uninitialized => return,
            ScrollerState::PendingMeasure { .. } => {
                // picked up by the deferred reset
                self.count += 1;
                return;
            }
            ScrollerState::Idle | ScrollerState::PendingLayout => {}
        }

        if self.count == 0 {
            self.set_data(1, true, source);
            return;
        }

        let was_at_bottom = self.is_at_bottom(DEFAULT_BOTTOM_EPSILON);
        let Some(host) = self.host.as_mut() else {
            return;
        };

        let width = self
            .measured_width
            .unwrap_or_else(|| host.surface.viewport_size().width);
        let index = ItemIndex::new(self.count);
        let raw_height = source.height_of(index, width);
        self.layout.push(raw_height);
        self.count += 1;
        host.surface.set_content_extent(self.layout.content_extent());

        self.resize_pool();

        if was_at_bottom {
            self.scroll_to_bottom(source);
        } else {
            self.refresh(Rebind::Stale, source);
        }
    }

    fn clear_items(&mut self) {
        self.layout.clear();
        if let Some(host) = self.host.as_mut() {
            self.pool.dispose(&mut host.template);
            host.surface.set_content_extent(self.layout.content_extent());
            host.surface.set_scroll_top(0);
        }
    }

    /// Finish a data reset once the viewport width is usable.
    fn complete_reset<Src>(&mut self, keep_bottom: bool, source: &mut Src)
    where
        Src: ItemSource<T::View>,
    {
        let Some(host) = self.host.as_mut() else {
            return;
        };

        let size = host.surface.viewport_size();
        if self.measured_width != Some(size.width) {
            source.invalidate_heights();
        }
        self.measured_width = Some(size.width);
        self.last_container_height = Some(size.height);

        let width = size.width;
        self.layout
            .rebuild(self.count, |index| source.height_of(index, width));
        host.surface.set_content_extent(self.layout.content_extent());
        debug!(
            count = self.count,
            width,
            extent = self.layout.content_extent(),
            "Layout rebuilt"
        );

        self.resize_pool();
        self.state = ScrollerState::Idle;
        self.window_start = None;

        if keep_bottom {
            self.scroll_to_bottom(source);
        } else {
            self.refresh(Rebind::Force, source);
        }
    }

    fn resize_pool(&mut self) -> bool {
        let Some(host) = self.host.as_mut() else {
            return false;
        };

        let size = host.surface.viewport_size();
        let average = self.config.average_item_height(host.template.row_height());
        let desired = required_slot_count(size.height, average, self.config.overscan, self.count);
        let rebuilt = self.pool.resize(desired, &mut host.template);
        if rebuilt {
            self.window_start = None;
        }
        rebuilt
    }

    // === Per-frame refresh ===

    /// Per-frame update.
    ///
    /// Completes a deferred reset once the width is usable, rebuilds heights
    /// when the measurement width changed, resizes the pool when the viewport
    /// height changed, and otherwise rebinds only if the window start moved.
    pub fn tick<Src>(&mut self, source: &mut Src)
    where
        Src: ItemSource<T::View>,
    {
        let size = match (&self.state, self.host.as_ref()) {
            (ScrollerState::Uninitialized, _) | (_, None) => return,
            (_, Some(host)) => host.surface.viewport_size(),
        };

        if let ScrollerState::PendingMeasure { keep_bottom } = self.state {
            if size.has_measurable_width() {
                debug!(
                    width = size.width,
                    "Viewport width available, completing layout"
                );
                self.complete_reset(keep_bottom, source);
            }
            return;
        }

        if self.count == 0 || !size.has_measurable_width() {
            return;
        }

        if self.measured_width != Some(size.width) {
            self.remeasure(size.width, source);
        }

        if self.last_container_height != Some(size.height) {
            debug!(height = size.height, "Viewport height changed");
            self.last_container_height = Some(size.height);
            self.resize_pool();
            self.window_start = None;
            self.refresh(Rebind::Force, source);
            return;
        }

        self.refresh(Rebind::IfMoved, source);
    }

    /// Scroll-change event: rebind only if the window start moved.
    pub fn on_scroll<Src>(&mut self, source: &mut Src)
    where
        Src: ItemSource<T::View>,
    {
        if self.state == ScrollerState::Idle {
            self.refresh(Rebind::IfMoved, source);
        }
    }

    /// Rebuild every height at a new measurement width.
    fn remeasure<Src>(&mut self, width: u32, source: &mut Src)
    where
        Src: ItemSource<T::View>,
    {
        let was_at_bottom = self.is_at_bottom(DEFAULT_BOTTOM_EPSILON);
        let Some(host) = self.host.as_mut() else {
            return;
        };

        debug!(
            from = ?self.measured_width,
            to = width,
            "Measurement width changed, rebuilding heights"
        );
        source.invalidate_heights();
        self.measured_width = Some(width);
        self.layout
            .rebuild(self.count, |index| source.height_of(index, width));
        host.surface.set_content_extent(self.layout.content_extent());
        if was_at_bottom {
            let bottom = self.max_scroll();
            if let Some(host) = self.host.as_mut() {
                host.surface.set_scroll_top(bottom);
            }
        }

        // force the pool/rebind path below
        self.last_container_height = None;
    }

    fn refresh<Src>(&mut self, mode: Rebind, source: &mut Src)
    where
        Src: ItemSource<T::View>,
    {
        let Some(host) = self.host.as_ref() else {
            return;
        };
        if self.pool.is_empty() || self.layout.is_empty() {
            return;
        }

        let scroll_top = host.surface.scroll_top();
        let start = resolve_window_start(&self.layout, scroll_top, self.config.overscan);
        if mode == Rebind::IfMoved && self.window_start == Some(start) {
            return;
        }
        self.window_start = Some(start);

        let force = mode == Rebind::Force;
        let mut fills = 0usize;
        for (slot_number, slot) in self.pool.slots_mut().iter_mut().enumerate() {
            let index = start.offset_by(slot_number);
            let (Some(top), Some(height)) = (self.layout.offset(index), self.layout.height(index))
            else {
                slot.deactivate();
                continue;
            };

            slot.activate();
            slot.view_mut().place(SlotFrame::new(top, height));

            if slot.bind(index) || force {
                source.fill(index, slot.view_mut());
                fills += 1;
            }
        }

        trace!(start = start.get(), scroll_top, ?mode, fills, "Rebound slots");
    }

    // === Scrolling ===

    /// Scroll to the bottom-most position and rebind every slot.
    pub fn scroll_to_bottom<Src>(&mut self, source: &mut Src)
    where
        Src: ItemSource<T::View>,
    {
        if self.state != ScrollerState::Idle || self.count == 0 {
            return;
        }

        let bottom = self.max_scroll();
        if let Some(host) = self.host.as_mut() {
            host.surface.set_scroll_top(bottom);
        }
        self.refresh(Rebind::Force, source);
    }

    /// Whether the scroll position is within `epsilon` of the bottom.
    ///
    /// Always true for an empty or uninitialized list. While a reset is
    /// pending the last completed layout is used.
    pub fn is_at_bottom(&self, epsilon: usize) -> bool {
        let Some(host) = self.host.as_ref() else {
            return true;
        };
        if !self.is_initialized() || self.count == 0 {
            return true;
        }

        host.surface.scroll_top().saturating_add(epsilon) >= self.max_scroll()
    }

    /// Largest meaningful scroll offset.
    pub fn max_scroll(&self) -> usize {
        let viewport_height = self
            .host
            .as_ref()
            .map_or(0, |host| host.surface.viewport_size().height as usize);
        self.layout.content_extent().saturating_sub(viewport_height)
    }

    // === Teardown ===

    /// Stop any pending layout poll and release every row handle.
    ///
    /// The scroller is uninitialized afterwards.
    pub fn teardown(&mut self) {
        if let Some(host) = self.host.as_mut() {
            if !self.pool.is_empty() {
                debug!(slots = self.pool.len(), "Releasing view pool");
            }
            self.pool.dispose(&mut host.template);
        }
        self.state = ScrollerState::Uninitialized;
        self.window_start = None;
    }

    // === Queries ===

    /// Whether setup succeeded and the scroller has not been torn down.
    pub fn is_initialized(&self) -> bool {
        self.host.is_some() && self.state != ScrollerState::Uninitialized
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ScrollerState {
        self.state
    }

    /// Error recorded at setup, if any.
    pub fn setup_error(&self) -> Option<SetupError> {
        self.setup_error
    }

    /// Number of items. Zero when uninitialized.
    pub fn items_count(&self) -> usize {
        if self.is_initialized() {
            self.count
        } else {
            0
        }
    }

    /// Current viewport width, 0 when there is no surface.
    pub fn viewport_width(&self) -> u32 {
        self.host
            .as_ref()
            .map_or(0, |host| host.surface.viewport_size().width)
    }

    /// Item bound to slot 0 by the last rebind.
    pub fn window_start(&self) -> Option<ItemIndex> {
        self.window_start
    }

    /// Number of pooled slots.
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Pooled slots in order.
    pub fn slots(&self) -> &[Slot<T::View>] {
        self.pool.slots()
    }

    /// Offset and height tables.
    pub fn layout(&self) -> &LayoutTable {
        &self.layout
    }

    /// Total content extent of the last completed layout.
    pub fn content_extent(&self) -> usize {
        self.layout.content_extent()
    }

    /// Configuration in use.
    pub fn config(&self) -> &ScrollerConfig {
        &self.config
    }

    /// Host surface.
    pub fn surface(&self) -> Option<&S> {
        self.host.as_ref().map(|host| &host.surface)
    }

    /// Host surface, for hosts that forward scroll input and resizes.
    ///
    /// Call [`on_scroll`](Self::on_scroll) or [`tick`](Self::tick) afterwards.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.host.as_mut().map(|host| &mut host.surface)
    }

    /// Row template.
    pub fn template(&self) -> Option<&T> {
        self.host.as_ref().map(|host| &host.template)
    }
}

impl<S, T> Drop for VerticalScroller<S, T>
where
    S: ScrollSurface,
    T: SlotTemplate,
{
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "vertical_tests.rs"]
mod tests;
