use alloc::vec::Vec;
use core::fmt;

use crate::{
    ClassNames, EdgeFlags, GapProperty, GridHost, GridIndex, GridPosition, GridTopology,
    Notification, SelfAwareGridError, SelfAwareGridOptions,
};

/// Positional awareness for the children of a grid container.
///
/// The grid infers a row-major topology from measured geometry: a uniform tile width, the
/// container width and its column gap. From that it answers row/column membership, edge status
/// and neighbor lookups, and labels every child with classes reflecting its position.
///
/// Derived values are snapshots. After the container's children or size change, they stay stale
/// until [`SelfAwareGrid::setup_children`] (or a delivered [`Notification`]) recomputes them.
///
/// Call [`SelfAwareGrid::destroy`] when done; dropping the grid does the same.
pub struct SelfAwareGrid<H: GridHost> {
    host: H,
    options: SelfAwareGridOptions,
    class_names: ClassNames,

    children: Vec<H::Child>,
    width_override: Option<f32>,
    topology: GridTopology,

    observing_subtree: bool,
    observing_resize: bool,
    destroyed: bool,
}

impl<H: GridHost> SelfAwareGrid<H> {
    /// Attaches to the container represented by `host`.
    ///
    /// Marks the container, starts subtree observation and performs the initial
    /// [`SelfAwareGrid::setup_children`]. Resize observation is opt-in through
    /// [`SelfAwareGrid::begin_observing_resize`].
    pub fn new(host: H, options: SelfAwareGridOptions) -> Self {
        let class_names = ClassNames::new(&options.class_prefix);
        let width_override = options.min_child_width;
        let mut grid = Self {
            host,
            options,
            class_names,
            children: Vec::new(),
            width_override,
            topology: GridTopology::default(),
            observing_subtree: false,
            observing_resize: false,
            destroyed: false,
        };

        grid.host.add_container_class(grid.class_names.container());
        grid.host.observe_subtree();
        grid.observing_subtree = true;

        grid.setup_children(None);
        gdebug!(
            children = grid.topology.child_count,
            columns = grid.topology.column_count,
            rows = grid.topology.row_count,
            "SelfAwareGrid::new"
        );
        grid
    }

    pub fn options(&self) -> &SelfAwareGridOptions {
        &self.options
    }

    pub fn class_names(&self) -> &ClassNames {
        &self.class_names
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    ///
    /// Structural changes made here are not picked up until the next recomputation.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Re-snapshots the container's children, recomputes all grid values and relabels.
    ///
    /// The tile width is, in order: `min_child_width`, the last explicit width given (here or at
    /// construction), the measured width of the first child. Without children it is `0`.
    pub fn setup_children(&mut self, min_child_width: Option<f32>) {
        if min_child_width.is_some() {
            self.width_override = min_child_width;
        }
        self.children = self.host.children();
        self.topology.child_count = self.children.len();

        self.topology.min_child_width = match self.children.first() {
            Some(first) => self
                .width_override
                .unwrap_or_else(|| self.host.element_width(first)),
            None => 0.0,
        };

        self.measure_and_set_all_grid_values();
        self.assign_class_names();
    }

    /// Forgets any explicit tile width and re-runs [`SelfAwareGrid::setup_children`], measuring
    /// the first child again.
    pub fn clear_min_child_width(&mut self) {
        self.width_override = None;
        self.setup_children(None);
    }

    /// Recomputes gap widths, then column count, row count and gap counts, in that order.
    ///
    /// The child snapshot and tile width are reused as-is.
    pub fn measure_and_set_all_grid_values(&mut self) {
        self.set_measured_column_gap_width();
        self.set_measured_row_gap_width();
        self.set_calculated_column_count();
        self.set_calculated_row_count();
        self.set_calculated_column_gap_count();
        self.set_calculated_row_gap_count();
        gtrace!(
            columns = self.topology.column_count,
            rows = self.topology.row_count,
            column_gap = self.topology.column_gap_width,
            row_gap = self.topology.row_gap_width,
            "measure_and_set_all_grid_values"
        );
    }

    fn measured_gap(&self, grid_property: GapProperty, fallback: GapProperty) -> f32 {
        let finite = |v: &f32| v.is_finite();
        self.host
            .gap(grid_property)
            .filter(finite)
            .or_else(|| self.host.gap(fallback).filter(finite))
            .unwrap_or(0.0)
    }

    fn set_measured_column_gap_width(&mut self) {
        self.topology.column_gap_width =
            self.measured_gap(GapProperty::GridColumnGap, GapProperty::ColumnGap);
    }

    fn set_measured_row_gap_width(&mut self) {
        self.topology.row_gap_width =
            self.measured_gap(GapProperty::GridRowGap, GapProperty::RowGap);
    }

    /// `1 + floor((W - w) / (w + g))`: how many tiles and the gaps between them fit in `W`.
    ///
    /// An empty container, or a non-positive `w + g`, has no columns.
    fn set_calculated_column_count(&mut self) {
        let container_width = finite_or_zero(self.host.container_width());
        let tile_width = finite_or_zero(self.topology.min_child_width);
        let stride = tile_width + self.topology.column_gap_width;

        let items_across = if self.topology.child_count == 0 {
            0
        } else if stride > 0.0 {
            let fitting = (container_width - tile_width) / stride;
            if fitting.is_finite() {
                floor_to_index(fitting).saturating_add(1)
            } else {
                0
            }
        } else {
            0
        };

        self.topology.column_count = if self.options.allow_zero_columns {
            items_across
        } else {
            items_across.max(1)
        };
    }

    fn set_calculated_row_count(&mut self) {
        let columns = self.topology.column_count;
        self.topology.row_count = if columns > 0 {
            self.topology.child_count.div_ceil(columns.unsigned_abs()) as GridIndex
        } else {
            if self.topology.child_count > 0 {
                gwarn!(
                    columns,
                    children = self.topology.child_count,
                    "no columns fit; reporting zero rows"
                );
            }
            0
        };
    }

    fn set_calculated_column_gap_count(&mut self) {
        self.topology.column_gap_count = self.topology.column_count.saturating_sub(1);
    }

    fn set_calculated_row_gap_count(&mut self) {
        self.topology.row_gap_count = self.topology.row_count.saturating_sub(1);
    }

    /// Labels every child with the shared child class, its index class and its edge classes.
    ///
    /// Edge classes are added or removed to match the current topology, and index classes left
    /// over from an earlier position are removed.
    fn assign_class_names(&mut self) {
        let names = &self.class_names;
        for (index, child) in self.children.iter().enumerate() {
            let index_class = names.index(index);
            for class in self.host.class_names(child) {
                if names.parse_index(&class).is_some() && class != index_class {
                    self.host.remove_class(child, &class);
                }
            }
            self.host.add_class(child, names.child());
            self.host.add_class(child, &index_class);

            let edges = self.topology.edges(index as GridIndex);
            toggle_class(&mut self.host, child, names.top_row(), edges.top);
            toggle_class(&mut self.host, child, names.bottom_row(), edges.bottom);
            toggle_class(&mut self.host, child, names.left_column(), edges.left);
            toggle_class(&mut self.host, child, names.right_column(), edges.right);
        }
    }

    fn handle_resize(&mut self) {
        self.measure_and_set_all_grid_values();
        self.assign_class_names();
    }

    pub fn is_top_row(&self, index: GridIndex) -> bool {
        self.topology.is_top_row(index)
    }

    /// See [`GridTopology::is_bottom_row`] for how a short last row is treated.
    pub fn is_bottom_row(&self, index: GridIndex) -> bool {
        self.topology.is_bottom_row(index)
    }

    pub fn is_left_column(&self, index: GridIndex) -> bool {
        self.topology.is_left_column(index)
    }

    pub fn is_right_column(&self, index: GridIndex) -> bool {
        self.topology.is_right_column(index)
    }

    /// Zero-based column of the child at `index`; [`crate::ABSENT`] (`-1`) if there is none.
    pub fn is_nth_column(&self, index: GridIndex) -> GridIndex {
        self.topology.is_nth_column(index)
    }

    /// Zero-based row of the child at `index`; [`crate::ABSENT`] (`-1`) if there is none.
    pub fn is_nth_row(&self, index: GridIndex) -> GridIndex {
        self.topology.is_nth_row(index)
    }

    pub fn edges(&self, index: GridIndex) -> EdgeFlags {
        self.topology.edges(index)
    }

    pub fn position(&self, index: GridIndex) -> Option<GridPosition> {
        self.topology.position(index)
    }

    /// Index of the child directly above; `0` from the top row.
    pub fn grid_item_above(&self, index: GridIndex) -> GridIndex {
        self.topology.grid_item_above(index)
    }

    /// Index of the child directly below; the last child from the bottom row.
    pub fn grid_item_below(&self, index: GridIndex) -> GridIndex {
        self.topology.grid_item_below(index)
    }

    /// Index of the previous child; `-1` from index `0`.
    pub fn grid_item_to_the_left(&self, index: GridIndex, prevent_wrap: bool) -> GridIndex {
        self.topology.grid_item_to_the_left(index, prevent_wrap)
    }

    /// Index of the next child; may be one past the last child.
    pub fn grid_item_to_the_right(&self, index: GridIndex) -> GridIndex {
        self.topology.grid_item_to_the_right(index)
    }

    /// Columns the grid renders. May be `0` or negative when zero columns are allowed.
    pub fn column_count(&self) -> GridIndex {
        self.topology.column_count
    }

    pub fn row_count(&self) -> GridIndex {
        self.topology.row_count
    }

    pub fn column_gap_count(&self) -> GridIndex {
        self.topology.column_gap_count
    }

    pub fn row_gap_count(&self) -> GridIndex {
        self.topology.row_gap_count
    }

    /// The container's column gap in pixels.
    pub fn column_gap_width(&self) -> f32 {
        self.topology.column_gap_width
    }

    pub fn row_gap_width(&self) -> f32 {
        self.topology.row_gap_width
    }

    /// The tile width used for the current topology.
    pub fn min_child_width(&self) -> f32 {
        self.topology.min_child_width
    }

    pub fn child_count(&self) -> usize {
        self.topology.child_count
    }

    pub fn children(&self) -> &[H::Child] {
        &self.children
    }

    pub fn topology(&self) -> GridTopology {
        self.topology
    }

    /// The child at `index` in the current snapshot.
    pub fn nth(&self, index: GridIndex) -> Option<&H::Child> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.children.get(i))
    }

    pub fn element_width(&self, element: &H::Child) -> f32 {
        self.host.element_width(element)
    }

    /// Reacts to a host notification.
    ///
    /// Returns `false` when the notification was ignored: after [`SelfAwareGrid::destroy`], or
    /// for a resize while resize observation is off.
    pub fn handle_notification(&mut self, notification: Notification) -> bool {
        if self.destroyed {
            gwarn!(?notification, "notification after destroy ignored");
            return false;
        }
        match notification {
            Notification::SubtreeChanged if self.observing_subtree => {
                self.setup_children(None);
                true
            }
            Notification::Resized if self.observing_resize => {
                self.handle_resize();
                true
            }
            _ => {
                gtrace!(?notification, "notification ignored");
                false
            }
        }
    }

    /// Drains the host's queued notifications and handles them in order.
    ///
    /// Returns how many were handled.
    pub fn poll_notifications(&mut self) -> usize {
        let mut pending = Vec::new();
        self.host.drain_notifications(&mut |n| pending.push(n));
        let mut handled = 0;
        for notification in pending {
            if self.handle_notification(notification) {
                handled += 1;
            }
        }
        handled
    }

    /// Starts resize observation on the container.
    ///
    /// # Errors
    ///
    /// [`SelfAwareGridError::AlreadyObservingResize`] if already started,
    /// [`SelfAwareGridError::Destroyed`] after [`SelfAwareGrid::destroy`].
    pub fn begin_observing_resize(&mut self) -> Result<(), SelfAwareGridError> {
        if self.destroyed {
            return Err(SelfAwareGridError::Destroyed);
        }
        if self.observing_resize {
            return Err(SelfAwareGridError::AlreadyObservingResize);
        }
        self.host.observe_resize();
        self.observing_resize = true;
        Ok(())
    }

    /// Stops resize observation on the container.
    ///
    /// # Errors
    ///
    /// [`SelfAwareGridError::NotObservingResize`] if observation was never started (or already
    /// stopped), [`SelfAwareGridError::Destroyed`] after [`SelfAwareGrid::destroy`].
    pub fn stop_observing_resize(&mut self) -> Result<(), SelfAwareGridError> {
        if self.destroyed {
            return Err(SelfAwareGridError::Destroyed);
        }
        if !self.observing_resize {
            return Err(SelfAwareGridError::NotObservingResize);
        }
        self.host.unobserve_resize();
        self.observing_resize = false;
        Ok(())
    }

    pub fn is_observing_resize(&self) -> bool {
        self.observing_resize
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Releases the resize and subtree subscriptions.
    ///
    /// Labels are left in place. Later calls are no-ops, as is the implicit call on drop.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        if self.observing_resize {
            self.host.unobserve_resize();
            self.observing_resize = false;
        }
        if self.observing_subtree {
            self.host.unobserve_subtree();
            self.observing_subtree = false;
        }
        self.destroyed = true;
        gdebug!("SelfAwareGrid::destroy");
    }
}

impl<H: GridHost> Drop for SelfAwareGrid<H> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<H> fmt::Debug for SelfAwareGrid<H>
where
    H: GridHost + fmt::Debug,
    H::Child: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelfAwareGrid")
            .field("host", &self.host)
            .field("options", &self.options)
            .field("children", &self.children)
            .field("topology", &self.topology)
            .field("observing_resize", &self.observing_resize)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}

fn toggle_class<H: GridHost>(host: &mut H, child: &H::Child, class: &str, on: bool) {
    if on {
        host.add_class(child, class);
    } else {
        host.remove_class(child, class);
    }
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}

// `f32::floor` needs `std`; this keeps the crate usable without it.
fn floor_to_index(v: f32) -> GridIndex {
    let truncated = v as GridIndex;
    if (truncated as f32) > v {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}
