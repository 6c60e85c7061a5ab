use core::fmt;

use self_aware_grid::{GridHost, GridIndex, SelfAwareGrid};

/// An arrow-key direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Edge behavior for [`Navigator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigatorOptions {
    /// Left/right at a row edge continue on the previous/next row.
    pub wrap_horizontal: bool,
    /// Up from the top row jumps to the first child, down from the bottom row to the last.
    /// When off, the cursor stays put at those edges.
    pub jump_at_vertical_edges: bool,
}

impl NavigatorOptions {
    pub fn new() -> Self {
        Self {
            wrap_horizontal: true,
            jump_at_vertical_edges: true,
        }
    }

    pub fn with_wrap_horizontal(mut self, wrap_horizontal: bool) -> Self {
        self.wrap_horizontal = wrap_horizontal;
        self
    }

    pub fn with_jump_at_vertical_edges(mut self, jump_at_vertical_edges: bool) -> Self {
        self.jump_at_vertical_edges = jump_at_vertical_edges;
        self
    }
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Spreadsheet-style keyboard navigation over a [`SelfAwareGrid`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `move_by` on arrow keys
/// - `poll` after the host may have queued notifications (children added/removed, resize)
///
/// The cursor is always a valid child index, or `None` for an empty grid. Neighbor lookups from
/// the grid may point outside the children (`-1`, one past the end, or into a short last row);
/// those are clamped to the nearest child.
pub struct Navigator<H: GridHost> {
    grid: SelfAwareGrid<H>,
    options: NavigatorOptions,
    cursor: Option<usize>,
}

impl<H: GridHost> Navigator<H> {
    /// Wraps `grid` with the cursor on the first child, if any.
    pub fn new(grid: SelfAwareGrid<H>, options: NavigatorOptions) -> Self {
        let cursor = (grid.child_count() > 0).then_some(0);
        Self {
            grid,
            options,
            cursor,
        }
    }

    pub fn grid(&self) -> &SelfAwareGrid<H> {
        &self.grid
    }

    /// Mutable access to the grid.
    ///
    /// Call [`Navigator::clamp_cursor`] after re-snapshotting children through it.
    pub fn grid_mut(&mut self) -> &mut SelfAwareGrid<H> {
        &mut self.grid
    }

    pub fn into_grid(self) -> SelfAwareGrid<H> {
        self.grid
    }

    pub fn options(&self) -> NavigatorOptions {
        self.options
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The child under the cursor.
    pub fn current(&self) -> Option<&H::Child> {
        self.cursor.and_then(|i| self.grid.nth(i as GridIndex))
    }

    /// Places the cursor on `index`, clamped to the last child.
    ///
    /// Returns the applied cursor.
    pub fn set_cursor(&mut self, index: usize) -> Option<usize> {
        self.cursor = self.clamp_index(index);
        self.cursor
    }

    /// Moves the cursor one step in `direction`.
    ///
    /// Returns the new cursor. With no cursor yet, the first step lands on the first child.
    pub fn move_by(&mut self, direction: Direction) -> Option<usize> {
        let Some(cursor) = self.cursor else {
            self.cursor = self.clamp(0);
            return self.cursor;
        };
        let index = cursor as GridIndex;
        let target = self.target(index, direction);
        self.cursor = self.clamp(target);
        atrace!(?direction, from = cursor, to = ?self.cursor, "Navigator::move_by");
        self.cursor
    }

    fn target(&self, index: GridIndex, direction: Direction) -> GridIndex {
        let grid = &self.grid;
        // Without columns, there is no vertical structure to follow.
        if grid.column_count() <= 0 && matches!(direction, Direction::Up | Direction::Down) {
            return index;
        }
        let wrap = self.options.wrap_horizontal;
        let jump = self.options.jump_at_vertical_edges;
        match direction {
            Direction::Up if !jump && grid.is_top_row(index) => index,
            Direction::Up => grid.grid_item_above(index),
            Direction::Down if !jump && grid.is_bottom_row(index) => index,
            Direction::Down => grid.grid_item_below(index),
            Direction::Left => grid.grid_item_to_the_left(index, !wrap),
            Direction::Right if !wrap && grid.is_right_column(index) => index,
            Direction::Right => grid.grid_item_to_the_right(index),
        }
    }

    /// Delivers the host's queued notifications to the grid, then re-clamps the cursor.
    ///
    /// Returns how many notifications were handled.
    pub fn poll(&mut self) -> usize {
        let handled = self.grid.poll_notifications();
        self.clamp_cursor();
        handled
    }

    /// Keeps the cursor on a valid child after the child snapshot changed.
    pub fn clamp_cursor(&mut self) {
        self.cursor = match self.cursor {
            Some(c) => self.clamp_index(c),
            None => self.clamp_index(0),
        };
    }

    fn clamp(&self, index: GridIndex) -> Option<usize> {
        let last = self.grid.child_count().checked_sub(1)?;
        Some(usize::try_from(index).map_or(0, |i| i.min(last)))
    }

    fn clamp_index(&self, index: usize) -> Option<usize> {
        let last = self.grid.child_count().checked_sub(1)?;
        Some(index.min(last))
    }
}

impl<H> fmt::Debug for Navigator<H>
where
    H: GridHost + fmt::Debug,
    H::Child: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("grid", &self.grid)
            .field("options", &self.options)
            .field("cursor", &self.cursor)
            .finish()
    }
}
