use crate::{ABSENT, EdgeFlags, GridIndex, GridPosition, GridTopology};

/// Positional queries over a topology snapshot.
///
/// These depend only on `column_count`, `row_count` and `child_count`, never on pixels. The
/// layout is row-major: `column = i mod column_count`, `row = floor(i / column_count)`.
impl GridTopology {
    /// Whether `index` has a child in the snapshot.
    pub fn contains(&self, index: GridIndex) -> bool {
        usize::try_from(index).is_ok_and(|i| i < self.child_count)
    }

    fn last_index(&self) -> GridIndex {
        self.child_count as GridIndex - 1
    }

    pub fn is_top_row(&self, index: GridIndex) -> bool {
        index < self.column_count
    }

    /// Whether `index` falls in the last row band.
    ///
    /// The band is `row_count * column_count - column_count ..`, so every index of a short last
    /// row counts as bottom row regardless of how many children occupy it.
    pub fn is_bottom_row(&self, index: GridIndex) -> bool {
        let slots = self.row_count.saturating_mul(self.column_count);
        index >= slots.saturating_sub(self.column_count)
    }

    pub fn is_left_column(&self, index: GridIndex) -> bool {
        self.column_of(index) == Some(0)
    }

    pub fn is_right_column(&self, index: GridIndex) -> bool {
        self.column_of(index) == Some(self.column_count.saturating_sub(1))
    }

    /// Zero-based column of `index`, or [`ABSENT`] when there is no such child (or no column).
    pub fn is_nth_column(&self, index: GridIndex) -> GridIndex {
        self.column_of(index).unwrap_or(ABSENT)
    }

    /// Zero-based row of `index`, or [`ABSENT`] when there is no such child (or no column).
    pub fn is_nth_row(&self, index: GridIndex) -> GridIndex {
        self.row_of(index).unwrap_or(ABSENT)
    }

    pub fn column_of(&self, index: GridIndex) -> Option<GridIndex> {
        (self.contains(index) && self.column_count > 0).then(|| index % self.column_count)
    }

    pub fn row_of(&self, index: GridIndex) -> Option<GridIndex> {
        (self.contains(index) && self.column_count > 0).then(|| index / self.column_count)
    }

    /// The child above `index`. Saturates to `0` from the top row.
    pub fn grid_item_above(&self, index: GridIndex) -> GridIndex {
        if self.is_top_row(index) {
            0
        } else {
            index.saturating_sub(self.column_count)
        }
    }

    /// The child below `index`. Saturates to the last child from the bottom row.
    pub fn grid_item_below(&self, index: GridIndex) -> GridIndex {
        if self.is_bottom_row(index) {
            self.last_index()
        } else {
            index.saturating_add(self.column_count)
        }
    }

    /// The previous child.
    ///
    /// Wraps to the end of the previous row, and yields `-1` from index `0`. With
    /// `prevent_wrap`, an index in the left column is returned unchanged.
    pub fn grid_item_to_the_left(&self, index: GridIndex, prevent_wrap: bool) -> GridIndex {
        if prevent_wrap && self.is_nth_column(index) == 0 {
            index
        } else {
            index.saturating_sub(1)
        }
    }

    /// The next child.
    ///
    /// Steps forward while `index <= child_count`, so the last child (and `child_count` itself)
    /// yields one past the end. Callers clamp.
    pub fn grid_item_to_the_right(&self, index: GridIndex) -> GridIndex {
        if index <= self.child_count as GridIndex {
            index.saturating_add(1)
        } else {
            index
        }
    }

    /// The edge marks `index` receives when labeled.
    pub fn edges(&self, index: GridIndex) -> EdgeFlags {
        let top = self.is_top_row(index);
        let left = self.is_left_column(index);
        EdgeFlags {
            top,
            bottom: self.is_bottom_row(index) && !top,
            left,
            right: self.is_right_column(index) && !left,
        }
    }

    /// Classifies `index`, or `None` when there is no such child.
    pub fn position(&self, index: GridIndex) -> Option<GridPosition> {
        self.contains(index)
            .then(|| GridPosition::from_edges(self.edges(index)))
    }
}
