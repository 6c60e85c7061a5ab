/// Signed child index used by the positional query API.
///
/// Queries keep the sentinel conventions of the grid contract: `-1` marks an absent child, and
/// neighbor lookups may step one past either end (see [`crate::SelfAwareGrid::grid_item_to_the_left`]
/// and [`crate::SelfAwareGrid::grid_item_to_the_right`]).
pub type GridIndex = isize;

/// Returned by [`crate::SelfAwareGrid::is_nth_column`] / [`crate::SelfAwareGrid::is_nth_row`]
/// when the index has no child in the current snapshot.
pub const ABSENT: GridIndex = -1;

/// Where a child sits relative to the outer edges of the grid.
///
/// Corners take precedence over rows, rows over columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridPosition {
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    TopRow,
    BottomRow,
    LeftColumn,
    RightColumn,
}

impl GridPosition {
    pub fn from_edges(edges: EdgeFlags) -> Self {
        match (edges.top, edges.bottom, edges.left, edges.right) {
            (true, _, true, _) => Self::TopLeft,
            (true, _, _, true) => Self::TopRight,
            (_, true, true, _) => Self::BottomLeft,
            (_, true, _, true) => Self::BottomRight,
            (true, ..) => Self::TopRow,
            (_, true, ..) => Self::BottomRow,
            (_, _, true, _) => Self::LeftColumn,
            (_, _, _, true) => Self::RightColumn,
            _ => Self::Center,
        }
    }

    pub fn is_edge(self) -> bool {
        self != Self::Center
    }
}

/// The four edge marks a child carries after labeling.
///
/// `bottom` is never set together with `top`, and `right` never together with `left`: a single
/// row (or column) grid reports its cells as top (or left) only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeFlags {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgeFlags {
    pub fn is_empty(&self) -> bool {
        !(self.top || self.bottom || self.left || self.right)
    }
}

/// Container gap properties a host can report.
///
/// The grid-specific property is consulted first; the generic one is the fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GapProperty {
    GridColumnGap,
    ColumnGap,
    GridRowGap,
    RowGap,
}

impl GapProperty {
    /// CSS property name, as found in a computed style.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::GridColumnGap => "grid-column-gap",
            Self::ColumnGap => "column-gap",
            Self::GridRowGap => "grid-row-gap",
            Self::RowGap => "row-gap",
        }
    }
}

/// External triggers delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Notification {
    /// The container's descendant structure changed. Re-snapshots children.
    SubtreeChanged,
    /// The container's size changed. Re-measures without re-snapshotting.
    Resized,
}

/// A lightweight, serializable snapshot of the measured and derived grid values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridTopology {
    pub child_count: usize,
    pub min_child_width: f32,
    pub column_gap_width: f32,
    pub row_gap_width: f32,
    pub column_count: GridIndex,
    pub row_count: GridIndex,
    pub column_gap_count: GridIndex,
    pub row_gap_count: GridIndex,
}
