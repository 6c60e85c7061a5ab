use alloc::borrow::Cow;

/// Class prefix applied to the container; child marks are derived from it.
pub const DEFAULT_CLASS_PREFIX: &str = "self-aware-grid";

/// Configuration for [`crate::SelfAwareGrid`].
///
/// Options are fixed at construction. `min_child_width` only seeds the tile width; later
/// overrides go through [`crate::SelfAwareGrid::setup_children`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelfAwareGridOptions {
    /// Explicit tile width in pixels. When unset, the width of the first child is measured.
    pub min_child_width: Option<f32>,

    /// Whether a computed column count below 1 is reported as-is.
    ///
    /// When `false`, the column count is clamped to at least 1.
    pub allow_zero_columns: bool,

    /// Prefix for every class the grid assigns (`{prefix}`, `{prefix}__child`, ...).
    pub class_prefix: Cow<'static, str>,
}

impl SelfAwareGridOptions {
    pub fn new() -> Self {
        Self {
            min_child_width: None,
            allow_zero_columns: true,
            class_prefix: Cow::Borrowed(DEFAULT_CLASS_PREFIX),
        }
    }

    pub fn with_min_child_width(mut self, min_child_width: Option<f32>) -> Self {
        self.min_child_width = min_child_width;
        self
    }

    pub fn with_allow_zero_columns(mut self, allow_zero_columns: bool) -> Self {
        self.allow_zero_columns = allow_zero_columns;
        self
    }

    pub fn with_class_prefix(mut self, class_prefix: impl Into<Cow<'static, str>>) -> Self {
        self.class_prefix = class_prefix.into();
        self
    }
}

impl Default for SelfAwareGridOptions {
    fn default() -> Self {
        Self::new()
    }
}
