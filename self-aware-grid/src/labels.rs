use alloc::format;
use alloc::string::String;

/// The class names a [`crate::SelfAwareGrid`] assigns, derived once from the configured prefix.
///
/// With the default prefix:
/// - container: `self-aware-grid`
/// - every child: `self-aware-grid__child` and `self-aware-grid__child--{index}`
/// - edges: `self-aware-grid__child--is-top-row`, `--is-bottom-row`, `--is-left-column`,
///   `--is-right-column`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassNames {
    container: String,
    child: String,
    modifier_prefix: String,
    top_row: String,
    bottom_row: String,
    left_column: String,
    right_column: String,
}

impl ClassNames {
    pub fn new(prefix: &str) -> Self {
        let child = format!("{prefix}__child");
        let modifier_prefix = format!("{child}--");
        Self {
            container: String::from(prefix),
            top_row: format!("{modifier_prefix}is-top-row"),
            bottom_row: format!("{modifier_prefix}is-bottom-row"),
            left_column: format!("{modifier_prefix}is-left-column"),
            right_column: format!("{modifier_prefix}is-right-column"),
            child,
            modifier_prefix,
        }
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn child(&self) -> &str {
        &self.child
    }

    pub fn top_row(&self) -> &str {
        &self.top_row
    }

    pub fn bottom_row(&self) -> &str {
        &self.bottom_row
    }

    pub fn left_column(&self) -> &str {
        &self.left_column
    }

    pub fn right_column(&self) -> &str {
        &self.right_column
    }

    /// The per-index mark, e.g. `self-aware-grid__child--3`.
    pub fn index(&self, index: usize) -> String {
        format!("{}{index}", self.modifier_prefix)
    }

    /// Parses a per-index mark back into its index.
    pub fn parse_index(&self, class: &str) -> Option<usize> {
        let digits = class.strip_prefix(self.modifier_prefix.as_str())?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}
