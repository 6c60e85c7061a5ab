use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use self_aware_grid::{GapProperty, GridHost, Notification, css};

/// Identity of a [`MemoryGrid`] child. Stable across insertions and removals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChildId(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub struct MemoryChild {
    pub id: ChildId,
    pub width: f32,
    pub classes: BTreeSet<String>,
}

/// An in-memory grid container.
///
/// Useful for tests, simulations and non-DOM adapters. Gap styles are stored as computed-style
/// text (e.g. `"16px"`, `"normal"`) and parsed like a browser would.
///
/// Structural edits queue [`Notification::SubtreeChanged`] while subtree observation is on;
/// container width changes queue [`Notification::Resized`] while resize observation is on.
/// Deliver them with [`self_aware_grid::SelfAwareGrid::poll_notifications`].
#[derive(Clone, Debug, Default)]
pub struct MemoryGrid {
    width: f32,
    gap_styles: BTreeMap<GapProperty, String>,
    children: Vec<MemoryChild>,
    next_id: u64,
    container_classes: BTreeSet<String>,

    observing_subtree: bool,
    observing_resize: bool,
    pending: VecDeque<Notification>,
}

impl MemoryGrid {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Sets a gap property as computed-style text.
    pub fn with_gap_style(mut self, property: GapProperty, value: impl Into<String>) -> Self {
        self.set_gap_style(property, value);
        self
    }

    /// Sets `column-gap` and `row-gap` to the same pixel value.
    pub fn with_gap(self, px: f32) -> Self {
        self.with_gap_style(GapProperty::ColumnGap, px_string(px))
            .with_gap_style(GapProperty::RowGap, px_string(px))
    }

    pub fn with_children(mut self, count: usize, width: f32) -> Self {
        for _ in 0..count {
            self.push_child(width);
        }
        self
    }

    pub fn set_gap_style(&mut self, property: GapProperty, value: impl Into<String>) {
        self.gap_styles.insert(property, value.into());
        self.queue(Notification::Resized, self.observing_resize);
    }

    pub fn clear_gap_style(&mut self, property: GapProperty) {
        if self.gap_styles.remove(&property).is_some() {
            self.queue(Notification::Resized, self.observing_resize);
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_width(&mut self, width: f32) {
        if self.width == width {
            return;
        }
        self.width = width;
        self.queue(Notification::Resized, self.observing_resize);
    }

    pub fn push_child(&mut self, width: f32) -> ChildId {
        let index = self.children.len();
        self.insert_child(index, width)
    }

    /// Inserts a child at `index` (clamped to the current length).
    pub fn insert_child(&mut self, index: usize, width: f32) -> ChildId {
        let id = ChildId(self.next_id);
        self.next_id += 1;
        let index = index.min(self.children.len());
        self.children.insert(
            index,
            MemoryChild {
                id,
                width,
                classes: BTreeSet::new(),
            },
        );
        self.queue(Notification::SubtreeChanged, self.observing_subtree);
        id
    }

    pub fn remove_child(&mut self, id: ChildId) -> Option<MemoryChild> {
        let pos = self.children.iter().position(|c| c.id == id)?;
        let removed = self.children.remove(pos);
        self.queue(Notification::SubtreeChanged, self.observing_subtree);
        Some(removed)
    }

    pub fn set_child_width(&mut self, id: ChildId, width: f32) -> bool {
        let Some(child) = self.children.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        child.width = width;
        self.queue(Notification::SubtreeChanged, self.observing_subtree);
        true
    }

    pub fn child(&self, id: ChildId) -> Option<&MemoryChild> {
        self.children.iter().find(|c| c.id == id)
    }

    pub fn child_ids(&self) -> Vec<ChildId> {
        self.children.iter().map(|c| c.id).collect()
    }

    pub fn has_class(&self, id: ChildId, class: &str) -> bool {
        self.child(id).is_some_and(|c| c.classes.contains(class))
    }

    pub fn container_classes(&self) -> &BTreeSet<String> {
        &self.container_classes
    }

    pub fn is_observing_subtree(&self) -> bool {
        self.observing_subtree
    }

    pub fn is_observing_resize(&self) -> bool {
        self.observing_resize
    }

    pub fn pending_notifications(&self) -> usize {
        self.pending.len()
    }

    fn queue(&mut self, notification: Notification, observed: bool) {
        if !observed {
            return;
        }
        // A burst of identical changes needs a single recomputation.
        if self.pending.back() == Some(&notification) {
            return;
        }
        self.pending.push_back(notification);
    }

    fn child_mut(&mut self, id: ChildId) -> Option<&mut MemoryChild> {
        self.children.iter_mut().find(|c| c.id == id)
    }
}

impl GridHost for MemoryGrid {
    type Child = ChildId;

    fn children(&self) -> Vec<ChildId> {
        self.child_ids()
    }

    fn container_width(&self) -> f32 {
        self.width
    }

    fn element_width(&self, child: &ChildId) -> f32 {
        self.child(*child).map_or(0.0, |c| c.width)
    }

    fn gap(&self, property: GapProperty) -> Option<f32> {
        self.gap_styles
            .get(&property)
            .and_then(|value| css::parse_px(value))
    }

    fn add_container_class(&mut self, class: &str) {
        self.container_classes.insert(class.to_string());
    }

    fn add_class(&mut self, child: &ChildId, class: &str) {
        if let Some(c) = self.child_mut(*child) {
            c.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, child: &ChildId, class: &str) {
        if let Some(c) = self.child_mut(*child) {
            c.classes.remove(class);
        }
    }

    fn class_names(&self, child: &ChildId) -> Vec<String> {
        self.child(*child)
            .map(|c| c.classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn observe_subtree(&mut self) {
        self.observing_subtree = true;
    }

    fn unobserve_subtree(&mut self) {
        self.observing_subtree = false;
        self.pending
            .retain(|n| *n != Notification::SubtreeChanged);
    }

    fn observe_resize(&mut self) {
        self.observing_resize = true;
    }

    fn unobserve_resize(&mut self) {
        self.observing_resize = false;
        self.pending.retain(|n| *n != Notification::Resized);
    }

    fn drain_notifications(&mut self, sink: &mut dyn FnMut(Notification)) {
        while let Some(n) = self.pending.pop_front() {
            sink(n);
        }
    }
}

fn px_string(px: f32) -> String {
    let mut s = px.to_string();
    s.push_str("px");
    s
}
