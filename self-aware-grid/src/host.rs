use alloc::string::String;
use alloc::vec::Vec;

use crate::{GapProperty, Notification};

/// The environment a [`crate::SelfAwareGrid`] is attached to: one grid container and its
/// direct children.
///
/// This trait bundles the three collaborators the grid depends on:
/// - geometry: rendered widths and the container's gap style
/// - labeling: adding/removing identifying classes
/// - notifications: starting/stopping subtree and resize observation
///
/// The grid never detects changes itself. A host either calls
/// [`crate::SelfAwareGrid::handle_notification`] from its own callbacks, or queues notifications
/// and lets [`crate::SelfAwareGrid::poll_notifications`] drain them through
/// [`GridHost::drain_notifications`].
pub trait GridHost {
    /// A handle to one child element. Handles are expected to be cheap to clone.
    type Child: Clone;

    /// The container's current direct children, in document order.
    fn children(&self) -> Vec<Self::Child>;

    /// The container's content-box width in pixels.
    fn container_width(&self) -> f32;

    /// A child's content-box width in pixels.
    fn element_width(&self, child: &Self::Child) -> f32;

    /// A gap property of the container in pixels, or `None` when unset or unsupported.
    fn gap(&self, property: GapProperty) -> Option<f32>;

    fn add_container_class(&mut self, class: &str);

    fn add_class(&mut self, child: &Self::Child, class: &str);

    fn remove_class(&mut self, child: &Self::Child, class: &str);

    /// Classes currently on `child`. Used to drop marks left over from an earlier index.
    fn class_names(&self, child: &Self::Child) -> Vec<String>;

    fn observe_subtree(&mut self) {}

    fn unobserve_subtree(&mut self) {}

    fn observe_resize(&mut self) {}

    fn unobserve_resize(&mut self) {}

    /// Hands queued notifications to `sink`, oldest first.
    ///
    /// Hosts that dispatch directly through `handle_notification` can keep the default.
    fn drain_notifications(&mut self, _sink: &mut dyn FnMut(Notification)) {}
}
