use thiserror::Error;

/// Invalid-state errors from the observation lifecycle.
///
/// Measurement and positional queries never fail; they report absent children through sentinels.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SelfAwareGridError {
    #[error("resize observation was not started")]
    NotObservingResize,
    #[error("resize observation is already active")]
    AlreadyObservingResize,
    #[error("the grid has been destroyed")]
    Destroyed,
}
