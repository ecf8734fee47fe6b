use thiserror::Error;

/// Lifecycle errors reported synchronously by the binding. Neither variant
/// is transient; both indicate a caller-side configuration or lifecycle bug
/// and are never retried.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum BindingError {
    /// `attach` was handed a handle that refers to no live map surface.
    #[error("surface handle does not refer to a live map surface")]
    InvalidSurface,
    /// An operation reached a binding that has already been torn down.
    #[error("polyline overlay used after teardown")]
    UseAfterTeardown,
}
