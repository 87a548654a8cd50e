//! Result type alias for shell operations.

use super::ui::UiError;

/// Type alias for Results using [`UiError`].
///
/// # Example
///
/// ```ignore
/// use dashshell::error::ShellResult;
///
/// fn lookup(name: &str) -> ShellResult<ViewId> {
///     ViewId::from_name(name).ok_or_else(|| UiError::UnknownView { name: name.into() })
/// }
/// ```
pub type ShellResult<T> = Result<T, UiError>;
