//! Traits for declaration backends.

use crate::ir::Definition;

/// A declaration backend.
///
/// Backends turn one schema [`Definition`] into a block of declaration
/// text. Rendering is pure: no I/O, and the same definition always yields
/// the same text.
///
/// # Implementing Custom Backends
///
/// ```ignore
/// use ifacegen::{Backend, ir::Definition};
///
/// struct FlowBackend;
///
/// impl Backend for FlowBackend {
///     fn name(&self) -> &'static str { "flow" }
///     fn language(&self) -> &'static str { "flow" }
///     fn extension(&self) -> &'static str { "js.flow" }
///     fn render(&self, definition: &Definition<'_>) -> String { /* ... */ }
/// }
/// ```
pub trait Backend: Send + Sync {
    /// Unique backend identifier (e.g., "typescript").
    fn name(&self) -> &'static str;

    /// Target language (e.g., "typescript").
    fn language(&self) -> &'static str;

    /// File extension of the generated source module (e.g., "ts").
    fn extension(&self) -> &'static str;

    /// Render a single declaration.
    fn render(&self, definition: &Definition<'_>) -> String;
}
