//! Output backends for declaration rendering.
//!
//! Each backend takes one schema [`Definition`](crate::ir::Definition) and
//! produces declaration text. All backends implement the
//! [`Backend`](crate::traits::Backend) trait.

// TypeScript
pub mod typescript;

pub use typescript::{
    TypeScriptBackend, TypeScriptOptions, render_docs, render_enum, render_field,
    render_interface,
};
