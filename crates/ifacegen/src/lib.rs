//! Interface package generation from API schema collections.
//!
//! `ifacegen` turns the object and enum schemas of an API into TypeScript
//! declarations and packages them as an installable interfaces-only library.
//!
//! # Architecture
//!
//! ```text
//! Schema source         Renderer                Emitter
//! ─────────────     ─────────────────     ──────────────────────
//! SchemaCollection ─> Backend::render ───> src/index.ts
//!                     (per Definition)     package.json  <─ ProjectManifest
//!                                          tsconfig.json
//! ```
//!
//! # Example
//!
//! ```
//! use ifacegen::ir::{EnumInfo, PropertyInfo, SchemaCollection};
//! use ifacegen::{TypeScriptBackend, render_module};
//!
//! let mut schema = SchemaCollection::new();
//! schema.add_object(
//!     "User",
//!     vec![
//!         PropertyInfo::new("id", "string"),
//!         PropertyInfo::new("tags", "string").array(),
//!     ],
//! );
//! schema.add_enum(EnumInfo::new("Role").value("Admin", "admin"));
//!
//! let module = render_module(&schema, &TypeScriptBackend::default());
//! assert!(module.contains("\ttags: string[]"));
//! assert!(module.contains("\tAdmin = \"admin\","));
//! ```
//!
//! Writing the package goes through an [`OutputSink`]; [`generate_in`] wires
//! up the project's `package.json` and a [`DirSink`] rooted at `generated/`.

pub mod config;
pub mod emit;
pub mod error;
pub mod ir;
pub mod manifest;
pub mod output;
pub mod sink;
pub mod traits;

pub use config::GeneratorConfig;
pub use emit::{GenerationReport, generate, generate_in, render_module};
pub use error::Error;
pub use manifest::{CompilerConfig, DistributionManifest, ProjectManifest};
pub use output::{TypeScriptBackend, TypeScriptOptions};
pub use sink::{DirSink, MemorySink, OutputSink};
pub use traits::Backend;
