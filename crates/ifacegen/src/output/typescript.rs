//! TypeScript declaration backend.
//!
//! Objects become interfaces, enums become string enums. Names and type
//! references are emitted verbatim; the schema source is responsible for
//! handing over valid identifiers.

use crate::ir::{Definition, EnumInfo, PropertyInfo};
use crate::traits::Backend;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options for TypeScript rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeScriptOptions {
    /// Prefix every declaration with `export`.
    pub export: bool,
}

/// TypeScript backend with its rendering options.
#[derive(Debug, Clone, Default)]
pub struct TypeScriptBackend {
    pub options: TypeScriptOptions,
}

impl TypeScriptBackend {
    pub fn new(options: TypeScriptOptions) -> Self {
        Self { options }
    }
}

impl Backend for TypeScriptBackend {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn language(&self) -> &'static str {
        "typescript"
    }

    fn extension(&self) -> &'static str {
        "ts"
    }

    fn render(&self, definition: &Definition<'_>) -> String {
        match definition {
            Definition::Object { name, object } => {
                render_interface(name, &object.properties, &self.options)
            }
            Definition::Enum(info) => render_enum(info, &self.options),
        }
    }
}

/// Documentation block for a field.
///
/// Returns no lines at all when the field has neither a description nor
/// an example, so undocumented fields don't grow the declaration.
pub fn render_docs(prop: &PropertyInfo) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(description) = &prop.description {
        lines.push(format!("\t * {}", close_safe(description)));
    }

    if let Some(example) = &prop.example {
        lines.push(format!("\t * example: {}", close_safe(&example.to_string())));
    }

    if lines.is_empty() {
        return lines;
    }

    lines.insert(0, "\t/**".to_string());
    lines.push("\t */".to_string());
    lines
}

/// Documentation, member line, then a blank separator.
pub fn render_field(prop: &PropertyInfo) -> Vec<String> {
    let mut lines = render_docs(prop);
    let suffix = if prop.is_array { "[]" } else { "" };
    lines.push(format!("\t{}: {}{}", prop.name, prop.ty, suffix));
    lines.push(String::new());
    lines
}

/// Render an object schema as an interface, fields in their given order.
pub fn render_interface(
    name: &str,
    properties: &[PropertyInfo],
    options: &TypeScriptOptions,
) -> String {
    let mut lines = vec![format!("{}interface {} {{", export_prefix(options), name)];
    lines.extend(properties.iter().flat_map(render_field));
    lines.push("}".to_string());
    lines.join("\n")
}

/// Render an enum schema. Every member value is a quoted string literal.
pub fn render_enum(info: &EnumInfo, options: &TypeScriptOptions) -> String {
    let mut lines = vec![format!("{}enum {} {{", export_prefix(options), info.name)];
    for member in &info.values {
        let literal = Value::String(member.value.clone());
        lines.push(format!("\t{} = {},", member.name, literal));
    }
    lines.push("}".to_string());
    lines.join("\n")
}

/// Keep doc text from closing the surrounding `/** */` block.
fn close_safe(text: &str) -> String {
    text.replace("*/", "*\\/")
}

fn export_prefix(options: &TypeScriptOptions) -> &'static str {
    if options.export { "export " } else { "" }
}
