//! Package emission.
//!
//! Renders a whole [`SchemaCollection`] into one source module and writes it
//! together with the distribution manifest and compiler configuration:
//!
//! ```text
//! <output_root>/
//! ├── package.json     # derived from the project manifest
//! ├── tsconfig.json    # fixed compiler options
//! └── src/
//!     └── index.ts     # every declaration, objects first
//! ```
//!
//! Every run regenerates all three artifacts and overwrites what is there.

use crate::config::GeneratorConfig;
use crate::error::Error;
use crate::ir::{Definition, SchemaCollection};
use crate::manifest::{CompilerConfig, DistributionManifest, ProjectManifest};
use crate::output::TypeScriptBackend;
use crate::sink::{DirSink, OutputSink};
use crate::traits::Backend;
use std::path::{Path, PathBuf};

/// Source directory inside the output root.
pub const SOURCE_DIR: &str = "src";
/// Distribution manifest file name.
pub const MANIFEST_FILE: &str = "package.json";
/// Compiler configuration file name.
pub const COMPILER_CONFIG_FILE: &str = "tsconfig.json";

/// What a successful run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Written files, relative to the output root, in write order.
    pub files: Vec<PathBuf>,
    pub interfaces: usize,
    pub enums: usize,
}

/// Render every definition and join them with a blank line.
///
/// Objects come first, then enums, each in collection order.
pub fn render_module(schema: &SchemaCollection, backend: &dyn Backend) -> String {
    schema
        .definitions()
        .map(|definition| {
            let kind = match definition {
                Definition::Object { .. } => "interface",
                Definition::Enum(_) => "enum",
            };
            tracing::debug!(
                definition = definition.name(),
                kind,
                backend = backend.name(),
                language = backend.language(),
                "rendering"
            );
            backend.render(&definition)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Generate the interfaces package into `sink`.
///
/// Fails before writing anything if the project manifest has no compiler
/// version. Any later failure leaves earlier artifacts of the run in place.
pub fn generate(
    schema: &SchemaCollection,
    project: &ProjectManifest,
    config: &GeneratorConfig,
    sink: &mut dyn OutputSink,
) -> Result<GenerationReport, Error> {
    let compiler_version = project
        .compiler_version()
        .ok_or_else(|| Error::MissingCompilerVersion {
            path: config.manifest.clone(),
        })?;

    let backend = TypeScriptBackend::new(config.typescript.clone());
    let module = render_module(schema, &backend);

    let source_dir = Path::new(SOURCE_DIR);
    sink.create_dir_all(source_dir)?;

    let source_path = source_dir.join(format!("index.{}", backend.extension()));
    sink.write_file(&source_path, &module)?;

    let manifest = DistributionManifest::derive(project, &config.package_suffix, compiler_version);
    let manifest_path = PathBuf::from(MANIFEST_FILE);
    sink.write_file(&manifest_path, &manifest.to_json()?)?;

    let compiler_path = PathBuf::from(COMPILER_CONFIG_FILE);
    sink.write_file(&compiler_path, &CompilerConfig::default().to_json()?)?;

    Ok(GenerationReport {
        files: vec![source_path, manifest_path, compiler_path],
        interfaces: schema.objects.len(),
        enums: schema.enums.len(),
    })
}

/// Generate the interfaces package for the project at `project_root`.
///
/// Reads `ifacegen.toml` (if any) and the project manifest from the root and
/// writes under the configured output root.
pub fn generate_in(
    project_root: &Path,
    schema: &SchemaCollection,
) -> Result<GenerationReport, Error> {
    let config = GeneratorConfig::load(project_root)?;
    let project = ProjectManifest::load(&project_root.join(&config.manifest))?;
    let mut sink = DirSink::new(project_root.join(&config.output_root));

    let report = generate(schema, &project, &config, &mut sink)?;
    tracing::info!(
        output = %sink.root().display(),
        package = %project.name,
        interfaces = report.interfaces,
        enums = report.enums,
        "generated interfaces package"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{EnumInfo, PropertyInfo};
    use crate::sink::MemorySink;

    /// Fails on one path, forwards everything else.
    struct FailOn<'a> {
        inner: MemorySink,
        path: &'a str,
    }

    impl OutputSink for FailOn<'_> {
        fn create_dir_all(&mut self, path: &Path) -> Result<(), Error> {
            self.inner.create_dir_all(path)
        }

        fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), Error> {
            if path == Path::new(self.path) {
                return Err(Error::io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
                ));
            }
            self.inner.write_file(path, contents)
        }
    }

    fn project() -> ProjectManifest {
        ProjectManifest::parse(
            Path::new("package.json"),
            r#"{ "name": "api", "version": "0.1.0", "license": "MIT",
                 "devDependencies": { "typescript": "^5.4.0" } }"#,
        )
        .unwrap()
    }

    fn schema() -> SchemaCollection {
        let mut schema = SchemaCollection::new();
        schema.add_enum(EnumInfo::new("Role").value("Admin", "admin"));
        schema.add_object("User", vec![PropertyInfo::new("id", "string")]);
        schema
    }

    #[test]
    fn objects_before_enums() {
        let module = render_module(&schema(), &TypeScriptBackend::default());
        assert_eq!(
            module,
            "interface User {\n\tid: string\n\n}\n\nenum Role {\n\tAdmin = \"admin\",\n}"
        );
    }

    #[test]
    fn empty_schema_renders_empty_module() {
        let module = render_module(&SchemaCollection::new(), &TypeScriptBackend::default());
        assert_eq!(module, "");
    }

    #[test]
    fn writes_three_artifacts() {
        let mut sink = MemorySink::new();
        let report = generate(&schema(), &project(), &GeneratorConfig::default(), &mut sink)
            .unwrap();

        assert_eq!(
            report.files,
            [
                PathBuf::from("src/index.ts"),
                PathBuf::from("package.json"),
                PathBuf::from("tsconfig.json"),
            ]
        );
        assert_eq!((report.interfaces, report.enums), (1, 1));
        assert!(sink.has_dir("src"));
        assert!(sink.file("src/index.ts").unwrap().starts_with("interface User {"));
        assert!(sink.file("package.json").unwrap().contains("\"api-interfaces\""));
        assert!(sink.file("tsconfig.json").unwrap().contains("\"outDir\": \"lib\""));
    }

    #[test]
    fn missing_compiler_version_writes_nothing() {
        let mut project = project();
        project.dev_dependencies.clear();
        let mut sink = MemorySink::new();

        let err = generate(&schema(), &project, &GeneratorConfig::default(), &mut sink)
            .unwrap_err();
        assert!(matches!(err, Error::MissingCompilerVersion { .. }));
        assert!(sink.files().is_empty());
    }

    #[test]
    fn failed_write_keeps_earlier_artifacts() {
        let mut sink = FailOn {
            inner: MemorySink::new(),
            path: MANIFEST_FILE,
        };

        let err = generate(&schema(), &project(), &GeneratorConfig::default(), &mut sink)
            .unwrap_err();
        match err {
            Error::Io { path, .. } => assert_eq!(path, Path::new(MANIFEST_FILE)),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(sink.inner.file("src/index.ts").is_some());
        assert!(sink.inner.file(MANIFEST_FILE).is_none());
        assert!(sink.inner.file(COMPILER_CONFIG_FILE).is_none());
    }

    #[test]
    fn export_option_reaches_module() {
        let mut config = GeneratorConfig::default();
        config.typescript.export = true;
        let mut sink = MemorySink::new();

        generate(&schema(), &project(), &config, &mut sink).unwrap();
        let module = sink.file("src/index.ts").unwrap();
        assert!(module.starts_with("export interface User {"));
        assert!(module.contains("export enum Role {"));
    }

    #[test]
    fn custom_suffix() {
        let config = GeneratorConfig {
            package_suffix: "-types".to_string(),
            ..Default::default()
        };
        let mut sink = MemorySink::new();

        generate(&schema(), &project(), &config, &mut sink).unwrap();
        assert!(sink.file("package.json").unwrap().contains("\"api-types\""));
    }
}
