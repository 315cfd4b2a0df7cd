//! Project and distribution manifests.
//!
//! The project manifest (`package.json` of the API project) is read-only
//! input. The distribution manifest and compiler configuration describe the
//! generated interfaces package.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Fields of the source project's `package.json` that the generator uses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectManifest {
    pub name: String,
    pub version: String,
    pub license: String,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub repository: Option<Repository>,
}

/// `repository` entry, in either of the forms npm accepts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Repository {
    Url(String),
    Detailed { url: String },
}

/// `package.json` of the generated interfaces package.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub main: String,
    pub types: String,
    pub license: String,
    pub files: Vec<String>,
    pub dev_dependencies: BTreeMap<String, String>,
    pub scripts: BTreeMap<String, String>,
}

/// `tsconfig.json` of the generated package. Always the same document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerConfig {
    pub compiler_options: CompilerOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    pub module: String,
    pub target: String,
    pub declaration: bool,
    pub out_dir: String,
    pub strict: bool,
}

/// Compiler package pinned in the generated manifest.
pub const COMPILER_PACKAGE: &str = "typescript";

/// Build output directory of the generated package.
const LIB_DIR: &str = "lib";

impl ProjectManifest {
    /// Read and parse a `package.json`.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }

    /// Parse manifest text; `path` is only used for error reporting.
    pub fn parse(path: &Path, content: &str) -> Result<Self, Error> {
        let de = &mut serde_json::Deserializer::from_str(content);
        serde_path_to_error::deserialize(de).map_err(|err| Error::ManifestParse {
            path: path.to_path_buf(),
            field: err.path().to_string(),
            message: err.into_inner().to_string(),
        })
    }

    /// The compiler version from `devDependencies`.
    pub fn compiler_version(&self) -> Option<&str> {
        self.dev_dependencies
            .get(COMPILER_PACKAGE)
            .map(String::as_str)
    }

    pub fn repository_url(&self) -> Option<&str> {
        self.repository.as_ref().map(Repository::url)
    }
}

impl Repository {
    pub fn url(&self) -> &str {
        match self {
            Repository::Url(url) => url,
            Repository::Detailed { url } => url,
        }
    }
}

impl DistributionManifest {
    /// Derive the interfaces package manifest from the project manifest.
    ///
    /// `compiler_version` is pinned as the only dev dependency.
    pub fn derive(project: &ProjectManifest, suffix: &str, compiler_version: &str) -> Self {
        let mut description = format!("Auto-generated API interface files for {}", project.name);
        if let Some(url) = project.repository_url() {
            description.push_str(&format!(" - see {} for more information.", url));
        }

        Self {
            name: format!("{}{}", project.name, suffix),
            version: project.version.clone(),
            description,
            main: format!("{LIB_DIR}/index.js"),
            types: format!("{LIB_DIR}/index.d.ts"),
            license: project.license.clone(),
            files: vec![format!("{LIB_DIR}/**/*")],
            dev_dependencies: BTreeMap::from([(
                COMPILER_PACKAGE.to_string(),
                compiler_version.to_string(),
            )]),
            scripts: BTreeMap::from([("build".to_string(), "tsc".to_string())]),
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            compiler_options: CompilerOptions {
                module: "commonjs".to_string(),
                target: "es5".to_string(),
                declaration: true,
                out_dir: LIB_DIR.to_string(),
                strict: true,
            },
        }
    }
}

impl CompilerConfig {
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> ProjectManifest {
        ProjectManifest::parse(
            Path::new("package.json"),
            r#"{
                "name": "widget",
                "version": "1.2.0",
                "license": "MIT",
                "repository": "https://x",
                "scripts": { "start": "node dist/main" },
                "devDependencies": { "typescript": "5.0.0", "jest": "29.0.0" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn derive_widget_manifest() {
        let project = widget();
        let dist = DistributionManifest::derive(&project, "-interfaces", "5.0.0");

        assert_eq!(dist.name, "widget-interfaces");
        assert_eq!(dist.version, "1.2.0");
        assert_eq!(dist.license, "MIT");
        assert!(dist.description.contains("widget"));
        assert!(dist.description.contains("https://x"));
        assert_eq!(dist.dev_dependencies.len(), 1);
        assert_eq!(dist.dev_dependencies["typescript"], "5.0.0");
        assert_eq!(dist.scripts["build"], "tsc");
    }

    #[test]
    fn description_without_repository() {
        let mut project = widget();
        project.repository = None;
        let dist = DistributionManifest::derive(&project, "-interfaces", "5.0.0");
        assert_eq!(
            dist.description,
            "Auto-generated API interface files for widget"
        );
    }

    #[test]
    fn repository_object_form() {
        let project = ProjectManifest::parse(
            Path::new("package.json"),
            r#"{
                "name": "widget",
                "version": "1.0.0",
                "license": "ISC",
                "repository": { "type": "git", "url": "git+https://example.com/widget.git" }
            }"#,
        )
        .unwrap();
        assert_eq!(
            project.repository_url(),
            Some("git+https://example.com/widget.git")
        );
        assert_eq!(project.compiler_version(), None);
    }

    #[test]
    fn missing_license_names_field() {
        let err = ProjectManifest::parse(
            Path::new("package.json"),
            r#"{ "name": "widget", "version": "1.0.0" }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("license"), "{err}");
    }

    #[test]
    fn manifest_key_order() {
        let dist = DistributionManifest::derive(&widget(), "-interfaces", "5.0.0");
        let json = dist.to_json().unwrap();
        let keys = [
            "\"name\"",
            "\"version\"",
            "\"description\"",
            "\"main\"",
            "\"types\"",
            "\"license\"",
            "\"files\"",
            "\"devDependencies\"",
            "\"scripts\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    }

    #[test]
    fn compiler_config_is_fixed() {
        let json: serde_json::Value =
            serde_json::from_str(&CompilerConfig::default().to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "compilerOptions": {
                    "module": "commonjs",
                    "target": "es5",
                    "declaration": true,
                    "outDir": "lib",
                    "strict": true
                }
            })
        );
    }
}
