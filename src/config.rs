//! Project configuration for rnt.
//! This module turns the raw answer map collected from the CLI, stdin and prompts
//! into a validated, immutable [`ProjectConfig`].

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::sync::LazyLock;

/// Answer keys understood by [`ProjectConfig::from_answers`].
pub const PROJECT_NAME: &str = "project_name";
pub const STYLING: &str = "styling";
pub const INCLUDE_EXAMPLES: &str = "include_examples";
pub const INSTALL_TESTS: &str = "install_tests";
pub const INSTALL_EXTRA_DEPENDENCIES: &str = "install_extra_dependencies";
pub const INSTALL_BACKEND: &str = "install_backend";
pub const PACKAGE_MANAGER: &str = "package_manager";

/// npm refuses package names longer than this.
const MAX_NAME_LENGTH: usize = 214;

static NAME_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^(?:@[a-z0-9\-~][a-z0-9\-._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$")
        .expect("project name pattern is valid")
});

/// Raw answers keyed by field name, in the order they were collected.
pub type Answers = IndexMap<String, serde_json::Value>;

/// Styling approach of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Styling {
    StyledComponents,
    Tailwind,
}

impl fmt::Display for Styling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Styling::StyledComponents => write!(f, "Styled Components"),
            Styling::Tailwind => write!(f, "Tailwind CSS"),
        }
    }
}

/// Package manager used for scaffolding and dependency installation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Executable name of the package manager.
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Command line that runs a `package.json` script, e.g. `npm run dev`.
    pub fn run_script(&self, script: &str) -> String {
        match self {
            PackageManager::Npm => format!("npm run {script}"),
            PackageManager::Yarn | PackageManager::Pnpm => format!("{} {script}", self.program()),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}

/// Validated description of the project to generate.
///
/// Values are never mutated after construction: the `with_*` helpers consume
/// the value and return a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    project_name: String,
    styling: Styling,
    include_examples: bool,
    install_tests: bool,
    install_extra_dependencies: bool,
    install_backend: bool,
    package_manager: PackageManager,
}

impl ProjectConfig {
    /// Creates a configuration with every optional feature disabled.
    ///
    /// # Errors
    /// * `Error::ValidationError` if `project_name` is not a valid package name
    pub fn new<S: Into<String>>(project_name: S, styling: Styling) -> Result<Self> {
        let project_name = project_name.into();
        validate_project_name(&project_name)?;
        Ok(Self {
            project_name,
            styling,
            include_examples: false,
            install_tests: false,
            install_extra_dependencies: false,
            install_backend: false,
            package_manager: PackageManager::default(),
        })
    }

    /// Builds a configuration from raw answers.
    ///
    /// # Arguments
    /// * `answers` - Map of answer key to value, as produced by [`crate::answers::get_answers`]
    ///
    /// # Returns
    /// * `Result<ProjectConfig>` - The validated configuration
    ///
    /// # Errors
    /// * `Error::ValidationError` naming the first offending field
    ///
    /// # Notes
    /// - `project_name` and `styling` are required
    /// - Missing booleans are `false`, a missing package manager is `npm`
    /// - `null` values count as missing, unknown keys are ignored
    pub fn from_answers(answers: &Answers) -> Result<Self> {
        for (key, value) in answers.iter().filter(|(_, v)| !v.is_null()) {
            match answer_schema(key) {
                Some(schema) => {
                    if !jsonschema::is_valid(&schema, value) {
                        return Err(Error::validation(
                            key.as_str(),
                            format!("unexpected value {value}"),
                        ));
                    }
                }
                None => warn!("Ignoring unknown answer '{key}'."),
            }
        }

        let project_name = answers
            .get(PROJECT_NAME)
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::validation(PROJECT_NAME, "is required"))?;

        let styling: Styling = typed_answer(answers, STYLING)?
            .ok_or_else(|| Error::validation(STYLING, "is required"))?;
        let package_manager: PackageManager =
            typed_answer(answers, PACKAGE_MANAGER)?.unwrap_or_default();

        let config = Self::new(project_name, styling)?
            .with_examples(flag(answers, INCLUDE_EXAMPLES))
            .with_tests(flag(answers, INSTALL_TESTS))
            .with_extra_dependencies(flag(answers, INSTALL_EXTRA_DEPENDENCIES))
            .with_backend(flag(answers, INSTALL_BACKEND))
            .with_package_manager(package_manager);

        debug!("Validated configuration: {config:?}");
        Ok(config)
    }

    pub fn with_examples(self, include_examples: bool) -> Self {
        Self { include_examples, ..self }
    }

    pub fn with_tests(self, install_tests: bool) -> Self {
        Self { install_tests, ..self }
    }

    pub fn with_extra_dependencies(self, install_extra_dependencies: bool) -> Self {
        Self { install_extra_dependencies, ..self }
    }

    pub fn with_backend(self, install_backend: bool) -> Self {
        Self { install_backend, ..self }
    }

    pub fn with_package_manager(self, package_manager: PackageManager) -> Self {
        Self { package_manager, ..self }
    }

    pub fn with_styling(self, styling: Styling) -> Self {
        Self { styling, ..self }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Name of the directory the project is generated into: the package name
    /// without its `@scope/` prefix.
    pub fn directory_name(&self) -> &str {
        self.project_name.rsplit('/').next().unwrap_or(&self.project_name)
    }

    pub fn styling(&self) -> Styling {
        self.styling
    }

    pub fn uses_styled_components(&self) -> bool {
        self.styling == Styling::StyledComponents
    }

    pub fn include_examples(&self) -> bool {
        self.include_examples
    }

    pub fn install_tests(&self) -> bool {
        self.install_tests
    }

    pub fn install_extra_dependencies(&self) -> bool {
        self.install_extra_dependencies
    }

    pub fn install_backend(&self) -> bool {
        self.install_backend
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    /// Context handed to the template renderer.
    ///
    /// Contains the serialized configuration plus a few derived values, and
    /// nothing that depends on the environment.
    pub fn template_context(&self) -> serde_json::Value {
        json!({
            "project_name": self.project_name,
            "directory_name": self.directory_name(),
            "styling": self.styling,
            "styled": self.uses_styled_components(),
            "include_examples": self.include_examples,
            "install_tests": self.install_tests,
            "install_extra_dependencies": self.install_extra_dependencies,
            "install_backend": self.install_backend,
            "package_manager": self.package_manager,
            "run_dev": self.package_manager.run_script("dev"),
            "test_command": self.package_manager.run_script("test"),
        })
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Configuration preview shown before the operator confirms generation.
impl fmt::Display for ProjectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let project_type = if self.include_examples { "Complete" } else { "Clean" };
        writeln!(f, "Project configuration:")?;
        writeln!(f, "  Name:               {}", self.project_name)?;
        writeln!(f, "  Styling:            {}", self.styling)?;
        writeln!(f, "  Project type:       {project_type}")?;
        writeln!(f, "  Tests:              {}", yes_no(self.install_tests))?;
        writeln!(f, "  Extra dependencies: {}", yes_no(self.install_extra_dependencies))?;
        writeln!(f, "  Backend:            {}", yes_no(self.install_backend))?;
        writeln!(f, "  Package manager:    {}", self.package_manager)
    }
}

/// Checks `name` against the package-name rule used for new projects.
///
/// # Errors
/// * `Error::ValidationError` for `project_name` describing the violation
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::validation(PROJECT_NAME, "must not be empty"));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(Error::validation(
            PROJECT_NAME,
            format!("must be at most {MAX_NAME_LENGTH} characters"),
        ));
    }
    if name.contains('\\') || (name.contains('/') && !name.starts_with('@')) {
        return Err(Error::validation(PROJECT_NAME, "must not contain path separators"));
    }
    if !NAME_PATTERN.is_match(name) {
        return Err(Error::validation(
            PROJECT_NAME,
            format!(
                "'{name}' is not a valid package name \
                 (lowercase letters, digits, hyphens, optional @scope/ prefix)"
            ),
        ));
    }
    Ok(())
}

/// JSON schema fragment for a known answer key.
fn answer_schema(key: &str) -> Option<serde_json::Value> {
    let schema = match key {
        PROJECT_NAME => json!({ "type": "string" }),
        STYLING => json!({ "enum": ["styled-components", "tailwind"] }),
        PACKAGE_MANAGER => json!({ "enum": ["npm", "yarn", "pnpm"] }),
        INCLUDE_EXAMPLES | INSTALL_TESTS | INSTALL_EXTRA_DEPENDENCIES | INSTALL_BACKEND => {
            json!({ "type": "boolean" })
        }
        _ => return None,
    };
    Some(schema)
}

fn typed_answer<T: serde::de::DeserializeOwned>(answers: &Answers, key: &str) -> Result<Option<T>> {
    match answers.get(key) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| Error::validation(key, e.to_string())),
    }
}

fn flag(answers: &Answers, key: &str) -> bool {
    answers.get(key).and_then(|v| v.as_bool()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, serde_json::Value)]) -> Answers {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn test_from_answers_defaults_booleans_to_false() {
        let config = ProjectConfig::from_answers(&answers(&[
            (PROJECT_NAME, json!("demo-app")),
            (STYLING, json!("tailwind")),
        ]))
        .unwrap();

        assert_eq!(config.project_name(), "demo-app");
        assert_eq!(config.styling(), Styling::Tailwind);
        assert!(!config.include_examples());
        assert!(!config.install_tests());
        assert!(!config.install_extra_dependencies());
        assert!(!config.install_backend());
        assert_eq!(config.package_manager(), PackageManager::Npm);
    }

    #[test]
    fn test_from_answers_reads_every_field() {
        let config = ProjectConfig::from_answers(&answers(&[
            (PROJECT_NAME, json!("shop")),
            (STYLING, json!("styled-components")),
            (INCLUDE_EXAMPLES, json!(true)),
            (INSTALL_TESTS, json!(true)),
            (INSTALL_EXTRA_DEPENDENCIES, json!(true)),
            (INSTALL_BACKEND, json!(true)),
            (PACKAGE_MANAGER, json!("pnpm")),
        ]))
        .unwrap();

        assert!(config.uses_styled_components());
        assert!(config.include_examples());
        assert!(config.install_tests());
        assert!(config.install_extra_dependencies());
        assert!(config.install_backend());
        assert_eq!(config.package_manager(), PackageManager::Pnpm);
    }

    #[test]
    fn test_from_answers_names_offending_field() {
        let result = ProjectConfig::from_answers(&answers(&[
            (PROJECT_NAME, json!("demo")),
            (STYLING, json!("tailwind")),
            (INSTALL_TESTS, json!("yes")),
        ]));
        match result {
            Err(Error::ValidationError { field, .. }) => assert_eq!(field, INSTALL_TESTS),
            other => panic!("Expected ValidationError, got {other:?}"),
        }

        let result = ProjectConfig::from_answers(&answers(&[
            (PROJECT_NAME, json!("demo")),
            (STYLING, json!("bootstrap")),
        ]));
        match result {
            Err(Error::ValidationError { field, .. }) => assert_eq!(field, STYLING),
            other => panic!("Expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn test_from_answers_requires_name_and_styling() {
        let result = ProjectConfig::from_answers(&answers(&[(STYLING, json!("tailwind"))]));
        assert!(matches!(
            result,
            Err(Error::ValidationError { field, .. }) if field == PROJECT_NAME
        ));

        let result = ProjectConfig::from_answers(&answers(&[
            (PROJECT_NAME, json!("demo")),
            (STYLING, serde_json::Value::Null),
        ]));
        assert!(matches!(result, Err(Error::ValidationError { field, .. }) if field == STYLING));
    }

    #[test]
    fn test_from_answers_ignores_unknown_keys() {
        let config = ProjectConfig::from_answers(&answers(&[
            (PROJECT_NAME, json!("demo")),
            (STYLING, json!("tailwind")),
            ("favourite_color", json!("blue")),
        ]));
        assert!(config.is_ok());
    }

    #[test]
    fn test_validate_project_name() {
        for valid in ["demo-app", "app2", "my.app", "@acme/web", "a"] {
            assert!(validate_project_name(valid).is_ok(), "{valid} should be valid");
        }
        let invalid_names =
            ["", "Demo", "my app", "../escape", "a/b", "a\\b", ".hidden", "@acme/web/x"];
        for invalid in invalid_names {
            assert!(validate_project_name(invalid).is_err(), "{invalid} should be invalid");
        }
        assert!(validate_project_name(&"a".repeat(215)).is_err());
    }

    #[test]
    fn test_directory_name_drops_scope() {
        let config = ProjectConfig::new("@acme/web", Styling::Tailwind).unwrap();
        assert_eq!(config.directory_name(), "web");

        let config = ProjectConfig::new("demo-app", Styling::Tailwind).unwrap();
        assert_eq!(config.directory_name(), "demo-app");
    }

    #[test]
    fn test_run_script() {
        assert_eq!(PackageManager::Npm.run_script("dev"), "npm run dev");
        assert_eq!(PackageManager::Yarn.run_script("dev"), "yarn dev");
        assert_eq!(PackageManager::Pnpm.run_script("test"), "pnpm test");
    }
}
