//! Generation plan.
//! Everything a run will do is computed here before any side effect happens: the
//! commands to execute, the directories to ensure and the rendered file contents.
//! A plan depends only on the configuration, so `--dry-run` and the real run agree.

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use log::{debug, warn};

use crate::catalog::{is_test_path, Catalog};
use crate::commands::{install_command, prisma_init_command, scaffold_command};
use crate::config::ProjectConfig;
use crate::dependencies::{self, Dependencies};
use crate::directories;
use crate::error::Result;
use crate::renderer::TemplateRenderer;
use crate::shell::ShellCommand;

/// A rendered file, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub content: String,
}

/// The full, precomputed set of actions for one configuration.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    /// Base project creation
    pub scaffold: ShellCommand,
    /// Package lists the install commands were built from
    pub dependencies: Dependencies,
    /// Production installs, development installs, then tool initialisation
    pub installs: Vec<ShellCommand>,
    /// Directories relative to the root, parents first
    pub directories: Vec<PathBuf>,
    /// Rendered files in catalog order
    pub files: Vec<PlannedFile>,
}

impl GenerationPlan {
    /// Builds the plan for `config`.
    ///
    /// # Arguments
    /// * `config` - Validated project configuration
    /// * `catalog` - Templates to select from
    /// * `renderer` - Engine used to render every applicable template
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if a template fails to render
    ///
    /// # Notes
    /// When two applicable templates target the same path, a warning is logged and
    /// the later one wins.
    pub fn build(
        config: &ProjectConfig,
        catalog: &Catalog,
        renderer: &dyn TemplateRenderer,
    ) -> Result<Self> {
        let dependencies = dependencies::select(config);
        let manager = config.package_manager();

        let mut installs: Vec<ShellCommand> = [
            install_command(manager, dependencies.prod.iter(), false),
            install_command(manager, dependencies.dev.iter(), true),
        ]
        .into_iter()
        .flatten()
        .collect();
        if config.install_backend() {
            installs.push(prisma_init_command());
        }

        let mut rendered: IndexMap<&str, String> = IndexMap::new();
        for template in catalog.applicable(config) {
            debug!("Rendering '{}'.", template.relative_path);
            let content = template.render(renderer, config)?;
            if rendered.insert(template.relative_path, content).is_some() {
                warn!(
                    "'{}' is produced by more than one template, keeping the last one.",
                    template.relative_path
                );
            }
        }

        let files = rendered
            .into_iter()
            .map(|(path, content)| PlannedFile { path: PathBuf::from(path), content })
            .collect();

        Ok(Self {
            scaffold: scaffold_command(config),
            dependencies,
            installs,
            directories: directories::plan(config),
            files,
        })
    }

    /// Looks up a planned file by its `/`-separated relative path.
    pub fn file(&self, relative_path: &str) -> Option<&PlannedFile> {
        self.files.iter().find(|file| file.path == PathBuf::from(relative_path))
    }

    /// Files that belong to the generated test setup.
    pub fn test_files(&self) -> impl Iterator<Item = &PlannedFile> {
        self.files.iter().filter(|file| is_test_path(&file.path.to_string_lossy()))
    }

    /// Every command in execution order.
    pub fn commands(&self) -> impl Iterator<Item = &ShellCommand> {
        std::iter::once(&self.scaffold).chain(self.installs.iter())
    }
}

/// Dry-run listing.
impl fmt::Display for GenerationPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Commands:")?;
        for command in self.commands() {
            writeln!(f, "  {command}")?;
        }
        writeln!(f, "Directories:")?;
        for dir in &self.directories {
            writeln!(f, "  {}", dir.display())?;
        }
        writeln!(f, "Files:")?;
        for file in &self.files {
            writeln!(f, "  {} ({} bytes)", file.path.display(), file.content.len())?;
        }
        Ok(())
    }
}
