//! Project generation pipeline.
//! [`ProjectGenerator`] walks a [`GenerationPlan`] through a fixed sequence of stages:
//! scaffold the base project, install dependencies, ensure directories, write files.
//! A failing stage stops the run; nothing is retried or rolled back.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use crate::plan::GenerationPlan;
use crate::shell::ShellRunner;
use crate::writer::FileSystemWriter;

/// Position of a run in the generation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    BaseScaffolded,
    DependenciesInstalled,
    DirectoriesEnsured,
    FilesWritten,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::BaseScaffolded => "base scaffolded",
            Stage::DependenciesInstalled => "dependencies installed",
            Stage::DirectoriesEnsured => "directories ensured",
            Stage::FilesWritten => "files written",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        write!(f, "{name}")
    }
}

/// Refuses to generate into a path that is already present.
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if `output_dir` exists
pub fn check_output_dir<P: AsRef<Path>>(output_dir: P) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

/// Executes one generation run.
pub struct ProjectGenerator<'a> {
    config: &'a ProjectConfig,
    plan: &'a GenerationPlan,
    root: PathBuf,
    shell: &'a dyn ShellRunner,
    writer: &'a dyn FileSystemWriter,
    stage: Stage,
}

impl<'a> ProjectGenerator<'a> {
    /// Creates a generator in the [`Stage::Start`] stage.
    ///
    /// # Arguments
    /// * `config` - Configuration the plan was built from
    /// * `plan` - Precomputed commands, directories and files
    /// * `root` - Project directory; must not exist yet
    /// * `shell` - Runs the scaffold and install commands
    /// * `writer` - Persists directories and files
    pub fn new<P: AsRef<Path>>(
        config: &'a ProjectConfig,
        plan: &'a GenerationPlan,
        root: P,
        shell: &'a dyn ShellRunner,
        writer: &'a dyn FileSystemWriter,
    ) -> Self {
        Self { config, plan, root: root.as_ref().to_path_buf(), shell, writer, stage: Stage::Start }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Runs every remaining stage.
    ///
    /// # Returns
    /// * `Result<Summary>` - Next steps for the operator once the run is done
    ///
    /// # Errors
    /// * `Error::OutputDirectoryExistsError` if the root exists before scaffolding
    /// * `Error::ScaffoldError` if the base project could not be created
    /// * `Error::InstallError` if a dependency step failed
    /// * `Error::WriteError` if a directory or file could not be written
    /// * `Error::InvalidStageError` if the generator already failed
    pub fn run(&mut self) -> Result<Summary> {
        while self.stage != Stage::Done {
            let next = match self.advance() {
                Ok(next) => next,
                Err(err) => {
                    error!("Generation stopped after the '{}' stage: {err}", self.stage);
                    self.stage = Stage::Failed;
                    return Err(err);
                }
            };
            debug!("Stage: {} -> {next}", self.stage);
            self.stage = next;
        }
        Ok(Summary::new(self.config))
    }

    fn advance(&self) -> Result<Stage> {
        match self.stage {
            Stage::Start => {
                self.scaffold()?;
                Ok(Stage::BaseScaffolded)
            }
            Stage::BaseScaffolded => {
                self.install()?;
                Ok(Stage::DependenciesInstalled)
            }
            Stage::DependenciesInstalled => {
                self.ensure_directories()?;
                Ok(Stage::DirectoriesEnsured)
            }
            Stage::DirectoriesEnsured => {
                self.write_files()?;
                Ok(Stage::FilesWritten)
            }
            Stage::FilesWritten | Stage::Done => Ok(Stage::Done),
            Stage::Failed => Err(Error::InvalidStageError(self.stage.to_string())),
        }
    }

    fn scaffold(&self) -> Result<()> {
        check_output_dir(&self.root)?;
        println!("Creating a new Next.js app in '{}'.", self.root.display());

        self.writer.ensure_directory(&self.root)?;
        self.shell
            .run(&self.plan.scaffold, &self.root)
            .map_err(|e| Error::ScaffoldError(e.to_string()))?;

        let manifest = self.root.join("package.json");
        if !manifest.is_file() {
            return Err(Error::ScaffoldError(format!(
                "'{}' has no package.json after scaffolding",
                self.root.display()
            )));
        }

        // create-next-app names the package after the directory, dropping any scope.
        if self.config.project_name() != self.config.directory_name() {
            self.set_package_name(&manifest)?;
        }
        Ok(())
    }

    fn set_package_name(&self, manifest: &Path) -> Result<()> {
        let invalid = |reason: String| {
            Error::ScaffoldError(format!("cannot update '{}': {reason}", manifest.display()))
        };

        let content = fs::read_to_string(manifest).map_err(|e| invalid(e.to_string()))?;
        let mut package: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;
        let fields = package
            .as_object_mut()
            .ok_or_else(|| invalid("top-level value is not an object".to_string()))?;
        fields.insert("name".to_string(), self.config.project_name().into());

        let mut updated =
            serde_json::to_string_pretty(&package).map_err(|e| invalid(e.to_string()))?;
        updated.push('\n');
        debug!("Package name set to '{}'", self.config.project_name());
        self.writer.write_file(manifest, &updated).map_err(|e| invalid(e.to_string()))
    }

    fn install(&self) -> Result<()> {
        for command in &self.plan.installs {
            println!("Running: {command}");
            self.shell
                .run(command, &self.root)
                .map_err(|e| Error::InstallError(e.to_string()))?;
        }
        Ok(())
    }

    fn ensure_directories(&self) -> Result<()> {
        for dir in &self.plan.directories {
            self.writer.ensure_directory(&self.root.join(dir))?;
        }
        info!("Ensured {} directories.", self.plan.directories.len());
        Ok(())
    }

    fn write_files(&self) -> Result<()> {
        for file in &self.plan.files {
            let target = self.root.join(&file.path);
            self.writer.write_file(&target, &file.content)?;
            println!("Created: '{}'", file.path.display());
        }
        Ok(())
    }
}

/// Next steps printed after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    config: ProjectConfig,
}

impl Summary {
    pub fn new(config: &ProjectConfig) -> Self {
        Self { config: config.clone() }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = &self.config;
        let manager = config.package_manager();

        writeln!(f, "Project '{}' created successfully.", config.project_name())?;
        writeln!(f)?;
        writeln!(f, "Next steps:")?;
        writeln!(f, "  cd {}", config.directory_name())?;
        writeln!(f, "  {}", manager.run_script("dev"))?;
        writeln!(f)?;
        writeln!(f, "Styling: {}", config.styling())?;
        if config.include_examples() {
            writeln!(f, "Project type: Complete, with example pages and components")?;
        } else {
            writeln!(f, "Project type: Clean, minimal structure")?;
        }
        if config.install_tests() {
            writeln!(f, "Run the tests with: {}", manager.run_script("test"))?;
        }
        if config.install_extra_dependencies() {
            writeln!(f, "Extras: Formik, Yup, IMask, React Hot Toast, Framer Motion, React Icons")?;
        }
        if config.install_backend() {
            writeln!(f)?;
            writeln!(f, "Backend setup:")?;
            writeln!(f, "  1. Copy .env.example to .env and set DATABASE_URL and JWT_SECRET")?;
            writeln!(f, "  2. npx prisma db push")?;
            writeln!(f, "  3. npx prisma generate")?;
            writeln!(f, "  4. Set the Stripe, Resend and Melhor Envio keys used by the shop")?;
        }
        Ok(())
    }
}
