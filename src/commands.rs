//! Builders for the external commands a generation run executes.

use crate::config::{PackageManager, ProjectConfig, Styling};
use crate::shell::ShellCommand;

/// Base project creation through `create-next-app`, run inside the (empty) project root.
pub fn scaffold_command(config: &ProjectConfig) -> ShellCommand {
    let mut command = ShellCommand::new("npx").args([
        "create-next-app@latest",
        ".",
        "--typescript",
        "--eslint",
        "--app",
        "--src-dir",
        "--import-alias",
        "@/*",
    ]);
    command = match config.styling() {
        Styling::Tailwind => command.arg("--tailwind"),
        Styling::StyledComponents => command.arg("--no-tailwind"),
    };
    if !config.include_examples() {
        command = command.arg("--empty");
    }
    command.arg(format!("--use-{}", config.package_manager()))
}

/// Install command for `packages`, or `None` when there is nothing to install.
pub fn install_command<'a, I>(
    manager: PackageManager,
    packages: I,
    dev: bool,
) -> Option<ShellCommand>
where
    I: IntoIterator<Item = &'a &'static str>,
{
    let packages: Vec<&str> = packages.into_iter().copied().collect();
    if packages.is_empty() {
        return None;
    }

    let command = match (manager, dev) {
        (PackageManager::Npm, false) => {
            ShellCommand::new("npm").arg("install").args(packages).arg("--save")
        }
        (PackageManager::Npm, true) => {
            ShellCommand::new("npm").arg("install").args(packages).arg("--save-dev")
        }
        (PackageManager::Yarn, false) => ShellCommand::new("yarn").arg("add").args(packages),
        (PackageManager::Yarn, true) => {
            ShellCommand::new("yarn").arg("add").arg("--dev").args(packages)
        }
        (PackageManager::Pnpm, false) => ShellCommand::new("pnpm").arg("add").args(packages),
        (PackageManager::Pnpm, true) => {
            ShellCommand::new("pnpm").arg("add").arg("-D").args(packages)
        }
    };
    Some(command)
}

/// Prisma project initialisation, run after the backend packages are installed.
pub fn prisma_init_command() -> ShellCommand {
    ShellCommand::new("npx").args(["prisma", "init"])
}
