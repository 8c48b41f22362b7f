//! rnt's main application entry point and orchestration logic.
//! Collects answers, validates the configuration, builds the generation plan and
//! drives the generator.

use rnt::{
    answers::{get_answers, get_answers_from},
    catalog::Catalog,
    cli::{get_args, Args},
    config::{ProjectConfig, PACKAGE_MANAGER, PROJECT_NAME},
    error::{default_error_handler, Result},
    generator::{check_output_dir, ProjectGenerator},
    logger::init_logger,
    plan::GenerationPlan,
    prompt::{DialoguerPrompter, Prompter},
    renderer::MiniJinjaRenderer,
    shell::ProcessRunner,
    writer::DiskWriter,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads preloaded answers from stdin and arguments
/// 2. Prompts for the remaining answers
/// 3. Validates the configuration
/// 4. Builds the plan (printed and returned early with `--dry-run`)
/// 5. Checks the target directory and asks for confirmation
/// 6. Runs the generator and prints the next steps
fn run(args: Args) -> Result<()> {
    let renderer = MiniJinjaRenderer::new();
    let prompt = DialoguerPrompter::new();

    let mut preloaded = get_answers_from(args.stdin)?;
    if let Some(name) = args.project_name {
        preloaded.insert(PROJECT_NAME.to_string(), name.into());
    }
    if let Some(manager) = args.package_manager {
        preloaded.insert(PACKAGE_MANAGER.to_string(), manager.program().into());
    }

    let answers = get_answers(&prompt, preloaded)?;
    let config = ProjectConfig::from_answers(&answers)?;
    let plan = GenerationPlan::build(&config, &Catalog::builtin(), &renderer)?;

    if args.dry_run {
        print!("{config}");
        print!("{plan}");
        return Ok(());
    }

    let output_root = check_output_dir(std::env::current_dir()?.join(config.directory_name()))?;

    print!("{config}");
    if !prompt.confirm(args.yes, "Create the project with these settings?".to_string())? {
        println!("Generation cancelled.");
        return Ok(());
    }

    let shell = ProcessRunner::new();
    let writer = DiskWriter::new();
    let mut generator = ProjectGenerator::new(&config, &plan, &output_root, &shell, &writer);
    let summary = generator.run()?;

    println!();
    print!("{summary}");
    Ok(())
}
