use clap::Parser;
use rnt::cli::Args;
use rnt::config::PackageManager;
use std::ffi::OsString;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("rnt")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_no_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.project_name, None);
    assert!(!parsed.verbose);
    assert!(!parsed.stdin);
    assert!(!parsed.yes);
    assert!(!parsed.dry_run);
    assert_eq!(parsed.package_manager, None);
}

#[test]
fn test_project_name() {
    let parsed = Args::try_parse_from(make_args(&["demo-app"])).unwrap();
    assert_eq!(parsed.project_name.as_deref(), Some("demo-app"));
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--verbose",
        "--stdin",
        "--yes",
        "--dry-run",
        "--package-manager",
        "pnpm",
        "demo-app",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    assert!(parsed.stdin);
    assert!(parsed.yes);
    assert!(parsed.dry_run);
    assert_eq!(parsed.package_manager, Some(PackageManager::Pnpm));
}

#[test]
fn test_short_flags() {
    let parsed = Args::try_parse_from(make_args(&["-v", "-s", "-y"])).unwrap();

    assert!(parsed.verbose);
    assert!(parsed.stdin);
    assert!(parsed.yes);
}

#[test]
fn test_unknown_package_manager() {
    let args = make_args(&["--package-manager", "bun", "demo-app"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_positionals() {
    assert!(Args::try_parse_from(make_args(&["one", "two"])).is_err());
}
