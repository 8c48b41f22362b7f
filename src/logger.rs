/// Configures `env_logger`: everything down to `Trace` when verbose, warnings and
/// errors otherwise.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose { log::LevelFilter::Trace } else { log::LevelFilter::Warn })
        .format_timestamp(None)
        .init();
}
