use log::LevelFilter;

pub fn log_level(verbose: bool, debug: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Trace
    } else if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

pub fn init_logging(verbose: bool, debug: bool, quiet: bool) {
    env_logger::Builder::new()
        .filter_level(log_level(verbose, debug, quiet))
        .parse_default_env()
        .init();
}
