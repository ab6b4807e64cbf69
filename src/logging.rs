use env_logger::Env;

/// Initialise the env_logger backend once, from `main`.
///
/// Defaults to `warn` so diagnostics stay off the game screen; raise it
/// with `RUST_LOG=debug` to watch guess classification and round setup.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();
}
