/// Initializes the global logger from `RUST_LOG`, defaulting to `info`.
///
/// On wasm the `log` facade is left without a logger.
pub fn init() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let env = env_logger::Env::default().default_filter_or("info");
        // `try_init` only fails if a logger was already set.
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}
