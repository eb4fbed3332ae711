/// Initializes the `env_logger` subscriber once per process; the corpus
/// itself is silent on logging, so this follows the ecosystem-standard
/// `log` + `env_logger` pairing used across the rest of the retrieval pack.
pub fn init() {
    let _ = env_logger::builder().format_timestamp_millis().try_init();
}
