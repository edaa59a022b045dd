use anyhow::Result;
use log::debug;

use fixture_program::entry;
use fixture_program::globals::GLOBAL_VAR_INIT;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the result lines.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    // Never load `global_var` here: read watchpoints on it must stay silent.
    debug!("global_var initialized to {}", GLOBAL_VAR_INIT);

    entry::run()
}
