mod args;
mod logging;

pub use args::normalize_legacy_flags;
pub use logging::init_logging;
