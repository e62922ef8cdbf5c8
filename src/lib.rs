use env_logger::Env;
use std::sync::Once;

pub mod charts;
pub mod color;
pub mod report;
pub mod series;
pub mod table;
pub mod variation;

static INIT: Once = Once::new();

pub fn init_logging(is_test: bool) {
    INIT.call_once(|| {
        let default_filter = if is_test {
            // In tests, be more chatty by default.
            "info,rmplot=debug"
        } else {
            // In normal runs, keep everything else at error.
            "error,rmplot=info"
        };

        let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
            .is_test(is_test)
            .try_init();
    });
}
