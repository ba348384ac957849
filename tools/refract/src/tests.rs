use super::init_logging;

#[test]
fn init_logging_can_run_twice() {
    init_logging();
    init_logging();
    tracing::debug!("logging installed");
}
