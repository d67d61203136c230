use bidcalc::tracing_helper::initialize;

// Installs the process-wide subscriber, so it lives in its own test binary.
#[test]
fn initialize_can_be_called_twice() {
    initialize("warn");
    initialize("warn,bidcalc=debug");
    tracing::warn!("logging after initialization");
}
