//! Runs alone in its own binary: init installs a process-global
//! subscriber.

#[test]
fn init_installs_subscriber_without_panicking() {
    opini_prep::logger::init();
    tracing::info!("logging smoke check");
}
