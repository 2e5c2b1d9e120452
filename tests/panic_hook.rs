// Installs a process-wide panic hook, so it lives in its own test binary.

use settle::{catch_sync, observability::route_panics_to_tracing, Outcome, Panic};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_caught_panic_reported_as_debug_event() {
    route_panics_to_tracing();

    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let outcome: Outcome<u8, Panic> = tracing::subscriber::with_default(subscriber, || {
        catch_sync(|| -> u8 { panic!("RangeError: bad") })
    });

    assert_eq!(outcome.error().and_then(Panic::message), Some("RangeError: bad"));

    let logged = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
    assert!(
        logged.contains("panicked: RangeError: bad"),
        "Panic should be routed to tracing: {}",
        logged
    );
    assert!(logged.contains("settle::panic"), "Event should use the panic target: {}", logged);
}
