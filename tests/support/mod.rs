use std::sync::Mutex;

/// The one environment variable the store reads.
const FLIGHTS_DATA: &str = "FLIGHTS_DATA";

static FLIGHTS_DATA_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with `FLIGHTS_DATA` set to `path` (or removed for `None`),
/// restoring the previous value afterwards.
///
/// Panic-safe (the restore happens on unwind) and serialized across test
/// threads, so parallel tests cannot observe each other's store
/// configuration. Not reentrant: do not nest calls.
pub fn with_flights_data<F, R>(path: Option<&str>, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = FLIGHTS_DATA_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = FlightsDataGuard::set(path);
    f()
}

struct FlightsDataGuard {
    previous: Option<String>,
}

impl FlightsDataGuard {
    fn set(path: Option<&str>) -> Self {
        let previous = std::env::var(FLIGHTS_DATA).ok();
        match path {
            Some(value) => std::env::set_var(FLIGHTS_DATA, value),
            None => std::env::remove_var(FLIGHTS_DATA),
        }
        Self { previous }
    }
}

impl Drop for FlightsDataGuard {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(value) => std::env::set_var(FLIGHTS_DATA, value),
            None => std::env::remove_var(FLIGHTS_DATA),
        }
    }
}
