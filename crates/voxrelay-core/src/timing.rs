use std::future::Future;
use std::time::{Duration, Instant};

/// Output of a future together with the wall-clock time it took
#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Elapsed time in fractional seconds, as reported to callers
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Await `future` and measure how long it took
///
/// Used purely for observability; nothing is cancelled or retried based
/// on the measurement.
pub async fn timed<F: Future>(future: F) -> Timed<F::Output> {
    let start = Instant::now();
    let value = future.await;

    Timed {
        value,
        elapsed: start.elapsed(),
    }
}
