use std::error::Error;
use std::sync::Arc;

/// Number of bench threads: `B58_BENCH_THREADS` if set, otherwise the core count.
pub fn default_worker_count() -> Result<usize, Box<dyn Error + Send + Sync>> {
    match std::env::var("B58_BENCH_THREADS") {
        Ok(value) => {
            let count = value
                .parse::<usize>()
                .map_err(|e| format!("Invalid B58_BENCH_THREADS '{}': {}", value, e))?;
            if count == 0 {
                return Err("B58_BENCH_THREADS must be greater than zero".into());
            }
            Ok(count)
        }
        Err(_) => Ok(std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)),
    }
}

/// Spawns `num_workers` threads, each running `worker_fn(thread_id, shared_data)`.
/// Waits for all to complete. Propagates errors without panicking.
pub fn spawn_workers<T, F>(
    num_workers: usize,
    shared_data: Arc<T>,
    worker_fn: F,
) -> Result<(), Box<dyn Error + Send + Sync>>
where
    T: Send + Sync + 'static,
    F: Fn(usize, Arc<T>) -> Result<(), Box<dyn Error + Send + Sync>> + Send + Clone + 'static,
{
    let handles: Vec<_> = (0..num_workers)
        .map(|i| {
            let data = Arc::clone(&shared_data);
            let f = worker_fn.clone();
            std::thread::spawn(move || f(i, data))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        handle
            .join()
            .map_err(|_| format!("Worker thread {} panicked", i))?
            .map_err(|e| format!("Worker thread {} failed: {}", i, e))?;
    }

    Ok(())
}
