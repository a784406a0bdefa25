use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::Instant;

pub struct GlobalStats {
    num_threads: usize,
    buffer_size: usize,
    round_trips: AtomicU64,
    bytes_encoded: AtomicU64,
    symbols_encoded: AtomicU64,
    start_time: Instant,
}

impl GlobalStats {
    pub fn new(num_threads: usize, buffer_size: usize) -> Self {
        Self {
            num_threads,
            buffer_size,
            round_trips: AtomicU64::new(0),
            bytes_encoded: AtomicU64::new(0),
            symbols_encoded: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn add_round_trip(&self, bytes: usize, symbols: usize) {
        self.round_trips.fetch_add(1, Ordering::Relaxed);
        self.bytes_encoded.fetch_add(bytes as u64, Ordering::Relaxed);
        self.symbols_encoded.fetch_add(symbols as u64, Ordering::Relaxed);
    }

    pub fn round_trips(&self) -> u64 {
        self.round_trips.load(Ordering::Relaxed)
    }

    pub fn summary(&self) -> String {
        let buffer_size = self.buffer_size;
        let round_trips = self.round_trips.load(Ordering::Relaxed);
        let bytes_encoded = self.bytes_encoded.load(Ordering::Relaxed);
        let symbols_encoded = self.symbols_encoded.load(Ordering::Relaxed);

        let elapsed_seconds = self.start_time.elapsed().as_secs_f64().max(f64::EPSILON);
        let round_trips_per_second = round_trips as f64 / elapsed_seconds / 1_000.0;
        let thread_round_trips_per_second = round_trips_per_second / self.num_threads as f64;
        let megabytes_per_second = bytes_encoded as f64 / elapsed_seconds / 1_000_000.0;
        let symbols_per_byte = if bytes_encoded > 0 {
            symbols_encoded as f64 / bytes_encoded as f64
        } else {
            0.0
        };

        format!("GLOBAL STATS ({buffer_size} byte buffers): {round_trips} round trips in {elapsed_seconds:.2}s ({round_trips_per_second:.2}K round trips/sec, {thread_round_trips_per_second:.4}K round trips/sec/thread, {megabytes_per_second:.2} MB/sec, {symbols_per_byte:.4} symbols/byte)")
    }

    pub fn print_stats(&self, thread_id: usize) {
        println!("[CPU-{thread_id}] {}", self.summary());
    }
}
