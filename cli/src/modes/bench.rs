use crate::common::{GlobalStats, spawn_workers};
use std::error::Error;
use std::sync::Arc;

const PROGRESS_INTERVAL: usize = 1 << 16;

fn worker(
    thread_id: usize,
    buffer_size: usize,
    iterations: usize,
    global_stats: Arc<GlobalStats>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    use rand::Rng as _;

    let mut rng = rand::thread_rng();
    let mut buffer = vec![0u8; buffer_size];

    log::debug!("[CPU-{}] Starting bench worker thread", thread_id);

    for iteration in 0..iterations {
        rng.fill(&mut buffer[..]);
        // Every few rounds force leading zeros through the codec
        let leading_zeros = if iteration % 8 == 0 { buffer_size.min(iteration % 5) } else { 0 };
        buffer[..leading_zeros].fill(0);

        let encoded = logic::encode(&buffer);
        if encoded.len() > logic::encoded_len_hint(buffer_size) {
            return Err(format!(
                "encoded length {} exceeds bound {} for {} bytes",
                encoded.len(),
                logic::encoded_len_hint(buffer_size),
                buffer_size
            )
            .into());
        }
        let decoded = logic::decode(&encoded)?;
        if decoded != buffer {
            return Err(format!(
                "round trip mismatch: {} -> {} -> {}",
                hex::encode(&buffer),
                encoded,
                hex::encode(&decoded)
            )
            .into());
        }

        global_stats.add_round_trip(buffer_size, encoded.len());

        if (iteration + 1) % PROGRESS_INTERVAL == 0 {
            global_stats.print_stats(thread_id);
        }
    }

    Ok(())
}

pub fn run(num_threads: usize, buffer_size: usize, iterations: usize) -> Result<String, Box<dyn Error + Send + Sync>> {
    println!("Starting bench with {} threads", num_threads);

    let global_stats = Arc::new(GlobalStats::new(num_threads, buffer_size));

    spawn_workers(num_threads, Arc::clone(&global_stats), move |thread_id, stats| {
        worker(thread_id, buffer_size, iterations, stats)
    })?;

    log::info!("Completed {} round trips", global_stats.round_trips());

    Ok(global_stats.summary())
}
