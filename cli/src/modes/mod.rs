//! Subcommand implementations. Each returns the text printed on stdout.

pub mod bench;
pub mod codec;
pub mod id;

use crate::args::Command;
use std::error::Error;

pub fn run(command: &Command) -> Result<String, Box<dyn Error + Send + Sync>> {
    match command {
        Command::Encode { input, utf8 } => codec::encode(input, *utf8),
        Command::Decode { text, utf8 } => codec::decode(text, *utf8),
        Command::IdFormat { prefix, address } => id::format(prefix, address),
        Command::IdParse { id } => id::parse(id),
        Command::Bench { size, iterations, threads } => {
            let num_threads = match threads {
                Some(threads) => *threads,
                None => crate::common::default_worker_count()?,
            };
            bench::run(num_threads, *size, *iterations)
        }
    }
}
