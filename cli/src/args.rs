use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(name = "b58")]
#[command(about = "Base58 (Bitcoin alphabet) encoder, decoder and content id tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone)]
pub enum Command {
    /// Encode bytes as base58
    Encode {
        /// Input bytes as hex (optional 0x prefix)
        input: String,
        /// Treat the input as UTF-8 text instead of hex
        #[arg(long)]
        utf8: bool,
    },
    /// Decode a base58 string
    Decode {
        /// Base58 text
        text: String,
        /// Print the decoded bytes as UTF-8 text instead of hex
        #[arg(long)]
        utf8: bool,
    },
    /// Build a content id from a prefix and an address
    IdFormat {
        /// 4-character kind prefix, e.g. iq__
        prefix: String,
        /// 20-byte address (hex)
        address: String,
    },
    /// Split a content id into its kind and address
    IdParse {
        /// Content id, e.g. iq__...
        id: String,
    },
    /// Encode and decode random buffers on every core
    Bench {
        /// Size of each random buffer in bytes
        #[arg(long, default_value_t = 32)]
        size: usize,
        /// Round trips per thread
        #[arg(long, default_value_t = 100_000)]
        iterations: usize,
        /// Worker threads (defaults to B58_BENCH_THREADS, then the core count)
        #[arg(long)]
        threads: Option<usize>,
    },
}

impl Command {
    pub fn validate(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        match self {
            Command::Encode { input, utf8 } => {
                if !utf8 {
                    common::validate_hex_string(input)?;
                }
            }
            Command::Decode { text, .. } => {
                common::validate_base58_string(text)?;
            }
            Command::IdFormat { prefix, address } => {
                common::validate_id_prefix(prefix)?;
                common::validate_address_hex_string(address)?;
            }
            // Id::from_str reports malformed ids
            Command::IdParse { .. } => {}
            Command::Bench { iterations, threads, .. } => {
                if *iterations == 0 {
                    return Err("iterations must be greater than zero".into());
                }
                if *threads == Some(0) {
                    return Err("threads must be greater than zero".into());
                }
            }
        }
        Ok(())
    }

    pub fn description(&self) -> String {
        match self {
            Command::Encode { input, utf8 } => {
                format!("Encoding {} input '{}'", if *utf8 { "utf8" } else { "hex" }, input)
            }
            Command::Decode { text, .. } => {
                format!("Decoding '{}'", text)
            }
            Command::IdFormat { prefix, address } => {
                format!("Formatting id with prefix '{}' and address '{}'", prefix, address)
            }
            Command::IdParse { id } => {
                format!("Parsing id '{}'", id)
            }
            Command::Bench { size, iterations, .. } => {
                format!("Benchmarking {} round trips per thread of {} byte buffers", iterations, size)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(args).unwrap().command
    }

    #[test]
    fn should_parse_subcommands() {
        assert!(matches!(parse(&["b58", "encode", "00ff"]), Command::Encode { utf8: false, .. }));
        assert!(matches!(parse(&["b58", "decode", "--utf8", "2NEpo7TZRRrLZSi2U"]), Command::Decode { utf8: true, .. }));
        assert!(matches!(
            parse(&["b58", "bench", "--size", "64"]),
            Command::Bench { size: 64, iterations: 100_000, threads: None }
        ));
    }

    #[test]
    fn should_validate_inputs() {
        let address = "11".repeat(20);
        assert!(parse(&["b58", "encode", "0x00ff"]).validate().is_ok());
        assert!(parse(&["b58", "encode", "not hex"]).validate().is_err());
        assert!(parse(&["b58", "encode", "--utf8", "not hex"]).validate().is_ok());
        assert!(parse(&["b58", "decode", "0OIl"]).validate().is_err());
        assert!(parse(&["b58", "id-format", "iq__", &address]).validate().is_ok());
        assert!(parse(&["b58", "id-format", "iukn", &address]).validate().is_err());
        assert!(parse(&["b58", "id-format", "iq__", "11"]).validate().is_err());
        assert!(parse(&["b58", "id-parse", "iq_"]).validate().is_ok());
        assert!(parse(&["b58", "bench", "--iterations", "0"]).validate().is_err());
        assert!(parse(&["b58", "bench", "--threads", "0"]).validate().is_err());
    }
}
