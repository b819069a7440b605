use chrono::Local;
use clap::Parser;
use env_logger::Env;
use log::info;
use pq_bench::{config, BenchConfig};
use std::io;
use std::process;

/// Times AES-CBC, RSA PKCS#1 v1.5 and SPHINCS+ SHAKE-128f and prints a CSV table.
#[derive(Parser)]
#[command(name = "pq-bench", version)]
struct Args {
    #[arg(long, default_value_t = config::DEFAULT_ITERATIONS)]
    iterations: usize,

    #[arg(long, default_value_t = config::DEFAULT_AES_KEY_BITS)]
    aes_bits: u32,

    #[arg(long, default_value_t = config::DEFAULT_RSA_MODULUS_BITS)]
    rsa_bits: usize,

    #[arg(long, default_value_t = config::DEFAULT_MESSAGE_LEN)]
    message_len: usize,

    /// Seed the RNG for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Args> for BenchConfig {
    fn from(args: Args) -> Self {
        Self {
            iterations: args.iterations,
            aes_key_bits: args.aes_bits,
            rsa_modulus_bits: args.rsa_bits,
            message_len: args.message_len,
            seed: args.seed,
        }
    }
}

fn main() {
    // stderr stays quiet on a nominal run unless RUST_LOG asks for more
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    let config = BenchConfig::from(Args::parse());
    info!("Benchmark configuration: {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = pq_bench::run(&config, &mut out) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
