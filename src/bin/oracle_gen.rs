// Streams random AES-256 ECB oracle records to stdout:
//   <key 64 hex> <plaintext 32 hex> <ciphertext 32 hex>
// Key and plaintext come from the OS CSPRNG, ciphertext from the reference cipher.

use std::io::{self, BufWriter};

use anyhow::Context;
use clap::{arg, value_parser};
use rand_core::OsRng;

use aes256_kat::logging::init_tracing;
use aes256_kat::oracle_gen::{write_oracle, OracleConfig, OracleGenerator};
use aes256_kat::reference_cipher::ReferenceAes256;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let args = clap::Command::new("oracle_gen")
        .about("Random AES-256 ECB known-answer oracle")
        .arg(arg!(--count <N> "Number of records to generate").required(false).value_parser(value_parser!(u64)))
        .get_matches();

    let mut cfg = OracleConfig::default();
    if let Some(n) = args.get_one::<u64>("count") {
        cfg.count = *n;
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut gen = OracleGenerator::new(OsRng, ReferenceAes256);

    write_oracle(&mut out, &mut gen, cfg.count).context("oracle generation aborted")?;
    Ok(())
}
