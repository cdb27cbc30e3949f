// Replays an oracle file produced by oracle_gen against the reference cipher.
// Every line must parse and re-encrypt to the recorded ciphertext.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{arg, value_parser};

use aes256_kat::kat_vector::parse_record;
use aes256_kat::kat_verify::{check_vector, VerifyReport};
use aes256_kat::logging::init_tracing;
use aes256_kat::reference_cipher::ReferenceAes256;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let args = clap::Command::new("replay_oracle")
        .about("Re-check oracle records against the reference AES-256")
        .arg(arg!(<FILE> "Oracle file (key pt ct per line)").value_parser(value_parser!(PathBuf)))
        .get_matches();

    let path = args.get_one::<PathBuf>("FILE").context("missing oracle file")?;
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;

    let mut report = VerifyReport::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("read error in {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let v = parse_record(i + 1, &line)?;
        report.record(check_vector(&ReferenceAes256, &v));
    }

    if !report.all_pass() {
        bail!(
            "{} of {} records do not match the reference cipher (first at record {})",
            report.failed.len(),
            report.total,
            report.failed[0]
        );
    }
    println!("Oracle check OK for {} records", report.total);
    Ok(())
}
