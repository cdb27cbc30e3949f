// Formats the ECB encrypt files of the NIST AES KAT corpus (KAT_AES.zip) as
// self-checking test code for the implementation under test.
// The default C output is meant to be pasted into MainTest.c, which declares
// `pass`, `allPass` and AES256_Encrypt; --standalone emits a complete program.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::{arg, value_parser, ArgAction};
use tracing::info;

use aes256_kat::kat_ingest::{run_ingest, Extraction, IngestConfig};
use aes256_kat::kat_template::HarnessTemplate;
use aes256_kat::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let args = clap::Command::new("collate_kat")
        .about("Emit self-checking AES-256 ECB tests from NIST KAT files")
        .arg(arg!(--corpus_dir <DIR> "Directory holding the KAT files").required(false).value_parser(value_parser!(PathBuf)))
        .arg(arg!(--template <NAME> "Harness template: c or rust").required(false).default_value("c").value_parser(value_parser!(String)))
        .arg(arg!(--cipher_fn <NAME> "Symbol of the implementation under test").required(false).value_parser(value_parser!(String)))
        .arg(arg!(--lenient "Copy field text into the output without hex/length checks").action(ArgAction::SetTrue))
        .arg(arg!(--standalone "Wrap the blocks into a complete harness").action(ArgAction::SetTrue))
        .arg(arg!([FILES] ... "Corpus file names, processed in this order").value_parser(value_parser!(String)))
        .get_matches();

    let mut cfg = IngestConfig::default();
    if let Some(dir) = args.get_one::<PathBuf>("corpus_dir") {
        cfg.corpus_dir = dir.clone();
    }
    if let Some(files) = args.get_many::<String>("FILES") {
        cfg.files = files.cloned().collect();
    }
    if args.get_one::<bool>("lenient").copied().unwrap_or(false) {
        cfg.extraction = Extraction::Lenient;
    }
    cfg.standalone = args.get_one::<bool>("standalone").copied().unwrap_or(false);

    let template_name = args.get_one::<String>("template").map(String::as_str).unwrap_or("c");
    let mut template: HarnessTemplate = template_name.parse()?;
    if let Some(name) = args.get_one::<String>("cipher_fn") {
        template = template.with_cipher_fn(name);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = run_ingest(&cfg, template, &mut out)
        .with_context(|| format!("ingest of {} failed", cfg.corpus_dir.display()))?;

    info!(
        files = summary.files_processed,
        skipped_name = summary.skipped_by_name,
        skipped_mode = summary.skipped_by_mode,
        vectors = summary.vectors_emitted,
        "collation complete"
    );
    Ok(())
}
