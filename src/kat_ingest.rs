// KAT corpus ingester: filters corpus files by name and mode, scans their
// count blocks and emits one self-checking test block per vector.
//
// The vector index lives in the single Emitter owned by the Ingester, so it
// keeps counting across files and never resets.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{KatError, Result};
use crate::kat_emit::Emitter;
use crate::kat_params::DEFAULT_CORPUS_FILES;
use crate::kat_scan::{scan_document, CorpusRules};
use crate::kat_template::HarnessTemplate;
use crate::kat_vector::RawVector;

/// How much checking field values get before emission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Extraction {
    /// Hex alphabet and exact length enforced, values re-encoded lowercase
    #[default]
    Strict,
    /// Field text goes into the emitted code untouched
    Lenient,
}

#[derive(Clone, Debug)]
pub struct IngestConfig {
    pub corpus_dir: PathBuf,
    pub files: Vec<String>,
    pub rules: CorpusRules,
    pub extraction: Extraction,
    /// Wrap the blocks in the template's prologue/epilogue
    pub standalone: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from("."),
            files: DEFAULT_CORPUS_FILES.iter().map(|s| s.to_string()).collect(),
            rules: CorpusRules::default(),
            extraction: Extraction::default(),
            standalone: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub files_processed: usize,
    pub skipped_by_name: usize,
    pub skipped_by_mode: usize,
    pub vectors_emitted: u64,
}

pub struct Ingester {
    rules: CorpusRules,
    extraction: Extraction,
    emitter: Emitter,
    summary: IngestSummary,
}

impl Ingester {
    pub fn new(rules: CorpusRules, extraction: Extraction, template: HarnessTemplate) -> Self {
        Self {
            rules,
            extraction,
            emitter: Emitter::new(template),
            summary: IngestSummary::default(),
        }
    }

    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    pub fn summary(&self) -> &IngestSummary {
        &self.summary
    }

    /// Emits the blocks of one already-read document. Returns how many were
    /// emitted, `None` if the mode marker rejected the document. In strict mode
    /// the whole document is validated before its first block is written.
    pub fn ingest_document<W: Write>(&mut self, name: &str, text: &str, out: &mut W) -> Result<Option<u64>> {
        let Some(raw) = scan_document(name, text, &self.rules)? else {
            debug!(file = name, "skipped: mode marker is not {}", self.rules.mode_marker);
            self.summary.skipped_by_mode += 1;
            return Ok(None);
        };

        let raw = match self.extraction {
            Extraction::Lenient => raw,
            Extraction::Strict => raw
                .iter()
                .map(|r| r.validate().map(|v| RawVector::from_vector(&r.file, r.line, &v)))
                .collect::<Result<Vec<_>>>()?,
        };

        for v in &raw {
            self.emitter.emit(out, v)?;
        }

        let n = raw.len() as u64;
        self.summary.files_processed += 1;
        self.summary.vectors_emitted += n;
        info!(file = name, vectors = n, "ingested");
        Ok(Some(n))
    }

    /// Processes `files` from `dir` in list order. Names without the family
    /// prefix are skipped without touching the filesystem.
    pub fn ingest_files<W, S>(&mut self, dir: &Path, files: &[S], out: &mut W) -> Result<()>
    where
        W: Write,
        S: AsRef<str>,
    {
        for name in files {
            let name = name.as_ref();
            if !self.rules.accepts_name(name) {
                debug!(file = name, "skipped: name lacks prefix {}", self.rules.name_prefix);
                self.summary.skipped_by_name += 1;
                continue;
            }

            let path = dir.join(name);
            let text = fs::read_to_string(&path).map_err(|source| KatError::CorpusRead {
                path: path.clone(),
                source,
            })?;
            self.ingest_document(name, &text, out)?;
        }
        Ok(())
    }
}

/// Full ingest run as configured: optional prologue, every file, optional epilogue.
pub fn run_ingest<W: Write>(cfg: &IngestConfig, template: HarnessTemplate, out: &mut W) -> Result<IngestSummary> {
    let mut ingester = Ingester::new(cfg.rules.clone(), cfg.extraction, template);

    if cfg.standalone {
        ingester.emitter().write_prologue(out)?;
    }
    ingester.ingest_files(&cfg.corpus_dir, cfg.files.as_slice(), out)?;
    if cfg.standalone {
        ingester.emitter().write_epilogue(out)?;
    }
    out.flush()?;

    Ok(ingester.summary().clone())
}
