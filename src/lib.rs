pub mod error;
pub mod logging;

pub mod kat_params;
pub mod kat_vector;
pub mod reference_cipher;
pub mod oracle_gen;

pub mod corpus_cursor;
pub mod kat_scan;
pub mod kat_template;
pub mod kat_emit;
pub mod kat_ingest;
pub mod kat_verify;

pub use error::{KatError, Result};
