use std::path::PathBuf;
use crate::models::job::ConversionJob;

#[derive(Clone)]
pub struct FileCollectInput {
    pub scan_root: PathBuf,
    pub destination: PathBuf,
}

#[derive(Debug)]
pub struct FileCollectOutput {
    pub jobs: Vec<ConversionJob>,
    pub skipped_entries: u64,
}
