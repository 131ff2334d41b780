//! High-level, ergonomic entry points: extract one document, or every PDF in a directory.
//! Prefer these over building a [`Command`] by hand when the parameters come from a config file.
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::cancel::CancelToken;
use crate::core::command::Command;
use crate::core::params::ExtractParams;
use crate::error::{Error, Result};

/// Extract images from `input` into the existing directory `outdir`.
/// Honors `params.timeout_secs` when set.
pub fn extract_images(input: &Path, outdir: &Path, params: &ExtractParams) -> Result<()> {
    let cmd = Command::from_params(params)?;
    run_one(&cmd, input, outdir, &token_for(params))
}

/// Extract images, giving up when `token` is cancelled or expires.
pub fn extract_images_with_cancel(
    input: &Path,
    outdir: &Path,
    params: &ExtractParams,
    token: &CancelToken,
) -> Result<()> {
    let cmd = Command::from_params(params)?;
    cmd.run_with_cancel(input, outdir, token)
}

/// Summary of a directory run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Regular files directly inside `input_dir` with a `.pdf` extension (any case), sorted by path.
pub fn iterate_pdf_files(input_dir: &Path) -> Result<std::vec::IntoIter<PathBuf>> {
    let (files, _) = scan_dir(input_dir)?;
    Ok(files.into_iter())
}

/// One pass over `input_dir`: sorted PDF files, and the number of other regular files.
/// Subdirectories and other entry kinds are ignored.
fn scan_dir(input_dir: &Path) -> Result<(Vec<PathBuf>, usize)> {
    let mut files = Vec::new();
    let mut others = 0;
    for entry in std::fs::read_dir(input_dir).map_err(Error::from)? {
        let entry = entry.map_err(Error::from)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if is_pdf(&path) {
            files.push(path);
        } else {
            others += 1;
        }
    }
    files.sort();
    Ok((files, others))
}

/// Extract every PDF in `input_dir` into `output_dir/<file stem>/`.
///
/// Regular files that are not PDFs count as skipped; subdirectories are ignored. If `continue_on_error` is true,
/// failures are counted and the batch goes on; otherwise the first failure is returned. An
/// executable that cannot be resolved always fails the whole batch up front.
pub fn extract_directory(
    input_dir: &Path,
    output_dir: &Path,
    params: &ExtractParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    let cmd = Command::from_params(params)?;
    std::fs::create_dir_all(output_dir).map_err(Error::from)?;

    let (pdfs, others) = scan_dir(input_dir)?;
    let mut report = BatchReport {
        skipped: others,
        ..Default::default()
    };

    for path in pdfs {
        let Some(stem) = path.file_stem() else {
            report.skipped += 1;
            continue;
        };
        let target = output_dir.join(stem);
        info!("Extracting: {:?} -> {:?}", path, target);

        let result = std::fs::create_dir_all(&target)
            .map_err(Error::from)
            .and_then(|()| run_one(&cmd, &path, &target, &token_for(params)));

        match result {
            Ok(()) => report.processed += 1,
            Err(e) => {
                warn!("Error extracting {:?}: {}", path, e);
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
            }
        }
    }

    Ok(report)
}

fn run_one(cmd: &Command, input: &Path, outdir: &Path, token: &Option<CancelToken>) -> Result<()> {
    match token {
        Some(token) => cmd.run_with_cancel(input, outdir, token),
        None => cmd.run(input, outdir),
    }
}

fn token_for(params: &ExtractParams) -> Option<CancelToken> {
    params.timeout().map(CancelToken::with_timeout)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
