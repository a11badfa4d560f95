use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ConvertError, Result};
use crate::{Direction, Encoding, decode, encode};

pub const UNI_SUFFIX: &str = ".uni";

/// What happened to a single file (or a source argument that did not exist).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    AlreadyTarget { encoding: Encoding },
    Converted { before: usize, after: usize },
    Missing,
}

/// Result of processing one command line source.
#[derive(Debug)]
pub struct SourceReport {
    pub source: PathBuf,
    pub files: Vec<(PathBuf, Outcome)>,
    pub ok: bool,
}

/// Converts every source in order. Returns true only if all of them succeeded.
pub fn convert_sources(direction: Direction, sources: &[PathBuf]) -> bool {
    let mut ok = true;
    for source in sources {
        ok &= convert_source(direction, source).ok;
    }
    ok
}

/// Converts a single source argument, which may be a file or a directory.
///
/// A missing path marks the report as failed. Inside a directory only `.uni`
/// files are touched, and the walk stops at the first file that fails.
pub fn convert_source(direction: Direction, source: &Path) -> SourceReport {
    let mut report = SourceReport {
        source: source.to_path_buf(),
        files: Vec::new(),
        ok: true,
    };

    if !source.exists() {
        eprintln!("{}: no such file or directory", source.display());
        report.files.push((source.to_path_buf(), Outcome::Missing));
        report.ok = false;
    } else if source.is_dir() {
        for path in uni_files(source) {
            if !convert_and_record(direction, &path, &mut report) {
                break;
            }
        }
    } else {
        convert_and_record(direction, source, &mut report);
    }

    report
}

fn convert_and_record(direction: Direction, path: &Path, report: &mut SourceReport) -> bool {
    match convert_file(direction, path) {
        Ok(outcome) => {
            report.files.push((path.to_path_buf(), outcome));
            true
        }
        Err(e) => {
            eprintln!("{}: {}", path.display(), e);
            report.ok = false;
            false
        }
    }
}

/// Recursively lists files under `root` whose name ends in `.uni`.
///
/// Each directory's files come before its subdirectories, both by name.
fn uni_files(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .sort_by(|a, b| {
            a.file_type()
                .is_dir()
                .cmp(&b.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        })
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(source) => {
                let err = ConvertError::Walk {
                    path: source.path().unwrap_or(root).to_path_buf(),
                    source,
                };
                log::warn!("{err}, skipping");
                None
            }
        })
        .filter(|entry| !entry.file_type().is_dir() && entry.path().is_file())
        .filter(|entry| is_uni_file(entry.path()))
        .map(|entry| entry.into_path())
}

fn is_uni_file(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(UNI_SUFFIX))
}

/// Converts one file in place.
///
/// The file is left alone when its byte order mark already matches the
/// target: a mark means utf-16, no mark means utf-8.
pub fn convert_file(direction: Direction, path: &Path) -> Result<Outcome> {
    let content = std::fs::read(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let target = direction.target_encoding();

    let bom = decode::has_utf16_bom(&content);
    if bom != direction.target_is_utf8() {
        println!("{}: already {}", path.display(), target);
        return Ok(Outcome::AlreadyTarget { encoding: target });
    }

    let text = decode::decode_lossy(&content, direction.source_encoding());
    let new_content = encode::encode_lossy(&text, target);

    std::fs::write(path, &new_content).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    println!(
        "{}: converted, size {} => {}",
        path.display(),
        content.len(),
        new_content.len()
    );
    log::debug!("{}: {} -> {}", path.display(), direction.source_encoding(), target);

    Ok(Outcome::Converted {
        before: content.len(),
        after: new_content.len(),
    })
}
