use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::core::config::ExtensionConfig;
use crate::core::context::RunContext;
use crate::core::types::{ClassifiedFile, FileCategory};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Input directory does not exist or is not a directory: {}", .0.display())]
    NotFound(PathBuf),

    #[error("File {} has no extension besides the compression suffix '.{suffix}'", path.display())]
    MalformedFilename { path: PathBuf, suffix: String },

    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Files found in a directory, partitioned by category.
///
/// Every vector holds absolute paths sorted by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub reads: Vec<PathBuf>,
    pub assemblies: Vec<PathBuf>,
    /// Files whose extension is neither a read nor an assembly extension
    pub skipped: Vec<PathBuf>,
}

impl ScanResult {
    /// Number of files classified as reads or assemblies
    #[must_use]
    pub fn recognized_count(&self) -> usize {
        self.reads.len() + self.assemblies.len()
    }

    /// True when neither reads nor assemblies were found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recognized_count() == 0
    }

    fn push(&mut self, file: ClassifiedFile) {
        match file.category {
            FileCategory::Read => self.reads.push(file.path),
            FileCategory::Assembly => self.assemblies.push(file.path),
            FileCategory::Unrecognized => self.skipped.push(file.path),
        }
    }
}

/// Classify every regular file directly inside `dir`.
///
/// Entries are visited in file name order so that repeated scans of the same
/// directory produce identical results on every platform. Subdirectories are
/// ignored.
///
/// # Errors
///
/// Returns `ScanError::NotFound` if `dir` is missing or not a directory,
/// `ScanError::MalformedFilename` if a compressed file has no inner extension,
/// or `ScanError::Io` if the directory cannot be read.
pub fn classify_directory(
    dir: &Path,
    config: &ExtensionConfig,
    ctx: &RunContext,
) -> Result<ScanResult, ScanError> {
    let _guard = ctx.enter();

    if !dir.is_dir() {
        error!(
            "Input directory does not exist or is not a directory: {}",
            dir.display()
        );
        return Err(ScanError::NotFound(dir.to_path_buf()));
    }

    let root = absolute_dir(dir)?;
    let io_error = |source| ScanError::Io {
        path: root.clone(),
        source,
    };

    let mut entries = std::fs::read_dir(&root)
        .map_err(io_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_error)?;
    entries.sort_by_key(std::fs::DirEntry::file_name);

    let mut result = ScanResult::default();
    for entry in entries {
        let path = entry.path();
        if !path.is_file() {
            debug!("Skipping non-file entry: {}", path.display());
            continue;
        }

        let file = match classify_path(&path, config) {
            Ok(file) => file,
            Err(e) => {
                error!("{e}");
                return Err(e);
            }
        };
        if file.category == FileCategory::Unrecognized {
            warn!("Miscellaneous file present in sample directory: {}", path.display());
        }
        result.push(file);
    }

    info!(
        "Found {} reads and {} assemblies ({} skipped)",
        result.reads.len(),
        result.assemblies.len(),
        result.skipped.len()
    );
    Ok(result)
}

/// Classify a single path by its extension.
///
/// A compression suffix is stripped first and the category is taken from the
/// extension beneath it, so `s1.fastq.gz` classifies exactly like `s1.fastq`.
///
/// # Errors
///
/// Returns `ScanError::MalformedFilename` if the path ends in a compression
/// suffix with no other extension before it.
pub fn classify_path(path: &Path, config: &ExtensionConfig) -> Result<ClassifiedFile, ScanError> {
    let mut extension = extension_of(path);

    if let Some(suffix) = extension.filter(|e| config.is_compression(e)) {
        let inner = path.file_stem().map(Path::new).and_then(extension_of);
        match inner {
            Some(inner) => extension = Some(inner),
            None => {
                return Err(ScanError::MalformedFilename {
                    path: path.to_path_buf(),
                    suffix: suffix.to_string(),
                })
            }
        }
    }

    let category = extension.map_or(FileCategory::Unrecognized, |e| config.category_of(e));
    Ok(ClassifiedFile::new(path, category))
}

fn extension_of(path: &Path) -> Option<&str> {
    path.extension().and_then(OsStr::to_str)
}

fn absolute_dir(dir: &Path) -> Result<PathBuf, ScanError> {
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(dir))
        .map_err(|source| ScanError::Io {
            path: dir.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch_all(dir: &TempDir, names: &[&str]) {
        for name in names {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    fn scan(dir: &TempDir) -> Result<ScanResult, ScanError> {
        classify_directory(dir.path(), &ExtensionConfig::default(), &RunContext::detached())
    }

    #[test]
    fn test_classify_reference_directory() {
        let dir = TempDir::new().unwrap();
        touch_all(
            &dir,
            &[
                "s1_r1_.fastq",
                "s1_r2_.fastq",
                "s1.fastq",
                "s2_r1.fastq",
                "s1.fasta",
                "s3.fasta",
            ],
        );

        let result = scan(&dir).unwrap();
        assert_eq!(result.reads.len(), 4);
        assert_eq!(result.assemblies.len(), 2);
        assert!(result.skipped.is_empty());
        assert_eq!(names(&result.assemblies), vec!["s1.fasta", "s3.fasta"]);
    }

    #[test]
    fn test_every_recognized_file_lands_in_one_bucket() {
        let dir = TempDir::new().unwrap();
        touch_all(
            &dir,
            &["a.fq", "b.fastq.gz", "c.fa", "d.fna.gz", "e.FASTA", "notes.txt", "f.bam"],
        );

        let result = scan(&dir).unwrap();
        assert_eq!(result.recognized_count(), 5);
        assert_eq!(names(&result.reads), vec!["a.fq", "b.fastq.gz"]);
        assert_eq!(names(&result.assemblies), vec!["c.fa", "d.fna.gz", "e.FASTA"]);
        assert_eq!(names(&result.skipped), vec!["f.bam", "notes.txt"]);
    }

    #[test]
    fn test_paths_are_absolute() {
        let dir = TempDir::new().unwrap();
        touch_all(&dir, &["s1.fq"]);

        let result = scan(&dir).unwrap();
        assert!(result.reads[0].is_absolute());
    }

    #[test]
    fn test_compressed_classifies_like_uncompressed() {
        let config = ExtensionConfig::default();
        let plain = classify_path(Path::new("/data/sample.fastq"), &config).unwrap();
        let gzipped = classify_path(Path::new("/data/sample.fastq.gz"), &config).unwrap();
        assert_eq!(plain.category, FileCategory::Read);
        assert_eq!(gzipped.category, plain.category);
    }

    #[test]
    fn test_compressed_without_inner_extension_is_malformed() {
        let config = ExtensionConfig::default();
        let err = classify_path(Path::new("/data/sample.gz"), &config).unwrap_err();
        assert!(matches!(err, ScanError::MalformedFilename { ref suffix, .. } if suffix == "gz"));
    }

    #[test]
    fn test_malformed_file_aborts_scan() {
        let dir = TempDir::new().unwrap();
        touch_all(&dir, &["s1.fastq", "broken.gz"]);

        let err = scan(&dir).unwrap_err();
        assert!(matches!(err, ScanError::MalformedFilename { .. }));
    }

    #[test]
    fn test_double_compression_is_unrecognized() {
        let config = ExtensionConfig::default();
        let file = classify_path(Path::new("/data/sample.fastq.gz.gz"), &config).unwrap();
        assert_eq!(file.category, FileCategory::Unrecognized);
    }

    #[test]
    fn test_missing_directory_is_not_found() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = classify_directory(&missing, &ExtensionConfig::default(), &RunContext::detached())
            .unwrap_err();
        assert!(matches!(err, ScanError::NotFound(ref p) if p == &missing));
    }

    #[test]
    fn test_file_instead_of_directory_is_not_found() {
        let dir = TempDir::new().unwrap();
        touch_all(&dir, &["s1.fastq"]);
        let file = dir.path().join("s1.fastq");

        let err = classify_directory(&file, &ExtensionConfig::default(), &RunContext::detached())
            .unwrap_err();
        assert!(matches!(err, ScanError::NotFound(_)));
    }

    #[test]
    fn test_subdirectories_are_ignored() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("nested.fastq")).unwrap();
        touch_all(&dir, &["s1.fq"]);

        let result = scan(&dir).unwrap();
        assert_eq!(names(&result.reads), vec!["s1.fq"]);
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        let result = scan(&dir).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_rescan_is_identical() {
        let dir = TempDir::new().unwrap();
        touch_all(&dir, &["z.fq", "a.fq", "m.fa", "readme.md"]);

        assert_eq!(scan(&dir).unwrap(), scan(&dir).unwrap());
    }
}
