use crate::core::types::FileCategory;

/// Extensions recognized as FASTQ reads
pub const FASTQ_EXTENSIONS: &[&str] = &["fastq", "fq"];

/// Extensions recognized as FASTA assemblies
pub const FASTA_EXTENSIONS: &[&str] = &["fa", "fasta", "fna"];

/// Compression suffixes stripped before classification
pub const COMPRESSION_EXTENSIONS: &[&str] = &["gz"];

/// The extension sets used to classify files.
///
/// Extensions are stored without the leading dot and compared
/// ASCII case-insensitively, so `S1.FASTQ.GZ` is a read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionConfig {
    pub reads: Vec<String>,
    pub assemblies: Vec<String>,
    pub compression: Vec<String>,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            reads: to_owned(FASTQ_EXTENSIONS),
            assemblies: to_owned(FASTA_EXTENSIONS),
            compression: to_owned(COMPRESSION_EXTENSIONS),
        }
    }
}

impl ExtensionConfig {
    #[must_use]
    pub fn is_compression(&self, extension: &str) -> bool {
        contains(&self.compression, extension)
    }

    /// Category of an already decompressed extension
    #[must_use]
    pub fn category_of(&self, extension: &str) -> FileCategory {
        if contains(&self.reads, extension) {
            FileCategory::Read
        } else if contains(&self.assemblies, extension) {
            FileCategory::Assembly
        } else {
            FileCategory::Unrecognized
        }
    }
}

fn to_owned(extensions: &[&str]) -> Vec<String> {
    extensions.iter().map(|e| (*e).to_string()).collect()
}

fn contains(set: &[String], extension: &str) -> bool {
    let extension = extension.strip_prefix('.').unwrap_or(extension);
    set.iter().any(|e| e.eq_ignore_ascii_case(extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories() {
        let config = ExtensionConfig::default();
        assert_eq!(config.category_of("fastq"), FileCategory::Read);
        assert_eq!(config.category_of("fq"), FileCategory::Read);
        assert_eq!(config.category_of("fna"), FileCategory::Assembly);
        assert_eq!(config.category_of("bam"), FileCategory::Unrecognized);
        assert!(config.is_compression("gz"));
        assert!(!config.is_compression("bz2"));
    }

    #[test]
    fn test_case_insensitive_and_leading_dot() {
        let config = ExtensionConfig::default();
        assert_eq!(config.category_of("FASTQ"), FileCategory::Read);
        assert_eq!(config.category_of(".Fasta"), FileCategory::Assembly);
        assert!(config.is_compression(".GZ"));
    }

    #[test]
    fn test_reads_take_precedence_over_assemblies() {
        let config = ExtensionConfig {
            reads: vec!["seq".to_string()],
            assemblies: vec!["seq".to_string()],
            compression: Vec::new(),
        };
        assert_eq!(config.category_of("seq"), FileCategory::Read);
    }
}
