//! Plain-text file processor translating line by line

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{TranslationRequest, TranslationResult};
use crate::core::translator::translate_request;

/// Text processor that keeps line structure intact
#[derive(Debug, Clone)]
pub struct TextProcessor {
    config: TranslatorConfig,
}

impl TextProcessor {
    /// Create a new text processor
    pub fn new(config: TranslatorConfig) -> Self {
        Self { config }
    }

    /// Create from environment configuration
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(TranslatorConfig::from_env()?))
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Find text files in directory
    pub fn find_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(TranslationError::FileError {
                path: dir.display().to_string(),
                message: "Not a directory".to_string(),
            });
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && self.is_text_file(&path) {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Find text files recursively
    pub fn find_files_recursive(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(TranslationError::FileError {
                path: dir.display().to_string(),
                message: "Not a directory".to_string(),
            });
        }

        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && self.is_text_file(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    /// Check if file has one of the configured extensions
    fn is_text_file(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| self.config.accepts_extension(&ext.to_string_lossy()))
            .unwrap_or(false)
    }

    /// Default output for a single file: `notes.txt` -> `notes_piglatin.txt`
    pub fn default_output_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut name = format!("{}{}", stem, self.config.output_suffix);
        if let Some(ext) = input.extension() {
            name.push('.');
            name.push_str(&ext.to_string_lossy());
        }

        input.with_file_name(name)
    }

    /// Mirror `input` (found under `input_root`) into `output_root`
    pub fn mirrored_output_path(&self, input: &Path, input_root: &Path, output_root: &Path) -> PathBuf {
        match input.strip_prefix(input_root) {
            Ok(relative) => output_root.join(relative),
            Err(_) => output_root.join(input.file_name().unwrap_or_default()),
        }
    }

    /// Translate a single text file
    pub async fn translate_file(&self, input: &Path, output: &Path) -> Result<TranslationResult> {
        debug!("Translating: {}", input.display());

        let content = tokio::fs::read_to_string(input)
            .await
            .map_err(|e| TranslationError::FileError {
                path: input.display().to_string(),
                message: e.to_string(),
            })?;

        let translated = self.translate_content(&content)?;

        // Ensure output directory exists
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| TranslationError::FileError {
                        path: parent.display().to_string(),
                        message: e.to_string(),
                    })?;
            }
        }

        tokio::fs::write(output, &translated.translation)
            .await
            .map_err(|e| TranslationError::FileError {
                path: output.display().to_string(),
                message: e.to_string(),
            })?;

        info!(
            "Translated: {} -> {} ({} words)",
            input.display(),
            output.display(),
            translated.words_translated
        );
        Ok(translated)
    }

    /// Translate text content, one line at a time
    ///
    /// Blank lines are copied as they are, since a whitespace-only phrase is
    /// not translatable.
    pub fn translate_content(&self, content: &str) -> Result<TranslationResult> {
        let mut translation = String::with_capacity(content.len() + content.len() / 2);
        let mut words_translated = 0;

        for line in content.split_inclusive('\n') {
            let (body, ending) = split_line_ending(line);

            if body.trim().is_empty() {
                translation.push_str(line);
                continue;
            }

            let result = translate_request(&TranslationRequest::new(body))?;
            translation.push_str(&result.translation);
            translation.push_str(ending);
            words_translated += result.words_translated;
        }

        Ok(TranslationResult {
            translation,
            words_translated,
        })
    }
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processor() -> TextProcessor {
        TextProcessor::new(TranslatorConfig::default())
    }

    #[test]
    fn test_translate_content_keeps_lines() {
        let content = "Hello world\n\n   \nPig Latin!\r\nend";
        let result = processor().translate_content(content).unwrap();

        assert_eq!(
            result.translation,
            "Ellohay orldway\n\n   \nIgpay Atinlay!\r\nendyay"
        );
        assert_eq!(result.words_translated, 5);
    }

    #[test]
    fn test_translate_empty_content() {
        let result = processor().translate_content("").unwrap();
        assert_eq!(result.translation, "");
        assert_eq!(result.words_translated, 0);
    }

    #[test]
    fn test_is_text_file() {
        let processor = processor();

        assert!(processor.is_text_file(Path::new("notes.txt")));
        assert!(processor.is_text_file(Path::new("NOTES.TXT")));
        assert!(!processor.is_text_file(Path::new("notes.md")));
        assert!(!processor.is_text_file(Path::new("notes")));
    }

    #[test]
    fn test_output_paths() {
        let processor = processor();

        assert_eq!(
            processor.default_output_path(Path::new("dir/notes.txt")),
            PathBuf::from("dir/notes_piglatin.txt")
        );
        assert_eq!(
            processor.default_output_path(Path::new("README")),
            PathBuf::from("README_piglatin")
        );
        assert_eq!(
            processor.mirrored_output_path(
                Path::new("in/a/b.txt"),
                Path::new("in"),
                Path::new("out")
            ),
            PathBuf::from("out/a/b.txt")
        );
    }

    #[test]
    fn test_find_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "b").unwrap();
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        std::fs::write(dir.path().join("skip.md"), "c").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("c.txt"), "c").unwrap();

        let processor = processor();

        let flat = processor.find_files(dir.path()).unwrap();
        assert_eq!(flat, vec![dir.path().join("a.txt"), dir.path().join("b.txt")]);

        let recursive = processor.find_files_recursive(dir.path()).unwrap();
        assert_eq!(recursive.len(), 3);
        assert!(recursive.contains(&dir.path().join("nested").join("c.txt")));

        assert!(processor.find_files(&dir.path().join("a.txt")).is_err());
    }

    #[tokio::test]
    async fn test_translate_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("out").join("input.txt");
        std::fs::write(&input, "Eat an apple\n").unwrap();

        let result = processor().translate_file(&input, &output).await.unwrap();

        assert_eq!(result.words_translated, 3);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "Eatyay anyay appleyay\n"
        );
    }

    #[tokio::test]
    async fn test_translate_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = processor()
            .translate_file(&dir.path().join("missing.txt"), &dir.path().join("out.txt"))
            .await
            .unwrap_err();

        assert!(matches!(err, TranslationError::FileError { .. }));
    }
}
