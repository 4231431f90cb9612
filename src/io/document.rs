use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// A document whose text can be read page by page.
/// Decoding the underlying format (e.g. PDF) is the implementor's concern.
pub trait DocumentSource {
    /// Display name of the document, usually its file name.
    fn name(&self) -> &str;

    /// Text content of each page, in order.
    fn pages(&self) -> Result<Vec<String>>;

    /// Full text of the document, each page followed by a newline.
    fn read_text(&self) -> Result<String> {
        Ok(self.pages()?.into_iter()
            .map(|page| page + "\n")
            .collect())
    }
}

impl<T: DocumentSource + ?Sized> DocumentSource for &T {
    fn name(&self) -> &str { (**self).name() }
    fn pages(&self) -> Result<Vec<String>> { (**self).pages() }
}

impl<T: DocumentSource + ?Sized> DocumentSource for Box<T> {
    fn name(&self) -> &str { (**self).name() }
    fn pages(&self) -> Result<Vec<String>> { (**self).pages() }
}

/// A UTF-8 text file with pages separated by form feeds, as written by `pdftotext`.
#[derive(Clone, Debug)]
pub struct TextFile {
    path: PathBuf,
    name: String,
}

impl TextFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    #[inline] pub fn path(&self) -> &Path { &self.path }
}

impl DocumentSource for TextFile {
    fn name(&self) -> &str { &self.name }

    fn pages(&self) -> Result<Vec<String>> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read document: {}", self.path.display()))?;
        Ok(text.split('\x0c').map(str::to_string).collect())
    }
}

/// A document whose pages are already decoded.
#[derive(Clone, Debug)]
pub struct InMemoryDocument {
    name: String,
    pages: Vec<String>,
}

impl InMemoryDocument {
    pub fn new(name: impl Into<String>, pages: Vec<String>) -> Self {
        Self { name: name.into(), pages }
    }
}

impl DocumentSource for InMemoryDocument {
    fn name(&self) -> &str { &self.name }
    fn pages(&self) -> Result<Vec<String>> { Ok(self.pages.clone()) }
}

/// Terrain name derived from a document name: the name without a trailing
/// `.pdf` or `.txt` (any case). Other dots are part of the name.
pub fn terrain_name(document: &str) -> String {
    const EXTENSIONS: [&str; 2] = [".pdf", ".txt"];

    let stripped = EXTENSIONS.iter().find_map(|ext| {
        let split = document.len().checked_sub(ext.len())?;
        let (stem, tail) = (document.get(..split)?, document.get(split..)?);
        tail.eq_ignore_ascii_case(ext).then_some(stem)
    });
    stripped.unwrap_or(document).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_are_joined_with_newlines() {
        let doc = InMemoryDocument::new("a.pdf", vec!["one".into(), "two".into()]);
        assert_eq!(doc.read_text().unwrap(), "one\ntwo\n");
    }

    #[test]
    fn text_file_splits_on_form_feed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extras.txt");
        std::fs::write(&path, "page 1\x0cpage 2").unwrap();

        let doc = TextFile::new(&path);
        assert_eq!(doc.name(), "extras.txt");
        assert_eq!(doc.pages().unwrap(), vec!["page 1", "page 2"]);
        assert_eq!(doc.read_text().unwrap(), "page 1\npage 2\n");
    }

    #[test]
    fn missing_file_fails_to_read() {
        let dir = tempfile::tempdir().unwrap();
        assert!(TextFile::new(dir.path().join("missing.txt")).read_text().is_err());
    }

    #[test]
    fn terrain_name_drops_extension() {
        assert_eq!(terrain_name("Plan CF 1234.pdf"), "Plan CF 1234");
        assert_eq!(terrain_name("scan.PDF"), "scan");
        assert_eq!(terrain_name("no_extension"), "no_extension");
        assert_eq!(terrain_name("CF 5012.txt"), "CF 5012");
    }

    #[test]
    fn terrain_name_keeps_other_dots() {
        assert_eq!(terrain_name("Plan v1.2"), "Plan v1.2");
        assert_eq!(terrain_name("Plan v1.2.pdf"), "Plan v1.2");
        assert_eq!(terrain_name("scan.docx"), "scan.docx");
        assert_eq!(terrain_name(".pdf"), "");
        assert_eq!(terrain_name("Teren \u{0219}.pdf"), "Teren \u{0219}");
    }
}
