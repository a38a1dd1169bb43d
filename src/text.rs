use std::fmt;
use std::fs;
use std::path::PathBuf;

use log::debug;

use crate::error::{AnalysisError, Result};
use crate::tokenize::tokenize;

/// Where a [`Text`]'s content came from.
#[derive(Debug, Clone)]
pub enum TextSource {
    File(PathBuf),
    Url(String),
    /// Content handed over directly, without I/O. Used for embedding the
    /// library and in tests.
    Inline,
}

impl fmt::Display for TextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextSource::File(path) => write!(f, "{}", path.display()),
            TextSource::Url(url) => write!(f, "{url}"),
            TextSource::Inline => write!(f, "<inline>"),
        }
    }
}

/// A named text document with its tokenized word sequence.
///
/// The full content is acquired and tokenized once at construction; the word
/// sequence is immutable afterwards, so every analyzer sees the same input.
#[derive(Debug, Clone)]
pub struct Text {
    name: String,
    author: String,
    source: TextSource,
    words: Vec<String>,
}

impl Text {
    /// Builds a [`Text`] from exactly one of a file path or a URL.
    ///
    /// Fails with [`AnalysisError::Config`] when neither or both are given,
    /// and with [`AnalysisError::Source`] when the read or fetch fails. The
    /// author defaults to `"Unknown"`.
    pub fn new(
        name: &str,
        author: Option<&str>,
        path: Option<PathBuf>,
        url: Option<String>,
    ) -> Result<Self> {
        match (path, url) {
            (Some(path), None) => Self::from_file(name, author, path),
            (None, Some(url)) => Self::from_url(name, author, &url),
            (Some(_), Some(_)) => Err(AnalysisError::Config(
                "both a text file path and a url provided, exactly one must be set".to_string(),
            )),
            (None, None) => Err(AnalysisError::Config(
                "no text file path or url provided".to_string(),
            )),
        }
    }

    /// Reads a text from a local file.
    pub fn from_file(name: &str, author: Option<&str>, path: PathBuf) -> Result<Self> {
        let raw = fs::read_to_string(&path).map_err(|e| AnalysisError::Source {
            source_id: path.display().to_string(),
            cause: Box::new(e),
        })?;
        Self::from_parts(name, author, TextSource::File(path), &raw)
    }

    /// Fetches a text from a remote URL. A non-success HTTP status counts
    /// as a failed fetch.
    pub fn from_url(name: &str, author: Option<&str>, url: &str) -> Result<Self> {
        let raw = fetch_url(url).map_err(|e| AnalysisError::Source {
            source_id: url.to_string(),
            cause: Box::new(e),
        })?;
        Self::from_parts(name, author, TextSource::Url(url.to_string()), &raw)
    }

    /// Builds a [`Text`] from content already in memory.
    pub fn from_content(name: &str, author: Option<&str>, content: &str) -> Result<Self> {
        Self::from_parts(name, author, TextSource::Inline, content)
    }

    fn from_parts(
        name: &str,
        author: Option<&str>,
        source: TextSource,
        raw: &str,
    ) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(AnalysisError::Validation(
                "text name must not be empty".to_string(),
            ));
        }
        let words = tokenize(raw);
        debug!("tokenized \"{name}\" from {source}: {} words", words.len());

        Ok(Self {
            name: name.to_string(),
            author: author.unwrap_or("Unknown").to_string(),
            source,
            words,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn source(&self) -> &TextSource {
        &self.source
    }

    /// The tokenized word sequence, in document order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Text name with spaces replaced by underscores, used as the stem of
    /// result file names.
    pub fn file_label(&self) -> String {
        self.name.replace(' ', "_")
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text: {} by {}", self.name, self.author)
    }
}

fn fetch_url(url: &str) -> reqwest::Result<String> {
    reqwest::blocking::get(url)?.error_for_status()?.text()
}
