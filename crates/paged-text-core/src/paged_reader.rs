use anyhow::{bail, Context, Result};
use encoding_rs::{Encoding, UTF_8};
use std::fs;
use std::path::{Path, PathBuf};

use crate::file_reader::{read_lines, EncodingChoice};
use crate::progress;

/// Number of lines shown per page.
pub const PAGE_SIZE: usize = 5;

/// What forward paging does on the last page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PagingMode {
    /// Stop at the line count, so the end of the file always reads as 100%.
    #[default]
    Clamped,
    /// Step a full page past the end, leaving the offset beyond the line count.
    Overshoot,
}

/// Holds every line of one file and a page-sized window over them.
///
/// `bytes_consumed` is the UTF-8 length of all pages up to and including the
/// current one. It is kept as a running counter, adjusted by the page entered
/// or left on each step.
#[derive(Debug)]
pub struct PagedReader {
    lines: Vec<String>,
    current_offset: usize,
    page_size: usize,
    bytes_consumed: u64,
    path: Option<PathBuf>,
    encoding: &'static Encoding,
    encoding_choice: EncodingChoice,
    mode: PagingMode,
}

impl Default for PagedReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PagedReader {
    /// An empty reader with the default page size and paging mode.
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            current_offset: 0,
            page_size: PAGE_SIZE,
            bytes_consumed: 0,
            path: None,
            encoding: UTF_8,
            encoding_choice: EncodingChoice::default(),
            mode: PagingMode::default(),
        }
    }

    pub fn with_options(page_size: usize, mode: PagingMode) -> Result<Self> {
        if page_size == 0 {
            bail!("Page size must be at least one line");
        }
        Ok(Self {
            page_size,
            mode,
            ..Self::new()
        })
    }

    /// Sets how the next `load` decodes bytes. The current document is untouched.
    pub fn set_encoding_choice(&mut self, choice: EncodingChoice) {
        self.encoding_choice = choice;
    }

    /// Replaces the document with the contents of `path` and returns to the
    /// first page. On error the previous document stays as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let decoded = read_lines(path, self.encoding_choice)?;

        self.lines = decoded.lines;
        self.encoding = decoded.encoding;
        self.path = Some(path.to_path_buf());
        self.current_offset = 0;
        self.bytes_consumed = self.page_bytes(0);

        tracing::info!(
            path = %path.display(),
            lines = self.lines.len(),
            encoding = self.encoding.name(),
            "loaded document"
        );
        Ok(())
    }

    /// Loads the current path again, picking up a new encoding choice.
    pub fn reload(&mut self) -> Result<()> {
        match self.path.clone() {
            Some(path) => self.load(path),
            None => Ok(()),
        }
    }

    /// The lines of the current page joined together, terminators included.
    pub fn current_page(&self) -> String {
        self.page_at(self.current_offset)
    }

    pub fn next_page(&mut self) -> String {
        if self.current_offset < self.lines.len() {
            let next = self.current_offset + self.page_size;
            self.current_offset = match self.mode {
                PagingMode::Clamped => next.min(self.lines.len()),
                PagingMode::Overshoot => next,
            };
            self.bytes_consumed += self.page_bytes(self.current_offset);
            tracing::trace!(offset = self.current_offset, "next page");
        }
        self.current_page()
    }

    /// Steps back to the start of the preceding page. From a page-aligned
    /// offset this is one `page_size` back; from a clamped end offset it is
    /// the start of the last page.
    pub fn previous_page(&mut self) -> String {
        if self.current_offset > 0 {
            let leaving = self.page_bytes(self.current_offset);
            self.bytes_consumed = self.bytes_consumed.saturating_sub(leaving);
            self.current_offset = (self.current_offset - 1) / self.page_size * self.page_size;
            tracing::trace!(offset = self.current_offset, "previous page");
        }
        self.current_page()
    }

    /// Percentage of the file behind the current page, 0 to 100.
    ///
    /// Outside the first and last page this stats the file, so it fails if
    /// the file has gone away since it was loaded.
    pub fn progress(&self) -> Result<u8> {
        let at_boundary = self.current_offset == 0 || self.current_offset == self.lines.len();
        let total_bytes = match &self.path {
            Some(path) if !at_boundary => {
                fs::metadata(path)
                    .with_context(|| format!("Failed to stat file: {}", path.display()))?
                    .len()
            }
            _ => 0,
        };

        Ok(progress::estimate(
            self.current_offset,
            self.lines.len(),
            self.bytes_consumed,
            total_bytes,
        ))
    }

    pub fn current_offset(&self) -> usize {
        self.current_offset
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn bytes_consumed(&self) -> u64 {
        self.bytes_consumed
    }

    pub fn mode(&self) -> PagingMode {
        self.mode
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    pub fn is_loaded(&self) -> bool {
        self.path.is_some()
    }

    /// Total pages, at least one so an empty document still shows "1 / 1".
    pub fn page_count(&self) -> usize {
        self.lines.len().div_ceil(self.page_size).max(1)
    }

    /// One-based index of the current page.
    pub fn page_number(&self) -> usize {
        (self.current_offset / self.page_size + 1).min(self.page_count())
    }

    fn page_range(&self, offset: usize) -> std::ops::Range<usize> {
        let start = offset.min(self.lines.len());
        let end = offset.saturating_add(self.page_size).min(self.lines.len());
        start..end
    }

    fn page_at(&self, offset: usize) -> String {
        self.lines[self.page_range(offset)].concat()
    }

    fn page_bytes(&self, offset: usize) -> u64 {
        self.lines[self.page_range(offset)]
            .iter()
            .map(|line| line.len() as u64)
            .sum()
    }
}
