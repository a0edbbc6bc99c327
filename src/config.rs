use anyhow::Result;
use clap::{Parser, ValueEnum};
use encoding_rs::{UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};
use std::path::PathBuf;

use paged_text_core::{EncodingChoice, PagedReader, PagingMode, PAGE_SIZE};

/// Command line options shared by the window and the terminal pager.
#[derive(Parser, Debug, Clone)]
#[command(version, about = "Page through a text file a few lines at a time")]
pub struct Args {
    /// File to open on startup
    pub file: Option<PathBuf>,

    /// Lines shown per page
    #[arg(long, default_value_t = PAGE_SIZE)]
    pub page_size: usize,

    /// Encoding used to decode the file
    #[arg(long, value_enum, default_value_t = EncodingArg::Utf8)]
    pub encoding: EncodingArg,

    /// What happens when paging forward from the last page
    #[arg(long, value_enum, default_value_t = PagingArg::Clamped)]
    pub paging: PagingArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingArg {
    /// Sniff a BOM, then UTF-8, then Windows-1252
    Auto,
    #[value(name = "utf-8")]
    Utf8,
    #[value(name = "utf-16le")]
    Utf16Le,
    #[value(name = "utf-16be")]
    Utf16Be,
    #[value(name = "windows-1252")]
    Windows1252,
}

impl EncodingArg {
    pub fn choice(self) -> EncodingChoice {
        match self {
            EncodingArg::Auto => EncodingChoice::Auto,
            EncodingArg::Utf8 => EncodingChoice::Fixed(UTF_8),
            EncodingArg::Utf16Le => EncodingChoice::Fixed(UTF_16LE),
            EncodingArg::Utf16Be => EncodingChoice::Fixed(UTF_16BE),
            EncodingArg::Windows1252 => EncodingChoice::Fixed(WINDOWS_1252),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingArg {
    /// Stop at the end of the file
    Clamped,
    /// Step a whole page past the end
    Overshoot,
}

impl From<PagingArg> for PagingMode {
    fn from(arg: PagingArg) -> Self {
        match arg {
            PagingArg::Clamped => PagingMode::Clamped,
            PagingArg::Overshoot => PagingMode::Overshoot,
        }
    }
}

impl Args {
    /// An empty reader configured from these options. Nothing is loaded yet.
    pub fn build_reader(&self) -> Result<PagedReader> {
        let mut reader = PagedReader::with_options(self.page_size, self.paging.into())?;
        reader.set_encoding_choice(self.encoding.choice());
        Ok(reader)
    }
}
