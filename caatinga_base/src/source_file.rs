#![allow(clippy::future_not_send)]

//! Contains the code related to the source code input.

use std::{
    fmt::{Debug, Display},
    fs::File,
    iter::Peekable,
    path::PathBuf,
    str::Chars,
    sync::Arc,
};

use getset::{CopyGetters, Getters};
use memmap::MmapOptions;
use ouroboros::self_referencing;
use thiserror::Error;

/// Represents an error that occurs when loading/creating a source file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Utf8Error(#[from] std::str::Utf8Error),
}

/// Represents a `.252` source file whose content is mapped into memory.
///
/// The file handle and the mapping are released when the last [`Arc`] pointing to the source file
/// is dropped.
#[derive(Getters)]
pub struct SourceFile {
    source: MappedSource,

    /// Gets the full path to the source file.
    #[get = "pub"]
    full_path: PathBuf,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("full_path", &self.full_path)
            .field("length", &self.content().len())
            .finish()
    }
}

#[self_referencing]
struct MappedSource {
    file: File,
    mapped: Option<memmap::Mmap>,

    #[borrows(mapped)]
    mapped_str: &'this str,
}

impl MappedSource {
    fn create(file: File) -> Result<Self, Error> {
        // empty files can't be mapped
        let mapped = if file.metadata()?.len() == 0 {
            None
        } else {
            Some(unsafe { MmapOptions::new().map(&file)? })
        };

        MappedSourceTryBuilder {
            file,
            mapped,
            mapped_str_builder: |mapped| {
                mapped
                    .as_ref()
                    .map_or(Ok(""), |mapped| std::str::from_utf8(mapped).map_err(Error::from))
            },
        }
        .try_build()
    }

    fn content(&self) -> &str { self.borrow_mapped_str() }
}

impl SourceFile {
    /// Gets the content of the source file.
    #[must_use]
    pub fn content(&self) -> &str { self.source.content() }

    /// Checks whether the source file contains no characters at all.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.content().is_empty() }

    /// Gets the [`Iterator`] over the characters of the source file.
    #[must_use]
    pub fn iter<'a>(self: &'a Arc<Self>) -> Iterator<'a> {
        Iterator {
            source_file: self,
            iterator: self.source.content().chars().peekable(),
        }
    }

    /// Loads the source file from the given opened file.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when mapping the file to memory.
    /// - [`Error::Utf8Error`]: Error occurred when converting the mapped bytes to a string.
    pub fn load(file: File, path: PathBuf) -> Result<Arc<Self>, Error> {
        let source = MappedSource::create(file)?;
        Ok(Arc::new(Self {
            source,
            full_path: path,
        }))
    }

    /// Creates a temporary `.252` source file and writes the given displayable object to it.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when creating the temporary file, writing to, and
    ///   mapping it to memory.
    /// - [`Error::Utf8Error`]: Error occurred when converting the mapped bytes to a string.
    pub fn temp(display: impl Display) -> Result<Arc<Self>, Error> {
        use std::io::Write;

        let mut tempfile = tempfile::Builder::new()
            .prefix("caatinga")
            .suffix(".252")
            .tempfile()?;

        write!(tempfile.as_file_mut(), "{display}")?;
        let path = tempfile.path().to_owned();

        Self::load(tempfile.into_file(), path)
    }
}

/// Is a character source that can be looked at one character ahead before consuming it.
///
/// This is the only view of the input that the scanner needs: the end of the stream is signaled
/// by [`None`].
pub trait CharacterStream {
    /// Returns the next character without consuming it.
    fn peek(&mut self) -> Option<char>;

    /// Consumes and returns the next character.
    fn consume(&mut self) -> Option<char>;
}

impl<I: std::iter::Iterator<Item = char>> CharacterStream for Peekable<I> {
    fn peek(&mut self) -> Option<char> { Peekable::peek(self).copied() }

    fn consume(&mut self) -> Option<char> { self.next() }
}

/// Is an iterator iterating over the characters in a source file that can be peeked at.
#[derive(Debug, Clone, CopyGetters)]
pub struct Iterator<'a> {
    /// Gets the source file that the iterator is iterating over.
    #[get_copy = "pub"]
    source_file: &'a Arc<SourceFile>,
    iterator: Peekable<Chars<'a>>,
}

impl<'a> std::iter::Iterator for Iterator<'a> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> { self.iterator.next() }
}

impl<'a> CharacterStream for Iterator<'a> {
    fn peek(&mut self) -> Option<char> { self.iterator.peek().copied() }

    fn consume(&mut self) -> Option<char> { self.iterator.next() }
}
