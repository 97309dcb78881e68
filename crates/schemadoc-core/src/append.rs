//! Streaming schema traversal into a caller-owned sink.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SchemadocError};
use crate::render;
use crate::scan::{resolved_category_dirs, schema_files};

/// Lazily yields the escaped lines of one schema file.
///
/// Single forward pass over the underlying reader; the file handle is
/// released when the iterator is dropped.
#[derive(Debug)]
pub struct EscapedLines {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
}

impl EscapedLines {
    /// Open `path` for line-by-line rendering.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| SchemadocError::SchemaRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
        })
    }
}

impl Iterator for EscapedLines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.lines.next()? {
            Ok(line) => Some(Ok(render::escape_markup(&line))),
            Err(source) => Some(Err(SchemadocError::SchemaRead {
                path: self.path.clone(),
                source,
            })),
        }
    }
}

/// Walks a schema root and writes the rendered fragment to a sink.
///
/// The sink stays open afterwards; its lifecycle belongs to the caller.
/// Concurrent traversals against the same sink must be serialized by the
/// caller.
pub struct SchemaAppender<'w, W: Write> {
    sink: &'w mut W,
}

impl<'w, W: Write> SchemaAppender<'w, W> {
    pub fn new(sink: &'w mut W) -> Self {
        Self { sink }
    }

    /// Render every known-category subdirectory of `root`.
    ///
    /// Emits the category heading, then a heading and escaped content
    /// block for each schema file, flushing the sink after every file.
    /// The first failure aborts the remaining traversal.
    pub fn append(&mut self, root: &Path) -> Result<()> {
        for dir in resolved_category_dirs(root)? {
            writeln!(self.sink, "{}", render::category_header(dir.label))?;

            for file in schema_files(&dir.path)? {
                let name = file.file_name().and_then(|n| n.to_str()).unwrap_or("");
                writeln!(self.sink, "{}", render::file_header(name))?;

                writeln!(self.sink, "{}", render::body_open())?;
                for line in EscapedLines::open(&file)? {
                    writeln!(self.sink, "{}", render::body_line(&line?))?;
                }
                writeln!(self.sink, "{}", render::body_close())?;

                self.sink.flush()?;
            }
        }
        Ok(())
    }
}
