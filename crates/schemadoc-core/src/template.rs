//! Splicing the generated fragment into a hand-maintained wrapper.
//!
//! The wrapper document carries the full HTML skeleton (headers, CSS,
//! footers) plus a marked region that the generated schema section
//! replaces on every run.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{Result, SchemadocError};

/// Marker line that opens the generated schema region.
pub const XSD_MARKER_START: &str = "INSERT_XSD";
/// Marker line that closes the stale schema region.
pub const XSD_MARKER_END: &str = "END_XSD";

/// Copy `template` to `sink`, replacing the marked region with the
/// output of `insert`.
///
/// Lines up to one containing [`XSD_MARKER_START`] are copied verbatim
/// (the marker line itself is dropped), `insert` then runs against the
/// sink, lines through one containing [`XSD_MARKER_END`] are discarded,
/// and the remainder is copied. A template without markers is copied
/// whole with the fragment appended at the end.
pub fn splice<W, F>(template: &Path, sink: &mut W, insert: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> Result<()>,
{
    if !template.exists() {
        return Err(SchemadocError::TemplateNotFound {
            path: template.to_path_buf(),
        });
    }

    let reader = BufReader::new(File::open(template)?);
    let mut lines = reader.lines();

    // Wrapper head, up to the start marker.
    for line in lines.by_ref() {
        let line = line?;
        if line.contains(XSD_MARKER_START) {
            break;
        }
        writeln!(sink, "{line}")?;
    }

    insert(sink)?;

    // Discard the stale generated region.
    for line in lines.by_ref() {
        if line?.contains(XSD_MARKER_END) {
            break;
        }
    }

    // Wrapper tail.
    for line in lines {
        writeln!(sink, "{}", line?)?;
    }

    sink.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn splice_to_string(template: &Path) -> String {
        let mut sink = Vec::new();
        splice(template, &mut sink, |w| {
            writeln!(w, "FRAGMENT")?;
            Ok(())
        })
        .unwrap();
        String::from_utf8(sink).unwrap()
    }

    #[test]
    fn replaces_marked_region() {
        let dir = TempDir::new().unwrap();
        let template = dir.path().join("template.htm");
        fs::write(
            &template,
            "<html>\n<!-- INSERT_XSD -->\nold stale line\n<!-- END_XSD -->\n</html>\n",
        )
        .unwrap();

        let out = splice_to_string(&template);
        assert_eq!(out, "<html>\nFRAGMENT\n</html>\n");
    }

    #[test]
    fn template_without_markers_gets_fragment_appended() {
        let dir = TempDir::new().unwrap();
        let template = dir.path().join("template.htm");
        fs::write(&template, "<html>\n</html>\n").unwrap();

        let out = splice_to_string(&template);
        assert_eq!(out, "<html>\n</html>\nFRAGMENT\n");
    }

    #[test]
    fn missing_end_marker_discards_through_eof() {
        let dir = TempDir::new().unwrap();
        let template = dir.path().join("template.htm");
        fs::write(&template, "head\nINSERT_XSD\nstale one\nstale two\n").unwrap();

        let out = splice_to_string(&template);
        assert_eq!(out, "head\nFRAGMENT\n");
    }

    #[test]
    fn missing_template_is_an_error() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("absent.htm");

        let mut sink = Vec::new();
        let err = splice(&gone, &mut sink, |_| Ok(())).unwrap_err();
        assert!(matches!(err, SchemadocError::TemplateNotFound { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn insert_failure_propagates() {
        let dir = TempDir::new().unwrap();
        let template = dir.path().join("template.htm");
        fs::write(&template, "INSERT_XSD\nEND_XSD\n").unwrap();

        let mut sink = Vec::new();
        let err = splice(&template, &mut sink, |_| {
            Err(SchemadocError::TemplateNotFound {
                path: template.clone(),
            })
        })
        .unwrap_err();
        assert!(matches!(err, SchemadocError::TemplateNotFound { .. }));
    }
}
