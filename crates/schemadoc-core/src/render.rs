//! HTML block construction for the generated fragment.
//!
//! The output is not general-purpose HTML. It targets a word processor's
//! HTML importer and leans on vendor styling hints (outline list markers,
//! paragraph border divs) so the surrounding document keeps consistent
//! section numbering.

const SECTION_DIV_OPEN: &str =
    "<div style='mso-element:para-border-div;border-top:double windowtext 1.5pt;\
border-left:none;border-bottom:double windowtext 1.5pt;border-right:none;\
padding:1.0pt 0in 1.0pt 0in'>";

const LIST_MARKER_STUB: &str = "<![if !supportLists]><span style='mso-list:Ignore'>\
<span style='font:7.0pt \"Times New Roman\"'>&nbsp;&nbsp;&nbsp;&nbsp; </span>\
</span><![endif]>";

/// Heading block for one category section.
///
/// `label` comes from the builtin table and is embedded as-is, unescaped.
pub fn category_header(label: &str) -> String {
    format!(
        "{SECTION_DIV_OPEN}\n<h1 style='mso-list:l5 level1 lfo1'>{LIST_MARKER_STUB}{label}</h1>\n</div>"
    )
}

/// Heading block for one schema file within a category.
pub fn file_header(name: &str) -> String {
    format!(
        "{SECTION_DIV_OPEN}\n<h2 style='mso-list:l5 level2 lfo1'>{LIST_MARKER_STUB}{name}</h2>\n</div>"
    )
}

/// Opens the indented block that holds a file's content lines.
pub fn body_open() -> &'static str {
    "<div class=MsoNormal style='margin-left:50.0pt'>"
}

pub fn body_close() -> &'static str {
    "</div>"
}

/// One line of schema content, already escaped.
pub fn body_line(escaped: &str) -> String {
    format!("<p class=MsoNormal><span style='font-family:\"Courier New\"'>{escaped}</span></p>")
}

/// Escape a content line for embedding.
///
/// Only angle brackets are rewritten; ampersands and quotes pass through
/// untouched.
pub fn escape_markup(line: &str) -> String {
    line.replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_angle_brackets_only() {
        assert_eq!(
            escape_markup("<Foo a=\"1\"><Bar/></Foo>"),
            "&lt;Foo a=\"1\"&gt;&lt;Bar/&gt;&lt;/Foo&gt;"
        );
    }

    #[test]
    fn leaves_ampersands_and_quotes_alone() {
        assert_eq!(escape_markup("a & b 'c' \"d\""), "a & b 'c' \"d\"");
        assert_eq!(escape_markup("&lt;"), "&lt;");
    }

    #[test]
    fn category_header_is_a_bordered_h1() {
        let block = category_header("Observation Schemas");
        assert!(block.contains("Observation Schemas"));
        assert!(block.contains("border-top:double windowtext 1.5pt"));
        assert!(block.contains("<h1 style='mso-list:l5 level1 lfo1'>"));
        assert!(block.ends_with("</div>"));
    }

    #[test]
    fn file_header_is_a_bordered_h2() {
        let block = file_header("Base.xsd");
        assert!(block.contains("Base.xsd"));
        assert!(block.contains("<h2 style='mso-list:l5 level2 lfo1'>"));
    }

    #[test]
    fn body_line_is_monospaced() {
        let block = body_line("&lt;a&gt;");
        assert!(block.contains("Courier New"));
        assert!(block.contains("&lt;a&gt;"));
    }
}
