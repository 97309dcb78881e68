pub mod append;
pub mod category;
pub mod config;
pub mod error;
pub mod render;
pub mod scan;
pub mod template;

pub use append::{EscapedLines, SchemaAppender};
pub use category::{lookup_label, SchemaCategory, SCHEMA_CATEGORIES};
pub use config::Config;
pub use error::{Result, SchemadocError};
pub use scan::{category_summary, resolved_category_dirs, schema_files, CategoryDir};
pub use template::{splice, XSD_MARKER_END, XSD_MARKER_START};
