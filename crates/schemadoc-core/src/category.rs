//! Builtin schema category definitions.
//!
//! Subdirectories of the schema root are expected to be named exactly
//! after one of these keys; anything else is ignored during traversal.

/// A named grouping of schema files, rendered as one outline section.
#[derive(Debug, Clone, Copy)]
pub struct SchemaCategory {
    /// Subdirectory name the category matches (exact, case-sensitive).
    pub key: &'static str,
    /// Heading text for the category's section.
    pub label: &'static str,
}

/// Builtin category table. Keys are unique; declaration order does not
/// determine output order (traversal follows the filesystem listing).
pub const SCHEMA_CATEGORIES: &[SchemaCategory] = &[
    SchemaCategory {
        key: "assetSchema",
        label: "Asset Schemas",
    },
    SchemaCategory {
        key: "capabilitySchema",
        label: "Capability Schemas",
    },
    SchemaCategory {
        key: "commandSchema",
        label: "Command Schemas",
    },
    SchemaCategory {
        key: "missionProgramSchema",
        label: "Mission Program Schemas",
    },
    SchemaCategory {
        key: "observationSchema",
        label: "Observation Schemas",
    },
    SchemaCategory {
        key: "remoteInterfaceSchema",
        label: "Remote Interface Schemas",
    },
    SchemaCategory {
        key: "configurationSchema",
        label: "Configuration Schemas",
    },
];

/// Resolve a directory name to its display label.
///
/// Exact, case-sensitive match on the key column; first match wins.
/// An unknown name is not an error, callers skip that directory.
pub fn lookup_label(name: &str) -> Option<&'static str> {
    SCHEMA_CATEGORIES
        .iter()
        .find(|c| c.key == name)
        .map(|c| c.label)
}
