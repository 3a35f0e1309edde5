//! Demo configuration, read from the environment.

/// Environment variable selecting which sections to run.
pub const SECTIONS_VAR: &str = "BOOKSHELF_SECTIONS";

/// One block of the demo transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    HashStrings,
    TreeStrings,
    TreeBooks,
    TreeBooksComparator,
    TreeBooksById,
    TreeBooksByTitle,
    HashBooks,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::HashStrings,
        Section::TreeStrings,
        Section::TreeBooks,
        Section::TreeBooksComparator,
        Section::TreeBooksById,
        Section::TreeBooksByTitle,
        Section::HashBooks,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::HashStrings => "hash-strings",
            Section::TreeStrings => "tree-strings",
            Section::TreeBooks => "tree-books",
            Section::TreeBooksComparator => "tree-books-comparator",
            Section::TreeBooksById => "tree-books-by-id",
            Section::TreeBooksByTitle => "tree-books-by-title",
            Section::HashBooks => "hash-books",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.name() == name)
    }
}

/// Which sections to render, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub sections: Vec<Section>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sections: Section::ALL.to_vec(),
        }
    }
}

impl DemoConfig {
    /// Reads [`SECTIONS_VAR`]; unset or blank means every section.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(SECTIONS_VAR).ok().as_deref())
    }

    /// Parses a comma-separated section list. Unknown names are skipped with
    /// a warning.
    pub fn from_value(value: Option<&str>) -> Self {
        let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
            return Self::default();
        };

        let sections = value
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .filter_map(|name| {
                let section = Section::from_name(name);
                if section.is_none() {
                    tracing::warn!(section = name, "unknown demo section; skipping");
                }
                section
            })
            .collect();

        Self { sections }
    }
}
