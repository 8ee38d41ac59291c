// src/export/columns.rs
// =============================================================================
// The set of columns a CSV export can contain.
//
// A column pairs the header text (the GitHub API key, so config files read
// like the API docs) with the code that formats that attribute of a record.
// Header and rows are both produced from the same resolved list, so they can
// never disagree about the shape of the file.
// =============================================================================

use crate::config::ConfigError;
use crate::github::RepositoryRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    FullName,
    Private,
    Description,
    Archived,
    ForksCount,
    Fork,
    HtmlUrl,
    Language,
    StargazersCount,
    WatchersCount,
    OpenIssuesCount,
    DefaultBranch,
    CreatedAt,
    UpdatedAt,
    PushedAt,
}

// Declaration order, also the order `repo-export fields` prints
const ALL: [Column; 16] = [
    Column::Name,
    Column::FullName,
    Column::Private,
    Column::Description,
    Column::Archived,
    Column::ForksCount,
    Column::Fork,
    Column::HtmlUrl,
    Column::Language,
    Column::StargazersCount,
    Column::WatchersCount,
    Column::OpenIssuesCount,
    Column::DefaultBranch,
    Column::CreatedAt,
    Column::UpdatedAt,
    Column::PushedAt,
];

impl Column {
    pub fn all() -> &'static [Column] {
        &ALL
    }

    /// The header text for this column
    pub fn name(self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::FullName => "full_name",
            Column::Private => "private",
            Column::Description => "description",
            Column::Archived => "archived",
            Column::ForksCount => "forks_count",
            Column::Fork => "fork",
            Column::HtmlUrl => "html_url",
            Column::Language => "language",
            Column::StargazersCount => "stargazers_count",
            Column::WatchersCount => "watchers_count",
            Column::OpenIssuesCount => "open_issues_count",
            Column::DefaultBranch => "default_branch",
            Column::CreatedAt => "created_at",
            Column::UpdatedAt => "updated_at",
            Column::PushedAt => "pushed_at",
        }
    }

    /// Looks a column up by its header text (case-sensitive)
    pub fn from_name(name: &str) -> Option<Column> {
        ALL.iter().copied().find(|column| column.name() == name)
    }

    /// Whether cells of this column are wrapped in quotes even when nothing
    /// in them needs escaping
    pub fn always_quoted(self) -> bool {
        matches!(self, Column::Description)
    }

    /// Formats this column's value for one record
    ///
    /// Booleans become `true`/`false`, counts are decimal and absent optional
    /// values are an empty cell. Escaping is left to the writer.
    pub fn value(self, record: &RepositoryRecord) -> String {
        fn text(value: &Option<String>) -> String {
            value.clone().unwrap_or_default()
        }

        match self {
            Column::Name => record.name.clone(),
            Column::FullName => text(&record.full_name),
            Column::Private => record.private.to_string(),
            Column::Description => text(&record.description),
            Column::Archived => record.archived.to_string(),
            Column::ForksCount => record.forks_count.to_string(),
            Column::Fork => record.fork.to_string(),
            Column::HtmlUrl => text(&record.html_url),
            Column::Language => text(&record.language),
            Column::StargazersCount => record.stargazers_count.to_string(),
            Column::WatchersCount => record.watchers_count.to_string(),
            Column::OpenIssuesCount => record.open_issues_count.to_string(),
            Column::DefaultBranch => text(&record.default_branch),
            Column::CreatedAt => text(&record.created_at),
            Column::UpdatedAt => text(&record.updated_at),
            Column::PushedAt => text(&record.pushed_at),
        }
    }
}

// Turns configured field names into columns, keeping their order
//
// Duplicates are kept: asking for a column twice gets it twice.
pub fn resolve_columns<S: AsRef<str>>(fields: &[S]) -> Result<Vec<Column>, ConfigError> {
    if fields.is_empty() {
        return Err(ConfigError::NoFields);
    }

    fields
        .iter()
        .map(|field| {
            let field = field.as_ref();
            Column::from_name(field).ok_or_else(|| ConfigError::UnknownField(field.to_string()))
        })
        .collect()
}
