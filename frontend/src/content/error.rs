use thiserror::Error;

/// Data-integrity defects found while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog document is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("project #{index} has an empty id")]
    EmptyProjectId { index: usize },

    #[error("project id `{0}` appears more than once")]
    DuplicateProjectId(String),

    #[error("testimonial on project `{project}` has an empty {field}")]
    IncompleteTestimonial { project: String, field: &'static str },

    #[error("expertise `{title}` references unknown icon `{key}`")]
    UnknownIcon { title: String, key: String },

    #[error("project `{project}` has no {kind} images")]
    MissingImage { project: String, kind: &'static str },
}
