//! Error types.

use thiserror::Error;

/// A required piece of markup was not found while building the controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupFailure {
    #[error("container '{0}' not found in document")]
    Container(String),

    #[error("no elements with content class '{class}' under the container")]
    NoContent { class: String },

    #[error("content element '{content_id}' has no preceding title sibling")]
    Title { content_id: String },

    #[error("no accordion container with class '{class}'")]
    Accordion { class: String },

    #[error("no navigation container with class '{class}'")]
    Navigation { class: String },

    #[error("navigation has {links} links but there are {tabs} tabs")]
    NavCount { links: usize, tabs: usize },

    #[error("default tab {index} out of range ({tabs} tabs)")]
    DefaultTab { index: usize, tabs: usize },
}

#[derive(Debug, Error)]
pub enum TabsError {
    /// The markup handed to the controller is malformed.
    #[error("structural lookup failed: {0}")]
    StructuralLookup(#[from] LookupFailure),

    #[error("invalid options: {0}")]
    Config(#[from] serde_json::Error),
}
