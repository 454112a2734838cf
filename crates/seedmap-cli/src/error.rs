//! Errors surfaced by the `seedmap` command.

use std::path::PathBuf;

use seedmap_render::RenderError;
use seedmap_world::VersionParseError;

/// Anything that can stop a `seedmap` run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// `world.version` did not parse.
    #[error("invalid game version: {0}")]
    Version(#[from] VersionParseError),

    /// The render was rejected or could not allocate.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The render produced no pixels.
    #[error("render produced no image")]
    EmptyImage,

    /// The output file could not be created.
    #[error("failed to create {}: {source}", path.display())]
    Io {
        /// Output path.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PNG encoding failed.
    #[error("failed to encode PNG: {0}")]
    Png(#[from] png::EncodingError),
}
