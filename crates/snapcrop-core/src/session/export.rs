//! Batch export: render every eligible entry to its final raster.
//!
//! Results pair with their entry by id, never by position, so the host can
//! schedule the renders however it likes and completion order does not
//! matter. Output names follow the export boundary contract:
//! `image-{id}.png`, regardless of how the raster was produced.

use thiserror::Error;

use crate::render::{render, RenderError, RenderedImage};
use crate::transform::InterpolationFilter;

use super::{EditSession, EntryId, SessionError};

/// Derive the suggested output file name for an entry.
pub fn output_file_name(id: EntryId) -> String {
    format!("image-{id}.png")
}

/// Errors from exporting a single named entry.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// One successfully exported entry.
#[derive(Debug, Clone)]
pub struct ExportedImage {
    pub id: EntryId,
    /// Suggested file name (`image-{id}.png`).
    pub file_name: String,
    pub image: RenderedImage,
}

/// One entry whose render failed.
///
/// Carries the same derived file name successes do, so the host can report
/// per-file outcomes without re-deriving names.
#[derive(Debug)]
pub struct ExportFailure {
    pub id: EntryId,
    pub file_name: String,
    pub error: RenderError,
}

/// Outcome of a batch export.
///
/// Entries without a crop region are skipped and appear in neither list.
#[derive(Debug, Default)]
pub struct BatchExport {
    /// Successful renders, in collection order.
    pub exported: Vec<ExportedImage>,
    /// Per-entry failures, in collection order.
    pub failed: Vec<ExportFailure>,
}

impl BatchExport {
    /// True when no invoked render failed.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl EditSession {
    /// Render every entry with a committed crop region, in collection order.
    ///
    /// Entries without a crop region are skipped silently. A failed render
    /// is recorded against its entry and never aborts the rest of the batch.
    pub fn export_all(&self, filter: InterpolationFilter) -> BatchExport {
        let mut batch = BatchExport::default();

        for entry in self.list() {
            if entry.params.crop_rect.is_none() {
                continue;
            }

            let file_name = output_file_name(entry.id);
            match render(&entry.source, &entry.params, filter) {
                Ok(image) => batch.exported.push(ExportedImage {
                    id: entry.id,
                    file_name,
                    image,
                }),
                Err(error) => batch.failed.push(ExportFailure {
                    id: entry.id,
                    file_name,
                    error,
                }),
            }
        }

        batch
    }

    /// Render one entry to its named raster.
    ///
    /// Unlike [`EditSession::export_all`], a missing crop region is an
    /// error here, not a skip.
    pub fn export_entry(
        &self,
        id: EntryId,
        filter: InterpolationFilter,
    ) -> Result<ExportedImage, ExportError> {
        let entry = self.entry(id).ok_or(SessionError::NotFound(id))?;
        let image = render(&entry.source, &entry.params, filter)?;
        Ok(ExportedImage {
            id,
            file_name: output_file_name(id),
            image,
        })
    }
}
