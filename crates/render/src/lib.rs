//! `parchi-render` — the four-copy challan document renderer.
//!
//! A pure layout pass ([`layout`]) positions every mark of the page; the
//! `lopdf` backend serializes the result. Rendering is deterministic: the
//! same record and generation timestamp produce byte-identical output.

pub mod error;
pub mod layout;
mod metrics;
mod pdf;
pub mod profile;

pub use error::RenderError;
pub use profile::InstitutionProfile;

use chrono::{DateTime, Utc};
use parchi_challans::ChallanRecord;

/// Renders one challan record into the four-copy printable page.
#[derive(Debug, Clone, Default)]
pub struct ChallanRenderer {
    profile: InstitutionProfile,
}

impl ChallanRenderer {
    pub fn new(profile: InstitutionProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &InstitutionProfile {
        &self.profile
    }

    /// Render the record as a single-page PDF.
    ///
    /// `generated_at` is the stamp printed on the document; it is the only
    /// caller-supplied variable, so callers that need reproducible bytes pass
    /// a fixed timestamp.
    pub fn render(
        &self,
        record: &ChallanRecord,
        generated_at: DateTime<Utc>,
    ) -> Result<Vec<u8>, RenderError> {
        let bands = layout::layout_page(record, &self.profile, generated_at)?;
        pdf::write_pdf(&bands)
    }
}
