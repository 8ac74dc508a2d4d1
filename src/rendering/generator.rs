//! Generator trait implemented by each output format

use std::path::PathBuf;

use crate::output::OutputError;

/// Capability set for producing one CV document. Two variants implement
/// this, one per output format; each owns the loaded record and its own
/// append-only markup buffer, finalized exactly once.
pub trait Generator {
    /// Neutralize characters with special meaning in the target markup.
    /// Pure and total; renderers route every record-derived prose string
    /// through this before insertion. Link targets, glyph identifiers,
    /// and numeric display fields are inserted verbatim.
    fn escape_text(&self, raw: &str) -> String;

    fn generate_header(&mut self);
    fn generate_summary(&mut self);
    fn generate_experience(&mut self);
    fn generate_education(&mut self);
    fn generate_skills(&mut self);
    fn generate_publications(&mut self);
    fn generate_awards(&mut self);
    fn generate_hobbies(&mut self);

    /// View of the markup accumulated so far.
    fn markup(&self) -> &str;

    /// Finalize the document and persist it, returning the path of the
    /// artifact that was written.
    fn write_output(&mut self) -> Result<PathBuf, OutputError>;

    /// Append every section in the fixed document order. This is the only
    /// place that order is controlled; reordering these calls reorders
    /// the document.
    fn render(&mut self) {
        self.generate_header();
        self.generate_summary();
        self.generate_experience();
        self.generate_education();
        self.generate_skills();
        self.generate_publications();
        self.generate_awards();
        self.generate_hobbies();
    }

    /// Render every section, then persist the result.
    fn generate(&mut self) -> Result<PathBuf, OutputError> {
        self.render();
        self.write_output()
    }
}
