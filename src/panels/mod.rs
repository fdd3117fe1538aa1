//! Custom tab panels shipped with the built-in bundle.
//!
//! Each panel owns its display rows and renders a fixed-column table.

mod invoice_processing;
mod property_occupation;

pub use invoice_processing::InvoiceProcessingPanel;
pub use property_occupation::PropertyOccupationPanel;

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    /// Flatten a test terminal's buffer into newline-separated text.
    pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }
}
