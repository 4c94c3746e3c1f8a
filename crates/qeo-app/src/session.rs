//! The editing session.
//!
//! One session owns one mutable [`CardRecord`] and the currently active
//! rendered QR artifact. The browser original kept both in module-level
//! globals bound to document singletons; here they are explicit state,
//! and the renderer is injected.

use qeo_core::model::{CardFields, CardRecord, CardSize, QrDotStyle, QrStyle, Template, Theme};

/// Rendering collaborator that turns a vCard payload plus style options
/// into a visual artifact. Rendering itself lives outside the core.
pub trait QrRenderer {
    type Output;

    /// Renders `data` with the given style options.
    ///
    /// ## Errors
    /// Returns an error if the renderer cannot produce an artifact.
    fn render(&self, data: &str, style: &QrStyle) -> anyhow::Result<Self::Output>;
}

/// Renderer that keeps the payload text itself as the artifact.
///
/// Used where no visual renderer is wired in: headless runs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl QrRenderer for TextRenderer {
    type Output = String;

    fn render(&self, data: &str, _style: &QrStyle) -> anyhow::Result<String> {
        Ok(data.to_owned())
    }
}

/// The active editing session: single writer, mutated synchronously by
/// discrete user actions.
pub struct EditorSession<R: QrRenderer> {
    record: CardRecord,
    renderer: R,
    qr: Option<R::Output>,
}

impl<R: QrRenderer> EditorSession<R> {
    /// Starts a session with an all-empty record, as on first load.
    pub fn new(renderer: R) -> Self {
        Self {
            record: CardRecord::default(),
            renderer,
            qr: None,
        }
    }

    /// Starts a session from a previously stored record.
    pub fn with_record(renderer: R, record: CardRecord) -> Self {
        Self {
            record,
            renderer,
            qr: None,
        }
    }

    /// The current record.
    #[must_use]
    pub fn record(&self) -> &CardRecord {
        &self.record
    }

    /// The most recently rendered QR artifact, if any.
    #[must_use]
    pub fn qr(&self) -> Option<&R::Output> {
        self.qr.as_ref()
    }

    /// The exact text the QR code encodes.
    #[must_use]
    pub fn qr_payload(&self) -> String {
        qeo_vcard::encode(&self.record.fields)
    }

    /// Replaces the editable fields and refreshes the QR artifact.
    ///
    /// ## Errors
    /// Returns an error if the renderer fails; the record update itself
    /// cannot fail.
    pub fn update_fields(&mut self, fields: CardFields) -> anyhow::Result<()> {
        self.record.fields = fields;
        self.refresh_qr()
    }

    /// Replaces the whole record (load and import paths) and refreshes
    /// the QR artifact.
    ///
    /// ## Errors
    /// Returns an error if the renderer fails.
    pub fn replace_record(&mut self, record: CardRecord) -> anyhow::Result<()> {
        self.record = record;
        self.refresh_qr()
    }

    /// Selects a layout template.
    pub fn set_template(&mut self, template: Template) {
        self.record.presentation.template = template.as_str().to_string();
    }

    /// Selects a color theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.record.presentation.theme = theme.as_str().to_string();
    }

    /// Selects a card size.
    pub fn set_size(&mut self, size: CardSize) {
        self.record.presentation.size = size.as_str().to_string();
    }

    /// Sets the QR foreground color.
    pub fn set_qr_color(&mut self, color: String) {
        self.record.presentation.qr_color = color;
    }

    /// Sets the QR background color.
    pub fn set_qr_bg_color(&mut self, color: String) {
        self.record.presentation.qr_bg_color = color;
    }

    /// Selects the QR dot style.
    pub fn set_qr_dot_style(&mut self, style: QrDotStyle) {
        self.record.presentation.qr_dot_style = style.as_str().to_string();
    }

    /// Re-renders the QR artifact from the current record.
    ///
    /// ## Errors
    /// Returns an error if the renderer fails; the previous artifact is
    /// kept in that case.
    pub fn refresh_qr(&mut self) -> anyhow::Result<()> {
        let payload = self.qr_payload();
        let style = self.record.presentation.qr_style();
        let output = self.renderer.render(&payload, &style)?;
        self.qr = Some(output);
        Ok(())
    }

    /// Resets to the all-empty record and drops the rendered artifact.
    /// Only an explicit clear destroys session state.
    pub fn reset(&mut self) {
        self.record = CardRecord::default();
        self.qr = None;
        tracing::debug!("session reset");
    }
}
