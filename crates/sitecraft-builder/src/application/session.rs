//! BuilderSession: the in-memory model behind the visual editor.
//!
//! One session exists per editing session and is passed explicitly to every
//! operation; there is no global editor state.  It owns:
//!
//! - the current [`Configuration`] (the Content Store),
//! - the undo/redo [`History`] of whole-configuration snapshots,
//! - the last saved/loaded baseline used for dirty tracking,
//! - the public slug and published flag of the owning remote record,
//! - an advisory "saving" flag.
//!
//! # Mutation contract
//!
//! Every mutator snapshots the pre-mutation value into the history and then
//! applies its change, so one call is exactly one undo step.  There is no
//! debouncing: a text input that calls [`BuilderSession::update_text`] on
//! every keystroke spends one history slot per keystroke.  Callers wanting a
//! coarser grain batch their edits before calling the mutator.
//!
//! Read-only sessions still apply mutations (e.g. a live preview fed from
//! outside) but record no history and refuse to save.
//!
//! # Saving in two phases
//!
//! [`BuilderSession::begin_save`] captures the value to send and raises the
//! saving flag; [`BuilderSession::complete_save`] applies the outcome.  The
//! session does not serialize overlapping saves: if a caller ignores
//! [`BuilderSession::is_saving`] and starts a second save, whichever
//! response is completed last sets the baseline (last-response-wins).

use sitecraft_core::domain::schema::FieldDescriptor;
use sitecraft_core::{
    has_unsaved_changes, schema_for, ColorKey, Configuration, FieldKind, History, LogoSlot,
    SaveRequest, Schema, TemplateId,
};
use tracing::{debug, info, warn};

use super::errors::{BuilderError, RemoteError};

/// A save captured by [`BuilderSession::begin_save`], waiting for its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTicket {
    request: SaveRequest,
}

impl SaveTicket {
    /// The exact body to send to the configuration store.
    pub fn request(&self) -> &SaveRequest {
        &self.request
    }
}

/// One editable field of the active schema with its resolved value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue<'a> {
    pub descriptor: &'static FieldDescriptor,
    pub value: &'a str,
}

/// The editing session.
#[derive(Debug, Clone)]
pub struct BuilderSession {
    config: Configuration,
    slug: Option<String>,
    baseline: Option<Configuration>,
    history: History<Configuration>,
    published: bool,
    read_only: bool,
    saving: bool,
}

impl BuilderSession {
    /// Starts a fresh session from `template`'s defaults.
    ///
    /// No baseline exists yet, so the session becomes dirty on the first edit.
    pub fn new(template: TemplateId) -> Self {
        Self {
            config: Configuration::defaults_for(template),
            slug: None,
            baseline: None,
            history: History::new(),
            published: false,
            read_only: false,
            saving: false,
        }
    }

    /// Starts a session from a persisted record; the record is the baseline.
    pub fn from_record(config: Configuration, slug: Option<String>, published: bool) -> Self {
        let mut session = Self::new(config.template);
        session.apply_loaded(config, slug, published);
        session
    }

    /// Marks the session read-only (no history, no saving).
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn template(&self) -> TemplateId {
        self.config.template
    }

    /// The schema of the active template.
    pub fn schema(&self) -> &'static Schema {
        schema_for(self.config.template)
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn baseline(&self) -> Option<&Configuration> {
        self.baseline.as_ref()
    }

    /// Published flag of the owning remote record.
    pub fn is_published(&self) -> bool {
        self.published
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Advisory flag: `true` between `begin_save` and `complete_save`.
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of snapshots on the undo stack.
    pub fn history_depth(&self) -> usize {
        self.history.past_len()
    }

    /// `true` when the configuration differs from what the store holds.
    pub fn has_unsaved_changes(&self) -> bool {
        has_unsaved_changes(&self.config, self.baseline.as_ref(), self.history.past_len())
    }

    // ── Field resolution ──────────────────────────────────────────────────────

    /// Stored text, else the schema default, else `""`.
    pub fn text_value(&self, key: &str) -> &str {
        self.config
            .content
            .text
            .get(key)
            .map(String::as_str)
            .or_else(|| self.schema().text_default(key))
            .unwrap_or("")
    }

    /// Stored image reference, else the schema default, else absent.
    pub fn image_value(&self, key: &str) -> Option<&str> {
        self.config
            .content
            .images
            .get(key)
            .map(String::as_str)
            .or_else(|| self.schema().image_default(key))
    }

    pub fn color_value(&self, key: ColorKey) -> &str {
        self.config.colors.get(key)
    }

    pub fn logo(&self, slot: LogoSlot) -> Option<&str> {
        self.config.content.logos.get(slot)
    }

    /// Every field the active schema exposes, with its resolved value.
    ///
    /// Keys stored for other templates are not listed, but they stay in the
    /// configuration.
    pub fn field_values(&self) -> Vec<FieldValue<'_>> {
        self.schema()
            .fields()
            .map(|descriptor| {
                let value = match descriptor.kind {
                    FieldKind::Text | FieldKind::Textarea => self.text_value(descriptor.key),
                    FieldKind::Image => self.image_value(descriptor.key).unwrap_or(""),
                };
                FieldValue { descriptor, value }
            })
            .collect()
    }

    // ── Mutators ──────────────────────────────────────────────────────────────

    pub fn update_color(&mut self, key: ColorKey, value: impl Into<String>) {
        let value = value.into();
        self.mutate("color", |cfg| cfg.colors.set(key, value));
    }

    pub fn update_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let (key, value) = (key.into(), value.into());
        self.mutate("text", |cfg| {
            cfg.content.text.insert(key, value);
        });
    }

    pub fn update_image(&mut self, key: impl Into<String>, url: impl Into<String>) {
        let (key, url) = (key.into(), url.into());
        self.mutate("image", |cfg| {
            cfg.content.images.insert(key, url);
        });
    }

    /// Sets or clears (`None`) a logo slot.
    pub fn update_logo(&mut self, slot: LogoSlot, url: Option<String>) {
        self.mutate("logo", |cfg| cfg.content.logos.set(slot, url));
    }

    pub fn clear_logo(&mut self, slot: LogoSlot) {
        self.update_logo(slot, None);
    }

    /// Sets the url of `platform`, replacing an existing entry in place.
    pub fn update_social_link(&mut self, platform: &str, url: impl Into<String>) {
        let url = url.into();
        self.mutate("social link", |cfg| cfg.content.upsert_social_link(platform, url));
    }

    pub fn remove_social_link(&mut self, platform: &str) {
        self.mutate("social link removal", |cfg| {
            cfg.content.remove_social_link(platform);
        });
    }

    /// Switches template without pruning any content.
    ///
    /// Fields of the previous template stay stored and reappear when the
    /// user switches back; a single undo restores the previous template.
    pub fn update_template(&mut self, template: TemplateId) {
        self.mutate("template", |cfg| cfg.template = template);
        info!(template = %template, "template switched");
    }

    /// Records the pre-mutation snapshot (unless read-only) and applies `change`.
    fn mutate(&mut self, what: &'static str, change: impl FnOnce(&mut Configuration)) {
        if !self.read_only {
            self.history.record(self.config.clone());
        }
        change(&mut self.config);
        debug!(mutation = what, depth = self.history.past_len(), "configuration updated");
    }

    // ── Undo / redo ───────────────────────────────────────────────────────────

    /// Restores the previous configuration.  Returns `false` when there is none.
    pub fn undo(&mut self) -> bool {
        let applied = self.history.undo(&mut self.config);
        if applied {
            debug!(template = %self.config.template, "undo");
        }
        applied
    }

    /// Re-applies the most recently undone configuration.
    pub fn redo(&mut self) -> bool {
        let applied = self.history.redo(&mut self.config);
        if applied {
            debug!(template = %self.config.template, "redo");
        }
        applied
    }

    // ── Persistence bookkeeping ───────────────────────────────────────────────

    /// Captures the current configuration for sending and raises the saving flag.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::ReadOnly`] for read-only sessions.
    pub fn begin_save(&mut self, slug: Option<String>) -> Result<SaveTicket, BuilderError> {
        if self.read_only {
            return Err(BuilderError::ReadOnly);
        }
        if self.saving {
            warn!("save started while another save is in flight; last response wins");
        }
        self.saving = true;
        Ok(SaveTicket {
            request: SaveRequest::new(self.config.clone(), slug),
        })
    }

    /// Applies the outcome of a save started with [`begin_save`](Self::begin_save).
    ///
    /// On success the *sent* configuration becomes the baseline and a sent
    /// slug becomes the session slug.  On failure nothing but the saving flag
    /// changes: edits are kept and the session stays dirty.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Remote`] carrying the store's failure.
    pub fn complete_save(
        &mut self,
        ticket: SaveTicket,
        outcome: Result<(), RemoteError>,
    ) -> Result<(), BuilderError> {
        self.saving = false;
        match outcome {
            Ok(()) => {
                let SaveRequest { config, slug, .. } = ticket.request;
                self.baseline = Some(config);
                if slug.is_some() {
                    self.slug = slug;
                }
                info!(slug = ?self.slug, "configuration saved");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "save failed; keeping local edits");
                Err(BuilderError::Remote(err))
            }
        }
    }

    /// Replaces the session with a loaded record, which becomes the baseline.
    pub fn apply_loaded(&mut self, config: Configuration, slug: Option<String>, published: bool) {
        self.baseline = Some(config.clone());
        self.config = config;
        self.slug = slug;
        self.published = published;
        self.history.clear();
    }

    /// Resets to `template`'s defaults and forgets the remote record.
    pub fn reset_to_defaults(&mut self, template: TemplateId) {
        self.config = Configuration::defaults_for(template);
        self.baseline = None;
        self.slug = None;
        self.published = false;
        self.history.clear();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
