//! Schema registry: static per-template field catalogs.
//!
//! A [`Schema`] describes which color slots, assets, and content fields a
//! template exposes in the editor, together with their labels and defaults.
//! Schemas are immutable catalog data; the editing session only reads them.
//!
//! # Three-level fallback
//!
//! When the editor displays a field it resolves the value in this order:
//!
//! 1. the value stored in the configuration,
//! 2. the default declared by the active schema,
//! 3. empty / absent.
//!
//! The schema half of that rule lives here ([`Schema::text_default`],
//! [`Schema::image_default`], [`Schema::color_default`]); the session combines
//! it with the stored value.

use super::catalog;
use super::configuration::ColorKey;
use super::template::TemplateId;

/// Kind of a top-level asset slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// A free-form image stored in `content.images`.
    Image,
    /// A logo stored in one of the `content.logos` slots.
    Logo,
}

/// Kind of an editable content field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text stored in `content.text`.
    Text,
    /// Multi-line text stored in `content.text`.
    Textarea,
    /// Image reference stored in `content.images`.
    Image,
}

/// One of the five color slots and its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorDescriptor {
    pub key: ColorKey,
    pub label: &'static str,
    pub default_value: &'static str,
}

/// A top-level asset (logo or background image).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: AssetKind,
    pub default_value: Option<&'static str>,
}

/// One editable field inside a content section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub default_value: &'static str,
}

/// A titled group of fields, rendered as one panel in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub fields: &'static [FieldDescriptor],
}

/// The full field catalog of one template.
#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    pub template: TemplateId,
    pub colors: &'static [ColorDescriptor],
    pub assets: &'static [AssetDescriptor],
    pub sections: &'static [Section],
}

/// Returns the schema for `template`.
///
/// Total and pure: every [`TemplateId`] has a catalog entry.
pub fn schema_for(template: TemplateId) -> &'static Schema {
    match template {
        TemplateId::Realtor => &catalog::REALTOR,
        TemplateId::Creative => &catalog::CREATIVE,
    }
}

impl Schema {
    /// Iterates over every content field across all sections, in display order.
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldDescriptor> {
        let sections: &'static [Section] = self.sections;
        sections.iter().flat_map(|s| s.fields.iter())
    }

    /// Looks up a content field by key.
    pub fn field(&self, key: &str) -> Option<&'static FieldDescriptor> {
        self.fields().find(|f| f.key == key)
    }

    /// Looks up an asset slot by key.
    pub fn asset(&self, key: &str) -> Option<&'static AssetDescriptor> {
        self.assets.iter().find(|a| a.key == key)
    }

    /// Returns `true` when the schema exposes a content field with `key`.
    pub fn exposes(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    /// Declared default for a color slot.
    pub fn color_default(&self, key: ColorKey) -> Option<&'static str> {
        self.colors
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.default_value)
    }

    /// Declared default for a text or textarea field.
    pub fn text_default(&self, key: &str) -> Option<&'static str> {
        self.field(key)
            .filter(|f| matches!(f.kind, FieldKind::Text | FieldKind::Textarea))
            .map(|f| f.default_value)
    }

    /// Declared default for an image field or image asset.
    ///
    /// Empty defaults count as "no default" so the caller falls through to
    /// the absent level.
    pub fn image_default(&self, key: &str) -> Option<&'static str> {
        let from_field = self
            .field(key)
            .filter(|f| f.kind == FieldKind::Image)
            .map(|f| f.default_value);
        let from_asset = || {
            self.asset(key)
                .filter(|a| a.kind == AssetKind::Image)
                .and_then(|a| a.default_value)
        };
        from_field.or_else(from_asset).filter(|v| !v.is_empty())
    }

    /// Keys of the logo slots this template shows.
    pub fn logo_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.assets
            .iter()
            .filter(|a| a.kind == AssetKind::Logo)
            .map(|a| a.key)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_for_returns_matching_template() {
        for template in TemplateId::ALL {
            assert_eq!(schema_for(template).template, template);
        }
    }

    #[test]
    fn test_every_schema_declares_all_five_color_slots() {
        for template in TemplateId::ALL {
            let schema = schema_for(template);
            for key in ColorKey::ALL {
                assert!(
                    schema.color_default(key).is_some(),
                    "{template} is missing a default for {key:?}"
                );
            }
        }
    }

    #[test]
    fn test_realtor_primary_default_is_navy() {
        let schema = schema_for(TemplateId::Realtor);
        assert_eq!(schema.color_default(ColorKey::Primary), Some("#1A2D49"));
    }

    #[test]
    fn test_field_keys_are_unique_within_a_schema() {
        for template in TemplateId::ALL {
            let keys: Vec<_> = schema_for(template).fields().map(|f| f.key).collect();
            let mut deduped = keys.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(keys.len(), deduped.len(), "{template} has duplicate field keys");
        }
    }

    #[test]
    fn test_text_default_ignores_image_fields() {
        let schema = schema_for(TemplateId::Realtor);
        assert!(schema.text_default("agent.photo").is_none());
        assert!(schema.text_default("hero.title").is_some());
    }

    #[test]
    fn test_image_default_treats_empty_default_as_absent() {
        let schema = schema_for(TemplateId::Realtor);
        assert_eq!(schema.image_default("agent.photo"), None);
    }

    #[test]
    fn test_unknown_key_has_no_default() {
        let schema = schema_for(TemplateId::Creative);
        assert!(schema.field("no.such.field").is_none());
        assert!(schema.text_default("no.such.field").is_none());
    }

    #[test]
    fn test_realtor_exposes_both_logo_slots_and_creative_only_personal() {
        let realtor: Vec<_> = schema_for(TemplateId::Realtor).logo_keys().collect();
        let creative: Vec<_> = schema_for(TemplateId::Creative).logo_keys().collect();
        assert_eq!(realtor, vec!["personal", "broker"]);
        assert_eq!(creative, vec!["personal"]);
    }

    #[test]
    fn test_portfolio_fields_are_creative_only() {
        assert!(schema_for(TemplateId::Creative).exposes("portfolio.headline"));
        assert!(!schema_for(TemplateId::Realtor).exposes("portfolio.headline"));
    }
}
