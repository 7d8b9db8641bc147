//! The editable configuration: the full document for one site/card.
//!
//! A [`Configuration`] is a plain value.  It is cloned wholesale into the undo
//! history and compared structurally by the dirty tracker, so every field
//! derives `Clone`, `PartialEq`, and `Eq`.
//!
//! # Open content maps
//!
//! `content.text` and `content.images` are open string-keyed maps.  The keys
//! come from template schemas, but the configuration never validates them:
//! unknown keys are kept and written back unchanged.  This is what lets a user
//! switch templates without losing the fields of the previous one.
//!
//! `BTreeMap` is used instead of `HashMap` so the JSON written to the remote
//! store has a stable key order.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::schema::{schema_for, Schema};
use super::template::TemplateId;

/// Returned when a color or logo slot name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} slot: {value}")]
pub struct UnknownSlot {
    pub kind: &'static str,
    pub value: String,
}

// ── Colors ────────────────────────────────────────────────────────────────────

/// The five fixed color slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKey {
    Primary,
    Secondary,
    Text,
    Background,
    Accent,
}

impl ColorKey {
    pub const ALL: [ColorKey; 5] = [
        ColorKey::Primary,
        ColorKey::Secondary,
        ColorKey::Text,
        ColorKey::Background,
        ColorKey::Accent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorKey::Primary => "primary",
            ColorKey::Secondary => "secondary",
            ColorKey::Text => "text",
            ColorKey::Background => "background",
            ColorKey::Accent => "accent",
        }
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorKey {
    type Err = UnknownSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSlot { kind: "color", value: s.to_string() })
    }
}

/// Exactly five color values, one per [`ColorKey`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSlots {
    pub primary: String,
    pub secondary: String,
    pub text: String,
    pub background: String,
    pub accent: String,
}

impl ColorSlots {
    /// Builds the slots from a schema's declared defaults.
    ///
    /// A slot the schema does not declare falls back to black.
    pub fn from_schema(schema: &Schema) -> Self {
        let pick = |key| schema.color_default(key).unwrap_or("#000000").to_string();
        Self {
            primary: pick(ColorKey::Primary),
            secondary: pick(ColorKey::Secondary),
            text: pick(ColorKey::Text),
            background: pick(ColorKey::Background),
            accent: pick(ColorKey::Accent),
        }
    }

    pub fn get(&self, key: ColorKey) -> &str {
        match key {
            ColorKey::Primary => &self.primary,
            ColorKey::Secondary => &self.secondary,
            ColorKey::Text => &self.text,
            ColorKey::Background => &self.background,
            ColorKey::Accent => &self.accent,
        }
    }

    pub fn set(&mut self, key: ColorKey, value: impl Into<String>) {
        let slot = match key {
            ColorKey::Primary => &mut self.primary,
            ColorKey::Secondary => &mut self.secondary,
            ColorKey::Text => &mut self.text,
            ColorKey::Background => &mut self.background,
            ColorKey::Accent => &mut self.accent,
        };
        *slot = value.into();
    }
}

// ── Logos ─────────────────────────────────────────────────────────────────────

/// The two logo slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoSlot {
    Personal,
    Broker,
}

impl LogoSlot {
    pub fn as_str(self) -> &'static str {
        match self {
            LogoSlot::Personal => "personal",
            LogoSlot::Broker => "broker",
        }
    }
}

impl fmt::Display for LogoSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogoSlot {
    type Err = UnknownSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "personal" => Ok(LogoSlot::Personal),
            "broker" => Ok(LogoSlot::Broker),
            _ => Err(UnknownSlot { kind: "logo", value: s.to_string() }),
        }
    }
}

/// Optional image references for the personal and broker logos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoSlots {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broker: Option<String>,
}

impl LogoSlots {
    pub fn get(&self, slot: LogoSlot) -> Option<&str> {
        match slot {
            LogoSlot::Personal => self.personal.as_deref(),
            LogoSlot::Broker => self.broker.as_deref(),
        }
    }

    pub fn set(&mut self, slot: LogoSlot, value: Option<String>) {
        match slot {
            LogoSlot::Personal => self.personal = value,
            LogoSlot::Broker => self.broker = value,
        }
    }
}

// ── Content ───────────────────────────────────────────────────────────────────

/// One social profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// Open content maps shared by every template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMaps {
    #[serde(default)]
    pub logos: LogoSlots,
    #[serde(default)]
    pub text: BTreeMap<String, String>,
    #[serde(default)]
    pub images: BTreeMap<String, String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

impl ContentMaps {
    /// Sets the url for `platform`, keeping at most one entry per platform.
    ///
    /// An existing entry is updated in place so the list order is preserved;
    /// a new platform is appended.
    pub fn upsert_social_link(&mut self, platform: &str, url: impl Into<String>) {
        let url = url.into();
        match self.social_links.iter_mut().find(|l| l.platform == platform) {
            Some(link) => link.url = url,
            None => self.social_links.push(SocialLink {
                platform: platform.to_string(),
                url,
            }),
        }
    }

    /// Removes the entry for `platform`.  Returns `true` when one existed.
    pub fn remove_social_link(&mut self, platform: &str) -> bool {
        let before = self.social_links.len();
        self.social_links.retain(|l| l.platform != platform);
        self.social_links.len() != before
    }

    pub fn social_link(&self, platform: &str) -> Option<&SocialLink> {
        self.social_links.iter().find(|l| l.platform == platform)
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

/// The full editable document for one site/card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub template: TemplateId,
    pub colors: ColorSlots,
    #[serde(default)]
    pub content: ContentMaps,
}

impl Configuration {
    /// The built-in default configuration of `template`.
    ///
    /// Colors come from the schema; content maps start empty so every field
    /// resolves to its schema default until the user edits it.
    pub fn defaults_for(template: TemplateId) -> Self {
        Self {
            template,
            colors: ColorSlots::from_schema(schema_for(template)),
            content: ContentMaps::default(),
        }
    }

    /// The schema of the configuration's current template.
    pub fn schema(&self) -> &'static Schema {
        schema_for(self.template)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::defaults_for(TemplateId::default())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_realtor_uses_schema_colors() {
        let cfg = Configuration::defaults_for(TemplateId::Realtor);
        assert_eq!(cfg.colors.primary, "#1A2D49");
        assert_eq!(cfg.template, TemplateId::Realtor);
        assert!(cfg.content.text.is_empty());
        assert!(cfg.content.social_links.is_empty());
    }

    #[test]
    fn test_color_slots_set_then_get_targets_single_slot() {
        let mut colors = ColorSlots::from_schema(schema_for(TemplateId::Creative));
        let before = colors.clone();
        colors.set(ColorKey::Accent, "#123456");
        assert_eq!(colors.get(ColorKey::Accent), "#123456");
        assert_eq!(colors.get(ColorKey::Primary), before.get(ColorKey::Primary));
    }

    #[test]
    fn test_upsert_social_link_replaces_existing_platform_in_place() {
        let mut content = ContentMaps::default();
        content.upsert_social_link("instagram", "https://instagram.com/a");
        content.upsert_social_link("linkedin", "https://linkedin.com/in/a");
        content.upsert_social_link("instagram", "https://instagram.com/b");

        assert_eq!(content.social_links.len(), 2);
        assert_eq!(content.social_links[0].platform, "instagram");
        assert_eq!(content.social_links[0].url, "https://instagram.com/b");
        assert_eq!(content.social_links[1].platform, "linkedin");
    }

    #[test]
    fn test_remove_social_link_reports_whether_entry_existed() {
        let mut content = ContentMaps::default();
        content.upsert_social_link("x", "https://x.com/a");
        assert!(content.remove_social_link("x"));
        assert!(!content.remove_social_link("x"));
        assert!(content.social_link("x").is_none());
    }

    #[test]
    fn test_logo_slots_are_omitted_from_json_when_absent() {
        let cfg = Configuration::defaults_for(TemplateId::Realtor);
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json["content"]["logos"], serde_json::json!({}));
        assert!(json["content"]["socialLinks"].is_array());
    }

    #[test]
    fn test_unknown_content_keys_survive_json_round_trip() {
        let mut cfg = Configuration::defaults_for(TemplateId::Creative);
        cfg.content.text.insert("legacy.field".to_string(), "kept".to_string());

        let json = serde_json::to_string(&cfg).unwrap();
        let restored: Configuration = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.content.text.get("legacy.field").map(String::as_str), Some("kept"));
        assert_eq!(restored, cfg);
    }

    #[test]
    fn test_deserialize_without_content_uses_empty_maps() {
        let json = r##"{
            "template": "realtor",
            "colors": {
                "primary": "#000000", "secondary": "#111111", "text": "#222222",
                "background": "#333333", "accent": "#444444"
            }
        }"##;
        let cfg: Configuration = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.content, ContentMaps::default());
    }

    #[test]
    fn test_slot_names_parse_case_insensitively() {
        assert_eq!("Primary".parse::<ColorKey>(), Ok(ColorKey::Primary));
        assert_eq!("BROKER".parse::<LogoSlot>(), Ok(LogoSlot::Broker));
        assert!("tertiary".parse::<ColorKey>().is_err());
    }
}
