//! Template identifiers.
//!
//! The set of templates is closed: a configuration always names one of the
//! variants below, so a schema lookup can never miss.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when parsing a template name that is not part of the catalog.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown template: {0}")]
pub struct UnknownTemplate(pub String);

/// Identifies one of the built-in site/card templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    /// Real-estate agent card with personal and broker logos.
    #[default]
    Realtor,
    /// Creative portfolio page.
    Creative,
}

impl TemplateId {
    /// Every template in catalog order.
    pub const ALL: [TemplateId; 2] = [TemplateId::Realtor, TemplateId::Creative];

    /// Returns the wire name (`"realtor"`, `"creative"`).
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Realtor => "realtor",
            TemplateId::Creative => "creative",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_known_names_case_insensitively() {
        assert_eq!("realtor".parse::<TemplateId>(), Ok(TemplateId::Realtor));
        assert_eq!(" Creative ".parse::<TemplateId>(), Ok(TemplateId::Creative));
    }

    #[test]
    fn test_from_str_rejects_unknown_name() {
        assert_eq!(
            "brutalist".parse::<TemplateId>(),
            Err(UnknownTemplate("brutalist".to_string()))
        );
    }

    #[test]
    fn test_serializes_as_lowercase_string() {
        let json = serde_json::to_string(&TemplateId::Creative).unwrap();
        assert_eq!(json, "\"creative\"");
    }

    #[test]
    fn test_default_is_realtor() {
        assert_eq!(TemplateId::default(), TemplateId::Realtor);
    }
}
