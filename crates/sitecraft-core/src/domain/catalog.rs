//! Built-in template catalogs.
//!
//! These tables are the read-only input of the schema registry.  Field keys
//! use a dotted `section.field` convention; the configuration's content maps
//! are keyed by exactly these strings.

use super::configuration::ColorKey;
use super::schema::{
    AssetDescriptor, AssetKind, ColorDescriptor, FieldDescriptor, FieldKind, Schema, Section,
};
use super::template::TemplateId;

// ── Realtor ───────────────────────────────────────────────────────────────────

pub(crate) static REALTOR: Schema = Schema {
    template: TemplateId::Realtor,
    colors: &[
        ColorDescriptor {
            key: ColorKey::Primary,
            label: "Primary",
            default_value: "#1A2D49",
        },
        ColorDescriptor {
            key: ColorKey::Secondary,
            label: "Secondary",
            default_value: "#C9A227",
        },
        ColorDescriptor {
            key: ColorKey::Text,
            label: "Text",
            default_value: "#1F2937",
        },
        ColorDescriptor {
            key: ColorKey::Background,
            label: "Background",
            default_value: "#FFFFFF",
        },
        ColorDescriptor {
            key: ColorKey::Accent,
            label: "Accent",
            default_value: "#E5E7EB",
        },
    ],
    assets: &[
        AssetDescriptor {
            key: "personal",
            label: "Personal logo",
            kind: AssetKind::Logo,
            default_value: None,
        },
        AssetDescriptor {
            key: "broker",
            label: "Broker logo",
            kind: AssetKind::Logo,
            default_value: None,
        },
        AssetDescriptor {
            key: "hero.background",
            label: "Hero background",
            kind: AssetKind::Image,
            default_value: None,
        },
    ],
    sections: &[
        Section {
            title: "Hero",
            fields: &[
                FieldDescriptor {
                    key: "hero.title",
                    label: "Headline",
                    kind: FieldKind::Text,
                    default_value: "Find Your Dream Home",
                },
                FieldDescriptor {
                    key: "hero.subtitle",
                    label: "Subheadline",
                    kind: FieldKind::Text,
                    default_value: "Trusted local real estate expertise",
                },
                FieldDescriptor {
                    key: "hero.image",
                    label: "Hero image",
                    kind: FieldKind::Image,
                    default_value: "",
                },
            ],
        },
        Section {
            title: "Agent",
            fields: &[
                FieldDescriptor {
                    key: "agent.name",
                    label: "Full name",
                    kind: FieldKind::Text,
                    default_value: "Your Name",
                },
                FieldDescriptor {
                    key: "agent.title",
                    label: "Title",
                    kind: FieldKind::Text,
                    default_value: "Licensed Realtor",
                },
                FieldDescriptor {
                    key: "agent.phone",
                    label: "Phone",
                    kind: FieldKind::Text,
                    default_value: "",
                },
                FieldDescriptor {
                    key: "agent.email",
                    label: "Email",
                    kind: FieldKind::Text,
                    default_value: "",
                },
                FieldDescriptor {
                    key: "agent.bio",
                    label: "Bio",
                    kind: FieldKind::Textarea,
                    default_value: "Helping families buy and sell homes.",
                },
                FieldDescriptor {
                    key: "agent.photo",
                    label: "Headshot",
                    kind: FieldKind::Image,
                    default_value: "",
                },
            ],
        },
        Section {
            title: "Brokerage",
            fields: &[
                FieldDescriptor {
                    key: "broker.name",
                    label: "Brokerage",
                    kind: FieldKind::Text,
                    default_value: "",
                },
                FieldDescriptor {
                    key: "broker.address",
                    label: "Office address",
                    kind: FieldKind::Textarea,
                    default_value: "",
                },
                FieldDescriptor {
                    key: "broker.license",
                    label: "License number",
                    kind: FieldKind::Text,
                    default_value: "",
                },
            ],
        },
    ],
};

// ── Creative ──────────────────────────────────────────────────────────────────

pub(crate) static CREATIVE: Schema = Schema {
    template: TemplateId::Creative,
    colors: &[
        ColorDescriptor {
            key: ColorKey::Primary,
            label: "Primary",
            default_value: "#111111",
        },
        ColorDescriptor {
            key: ColorKey::Secondary,
            label: "Secondary",
            default_value: "#FF5A5F",
        },
        ColorDescriptor {
            key: ColorKey::Text,
            label: "Text",
            default_value: "#222222",
        },
        ColorDescriptor {
            key: ColorKey::Background,
            label: "Background",
            default_value: "#FAFAFA",
        },
        ColorDescriptor {
            key: ColorKey::Accent,
            label: "Accent",
            default_value: "#00A699",
        },
    ],
    assets: &[
        AssetDescriptor {
            key: "personal",
            label: "Logo",
            kind: AssetKind::Logo,
            default_value: None,
        },
    ],
    sections: &[
        Section {
            title: "Hero",
            fields: &[
                FieldDescriptor {
                    key: "hero.title",
                    label: "Headline",
                    kind: FieldKind::Text,
                    default_value: "Hi, I make things",
                },
                FieldDescriptor {
                    key: "hero.tagline",
                    label: "Tagline",
                    kind: FieldKind::Text,
                    default_value: "Designer & illustrator",
                },
                FieldDescriptor {
                    key: "hero.portrait",
                    label: "Portrait",
                    kind: FieldKind::Image,
                    default_value: "",
                },
            ],
        },
        Section {
            title: "Portfolio",
            fields: &[
                FieldDescriptor {
                    key: "portfolio.headline",
                    label: "Section title",
                    kind: FieldKind::Text,
                    default_value: "Selected Work",
                },
                FieldDescriptor {
                    key: "portfolio.description",
                    label: "Description",
                    kind: FieldKind::Textarea,
                    default_value: "",
                },
                FieldDescriptor {
                    key: "portfolio.cover",
                    label: "Cover image",
                    kind: FieldKind::Image,
                    default_value: "",
                },
            ],
        },
        Section {
            title: "Contact",
            fields: &[
                FieldDescriptor {
                    key: "contact.email",
                    label: "Email",
                    kind: FieldKind::Text,
                    default_value: "",
                },
                FieldDescriptor {
                    key: "contact.cta",
                    label: "Call to action",
                    kind: FieldKind::Text,
                    default_value: "Let's work together",
                },
            ],
        },
    ],
};
