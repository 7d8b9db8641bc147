//! Explicit command dispatch for the builder.
//!
//! Every user action, including undo, redo, and save, is a plain
//! [`BuilderCommand`] value.  Whatever owns the input devices (a key binding,
//! a toolbar button, or the console binary reading stdin) turns the user's
//! gesture into a command and hands it to [`BuilderConsole::execute`].
//!
//! # Text syntax
//!
//! ```text
//! color primary #000000        text hero.title Just Listed
//! image hero.image <url>       logo broker [<url>]
//! social facebook <url>        unsocial facebook
//! template creative            undo | redo
//! save [slug]                  load [template] | delete
//! fields | status | help       domain add|verify|remove [confirm]|dns
//! ```

use std::fmt::Write as _;
use std::str::FromStr;

use sitecraft_core::{
    ColorKey, DnsRecordKind, DnsTargets, DomainPhase, LogoSlot, TemplateId, UnknownSlot,
    UnknownTemplate,
};
use thiserror::Error;
use tracing::debug;

use super::connect_domain::{DomainConnectionManager, DomainProvider};
use super::errors::BuilderError;
use super::persist_config::{ConfigurationStore, PersistenceGateway};
use super::session::BuilderSession;

/// Usage summary printed by the `help` command.
pub const HELP: &str = "\
commands:
  color <primary|secondary|text|background|accent> <value>
  text <key> <value...>
  image <key> <url>
  logo <personal|broker> [url]     (no url clears the slot)
  social <platform> <url>
  unsocial <platform>
  template <realtor|creative>
  undo | redo
  save [slug]
  load [template] | delete
  fields | status | help
  domain add <domain> | domain verify | domain remove confirm | domain dns";

/// Domain sub-commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainCommand {
    Add(String),
    Verify,
    Remove { confirmed: bool },
    Dns,
}

/// One user action against the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderCommand {
    Color(ColorKey, String),
    Text(String, String),
    Image(String, String),
    Logo(LogoSlot, Option<String>),
    Social(String, String),
    Unsocial(String),
    Template(TemplateId),
    Undo,
    Redo,
    Save(Option<String>),
    Load(Option<TemplateId>),
    Delete,
    Fields,
    Status,
    Help,
    Domain(DomainCommand),
}

/// Error returned when a command line cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("`{command}` needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error(transparent)]
    Slot(#[from] UnknownSlot),
    #[error(transparent)]
    Template(#[from] UnknownTemplate),
}

/// Splits off the first whitespace-delimited word.
fn next_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(idx) => (&input[..idx], input[idx..].trim()),
        None => (input, ""),
    }
}

fn required<'a>(
    value: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandParseError> {
    if value.is_empty() {
        Err(CommandParseError::MissingArgument { command, argument })
    } else {
        Ok(value)
    }
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl FromStr for BuilderCommand {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (verb, rest) = next_word(line);
        if verb.is_empty() {
            return Err(CommandParseError::Empty);
        }

        let command = match verb.to_ascii_lowercase().as_str() {
            "color" => {
                let (key, value) = next_word(rest);
                let key: ColorKey = required(key, "color", "color key")?.parse()?;
                Self::Color(key, required(value, "color", "value")?.to_string())
            }
            "text" => {
                let (key, value) = next_word(rest);
                // An empty value is legal: it stores "" over the schema default.
                Self::Text(required(key, "text", "field key")?.to_string(), value.to_string())
            }
            "image" => {
                let (key, url) = next_word(rest);
                Self::Image(
                    required(key, "image", "field key")?.to_string(),
                    required(url, "image", "url")?.to_string(),
                )
            }
            "logo" => {
                let (slot, url) = next_word(rest);
                let slot: LogoSlot = required(slot, "logo", "slot")?.parse()?;
                Self::Logo(slot, optional(url))
            }
            "social" => {
                let (platform, url) = next_word(rest);
                Self::Social(
                    required(platform, "social", "platform")?.to_string(),
                    required(url, "social", "url")?.to_string(),
                )
            }
            "unsocial" => Self::Unsocial(required(rest, "unsocial", "platform")?.to_string()),
            "template" => {
                let template: TemplateId = required(rest, "template", "template name")?.parse()?;
                Self::Template(template)
            }
            "undo" => Self::Undo,
            "redo" => Self::Redo,
            "save" => Self::Save(optional(rest)),
            "load" => {
                let template = optional(rest).map(|t| t.parse::<TemplateId>()).transpose()?;
                Self::Load(template)
            }
            "delete" => Self::Delete,
            "fields" => Self::Fields,
            "status" => Self::Status,
            "help" | "?" => Self::Help,
            "domain" => {
                let (sub, arg) = next_word(rest);
                match sub.to_ascii_lowercase().as_str() {
                    "add" => Self::Domain(DomainCommand::Add(
                        required(arg, "domain add", "domain")?.to_string(),
                    )),
                    "verify" => Self::Domain(DomainCommand::Verify),
                    "remove" => Self::Domain(DomainCommand::Remove {
                        confirmed: arg.eq_ignore_ascii_case("confirm"),
                    }),
                    "dns" => Self::Domain(DomainCommand::Dns),
                    "" => {
                        return Err(CommandParseError::MissingArgument {
                            command: "domain",
                            argument: "sub-command",
                        })
                    }
                    other => return Err(CommandParseError::Unknown(format!("domain {other}"))),
                }
            }
            other => return Err(CommandParseError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

// ── Console ───────────────────────────────────────────────────────────────────

/// Owns one editing session and the use cases that act on it.
pub struct BuilderConsole<S, P> {
    session: BuilderSession,
    persistence: PersistenceGateway<S>,
    domains: DomainConnectionManager<P>,
    dns_targets: DnsTargets,
}

impl<S: ConfigurationStore, P: DomainProvider> BuilderConsole<S, P> {
    pub fn new(
        session: BuilderSession,
        persistence: PersistenceGateway<S>,
        domains: DomainConnectionManager<P>,
        dns_targets: DnsTargets,
    ) -> Self {
        Self {
            session,
            persistence,
            domains,
            dns_targets,
        }
    }

    pub fn session(&self) -> &BuilderSession {
        &self.session
    }

    pub fn domains(&self) -> &DomainConnectionManager<P> {
        &self.domains
    }

    /// Loads the owner's stored record (if any) into the session.
    pub async fn open(&mut self, template: Option<TemplateId>) -> Result<String, BuilderError> {
        self.execute(BuilderCommand::Load(template)).await
    }

    /// Executes one command and returns a line of feedback for the user.
    ///
    /// # Errors
    ///
    /// Propagates the [`BuilderError`] of the underlying use case.
    pub async fn execute(&mut self, command: BuilderCommand) -> Result<String, BuilderError> {
        debug!(?command, "executing command");
        let message = match command {
            BuilderCommand::Color(key, value) => {
                self.session.update_color(key, value);
                format!("{key} = {}", self.session.color_value(key))
            }
            BuilderCommand::Text(key, value) => {
                self.session.update_text(key.clone(), value);
                format!("{key} = {:?}", self.session.text_value(&key))
            }
            BuilderCommand::Image(key, url) => {
                self.session.update_image(key.clone(), url);
                format!("{key} updated")
            }
            BuilderCommand::Logo(slot, Some(url)) => {
                self.session.update_logo(slot, Some(url));
                format!("{slot} logo updated")
            }
            BuilderCommand::Logo(slot, None) => {
                self.session.clear_logo(slot);
                format!("{slot} logo cleared")
            }
            BuilderCommand::Social(platform, url) => {
                self.session.update_social_link(&platform, url);
                format!("{platform} link updated")
            }
            BuilderCommand::Unsocial(platform) => {
                self.session.remove_social_link(&platform);
                format!("{platform} link removed")
            }
            BuilderCommand::Template(template) => {
                self.session.update_template(template);
                format!("template = {template}")
            }
            BuilderCommand::Undo => {
                let reply = if self.session.undo() { "undone" } else { "nothing to undo" };
                reply.to_string()
            }
            BuilderCommand::Redo => {
                let reply = if self.session.redo() { "redone" } else { "nothing to redo" };
                reply.to_string()
            }
            BuilderCommand::Save(slug) => {
                self.persistence.save(&mut self.session, slug).await?;
                match self.session.slug() {
                    Some(slug) => format!("saved as {slug}"),
                    None => "saved".to_string(),
                }
            }
            BuilderCommand::Load(template) => {
                let outcome = self.persistence.load(&mut self.session, template).await?;
                self.domains.reset_record(outcome.domain);
                if outcome.found {
                    format!("loaded {} record", self.session.template())
                } else {
                    format!("no stored record; using {} defaults", self.session.template())
                }
            }
            BuilderCommand::Delete => {
                self.persistence.delete(&mut self.session).await?;
                self.domains.reset_record(Default::default());
                format!("deleted; reset to {} defaults", self.session.template())
            }
            BuilderCommand::Fields => self.render_fields(),
            BuilderCommand::Status => self.render_status(),
            BuilderCommand::Help => HELP.to_string(),
            BuilderCommand::Domain(command) => self.execute_domain(command).await?,
        };
        Ok(message)
    }

    async fn execute_domain(&mut self, command: DomainCommand) -> Result<String, BuilderError> {
        let message = match command {
            DomainCommand::Add(domain) => {
                self.domains.add_domain(&self.session, &domain).await?;
                let mut out = "domain added; pending verification".to_string();
                if let Some(line) = self.render_dns() {
                    let _ = write!(out, "\n{line}");
                }
                out
            }
            DomainCommand::Verify => match self.domains.verify().await? {
                DomainPhase::Verified => "domain verified".to_string(),
                _ => "domain not verified yet; check your DNS records".to_string(),
            },
            DomainCommand::Remove { confirmed } => {
                self.domains.remove_domain(&self.session, confirmed).await?;
                "domain removed".to_string()
            }
            DomainCommand::Dns => self
                .render_dns()
                .unwrap_or_else(|| "no custom domain".to_string()),
        };
        Ok(message)
    }

    fn render_dns(&self) -> Option<String> {
        self.domains.dns_instructions(&self.dns_targets).map(|record| {
            let kind = match record.kind {
                DnsRecordKind::A => "A",
                DnsRecordKind::Cname => "CNAME",
            };
            format!("create DNS record: {kind} {} -> {}", record.host, record.value)
        })
    }

    fn render_fields(&self) -> String {
        let mut out = String::new();
        for color in ColorKey::ALL {
            let _ = writeln!(out, "color.{color}: {}", self.session.color_value(color));
        }
        for field in self.session.field_values() {
            let _ = writeln!(
                out,
                "{} ({}): {:?}",
                field.descriptor.key, field.descriptor.label, field.value
            );
        }
        for link in &self.session.config().content.social_links {
            let _ = writeln!(out, "social.{}: {}", link.platform, link.url);
        }
        out.trim_end().to_string()
    }

    fn render_status(&self) -> String {
        let session = &self.session;
        let phase = match self.domains.phase() {
            DomainPhase::NoDomain => "none",
            DomainPhase::PendingVerification => "pending verification",
            DomainPhase::Verified => "verified",
        };
        format!(
            "template={} slug={} published={} unsaved={} undo={} redo={} read_only={} \
             domain={} ({phase})",
            session.template(),
            session.slug().unwrap_or("-"),
            session.is_published(),
            session.has_unsaved_changes(),
            session.can_undo(),
            session.can_redo(),
            session.is_read_only(),
            self.domains.record().custom_domain.as_deref().unwrap_or("-"),
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
