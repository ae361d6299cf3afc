//! Newsletter content document.
//!
//! The document is fetched once per page view and never mutated. Optional
//! sections are `Option`s; list-valued sections default to empty, and an
//! explicit `null` is treated the same as an absent field.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::tier::{SignalRef, Tier};

/// Full page content loaded from the newsletter data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    pub meta: Meta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoreboard: Option<Scoreboard>,
    #[serde(default, deserialize_with = "nullable")]
    pub signals: Signals,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotlight: Option<Spotlight>,
    #[serde(default, deserialize_with = "nullable")]
    pub playbooks: Vec<Playbook>,
    #[serde(default, deserialize_with = "nullable")]
    pub reflection: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Actions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_hours: Option<OfficeHours>,
}

/// Hero content shown at the top of every page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub hero_headline: String,
    pub hero_body: Vec<String>,
}

/// Theme adoption scoreboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    #[serde(default, deserialize_with = "nullable")]
    pub themes: Vec<Theme>,
    #[serde(default)]
    pub commentary: Option<String>,
}

/// One scoreboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(deserialize_with = "scalar_text")]
    pub name: String,
    #[serde(deserialize_with = "scalar_text")]
    pub watchlist: String,
    #[serde(deserialize_with = "scalar_text")]
    pub pilot: String,
    #[serde(deserialize_with = "scalar_text")]
    pub production: String,
}

impl Theme {
    /// Column values in table order: name, watchlist, pilot, production.
    pub fn columns(&self) -> [&str; 4] {
        [&self.name, &self.watchlist, &self.pilot, &self.production]
    }
}

/// Signal items grouped by tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signals {
    #[serde(default, deserialize_with = "nullable")]
    pub primary: Vec<SignalItem>,
    #[serde(default, deserialize_with = "nullable")]
    pub secondary: Vec<SignalItem>,
    #[serde(default, deserialize_with = "nullable")]
    pub tertiary: Vec<SignalItem>,
}

impl Signals {
    /// Items for a tier, in document order.
    pub fn tier(&self, tier: Tier) -> &[SignalItem] {
        match tier {
            Tier::Primary => &self.primary,
            Tier::Secondary => &self.secondary,
            Tier::Tertiary => &self.tertiary,
        }
    }

    /// Total number of items across all tiers.
    pub fn len(&self) -> usize {
        self.primary.len() + self.secondary.len() + self.tertiary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One news/insight entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalItem {
    pub title: String,
    pub summary: String,
    pub automation_readiness: AutomationReadiness,
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub body_paragraphs: Vec<String>,
    pub predictive_conclusion: String,
    #[serde(default, deserialize_with = "nullable")]
    pub citations: Vec<Option<Citation>>,
}

impl SignalItem {
    /// "Readiness: <readiness> | TTV: <ttv>"
    pub fn readiness_line(&self) -> String {
        format!(
            "Readiness: {} | TTV: {}",
            self.automation_readiness.readiness, self.automation_readiness.time_to_value
        )
    }
}

/// Readiness metadata for a signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationReadiness {
    #[serde(deserialize_with = "scalar_text")]
    pub readiness: String,
    #[serde(deserialize_with = "scalar_text")]
    pub time_to_value: String,
}

/// A source link attached to a signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub url: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl Citation {
    /// Display label, falling back to `Source <position>` (1-based) when the
    /// label is missing or empty.
    pub fn display_label(&self, position: usize) -> String {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => format!("Source {}", position),
        }
    }
}

/// Operator spotlight story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spotlight {
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub story_paragraphs: Vec<String>,
}

/// Automation playbook entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playbook {
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub stack: Vec<String>,
    pub trigger: String,
    pub action: String,
    pub guardrails: String,
    pub kpi: String,
}

/// Closing action items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actions {
    pub operator_action: String,
    pub engagement_action: String,
}

/// Office hours call to action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficeHours {
    pub headline: String,
    #[serde(default, deserialize_with = "nullable")]
    pub body_paragraphs: Vec<String>,
    #[serde(default)]
    pub mailto: Option<String>,
    #[serde(default)]
    pub subject_line: Option<String>,
}

impl OfficeHours {
    /// Contact address, or `fallback` when the document does not override it.
    pub fn recipient<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.mailto.as_deref() {
            Some(addr) if !addr.is_empty() => addr,
            _ => fallback,
        }
    }
}

impl ContentDocument {
    /// Parse a document from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Resolve a card's item reference.
    pub fn signal(&self, signal: &SignalRef) -> Option<&SignalItem> {
        self.signals.tier(signal.tier).get(signal.index)
    }

    /// Reject documents whose required text fields are present but blank.
    ///
    /// Missing required fields are already rejected while parsing.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("meta.hero_headline", &self.meta.hero_headline)?;

        for tier in Tier::ALL {
            for (index, item) in self.signals.tier(tier).iter().enumerate() {
                let at = SignalRef::new(tier, index);
                require(&format!("{}.title", at), &item.title)?;
                for (pos, cite) in item.citations.iter().enumerate() {
                    if let Some(cite) = cite {
                        require(&format!("{}.citations[{}].url", at, pos), &cite.url)?;
                    }
                }
            }
        }

        if let Some(spotlight) = &self.spotlight {
            require("spotlight.title", &spotlight.title)?;
        }
        for (index, playbook) in self.playbooks.iter().enumerate() {
            require(&format!("playbooks[{}].name", index), &playbook.name)?;
        }
        if let Some(office_hours) = &self.office_hours {
            require("office_hours.headline", &office_hours.headline)?;
        }

        Ok(())
    }
}

fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField(field.to_string()));
    }
    Ok(())
}

/// Deserialize `null` as the type's default.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a string, number or boolean as display text.
fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string, number or boolean, found {}",
            other
        ))),
    }
}
