//! Typed view of `homepage.json`.
//!
//! Every field is optional: the stored document is free-form and the
//! templater only touches what is present. The same section structs double
//! as update payloads, which is why absent fields are never serialized.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomepageContent {
    pub hero: Option<Hero>,
    pub logo_section: Option<LogoSection>,
    pub benefits_section: Option<BenefitsSection>,
    pub process_cards: Option<ProcessCards>,
    pub portfolio_section: Option<PortfolioSection>,
    pub team_section: Option<TeamSection>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hero {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline2: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logos: Option<Vec<Logo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Logo {
    pub name: String,
    pub image: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BenefitsSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessCard {
    pub number: String,
    pub title: String,
    pub description: String,
}

/// Process cards as stored. Older documents keep them as an object keyed
/// by index (`{"0": {...}, "1": {...}}`) rather than as a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProcessCards {
    List(Vec<ProcessCard>),
    Indexed(BTreeMap<String, ProcessCard>),
}

impl ProcessCards {
    pub fn cards(&self) -> Vec<&ProcessCard> {
        match self {
            ProcessCards::List(cards) => cards.iter().collect(),
            ProcessCards::Indexed(map) => {
                let mut entries: Vec<(usize, &ProcessCard)> = map
                    .iter()
                    .map(|(k, v)| (k.parse().unwrap_or(usize::MAX), v))
                    .collect();
                entries.sort_by_key(|(i, _)| *i);
                entries.into_iter().map(|(_, v)| v).collect()
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_items: Option<Vec<PortfolioItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioItem {
    pub link: String,
    pub alt: String,
    pub image: String,
    pub category: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_members: Option<Vec<TeamMember>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    pub name: String,
    pub title: String,
    pub image: String,
    pub alt: String,
}

/// Body of `PUT /api/homepage/process-cards`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessCardsInput {
    pub process_cards: Vec<ProcessCard>,
}

/// Body of `PUT /api/homepage/logos`.
#[derive(Debug, Clone, Deserialize)]
pub struct LogosInput {
    pub logos: Vec<Logo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn indexed_process_cards_keep_numeric_order() {
        let cards: ProcessCards = serde_json::from_value(json!({
            "10": {"number": "11"},
            "2": {"number": "03"},
            "0": {"number": "01"}
        }))
        .unwrap();
        let numbers: Vec<&str> = cards.cards().iter().map(|c| c.number.as_str()).collect();
        assert_eq!(numbers, ["01", "03", "11"]);
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let hero = Hero {
            title: Some("New".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(hero).unwrap(), json!({"title": "New"}));
    }
}
