use crate::types::homepage::TeamMember;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutContent {
    pub hero: Option<AboutHero>,
    pub story_intro: Option<StoryIntro>,
    pub story: Option<Story>,
    pub quote: Option<Quote>,
    pub team: Option<AboutTeam>,
    pub gallery: Option<Gallery>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutHero {
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub story_title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoryIntro {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Story {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image2: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Quote {
    pub text: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutTeam {
    pub title: Option<String>,
    pub description: Option<String>,
    pub team_members: Option<Vec<TeamMember>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gallery {
    pub slides: Option<Vec<Slide>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Slide {
    pub image: String,
    pub alt: String,
}

/// Section update where a blank or absent field keeps the stored value.
pub trait KeepExisting: Sized {
    fn or_existing(self, existing: Option<Self>) -> Self;
}

fn pick(new: Option<String>, old: Option<String>) -> Option<String> {
    match new {
        Some(s) if !s.is_empty() => Some(s),
        _ => old,
    }
}

impl KeepExisting for AboutHero {
    fn or_existing(self, existing: Option<Self>) -> Self {
        let old = existing.unwrap_or_default();
        Self {
            subtitle: pick(self.subtitle, old.subtitle),
            description: pick(self.description, old.description),
            image: pick(self.image, old.image),
            story_title: pick(self.story_title, old.story_title),
        }
    }
}

impl KeepExisting for StoryIntro {
    fn or_existing(self, existing: Option<Self>) -> Self {
        let old = existing.unwrap_or_default();
        Self {
            title: pick(self.title, old.title),
            description: pick(self.description, old.description),
        }
    }
}

impl KeepExisting for Story {
    fn or_existing(self, existing: Option<Self>) -> Self {
        let old = existing.unwrap_or_default();
        Self {
            title: pick(self.title, old.title),
            description: pick(self.description, old.description),
            content: pick(self.content, old.content),
            image1: pick(self.image1, old.image1),
            image2: pick(self.image2, old.image2),
        }
    }
}

impl KeepExisting for Quote {
    fn or_existing(self, existing: Option<Self>) -> Self {
        let old = existing.unwrap_or_default();
        Self {
            text: pick(self.text, old.text),
            author: pick(self.author, old.author),
        }
    }
}

impl KeepExisting for AboutTeam {
    fn or_existing(self, existing: Option<Self>) -> Self {
        let old = existing.unwrap_or_default();
        Self {
            title: pick(self.title, old.title),
            description: pick(self.description, old.description),
            team_members: self.team_members.or(old.team_members),
        }
    }
}

impl KeepExisting for Gallery {
    fn or_existing(self, existing: Option<Self>) -> Self {
        let old = existing.unwrap_or_default();
        Self {
            slides: self.slides.or(old.slides).or_else(|| Some(Vec::new())),
        }
    }
}
