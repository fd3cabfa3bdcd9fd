// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Card block records and their form-level validation.
//!
//! Field set, defaults, and choice values mirror what the CMS stores, so an
//! edited card drops back into a site export without translation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use super::section::SectionRecord;

/// Arrangement of icon and text on a rendered card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconLayout {
    #[serde(rename = "side-by-side")]
    SideBySide,
    #[default]
    #[serde(rename = "top-down")]
    TopDown,
    #[serde(rename = "top-down-center")]
    TopDownCenter,
}

impl IconLayout {
    pub const ALL: [Self; 3] = [Self::SideBySide, Self::TopDown, Self::TopDownCenter];

    pub fn label(&self) -> &'static str {
        match self {
            Self::SideBySide => "Side by side",
            Self::TopDown => "Top down",
            Self::TopDownCenter => "Top down (centered)",
        }
    }
}

/// Where a card's call-to-action link opens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    #[default]
    #[serde(rename = "_self")]
    SameTab,
    #[serde(rename = "_blank")]
    NewTab,
}

impl LinkTarget {
    pub const ALL: [Self; 2] = [Self::SameTab, Self::NewTab];

    pub fn label(&self) -> &'static str {
        match self {
            Self::SameTab => "Same tab",
            Self::NewTab => "New tab",
        }
    }
}

fn default_icon_size() -> u32 {
    32
}

fn default_accent() -> String {
    "#3b82f6".to_string()
}

fn default_white() -> String {
    "#ffffff".to_string()
}

fn default_black() -> String {
    "#000000".to_string()
}

fn default_true() -> bool {
    true
}

/// One card block of a site export. String-typed paths and colors keep the
/// stored representation; widgets convert at the edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub section: SectionRecord,
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default = "default_icon_size")]
    pub icon_size: u32,
    #[serde(default = "default_accent")]
    pub icon_color: String,
    #[serde(default)]
    pub icon_layout: IconLayout,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub image_alt: String,
    #[serde(default)]
    pub video_file: String,
    #[serde(default)]
    pub video_thumbnail: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub cta_label: String,
    #[serde(default)]
    pub cta_url: String,
    #[serde(default = "default_accent")]
    pub button_color: String,
    #[serde(default = "default_white")]
    pub button_text_color: String,
    #[serde(default)]
    pub button_target: LinkTarget,
    #[serde(default = "default_white")]
    pub card_bg_color: String,
    #[serde(default = "default_black")]
    pub card_text_color: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub click_count: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            section: SectionRecord::default(),
            title: String::new(),
            text: String::new(),
            icon: String::new(),
            icon_size: default_icon_size(),
            icon_color: default_accent(),
            icon_layout: IconLayout::default(),
            image: String::new(),
            image_alt: String::new(),
            video_file: String::new(),
            video_thumbnail: String::new(),
            video_url: String::new(),
            cta_label: String::new(),
            cta_url: String::new(),
            button_color: default_accent(),
            button_text_color: default_white(),
            button_target: LinkTarget::default(),
            card_bg_color: default_white(),
            card_text_color: default_black(),
            is_active: true,
            order: 0,
            click_count: 0,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Validate a card before export and return a reason code for the first
/// problem found, or `None` when the card is exportable.
///
/// - `"title_required"`: the trimmed title is empty.
/// - `"invalid_cta_url"` / `"invalid_video_url"`: the non-empty value is not
///   an `http`/`https` URL with a host.
pub fn validate_card(card: &Card) -> Option<&'static str> {
    if card.title.trim().is_empty() {
        return Some("title_required");
    }

    let cta = card.cta_url.trim();
    if !cta.is_empty() && !is_http_url(cta) {
        return Some("invalid_cta_url");
    }

    let video = card.video_url.trim();
    if !video.is_empty() && !is_http_url(video) {
        return Some("invalid_video_url");
    }

    None
}

fn is_http_url(value: &str) -> bool {
    Url::parse(value)
        .ok()
        .filter(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::{Card, IconLayout, LinkTarget, validate_card};

    // A fresh card must carry the CMS defaults, not zero values.
    #[test]
    fn default_card_matches_cms_defaults() {
        let card = Card::default();
        assert_eq!(card.icon_size, 32);
        assert_eq!(card.icon_color, "#3b82f6");
        assert_eq!(card.icon_layout, IconLayout::TopDown);
        assert_eq!(card.button_color, "#3b82f6");
        assert_eq!(card.button_text_color, "#ffffff");
        assert_eq!(card.button_target, LinkTarget::SameTab);
        assert_eq!(card.card_bg_color, "#ffffff");
        assert_eq!(card.card_text_color, "#000000");
        assert!(card.is_active);
    }

    // Sparse JSON from older exports fills in the same defaults.
    #[test]
    fn deserialization_applies_defaults_to_sparse_records() {
        let card: Card =
            serde_json::from_str(r#"{"section":{"id":1},"title":"Basic plan"}"#).unwrap();
        assert_eq!(card.icon_size, 32);
        assert_eq!(card.card_bg_color, "#ffffff");
        assert_eq!(card.button_target, LinkTarget::SameTab);
        assert!(card.is_active);
        assert_eq!(card.click_count, 0);
        assert_eq!(card.created_at, None);
    }

    // Choice values serialize in the CMS tag form.
    #[test]
    fn choice_fields_serialize_as_cms_tags() {
        let json = serde_json::to_string(&IconLayout::SideBySide).unwrap();
        assert_eq!(json, r#""side-by-side""#);
        let json = serde_json::to_string(&LinkTarget::NewTab).unwrap();
        assert_eq!(json, r#""_blank""#);
    }

    // Title is the only required text field.
    #[test]
    fn validate_card_requires_a_title() {
        let mut card = Card::default();
        assert_eq!(validate_card(&card), Some("title_required"));
        card.title = "Jane Doe".into();
        assert_eq!(validate_card(&card), None);
    }

    // Link fields accept only http(s) URLs when filled in.
    #[test]
    fn validate_card_checks_link_fields() {
        let mut card = Card {
            title: "Pro plan".into(),
            ..Card::default()
        };

        card.cta_url = "not a url".into();
        assert_eq!(validate_card(&card), Some("invalid_cta_url"));
        card.cta_url = "https://example.com/signup".into();
        assert_eq!(validate_card(&card), None);

        card.video_url = "ftp://example.com/clip.mp4".into();
        assert_eq!(validate_card(&card), Some("invalid_video_url"));
        card.video_url = "https://video.example.com/clip".into();
        assert_eq!(validate_card(&card), None);
    }
}
