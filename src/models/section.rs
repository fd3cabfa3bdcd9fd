// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Section records from a site export.

use serde::{Deserialize, Serialize};

/// Section categories that drive which card fields are relevant.
///
/// The CMS knows more section templates (hero, stats, testimonials, …) but
/// they all share the default card layout, so their tags normalize to
/// `Default` here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionType {
    Team,
    Pricing,
    Faq,
    #[default]
    Default,
}

impl SectionType {
    /// Parse a section-type tag. Unknown or empty tags degrade to the
    /// default layout rather than failing.
    pub fn from_tag(raw: &str) -> Self {
        match raw.trim() {
            "team" => Self::Team,
            "pricing" => Self::Pricing,
            "faq" => Self::Faq,
            _ => Self::Default,
        }
    }
}

/// One entry of a site export's section index. Also the shape of a card's
/// embedded section reference, which is denormalized and may describe a
/// section the index does not list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub section_type: String,
}

/// A selectable section. The raw tag is kept verbatim for writing back into
/// the card's section reference; the parsed annotation only drives layout
/// resolution, so tags outside the rule set survive a save unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionOption {
    pub id: i64,
    pub name: String,
    pub tag: String,
    pub annotation: Option<SectionType>,
}

impl SectionOption {
    pub fn from_record(record: &SectionRecord) -> Self {
        let tag = record.section_type.trim();
        let name = record.name.trim();
        Self {
            id: record.id,
            name: if name.is_empty() {
                format!("Section {}", record.id)
            } else {
                name.to_string()
            },
            tag: tag.to_string(),
            annotation: (!tag.is_empty()).then(|| SectionType::from_tag(tag)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SectionOption, SectionRecord, SectionType};

    // Known tags map to their variants; anything else is the default layout.
    #[test]
    fn from_tag_maps_known_tags_and_degrades_the_rest() {
        assert_eq!(SectionType::from_tag("team"), SectionType::Team);
        assert_eq!(SectionType::from_tag("pricing"), SectionType::Pricing);
        assert_eq!(SectionType::from_tag(" faq "), SectionType::Faq);
        assert_eq!(SectionType::from_tag("hero"), SectionType::Default);
        assert_eq!(SectionType::from_tag(""), SectionType::Default);
    }

    // A blank tag means "no annotation"; an unknown tag is still an
    // annotation, it just resolves to the default layout.
    #[test]
    fn option_annotation_distinguishes_blank_from_unknown() {
        let blank = SectionRecord {
            id: 7,
            name: "News".into(),
            section_type: String::new(),
        };
        assert_eq!(SectionOption::from_record(&blank).annotation, None);

        let unknown = SectionRecord {
            id: 8,
            name: "Hero".into(),
            section_type: "hero".into(),
        };
        let option = SectionOption::from_record(&unknown);
        assert_eq!(option.annotation, Some(SectionType::Default));
        assert_eq!(option.tag, "hero");
    }

    // Unnamed sections still need usable combo-box text.
    #[test]
    fn option_name_falls_back_to_the_id() {
        let record = SectionRecord {
            id: 42,
            name: "  ".into(),
            section_type: "team".into(),
        };
        assert_eq!(SectionOption::from_record(&record).name, "Section 42");
    }
}
