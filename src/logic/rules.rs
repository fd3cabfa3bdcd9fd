// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Field-visibility rules for the card form.
//!
//! The selected section's type decides which of a card's content fields are
//! relevant: a team card has no pricing button, an FAQ card is just a question
//! and an answer. The decision is kept pure here (section type in, visibility
//! plan out) so the form renderer stays a thin consumer and the rules can be
//! tested without any UI.

use crate::models::section::SectionType;

/// Rule-governed content fields of a card. Controls outside this set (the
/// section selector, `is_active`, `order`, analytics) are always shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldId {
    Title,
    Text,
    Icon,
    IconSize,
    IconColor,
    IconLayout,
    Image,
    ImageAlt,
    VideoFile,
    VideoThumbnail,
    VideoUrl,
    CtaLabel,
    CtaUrl,
    ButtonColor,
    ButtonTextColor,
    ButtonTarget,
    CardBgColor,
    CardTextColor,
}

impl FieldId {
    /// The full governed domain. Every rule partitions exactly this set.
    pub const ALL: [FieldId; 18] = [
        FieldId::Title,
        FieldId::Text,
        FieldId::Icon,
        FieldId::IconSize,
        FieldId::IconColor,
        FieldId::IconLayout,
        FieldId::Image,
        FieldId::ImageAlt,
        FieldId::VideoFile,
        FieldId::VideoThumbnail,
        FieldId::VideoUrl,
        FieldId::CtaLabel,
        FieldId::CtaUrl,
        FieldId::ButtonColor,
        FieldId::ButtonTextColor,
        FieldId::ButtonTarget,
        FieldId::CardBgColor,
        FieldId::CardTextColor,
    ];

    /// Label text before any rule override.
    pub fn base_label(&self) -> &'static str {
        match self {
            FieldId::Title => "Title",
            FieldId::Text => "Text",
            FieldId::Icon => "Icon",
            FieldId::IconSize => "Icon size",
            FieldId::IconColor => "Icon color",
            FieldId::IconLayout => "Icon layout",
            FieldId::Image => "Image",
            FieldId::ImageAlt => "Image alt",
            FieldId::VideoFile => "Video file",
            FieldId::VideoThumbnail => "Video thumbnail",
            FieldId::VideoUrl => "Video URL",
            FieldId::CtaLabel => "CTA label",
            FieldId::CtaUrl => "CTA URL",
            FieldId::ButtonColor => "Button color",
            FieldId::ButtonTextColor => "Button text color",
            FieldId::ButtonTarget => "Button target",
            FieldId::CardBgColor => "Card background",
            FieldId::CardTextColor => "Card text color",
        }
    }

    /// Only the title is mandatory in the CMS.
    pub fn required(&self) -> bool {
        matches!(self, FieldId::Title)
    }
}

/// Form groups mirroring the CMS admin fieldsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldGroup {
    CardInformation,
    IconSettings,
    Media,
    ButtonSettings,
    Styling,
    Analytics,
}

impl FieldGroup {
    pub const ALL: [FieldGroup; 6] = [
        FieldGroup::CardInformation,
        FieldGroup::IconSettings,
        FieldGroup::Media,
        FieldGroup::ButtonSettings,
        FieldGroup::Styling,
        FieldGroup::Analytics,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            FieldGroup::CardInformation => "Card Information",
            FieldGroup::IconSettings => "Icon Settings",
            FieldGroup::Media => "Media",
            FieldGroup::ButtonSettings => "Button Settings",
            FieldGroup::Styling => "Styling",
            FieldGroup::Analytics => "Analytics",
        }
    }

    /// Governed fields rendered inside this group. Ungoverned controls that
    /// share the group (`is_active`, `order`) are not listed.
    pub fn fields(&self) -> &'static [FieldId] {
        match self {
            FieldGroup::CardInformation => &[FieldId::Title, FieldId::Text],
            FieldGroup::IconSettings => &[
                FieldId::Icon,
                FieldId::IconSize,
                FieldId::IconColor,
                FieldId::IconLayout,
            ],
            FieldGroup::Media => &[
                FieldId::Image,
                FieldId::ImageAlt,
                FieldId::VideoFile,
                FieldId::VideoThumbnail,
                FieldId::VideoUrl,
            ],
            FieldGroup::ButtonSettings => &[
                FieldId::CtaLabel,
                FieldId::CtaUrl,
                FieldId::ButtonColor,
                FieldId::ButtonTextColor,
                FieldId::ButtonTarget,
            ],
            FieldGroup::Styling => &[FieldId::CardBgColor, FieldId::CardTextColor],
            FieldGroup::Analytics => &[],
        }
    }

    /// The Card Information group anchors the form and stays visible no
    /// matter what the active rule hides.
    pub fn exempt_from_auto_hide(&self) -> bool {
        matches!(self, FieldGroup::CardInformation)
    }
}

/// One section type's show/hide/relabel rule.
struct FieldRule {
    visible: &'static [FieldId],
    hidden: &'static [FieldId],
    labels: &'static [(FieldId, &'static str)],
}

const TEAM_RULE: FieldRule = FieldRule {
    visible: &[
        FieldId::Title,
        FieldId::Image,
        FieldId::ImageAlt,
        FieldId::CtaLabel,
        FieldId::Text,
        FieldId::CtaUrl,
        FieldId::ButtonTarget,
        FieldId::CardBgColor,
        FieldId::CardTextColor,
    ],
    hidden: &[
        FieldId::Icon,
        FieldId::IconSize,
        FieldId::IconColor,
        FieldId::IconLayout,
        FieldId::VideoFile,
        FieldId::VideoThumbnail,
        FieldId::VideoUrl,
        FieldId::ButtonColor,
        FieldId::ButtonTextColor,
    ],
    labels: &[
        (FieldId::Title, "Name"),
        (FieldId::CtaLabel, "Position / Role"),
        (FieldId::Text, "Bio"),
        (FieldId::CtaUrl, "Social Link / Profile URL"),
    ],
};

const PRICING_RULE: FieldRule = FieldRule {
    visible: &[
        FieldId::Title,
        FieldId::CtaLabel,
        FieldId::Text,
        FieldId::CtaUrl,
        FieldId::ButtonColor,
        FieldId::ButtonTextColor,
        FieldId::ButtonTarget,
        FieldId::CardBgColor,
        FieldId::CardTextColor,
    ],
    hidden: &[
        FieldId::Icon,
        FieldId::IconSize,
        FieldId::IconColor,
        FieldId::IconLayout,
        FieldId::Image,
        FieldId::ImageAlt,
        FieldId::VideoFile,
        FieldId::VideoThumbnail,
        FieldId::VideoUrl,
    ],
    labels: &[
        (FieldId::Title, "Plan Name"),
        (FieldId::CtaLabel, "Price / Month"),
        (FieldId::Text, "Features List"),
        (FieldId::CtaUrl, "Buy / Sign Up Link"),
    ],
};

const FAQ_RULE: FieldRule = FieldRule {
    visible: &[FieldId::Title, FieldId::Text],
    hidden: &[
        FieldId::Icon,
        FieldId::IconSize,
        FieldId::IconColor,
        FieldId::IconLayout,
        FieldId::Image,
        FieldId::ImageAlt,
        FieldId::VideoFile,
        FieldId::VideoThumbnail,
        FieldId::VideoUrl,
        FieldId::CtaLabel,
        FieldId::CtaUrl,
        FieldId::ButtonColor,
        FieldId::ButtonTextColor,
        FieldId::ButtonTarget,
        FieldId::CardBgColor,
        FieldId::CardTextColor,
    ],
    labels: &[(FieldId::Title, "Question"), (FieldId::Text, "Answer")],
};

const DEFAULT_RULE: FieldRule = FieldRule {
    visible: &FieldId::ALL,
    hidden: &[],
    labels: &[],
};

fn rule_for(section_type: SectionType) -> &'static FieldRule {
    match section_type {
        SectionType::Team => &TEAM_RULE,
        SectionType::Pricing => &PRICING_RULE,
        SectionType::Faq => &FAQ_RULE,
        SectionType::Default => &DEFAULT_RULE,
    }
}

/// The resolved show/hide/relabel decision for one section type. Cheap to
/// produce, so the form derives a fresh plan every frame; re-resolving any
/// number of times always yields the same partition.
#[derive(Clone, Copy)]
pub struct VisibilityPlan {
    rule: &'static FieldRule,
}

impl VisibilityPlan {
    pub fn is_visible(&self, field: FieldId) -> bool {
        self.rule.visible.contains(&field)
    }

    /// Override text for a field's label, when the active rule renames it.
    pub fn label_override(&self, field: FieldId) -> Option<&'static str> {
        self.rule
            .labels
            .iter()
            .find(|(id, _)| *id == field)
            .map(|(_, text)| *text)
    }

    /// Display label for a field's row: override or base text, a trailing
    /// colon, and the required marker when the field is mandatory. Overrides
    /// replace only the text, never the marker.
    pub fn label_text(&self, field: FieldId) -> String {
        let text = self.label_override(field).unwrap_or_else(|| field.base_label());
        if field.required() {
            format!("{text}: *")
        } else {
            format!("{text}:")
        }
    }

    /// Whether a group container is shown. Groups whose governed rows are all
    /// hidden disappear, except the exempt Card Information group; groups
    /// with no governed rows are never auto-hidden.
    pub fn group_visible(&self, group: FieldGroup) -> bool {
        if group.exempt_from_auto_hide() {
            return true;
        }
        let fields = group.fields();
        fields.is_empty() || fields.iter().any(|field| self.is_visible(*field))
    }
}

/// Resolve the visibility plan for a section type. Total over all types;
/// unknown tags were already normalized to `Default` when the section was
/// parsed, so there is no failure path.
pub fn resolve(section_type: SectionType) -> VisibilityPlan {
    VisibilityPlan {
        rule: rule_for(section_type),
    }
}
