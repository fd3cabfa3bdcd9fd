// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Section selector with a session-scoped type cache.
//!
//! The selector is populated from the export's section index. Resolving the
//! selected section's type checks the cache first, then the option's own
//! annotation (writing the answer back), and finally falls back to the
//! default layout. The card's embedded section reference is appended as an
//! extra option when the index does not list it, annotated but uncached.

use std::collections::HashMap;

use eframe::egui;

use crate::models::section::{SectionOption, SectionRecord, SectionType};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionSelectModel {
    options: Vec<SectionOption>,
    cache: HashMap<i64, SectionType>,
    selected: Option<i64>,
}

impl SectionSelectModel {
    pub fn options(&self) -> &[SectionOption] {
        &self.options
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn cached(&self, id: i64) -> Option<SectionType> {
        self.cache.get(&id).copied()
    }
}

/// Messages emitted by the selector view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionSelectMsg {
    Selected(Option<i64>),
}

/// Raised whenever the selection changes, carrying the denormalized record
/// the card stores and the resolved layout type.
#[derive(Clone, Debug, PartialEq)]
pub enum SectionSelectEvent {
    SectionChanged {
        record: SectionRecord,
        section_type: SectionType,
    },
}

/// Replace options and cache from a freshly loaded section index. Records
/// with a non-blank type tag seed the cache; blank ones stay unresolved.
pub fn load_index(model: &mut SectionSelectModel, records: &[SectionRecord]) {
    model.options = records.iter().map(SectionOption::from_record).collect();
    model.cache = records
        .iter()
        .filter(|record| !record.section_type.trim().is_empty())
        .map(|record| (record.id, SectionType::from_tag(&record.section_type)))
        .collect();
}

/// Make sure the card's own section reference is selectable even when the
/// index omits it. The appended option keeps its annotation but is not
/// cached, so resolution still goes through the fallback path once.
pub fn ensure_card_option(model: &mut SectionSelectModel, record: &SectionRecord) {
    if record.id == 0 {
        return;
    }
    if model.options.iter().any(|option| option.id == record.id) {
        return;
    }
    model.options.push(SectionOption::from_record(record));
}

pub fn select(model: &mut SectionSelectModel, id: Option<i64>) {
    model.selected = id;
}

/// Resolve the selected section's layout type.
///
/// Precedence: no selection is the default layout; a cache hit wins; an
/// annotated option answers and is written back to the cache; anything else
/// is the default layout, deliberately left uncached.
pub fn resolve(model: &mut SectionSelectModel) -> SectionType {
    let Some(id) = model.selected else {
        return SectionType::Default;
    };
    if let Some(&cached) = model.cache.get(&id) {
        return cached;
    }

    let annotated = model
        .options
        .iter()
        .find(|option| option.id == id)
        .and_then(|option| option.annotation);
    match annotated {
        Some(section_type) => {
            model.cache.insert(id, section_type);
            section_type
        }
        None => SectionType::Default,
    }
}

/// Apply a message and report the new selection to the kernel.
pub fn update(model: &mut SectionSelectModel, msg: SectionSelectMsg) -> Option<SectionSelectEvent> {
    match msg {
        SectionSelectMsg::Selected(id) => {
            model.selected = id;
            let section_type = resolve(model);
            let record = id
                .and_then(|id| model.options.iter().find(|option| option.id == id))
                .map(|option| SectionRecord {
                    id: option.id,
                    name: option.name.clone(),
                    // The raw tag, not the parsed annotation: tags outside
                    // the rule set must round-trip through the card intact.
                    section_type: option.tag.clone(),
                })
                .unwrap_or_default();
            Some(SectionSelectEvent::SectionChanged {
                record,
                section_type,
            })
        }
    }
}

/// Render the selector row. Always visible regardless of the active layout.
pub fn view(ui: &mut egui::Ui, model: &SectionSelectModel) -> Vec<SectionSelectMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        ui.label("Section:");

        let selected_text = model
            .selected
            .and_then(|id| model.options.iter().find(|option| option.id == id))
            .map(|option| option.name.clone())
            .unwrap_or_else(|| "(no section)".to_string());

        egui::ComboBox::from_id_salt("card_section_select")
            .width(240.0)
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(model.selected.is_none(), "(no section)")
                    .clicked()
                {
                    msgs.push(SectionSelectMsg::Selected(None));
                }
                for option in &model.options {
                    if ui
                        .selectable_label(model.selected == Some(option.id), &option.name)
                        .clicked()
                    {
                        msgs.push(SectionSelectMsg::Selected(Some(option.id)));
                    }
                }
            });
    });

    msgs
}

#[cfg(test)]
mod tests {
    use super::{
        SectionSelectModel, SectionSelectMsg, ensure_card_option, load_index, resolve, select,
        update,
    };
    use crate::models::section::{SectionRecord, SectionType};

    fn record(id: i64, name: &str, tag: &str) -> SectionRecord {
        SectionRecord {
            id,
            name: name.into(),
            section_type: tag.into(),
        }
    }

    // Loading the index fills the options and seeds the cache from tagged
    // records only.
    #[test]
    fn load_index_seeds_cache_from_tagged_records() {
        let mut model = SectionSelectModel::default();
        load_index(
            &mut model,
            &[record(1, "Our Team", "team"), record(2, "News", "")],
        );

        assert_eq!(model.options().len(), 2);
        assert_eq!(model.cached(1), Some(SectionType::Team));
        assert_eq!(model.cached(2), None);
    }

    // With nothing selected, resolution is the default layout.
    #[test]
    fn resolve_without_selection_is_default() {
        let mut model = SectionSelectModel::default();
        assert_eq!(resolve(&mut model), SectionType::Default);
    }

    // A cache hit answers directly.
    #[test]
    fn resolve_prefers_the_cache() {
        let mut model = SectionSelectModel::default();
        load_index(&mut model, &[record(3, "Plans", "pricing")]);
        select(&mut model, Some(3));
        assert_eq!(resolve(&mut model), SectionType::Pricing);
    }

    // An uncached but annotated option resolves through its annotation, and
    // the answer is written back for the rest of the session.
    #[test]
    fn resolve_falls_back_to_annotation_and_writes_back() {
        let mut model = SectionSelectModel::default();
        load_index(&mut model, &[record(1, "Our Team", "team")]);
        ensure_card_option(&mut model, &record(9, "Questions", "faq"));
        assert_eq!(model.cached(9), None);

        select(&mut model, Some(9));
        assert_eq!(resolve(&mut model), SectionType::Faq);
        assert_eq!(model.cached(9), Some(SectionType::Faq));
    }

    // An unannotated option resolves to the default layout without caching,
    // so a later index load can still supply the real type.
    #[test]
    fn resolve_leaves_unannotated_options_uncached() {
        let mut model = SectionSelectModel::default();
        load_index(&mut model, &[record(4, "News", "")]);
        select(&mut model, Some(4));

        assert_eq!(resolve(&mut model), SectionType::Default);
        assert_eq!(model.cached(4), None);
    }

    // Ids the option list does not know resolve to the default layout.
    #[test]
    fn resolve_handles_unknown_ids() {
        let mut model = SectionSelectModel::default();
        load_index(&mut model, &[record(1, "Our Team", "team")]);
        select(&mut model, Some(77));
        assert_eq!(resolve(&mut model), SectionType::Default);
    }

    // The card's embedded section joins the options once; a duplicate id is
    // not appended again.
    #[test]
    fn ensure_card_option_appends_missing_sections_once() {
        let mut model = SectionSelectModel::default();
        load_index(&mut model, &[record(1, "Our Team", "team")]);

        ensure_card_option(&mut model, &record(6, "Archive", "hero"));
        ensure_card_option(&mut model, &record(6, "Archive", "hero"));
        ensure_card_option(&mut model, &record(1, "Shadow", "pricing"));

        assert_eq!(model.options().len(), 2);
        assert_eq!(model.options()[1].name, "Archive");
    }

    // Selection events carry the denormalized record and the resolved type.
    #[test]
    fn update_reports_the_selected_record_and_type() {
        let mut model = SectionSelectModel::default();
        load_index(&mut model, &[record(2, "Our Team", "team")]);

        let event = update(&mut model, SectionSelectMsg::Selected(Some(2)));
        match event {
            Some(super::SectionSelectEvent::SectionChanged {
                record,
                section_type,
            }) => {
                assert_eq!(record.id, 2);
                assert_eq!(record.name, "Our Team");
                assert_eq!(record.section_type, "team");
                assert_eq!(section_type, SectionType::Team);
            }
            other => panic!("expected a section change, got {other:?}"),
        }

        // Clearing the selection reports an empty record and a default layout.
        let event = update(&mut model, SectionSelectMsg::Selected(None));
        match event {
            Some(super::SectionSelectEvent::SectionChanged {
                record,
                section_type,
            }) => {
                assert_eq!(record.id, 0);
                assert_eq!(section_type, SectionType::Default);
            }
            other => panic!("expected a section change, got {other:?}"),
        }
    }

    // A tag outside the rule set resolves to the default layout, but the
    // record written to the card keeps the original tag verbatim so a save
    // does not rewrite "features" (or "hero", "contact", …) as "default".
    #[test]
    fn update_preserves_non_rule_tags_on_the_record() {
        let mut model = SectionSelectModel::default();
        load_index(&mut model, &[record(1, "Why Choose Us", "features")]);

        let event = update(&mut model, SectionSelectMsg::Selected(Some(1)));
        match event {
            Some(super::SectionSelectEvent::SectionChanged {
                record,
                section_type,
            }) => {
                assert_eq!(record.section_type, "features");
                assert_eq!(section_type, SectionType::Default);
            }
            other => panic!("expected a section change, got {other:?}"),
        }
    }
}
