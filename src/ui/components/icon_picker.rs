// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Modal icon picker over the compiled-in glyph registry.
//!
//! One picker instance lives in the app model, so at most one overlay can
//! exist. The catalog (registry entries grouped by first letter) is built
//! lazily on first open and reused for the rest of the session.

use eframe::egui;

use crate::utils::glyphs;
use crate::utils::kebab::to_kebab_case;

/// Card fields whose value is an icon name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconTarget {
    CardIcon,
}

/// One selectable catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconEntry {
    name: &'static str,
    glyph: &'static str,
}

impl IconEntry {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn glyph(&self) -> &'static str {
        self.glyph
    }
}

/// Catalog entries sharing a first letter, shown under one header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconGroup {
    key: char,
    entries: Vec<IconEntry>,
}

impl IconGroup {
    pub fn key(&self) -> char {
        self.key
    }

    /// Entries that survive the search term: case-insensitive substring match
    /// over the canonical name. An empty term keeps everything. The overlay
    /// hides this group's header when nothing survives.
    pub fn filtered(&self, term: &str) -> Vec<&IconEntry> {
        let needle = term.trim().to_ascii_lowercase();
        self.entries
            .iter()
            .filter(|entry| needle.is_empty() || entry.name.contains(&needle))
            .collect()
    }
}

/// UI model for the picker, kept free of side effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IconPickerModel {
    open: bool,
    target: Option<IconTarget>,
    search: String,
    groups: Vec<IconGroup>,
    populated: bool,
    total: usize,
}

impl IconPickerModel {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn target(&self) -> Option<IconTarget> {
        self.target
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }

    pub fn groups(&self) -> &[IconGroup] {
        &self.groups
    }

    /// Number of catalog entries, shown in the overlay title.
    pub fn total(&self) -> usize {
        self.total
    }
}

/// Messages emitted by the picker view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconPickerMsg {
    Open(IconTarget),
    Close,
    SearchChanged(String),
    Select(String),
}

/// Domain events the kernel applies to the card under edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconPickerEvent {
    Picked { target: IconTarget, name: String },
}

/// Apply a message to the model. Returns a selection event when relevant.
pub fn update(model: &mut IconPickerModel, msg: IconPickerMsg) -> Option<IconPickerEvent> {
    match msg {
        IconPickerMsg::Open(target) => {
            model.open = true;
            model.target = Some(target);
            model.search.clear();
            populate(model, glyphs::all());
            None
        }
        IconPickerMsg::Close => {
            model.open = false;
            model.target = None;
            None
        }
        IconPickerMsg::SearchChanged(text) => {
            model.search = text;
            None
        }
        IconPickerMsg::Select(name) => {
            // A selection without a recorded target is a stray click after
            // dismissal; drop it.
            let target = model.target.take()?;
            model.open = false;
            Some(IconPickerEvent::Picked {
                target,
                name: to_kebab_case(name.trim()),
            })
        }
    }
}

/// Build the per-letter catalog from a registry slice. Runs once per session:
/// later calls are no-ops after the first success. An empty source builds
/// nothing, leaving the overlay in its error state and the next open free to
/// retry.
pub fn populate(model: &mut IconPickerModel, source: &[(&'static str, &'static str)]) {
    if model.populated || source.is_empty() {
        return;
    }

    let mut groups: Vec<IconGroup> = Vec::new();
    for &(name, glyph) in source {
        let key = name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('#');

        let entry = IconEntry { name, glyph };
        match groups.last_mut() {
            Some(group) if group.key == key => group.entries.push(entry),
            _ => groups.push(IconGroup {
                key,
                entries: vec![entry],
            }),
        }
    }

    model.total = source.len();
    model.groups = groups;
    model.populated = true;
}

/// Render the overlay and return any messages triggered by user interaction.
/// Backdrop clicks and Escape close the overlay from any state.
pub fn view(ctx: &egui::Context, model: &IconPickerModel) -> Vec<IconPickerMsg> {
    let mut msgs = Vec::new();
    if !model.open {
        return msgs;
    }

    let modal = egui::Modal::new(egui::Id::new("icon_picker_modal")).show(ctx, |ui| {
        ui.set_width(540.0);

        ui.horizontal(|ui| {
            ui.heading(format!("Select an icon ({} total)", model.total));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(egui_phosphor::regular::X)
                    .on_hover_text("Close")
                    .clicked()
                {
                    msgs.push(IconPickerMsg::Close);
                }
            });
        });

        ui.add_space(4.0);
        render_search_row(ui, model, &mut msgs);
        ui.separator();

        if model.groups.is_empty() {
            ui.colored_label(
                ui.visuals().error_fg_color,
                "No icons available: the glyph registry is empty.",
            );
        } else {
            render_catalog(ui, model, &mut msgs);
        }
    });

    if modal.should_close() {
        msgs.push(IconPickerMsg::Close);
    }

    msgs
}

fn render_search_row(ui: &mut egui::Ui, model: &IconPickerModel, msgs: &mut Vec<IconPickerMsg>) {
    ui.horizontal(|ui| {
        ui.label(egui_phosphor::regular::MAGNIFYING_GLASS);
        let mut term = model.search.to_string();
        let resp = ui.add(
            egui::TextEdit::singleline(&mut term)
                .hint_text("Search icons...")
                .desired_width(f32::INFINITY),
        );
        if resp.changed() {
            msgs.push(IconPickerMsg::SearchChanged(term));
        }
    });
}

/// Per-letter clusters; headers of fully filtered-out groups disappear.
fn render_catalog(ui: &mut egui::Ui, model: &IconPickerModel, msgs: &mut Vec<IconPickerMsg>) {
    egui::ScrollArea::vertical()
        .max_height(420.0)
        .show(ui, |ui| {
            let mut any_match = false;

            for group in model.groups() {
                let entries = group.filtered(model.search());
                if entries.is_empty() {
                    continue;
                }
                any_match = true;

                ui.add_space(6.0);
                ui.label(egui::RichText::new(group.key().to_string()).strong());
                ui.add_space(2.0);

                ui.horizontal_wrapped(|ui| {
                    for entry in entries {
                        let button = egui::Button::new(format!("{} {}", entry.glyph(), entry.name()));
                        if ui.add(button).on_hover_text(entry.name()).clicked() {
                            msgs.push(IconPickerMsg::Select(entry.name().to_string()));
                        }
                    }
                });
            }

            if !any_match {
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new("No icons match the search.")
                        .italics()
                        .color(egui::Color32::from_gray(110)),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::{IconPickerModel, IconPickerMsg, IconTarget, populate, update};
    use crate::utils::glyphs;

    fn opened_model() -> IconPickerModel {
        let mut model = IconPickerModel::default();
        update(&mut model, IconPickerMsg::Open(IconTarget::CardIcon));
        model
    }

    // First open records the target and builds the catalog from the registry.
    #[test]
    fn open_records_target_and_populates() {
        let model = opened_model();
        assert!(model.is_open());
        assert_eq!(model.target(), Some(IconTarget::CardIcon));
        assert!(model.is_populated());
        assert!(!model.groups().is_empty());
        assert_eq!(model.total(), glyphs::all().len());
    }

    // Population happens once: a second call, even with a different source,
    // must not rebuild anything.
    #[test]
    fn populate_is_a_no_op_after_first_success() {
        let mut model = opened_model();
        let before = model.groups().len();

        populate(&mut model, &[]);
        populate(&mut model, &[("zzz", "?")]);

        assert_eq!(model.groups().len(), before);
        assert_eq!(model.total(), glyphs::all().len());
    }

    // An empty source is a failure, not a success: nothing latches and the
    // next open retries against the real registry.
    #[test]
    fn populate_skips_an_empty_source_and_retries() {
        let mut model = IconPickerModel::default();
        populate(&mut model, &[]);
        assert!(!model.is_populated());
        assert!(model.groups().is_empty());

        populate(&mut model, glyphs::all());
        assert!(model.is_populated());
        assert!(!model.groups().is_empty());
    }

    // Groups are keyed by uppercased first letter, in catalog order.
    #[test]
    fn groups_are_keyed_by_first_letter() {
        let model = opened_model();
        for pair in model.groups().windows(2) {
            assert!(pair[0].key() < pair[1].key());
        }
        for group in model.groups() {
            let lead = group.key().to_ascii_lowercase();
            for entry in group.filtered("") {
                assert!(entry.name().starts_with(lead), "{} not under {}", entry.name(), group.key());
            }
        }
    }

    // Search keeps only substring matches and drops headers of empty groups,
    // case-insensitively.
    #[test]
    fn search_filters_entries_and_group_headers() {
        let mut model = opened_model();
        update(&mut model, IconPickerMsg::SearchChanged("ROCKET".into()));

        let surviving: Vec<_> = model
            .groups()
            .iter()
            .filter(|group| !group.filtered(model.search()).is_empty())
            .collect();
        assert_eq!(surviving.len(), 1);
        assert_eq!(surviving[0].key(), 'R');
        for entry in surviving[0].filtered(model.search()) {
            assert!(entry.name().contains("rocket"));
        }
    }

    // Selection canonicalizes the name, closes the overlay, and clears the
    // target so stray follow-up clicks cannot commit twice.
    #[test]
    fn select_commits_canonical_name_and_closes() {
        let mut model = opened_model();
        let event = update(&mut model, IconPickerMsg::Select("RocketLaunch".into()));

        match event {
            Some(super::IconPickerEvent::Picked { target, name }) => {
                assert_eq!(target, IconTarget::CardIcon);
                assert_eq!(name, "rocket-launch");
            }
            other => panic!("expected a picked event, got {other:?}"),
        }
        assert!(!model.is_open());
        assert_eq!(model.target(), None);
    }

    // A selection after dismissal has no target and is dropped.
    #[test]
    fn select_without_a_target_is_ignored() {
        let mut model = IconPickerModel::default();
        let event = update(&mut model, IconPickerMsg::Select("star".into()));
        assert!(event.is_none());
    }

    // Dismissal clears the active target but keeps the built catalog.
    #[test]
    fn close_clears_the_target_and_keeps_the_catalog() {
        let mut model = opened_model();
        update(&mut model, IconPickerMsg::Close);

        assert!(!model.is_open());
        assert_eq!(model.target(), None);
        assert!(model.is_populated());

        update(&mut model, IconPickerMsg::Open(IconTarget::CardIcon));
        assert!(model.is_open());
        assert_eq!(model.search(), "");
    }
}
