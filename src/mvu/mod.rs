// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use std::path::PathBuf;

use crate::logic::site::{self, SiteExport};
use crate::models::card::{Card, validate_card};
use crate::models::section::{SectionRecord, SectionType};
use crate::ui::components::card_form::{self, CardFormCommand, CardFormMsg, MediaField};
use crate::ui::components::icon_picker::{self, IconPickerEvent, IconPickerMsg, IconPickerModel, IconTarget};
use crate::ui::components::section_select::{
    self, SectionSelectEvent, SectionSelectModel, SectionSelectMsg,
};
use crate::utils::to_kebab_case;

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Card under edit.
    pub card: Card,
    /// Section index as loaded, written back verbatim on save.
    pub sections: Vec<SectionRecord>,
    /// Resolved layout type of the selected section.
    pub section_type: SectionType,
    /// Section selector state.
    pub section_select: SectionSelectModel,
    /// Icon picker overlay state.
    pub icon_picker: IconPickerModel,
    /// Where the current export was loaded from, if anywhere.
    pub source: Option<PathBuf>,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

impl AppModel {
    /// Fresh model pre-filled with the bundled sample export, so the form is
    /// usable before any real export is opened.
    pub fn with_sample() -> Self {
        let mut model = Self::default();
        apply_export(&mut model, site::sample_export(), None);
        model.status =
            Some("Sample export loaded. Open a site export to edit real content.".to_string());
        model
    }
}

/// Application messages routed through the update function.
pub enum Msg {
    LoadRequested(PathBuf),
    LoadCancelled,
    ExportLoaded(Result<(PathBuf, SiteExport), String>),
    SaveRequested(PathBuf),
    SaveCancelled,
    SaveCompleted(Result<PathBuf, String>),
    LinkOpened(Result<(), String>),
    DismissError,
    CardForm(CardFormMsg),
    SectionSelect(SectionSelectMsg),
    IconPicker(IconPickerMsg),
}

/// Commands represent side-effects executed between frames.
pub enum Command {
    LoadExport(PathBuf),
    SaveExport(SavePayload),
    PickMediaFile { field: MediaField },
    OpenLink(String),
}

/// Captured, validated data for saving.
pub struct SavePayload {
    /// Final export path on disk (with `.json` extension enforced).
    pub output: PathBuf,
    /// Export document to write, timestamps already stamped.
    pub export: SiteExport,
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::LoadRequested(path) => cmds.push(Command::LoadExport(path)),
        Msg::LoadCancelled => surface_event(model, "Open cancelled.".to_string(), false),
        Msg::ExportLoaded(result) => match result {
            Ok((path, export)) => {
                apply_export(model, export, Some(path.clone()));
                surface_event(model, format!("Export loaded: {}", path.display()), false);
            }
            Err(err) => surface_event(model, format!("Failed to load export:\n\n{err}"), true),
        },
        Msg::SaveRequested(output) => match validate_for_save(model, output) {
            Ok(payload) => cmds.push(Command::SaveExport(payload)),
            Err(err) => surface_event(model, err, true),
        },
        Msg::SaveCancelled => surface_event(model, "Save cancelled.".to_string(), false),
        Msg::SaveCompleted(result) => match result {
            Ok(path) => {
                surface_event(model, format!("Export saved: {}", path.display()), false);
                model.source = Some(path);
            }
            Err(err) => surface_event(model, format!("Failed to save export:\n\n{err}"), true),
        },
        Msg::LinkOpened(result) => match result {
            Ok(()) => surface_event(model, "Link opened in browser.".to_string(), false),
            Err(err) => surface_event(model, format!("Failed to open link: {err}"), true),
        },
        Msg::DismissError => model.error = None,
        Msg::CardForm(m) => {
            let mut form_cmds = Vec::new();
            if let Some(event) = card_form::update(&mut model.card, m, &mut form_cmds) {
                surface_event(model, event.message, event.is_error);
            }
            for c in form_cmds {
                match c {
                    CardFormCommand::PickMedia(field) => {
                        cmds.push(Command::PickMediaFile { field })
                    }
                    CardFormCommand::OpenIconPicker => {
                        icon_picker::update(
                            &mut model.icon_picker,
                            IconPickerMsg::Open(IconTarget::CardIcon),
                        );
                    }
                    CardFormCommand::OpenLink(url) => cmds.push(Command::OpenLink(url)),
                }
            }
        }
        Msg::SectionSelect(m) => {
            if let Some(event) = section_select::update(&mut model.section_select, m) {
                let SectionSelectEvent::SectionChanged {
                    record,
                    section_type,
                } = event;
                model.card.section = record;
                model.section_type = section_type;
            }
        }
        Msg::IconPicker(m) => {
            if let Some(event) = icon_picker::update(&mut model.icon_picker, m) {
                let IconPickerEvent::Picked { target, name } = event;
                match target {
                    IconTarget::CardIcon => model.card.icon = name,
                }
            }
        }
    }
}

/// Execute a command on a worker thread and return the resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::LoadExport(path) => {
            let result = site::load_export(&path)
                .map(|export| (path, export))
                .map_err(|err| format!("{err:#}"));
            Msg::ExportLoaded(result)
        }
        Command::SaveExport(payload) => {
            let result = site::save_export(&payload.output, &payload.export)
                .map(|_| payload.output)
                .map_err(|err| format!("{err:#}"));
            Msg::SaveCompleted(result)
        }
        Command::PickMediaFile { field } => {
            let (name, extensions) = field.dialog_filter();
            let path = rfd::FileDialog::new()
                .set_title(format!("Select {}", field.label().to_lowercase()))
                .add_filter(name, extensions)
                .pick_file();
            Msg::CardForm(CardFormMsg::MediaPicked { field, path })
        }
        Command::OpenLink(url) => {
            let result = open::that(&url).map_err(|err| err.to_string());
            Msg::LinkOpened(result)
        }
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}

/// Install a loaded export as the current editing state: normalize the icon
/// name, rebuild the section selector, and resolve the active layout.
fn apply_export(model: &mut AppModel, export: SiteExport, source: Option<PathBuf>) {
    let mut card = export.card;
    let normalized = {
        let trimmed = card.icon.trim();
        if trimmed.is_empty() {
            String::new()
        } else {
            to_kebab_case(trimmed)
        }
    };
    card.icon = normalized;

    section_select::load_index(&mut model.section_select, &export.sections);
    section_select::ensure_card_option(&mut model.section_select, &card.section);
    let selected = (card.section.id != 0).then_some(card.section.id);
    section_select::select(&mut model.section_select, selected);
    model.section_type = section_select::resolve(&mut model.section_select);

    model.sections = export.sections;
    model.card = card;
    model.source = source;
}

/// Validate the card and build the save payload. Timestamps are stamped only
/// on success, so a rejected save never moves them.
fn validate_for_save(model: &mut AppModel, output: PathBuf) -> Result<SavePayload, String> {
    if let Some(code) = validate_card(&model.card) {
        return Err(save_error_message(code).to_string());
    }

    let now = chrono::Utc::now();
    model.card.updated_at = Some(now);
    model.card.created_at.get_or_insert(now);

    Ok(SavePayload {
        output,
        export: SiteExport {
            sections: model.sections.clone(),
            card: model.card.clone(),
        },
    })
}

/// Map a validation reason code to the message shown in the error modal.
fn save_error_message(code: &str) -> &'static str {
    match code {
        "title_required" => "Please enter a title.",
        "invalid_cta_url" => "CTA URL must be a valid http/https URL.",
        "invalid_video_url" => "Video URL must be a valid http/https URL.",
        _ => "The card cannot be saved.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::section::SectionType;
    use crate::ui::components::card_form::{CardFormMsg, MediaField};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn with_sample_prefills_the_form() {
        let model = AppModel::with_sample();

        assert_eq!(model.card.title, "Amara Osei");
        assert_eq!(model.card.icon, "rocket-launch");
        assert_eq!(model.sections.len(), 5);
        assert_eq!(model.section_select.selected(), Some(2));
        assert_eq!(model.section_type, SectionType::Team);
        assert!(model.status.is_some());
        assert!(model.source.is_none());
    }

    #[test]
    fn load_normalizes_the_icon_and_resolves_the_section() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("export.json");
        std::fs::write(
            &path,
            r#"{
                "sections": [{"id": 4, "name": "Questions", "section_type": "faq"}],
                "card": {"section": {"id": 4, "name": "Questions", "section_type": "faq"},
                         "title": "How do refunds work?",
                         "icon": "ArrowRight"}
            }"#,
        )
        .unwrap();

        let mut model = AppModel::default();
        let mut cmds = Vec::new();
        update(&mut model, Msg::LoadRequested(path.clone()), &mut cmds);
        assert_eq!(cmds.len(), 1, "load should enqueue command");

        let msg = run_command(cmds.pop().unwrap());
        update(&mut model, msg, &mut cmds);

        assert_eq!(model.card.icon, "arrow-right");
        assert_eq!(model.section_type, SectionType::Faq);
        assert_eq!(model.source.as_deref(), Some(path.as_path()));
        assert!(
            model
                .status
                .as_deref()
                .map(|s| s.contains("Export loaded"))
                .unwrap_or(false)
        );
    }

    #[test]
    fn load_failure_surfaces_an_error() {
        let msg = run_command(Command::LoadExport(PathBuf::from(
            "/nonexistent/export.json",
        )));

        let mut model = AppModel::default();
        let mut cmds = Vec::new();
        update(&mut model, msg, &mut cmds);

        assert!(cmds.is_empty());
        assert!(
            model
                .error
                .as_deref()
                .map(|s| s.contains("Failed to load export"))
                .unwrap_or(false)
        );
    }

    #[test]
    fn save_request_enqueues_and_completes() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("amara-osei.json");

        let mut model = AppModel::with_sample();
        let mut cmds = Vec::new();
        update(&mut model, Msg::SaveRequested(output.clone()), &mut cmds);

        assert_eq!(cmds.len(), 1, "save should enqueue command");
        assert!(model.card.updated_at.is_some());
        assert!(model.card.created_at.is_some());

        let msg = run_command(cmds.pop().unwrap());
        let mut cmds2 = Vec::new();
        update(&mut model, msg, &mut cmds2);

        assert!(model.error.is_none());
        assert!(
            model
                .status
                .as_deref()
                .map(|s| s.contains("Export saved"))
                .unwrap_or(false)
        );
        assert!(output.exists());

        // The written export round-trips with the stamped card.
        let reread = site::load_export(&output).unwrap();
        assert_eq!(reread.card.title, "Amara Osei");
        assert_eq!(reread.sections.len(), 5);
        assert!(reread.card.updated_at.is_some());
    }

    #[test]
    fn save_request_with_empty_title_sets_error() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::SaveRequested(PathBuf::from("/tmp/ignored.json")),
            &mut cmds,
        );

        assert!(cmds.is_empty());
        assert_eq!(model.error.as_deref(), Some("Please enter a title."));
        // A rejected save must not move the timestamps.
        assert!(model.card.updated_at.is_none());
    }

    #[test]
    fn save_request_with_bad_cta_url_sets_error() {
        let mut model = AppModel::with_sample();
        model.card.cta_url = "not a url".into();

        let mut cmds = Vec::new();
        update(
            &mut model,
            Msg::SaveRequested(PathBuf::from("/tmp/ignored.json")),
            &mut cmds,
        );

        assert!(cmds.is_empty());
        assert_eq!(
            model.error.as_deref(),
            Some("CTA URL must be a valid http/https URL.")
        );
    }

    #[test]
    fn save_cancelled_sets_status() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        update(&mut model, Msg::SaveCancelled, &mut cmds);

        assert!(cmds.is_empty());
        assert_eq!(model.status.as_deref(), Some("Save cancelled."));
        assert!(model.error.is_none());
    }

    #[test]
    fn section_change_updates_card_and_layout() {
        let mut model = AppModel::with_sample();
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::SectionSelect(SectionSelectMsg::Selected(Some(3))),
            &mut cmds,
        );

        assert!(cmds.is_empty());
        assert_eq!(model.card.section.id, 3);
        assert_eq!(model.card.section.section_type, "pricing");
        assert_eq!(model.section_type, SectionType::Pricing);
    }

    #[test]
    fn icon_picker_round_trip_lands_on_the_card() {
        let mut model = AppModel::with_sample();
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::CardForm(CardFormMsg::IconPickerRequested),
            &mut cmds,
        );
        assert!(cmds.is_empty(), "opening the picker is not a side effect");
        assert!(model.icon_picker.is_open());

        update(
            &mut model,
            Msg::IconPicker(IconPickerMsg::Select("MagnifyingGlass".into())),
            &mut cmds,
        );

        assert_eq!(model.card.icon, "magnifying-glass");
        assert!(!model.icon_picker.is_open());
    }

    #[test]
    fn media_pick_routes_through_a_command() {
        let mut model = AppModel::with_sample();
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::CardForm(CardFormMsg::PickMediaRequested(MediaField::Image)),
            &mut cmds,
        );

        assert_eq!(cmds.len(), 1);
        assert!(matches!(
            cmds.pop(),
            Some(Command::PickMediaFile {
                field: MediaField::Image
            })
        ));

        // Simulate the dialog result coming back from the worker.
        update(
            &mut model,
            Msg::CardForm(CardFormMsg::MediaPicked {
                field: MediaField::Image,
                path: Some(PathBuf::from("/tmp/portrait.png")),
            }),
            &mut cmds,
        );
        assert_eq!(model.card.image, "/tmp/portrait.png");
        assert!(model.status.is_some());
    }

    #[test]
    fn open_cta_link_enqueues_a_command() {
        let mut model = AppModel::with_sample();
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::CardForm(CardFormMsg::OpenCtaLinkRequested),
            &mut cmds,
        );

        match cmds.pop() {
            Some(Command::OpenLink(url)) => {
                assert_eq!(url, "https://example.com/team/amara-osei")
            }
            _ => panic!("expected an open-link command"),
        }
    }

    #[test]
    fn export_without_a_section_defaults_the_layout() {
        let export = site::parse_export(
            r#"{"sections": [], "card": {"section": {"id": 0}, "title": "Loose card"}}"#,
        )
        .unwrap();

        let mut model = AppModel::default();
        apply_export(&mut model, export, None);

        assert_eq!(model.section_select.selected(), None);
        assert_eq!(model.section_type, SectionType::Default);
    }
}
