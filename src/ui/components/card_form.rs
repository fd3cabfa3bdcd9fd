// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Grouped card editor driven by the active visibility plan.
//!
//! The form owns no field state of its own: the card under edit is the model,
//! and every row is re-derived from the visibility plan each frame. Hidden
//! rows are simply not rendered, so stale visibility cannot survive a section
//! change.

use std::path::{Path, PathBuf};

use eframe::egui;

use crate::logic::rules::{FieldGroup, FieldId, VisibilityPlan};
use crate::models::card::{Card, IconLayout, LinkTarget};
use crate::utils::color;
use crate::utils::glyphs;

const ICON_SIZE_MIN: u32 = 12;
const ICON_SIZE_MAX: u32 = 128;

/// Path-valued media fields sharing the browse/clear row treatment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaField {
    Image,
    VideoFile,
    VideoThumbnail,
}

impl MediaField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::VideoFile => "Video file",
            Self::VideoThumbnail => "Video thumbnail",
        }
    }

    /// File-dialog filter for this field.
    pub fn dialog_filter(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::Image | Self::VideoThumbnail => {
                ("Images", &["png", "jpg", "jpeg", "gif", "webp", "svg"])
            }
            Self::VideoFile => ("Videos", &["mp4", "webm", "ogv", "mov"]),
        }
    }
}

/// Messages emitted by the form view.
#[derive(Clone, Debug, PartialEq)]
pub enum CardFormMsg {
    TitleChanged(String),
    TextChanged(String),
    IconCleared,
    IconSizeChanged(u32),
    IconColorChanged(String),
    IconLayoutChanged(IconLayout),
    ImageAltChanged(String),
    VideoUrlChanged(String),
    CtaLabelChanged(String),
    CtaUrlChanged(String),
    ButtonColorChanged(String),
    ButtonTextColorChanged(String),
    ButtonTargetChanged(LinkTarget),
    CardBgColorChanged(String),
    CardTextColorChanged(String),
    ActiveToggled(bool),
    OrderChanged(u32),
    IconPickerRequested,
    PickMediaRequested(MediaField),
    MediaPicked {
        field: MediaField,
        path: Option<PathBuf>,
    },
    MediaCleared(MediaField),
    OpenCtaLinkRequested,
}

/// Side effects the kernel must run on the form's behalf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardFormCommand {
    PickMedia(MediaField),
    OpenIconPicker,
    OpenLink(String),
}

/// User-facing outcome of a form message.
pub struct CardFormEvent {
    pub message: String,
    pub is_error: bool,
}

/// Apply a message to the card under edit.
pub fn update(
    card: &mut Card,
    msg: CardFormMsg,
    cmds: &mut Vec<CardFormCommand>,
) -> Option<CardFormEvent> {
    match msg {
        CardFormMsg::TitleChanged(text) => card.title = text,
        CardFormMsg::TextChanged(text) => card.text = text,
        CardFormMsg::IconCleared => card.icon.clear(),
        CardFormMsg::IconSizeChanged(size) => {
            card.icon_size = size.clamp(ICON_SIZE_MIN, ICON_SIZE_MAX);
        }
        CardFormMsg::IconColorChanged(value) => card.icon_color = value,
        CardFormMsg::IconLayoutChanged(layout) => card.icon_layout = layout,
        CardFormMsg::ImageAltChanged(text) => card.image_alt = text,
        CardFormMsg::VideoUrlChanged(text) => card.video_url = text,
        CardFormMsg::CtaLabelChanged(text) => card.cta_label = text,
        CardFormMsg::CtaUrlChanged(text) => card.cta_url = text,
        CardFormMsg::ButtonColorChanged(value) => card.button_color = value,
        CardFormMsg::ButtonTextColorChanged(value) => card.button_text_color = value,
        CardFormMsg::ButtonTargetChanged(target) => card.button_target = target,
        CardFormMsg::CardBgColorChanged(value) => card.card_bg_color = value,
        CardFormMsg::CardTextColorChanged(value) => card.card_text_color = value,
        CardFormMsg::ActiveToggled(active) => card.is_active = active,
        CardFormMsg::OrderChanged(order) => card.order = order,
        CardFormMsg::IconPickerRequested => cmds.push(CardFormCommand::OpenIconPicker),
        CardFormMsg::PickMediaRequested(field) => cmds.push(CardFormCommand::PickMedia(field)),
        CardFormMsg::MediaPicked { field, path } => {
            return Some(match path {
                Some(path) => {
                    let text = path.to_string_lossy().into_owned();
                    set_media_value(card, field, text);
                    CardFormEvent {
                        message: format!("{} selected: {}", field.label(), path.display()),
                        is_error: false,
                    }
                }
                None => CardFormEvent {
                    message: "File selection cancelled.".to_string(),
                    is_error: false,
                },
            });
        }
        CardFormMsg::MediaCleared(field) => set_media_value(card, field, String::new()),
        CardFormMsg::OpenCtaLinkRequested => {
            let url = card.cta_url.trim();
            if url.is_empty() {
                return Some(CardFormEvent {
                    message: "No CTA URL to open.".to_string(),
                    is_error: false,
                });
            }
            cmds.push(CardFormCommand::OpenLink(url.to_string()));
        }
    }
    None
}

pub fn media_value<'a>(card: &'a Card, field: MediaField) -> &'a str {
    match field {
        MediaField::Image => &card.image,
        MediaField::VideoFile => &card.video_file,
        MediaField::VideoThumbnail => &card.video_thumbnail,
    }
}

fn set_media_value(card: &mut Card, field: MediaField, value: String) {
    match field {
        MediaField::Image => card.image = value,
        MediaField::VideoFile => card.video_file = value,
        MediaField::VideoThumbnail => card.video_thumbnail = value,
    }
}

/// Render the grouped form and return any messages triggered by interaction.
pub fn view(ui: &mut egui::Ui, card: &Card, plan: VisibilityPlan) -> Vec<CardFormMsg> {
    let mut msgs = Vec::new();

    render_card_information(ui, card, plan, &mut msgs);
    ui.add_space(8.0);

    if plan.group_visible(FieldGroup::IconSettings) {
        render_icon_settings(ui, card, plan, &mut msgs);
        ui.add_space(8.0);
    }
    if plan.group_visible(FieldGroup::Media) {
        render_media(ui, card, plan, &mut msgs);
        ui.add_space(8.0);
    }
    if plan.group_visible(FieldGroup::ButtonSettings) {
        render_button_settings(ui, card, plan, &mut msgs);
        ui.add_space(8.0);
    }
    if plan.group_visible(FieldGroup::Styling) {
        render_styling(ui, card, plan, &mut msgs);
        ui.add_space(8.0);
    }

    render_analytics(ui, card);

    msgs
}

/// Always-visible anchor group: title and text plus the ungoverned
/// active/order controls.
fn render_card_information(
    ui: &mut egui::Ui,
    card: &Card,
    plan: VisibilityPlan,
    msgs: &mut Vec<CardFormMsg>,
) {
    egui::CollapsingHeader::new(FieldGroup::CardInformation.title())
        .default_open(true)
        .show(ui, |ui| {
            field_grid(ui, "card_information_grid", |ui| {
                if plan.is_visible(FieldId::Title) {
                    ui.label(plan.label_text(FieldId::Title));
                    let mut title = card.title.clone();
                    if ui
                        .add(egui::TextEdit::singleline(&mut title).desired_width(320.0))
                        .changed()
                    {
                        msgs.push(CardFormMsg::TitleChanged(title));
                    }
                    ui.end_row();
                }

                if plan.is_visible(FieldId::Text) {
                    ui.label(plan.label_text(FieldId::Text));
                    let mut text = card.text.clone();
                    if ui
                        .add(
                            egui::TextEdit::multiline(&mut text)
                                .desired_rows(4)
                                .desired_width(320.0),
                        )
                        .changed()
                    {
                        msgs.push(CardFormMsg::TextChanged(text));
                    }
                    ui.end_row();
                }

                // Outside any rule, shown for every section type.
                ui.label("Active:");
                let mut active = card.is_active;
                if ui.checkbox(&mut active, "").changed() {
                    msgs.push(CardFormMsg::ActiveToggled(active));
                }
                ui.end_row();

                ui.label("Order:");
                let mut order = card.order;
                if ui
                    .add(egui::DragValue::new(&mut order).range(0..=9999).speed(0.1))
                    .changed()
                {
                    msgs.push(CardFormMsg::OrderChanged(order));
                }
                ui.end_row();
            });
        });
}

fn render_icon_settings(
    ui: &mut egui::Ui,
    card: &Card,
    plan: VisibilityPlan,
    msgs: &mut Vec<CardFormMsg>,
) {
    egui::CollapsingHeader::new(FieldGroup::IconSettings.title())
        .default_open(true)
        .show(ui, |ui| {
            field_grid(ui, "icon_settings_grid", |ui| {
                if plan.is_visible(FieldId::Icon) {
                    ui.label(plan.label_text(FieldId::Icon));
                    ui.horizontal(|ui| {
                        let icon = card.icon.trim();
                        if icon.is_empty() {
                            ui.label(
                                egui::RichText::new("No icon selected")
                                    .small()
                                    .color(egui::Color32::from_gray(110)),
                            );
                        } else {
                            ui.label(
                                egui::RichText::new(glyphs::glyph_or_fallback(icon)).size(20.0),
                            );
                            ui.label(
                                egui::RichText::new(icon)
                                    .monospace()
                                    .color(egui::Color32::from_gray(110)),
                            );
                        }
                        if ui.button("Select icon…").clicked() {
                            msgs.push(CardFormMsg::IconPickerRequested);
                        }
                        if !icon.is_empty()
                            && ui
                                .button(egui_phosphor::regular::TRASH_SIMPLE)
                                .on_hover_text("Clear icon")
                                .clicked()
                        {
                            msgs.push(CardFormMsg::IconCleared);
                        }
                    });
                    ui.end_row();
                }

                if plan.is_visible(FieldId::IconSize) {
                    ui.label(plan.label_text(FieldId::IconSize));
                    let mut size = card.icon_size;
                    if ui
                        .add(
                            egui::DragValue::new(&mut size)
                                .range(ICON_SIZE_MIN..=ICON_SIZE_MAX)
                                .speed(0.2)
                                .suffix(" px"),
                        )
                        .changed()
                    {
                        msgs.push(CardFormMsg::IconSizeChanged(size));
                    }
                    ui.end_row();
                }

                color_row(ui, plan, FieldId::IconColor, &card.icon_color, msgs, |hex| {
                    CardFormMsg::IconColorChanged(hex)
                });

                if plan.is_visible(FieldId::IconLayout) {
                    ui.label(plan.label_text(FieldId::IconLayout));
                    egui::ComboBox::from_id_salt("icon_layout_select")
                        .width(180.0)
                        .selected_text(card.icon_layout.label())
                        .show_ui(ui, |ui| {
                            for layout in IconLayout::ALL {
                                if ui
                                    .selectable_label(card.icon_layout == layout, layout.label())
                                    .clicked()
                                {
                                    msgs.push(CardFormMsg::IconLayoutChanged(layout));
                                }
                            }
                        });
                    ui.end_row();
                }
            });
        });
}

fn render_media(ui: &mut egui::Ui, card: &Card, plan: VisibilityPlan, msgs: &mut Vec<CardFormMsg>) {
    egui::CollapsingHeader::new(FieldGroup::Media.title())
        .default_open(true)
        .show(ui, |ui| {
            field_grid(ui, "media_grid", |ui| {
                media_row(ui, plan, FieldId::Image, MediaField::Image, card, true, msgs);

                if plan.is_visible(FieldId::ImageAlt) {
                    ui.label(plan.label_text(FieldId::ImageAlt));
                    let mut alt = card.image_alt.clone();
                    if ui
                        .add(egui::TextEdit::singleline(&mut alt).desired_width(320.0))
                        .changed()
                    {
                        msgs.push(CardFormMsg::ImageAltChanged(alt));
                    }
                    ui.end_row();
                }

                media_row(
                    ui,
                    plan,
                    FieldId::VideoFile,
                    MediaField::VideoFile,
                    card,
                    false,
                    msgs,
                );
                media_row(
                    ui,
                    plan,
                    FieldId::VideoThumbnail,
                    MediaField::VideoThumbnail,
                    card,
                    true,
                    msgs,
                );

                if plan.is_visible(FieldId::VideoUrl) {
                    ui.label(plan.label_text(FieldId::VideoUrl));
                    let mut url = card.video_url.clone();
                    if ui
                        .add(
                            egui::TextEdit::singleline(&mut url)
                                .hint_text("https://…")
                                .desired_width(320.0),
                        )
                        .changed()
                    {
                        msgs.push(CardFormMsg::VideoUrlChanged(url));
                    }
                    ui.end_row();
                }
            });
        });
}

fn render_button_settings(
    ui: &mut egui::Ui,
    card: &Card,
    plan: VisibilityPlan,
    msgs: &mut Vec<CardFormMsg>,
) {
    egui::CollapsingHeader::new(FieldGroup::ButtonSettings.title())
        .default_open(true)
        .show(ui, |ui| {
            field_grid(ui, "button_settings_grid", |ui| {
                if plan.is_visible(FieldId::CtaLabel) {
                    ui.label(plan.label_text(FieldId::CtaLabel));
                    let mut label = card.cta_label.clone();
                    if ui
                        .add(egui::TextEdit::singleline(&mut label).desired_width(320.0))
                        .changed()
                    {
                        msgs.push(CardFormMsg::CtaLabelChanged(label));
                    }
                    ui.end_row();
                }

                if plan.is_visible(FieldId::CtaUrl) {
                    ui.label(plan.label_text(FieldId::CtaUrl));
                    ui.horizontal(|ui| {
                        let mut url = card.cta_url.clone();
                        if ui
                            .add(
                                egui::TextEdit::singleline(&mut url)
                                    .hint_text("https://…")
                                    .desired_width(280.0),
                            )
                            .changed()
                        {
                            msgs.push(CardFormMsg::CtaUrlChanged(url));
                        }
                        let has_url = !card.cta_url.trim().is_empty();
                        if ui
                            .add_enabled(
                                has_url,
                                egui::Button::new(egui_phosphor::regular::ARROW_SQUARE_OUT),
                            )
                            .on_hover_text("Open in browser")
                            .clicked()
                        {
                            msgs.push(CardFormMsg::OpenCtaLinkRequested);
                        }
                    });
                    ui.end_row();
                }

                color_row(
                    ui,
                    plan,
                    FieldId::ButtonColor,
                    &card.button_color,
                    msgs,
                    CardFormMsg::ButtonColorChanged,
                );
                color_row(
                    ui,
                    plan,
                    FieldId::ButtonTextColor,
                    &card.button_text_color,
                    msgs,
                    CardFormMsg::ButtonTextColorChanged,
                );

                if plan.is_visible(FieldId::ButtonTarget) {
                    ui.label(plan.label_text(FieldId::ButtonTarget));
                    egui::ComboBox::from_id_salt("button_target_select")
                        .width(140.0)
                        .selected_text(card.button_target.label())
                        .show_ui(ui, |ui| {
                            for target in LinkTarget::ALL {
                                if ui
                                    .selectable_label(card.button_target == target, target.label())
                                    .clicked()
                                {
                                    msgs.push(CardFormMsg::ButtonTargetChanged(target));
                                }
                            }
                        });
                    ui.end_row();
                }
            });
        });
}

fn render_styling(
    ui: &mut egui::Ui,
    card: &Card,
    plan: VisibilityPlan,
    msgs: &mut Vec<CardFormMsg>,
) {
    egui::CollapsingHeader::new(FieldGroup::Styling.title())
        .default_open(true)
        .show(ui, |ui| {
            field_grid(ui, "styling_grid", |ui| {
                color_row(
                    ui,
                    plan,
                    FieldId::CardBgColor,
                    &card.card_bg_color,
                    msgs,
                    CardFormMsg::CardBgColorChanged,
                );
                color_row(
                    ui,
                    plan,
                    FieldId::CardTextColor,
                    &card.card_text_color,
                    msgs,
                    CardFormMsg::CardTextColorChanged,
                );
            });
        });
}

/// Read-only counters maintained by the site, outside any visibility rule.
fn render_analytics(ui: &mut egui::Ui, card: &Card) {
    egui::CollapsingHeader::new(FieldGroup::Analytics.title())
        .default_open(false)
        .show(ui, |ui| {
            field_grid(ui, "analytics_grid", |ui| {
                ui.label("Clicks:");
                ui.label(card.click_count.to_string());
                ui.end_row();

                ui.label("Created:");
                ui.label(format_stamp(card.created_at));
                ui.end_row();

                ui.label("Updated:");
                ui.label(format_stamp(card.updated_at));
                ui.end_row();
            });
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new("Maintained by the site, not editable here.")
                    .small()
                    .color(egui::Color32::from_gray(110)),
            );
        });
}

fn field_grid(ui: &mut egui::Ui, id: &str, add_rows: impl FnOnce(&mut egui::Ui)) {
    egui::Grid::new(id)
        .num_columns(2)
        .spacing(egui::vec2(8.0, 10.0))
        .min_col_width(140.0)
        .show(ui, add_rows);
}

/// Color-button row with the stored hex value alongside for reference.
fn color_row(
    ui: &mut egui::Ui,
    plan: VisibilityPlan,
    field: FieldId,
    value: &str,
    msgs: &mut Vec<CardFormMsg>,
    make: impl Fn(String) -> CardFormMsg,
) {
    if !plan.is_visible(field) {
        return;
    }
    ui.label(plan.label_text(field));
    ui.horizontal(|ui| {
        let mut rgb = color::parse_hex(value).unwrap_or(egui::Color32::WHITE);
        if ui.color_edit_button_srgba(&mut rgb).changed() {
            msgs.push(make(color::format_hex(rgb)));
        }
        ui.label(
            egui::RichText::new(value)
                .monospace()
                .color(egui::Color32::from_gray(110)),
        );
    });
    ui.end_row();
}

/// Browse/clear row for a path-valued field, with an optional image preview
/// for files that actually exist on this machine. Paths from a server export
/// are shown as text only.
fn media_row(
    ui: &mut egui::Ui,
    plan: VisibilityPlan,
    field: FieldId,
    media: MediaField,
    card: &Card,
    preview: bool,
    msgs: &mut Vec<CardFormMsg>,
) {
    if !plan.is_visible(field) {
        return;
    }
    let value = media_value(card, media);

    ui.label(plan.label_text(field));
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            if value.is_empty() {
                ui.label(
                    egui::RichText::new("none")
                        .small()
                        .color(egui::Color32::from_gray(110)),
                );
            } else {
                ui.label(
                    egui::RichText::new(value)
                        .monospace()
                        .color(egui::Color32::from_gray(110)),
                );
            }
            if ui
                .button(format!("{} Browse", egui_phosphor::regular::FOLDER_OPEN))
                .clicked()
            {
                msgs.push(CardFormMsg::PickMediaRequested(media));
            }
            if !value.is_empty()
                && ui
                    .button(egui_phosphor::regular::TRASH_SIMPLE)
                    .on_hover_text("Clear")
                    .clicked()
            {
                msgs.push(CardFormMsg::MediaCleared(media));
            }
        });

        if preview && !value.is_empty() {
            let path = Path::new(value);
            if path.is_absolute() && path.exists() {
                ui.add(
                    egui::Image::new(format!("file://{}", path.display()))
                        .max_height(96.0)
                        .max_width(240.0),
                );
            }
        }
    });
    ui.end_row();
}

fn format_stamp(stamp: Option<chrono::DateTime<chrono::Utc>>) -> String {
    stamp
        .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "never".to_string())
}
