use egui::{Sense, Stroke, vec2};

use crate::app::SketchApp;
use crate::config::{PRESET_COLORS, Theme};
use crate::element::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
use crate::renderer::parse_color;
use crate::state::Tool;

const SWATCH_SIZE: f32 = 28.0;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Tools");
            egui::Grid::new("tool_grid")
                .num_columns(3)
                .spacing([8.0, 8.0])
                .show(ui, |ui| {
                    for (index, tool) in Tool::ALL.into_iter().enumerate() {
                        if ui.selectable_label(app.tool == tool, tool.label()).clicked() {
                            app.set_tool(tool);
                        }
                        if index % 3 == 2 {
                            ui.end_row();
                        }
                    }
                });

            ui.separator();
            color_section(app, ui);

            ui.separator();
            stroke_width_section(app, ui);

            ui.separator();
            ui.heading("Theme");
            ui.horizontal(|ui| {
                for theme in [Theme::System, Theme::Light, Theme::Dark] {
                    ui.selectable_value(&mut app.theme, theme, theme.label());
                }
            });

            ui.separator();
            ui.label(format!("Elements: {}", app.state().elements.len()));
            ui.label(format!("Gesture: {}", app.interaction.gesture().name()));
        });
}

fn color_section(app: &mut SketchApp, ui: &mut egui::Ui) {
    ui.heading("Colors");

    let current = parse_color(&app.state.color);
    let mut picked = current;
    egui::color_picker::color_edit_button_srgba(
        ui,
        &mut picked,
        egui::color_picker::Alpha::Opaque,
    );
    if picked != current {
        app.state.color = picked.to_hex();
    }

    ui.horizontal_wrapped(|ui| {
        for preset in PRESET_COLORS {
            let color = parse_color(preset);
            let (rect, response) = ui.allocate_exact_size(vec2(SWATCH_SIZE, SWATCH_SIZE), Sense::click());
            ui.painter().rect_filled(rect, 4.0, color);
            if color == current {
                ui.painter()
                    .rect_stroke(rect, 4.0, Stroke::new(2.0, ui.visuals().selection.stroke.color));
            }
            if response.on_hover_text(preset).clicked() {
                app.state.color = preset.to_owned();
            }
        }
    });
}

fn stroke_width_section(app: &mut SketchApp, ui: &mut egui::Ui) {
    ui.heading("Stroke Width");
    ui.add(
        egui::Slider::new(&mut app.state.stroke_width, MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH)
            .step_by(1.0)
            .suffix("px"),
    );

    // Live preview of the current width
    let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), MAX_STROKE_WIDTH + 8.0), Sense::hover());
    ui.painter()
        .rect_filled(rect, 6.0, ui.visuals().faint_bg_color);
    ui.painter().circle_filled(
        rect.center(),
        app.state.stroke_width / 2.0,
        ui.visuals().strong_text_color(),
    );
}
