use crate::app::SketchApp;
use crate::renderer::{PainterSurface, Renderer};

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let canvas_rect = response.rect;

            // Handle input
            let events = app.input.process_input(ctx, canvas_rect);
            if app.apply_input(events) {
                ctx.request_repaint();
            }

            // Repaint the whole scene from the model
            let ambient = app.ambient(ctx);
            let mut surface = PainterSurface::new(&painter, canvas_rect);
            Renderer::render(
                &mut surface,
                app.state(),
                canvas_rect.size(),
                ctx.pixels_per_point(),
                &ambient,
            );

            if response.hovered() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }
        });
}
