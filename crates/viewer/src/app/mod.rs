//! Demo host: an egui window that embeds the viewer next to a cabinet list

mod painter;

use eframe::egui;

use cabinet_viewer_lib::fixtures::{generate_cabinet, sample_project};
use cabinet_viewer_lib::{ContainerSize, Viewer, ViewerSettings};

use painter::PainterSurface;

/// Seconds an error toast stays on screen
const TOAST_SECONDS: f64 = 4.0;

/// Scroll points to dolly fraction
const DOLLY_SPEED: f32 = 0.002;

struct Toast {
    message: String,
    until: f64,
}

pub struct CabinetApp {
    viewer: Option<Viewer<PainterSurface>>,
    mount_error: Option<String>,
    /// Selector entries; the last one has no generator and always fails
    cabinet_names: Vec<String>,
    current: usize,
    exploded: bool,
    wireframe: bool,
    toast: Option<Toast>,
}

impl CabinetApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = ViewerSettings::load();
        let container = ContainerSize::new(800.0, 600.0, cc.egui_ctx.pixels_per_point());

        let (viewer, mount_error) =
            match Viewer::mount(PainterSurface::new(), container, settings) {
                Ok(viewer) => (Some(viewer), None),
                Err(e) => (None, Some(e.to_string())),
            };

        let mut cabinet_names: Vec<String> = sample_project()
            .into_iter()
            .map(|(name, _)| name.to_string())
            .collect();
        cabinet_names.push("Corner 36\" (not generated)".to_string());

        let mut app = Self {
            viewer,
            mount_error,
            cabinet_names,
            current: 0,
            exploded: false,
            wireframe: false,
            toast: None,
        };
        app.load_cabinet(0, 0.0);
        app
    }

    /// Regenerate panels for a cabinet. A failed generation leaves an empty
    /// scene and shows a toast.
    fn load_cabinet(&mut self, index: usize, now: f64) {
        self.current = index;
        let panels = match generate_cabinet(index) {
            Ok(panels) => panels,
            Err(e) => {
                tracing::warn!("Panel generation failed: {e}");
                self.toast = Some(Toast {
                    message: format!("Could not generate panels: {e}"),
                    until: now + TOAST_SECONDS,
                });
                Vec::new()
            }
        };
        if let Some(viewer) = self.viewer.as_mut() {
            viewer.set_panels(panels);
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui, now: f64) {
        ui.horizontal(|ui| {
            let mut selected = self.current;
            egui::ComboBox::from_label("Cabinet")
                .selected_text(self.cabinet_names[self.current].as_str())
                .show_ui(ui, |ui| {
                    for (i, name) in self.cabinet_names.iter().enumerate() {
                        ui.selectable_value(&mut selected, i, name.as_str());
                    }
                });
            if selected != self.current {
                self.load_cabinet(selected, now);
            }

            ui.separator();
            if ui.checkbox(&mut self.exploded, "Exploded").changed() {
                if let Some(viewer) = self.viewer.as_mut() {
                    viewer.set_exploded(self.exploded);
                }
            }
            if ui.checkbox(&mut self.wireframe, "Wireframe").changed() {
                if let Some(viewer) = self.viewer.as_mut() {
                    viewer.set_wireframe(self.wireframe);
                }
            }
        });
    }

    fn status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| match &self.viewer {
            Some(viewer) => {
                ui.label(format!("{} panels", viewer.scene().nodes().len()));
                ui.separator();
                match viewer.selected_panel() {
                    Some(label) => ui.label(format!("Selected: {label}")),
                    None => ui.weak("Click a panel to select it"),
                };
            }
            None => {
                ui.weak("Viewer not mounted");
            }
        });
    }

    fn viewport(&mut self, ui: &mut egui::Ui) {
        let Some(viewer) = self.viewer.as_mut() else {
            let message = self.mount_error.as_deref().unwrap_or("no render surface");
            ui.centered_and_justified(|ui| {
                ui.colored_label(egui::Color32::LIGHT_RED, format!("3D view unavailable: {message}"));
            });
            return;
        };

        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        viewer.resize(ContainerSize::new(
            rect.width(),
            rect.height(),
            ui.ctx().pixels_per_point(),
        ));

        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            viewer.orbit(-delta.x, -delta.y);
        }
        if response.dragged_by(egui::PointerButton::Secondary) {
            let delta = response.drag_delta();
            let scale = viewer.camera().distance * 0.002;
            viewer.pan(-delta.x * scale, delta.y * scale);
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                viewer.dolly(scroll * DOLLY_SPEED);
            }
        }
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - rect.min;
                viewer.handle_click(local.x, local.y);
            }
        }

        viewer.tick(ui.input(|i| i.stable_dt));
        if viewer.camera().is_moving() {
            ui.ctx().request_repaint();
        }

        if ui.is_rect_visible(rect) {
            ui.painter_at(rect).extend(viewer.surface().shapes_at(rect.min));
        }
    }

    fn show_toast(&mut self, ctx: &egui::Context, now: f64) {
        let Some(toast) = &self.toast else {
            return;
        };
        if now >= toast.until {
            self.toast = None;
            return;
        }
        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -36.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.colored_label(egui::Color32::LIGHT_RED, &toast.message);
                });
            });
        ctx.request_repaint_after(std::time::Duration::from_secs_f64(toast.until - now));
    }
}

impl eframe::App for CabinetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ui, now);
        });

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .show(ctx, |ui| {
                self.status_bar(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport(ui);
            });

        self.show_toast(ctx, now);
    }
}
