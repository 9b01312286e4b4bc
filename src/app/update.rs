use crate::checkout;
use crate::geometry;
use crate::model;
use crate::pricing;
use eframe::egui;

use super::render::{draw_grid, draw_instances, draw_marquee, draw_sheet};
use super::{CANVAS_MARGIN_PX, GangApp, Gesture, MIN_ZOOM, SheetView};

fn band_range(band: &pricing::PriceBand) -> String {
    match band.to {
        Some(to) => format!("{}-{}", band.from, to),
        None => format!("{}+", band.from),
    }
}

impl eframe::App for GangApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_mailbox();
        self.poll_uploads(ctx);
        self.drain_mailbox();

        let wants_keyboard = ctx.wants_keyboard_input();
        let mut delete = false;
        let mut rotate = false;
        let mut escape = false;
        let mut nudge = (0.0f32, 0.0f32);
        ctx.input_mut(|i| {
            if wants_keyboard {
                return;
            }
            if i.consume_key(egui::Modifiers::NONE, egui::Key::Delete)
                || i.consume_key(egui::Modifiers::NONE, egui::Key::Backspace)
            {
                delete = true;
            }
            if i.consume_key(egui::Modifiers::NONE, egui::Key::R) {
                rotate = true;
            }
            if i.consume_key(egui::Modifiers::NONE, egui::Key::Escape) {
                escape = true;
            }
            let step = if self.snapshot.snap_increment > 0.0 {
                self.snapshot.snap_increment
            } else {
                0.25
            };
            if i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowLeft) {
                nudge.0 -= step;
            }
            if i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowRight) {
                nudge.0 += step;
            }
            if i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowUp) {
                nudge.1 -= step;
            }
            if i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowDown) {
                nudge.1 += step;
            }
        });
        if delete {
            self.delete_selected();
        }
        if rotate {
            self.rotate_selected();
        }
        if escape {
            self.gesture = Gesture::Idle;
            self.store.set_selected_instance(None);
            self.drain_mailbox();
        }
        if nudge != (0.0, 0.0) {
            self.nudge_selected(nudge.0, nudge.1);
        }

        self.top_bar(ctx);
        self.design_panel(ctx);
        self.status_bar(ctx);
        self.canvas(ctx);
    }
}

impl GangApp {
    fn top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Sheet:");
                let mut sheet_id = self.snapshot.sheet.id.clone();
                egui::ComboBox::from_id_salt("sheet_size")
                    .selected_text(self.snapshot.sheet.label.clone())
                    .show_ui(ui, |ui| {
                        for sheet in model::sheet_catalog() {
                            ui.selectable_value(&mut sheet_id, sheet.id.clone(), sheet.label);
                        }
                    });
                if sheet_id != self.snapshot.sheet.id {
                    self.store.set_sheet_size(&sheet_id);
                    self.drain_mailbox();
                }

                ui.separator();
                ui.label("Sheets:");
                let mut quantity = self.snapshot.sheet_quantity;
                if ui
                    .add(egui::DragValue::new(&mut quantity).range(1..=999).speed(1))
                    .changed()
                {
                    self.store.set_sheet_quantity(quantity);
                    self.drain_mailbox();
                }

                ui.separator();
                ui.label("Snap:");
                let mut increment = self.snapshot.snap_increment;
                if ui
                    .add(
                        egui::DragValue::new(&mut increment)
                            .range(0.0..=2.0)
                            .speed(0.05)
                            .suffix("\""),
                    )
                    .changed()
                {
                    self.store.set_snap_increment(increment);
                    self.drain_mailbox();
                    self.persist_settings();
                }
                if ui.checkbox(&mut self.show_grid, "Grid").changed() {
                    self.persist_settings();
                }

                ui.separator();
                if ui.button("Upload Images…").clicked() {
                    self.upload_dialog(ctx);
                }
                if self.pending_uploads > 0 {
                    ui.spinner();
                    ui.label(format!("{} decoding…", self.pending_uploads));
                }

                ui.separator();
                ui.label("Zoom:");
                // The canvas pass clamps against the viewport-derived
                // maximum; the slider must not pull a wider Fit zoom back
                // into its own range every frame.
                ui.add(
                    egui::Slider::new(&mut self.zoom, MIN_ZOOM..=4.0)
                        .show_value(false)
                        .logarithmic(true)
                        .clamping(egui::SliderClamping::Never),
                );
                if ui.button("Fit").clicked() {
                    // Clamped against the viewport in the canvas pass.
                    self.zoom = f32::MAX;
                }

                ui.separator();
                if ui.button("Clear All").clicked() {
                    self.upload_generation += 1;
                    self.store.reset();
                    self.drain_mailbox();
                    self.textures.clear();
                    self.quantity_inputs.clear();
                    self.size_inputs.clear();
                    self.status = Some("Cleared".to_string());
                }
            });
        });
    }

    fn design_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("design_panel")
            .resizable(true)
            .min_width(240.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.heading("Designs");
                    ui.separator();
                    if self.snapshot.designs.is_empty() {
                        ui.label("Upload PNG or JPEG artwork to begin.");
                    }
                    let designs = self.snapshot.designs.clone();
                    for design in &designs {
                        self.design_row(ui, design);
                        ui.separator();
                    }

                    ui.checkbox(&mut self.repack_on_resize, "Re-pack after resize");

                    ui.separator();
                    ui.heading("Order");
                    let usage = checkout::usage_stats(&self.snapshot);
                    ui.label(format!(
                        "{} item(s), {:.0}% of sheet covered",
                        usage.instance_count,
                        usage.coverage_ratio * 100.0
                    ));
                    let sheet_id = self.snapshot.sheet.id.clone();
                    let quantity = self.snapshot.sheet_quantity;
                    if let Some(band) = pricing::effective_band(&sheet_id, quantity) {
                        ui.label(format!(
                            "Unit price: {} ({} sheets)",
                            pricing::format_cents(band.unit_price_cents as u64),
                            band_range(&band)
                        ));
                    }
                    if let Some(total) = pricing::order_total_cents(&sheet_id, quantity) {
                        ui.label(format!("Total: {}", pricing::format_cents(total)));
                    }
                    if let Some(bands) = pricing::bands_for_sheet(&sheet_id) {
                        egui::CollapsingHeader::new("Quantity breaks").show(ui, |ui| {
                            for b in bands {
                                ui.label(format!(
                                    "{} sheets: {} each",
                                    band_range(b),
                                    pricing::format_cents(b.unit_price_cents as u64)
                                ));
                            }
                        });
                    }

                    ui.separator();
                    ui.label("Export path:");
                    if ui.text_edit_singleline(&mut self.export_path).changed() {
                        self.persist_settings();
                    }
                    let can_submit = !self.snapshot.instances.is_empty();
                    if ui
                        .add_enabled(can_submit, egui::Button::new("Submit Order"))
                        .clicked()
                    {
                        self.submit_order();
                    }
                });
            });
    }

    fn design_row(&mut self, ui: &mut egui::Ui, design: &model::DesignFile) {
        let placed = self
            .snapshot
            .instances
            .iter()
            .filter(|i| i.design_id == design.id)
            .count();
        ui.horizontal(|ui| {
            ui.strong(&design.name);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("✕").clicked() {
                    self.store.remove_design_file(design.id);
                    self.drain_mailbox();
                    self.quantity_inputs.remove(&design.id);
                    self.size_inputs.remove(&design.id);
                }
            });
        });
        ui.small(format!(
            "{}×{} px, {} on sheet",
            design.natural_width_px, design.natural_height_px, placed
        ));
        let dpi = design.dpi_estimate();
        if dpi > 0.0 && dpi < 150.0 {
            ui.colored_label(
                egui::Color32::from_rgb(200, 120, 40),
                format!("Low resolution: {dpi:.0} DPI at this size"),
            );
        } else {
            ui.small(format!("{dpi:.0} DPI at this size"));
        }

        let (mut w, mut h) = *self
            .size_inputs
            .entry(design.id)
            .or_insert((design.width_in, design.height_in));
        ui.horizontal(|ui| {
            ui.label("W:");
            ui.add(
                egui::DragValue::new(&mut w)
                    .range(0.25..=60.0)
                    .speed(0.05)
                    .suffix("\""),
            );
            ui.label("H:");
            ui.add(
                egui::DragValue::new(&mut h)
                    .range(0.25..=60.0)
                    .speed(0.05)
                    .suffix("\""),
            );
            if ui.small_button("Apply").clicked() {
                self.store
                    .update_design_size(design.id, w, h, self.repack_on_resize);
                self.drain_mailbox();
            }
        });
        self.size_inputs.insert(design.id, (w, h));

        let mut quantity = *self
            .quantity_inputs
            .entry(design.id)
            .or_insert(placed.max(1));
        ui.horizontal(|ui| {
            ui.label("Qty:");
            ui.add(egui::DragValue::new(&mut quantity).range(1..=999).speed(1));
            if ui.small_button("Auto Pack").clicked() {
                let requested = quantity;
                let outcome = self.store.add_instances_for_design(design.id, quantity, true);
                self.drain_mailbox();
                if outcome.max_instances > 0 {
                    quantity = quantity.min(outcome.max_instances);
                }
                if outcome.placed < requested {
                    self.status = Some(format!(
                        "Sheet nearly full: placed {} of {} (capacity ~{})",
                        outcome.placed, requested, outcome.max_instances
                    ));
                } else {
                    self.status = Some(format!("Packed {} × {}", outcome.placed, design.name));
                }
            }
            if ui.small_button("Add Loose").clicked() {
                let outcome = self.store.add_instances_for_design(design.id, quantity, false);
                self.drain_mailbox();
                if outcome.placed < quantity {
                    self.status = Some(format!(
                        "Placed {} of {}; no room for the rest",
                        outcome.placed, quantity
                    ));
                }
            }
        });
        self.quantity_inputs.insert(design.id, quantity);
    }

    fn status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(status) = &self.status {
                    ui.label(status);
                } else {
                    ui.label("Ready");
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Zoom: {:.0}%", self.zoom * 100.0));
                    ui.separator();
                    ui.label(format!("Items: {}", self.snapshot.instances.len()));
                    ui.separator();
                    ui.label(format!("Selected: {}", self.snapshot.selected.len()));
                });
            });
        });
    }

    fn canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let viewport = ui.available_size();
            let max_zoom = self.max_zoom(viewport);
            self.zoom = self.zoom.clamp(MIN_ZOOM, max_zoom.max(MIN_ZOOM));

            egui::ScrollArea::both().show(ui, |ui| {
                let scale = geometry::PX_PER_IN * self.zoom;
                let sheet_size = egui::vec2(
                    self.snapshot.sheet.width_in * scale,
                    self.snapshot.sheet.height_in * scale,
                );
                let canvas_size = sheet_size
                    + egui::vec2(CANVAS_MARGIN_PX * 2.0, CANVAS_MARGIN_PX * 2.0);
                let (rect, response) =
                    ui.allocate_exact_size(canvas_size, egui::Sense::click_and_drag());
                let view = SheetView {
                    origin: rect.min + egui::vec2(CANVAS_MARGIN_PX, CANVAS_MARGIN_PX),
                    zoom: self.zoom,
                };
                let painter = ui.painter_at(rect);

                draw_sheet(&painter, &view, &self.snapshot.sheet);
                if self.show_grid {
                    draw_grid(
                        &painter,
                        &view,
                        &self.snapshot.sheet,
                        self.snapshot.snap_increment,
                    );
                }

                self.handle_canvas_input(ctx, &response, &view);

                draw_instances(&painter, &view, &self.snapshot, &self.textures);
                if let Gesture::Marquee {
                    start_sheet,
                    current_sheet,
                } = self.gesture
                {
                    draw_marquee(&painter, &view, start_sheet, current_sheet);
                }
            });
        });
    }
}
