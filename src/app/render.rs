use crate::geometry;
use crate::model::{Rotation, SheetSize};
use crate::store::Snapshot;
use eframe::egui;
use std::collections::HashMap;

use super::SheetView;

pub(super) fn draw_sheet(painter: &egui::Painter, view: &SheetView, sheet: &SheetSize) {
    let rect = view.rect_to_screen(geometry::BoxIn::new(
        0.0,
        0.0,
        sheet.width_in,
        sheet.height_in,
    ));
    painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::from_rgb(160, 160, 160)),
        egui::StrokeKind::Middle,
    );
}

pub(super) fn draw_grid(
    painter: &egui::Painter,
    view: &SheetView,
    sheet: &SheetSize,
    increment: f32,
) {
    if increment <= 0.0 {
        return;
    }
    let stroke = egui::Stroke::new(0.5, egui::Color32::from_rgb(225, 230, 238));
    let mut x = increment;
    while x < sheet.width_in {
        painter.line_segment(
            [view.to_screen(x, 0.0), view.to_screen(x, sheet.height_in)],
            stroke,
        );
        x += increment;
    }
    let mut y = increment;
    while y < sheet.height_in {
        painter.line_segment(
            [view.to_screen(0.0, y), view.to_screen(sheet.width_in, y)],
            stroke,
        );
        y += increment;
    }
}

pub(super) fn draw_instances(
    painter: &egui::Painter,
    view: &SheetView,
    snapshot: &Snapshot,
    textures: &HashMap<u64, egui::TextureHandle>,
) {
    for instance in &snapshot.instances {
        // The image always spans the unrotated artwork rect; rotation is a
        // vertex transform about the rect's center.
        let art_rect = view.rect_to_screen(geometry::BoxIn::new(
            instance.x_in,
            instance.y_in,
            instance.width_in,
            instance.height_in,
        ));
        match textures.get(&instance.design_id) {
            Some(handle) => {
                let mut mesh = egui::Mesh::with_texture(handle.id());
                mesh.add_rect_with_uv(
                    art_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
                if instance.rotation == Rotation::Deg90 {
                    let center = art_rect.center();
                    let angle = std::f32::consts::FRAC_PI_2;
                    let sin = angle.sin();
                    let cos = angle.cos();
                    for vertex in &mut mesh.vertices {
                        let v = vertex.pos - center;
                        let rotated = egui::pos2(v.x * cos - v.y * sin, v.x * sin + v.y * cos);
                        vertex.pos = center + rotated.to_vec2();
                    }
                }
                painter.add(egui::Shape::mesh(mesh));
            }
            None => {
                let footprint = view.rect_to_screen(geometry::footprint_box(instance));
                painter.rect_filled(footprint, 2.0, egui::Color32::from_rgb(210, 210, 215));
                let name = snapshot
                    .designs
                    .iter()
                    .find(|d| d.id == instance.design_id)
                    .map(|d| d.name.as_str())
                    .unwrap_or("…");
                painter.text(
                    footprint.center(),
                    egui::Align2::CENTER_CENTER,
                    name,
                    egui::FontId::proportional(12.0),
                    egui::Color32::from_rgb(90, 90, 95),
                );
            }
        }

        if snapshot.selected.contains(&instance.id) {
            let footprint = view.rect_to_screen(geometry::footprint_box(instance));
            painter.rect_stroke(
                footprint,
                0.0,
                egui::Stroke::new(2.0, egui::Color32::from_rgb(90, 160, 255)),
                egui::StrokeKind::Middle,
            );
        }
    }
}

pub(super) fn draw_marquee(
    painter: &egui::Painter,
    view: &SheetView,
    start: (f32, f32),
    current: (f32, f32),
) {
    let rect = egui::Rect::from_two_pos(
        view.to_screen(start.0, start.1),
        view.to_screen(current.0, current.1),
    );
    painter.rect_filled(rect, 0.0, egui::Color32::from_rgba_unmultiplied(90, 160, 255, 24));
    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::from_rgb(90, 160, 255)),
        egui::StrokeKind::Middle,
    );
}
