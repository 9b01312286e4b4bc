use crate::geometry;
use crate::model::PlacedInstance;
use crate::store::{GangStore, InstanceUpdate};
use eframe::egui;

use super::{
    DRAG_THRESHOLD_PX, DragOrigin, GangApp, Gesture, NUDGE_RADIUS_IN, NUDGE_STEP_IN, SheetView,
};

impl GangApp {
    /// Topmost instance whose rotated footprint contains the point. Later
    /// entries draw on top, so the scan runs back to front.
    fn hit_test(&self, x_in: f32, y_in: f32) -> Option<u64> {
        self.snapshot
            .instances
            .iter()
            .rev()
            .find(|i| {
                let b = geometry::footprint_box(i);
                x_in >= b.x && x_in <= b.x + b.w && y_in >= b.y && y_in <= b.y + b.h
            })
            .map(|i| i.id)
    }

    pub(super) fn handle_canvas_input(
        &mut self,
        ctx: &egui::Context,
        response: &egui::Response,
        view: &SheetView,
    ) {
        let pointer = ctx.input(|i| i.pointer.interact_pos());
        let pressed = response.hovered() && ctx.input(|i| i.pointer.primary_pressed());
        let released = ctx.input(|i| i.pointer.primary_released());
        let additive = ctx.input(|i| i.modifiers.shift || i.modifiers.command || i.modifiers.ctrl);

        if pressed {
            if let Some(pos) = pointer {
                let (x_in, y_in) = view.to_sheet(pos);
                self.gesture = Gesture::Pending {
                    hit: self.hit_test(x_in, y_in),
                    additive,
                    press_screen: pos,
                };
            }
        }

        // Threshold crossing turns a pending press into a drag or marquee.
        if let Gesture::Pending {
            hit,
            additive,
            press_screen,
        } = self.gesture
        {
            if let Some(pos) = pointer {
                if !released && (pos - press_screen).length() >= DRAG_THRESHOLD_PX {
                    match hit {
                        Some(id) => {
                            if !self.snapshot.selected.contains(&id) {
                                if additive {
                                    self.store.toggle_instance_selection(id);
                                } else {
                                    self.store.set_selected_instance(Some(id));
                                }
                                self.drain_mailbox();
                            }
                            let origins: Vec<DragOrigin> = self
                                .snapshot
                                .instances
                                .iter()
                                .filter(|i| self.snapshot.selected.contains(&i.id))
                                .map(|i| DragOrigin {
                                    id: i.id,
                                    x_in: i.x_in,
                                    y_in: i.y_in,
                                    rotation: i.rotation,
                                })
                                .collect();
                            self.gesture = Gesture::DragInstances {
                                origins,
                                press_sheet: view.to_sheet(press_screen),
                            };
                        }
                        None => {
                            self.store.set_instance_selection(&[]);
                            self.drain_mailbox();
                            self.gesture = Gesture::Marquee {
                                start_sheet: view.to_sheet(press_screen),
                                current_sheet: view.to_sheet(pos),
                            };
                        }
                    }
                }
            }
        }

        let mut gesture = std::mem::replace(&mut self.gesture, Gesture::Idle);
        let mut finished = false;
        match &mut gesture {
            Gesture::DragInstances {
                origins,
                press_sheet,
            } => {
                if let Some(pos) = pointer {
                    let (cx, cy) = view.to_sheet(pos);
                    let dx = cx - press_sheet.0;
                    let dy = cy - press_sheet.1;
                    // Snap the anchor's destination and move the rest by the
                    // same delta so the group stays rigid.
                    let (sdx, sdy) = match origins.first() {
                        Some(a) => (
                            geometry::snap(a.x_in + dx, self.snapshot.snap_increment) - a.x_in,
                            geometry::snap(a.y_in + dy, self.snapshot.snap_increment) - a.y_in,
                        ),
                        None => (dx, dy),
                    };
                    let updates: Vec<InstanceUpdate> = origins
                        .iter()
                        .map(|o| InstanceUpdate {
                            id: o.id,
                            x_in: o.x_in + sdx,
                            y_in: o.y_in + sdy,
                            rotation: o.rotation,
                        })
                        .collect();
                    // An illegal frame is dropped silently; the instances
                    // simply hold their last committed position.
                    self.store.update_instances(&updates);
                    self.drain_mailbox();
                }
                finished = released;
            }
            Gesture::Marquee {
                start_sheet,
                current_sheet,
            } => {
                if let Some(pos) = pointer {
                    *current_sheet = view.to_sheet(pos);
                }
                if released {
                    let ids =
                        ids_in_marquee(&self.snapshot.instances, *start_sheet, *current_sheet);
                    self.store.set_instance_selection(&ids);
                    self.drain_mailbox();
                    finished = true;
                }
            }
            Gesture::Pending { hit, additive, .. } => {
                if released {
                    match hit {
                        Some(id) => {
                            if *additive {
                                self.store.toggle_instance_selection(*id);
                            } else {
                                self.store.set_selected_instance(Some(*id));
                            }
                        }
                        None => self.store.set_selected_instance(None),
                    }
                    self.drain_mailbox();
                    finished = true;
                }
            }
            Gesture::Idle => {}
        }
        self.gesture = if finished { Gesture::Idle } else { gesture };
    }

    /// Toggles the whole selection's orientation at once. When the turned
    /// boxes do not fit in place, the same center-out grid of offsets is
    /// tried against the entire group; if no offset works the rotation is
    /// discarded and nothing moves.
    pub(super) fn rotate_selected(&mut self) {
        let targets: Vec<PlacedInstance> = self
            .snapshot
            .instances
            .iter()
            .filter(|i| self.snapshot.selected.contains(&i.id))
            .copied()
            .collect();
        if targets.is_empty() {
            return;
        }
        if rotate_group(&mut self.store, &targets) {
            self.drain_mailbox();
        } else {
            self.status = Some("No room to rotate the selection".to_string());
        }
    }

    pub(super) fn nudge_selected(&mut self, dx_in: f32, dy_in: f32) {
        let updates: Vec<InstanceUpdate> = self
            .snapshot
            .instances
            .iter()
            .filter(|i| self.snapshot.selected.contains(&i.id))
            .map(|i| InstanceUpdate {
                id: i.id,
                x_in: i.x_in + dx_in,
                y_in: i.y_in + dy_in,
                rotation: i.rotation,
            })
            .collect();
        if !updates.is_empty() {
            self.store.update_instances(&updates);
            self.drain_mailbox();
        }
    }

    pub(super) fn delete_selected(&mut self) {
        let ids: Vec<u64> = self.snapshot.selected.iter().copied().collect();
        if !ids.is_empty() {
            self.store.delete_instances(&ids);
            self.drain_mailbox();
        }
    }
}

/// Instances whose padded box overlaps the marquee rectangle. The result
/// replaces the selection outright.
fn ids_in_marquee(instances: &[PlacedInstance], a: (f32, f32), b: (f32, f32)) -> Vec<u64> {
    let marquee = geometry::BoxIn::new(
        a.0.min(b.0),
        a.1.min(b.1),
        (a.0 - b.0).abs(),
        (a.1 - b.1).abs(),
    );
    instances
        .iter()
        .filter(|i| {
            geometry::intersects(geometry::padded_box(i, geometry::DEADSPACE_IN), marquee)
        })
        .map(|i| i.id)
        .collect()
}

/// Tries to toggle every target's orientation with one shared displacement,
/// walking the center-out offset grid until the store accepts the batch.
/// Returns false with the store untouched when no offset fits the whole
/// group.
fn rotate_group(store: &mut GangStore, targets: &[PlacedInstance]) -> bool {
    for (dx, dy) in nudge_offsets(NUDGE_STEP_IN, NUDGE_RADIUS_IN) {
        let updates: Vec<InstanceUpdate> = targets
            .iter()
            .map(|i| InstanceUpdate {
                id: i.id,
                x_in: i.x_in + dx,
                y_in: i.y_in + dy,
                rotation: i.rotation.toggled(),
            })
            .collect();
        if store.update_instances(&updates) {
            return true;
        }
    }
    false
}

/// Candidate displacements for the rotate-in-place search: multiples of
/// `step` within `radius`, nearest first, with the zero offset leading.
fn nudge_offsets(step: f32, radius: f32) -> Vec<(f32, f32)> {
    let n = (radius / step).floor() as i32;
    let mut offsets = Vec::new();
    for iy in -n..=n {
        for ix in -n..=n {
            let dx = ix as f32 * step;
            let dy = iy as f32 * step;
            if (dx * dx + dy * dy).sqrt() <= radius + 1e-6 {
                offsets.push((dx, dy));
            }
        }
    }
    offsets.sort_by(|a, b| {
        let da = a.0 * a.0 + a.1 * a.1;
        let db = b.0 * b.0 + b.1 * b.1;
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    });
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rotation;

    fn instance(id: u64, x: f32, y: f32, w: f32, h: f32) -> PlacedInstance {
        PlacedInstance {
            id,
            design_id: 1,
            x_in: x,
            y_in: y,
            width_in: w,
            height_in: h,
            rotation: Rotation::Deg0,
        }
    }

    #[test]
    fn nudge_offsets_start_at_zero_and_grow_outward() {
        let offsets = nudge_offsets(NUDGE_STEP_IN, NUDGE_RADIUS_IN);
        assert_eq!(offsets[0], (0.0, 0.0));
        let mut last = 0.0f32;
        for (dx, dy) in &offsets {
            let d = (dx * dx + dy * dy).sqrt();
            assert!(d >= last - 1e-6);
            assert!(d <= NUDGE_RADIUS_IN + 1e-5);
            last = d;
        }
    }

    #[test]
    fn marquee_selects_overlapping_footprints_either_drag_direction() {
        let instances = vec![
            instance(1, 0.0, 0.0, 2.0, 2.0),
            instance(2, 5.0, 5.0, 2.0, 2.0),
            instance(3, 10.0, 0.0, 2.0, 2.0),
        ];
        let forward = ids_in_marquee(&instances, (1.0, 1.0), (6.0, 6.0));
        assert_eq!(forward, vec![1, 2]);
        let backward = ids_in_marquee(&instances, (6.0, 6.0), (1.0, 1.0));
        assert_eq!(backward, vec![1, 2]);
        let empty = ids_in_marquee(&instances, (3.0, 3.0), (4.0, 4.0));
        assert!(empty.is_empty());
    }

    #[test]
    fn marquee_over_whole_sheet_selects_everything() {
        let instances = vec![
            instance(1, 0.5, 0.5, 2.0, 2.0),
            instance(2, 19.5, 0.5, 2.0, 2.0),
            instance(3, 0.5, 9.5, 2.0, 2.0),
            instance(4, 19.5, 9.5, 2.0, 2.0),
        ];
        let all = ids_in_marquee(&instances, (0.0, 0.0), (22.0, 12.0));
        assert_eq!(all, vec![1, 2, 3, 4]);
    }

    #[test]
    fn group_rotation_without_room_leaves_the_store_unchanged() {
        let mut store = GangStore::new();
        // Four 11×2 banners stack in one column; turned upright they are
        // taller than any shared offset can bring back onto the sheet.
        let design = store.add_design_file("banner", 3300, 600, Some((11.0, 2.0)));
        store.add_instances_for_design(design, 4, true);
        let before = store.snapshot();
        assert_eq!(before.instances.len(), 4);
        let targets: Vec<PlacedInstance> = before.instances.clone();
        assert!(!rotate_group(&mut store, &targets));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn square_group_rotates_in_place() {
        let mut store = GangStore::new();
        let design = store.add_design_file("patch", 1200, 1200, Some((4.0, 4.0)));
        store.add_instances_for_design(design, 2, true);
        let targets: Vec<PlacedInstance> = store.snapshot().instances.clone();
        assert!(rotate_group(&mut store, &targets));
        for i in store.snapshot().instances {
            assert_eq!(i.rotation, Rotation::Deg90);
        }
    }

    #[test]
    fn marquee_uses_rotated_padded_box() {
        let mut tall = instance(1, 4.0, 4.0, 1.0, 6.0);
        tall.rotation = Rotation::Deg90;
        // Rotated about its center (4.5, 7.0) the strip spans x 1.5..7.5.
        let hit = ids_in_marquee(&[tall], (2.0, 6.5), (3.0, 7.5));
        assert_eq!(hit, vec![1]);
        let miss = ids_in_marquee(&[tall], (4.1, 0.0), (4.9, 3.0));
        assert!(miss.is_empty());
    }
}
