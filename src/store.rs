use std::collections::HashSet;

use crate::geometry::{self, BoxIn, DEADSPACE_IN};
use crate::model::{self, DesignFile, PlacedInstance, Rotation, SheetSize};
use crate::packing::{self, PACK_PADDING_IN};

const DEFAULT_SHEET_ID: &str = "22x12";
const DEFAULT_SNAP_IN: f32 = 0.25;
const MIN_DESIGN_IN: f32 = 0.25;

pub type ListenerId = u64;
pub type Listener = Box<dyn FnMut(&Snapshot)>;

/// Immutable copy of the store state handed to listeners and renderers.
/// Receivers must never assume it tracks later mutations.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub sheet: SheetSize,
    pub sheet_quantity: u32,
    pub designs: Vec<DesignFile>,
    pub instances: Vec<PlacedInstance>,
    pub selected: HashSet<u64>,
    pub selected_instance: Option<u64>,
    pub snap_increment: f32,
}

/// Result of an add-instances request. `max_instances` is the packing
/// engine's capacity upper bound so callers can clamp future quantity
/// requests; `placed` is what actually fit. An unknown design or sheet
/// yields the zero sentinel rather than an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PackOutcome {
    pub max_instances: usize,
    pub placed: usize,
}

/// One entry of an atomic batch move/rotate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstanceUpdate {
    pub id: u64,
    pub x_in: f32,
    pub y_in: f32,
    pub rotation: Rotation,
}

/// The single source of truth for the layout. Every mutator either commits a
/// consistent state and notifies subscribers, or leaves the state untouched;
/// no partial write is ever observable.
pub struct GangStore {
    sheet_size_id: String,
    sheet_quantity: u32,
    designs: Vec<DesignFile>,
    instances: Vec<PlacedInstance>,
    selected: HashSet<u64>,
    selected_instance: Option<u64>,
    snap_increment: f32,
    next_design_id: u64,
    next_instance_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: ListenerId,
}

impl Default for GangStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GangStore {
    pub fn new() -> Self {
        Self {
            sheet_size_id: DEFAULT_SHEET_ID.to_string(),
            sheet_quantity: 1,
            designs: Vec::new(),
            instances: Vec::new(),
            selected: HashSet::new(),
            selected_instance: None,
            snap_increment: DEFAULT_SNAP_IN,
            next_design_id: 1,
            next_instance_id: 1,
            listeners: Vec::new(),
            next_listener_id: 1,
        }
    }

    pub fn sheet(&self) -> SheetSize {
        model::sheet_by_id(&self.sheet_size_id)
            .unwrap_or_else(|| model::sheet_catalog().remove(0))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            sheet: self.sheet(),
            sheet_quantity: self.sheet_quantity,
            designs: self.designs.clone(),
            instances: self.instances.clone(),
            selected: self.selected.clone(),
            selected_instance: self.selected_instance,
            snap_increment: self.snap_increment,
        }
    }

    /// Registers a listener, invoking it immediately with the current
    /// snapshot and again after every committed mutation.
    pub fn subscribe(&mut self, mut listener: Listener) -> ListenerId {
        let snapshot = self.snapshot();
        listener(&snapshot);
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(lid, _)| *lid != id);
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }

    fn padded(instance: &PlacedInstance) -> BoxIn {
        geometry::padded_box(instance, DEADSPACE_IN)
    }

    fn fits_on_sheet(instance: &PlacedInstance, sheet: &SheetSize) -> bool {
        let b = Self::padded(instance);
        geometry::within_bounds(b.x, b.y, b.w, b.h, sheet.width_in, sheet.height_in)
    }

    fn collides<'a>(
        instance: &PlacedInstance,
        mut others: impl Iterator<Item = &'a PlacedInstance>,
    ) -> bool {
        let b = Self::padded(instance);
        others.any(|o| geometry::intersects(b, Self::padded(o)))
    }

    /// Drops selection entries whose instance no longer exists and keeps the
    /// legacy single selector consistent with the set.
    fn prune_selection(&mut self) {
        let live: HashSet<u64> = self.instances.iter().map(|i| i.id).collect();
        self.selected.retain(|id| live.contains(id));
        self.selected_instance = if self.selected.len() == 1 {
            self.selected.iter().copied().next()
        } else {
            None
        };
    }

    fn allocate_instance_id(&mut self) -> u64 {
        let id = self.next_instance_id;
        self.next_instance_id += 1;
        id
    }

    pub fn set_sheet_size(&mut self, id: &str) {
        if self.sheet_size_id == id || model::sheet_by_id(id).is_none() {
            return;
        }
        self.sheet_size_id = id.to_string();
        self.reorganize_all();
        self.notify();
    }

    /// Re-packs every design's instances at their current counts on the
    /// current sheet. Layout resets; counts shrink only if the new sheet has
    /// less room.
    fn reorganize_all(&mut self) {
        let sheet = self.sheet();
        let counts: Vec<(u64, usize)> = self
            .designs
            .iter()
            .map(|d| {
                (
                    d.id,
                    self.instances.iter().filter(|i| i.design_id == d.id).count(),
                )
            })
            .collect();
        self.instances.clear();
        for (design_id, count) in counts {
            if count == 0 {
                continue;
            }
            let Some(design) = self.designs.iter().find(|d| d.id == design_id).cloned() else {
                continue;
            };
            let occupied: Vec<BoxIn> = self.instances.iter().map(Self::padded).collect();
            let packed = packing::auto_pack(
                sheet.width_in,
                sheet.height_in,
                design.width_in,
                design.height_in,
                count,
                PACK_PADDING_IN,
                DEADSPACE_IN,
                true,
                &occupied,
            );
            self.commit_positions(&design, &packed.positions, &sheet);
        }
        self.prune_selection();
    }

    pub fn set_sheet_quantity(&mut self, quantity: u32) {
        let clamped = quantity.max(1);
        if self.sheet_quantity == clamped {
            return;
        }
        self.sheet_quantity = clamped;
        self.notify();
    }

    pub fn set_snap_increment(&mut self, increment: f32) {
        let clamped = increment.max(0.0);
        if (self.snap_increment - clamped).abs() <= f32::EPSILON {
            return;
        }
        self.snap_increment = clamped;
        self.notify();
    }

    /// Registers an uploaded artwork. When no physical size is supplied the
    /// design defaults to its natural pixels at 300 DPI.
    pub fn add_design_file(
        &mut self,
        name: &str,
        natural_width_px: u32,
        natural_height_px: u32,
        size_in: Option<(f32, f32)>,
    ) -> u64 {
        let (width_in, height_in) = size_in.unwrap_or((
            natural_width_px as f32 / model::REFERENCE_DPI,
            natural_height_px as f32 / model::REFERENCE_DPI,
        ));
        let id = self.next_design_id;
        self.next_design_id += 1;
        self.designs.push(DesignFile {
            id,
            name: name.to_string(),
            natural_width_px,
            natural_height_px,
            width_in: width_in.max(MIN_DESIGN_IN),
            height_in: height_in.max(MIN_DESIGN_IN),
        });
        self.notify();
        id
    }

    /// Changes a design's physical size. Already-placed instances keep their
    /// placement-time copy unless `reorganize` is set, in which case they are
    /// rescaled — a lone instance in place when still legal, otherwise the
    /// whole set is deleted and re-packed at the new size (layout resets).
    pub fn update_design_size(&mut self, id: u64, width_in: f32, height_in: f32, reorganize: bool) {
        let width_in = width_in.max(MIN_DESIGN_IN);
        let height_in = height_in.max(MIN_DESIGN_IN);
        let Some(design) = self.designs.iter_mut().find(|d| d.id == id) else {
            return;
        };
        let unchanged = (design.width_in - width_in).abs() <= f32::EPSILON
            && (design.height_in - height_in).abs() <= f32::EPSILON;
        if unchanged {
            return;
        }
        design.width_in = width_in;
        design.height_in = height_in;
        let design = design.clone();

        if reorganize {
            let count = self.instances.iter().filter(|i| i.design_id == id).count();
            if count == 1 {
                self.resize_single_instance(&design);
            } else if count > 1 {
                self.instances.retain(|i| i.design_id != id);
                self.pack_design(&design, count);
                self.prune_selection();
            }
        }
        self.notify();
    }

    /// Rescales the design's single instance in place when the result is
    /// still legal; falls back to re-packing it, dropping it only when no
    /// cell is free.
    fn resize_single_instance(&mut self, design: &DesignFile) {
        let sheet = self.sheet();
        let Some(idx) = self.instances.iter().position(|i| i.design_id == design.id) else {
            return;
        };
        let mut proposed = self.instances[idx];
        proposed.width_in = design.width_in;
        proposed.height_in = design.height_in;
        let others = self
            .instances
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != idx)
            .map(|(_, i)| i);
        if Self::fits_on_sheet(&proposed, &sheet) && !Self::collides(&proposed, others) {
            self.instances[idx] = proposed;
            return;
        }
        self.instances.remove(idx);
        self.pack_design(design, 1);
        self.prune_selection();
    }

    /// Removes the design and cascades to every instance referencing it;
    /// dangling references are never left behind.
    pub fn remove_design_file(&mut self, id: u64) {
        let before = self.designs.len();
        self.designs.retain(|d| d.id != id);
        if self.designs.len() == before {
            return;
        }
        self.instances.retain(|i| i.design_id != id);
        self.prune_selection();
        self.notify();
    }

    fn commit_positions(
        &mut self,
        design: &DesignFile,
        positions: &[packing::PackedPosition],
        sheet: &SheetSize,
    ) -> usize {
        let mut placed = 0;
        for p in positions {
            let instance = PlacedInstance {
                id: 0,
                design_id: design.id,
                x_in: p.x_in,
                y_in: p.y_in,
                width_in: design.width_in,
                height_in: design.height_in,
                rotation: p.rotation,
            };
            // Engine output is re-validated independently; a bad candidate is
            // dropped, not an error.
            if !Self::fits_on_sheet(&instance, sheet) {
                continue;
            }
            let id = self.allocate_instance_id();
            self.instances.push(PlacedInstance { id, ..instance });
            placed += 1;
        }
        placed
    }

    fn pack_design(&mut self, design: &DesignFile, quantity: usize) -> PackOutcome {
        let sheet = self.sheet();
        let occupied: Vec<BoxIn> = self
            .instances
            .iter()
            .filter(|i| i.design_id != design.id)
            .map(Self::padded)
            .collect();
        let packed = packing::auto_pack(
            sheet.width_in,
            sheet.height_in,
            design.width_in,
            design.height_in,
            quantity,
            PACK_PADDING_IN,
            DEADSPACE_IN,
            true,
            &occupied,
        );
        let placed = self.commit_positions(design, &packed.positions, &sheet);
        PackOutcome {
            max_instances: packed.capacity,
            placed,
        }
    }

    /// Places `quantity` copies of a design. With `auto_pack` the design's
    /// existing instances are first removed (repeated calls re-pack rather
    /// than accumulate) and the engine tiles around all other designs'
    /// instances; without it the loose scatter heuristic finds first-fit
    /// spots. Either way fewer than `quantity` may be placed.
    pub fn add_instances_for_design(
        &mut self,
        design_id: u64,
        quantity: usize,
        auto_pack: bool,
    ) -> PackOutcome {
        let Some(design) = self.designs.iter().find(|d| d.id == design_id).cloned() else {
            return PackOutcome::default();
        };
        let sheet = self.sheet();
        let outcome;
        if auto_pack {
            let had = self.instances.iter().any(|i| i.design_id == design_id);
            self.instances.retain(|i| i.design_id != design_id);
            outcome = self.pack_design(&design, quantity);
            if had || outcome.placed > 0 {
                self.prune_selection();
                self.notify();
            }
        } else {
            let occupied: Vec<BoxIn> = self.instances.iter().map(Self::padded).collect();
            let positions = packing::scatter_positions(
                sheet.width_in,
                sheet.height_in,
                design.width_in,
                design.height_in,
                quantity,
                DEADSPACE_IN,
                &occupied,
            );
            let placed = self.commit_positions(&design, &positions, &sheet);
            outcome = PackOutcome {
                max_instances: placed,
                placed,
            };
            if placed > 0 {
                self.notify();
            }
        }
        outcome
    }

    /// Atomic batch move/rotate: commits only when every update keeps its
    /// padded box on the sheet and clear of every other instance (updated or
    /// not). Otherwise the whole batch is rejected and nothing changes.
    /// Returns whether the batch was committed.
    pub fn update_instances(&mut self, updates: &[InstanceUpdate]) -> bool {
        if updates.is_empty() {
            return false;
        }
        let sheet = self.sheet();
        let mut proposed = self.instances.clone();
        let mut updated_idx = Vec::with_capacity(updates.len());
        for u in updates {
            let Some(idx) = proposed.iter().position(|i| i.id == u.id) else {
                return false;
            };
            proposed[idx].x_in = u.x_in;
            proposed[idx].y_in = u.y_in;
            proposed[idx].rotation = u.rotation;
            updated_idx.push(idx);
        }
        for &idx in &updated_idx {
            if !Self::fits_on_sheet(&proposed[idx], &sheet) {
                return false;
            }
            let others = proposed
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != idx)
                .map(|(_, i)| i);
            if Self::collides(&proposed[idx], others) {
                return false;
            }
        }
        self.instances = proposed;
        self.notify();
        true
    }

    pub fn set_selected_instance(&mut self, id: Option<u64>) {
        let next: HashSet<u64> = match id {
            Some(id) if self.instances.iter().any(|i| i.id == id) => [id].into_iter().collect(),
            Some(_) => return,
            None => HashSet::new(),
        };
        if next == self.selected {
            return;
        }
        self.selected = next;
        self.selected_instance = id;
        self.notify();
    }

    pub fn toggle_instance_selection(&mut self, id: u64) {
        if !self.instances.iter().any(|i| i.id == id) {
            return;
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        self.selected_instance = if self.selected.len() == 1 {
            self.selected.iter().copied().next()
        } else {
            None
        };
        self.notify();
    }

    pub fn set_instance_selection(&mut self, ids: &[u64]) {
        let live: HashSet<u64> = self.instances.iter().map(|i| i.id).collect();
        let next: HashSet<u64> = ids.iter().copied().filter(|id| live.contains(id)).collect();
        if next == self.selected {
            return;
        }
        self.selected_instance = if next.len() == 1 {
            next.iter().copied().next()
        } else {
            None
        };
        self.selected = next;
        self.notify();
    }

    pub fn delete_instances(&mut self, ids: &[u64]) {
        let doomed: HashSet<u64> = ids.iter().copied().collect();
        let before = self.instances.len();
        self.instances.retain(|i| !doomed.contains(&i.id));
        if self.instances.len() == before {
            return;
        }
        self.prune_selection();
        self.notify();
    }

    /// Explicit return to the initial state; subscriptions survive.
    pub fn reset(&mut self) {
        self.sheet_size_id = DEFAULT_SHEET_ID.to_string();
        self.sheet_quantity = 1;
        self.designs.clear();
        self.instances.clear();
        self.selected.clear();
        self.selected_instance = None;
        self.snap_increment = DEFAULT_SNAP_IN;
        self.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn store_with_design(w: f32, h: f32) -> (GangStore, u64) {
        let mut store = GangStore::new();
        let id = store.add_design_file("logo", 1200, 1200, Some((w, h)));
        (store, id)
    }

    fn assert_invariants(snapshot: &Snapshot) {
        for i in &snapshot.instances {
            let b = geometry::padded_box(i, DEADSPACE_IN);
            assert!(
                geometry::within_bounds(
                    b.x,
                    b.y,
                    b.w,
                    b.h,
                    snapshot.sheet.width_in,
                    snapshot.sheet.height_in
                ),
                "instance {} escapes the sheet",
                i.id
            );
            assert!(
                snapshot.designs.iter().any(|d| d.id == i.design_id),
                "instance {} dangles",
                i.id
            );
        }
        for (n, a) in snapshot.instances.iter().enumerate() {
            for b in &snapshot.instances[n + 1..] {
                assert!(
                    !geometry::intersects(
                        geometry::padded_box(a, DEADSPACE_IN),
                        geometry::padded_box(b, DEADSPACE_IN)
                    ),
                    "instances {} and {} overlap",
                    a.id,
                    b.id
                );
            }
        }
        for id in &snapshot.selected {
            assert!(snapshot.instances.iter().any(|i| i.id == *id));
        }
    }

    #[test]
    fn auto_pack_respects_capacity_and_invariants() {
        let (mut store, design) = store_with_design(4.0, 4.0);
        let outcome = store.add_instances_for_design(design, 20, true);
        assert_eq!(outcome.placed, 8);
        assert!(outcome.max_instances >= 8);
        assert_invariants(&store.snapshot());
    }

    #[test]
    fn repeated_auto_pack_does_not_accumulate() {
        let (mut store, design) = store_with_design(4.0, 4.0);
        store.add_instances_for_design(design, 5, true);
        store.add_instances_for_design(design, 5, true);
        assert_eq!(store.snapshot().instances.len(), 5);
    }

    #[test]
    fn unknown_design_returns_zero_sentinel() {
        let mut store = GangStore::new();
        let outcome = store.add_instances_for_design(99, 5, true);
        assert_eq!(outcome, PackOutcome::default());
    }

    #[test]
    fn drag_past_sheet_edge_is_rejected() {
        let (mut store, design) = store_with_design(4.0, 4.0);
        store.add_instances_for_design(design, 1, true);
        let before = store.snapshot();
        let inst = before.instances[0];
        let committed = store.update_instances(&[InstanceUpdate {
            id: inst.id,
            x_in: before.sheet.width_in - 1.0,
            y_in: inst.y_in,
            rotation: inst.rotation,
        }]);
        assert!(!committed);
        assert_eq!(store.snapshot().instances, before.instances);
    }

    #[test]
    fn group_update_is_all_or_nothing() {
        let (mut store, design) = store_with_design(4.0, 4.0);
        store.add_instances_for_design(design, 2, true);
        let before = store.snapshot();
        let a = before.instances[0];
        let b = before.instances[1];
        // First move is legal on its own; second lands off the sheet.
        let committed = store.update_instances(&[
            InstanceUpdate {
                id: a.id,
                x_in: a.x_in,
                y_in: a.y_in + 1.0,
                rotation: a.rotation,
            },
            InstanceUpdate {
                id: b.id,
                x_in: 30.0,
                y_in: b.y_in,
                rotation: b.rotation,
            },
        ]);
        assert!(!committed);
        assert_eq!(store.snapshot().instances, before.instances);
    }

    #[test]
    fn rotation_that_cannot_fit_leaves_state_unchanged() {
        // 11×2 strip: rotating makes it 2 wide × 11 tall, taller than the
        // 12in sheet once deadspace is added at y near the bottom.
        let (mut store, design) = store_with_design(11.0, 2.0);
        store.add_instances_for_design(design, 4, true);
        let before = store.snapshot();
        let last = *before.instances.last().unwrap();
        let committed = store.update_instances(&[InstanceUpdate {
            id: last.id,
            x_in: last.x_in,
            y_in: last.y_in,
            rotation: last.rotation.toggled(),
        }]);
        assert!(!committed);
        assert_eq!(store.snapshot().instances, before.instances);
    }

    #[test]
    fn removing_design_cascades_to_instances_and_selection() {
        let (mut store, design) = store_with_design(4.0, 4.0);
        store.add_instances_for_design(design, 3, true);
        let ids: Vec<u64> = store.snapshot().instances.iter().map(|i| i.id).collect();
        store.set_instance_selection(&ids);
        store.remove_design_file(design);
        let after = store.snapshot();
        assert!(after.instances.is_empty());
        assert!(after.selected.is_empty());
        assert_eq!(after.selected_instance, None);
        assert_invariants(&after);
    }

    #[test]
    fn sheet_quantity_clamps_to_one() {
        let mut store = GangStore::new();
        store.set_sheet_quantity(0);
        assert_eq!(store.snapshot().sheet_quantity, 1);
        store.set_sheet_quantity(12);
        assert_eq!(store.snapshot().sheet_quantity, 12);
    }

    #[test]
    fn legacy_single_selector_tracks_the_set() {
        let (mut store, design) = store_with_design(4.0, 4.0);
        store.add_instances_for_design(design, 2, true);
        let ids: Vec<u64> = store.snapshot().instances.iter().map(|i| i.id).collect();
        store.set_selected_instance(Some(ids[0]));
        assert_eq!(store.snapshot().selected_instance, Some(ids[0]));
        store.toggle_instance_selection(ids[1]);
        assert_eq!(store.snapshot().selected_instance, None);
        store.toggle_instance_selection(ids[0]);
        assert_eq!(store.snapshot().selected_instance, Some(ids[1]));
        store.set_instance_selection(&[]);
        assert_eq!(store.snapshot().selected_instance, None);
        assert!(store.snapshot().selected.is_empty());
    }

    #[test]
    fn reorganize_resets_layout_at_new_size() {
        let (mut store, design) = store_with_design(4.0, 4.0);
        store.add_instances_for_design(design, 8, true);
        store.update_design_size(design, 6.0, 6.0, true);
        let after = store.snapshot();
        // 6in cells: 3 cols × 1 row on 22×12.
        assert_eq!(after.instances.len(), 3);
        for i in &after.instances {
            assert_eq!(i.width_in, 6.0);
        }
        assert_invariants(&after);
    }

    #[test]
    fn size_change_without_reorganize_keeps_placements() {
        let (mut store, design) = store_with_design(4.0, 4.0);
        store.add_instances_for_design(design, 2, true);
        let before = store.snapshot().instances;
        store.update_design_size(design, 5.0, 5.0, false);
        assert_eq!(store.snapshot().instances, before);
    }

    #[test]
    fn sheet_size_change_repacks_what_fits() {
        let (mut store, design) = store_with_design(4.0, 4.0);
        store.add_instances_for_design(design, 8, true);
        store.set_sheet_size("22x24");
        let after = store.snapshot();
        assert_eq!(after.sheet.id, "22x24");
        assert_eq!(after.instances.len(), 8);
        assert_invariants(&after);
    }

    #[test]
    fn subscribers_get_immediate_and_post_commit_snapshots() {
        let (mut store, design) = store_with_design(4.0, 4.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = store.subscribe(Box::new(move |s| {
            sink.borrow_mut().push(s.instances.len());
        }));
        assert_eq!(*seen.borrow(), vec![0]);
        store.add_instances_for_design(design, 2, true);
        assert_eq!(*seen.borrow(), vec![0, 2]);
        // A rejected mutation never notifies.
        store.update_instances(&[InstanceUpdate {
            id: 999,
            x_in: 0.0,
            y_in: 0.0,
            rotation: Rotation::Deg0,
        }]);
        assert_eq!(seen.borrow().len(), 2);
        store.unsubscribe(id);
        store.delete_instances(&store.snapshot().instances.iter().map(|i| i.id).collect::<Vec<_>>());
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn scatter_mode_appends_without_removing() {
        let (mut store, design) = store_with_design(4.0, 4.0);
        store.add_instances_for_design(design, 2, false);
        store.add_instances_for_design(design, 2, false);
        let after = store.snapshot();
        assert_eq!(after.instances.len(), 4);
        assert_invariants(&after);
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let (mut store, design) = store_with_design(4.0, 4.0);
        store.add_instances_for_design(design, 3, true);
        store.set_sheet_quantity(7);
        store.reset();
        let after = store.snapshot();
        assert!(after.designs.is_empty());
        assert!(after.instances.is_empty());
        assert_eq!(after.sheet_quantity, 1);
        assert_eq!(after.sheet.id, "22x12");
    }
}
