use crate::checkout;
use crate::geometry;
use crate::model;
use crate::store;
use eframe::egui;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::mpsc;

mod interaction;
mod render;
mod settings;
mod update;
mod uploads;

/// Pointer travel before a press commits to a drag instead of a click.
pub(super) const DRAG_THRESHOLD_PX: f32 = 4.0;
pub(super) const MIN_ZOOM: f32 = 0.25;
pub(super) const CANVAS_MARGIN_PX: f32 = 24.0;
/// Center-out search used when a rotation does not fit in place.
pub(super) const NUDGE_STEP_IN: f32 = 0.25;
pub(super) const NUDGE_RADIUS_IN: f32 = 1.5;

/// Pointer gesture state. A press starts `Pending`; crossing the drag
/// threshold resolves it into a drag or marquee, releasing before that
/// resolves it into a click.
#[derive(Clone, Debug)]
enum Gesture {
    Idle,
    Pending {
        hit: Option<u64>,
        additive: bool,
        press_screen: egui::Pos2,
    },
    DragInstances {
        origins: Vec<DragOrigin>,
        press_sheet: (f32, f32),
    },
    Marquee {
        start_sheet: (f32, f32),
        current_sheet: (f32, f32),
    },
}

/// Placement captured at drag start. Drag deltas apply to these, never to the
/// instances' latest positions, so a group drag stays rigid.
#[derive(Clone, Copy, Debug)]
struct DragOrigin {
    id: u64,
    x_in: f32,
    y_in: f32,
    rotation: model::Rotation,
}

/// Maps sheet inches to screen pixels for the current frame.
#[derive(Clone, Copy, Debug)]
struct SheetView {
    origin: egui::Pos2,
    zoom: f32,
}

impl SheetView {
    fn scale(&self) -> f32 {
        geometry::PX_PER_IN * self.zoom
    }

    fn to_screen(&self, x_in: f32, y_in: f32) -> egui::Pos2 {
        self.origin + egui::vec2(x_in * self.scale(), y_in * self.scale())
    }

    fn to_sheet(&self, screen: egui::Pos2) -> (f32, f32) {
        let v = (screen - self.origin) / self.scale();
        (v.x, v.y)
    }

    fn rect_to_screen(&self, b: geometry::BoxIn) -> egui::Rect {
        egui::Rect::from_min_size(
            self.to_screen(b.x, b.y),
            egui::vec2(b.w * self.scale(), b.h * self.scale()),
        )
    }
}

pub struct GangApp {
    store: store::GangStore,
    snapshot: store::Snapshot,
    mailbox: Rc<RefCell<Option<store::Snapshot>>>,
    gesture: Gesture,
    zoom: f32,
    textures: HashMap<u64, egui::TextureHandle>,
    uploads_tx: mpsc::Sender<uploads::UploadResult>,
    uploads_rx: mpsc::Receiver<uploads::UploadResult>,
    upload_generation: u64,
    pending_uploads: usize,
    quantity_inputs: HashMap<u64, usize>,
    size_inputs: HashMap<u64, (f32, f32)>,
    settings_path: String,
    show_grid: bool,
    repack_on_resize: bool,
    export_path: String,
    status: Option<String>,
}

impl GangApp {
    fn config_path() -> Option<String> {
        if let Some(home) = std::env::var_os("HOME") {
            let path = std::path::PathBuf::from(home).join(".config").join("gangsheet.toml");
            if path.exists() {
                return Some(path.display().to_string());
            }
        }
        if std::path::Path::new("settings.toml").exists() {
            return Some("settings.toml".to_string());
        }
        None
    }

    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings_path = Self::config_path().unwrap_or_else(|| "settings.toml".to_string());
        let settings = settings::load_settings(&settings_path)
            .or_else(|| settings::load_settings("settings.json"))
            .unwrap_or_default();

        let mut store = store::GangStore::new();
        store.set_snap_increment(settings.snap_increment);

        let mailbox: Rc<RefCell<Option<store::Snapshot>>> = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&mailbox);
        store.subscribe(Box::new(move |s| {
            *sink.borrow_mut() = Some(s.clone());
        }));
        let snapshot = mailbox
            .borrow_mut()
            .take()
            .unwrap_or_else(|| store.snapshot());

        let (uploads_tx, uploads_rx) = mpsc::channel();

        Self {
            store,
            snapshot,
            mailbox,
            gesture: Gesture::Idle,
            zoom: 1.0,
            textures: HashMap::new(),
            uploads_tx,
            uploads_rx,
            upload_generation: 0,
            pending_uploads: 0,
            quantity_inputs: HashMap::new(),
            size_inputs: HashMap::new(),
            settings_path,
            show_grid: settings.show_grid,
            repack_on_resize: true,
            export_path: settings.export_path,
            status: None,
        }
    }

    /// Pulls the listener's latest snapshot into the frame-local copy.
    fn drain_mailbox(&mut self) {
        if let Some(snapshot) = self.mailbox.borrow_mut().take() {
            self.snapshot = snapshot;
        }
    }

    fn persist_settings(&mut self) {
        let settings = settings::AppSettings {
            snap_increment: self.snapshot.snap_increment,
            show_grid: self.show_grid,
            export_path: self.export_path.clone(),
        };
        if let Err(e) = settings::save_settings(&self.settings_path, &settings) {
            self.status = Some(format!("Failed to save settings: {e}"));
        }
    }

    fn submit_order(&mut self) {
        let payload = checkout::build_order_payload(&self.snapshot);
        let mut service = checkout::JsonFileCheckout::new(&self.export_path);
        match checkout::CheckoutService::submit(&mut service, &payload) {
            Ok(message) => self.status = Some(message),
            Err(e) => self.status = Some(e),
        }
    }

    fn max_zoom(&self, viewport: egui::Vec2) -> f32 {
        max_zoom_for(viewport.x, self.snapshot.sheet.width_in)
    }
}

/// Largest zoom at which the rendered sheet still fits the viewport width,
/// never below the fixed minimum. The canvas pass clamps the frame's zoom
/// to this, so wide viewports may settle above the slider's top end.
fn max_zoom_for(viewport_w: f32, sheet_w_in: f32) -> f32 {
    let sheet_w_px = geometry::to_pixels(sheet_w_in);
    if sheet_w_px <= 0.0 {
        return MIN_ZOOM;
    }
    ((viewport_w - CANVAS_MARGIN_PX * 2.0) / sheet_w_px).max(MIN_ZOOM)
}
