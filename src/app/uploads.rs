use eframe::egui;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use super::GangApp;

pub(super) struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub(super) struct UploadResult {
    pub generation: u64,
    pub name: String,
    pub outcome: Result<DecodedImage, String>,
}

/// Decodes one file off the UI thread. The result lands in the channel and a
/// repaint is requested so the frame that picks it up runs promptly.
fn spawn_decode(
    path: PathBuf,
    generation: u64,
    tx: mpsc::Sender<UploadResult>,
    ctx: egui::Context,
) {
    std::thread::spawn(move || {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        let outcome = decode_file(&path);
        let _ = tx.send(UploadResult {
            generation,
            name,
            outcome,
        });
        ctx.request_repaint();
    });
}

fn decode_file(path: &Path) -> Result<DecodedImage, String> {
    let bytes =
        std::fs::read(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let img = image::load_from_memory(&bytes)
        .map_err(|e| format!("Failed to decode {}: {e}", path.display()))?;
    let rgba = img.to_rgba8();
    Ok(DecodedImage {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

impl GangApp {
    pub(super) fn upload_dialog(&mut self, ctx: &egui::Context) {
        let files = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg"])
            .pick_files();
        if let Some(paths) = files {
            for path in paths {
                self.pending_uploads += 1;
                spawn_decode(
                    path,
                    self.upload_generation,
                    self.uploads_tx.clone(),
                    ctx.clone(),
                );
            }
        }
    }

    /// Applies finished decodes. Results from before the last reset carry a
    /// stale generation and are dropped without touching the store.
    pub(super) fn poll_uploads(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.uploads_rx.try_recv() {
            self.pending_uploads = self.pending_uploads.saturating_sub(1);
            if result.generation != self.upload_generation {
                continue;
            }
            match result.outcome {
                Ok(img) => {
                    let id =
                        self.store
                            .add_design_file(&result.name, img.width, img.height, None);
                    self.drain_mailbox();
                    let color = egui::ColorImage::from_rgba_unmultiplied(
                        [img.width as usize, img.height as usize],
                        &img.rgba,
                    );
                    let handle = ctx.load_texture(
                        format!("design-{id}"),
                        color,
                        egui::TextureOptions::LINEAR,
                    );
                    self.textures.insert(id, handle);
                    self.status = Some(format!("Added {}", result.name));
                }
                Err(e) => self.status = Some(e),
            }
        }
        // Textures for removed designs are released.
        let snapshot = &self.snapshot;
        self.textures
            .retain(|id, _| snapshot.designs.iter().any(|d| d.id == *id));
    }
}
