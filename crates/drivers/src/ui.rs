use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use eframe::egui::{self, Color32, RichText, TextureHandle};
use restyle_application::{
    reduce, submit_allowed, Effect, FormEvent, FormState, ImageProcessor, PreviewDecoder,
};
use restyle_domain::{Operation, PreviewImage, ProcessRequest, ProcessedImage, Theme};

const WINDOW_TITLE: &str = "AI Image Processor";
const PREVIEW_MAX_WIDTH: f32 = 460.0;

pub fn launch_window(
    processor: Arc<dyn ImageProcessor>,
    decoder: Arc<dyn PreviewDecoder>,
) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1080.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(RestyleApp::new(processor, decoder)))),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}

struct CachedTexture {
    version: u64,
    handle: TextureHandle,
}

pub struct RestyleApp {
    state: FormState,
    processor: Arc<dyn ImageProcessor>,
    decoder: Arc<dyn PreviewDecoder>,
    tx: Sender<FormEvent>,
    rx: Receiver<FormEvent>,
    shutdown: Arc<AtomicBool>,
    original_texture: Option<CachedTexture>,
    processed_texture: Option<CachedTexture>,
}

impl RestyleApp {
    fn new(processor: Arc<dyn ImageProcessor>, decoder: Arc<dyn PreviewDecoder>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            state: FormState::default(),
            processor,
            decoder,
            tx,
            rx,
            shutdown: Arc::new(AtomicBool::new(false)),
            original_texture: None,
            processed_texture: None,
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, event: FormEvent) {
        let (next, effects) = reduce(std::mem::take(&mut self.state), event);
        self.state = next;
        for effect in effects {
            self.run_effect(ctx, effect);
        }
    }

    fn drain_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.rx.try_recv() {
            self.dispatch(ctx, event);
        }
    }

    fn run_effect(&mut self, ctx: &egui::Context, effect: Effect) {
        match effect {
            Effect::LoadPreview { generation, path } => {
                self.spawn_load_preview(ctx, generation, path);
            }
            Effect::SendRequest {
                submission,
                request,
            } => {
                self.spawn_send_request(ctx, submission, request);
            }
        }
    }

    fn spawn_load_preview(&self, ctx: &egui::Context, generation: u64, path: PathBuf) {
        let decoder = self.decoder.clone();
        let tx = self.tx.clone();
        let shutdown = self.shutdown.clone();
        let ctx = ctx.clone();
        thread::spawn(move || {
            let result = decoder.load_from_path(&path);
            if let Err(error) = &result {
                log::warn!("preview load failed for {}: {error}", path.display());
            }
            if shutdown.load(Ordering::Relaxed) {
                return;
            }
            let _ = tx.send(FormEvent::PreviewLoaded { generation, result });
            ctx.request_repaint();
        });
    }

    fn spawn_send_request(&self, ctx: &egui::Context, submission: u64, request: ProcessRequest) {
        let processor = self.processor.clone();
        let decoder = self.decoder.clone();
        let tx = self.tx.clone();
        let shutdown = self.shutdown.clone();
        let ctx = ctx.clone();
        thread::spawn(move || {
            let result = processor.process(&request).and_then(|bytes| {
                let preview = decoder.decode_bytes(&bytes)?;
                Ok(ProcessedImage { bytes, preview })
            });
            if let Err(error) = &result {
                log::warn!("{} request failed: {error}", request.operation.key());
            }
            if shutdown.load(Ordering::Relaxed) {
                return;
            }
            let _ = tx.send(FormEvent::ResponseArrived { submission, result });
            ctx.request_repaint();
        });
    }

    fn render_form(&self, ui: &mut egui::Ui, pending: &mut Vec<FormEvent>) {
        ui.add_space(8.0);
        ui.label(RichText::new("Upload Image").strong());
        ui.horizontal(|ui| {
            if ui.button("Choose file...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "webp"])
                    .pick_file()
                {
                    pending.push(FormEvent::FileChosen(path));
                }
            }
            match &self.state.selected_image {
                Some(source) => ui.label(&source.file_name),
                None => ui.label(RichText::new("no file selected").weak()),
            };
        });

        ui.add_space(8.0);
        ui.label(RichText::new("Prompt").strong());
        let mut prompt = self.state.prompt.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut prompt).hint_text("Describe your desired image..."),
        );
        if response.changed() {
            pending.push(FormEvent::PromptEdited(prompt));
        }

        ui.add_space(8.0);
        ui.label(RichText::new("Theme").strong());
        let mut theme = self.state.theme;
        egui::ComboBox::from_id_salt("theme_select")
            .selected_text(theme.label())
            .show_ui(ui, |ui| {
                for candidate in Theme::ALL {
                    ui.selectable_value(&mut theme, candidate, candidate.label());
                }
            });
        if theme != self.state.theme {
            pending.push(FormEvent::ThemePicked(theme));
        }

        ui.add_space(8.0);
        ui.label(RichText::new("Operation").strong());
        let mut operation = self.state.operation;
        egui::ComboBox::from_id_salt("operation_select")
            .selected_text(operation.label())
            .show_ui(ui, |ui| {
                for candidate in Operation::ALL {
                    ui.selectable_value(&mut operation, candidate, candidate.label());
                }
            });
        if operation != self.state.operation {
            pending.push(FormEvent::OperationPicked(operation));
        }

        ui.add_space(16.0);
        let submit = ui.add_enabled(
            submit_allowed(&self.state),
            egui::Button::new(if self.state.in_flight {
                "Processing..."
            } else {
                "Process Image"
            }),
        );
        if submit.clicked() {
            pending.push(FormEvent::SubmitPressed);
        }
        if self.state.in_flight {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label("Processing...");
            });
        }

        if let Some(error) = &self.state.error_message {
            ui.add_space(8.0);
            ui.colored_label(Color32::LIGHT_RED, error);
        }
    }

    fn render_previews(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            if let Some(preview) = &self.state.image_preview {
                ui.label(RichText::new("Original Image").heading());
                let texture = texture_for(
                    ui.ctx(),
                    &mut self.original_texture,
                    "original",
                    self.state.preview_generation,
                    preview,
                );
                ui.add(egui::Image::from_texture(&texture).max_width(PREVIEW_MAX_WIDTH));
                ui.add_space(16.0);
            }

            if let Some(processed) = &self.state.processed_image {
                ui.label(RichText::new("Processed Image").heading());
                let texture = texture_for(
                    ui.ctx(),
                    &mut self.processed_texture,
                    "processed",
                    self.state.submission,
                    &processed.preview,
                );
                ui.add(egui::Image::from_texture(&texture).max_width(PREVIEW_MAX_WIDTH));
                if ui.button("Save...").clicked() {
                    save_processed_image(&processed.bytes);
                }
            }

            if self.state.image_preview.is_none() && self.state.processed_image.is_none() {
                ui.add_space(24.0);
                ui.label(
                    RichText::new("Select an image, or describe one and generate it.").weak(),
                );
            }
        });
    }
}

impl eframe::App for RestyleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events(ctx);

        let mut pending: Vec<FormEvent> = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading(WINDOW_TITLE);
            ui.add_space(4.0);
        });

        egui::SidePanel::left("form")
            .resizable(false)
            .exact_width(340.0)
            .show(ctx, |ui| {
                self.render_form(ui, &mut pending);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_previews(ui);
        });

        for event in pending {
            self.dispatch(ctx, event);
        }
    }
}

impl Drop for RestyleApp {
    // Workers check this flag before delivering, so a closed window
    // never receives a late completion.
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}

fn texture_for(
    ctx: &egui::Context,
    cache: &mut Option<CachedTexture>,
    name: &str,
    version: u64,
    preview: &PreviewImage,
) -> TextureHandle {
    if let Some(cached) = cache {
        if cached.version == version {
            return cached.handle.clone();
        }
    }

    let size = [preview.width as usize, preview.height as usize];
    let pixels = egui::ColorImage::from_rgba_unmultiplied(size, &preview.rgba);
    let handle = ctx.load_texture(name, pixels, egui::TextureOptions::default());
    *cache = Some(CachedTexture {
        version,
        handle: handle.clone(),
    });
    handle
}

fn save_processed_image(bytes: &[u8]) {
    let Some(path) = rfd::FileDialog::new()
        .set_file_name("processed.jpg")
        .save_file()
    else {
        return;
    };
    match std::fs::write(&path, bytes) {
        Ok(()) => log::info!("saved processed image to {}", path.display()),
        Err(error) => log::warn!("failed to save processed image to {}: {error}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_preview(value: u8) -> PreviewImage {
        PreviewImage {
            width: 2,
            height: 2,
            rgba: vec![value; 16],
        }
    }

    #[test]
    fn texture_cache_reuses_the_handle_until_the_version_changes() {
        let ctx = egui::Context::default();
        let mut cache = None;

        let first = texture_for(&ctx, &mut cache, "original", 1, &sample_preview(10));
        let again = texture_for(&ctx, &mut cache, "original", 1, &sample_preview(10));
        assert_eq!(first.id(), again.id());

        let replaced = texture_for(&ctx, &mut cache, "original", 2, &sample_preview(200));
        assert_ne!(first.id(), replaced.id());
    }
}
