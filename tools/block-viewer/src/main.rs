mod view_state;

use eframe::egui;
use egui_extras::{Size, StripBuilder};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use block_model::Strategy;
use block_splitter::{split_file, SplitOptions};
use view_state::{LoadedDocument, ToggleText};

#[derive(Debug, Default)]
struct AppState {
    path: String,
    encoding: String,
    strategy: Strategy,
    options: SplitOptions,
    loaded: Option<LoadedDocument>,
    error: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Block Viewer",
        options,
        Box::new(|cc| {
            install_japanese_fallback_fonts(&cc.egui_ctx);
            Box::new(AppState::default())
        }),
    )
}

impl AppState {
    fn load(&mut self) {
        self.error = None;
        self.loaded = None;
        let path = self.path.trim();
        if path.is_empty() {
            self.error = Some("Please pick a file".into());
            return;
        }
        let encoding = self.encoding.trim();
        self.options.encoding = if encoding.is_empty() { None } else { Some(encoding.to_string()) };
        match split_file(path, self.strategy, &self.options) {
            Ok(out) => {
                tracing::info!(path, blocks = out.blocks.len(), "document loaded");
                self.loaded = Some(LoadedDocument::new(out.document, out.text, out.blocks));
            }
            Err(e) => {
                tracing::warn!(path, error = %e, "failed to load document");
                self.error = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for AppState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.vertical(|ui| {
                // Row 1: file input + actions
                ui.horizontal(|ui| {
                    ui.label("File:");
                    ui.text_edit_singleline(&mut self.path);
                    if ui.button("Pick...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Documents", &["pdf", "txt", "md"]).pick_file()
                        {
                            self.path = path.display().to_string();
                        }
                    }
                    ui.label("Encoding:");
                    ui.add(egui::TextEdit::singleline(&mut self.encoding).hint_text("utf-8").desired_width(90.0));
                    ui.separator();
                    if ui.button("Extract").clicked() {
                        self.load();
                    }
                });

                // Row 2: strategy
                ui.horizontal_wrapped(|ui| {
                    let before = self.strategy;
                    egui::ComboBox::from_label("Split strategy")
                        .selected_text(self.strategy.label())
                        .show_ui(ui, |ui| {
                            for s in Strategy::ALL {
                                ui.selectable_value(&mut self.strategy, s, s.label());
                            }
                        });
                    ui.label(self.strategy.description());
                    if self.strategy != before {
                        if let Some(loaded) = self.loaded.as_mut() {
                            loaded.resplit(self.strategy, &self.options.params);
                        }
                    }
                });
            });
        });

        egui::SidePanel::left("left").resizable(true).show(ctx, |ui| {
            ui.heading("All text");
            if let Some(err) = &self.error {
                ui.colored_label(egui::Color32::RED, err);
                ui.separator();
            }
            let Some(loaded) = self.loaded.as_mut() else {
                ui.label("Upload a PDF or text file to start.");
                return;
            };
            if let Some(all) = loaded.all_text.as_mut() {
                toggle_text_row(ui, "all_text", "Copy all", all, 6);
            }
            ui.separator();
            ui.heading("Statistics");
            ui.monospace(format!("blocks: {}", loaded.stats.block_count));
            ui.monospace(format!("chars:  {}", loaded.stats.char_count));
            ui.monospace(format!("lines:  {}", loaded.stats.line_count));
            if let Some(doc) = &loaded.document {
                if let Some(backend) = &doc.reader_backend {
                    ui.monospace(format!("reader: {}", backend));
                }
                if let Some(pages) = doc.page_count {
                    ui.monospace(format!("pages:  {}", pages));
                }
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(loaded) = self.loaded.as_mut() else { return; };
            StripBuilder::new(ui)
                .size(Size::exact(28.0))
                .size(Size::remainder())
                .clip(true)
                .vertical(|mut strip| {
                    strip.cell(|ui| {
                        ui.heading(format!("Blocks ({})", loaded.blocks.len()));
                    });
                    strip.cell(|ui| {
                        if loaded.blocks.is_empty() {
                            ui.colored_label(egui::Color32::YELLOW, "No text blocks found. Try another split strategy.");
                            return;
                        }
                        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                            for (i, block) in loaded.blocks.iter_mut().enumerate() {
                                egui::CollapsingHeader::new(block.record.header())
                                    .id_source(("block", i))
                                    .default_open(true)
                                    .show(ui, |ui| {
                                        toggle_text_row(ui, ("block_text", i), "Copy", &mut block.text, 0);
                                    });
                            }
                        });
                    });
                });
        });
    }
}

/// Copy button, strip/restore toggle, and the editable text area.
fn toggle_text_row(ui: &mut egui::Ui, id: impl std::hash::Hash, copy_label: &str, text: &mut ToggleText, rows: usize) {
    ui.horizontal_top(|ui| {
        if ui.button(copy_label).clicked() {
            let copied = text.shown.clone();
            ui.ctx().output_mut(|o| o.copied_text = copied);
        }
        if ui.button(text.toggle_label()).clicked() {
            if let Some(stripped) = text.toggle() {
                ui.ctx().output_mut(|o| o.copied_text = stripped);
            }
        }
        let rows = if rows > 0 { rows } else { (text.shown.matches('\n').count() + 1).clamp(2, 20) };
        ui.add(
            egui::TextEdit::multiline(&mut text.shown)
                .id_source(id)
                .desired_rows(rows)
                .desired_width(f32::INFINITY),
        );
    });
}

// Install Japanese font fallback so CJK renders correctly.
fn install_japanese_fallback_fonts(ctx: &egui::Context) {
    if let Some(data) = load_cjk_font_data() {
        let mut fonts = egui::FontDefinitions::default();
        fonts
            .font_data
            .insert("jp_fallback".into(), egui::FontData::from_owned(data));

        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts
                .families
                .entry(family)
                .or_default()
                .insert(0, "jp_fallback".into());
        }

        ctx.set_fonts(fonts);
    }
}

fn load_cjk_font_data() -> Option<Vec<u8>> {
    candidate_font_paths().into_iter().find_map(|path| fs::read(path).ok())
}

fn candidate_font_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(custom) = env::var("BLOCK_VIEWER_FONT") { paths.push(PathBuf::from(custom)); }

    if let Ok(windir) = env::var("WINDIR") {
        let fonts_dir = PathBuf::from(windir).join("Fonts");
        for candidate in ["YuGothM.ttc", "meiryo.ttc", "msgothic.ttc"] {
            paths.push(fonts_dir.join(candidate));
        }
    }
    for candidate in [
        "/System/Library/Fonts/Hiragino Sans W3.ttc",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
    ] { paths.push(PathBuf::from(candidate)); }
    paths.push(PathBuf::from("fonts/NotoSansJP-Regular.otf"));
    paths
}
