use std::path::PathBuf;

use paged_text_viewer::{available_encodings, EncodingChoice, PagedReader};

const APP_TITLE: &str = "Paged Text Viewer";

pub struct PagerApp {
    reader: PagedReader,

    // UI State
    page_text: String,
    progress_text: String,
    font_size: f32,
    dark_mode: bool,

    // Encoding
    selected_encoding: EncodingChoice,

    // Status messages
    error_message: Option<String>,
}

impl PagerApp {
    pub fn new(
        reader: PagedReader,
        encoding: EncodingChoice,
        initial_file: Option<PathBuf>,
    ) -> Self {
        let mut app = Self {
            reader,
            page_text: String::new(),
            progress_text: "-".to_string(),
            font_size: 14.0,
            dark_mode: true,
            selected_encoding: encoding,
            error_message: None,
        };

        if let Some(path) = initial_file {
            app.open_file(path);
        }
        app
    }

    fn open_file(&mut self, path: PathBuf) {
        match self.reader.load(&path) {
            Ok(()) => {
                self.error_message = None;
                let page = self.reader.current_page();
                self.change_content(page);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %format!("{:#}", e), "open failed");
                self.error_message = Some(format!("Error opening file: {:#}", e));
            }
        }
    }

    fn open_file_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new().set_title("Open file").pick_file() {
            self.open_file(path);
        }
    }

    fn select_encoding(&mut self, choice: EncodingChoice) {
        self.selected_encoding = choice;
        self.reader.set_encoding_choice(choice);

        if self.reader.is_loaded() {
            match self.reader.reload() {
                Ok(()) => {
                    self.error_message = None;
                    let page = self.reader.current_page();
                    self.change_content(page);
                }
                Err(e) => {
                    self.error_message = Some(format!("Error reloading file: {:#}", e));
                }
            }
        }
    }

    fn next_page(&mut self) {
        let page = self.reader.next_page();
        self.change_content(page);
    }

    fn previous_page(&mut self) {
        let page = self.reader.previous_page();
        self.change_content(page);
    }

    fn change_content(&mut self, page: String) {
        self.page_text = page;

        if !self.reader.is_loaded() {
            self.progress_text = "-".to_string();
            return;
        }

        match self.reader.progress() {
            Ok(progress) => {
                self.progress_text = format!("{:.2}", f64::from(progress));
            }
            Err(e) => {
                self.progress_text = "-".to_string();
                self.error_message = Some(format!("Progress unavailable: {:#}", e));
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::CTRL, egui::Key::O)) {
            self.open_file_dialog();
        }

        let forward = ctx.input_mut(|i| {
            i.consume_key(egui::Modifiers::NONE, egui::Key::PageDown)
                || i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowRight)
        });
        if forward {
            self.next_page();
        }

        let back = ctx.input_mut(|i| {
            i.consume_key(egui::Modifiers::NONE, egui::Key::PageUp)
                || i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowLeft)
        });
        if back {
            self.previous_page();
        }
    }

    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open... (Ctrl+O)").clicked() {
                        ui.close_menu();
                        self.open_file_dialog();
                    }

                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Encoding", |ui| {
                    let auto = self.selected_encoding == EncodingChoice::Auto;
                    if ui.selectable_label(auto, "Auto-detect").clicked() {
                        self.select_encoding(EncodingChoice::Auto);
                        ui.close_menu();
                    }

                    for (name, encoding) in available_encodings() {
                        let choice = EncodingChoice::Fixed(encoding);
                        if ui
                            .selectable_label(self.selected_encoding == choice, name)
                            .clicked()
                        {
                            self.select_encoding(choice);
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.dark_mode, "Dark Mode");
                    ui.add(egui::Slider::new(&mut self.font_size, 8.0..=32.0).text("Font size"));
                });
            });
        });
    }

    fn render_button_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("button_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let loaded = self.reader.is_loaded();
                if ui.add_enabled(loaded, egui::Button::new("Previous")).clicked() {
                    self.previous_page();
                }
                if ui.add_enabled(loaded, egui::Button::new("Next")).clicked() {
                    self.next_page();
                }
            });
            ui.add_space(6.0);
        });
    }

    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.progress_text);

                if let Some(path) = self.reader.path() {
                    ui.separator();
                    ui.label(format!("File: {}", path.display()));
                    ui.separator();
                    ui.label(format!(
                        "Page {} / {}",
                        self.reader.page_number(),
                        self.reader.page_count()
                    ));
                    ui.separator();
                    ui.label(format!("Encoding: {}", self.reader.encoding().name()));
                }

                if let Some(ref message) = self.error_message {
                    ui.separator();
                    ui.colored_label(egui::Color32::LIGHT_RED, message);
                }
            });
        });
    }

    fn render_text_area(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.reader.is_loaded() {
                ui.centered_and_justified(|ui| {
                    ui.label("No file opened - use File → Open to start");
                });
                return;
            }

            let mut text = self.page_text.as_str();
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut text)
                        .font(egui::FontId::monospace(self.font_size))
                        .desired_width(f32::INFINITY),
                );
            });
        });
    }
}

impl eframe::App for PagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let title = match self.reader.path().and_then(|p| p.file_name()) {
            Some(name) => format!("{} - {}", APP_TITLE, name.to_string_lossy()),
            None => APP_TITLE.to_string(),
        };
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));

        if self.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        self.handle_shortcuts(ctx);

        self.render_menu_bar(ctx);
        self.render_status_bar(ctx);
        self.render_button_panel(ctx);
        self.render_text_area(ctx);
    }
}
