// src/gui/app.rs
use std::{
    error::Error,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{consts::SETTINGS_FILE, settings, state::AppState},
    extract::{self, table::Table},
    specs,
};

use super::progress::GuiProgress;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Audible Export",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // assembled table for the loaded pages
    pub table: Table,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        let table = Table::new(extract::header_for(
            specs::spec_for(state.options.extract.catalog),
            &state.options.extract,
        ));

        logf!(
            "Init: catalog={}, sources={}",
            state.options.extract.catalog,
            state.gui.sources.len()
        );

        let mut app = Self {
            state,
            out_path_text,
            out_path_dirty: false,
            table,
            status: Arc::new(Mutex::new(s!("Idle"))),
        };
        if !app.state.gui.sources.is_empty() {
            app.rebuild();
        }
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Re-read every source with the current options.
    pub fn rebuild(&mut self) {
        let mut prog = GuiProgress::new(self.status.clone());
        let summary = extract::extract_files(&self.state.gui.sources, &self.state.options.extract, Some(&mut prog));
        logd!(
            "UI: Rebuilt table rows={} failed={}",
            summary.table.row_count(),
            summary.failed.len()
        );
        self.table = summary.table;
    }

    pub fn add_source(&mut self, path: PathBuf) {
        if self.state.gui.sources.contains(&path) {
            self.status(format!("Already loaded: {}", path.display()));
            return;
        }
        logf!("UI: Source added → {}", path.display());
        self.state.gui.sources.push(path);
        self.rebuild();
        self.persist();
    }

    pub fn remove_source(&mut self, idx: usize) {
        if idx < self.state.gui.sources.len() {
            let p = self.state.gui.sources.remove(idx);
            logf!("UI: Source removed → {}", p.display());
            self.rebuild();
            self.persist();
        }
    }

    pub fn clear_sources(&mut self) {
        self.state.gui.sources.clear();
        self.rebuild();
        self.persist();
    }

    /// Options changed: re-extract and remember them.
    pub fn options_changed(&mut self) {
        self.rebuild();
        self.persist();
    }

    pub fn refresh_out_path_text(&mut self) {
        if !self.out_path_dirty {
            self.out_path_text = self.state.options.export.out_path().to_string_lossy().into_owned();
        }
    }

    pub fn persist(&self) {
        if let Err(e) = settings::save(Path::new(SETTINGS_FILE), &self.state) {
            loge!("Settings: Save failed: {}", e);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("sources")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                super::components::source_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::export_bar::draw(ui, self);

            ui.separator();

            super::components::data_table::draw(ui, self);
        });
    }
}
