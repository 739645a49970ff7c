// src/gui/components/source_panel.rs
//
// Left panel: saved pages feeding the table, plus the extraction options.
// Any change here re-extracts every loaded page.

use std::path::PathBuf;

use eframe::egui;
use crate::{
    config::options::CatalogKind,
    file::normalize_separators,
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Pages");

    ui.horizontal(|ui| {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.source_text)
                .hint_text("saved page .html")
                .desired_width(170.0),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Load").clicked() || enter {
            let text = app.state.gui.source_text.trim().to_owned();
            if text.is_empty() {
                app.status("Enter a page path first");
            } else {
                app.add_source(PathBuf::from(normalize_separators(&text)));
                app.state.gui.source_text.clear();
            }
        }
    });

    // Dropped files count as loaded pages.
    let dropped: Vec<PathBuf> = ui.ctx().input(|i| {
        i.raw.dropped_files.iter().filter_map(|f| f.path.clone()).collect()
    });
    for p in dropped {
        app.add_source(p);
    }

    ui.separator();

    let mut remove: Option<usize> = None;
    egui::ScrollArea::vertical()
        .id_salt("sources_scroll")
        .max_height(220.0)
        .show(ui, |ui| {
            if app.state.gui.sources.is_empty() {
                ui.weak("No pages loaded");
            }
            for (idx, p) in app.state.gui.sources.iter().enumerate() {
                ui.horizontal(|ui| {
                    if ui.small_button("✕").on_hover_text("Remove").clicked() {
                        remove = Some(idx);
                    }
                    let name = p
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| p.display().to_string());
                    ui.label(name).on_hover_text(p.display().to_string());
                });
            }
        });
    if let Some(idx) = remove {
        app.remove_source(idx);
    }

    ui.horizontal(|ui| {
        if ui.button("Reload").clicked() {
            app.rebuild();
        }
        if ui.button("Clear").clicked() {
            app.clear_sources();
        }
    });

    ui.separator();
    ui.heading("Options");

    let prev = app.state.options.extract.catalog;
    let mut kind = prev;
    ui.horizontal(|ui| {
        ui.label("Catalog:");
        for k in CatalogKind::ALL {
            ui.selectable_value(&mut kind, k, k.label());
        }
    });
    if kind != prev {
        app.state.options.set_catalog(kind);
        app.refresh_out_path_text();
        logf!("UI: Catalog → {}", kind);
        app.options_changed();
    }

    let extract = &mut app.state.options.extract;
    let mut changed = false;
    changed |= ui.checkbox(&mut extract.include_image, "Include image column").changed();
    changed |= ui.checkbox(&mut extract.include_shows, "Include shows").changed();
    changed |= ui.checkbox(&mut extract.skip_header_row, "Skip header row").changed();
    if changed {
        logf!(
            "UI: Extract options → image={} shows={} skip_header={}",
            extract.include_image, extract.include_shows, extract.skip_header_row
        );
        app.options_changed();
    }
}
