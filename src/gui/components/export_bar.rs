// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    file,
    gui::app::App,
    render,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut changed = false;
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers + Hyperlinks ---
        let prev_fmt = export.format;
        ui.horizontal(|ui| {
            ui.label("Format:");
            for f in ExportFormat::ALL {
                ui.selectable_value(&mut export.format, f, f.label());
            }
        });
        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            changed = true;
        }

        ui.horizontal(|ui| {
            changed |= ui.checkbox(&mut export.include_headers, "Include headers").changed();
            let delimited = export.format.delimiter().is_some();
            changed |= ui
                .add_enabled(delimited, egui::Checkbox::new(&mut export.hyperlinks, "Hyperlink formulas"))
                .changed();
        });
    }
    if changed {
        app.refresh_out_path_text();
        app.persist();
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions (Copy / Export) ---
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            if app.table.is_empty() {
                app.status("Nothing to copy");
                logd!("Copy: Clicked, but there's nothing to copy");
            } else {
                let txt = render::render(&app.table, &app.state.options.export);
                logf!(
                    "Copy: rows={}, format={:?}",
                    app.table.row_count(),
                    app.state.options.export.format
                );
                ui.ctx().copy_text(txt);
                app.status(format!("Copied {} row(s) to clipboard", app.table.row_count()));
            }
        }

        if ui.button("Export").clicked() {
            if app.table.is_empty() {
                app.status("Nothing to export");
                logd!("Export: Clicked, but there's nothing to export");
            } else {
                if app.out_path_dirty {
                    app.state.options.export.set_path(&app.out_path_text);
                    logf!(
                        "Export: Out path set → {}",
                        app.state.options.export.out_path().display()
                    );
                    app.out_path_dirty = false;
                    app.refresh_out_path_text();
                    app.persist();
                }

                match file::write_export(&app.state.options.export, &app.table) {
                    Ok(path) => app.status(format!("Exported {} row(s) to {}", app.table.row_count(), path.display())),
                    Err(e) => {
                        loge!("Export: Error: {}", e);
                        app.status(format!("Export error: {e}"));
                    }
                }
            }
        }

        ui.label(format!("Status: {}", app.status_text()));
    });
}
