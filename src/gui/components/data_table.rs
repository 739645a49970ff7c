// src/gui/components/data_table.rs
//
// Draws the live table. Purely a view over `app.table`.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    core::rich::Segment,
    extract::table::{Cell, Table},
    gui::app::App,
};

const ROW_HEIGHT: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let table = &app.table;
    let cols = table.width();
    if cols == 0 {
        return;
    }

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("inner_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| inner_table(ui, table, cols));
}

fn initial_width(label: &str) -> f32 {
    match label {
        "Title" => 260.0,
        "Author" => 160.0,
        "Image" => 90.0,
        _ => 80.0,
    }
}

fn inner_table(ui: &mut egui::Ui, table: &Table, cols: usize) {
    let labels = table.header_labels();
    let numeric = table.numeric_columns();

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt(("table_state", cols));
    for label in &labels {
        builder = builder.column(
            Column::initial(initial_width(label)).resizable(true).clip(true).at_least(20.0),
        );
    }

    builder
        .header(24.0, |mut header| {
            for label in &labels {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.add(egui::Label::new(RichText::new(label).strong()).selectable(false));
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, table.row_count(), |mut row| {
                let Some(record) = table.records().get(row.index()) else { return };
                for (ci, cell) in record.cells().iter().enumerate() {
                    let is_numeric = numeric.get(ci).copied().unwrap_or(false);
                    row.col(|ui| {
                        if is_numeric {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(cell.display());
                            });
                        } else {
                            draw_cell(ui, cell);
                        }
                    });
                }
            });
        });
}

fn draw_cell(ui: &mut egui::Ui, cell: &Cell) {
    let Cell::Rich(rt) = cell else {
        ui.label(cell.display());
        return;
    };
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for seg in rt.segments() {
            match seg {
                Segment::Text(t) => { ui.label(t); }
                Segment::Link { label, href } => {
                    ui.hyperlink_to(label, href);
                }
                Segment::Image { src, .. } => {
                    ui.weak("[img]").on_hover_text(src);
                }
            }
        }
    });
}
