use eframe::egui::{self, RichText, TextEdit, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::ColorMap;
use crate::data::filter::FilteredView;
use crate::data::grid::{GridColumn, GridState, SortOrder};

const ROW_HEIGHT: f32 = 18.0;
const HEADER_HEIGHT: f32 = 52.0;

// ---------------------------------------------------------------------------
// Penguin data grid
// ---------------------------------------------------------------------------

/// Render the filtered rows as a table with per-column filters.
pub fn penguin_grid(
    ui: &mut Ui,
    view: &FilteredView,
    grid: &mut GridState,
    color_map: &ColorMap,
    max_height: f32,
) {
    let rows = grid.visible_rows(view);
    let dataset = view.dataset();

    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("{} of {} rows", rows.len(), view.len()));
        if ui
            .add_enabled(grid.has_active_filters(), egui::Button::new("Clear filters"))
            .clicked()
        {
            grid.clear_filters();
        }
    });

    ui.push_id("penguin_grid", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::auto().at_least(90.0), GridColumn::ALL.len())
            .min_scrolled_height(0.0)
            .max_scroll_height(max_height)
            .header(HEADER_HEIGHT, |mut header| {
                for column in GridColumn::ALL {
                    header.col(|ui: &mut Ui| header_cell(ui, grid, column));
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let p = &dataset.rows()[rows[row.index()]];
                    for column in GridColumn::ALL {
                        row.col(|ui: &mut Ui| {
                            let text = column.display(p);
                            if column == GridColumn::Species {
                                ui.label(RichText::new(text).color(color_map.color_for(&p.species)));
                            } else {
                                ui.label(text);
                            }
                        });
                    }
                });
            });
    });
}

/// Column title (click to sort) above its filter inputs.
fn header_cell(ui: &mut Ui, grid: &mut GridState, column: GridColumn) {
    ui.vertical(|ui: &mut Ui| {
        let arrow = match grid.sort {
            Some((c, SortOrder::Ascending)) if c == column => " ⬆",
            Some((c, SortOrder::Descending)) if c == column => " ⬇",
            _ => "",
        };
        let title = RichText::new(format!("{}{arrow}", column.header())).strong();
        if ui.add(egui::Button::new(title).frame(false)).clicked() {
            grid.toggle_sort(column);
        }

        let filter = grid.filter_mut(column);
        if column.is_numeric() {
            ui.horizontal(|ui: &mut Ui| {
                ui.add(TextEdit::singleline(&mut filter.min).hint_text("min").desired_width(40.0));
                ui.add(TextEdit::singleline(&mut filter.max).hint_text("max").desired_width(40.0));
            });
        } else {
            ui.add(TextEdit::singleline(&mut filter.text).hint_text("filter").desired_width(84.0));
        }
    });
}
