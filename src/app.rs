use std::sync::Arc;

use eframe::egui::{self, Ui};

use crate::config::DashboardConfig;
use crate::data::model::PenguinDataset;
use crate::data::summary::ValueBoxes;
use crate::state::{AppState, Card};
use crate::ui::{grid, panels, plot, value_boxes};

const CARD_HEIGHT: f32 = 360.0;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PenguinDashApp {
    pub state: AppState,
}

impl PenguinDashApp {
    pub fn new(config: &DashboardConfig, dataset: Arc<PenguinDataset>) -> Self {
        Self {
            state: AppState::new(config, dataset),
        }
    }
}

impl eframe::App for PenguinDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Inputs first so every consumer below sees this frame's view.
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard(ui, &mut self.state);
        });
    }
}

/// Value boxes on top, then the plot and data cards side by side (or one of
/// them alone when expanded).
fn dashboard(ui: &mut Ui, state: &mut AppState) {
    let mut toggled = None;
    let AppState {
        engine,
        color_map,
        grid: grid_state,
        expanded,
        ..
    } = &mut *state;
    let view = engine.view();

    value_boxes::value_boxes(ui, &ValueBoxes::from_view(view));
    ui.add_space(8.0);

    match *expanded {
        Some(card) => {
            let height = (ui.available_height() - 48.0).max(120.0);
            toggled = card_frame(ui, card, true, |ui| match card {
                Card::LengthDepth => plot::length_depth_plot(ui, view, color_map, height),
                Card::PenguinData => grid::penguin_grid(ui, view, grid_state, color_map, height),
            });
        }
        None => {
            ui.columns(2, |columns| {
                let plot_toggle = card_frame(&mut columns[0], Card::LengthDepth, false, |ui| {
                    plot::length_depth_plot(ui, view, color_map, CARD_HEIGHT)
                });
                let grid_toggle = card_frame(&mut columns[1], Card::PenguinData, false, |ui| {
                    grid::penguin_grid(ui, view, grid_state, color_map, CARD_HEIGHT)
                });
                toggled = plot_toggle.or(grid_toggle);
            });
        }
    }

    if let Some(card) = toggled {
        state.toggle_expanded(card);
    }
}

/// A titled card with an expand / restore button. Returns the card if the
/// button was clicked.
fn card_frame(ui: &mut Ui, card: Card, is_expanded: bool, body: impl FnOnce(&mut Ui)) -> Option<Card> {
    let mut clicked = false;
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.horizontal(|ui: &mut Ui| {
            ui.strong(card.title());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
                let label = if is_expanded { "Restore" } else { "Expand" };
                clicked = ui.small_button(label).clicked();
            });
        });
        ui.separator();
        body(ui);
    });
    clicked.then_some(card)
}
