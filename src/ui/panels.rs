use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::AppState;

/// External links listed under the filters.
const LINKS: [(&str, &str); 6] = [
    ("GitHub Source", "https://github.com/denisecase/cintel-07-tdash"),
    ("GitHub App", "https://denisecase.github.io/cintel-07-tdash/"),
    ("GitHub Issues", "https://github.com/denisecase/cintel-07-tdash/issues"),
    ("PyShiny", "https://shiny.posit.co/py/"),
    ("Template: Basic Dashboard", "https://shiny.posit.co/py/templates/dashboard/"),
    ("See also", "https://github.com/denisecase/pyshiny-penguins-dashboard-express"),
];

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter controls");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Mass slider ----
            let mut mass = state.mass_threshold();
            let slider = egui::Slider::new(&mut mass, state.mass_range.clone())
                .step_by(1.0)
                .text("Mass");
            if ui.add(slider).changed() {
                state.set_mass_threshold(mass);
            }
            ui.add_space(8.0);

            // ---- Species checkbox group ----
            ui.strong("Species");
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_species();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_species();
                }
            });

            let choices = state.species_choices.clone();
            for species in &choices {
                let mut checked = state.is_species_selected(species);
                let text = RichText::new(species).color(state.color_map.color_for(species));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_species(species);
                }
            }

            ui.separator();

            // ---- Links ----
            ui.label(RichText::new("Links").strong().small());
            for (label, url) in LINKS {
                ui.hyperlink_to(label, url);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with the dataset status line.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(&state.title);
        ui.separator();

        let total = state.engine.dataset().len();
        let visible = state.engine.view().len();
        ui.label(format!("{total} penguins loaded, {visible} visible"));
    });
}
