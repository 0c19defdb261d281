use eframe::egui::Ui;
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::color::ColorMap;
use crate::data::filter::FilteredView;

// ---------------------------------------------------------------------------
// Bill length vs. bill depth scatter
// ---------------------------------------------------------------------------

/// Scatter of the filtered penguins, one series per species.
pub fn length_depth_plot(ui: &mut Ui, view: &FilteredView, color_map: &ColorMap, height: f32) {
    let series = species_series(view);

    Plot::new("length_depth")
        .legend(Legend::default())
        .x_axis_label("bill_length_mm")
        .y_axis_label("bill_depth_mm")
        .height(height)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (species, points) in series {
                let color = color_map.color_for(&species);
                let points: PlotPoints = points.into();
                plot_ui.points(Points::new(points).name(species).color(color).radius(3.0));
            }
        });
}

/// Group plottable rows by species, keeping first-appearance order. Rows
/// missing either bill measurement are skipped.
fn species_series(view: &FilteredView) -> Vec<(String, Vec<[f64; 2]>)> {
    let mut series: Vec<(String, Vec<[f64; 2]>)> = Vec::new();
    for p in view.iter() {
        let (Some(x), Some(y)) = (p.bill_length_mm, p.bill_depth_mm) else {
            continue;
        };
        match series.iter_mut().find(|(s, _)| *s == p.species) {
            Some((_, points)) => points.push([x, y]),
            None => series.push((p.species.clone(), vec![[x, y]])),
        }
    }
    series
}
