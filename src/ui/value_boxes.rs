use eframe::egui::{self, RichText, Ui};

use crate::data::summary::ValueBoxes;

// ---------------------------------------------------------------------------
// Value boxes: count, average bill length, average bill depth
// ---------------------------------------------------------------------------

/// Leading glyph, caption and value text of each box.
fn items(boxes: &ValueBoxes) -> [(&'static str, &'static str, String); 3] {
    [
        ("🐧", "Number of penguins", boxes.count_text()),
        ("↔", "Average bill length", boxes.bill_length_text()),
        ("↕", "Average bill depth", boxes.bill_depth_text()),
    ]
}

pub fn value_boxes(ui: &mut Ui, boxes: &ValueBoxes) {
    let items = items(boxes);
    ui.columns(items.len(), |columns| {
        for (ui, (icon, caption, value)) in columns.iter_mut().zip(items) {
            value_box(ui, icon, caption, &value);
        }
    });
}

fn value_box(ui: &mut Ui, icon: &str, caption: &str, value: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui: &mut Ui| {
            ui.label(RichText::new(icon).size(36.0));
            ui.vertical(|ui: &mut Ui| {
                ui.label(caption);
                ui.label(RichText::new(value).size(28.0).strong());
            });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_box_has_a_leading_glyph() {
        let items = items(&ValueBoxes {
            count: 0,
            mean_bill_length_mm: None,
            mean_bill_depth_mm: None,
        });
        let icons: Vec<&str> = items.iter().map(|(icon, _, _)| *icon).collect();
        assert_eq!(icons, ["🐧", "↔", "↕"]);
        assert!(items.iter().all(|(icon, _, _)| !icon.trim().is_empty()));
        assert_eq!(items[0].2, "0");
    }
}
