use super::filter::FilteredView;

/// Shown in a value box when there is nothing to average.
pub const PLACEHOLDER: &str = "n/a";

/// The three value-box figures derived from a filtered view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueBoxes {
    pub count: usize,
    pub mean_bill_length_mm: Option<f64>,
    pub mean_bill_depth_mm: Option<f64>,
}

impl ValueBoxes {
    pub fn from_view(view: &FilteredView) -> Self {
        ValueBoxes {
            count: view.len(),
            mean_bill_length_mm: mean(view.iter().map(|p| p.bill_length_mm)),
            mean_bill_depth_mm: mean(view.iter().map(|p| p.bill_depth_mm)),
        }
    }

    pub fn count_text(&self) -> String {
        self.count.to_string()
    }

    pub fn bill_length_text(&self) -> String {
        format_mm(self.mean_bill_length_mm)
    }

    pub fn bill_depth_text(&self) -> String {
        format_mm(self.mean_bill_depth_mm)
    }
}

/// Arithmetic mean of the present values; `None` if there are none.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, n) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// `"43.9 mm"`, or the placeholder when undefined.
pub fn format_mm(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.1} mm"),
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use super::*;
    use crate::data::filter::compute_filtered_view;
    use crate::data::model::{Penguin, PenguinDataset};

    fn dataset() -> Arc<PenguinDataset> {
        Arc::new(PenguinDataset::from_rows(vec![
            Penguin::new("Adelie", "Torgersen", Some(3750.0)).with_bill(39.1, 18.7),
            Penguin::new("Adelie", "Torgersen", Some(3800.0)).with_bill(39.5, 17.5),
            Penguin::new("Adelie", "Torgersen", Some(3250.0)),
            Penguin::new("Gentoo", "Biscoe", Some(4500.0)).with_bill(46.1, 13.2),
        ]))
    }

    fn all() -> BTreeSet<String> {
        ["Adelie", "Gentoo"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn means_skip_missing_measurements() {
        let view = compute_filtered_view(&dataset(), 4000.0, &all());
        let boxes = ValueBoxes::from_view(&view);
        assert_eq!(boxes.count, 3);
        assert_eq!(boxes.count_text(), "3");
        assert_eq!(boxes.bill_length_text(), "39.3 mm");
        assert_eq!(boxes.bill_depth_text(), "18.1 mm");
    }

    #[test]
    fn empty_view_renders_placeholders() {
        let view = compute_filtered_view(&dataset(), 1000.0, &all());
        let boxes = ValueBoxes::from_view(&view);
        assert_eq!(boxes.count_text(), "0");
        assert_eq!(boxes.mean_bill_length_mm, None);
        assert_eq!(boxes.bill_length_text(), PLACEHOLDER);
        assert_eq!(boxes.bill_depth_text(), PLACEHOLDER);
    }

    #[test]
    fn rows_without_bills_give_undefined_mean() {
        let view = compute_filtered_view(&dataset(), 3500.0, &all());
        let boxes = ValueBoxes::from_view(&view);
        assert_eq!(boxes.count, 1);
        assert_eq!(boxes.mean_bill_depth_mm, None);
    }

    #[test]
    fn mean_and_format() {
        assert_eq!(mean([Some(1.0), None, Some(2.0)]), Some(1.5));
        assert_eq!(mean(Vec::<Option<f64>>::new()), None);
        assert_eq!(format_mm(Some(43.92)), "43.9 mm");
        assert_eq!(format_mm(Some(17.16)), "17.2 mm");
        assert_eq!(format_mm(Some(f64::NAN)), PLACEHOLDER);
    }
}
