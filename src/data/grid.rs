use std::cmp::Ordering;

use super::filter::FilteredView;
use super::model::Penguin;

// ---------------------------------------------------------------------------
// Grid columns
// ---------------------------------------------------------------------------

/// The five columns shown in the data grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridColumn {
    Species,
    Island,
    BillLength,
    BillDepth,
    BodyMass,
}

impl GridColumn {
    pub const ALL: [GridColumn; 5] = [
        GridColumn::Species,
        GridColumn::Island,
        GridColumn::BillLength,
        GridColumn::BillDepth,
        GridColumn::BodyMass,
    ];

    pub fn header(self) -> &'static str {
        match self {
            GridColumn::Species => "species",
            GridColumn::Island => "island",
            GridColumn::BillLength => "bill_length_mm",
            GridColumn::BillDepth => "bill_depth_mm",
            GridColumn::BodyMass => "body_mass_g",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, GridColumn::Species | GridColumn::Island)
    }

    fn index(self) -> usize {
        self as usize
    }

    fn text(self, p: &Penguin) -> Option<&str> {
        match self {
            GridColumn::Species => Some(p.species.as_str()),
            GridColumn::Island => Some(p.island.as_str()),
            _ => None,
        }
    }

    fn number(self, p: &Penguin) -> Option<f64> {
        match self {
            GridColumn::BillLength => p.bill_length_mm,
            GridColumn::BillDepth => p.bill_depth_mm,
            GridColumn::BodyMass => p.body_mass_g,
            GridColumn::Species | GridColumn::Island => None,
        }
    }

    /// Cell text as shown in the grid.
    pub fn display(self, p: &Penguin) -> String {
        match self {
            GridColumn::Species | GridColumn::Island => self.text(p).unwrap_or_default().to_string(),
            GridColumn::BodyMass => p.body_mass_g.map_or_else(|| "NA".into(), |v| format!("{v:.0}")),
            _ => self.number(p).map_or_else(|| "NA".into(), |v| format!("{v:.1}")),
        }
    }

    fn compare(self, a: &Penguin, b: &Penguin) -> Ordering {
        if self.is_numeric() {
            // Missing values last.
            match (self.number(a), self.number(b)) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        } else {
            self.text(a).cmp(&self.text(b))
        }
    }
}

// ---------------------------------------------------------------------------
// Per-column filters
// ---------------------------------------------------------------------------

/// Raw filter inputs for one column, exactly as typed by the user.
///
/// Text columns use `text` as a case-insensitive substring. Numeric columns
/// use `min` / `max` as inclusive bounds; a bound that does not parse is
/// ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnFilter {
    pub text: String,
    pub min: String,
    pub max: String,
}

impl ColumnFilter {
    pub fn is_active(&self) -> bool {
        !self.text.trim().is_empty() || parse_bound(&self.min).is_some() || parse_bound(&self.max).is_some()
    }

    fn matches(&self, column: GridColumn, p: &Penguin) -> bool {
        if column.is_numeric() {
            let (min, max) = (parse_bound(&self.min), parse_bound(&self.max));
            if min.is_none() && max.is_none() {
                return true;
            }
            let Some(v) = column.number(p) else {
                return false;
            };
            min.map_or(true, |lo| v >= lo) && max.map_or(true, |hi| v <= hi)
        } else {
            let needle = self.text.trim().to_lowercase();
            needle.is_empty()
                || column
                    .text(p)
                    .is_some_and(|s| s.to_lowercase().contains(&needle))
        }
    }
}

fn parse_bound(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

// ---------------------------------------------------------------------------
// Grid state
// ---------------------------------------------------------------------------

/// Column filters and sort order of the data grid. Applied on top of the
/// filtered view; never feeds back into it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridState {
    pub filters: [ColumnFilter; 5],
    pub sort: Option<(GridColumn, SortOrder)>,
}

impl GridState {
    pub fn filter(&self, column: GridColumn) -> &ColumnFilter {
        &self.filters[column.index()]
    }

    pub fn filter_mut(&mut self, column: GridColumn) -> &mut ColumnFilter {
        &mut self.filters[column.index()]
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.iter().any(ColumnFilter::is_active)
    }

    pub fn clear_filters(&mut self) {
        self.filters = Default::default();
    }

    /// Cycle ascending → descending → unsorted for `column`.
    pub fn toggle_sort(&mut self, column: GridColumn) {
        self.sort = match self.sort {
            Some((c, SortOrder::Ascending)) if c == column => Some((column, SortOrder::Descending)),
            Some((c, SortOrder::Descending)) if c == column => None,
            _ => Some((column, SortOrder::Ascending)),
        };
    }

    /// Dataset indices of the rows to display, in display order.
    pub fn visible_rows(&self, view: &FilteredView) -> Vec<usize> {
        let rows = view.dataset().rows();
        let mut visible: Vec<usize> = view
            .indices()
            .iter()
            .copied()
            .filter(|&i| {
                GridColumn::ALL
                    .iter()
                    .all(|&col| self.filter(col).matches(col, &rows[i]))
            })
            .collect();

        if let Some((column, order)) = self.sort {
            visible.sort_by(|&a, &b| {
                let ord = column.compare(&rows[a], &rows[b]);
                match order {
                    SortOrder::Ascending => ord,
                    // Keep missing values at the end when descending too.
                    SortOrder::Descending => match (column.number(&rows[a]), column.number(&rows[b])) {
                        (None, Some(_)) if column.is_numeric() => Ordering::Greater,
                        (Some(_), None) if column.is_numeric() => Ordering::Less,
                        _ => ord.reverse(),
                    },
                }
            });
        }
        visible
    }
}
