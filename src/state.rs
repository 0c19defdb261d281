use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::filter::{FilterEngine, FilterState};
use crate::data::grid::GridState;
use crate::data::model::PenguinDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// A card in the central area that can be expanded to fill it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    LengthDepth,
    PenguinData,
}

impl Card {
    pub fn title(self) -> &'static str {
        match self {
            Card::LengthDepth => "Bill length and depth",
            Card::PenguinData => "Penguin data",
        }
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub title: String,

    /// Filter parameters and the cached filtered view.
    pub engine: FilterEngine,

    pub mass_range: RangeInclusive<f64>,

    /// Checkbox labels, in display order.
    pub species_choices: Vec<String>,

    pub color_map: ColorMap,

    /// Column filters and sort of the data grid.
    pub grid: GridState,

    /// Card currently shown full size, if any.
    pub expanded: Option<Card>,
}

impl AppState {
    pub fn new(config: &DashboardConfig, dataset: Arc<PenguinDataset>) -> Self {
        let unknown: Vec<&String> = dataset
            .species()
            .iter()
            .filter(|s| !config.species_choices.contains(*s))
            .collect();
        if !unknown.is_empty() {
            log::warn!("Species {unknown:?} are not among the filter choices and will never be shown");
        }

        // Labels outside the known species get palette colours after the choices.
        let color_map = ColorMap::new(
            config
                .species_choices
                .iter()
                .chain(dataset.species())
                .map(String::as_str),
        );
        let filters = FilterState::new(config.initial_mass, config.species_choices.iter().cloned());

        Self {
            title: config.title.clone(),
            engine: FilterEngine::new(dataset, filters),
            mass_range: config.mass_range.clone(),
            species_choices: config.species_choices.clone(),
            color_map,
            grid: GridState::default(),
            expanded: None,
        }
    }

    pub fn mass_threshold(&self) -> f64 {
        self.engine.state().mass_threshold
    }

    pub fn set_mass_threshold(&mut self, mass: f64) {
        self.engine.set_mass_threshold(mass);
    }

    pub fn is_species_selected(&self, species: &str) -> bool {
        self.engine.state().selected_species.contains(species)
    }

    /// Toggle a single species checkbox.
    pub fn toggle_species(&mut self, species: &str) {
        let selected = self.is_species_selected(species);
        self.engine.set_species_selected(species, !selected);
    }

    pub fn select_all_species(&mut self) {
        let all: BTreeSet<String> = self.species_choices.iter().cloned().collect();
        self.engine.set_selected_species(all);
    }

    pub fn select_no_species(&mut self) {
        self.engine.set_selected_species(BTreeSet::new());
    }

    /// Expand `card`, or restore the normal layout if it is already expanded.
    pub fn toggle_expanded(&mut self, card: Card) {
        self.expanded = if self.expanded == Some(card) {
            None
        } else {
            Some(card)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Penguin;

    fn state() -> AppState {
        let dataset = Arc::new(PenguinDataset::from_rows(vec![
            Penguin::new("Adelie", "Torgersen", Some(3000.0)),
            Penguin::new("Gentoo", "Biscoe", Some(5000.0)),
            Penguin::new("Chinstrap", "Dream", Some(4000.0)),
        ]));
        AppState::new(&DashboardConfig::default(), dataset)
    }

    #[test]
    fn starts_with_everything_selected() {
        let mut state = state();
        assert_eq!(state.mass_threshold(), 6000.0);
        assert!(state.species_choices.iter().all(|s| state.is_species_selected(s)));
        assert_eq!(state.engine.view().len(), 3);
    }

    #[test]
    fn widget_changes_refilter() {
        let mut state = state();
        state.engine.view();

        state.toggle_species("Gentoo");
        assert!(!state.is_species_selected("Gentoo"));
        assert_eq!(state.engine.view().len(), 2);

        state.set_mass_threshold(3500.0);
        assert_eq!(state.engine.view().len(), 1);

        state.select_no_species();
        assert!(state.engine.view().is_empty());

        state.select_all_species();
        state.toggle_species("Adelie");
        state.toggle_species("Adelie");
        assert_eq!(state.engine.view().len(), 1);
        assert_eq!(state.engine.recomputations(), 5);
    }

    #[test]
    fn expanding_a_card_toggles() {
        let mut state = state();
        state.toggle_expanded(Card::PenguinData);
        assert_eq!(state.expanded, Some(Card::PenguinData));
        state.toggle_expanded(Card::LengthDepth);
        assert_eq!(state.expanded, Some(Card::LengthDepth));
        state.toggle_expanded(Card::LengthDepth);
        assert_eq!(state.expanded, None);
    }
}
