use std::collections::BTreeSet;
use std::sync::Arc;

use penguin_dash::data::filter::{compute_filtered_view, FilterEngine, FilterState};
use penguin_dash::data::model::{Penguin, PenguinDataset};
use penguin_dash::data::loader::DataSource;
use proptest::prelude::*;

const LABELS: [&str; 4] = ["Adelie", "Gentoo", "Chinstrap", "Emperor"];

fn arb_penguin() -> impl Strategy<Value = Penguin> {
    (
        prop::sample::select(LABELS[..3].to_vec()),
        prop::option::weighted(0.9, 2500u32..6500),
    )
        .prop_map(|(species, mass)| Penguin::new(species, "Biscoe", mass.map(f64::from)))
}

fn arb_dataset() -> impl Strategy<Value = Arc<PenguinDataset>> {
    prop::collection::vec(arb_penguin(), 0..60).prop_map(|rows| Arc::new(PenguinDataset::from_rows(rows)))
}

fn arb_species() -> impl Strategy<Value = BTreeSet<String>> {
    prop::sample::subsequence(LABELS.to_vec(), 0..=LABELS.len())
        .prop_map(|labels| labels.into_iter().map(String::from).collect())
}

fn passes(p: &Penguin, mass: f64, species: &BTreeSet<String>) -> bool {
    species.contains(&p.species) && p.body_mass_g.is_some_and(|m| m < mass)
}

proptest! {
    #[test]
    fn view_is_sound_and_complete(
        ds in arb_dataset(),
        mass in 2000.0f64..7000.0,
        species in arb_species(),
    ) {
        let view = compute_filtered_view(&ds, mass, &species);

        for p in view.iter() {
            prop_assert!(passes(p, mass, &species));
        }
        let expected: Vec<usize> = ds
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, p)| passes(p, mass, &species))
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(view.indices(), expected.as_slice());
    }

    #[test]
    fn repeated_calls_are_identical(
        ds in arb_dataset(),
        mass in 2000.0f64..7000.0,
        species in arb_species(),
    ) {
        let first = compute_filtered_view(&ds, mass, &species);
        let second = compute_filtered_view(&ds, mass, &species);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn raising_threshold_never_shrinks(
        ds in arb_dataset(),
        mass in 2000.0f64..7000.0,
        extra in 0.0f64..3000.0,
        species in arb_species(),
    ) {
        let low = compute_filtered_view(&ds, mass, &species);
        let high = compute_filtered_view(&ds, mass + extra, &species);
        let high_rows: BTreeSet<usize> = high.indices().iter().copied().collect();
        prop_assert!(low.indices().iter().all(|i| high_rows.contains(i)));
    }

    #[test]
    fn removing_a_species_never_grows(
        ds in arb_dataset(),
        mass in 2000.0f64..7000.0,
        species in arb_species(),
        dropped in prop::sample::select(LABELS.to_vec()),
    ) {
        let before = compute_filtered_view(&ds, mass, &species);
        let mut fewer = species.clone();
        fewer.remove(dropped);
        let after = compute_filtered_view(&ds, mass, &fewer);

        let before_rows: BTreeSet<usize> = before.indices().iter().copied().collect();
        prop_assert!(after.indices().iter().all(|i| before_rows.contains(i)));
    }

    #[test]
    fn engine_matches_direct_computation(
        ds in arb_dataset(),
        steps in prop::collection::vec((2000.0f64..7000.0, arb_species()), 1..8),
    ) {
        let mut engine = FilterEngine::new(Arc::clone(&ds), FilterState::new(6000.0, LABELS));
        for (mass, species) in steps {
            engine.set_mass_threshold(mass);
            engine.set_selected_species(species.clone());
            let expected = compute_filtered_view(&ds, mass, &species);
            prop_assert_eq!(engine.view(), &expected);
        }
    }
}

#[test]
fn bundled_data_with_all_species_hides_only_heavy_and_unmeasured() {
    let ds = Arc::new(DataSource::Bundled.load().unwrap());
    let view = compute_filtered_view(&ds, f64::INFINITY, ds.species());
    assert_eq!(view.len(), ds.len() - 2);

    let view = compute_filtered_view(&ds, 6000.0, ds.species());
    assert_eq!(view.len(), ds.len() - 6);
    assert!(view.iter().all(|p| p.body_mass_g.is_some_and(|m| m < 6000.0)));
}
