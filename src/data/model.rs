use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Penguin – one row of the dataset
// ---------------------------------------------------------------------------

/// A single penguin observation.
///
/// Measurements are optional because the published dataset marks unmeasured
/// cells as `NA`.
#[derive(Debug, Clone, PartialEq)]
pub struct Penguin {
    pub species: String,
    pub island: String,
    pub bill_length_mm: Option<f64>,
    pub bill_depth_mm: Option<f64>,
    pub flipper_length_mm: Option<f64>,
    pub body_mass_g: Option<f64>,
    pub sex: Option<String>,
    pub year: Option<i32>,
}

impl Penguin {
    /// Row with only the fields the filter looks at; everything else missing.
    pub fn new(species: &str, island: &str, body_mass_g: Option<f64>) -> Self {
        Penguin {
            species: species.to_string(),
            island: island.to_string(),
            bill_length_mm: None,
            bill_depth_mm: None,
            flipper_length_mm: None,
            body_mass_g,
            sex: None,
            year: None,
        }
    }

    pub fn with_bill(mut self, length_mm: f64, depth_mm: f64) -> Self {
        self.bill_length_mm = Some(length_mm);
        self.bill_depth_mm = Some(depth_mm);
        self
    }
}

// ---------------------------------------------------------------------------
// PenguinDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full dataset with a pre-computed species index. Never mutated after
/// construction; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct PenguinDataset {
    rows: Vec<Penguin>,
    species: BTreeSet<String>,
}

impl PenguinDataset {
    pub fn from_rows(rows: Vec<Penguin>) -> Self {
        let species = rows.iter().map(|p| p.species.clone()).collect();
        PenguinDataset { rows, species }
    }

    pub fn rows(&self) -> &[Penguin] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&Penguin> {
        self.rows.get(index)
    }

    /// Sorted set of species labels present in the data.
    pub fn species(&self) -> &BTreeSet<String> {
        &self.species
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_index_is_sorted_and_deduplicated() {
        let ds = PenguinDataset::from_rows(vec![
            Penguin::new("Gentoo", "Biscoe", Some(5000.0)),
            Penguin::new("Adelie", "Dream", Some(3000.0)),
            Penguin::new("Gentoo", "Biscoe", None),
        ]);
        let species: Vec<&str> = ds.species().iter().map(String::as_str).collect();
        assert_eq!(species, ["Adelie", "Gentoo"]);
        assert_eq!(ds.len(), 3);
        assert!(!ds.is_empty());
        assert_eq!(ds.get(1).map(|p| p.island.as_str()), Some("Dream"));
        assert!(ds.get(3).is_none());
    }
}
