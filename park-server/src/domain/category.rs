//! Ride categories.
//!
//! Rides are grouped for display by looking their exact name up in a
//! fixed list. The lists are turned into a [`CategoryIndex`] once at
//! startup and shared by every request.

use std::collections::HashMap;
use std::fmt;

/// Display grouping for a ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    SensationsFortes,
    Familiale,
    PetitsGaulois,
    Autre,
}

impl Category {
    /// Every category, in page order.
    pub const ALL: [Category; 4] = [
        Category::SensationsFortes,
        Category::Familiale,
        Category::PetitsGaulois,
        Category::Autre,
    ];

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Category::SensationsFortes => "Sensations fortes",
            Category::Familiale => "Familiale",
            Category::PetitsGaulois => "Petits Gaulois",
            Category::Autre => "Autre",
        }
    }

    /// Short identifier for CSS classes and JSON keys.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::SensationsFortes => "sensations",
            Category::Familiale => "familles",
            Category::PetitsGaulois => "enfants",
            Category::Autre => "autres",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mapping from exact ride name to category.
///
/// Names not in the index are [`Category::Autre`].
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    names: HashMap<String, Category>,
}

impl CategoryIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a ride name to a category.
    ///
    /// The first assignment for a name wins; later ones are ignored.
    pub fn add(&mut self, name: impl Into<String>, category: Category) {
        self.names.entry(name.into()).or_insert(category);
    }

    /// Category for a ride name. Matching is exact and case-sensitive.
    pub fn classify(&self, name: &str) -> Category {
        self.names.get(name).copied().unwrap_or(Category::Autre)
    }

    /// Number of known ride names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no names are known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Builder for creating a category index.
#[derive(Debug, Default)]
pub struct CategoryIndexBuilder {
    inner: CategoryIndex,
}

impl CategoryIndexBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign every name in `names` to `category`.
    pub fn add(mut self, category: Category, names: &[&str]) -> Self {
        for name in names {
            self.inner.add(*name, category);
        }
        self
    }

    /// Build the index.
    pub fn build(self) -> CategoryIndex {
        self.inner
    }
}

const SENSATIONS_FORTES: &[&str] = &[
    "Toutatis",
    "OzIris",
    "Tonnerre 2 Zeus",
    "Goudurix",
    "La Trace du Hourra",
    "Discobélix",
    "La Tour de Numérobis",
    "Le Cheval de Troie",
    "Les Chaises Volantes",
    "La Galère",
];

const FAMILIALES: &[&str] = &[
    "Pégase Express",
    "Le Vol d'Icare",
    "L'Oxygénarium",
    "Menhir Express",
    "Romus et Rapidus",
    "La Revanche des Pirates",
    "Le Grand Splatch",
    "La revanche des pirates - Le Grand Splatch",
    "Le Défi de César",
    "Attention Menhir !",
    "Les Espions de César",
    "Les Chaudrons",
    "La Petite Tempête",
    "SOS Tournevis",
    "Cétautomatix",
    "L'Hydre de Lerne",
    "La Rivière d'Elis",
    "Epidemaïs Croisières",
];

const PETITS_GAULOIS: &[&str] = &[
    "Le Mini Carrousel",
    "Les Petites Chaises Volantes",
    "Les Petits Chars tamponneurs",
    "Les Petits Drakkars",
    "Aérodynamix",
    "Enigmatix",
    "Etamine",
    "Hydrolix",
    "Lavomatix",
    "L'Escadrille des As",
    "Le Petit Train",
    "Les Chevaux du Roy",
    "Sanglier d'Or playground",
];

/// Category index for Parc Astérix rides.
pub fn parc_asterix() -> CategoryIndex {
    // Order matters: a name listed twice keeps its first category.
    CategoryIndexBuilder::new()
        .add(Category::SensationsFortes, SENSATIONS_FORTES)
        .add(Category::Familiale, FAMILIALES)
        .add(Category::PetitsGaulois, PETITS_GAULOIS)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_index_classifies_everything_as_other() {
        let index = CategoryIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.classify("Toutatis"), Category::Autre);
    }

    #[test]
    fn first_assignment_wins() {
        let index = CategoryIndexBuilder::new()
            .add(Category::SensationsFortes, &["Toutatis"])
            .add(Category::Familiale, &["Toutatis", "Menhir Express"])
            .build();

        assert_eq!(index.len(), 2);
        assert_eq!(index.classify("Toutatis"), Category::SensationsFortes);
        assert_eq!(index.classify("Menhir Express"), Category::Familiale);
    }

    #[test]
    fn parc_asterix_lists() {
        let index = parc_asterix();
        assert_eq!(
            index.len(),
            SENSATIONS_FORTES.len() + FAMILIALES.len() + PETITS_GAULOIS.len()
        );
        assert_eq!(index.classify("Tonnerre 2 Zeus"), Category::SensationsFortes);
        assert_eq!(index.classify("L'Hydre de Lerne"), Category::Familiale);
        assert_eq!(index.classify("Hydrolix"), Category::PetitsGaulois);
        assert_eq!(index.classify("Le Carrousel de César"), Category::Autre);
    }

    #[test]
    fn matching_is_exact() {
        let index = parc_asterix();
        assert_eq!(index.classify("toutatis"), Category::Autre);
        assert_eq!(index.classify("Toutatis "), Category::Autre);
        assert_eq!(index.classify("Discobelix"), Category::Autre);
    }

    #[test]
    fn labels_and_slugs() {
        assert_eq!(Category::SensationsFortes.to_string(), "Sensations fortes");
        assert_eq!(Category::PetitsGaulois.label(), "Petits Gaulois");
        assert_eq!(Category::Autre.slug(), "autres");
        assert_eq!(Category::ALL.len(), 4);
    }
}
