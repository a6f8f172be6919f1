/// Compiled-in reference catalogs
use crate::query::{search, Searchable};

mod categories;
mod planet_moons;
mod planets;

pub use categories::CategoryCatalog;
pub use planet_moons::PlanetMoonCatalog;
pub use planets::PlanetCatalog;

/// Read-only view over a static table.
///
/// Order is always declaration order. Lookups that miss return `None`.
pub trait Catalog {
    type Item: Searchable<Field = Self::Field> + Clone + 'static;
    type Field: Copy + 'static;
    type Id: PartialEq + ?Sized;

    /// Name field first, then the secondary descriptive field
    const SEARCH_FIELDS: &'static [Self::Field];

    fn entries(&self) -> &'static [Self::Item];

    fn id_of(item: &Self::Item) -> &Self::Id;

    fn get_all(&self) -> Vec<Self::Item> {
        self.entries().to_vec()
    }

    fn search(&self, query: &str) -> Vec<Self::Item> {
        search(self.get_all(), query, Self::SEARCH_FIELDS)
    }

    fn get_by_id(&self, id: &Self::Id) -> Option<Self::Item> {
        self.entries()
            .iter()
            .find(|item| Self::id_of(item) == id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrbitZone, PlanetField, PlanetKind, PlanetSort};
    use crate::query::{sort, SortDirection};

    fn planet_names(planets: &[crate::domain::Planet]) -> Vec<&'static str> {
        planets.iter().map(|p| p.name).collect()
    }

    #[test]
    fn test_planet_catalog_has_ten_entries_in_distance_order() {
        let planets = PlanetCatalog.get_all();
        assert_eq!(planets.len(), 10);
        assert_eq!(
            planet_names(&planets),
            vec![
                "Sun", "Mercury", "Venus", "Earth", "Moon", "Mars", "Jupiter", "Saturn", "Uranus",
                "Neptune"
            ]
        );
        assert_eq!(PlanetCatalog.get_all(), planets);
    }

    #[test]
    fn test_planet_ids_are_unique() {
        let planets = PlanetCatalog.get_all();
        let mut ids: Vec<u32> = planets.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), planets.len());
    }

    #[test]
    fn test_planet_search_by_type_finds_giants() {
        let giants = PlanetCatalog.search("giant");
        assert_eq!(
            planet_names(&giants),
            vec!["Jupiter", "Saturn", "Uranus", "Neptune"]
        );
        assert!(giants
            .iter()
            .all(|p| matches!(p.kind, PlanetKind::GasGiant | PlanetKind::IceGiant)));
    }

    #[test]
    fn test_planet_search_is_case_insensitive() {
        assert_eq!(PlanetCatalog.search("EARTH"), PlanetCatalog.search("earth"));
        assert_eq!(planet_names(&PlanetCatalog.search("EARTH")), vec!["Earth"]);
    }

    #[test]
    fn test_empty_search_returns_everything() {
        assert_eq!(PlanetCatalog.search(""), PlanetCatalog.get_all());
        assert_eq!(PlanetMoonCatalog.search(""), PlanetMoonCatalog.get_all());
        assert_eq!(CategoryCatalog.search(""), CategoryCatalog.get_all());
    }

    #[test]
    fn test_planet_get_by_id() {
        assert_eq!(PlanetCatalog.get_by_id(&4).map(|p| p.name), Some("Earth"));
        assert!(PlanetCatalog.get_by_id(&99).is_none());
    }

    #[test]
    fn test_planet_search_on_name_only_field() {
        let found = search(PlanetCatalog.get_all(), "hydrogen", &[PlanetField::Atmosphere]);
        assert_eq!(
            planet_names(&found),
            vec!["Sun", "Mercury", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );
    }

    #[test]
    fn test_planet_sort_by_distance_uses_lossy_parse() {
        let desc = sort(
            PlanetCatalog.get_all(),
            PlanetSort::Distance,
            SortDirection::Descending,
        );
        assert_eq!(desc[0].name, "Neptune");
        assert_eq!(desc[1].name, "Uranus");
        assert_eq!(desc[2].name, "Saturn");
        assert_eq!(desc.last().map(|p| p.name), Some("Sun"));
    }

    #[test]
    fn test_planet_sort_by_size() {
        let desc = sort(PlanetCatalog.get_all(), PlanetSort::Size, SortDirection::Descending);
        assert_eq!(planet_names(&desc[..3]), vec!["Sun", "Jupiter", "Saturn"]);
        assert_eq!(desc.last().map(|p| p.name), Some("Moon"));
    }

    #[test]
    fn test_planet_moon_catalog_order_and_zones() {
        let all = PlanetMoonCatalog.get_all();
        let ids: Vec<&str> = all.iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec!["earth", "mars", "jupiter", "saturn", "uranus", "neptune", "pluto"]
        );

        let dwarfs = PlanetMoonCatalog.by_zone(OrbitZone::Dwarf);
        assert_eq!(dwarfs.len(), 1);
        assert_eq!(dwarfs[0].name, "Pluto");
        assert_eq!(PlanetMoonCatalog.by_zone(OrbitZone::Inner).len(), 2);
        assert_eq!(PlanetMoonCatalog.by_zone(OrbitZone::Outer).len(), 4);
    }

    #[test]
    fn test_planet_moon_search_matches_description() {
        let found = PlanetMoonCatalog.search("titan");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "saturn");
        assert_eq!(PlanetMoonCatalog.get_by_id("pluto").map(|p| p.moon_count), Some(5));
        assert!(PlanetMoonCatalog.get_by_id("vulcan").is_none());
    }

    #[test]
    fn test_category_catalog() {
        let all = CategoryCatalog.get_all();
        assert_eq!(all.len(), 7);
        assert_eq!(all[0].title, "Planets");
        assert_eq!(CategoryCatalog.enabled().len(), 7);

        let found = CategoryCatalog.search("satellites");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Moons");
        assert_eq!(
            CategoryCatalog.get_by_id(&3).map(|c| c.gradient.start),
            Some("#eb3349")
        );
    }
}
