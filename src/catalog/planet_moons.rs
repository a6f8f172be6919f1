use super::Catalog;
use crate::domain::{OrbitZone, PlanetWithMoons, PlanetWithMoonsField};

/// Moon-bearing planets, inner to outer to dwarf
pub struct PlanetMoonCatalog;

impl PlanetMoonCatalog {
    pub fn by_zone(&self, zone: OrbitZone) -> Vec<PlanetWithMoons> {
        PLANETS_WITH_MOONS
            .iter()
            .filter(|p| p.zone == zone)
            .cloned()
            .collect()
    }
}

impl Catalog for PlanetMoonCatalog {
    type Item = PlanetWithMoons;
    type Field = PlanetWithMoonsField;
    type Id = str;

    const SEARCH_FIELDS: &'static [PlanetWithMoonsField] = &[
        PlanetWithMoonsField::Name,
        PlanetWithMoonsField::Description,
    ];

    fn entries(&self) -> &'static [PlanetWithMoons] {
        &PLANETS_WITH_MOONS
    }

    fn id_of(item: &PlanetWithMoons) -> &str {
        item.id
    }
}

static PLANETS_WITH_MOONS: [PlanetWithMoons; 7] = [
    PlanetWithMoons {
        id: "earth",
        name: "Earth",
        moon_count: 1,
        description: "Our home planet with one natural satellite - The Moon",
        zone: OrbitZone::Inner,
    },
    PlanetWithMoons {
        id: "mars",
        name: "Mars",
        moon_count: 2,
        description: "The Red Planet with two small moons: Phobos and Deimos",
        zone: OrbitZone::Inner,
    },
    PlanetWithMoons {
        id: "jupiter",
        name: "Jupiter",
        moon_count: 95,
        description: "Gas giant with the most known moons including Io, Europa, Ganymede",
        zone: OrbitZone::Outer,
    },
    PlanetWithMoons {
        id: "saturn",
        name: "Saturn",
        moon_count: 146,
        description: "Ringed planet with iconic moons like Titan and Enceladus",
        zone: OrbitZone::Outer,
    },
    PlanetWithMoons {
        id: "uranus",
        name: "Uranus",
        moon_count: 28,
        description: "Ice giant with moons named after Shakespeare characters",
        zone: OrbitZone::Outer,
    },
    PlanetWithMoons {
        id: "neptune",
        name: "Neptune",
        moon_count: 16,
        description: "Distant ice giant with Triton, its largest moon",
        zone: OrbitZone::Outer,
    },
    PlanetWithMoons {
        id: "pluto",
        name: "Pluto",
        moon_count: 5,
        description: "Dwarf planet with five known moons including Charon",
        zone: OrbitZone::Dwarf,
    },
];
