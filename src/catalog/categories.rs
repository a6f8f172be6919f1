use super::Catalog;
use crate::domain::{Category, CategoryField, GradientColors};

pub struct CategoryCatalog;

impl CategoryCatalog {
    pub fn enabled(&self) -> Vec<Category> {
        CATEGORIES.iter().filter(|c| c.enabled).cloned().collect()
    }
}

impl Catalog for CategoryCatalog {
    type Item = Category;
    type Field = CategoryField;
    type Id = u32;

    const SEARCH_FIELDS: &'static [CategoryField] =
        &[CategoryField::Title, CategoryField::Subtitle];

    fn entries(&self) -> &'static [Category] {
        &CATEGORIES
    }

    fn id_of(item: &Category) -> &u32 {
        &item.id
    }
}

const fn gradient(start: &'static str, end: &'static str) -> GradientColors {
    GradientColors { start, end }
}

static CATEGORIES: [Category; 7] = [
    Category {
        id: 1,
        title: "Planets",
        subtitle: "Explore our Solar System",
        gradient: gradient("#667eea", "#764ba2"),
        item_count: "8 Planets + Dwarf",
        enabled: true,
    },
    Category {
        id: 2,
        title: "Moons",
        subtitle: "Natural Satellites",
        gradient: gradient("#11998e", "#38ef7d"),
        item_count: "200+ Moons",
        enabled: true,
    },
    Category {
        id: 3,
        title: "Space Missions",
        subtitle: "Human Exploration",
        gradient: gradient("#eb3349", "#f45c43"),
        item_count: "50+ Missions",
        enabled: true,
    },
    Category {
        id: 4,
        title: "Stars",
        subtitle: "Constellations & Beyond",
        gradient: gradient("#f093fb", "#f5576c"),
        item_count: "88 Constellations",
        enabled: true,
    },
    Category {
        id: 5,
        title: "Asteroids & Comets",
        subtitle: "Space Rocks & Ice",
        gradient: gradient("#4facfe", "#00f2fe"),
        item_count: "Famous Objects",
        enabled: true,
    },
    Category {
        id: 6,
        title: "Galaxies",
        subtitle: "Islands of Stars",
        gradient: gradient("#a18cd1", "#fbc2eb"),
        item_count: "Galaxy Types",
        enabled: true,
    },
    Category {
        id: 7,
        title: "Space Quiz",
        subtitle: "Test Your Knowledge",
        gradient: gradient("#ff9a9e", "#fecfef"),
        item_count: "100+ Questions",
        enabled: true,
    },
];
