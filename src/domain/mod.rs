/// Domain models for the application
use crate::errors::ApiError;
use crate::query::{parse_lossy_number, token, Classified, Searchable, SortValue, Sortable};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

mod moon;
pub mod spacex;

pub use moon::{Moon, MoonField, MoonGroup, MoonSort, ParentBody, SizeCategory};

/// A body of the static planet catalog. All physical values are display text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Planet {
    pub id: u32,
    pub name: &'static str,
    pub kind: PlanetKind,
    pub galaxy: &'static str,
    /// Million km
    pub distance_from_sun: &'static str,
    /// m/s²
    pub gravity: &'static str,
    /// km
    pub diameter: &'static str,
    pub orbital_period: &'static str,
    pub moons: u32,
    pub temperature: &'static str,
    pub day_length: &'static str,
    pub year_length: &'static str,
    pub atmosphere: &'static str,
    pub overview: &'static str,
    pub fun_facts: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlanetKind {
    Star,
    Terrestrial,
    #[serde(rename = "Gas Giant")]
    GasGiant,
    #[serde(rename = "Ice Giant")]
    IceGiant,
    #[serde(rename = "Natural Satellite")]
    NaturalSatellite,
}

impl PlanetKind {
    pub fn label(self) -> &'static str {
        match self {
            PlanetKind::Star => "Star",
            PlanetKind::Terrestrial => "Terrestrial",
            PlanetKind::GasGiant => "Gas Giant",
            PlanetKind::IceGiant => "Ice Giant",
            PlanetKind::NaturalSatellite => "Natural Satellite",
        }
    }
}

impl fmt::Display for PlanetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlanetKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match token(s).as_str() {
            "star" => Ok(PlanetKind::Star),
            "terrestrial" => Ok(PlanetKind::Terrestrial),
            "gasgiant" => Ok(PlanetKind::GasGiant),
            "icegiant" => Ok(PlanetKind::IceGiant),
            "naturalsatellite" => Ok(PlanetKind::NaturalSatellite),
            _ => Err(ApiError::InvalidInput(format!("unknown planet type '{}'", s))),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum PlanetField {
    Name,
    Kind,
    Atmosphere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetSort {
    Distance,
    Name,
    Size,
}

impl FromStr for PlanetSort {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match token(s).as_str() {
            "distance" => Ok(PlanetSort::Distance),
            "name" => Ok(PlanetSort::Name),
            "size" | "diameter" => Ok(PlanetSort::Size),
            _ => Err(ApiError::InvalidInput(format!("unknown planet sort '{}'", s))),
        }
    }
}

impl Searchable for Planet {
    type Field = PlanetField;

    fn field_text(&self, field: PlanetField) -> Cow<'_, str> {
        match field {
            PlanetField::Name => Cow::Borrowed(self.name),
            PlanetField::Kind => Cow::Borrowed(self.kind.label()),
            PlanetField::Atmosphere => Cow::Borrowed(self.atmosphere),
        }
    }
}

impl Sortable for Planet {
    type SortKey = PlanetSort;

    fn sort_value(&self, key: PlanetSort) -> SortValue<'_> {
        match key {
            PlanetSort::Distance => SortValue::Number(parse_lossy_number(self.distance_from_sun)),
            PlanetSort::Name => SortValue::Text(self.name),
            PlanetSort::Size => SortValue::Number(parse_lossy_number(self.diameter)),
        }
    }
}

impl Classified for Planet {
    type Kind = PlanetKind;

    fn kind(&self) -> PlanetKind {
        self.kind
    }
}

/// Planet summary used to pick whose moons to browse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetWithMoons {
    pub id: &'static str,
    pub name: &'static str,
    pub moon_count: u32,
    pub description: &'static str,
    pub zone: OrbitZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitZone {
    /// Mercury, Venus, Earth, Mars
    Inner,
    /// Jupiter, Saturn, Uranus, Neptune
    Outer,
    Dwarf,
}

impl FromStr for OrbitZone {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match token(s).as_str() {
            "inner" => Ok(OrbitZone::Inner),
            "outer" => Ok(OrbitZone::Outer),
            "dwarf" => Ok(OrbitZone::Dwarf),
            _ => Err(ApiError::InvalidInput(format!("unknown orbit zone '{}'", s))),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum PlanetWithMoonsField {
    Name,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetWithMoonsSort {
    MoonCount,
    Name,
}

impl FromStr for PlanetWithMoonsSort {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match token(s).as_str() {
            "moons" | "mooncount" => Ok(PlanetWithMoonsSort::MoonCount),
            "name" => Ok(PlanetWithMoonsSort::Name),
            _ => Err(ApiError::InvalidInput(format!("unknown sort '{}'", s))),
        }
    }
}

impl Searchable for PlanetWithMoons {
    type Field = PlanetWithMoonsField;

    fn field_text(&self, field: PlanetWithMoonsField) -> Cow<'_, str> {
        match field {
            PlanetWithMoonsField::Name => Cow::Borrowed(self.name),
            PlanetWithMoonsField::Description => Cow::Borrowed(self.description),
        }
    }
}

impl Sortable for PlanetWithMoons {
    type SortKey = PlanetWithMoonsSort;

    fn sort_value(&self, key: PlanetWithMoonsSort) -> SortValue<'_> {
        match key {
            PlanetWithMoonsSort::MoonCount => SortValue::Number(f64::from(self.moon_count)),
            PlanetWithMoonsSort::Name => SortValue::Text(self.name),
        }
    }
}

impl Classified for PlanetWithMoons {
    type Kind = OrbitZone;

    fn kind(&self) -> OrbitZone {
        self.zone
    }
}

/// Home screen category tile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub gradient: GradientColors,
    pub item_count: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradientColors {
    pub start: &'static str,
    pub end: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub enum CategoryField {
    Title,
    Subtitle,
}

impl Searchable for Category {
    type Field = CategoryField;

    fn field_text(&self, field: CategoryField) -> Cow<'_, str> {
        match field {
            CategoryField::Title => Cow::Borrowed(self.title),
            CategoryField::Subtitle => Cow::Borrowed(self.subtitle),
        }
    }
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: chrono::DateTime<chrono::Utc>,
}
