use crate::errors::ApiError;
use crate::query::{token, Classified, Searchable, SortValue, Sortable};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Natural satellite as consumed by list and detail views
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Moon {
    pub id: String,
    pub name: String,
    pub english_name: String,
    /// Free text from the source, see [`Moon::parent_body`]
    pub parent_planet: String,
    /// km
    pub mean_radius: f64,
    pub mass: String,
    /// g/cm³
    pub density: f64,
    /// m/s²
    pub gravity: f64,
    /// m/s
    pub escape_velocity: f64,
    /// days
    pub orbital_period: f64,
    /// hours
    pub rotation_period: f64,
    /// km
    pub distance_from_planet: f64,
    pub eccentricity: f64,
    /// degrees
    pub inclination: f64,
    pub discovered_by: String,
    pub discovery_date: String,
    /// Kelvin
    pub avg_temp: i32,
    /// Set for irregular bodies that have no single radius
    pub dimension: String,
    pub axial_tilt: f64,
}

impl Moon {
    pub fn parent_body(&self) -> ParentBody {
        ParentBody::from_source(&self.parent_planet)
    }

    pub fn size_category(&self) -> SizeCategory {
        SizeCategory::from_radius(self.mean_radius)
    }

    pub fn orbital_period_label(&self) -> String {
        let days = self.orbital_period;
        if days < 1.0 {
            format!("{:.1} hours", days * 24.0)
        } else if days < 30.0 {
            format!("{:.2} days", days)
        } else {
            format!("{:.1} months", days / 30.0)
        }
    }
}

/// Parent planet normalised from the source's (partly French) naming.
///
/// Variant order is the display order; unrecognised names sort last.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParentBody {
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Other(String),
}

impl ParentBody {
    pub fn from_source(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.to_lowercase().as_str() {
            "terre" | "earth" => ParentBody::Earth,
            "mars" => ParentBody::Mars,
            "jupiter" => ParentBody::Jupiter,
            "saturne" | "saturn" => ParentBody::Saturn,
            "uranus" => ParentBody::Uranus,
            "neptune" => ParentBody::Neptune,
            "pluton" | "pluto" => ParentBody::Pluto,
            _ => ParentBody::Other(capitalize_first(raw)),
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            ParentBody::Earth => "Earth",
            ParentBody::Mars => "Mars",
            ParentBody::Jupiter => "Jupiter",
            ParentBody::Saturn => "Saturn",
            ParentBody::Uranus => "Uranus",
            ParentBody::Neptune => "Neptune",
            ParentBody::Pluto => "Pluto",
            ParentBody::Other(name) => name,
        }
    }

    /// Fixed display position, 1 (Earth) to 7 (Pluto), 8 for anything else.
    pub fn rank(&self) -> u8 {
        match self {
            ParentBody::Earth => 1,
            ParentBody::Mars => 2,
            ParentBody::Jupiter => 3,
            ParentBody::Saturn => 4,
            ParentBody::Uranus => 5,
            ParentBody::Neptune => 6,
            ParentBody::Pluto => 7,
            ParentBody::Other(_) => 8,
        }
    }
}

impl fmt::Display for ParentBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeCategory {
    Giant,
    Large,
    Medium,
    Small,
    Tiny,
}

impl SizeCategory {
    /// Bucket by mean radius in km.
    pub fn from_radius(radius: f64) -> Self {
        if radius > 1000.0 {
            SizeCategory::Giant
        } else if radius > 500.0 {
            SizeCategory::Large
        } else if radius > 100.0 {
            SizeCategory::Medium
        } else if radius > 10.0 {
            SizeCategory::Small
        } else {
            SizeCategory::Tiny
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeCategory::Giant => "Giant Moon",
            SizeCategory::Large => "Large Moon",
            SizeCategory::Medium => "Medium Moon",
            SizeCategory::Small => "Small Moon",
            SizeCategory::Tiny => "Tiny Moon",
        }
    }
}

impl FromStr for SizeCategory {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match token(s).trim_end_matches("moon") {
            "giant" => Ok(SizeCategory::Giant),
            "large" => Ok(SizeCategory::Large),
            "medium" => Ok(SizeCategory::Medium),
            "small" => Ok(SizeCategory::Small),
            "tiny" => Ok(SizeCategory::Tiny),
            _ => Err(ApiError::InvalidInput(format!("unknown moon size '{}'", s))),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum MoonField {
    Name,
    EnglishName,
    ParentPlanet,
    DiscoveredBy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonSort {
    Size,
    Name,
    Orbit,
    Distance,
}

impl FromStr for MoonSort {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match token(s).as_str() {
            "size" | "radius" => Ok(MoonSort::Size),
            "name" => Ok(MoonSort::Name),
            "orbit" | "orbitalperiod" => Ok(MoonSort::Orbit),
            "distance" => Ok(MoonSort::Distance),
            _ => Err(ApiError::InvalidInput(format!("unknown moon sort '{}'", s))),
        }
    }
}

impl Searchable for Moon {
    type Field = MoonField;

    fn field_text(&self, field: MoonField) -> Cow<'_, str> {
        match field {
            MoonField::Name => Cow::Borrowed(&self.name),
            MoonField::EnglishName => Cow::Borrowed(&self.english_name),
            MoonField::ParentPlanet => Cow::Owned(self.parent_body().display_name().to_string()),
            MoonField::DiscoveredBy => Cow::Borrowed(&self.discovered_by),
        }
    }
}

impl Sortable for Moon {
    type SortKey = MoonSort;

    fn sort_value(&self, key: MoonSort) -> SortValue<'_> {
        match key {
            MoonSort::Size => SortValue::Number(self.mean_radius),
            MoonSort::Name => SortValue::Text(&self.english_name),
            MoonSort::Orbit => SortValue::Number(self.orbital_period),
            MoonSort::Distance => SortValue::Number(self.distance_from_planet),
        }
    }
}

impl Classified for Moon {
    type Kind = SizeCategory;

    fn kind(&self) -> SizeCategory {
        self.size_category()
    }
}

/// Moons orbiting one parent, in display order
#[derive(Debug, Clone, Serialize)]
pub struct MoonGroup {
    pub planet: String,
    pub count: usize,
    pub moons: Vec<Moon>,
}

impl MoonGroup {
    pub fn new(parent: &ParentBody, moons: Vec<Moon>) -> Self {
        Self {
            planet: parent.display_name().to_string(),
            count: moons.len(),
            moons,
        }
    }
}
