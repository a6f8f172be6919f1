/// Wire shapes of the Solar System OpenData API.
///
/// Scalars the API omits or sends as `null` decode as zero or empty, so
/// any structurally valid record can be mapped.
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
pub struct BodyListResponse {
    pub bodies: Vec<WireMoon>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireMoon {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub english_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub semimajor_axis: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub eccentricity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub inclination: f64,
    pub mass: Option<WireMass>,
    #[serde(deserialize_with = "null_as_default")]
    pub density: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub gravity: f64,
    #[serde(rename = "escape", deserialize_with = "null_as_default")]
    pub escape_velocity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub mean_radius: f64,
    pub dimension: Option<String>,
    #[serde(rename = "sideralOrbit", deserialize_with = "null_as_default")]
    pub orbital_period: f64,
    #[serde(rename = "sideralRotation", deserialize_with = "null_as_default")]
    pub rotation_period: f64,
    pub around_planet: Option<WireAroundPlanet>,
    pub discovered_by: Option<String>,
    pub discovery_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub axial_tilt: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub avg_temp: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireMass {
    pub mass_value: Option<f64>,
    pub mass_exponent: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireAroundPlanet {
    pub planet: Option<String>,
}

/// Explicit `null` reads the same as an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
