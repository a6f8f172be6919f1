/// Wire record to domain model conversion
use crate::clients::models::{WireMass, WireMoon};
use crate::domain::Moon;

pub const UNKNOWN: &str = "Unknown";
pub const ANCIENT: &str = "Ancient";

/// Normalise one wire moon. Every optional field resolves to a default.
pub fn map_to_domain(raw: WireMoon) -> Moon {
    Moon {
        id: raw.id,
        name: raw.name,
        english_name: raw.english_name,
        parent_planet: raw
            .around_planet
            .and_then(|around| around.planet)
            .unwrap_or_else(|| UNKNOWN.to_string()),
        mean_radius: raw.mean_radius,
        mass: format_mass(raw.mass.as_ref()),
        density: raw.density,
        gravity: raw.gravity,
        escape_velocity: raw.escape_velocity,
        orbital_period: raw.orbital_period,
        rotation_period: raw.rotation_period,
        distance_from_planet: raw.semimajor_axis,
        eccentricity: raw.eccentricity,
        inclination: raw.inclination,
        discovered_by: raw.discovered_by.unwrap_or_else(|| UNKNOWN.to_string()),
        discovery_date: raw.discovery_date.unwrap_or_else(|| ANCIENT.to_string()),
        avg_temp: raw.avg_temp,
        dimension: raw.dimension.unwrap_or_default(),
        axial_tilt: raw.axial_tilt,
    }
}

pub fn map_to_domain_list(raw: Vec<WireMoon>) -> Vec<Moon> {
    raw.into_iter().map(map_to_domain).collect()
}

/// "5.97 × 10^24 kg", or "Unknown" when either half is missing
pub fn format_mass(mass: Option<&WireMass>) -> String {
    match mass.and_then(|m| m.mass_value.zip(m.mass_exponent)) {
        Some((value, exponent)) => format!("{:.2} × 10^{} kg", value, exponent),
        None => UNKNOWN.to_string(),
    }
}
