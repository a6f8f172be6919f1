/// Response shapes: the record as received plus its derived display values
use crate::domain::spacex::{CrewMember, CrewStatus, Launch, LaunchStatus, Rocket, RocketStatus};
use crate::domain::{Moon, MoonGroup, SizeCategory};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MoonView {
    #[serde(flatten)]
    pub moon: Moon,
    pub parent: String,
    pub size_category: SizeCategory,
    pub size_label: &'static str,
    pub orbital_period_label: String,
}

impl From<Moon> for MoonView {
    fn from(moon: Moon) -> Self {
        let size = moon.size_category();
        Self {
            parent: moon.parent_body().to_string(),
            size_category: size,
            size_label: size.label(),
            orbital_period_label: moon.orbital_period_label(),
            moon,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MoonGroupView {
    pub planet: String,
    pub count: usize,
    pub moons: Vec<MoonView>,
}

impl From<MoonGroup> for MoonGroupView {
    fn from(group: MoonGroup) -> Self {
        Self {
            planet: group.planet,
            count: group.count,
            moons: group.moons.into_iter().map(MoonView::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LaunchView {
    #[serde(flatten)]
    pub launch: Launch,
    pub status: LaunchStatus,
    pub date_label: String,
    pub patch_url: Option<String>,
}

impl From<Launch> for LaunchView {
    fn from(launch: Launch) -> Self {
        Self {
            status: launch.status(),
            date_label: launch.date_label(),
            patch_url: launch.patch_url().map(str::to_string),
            launch,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RocketView {
    #[serde(flatten)]
    pub rocket: Rocket,
    pub status: RocketStatus,
    pub cost_label: String,
}

impl From<Rocket> for RocketView {
    fn from(rocket: Rocket) -> Self {
        Self {
            status: rocket.status(),
            cost_label: rocket.cost_label(),
            rocket,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CrewView {
    #[serde(flatten)]
    pub member: CrewMember,
    #[serde(rename = "crew_status")]
    pub status: CrewStatus,
    pub agency_label: String,
}

impl From<CrewMember> for CrewView {
    fn from(member: CrewMember) -> Self {
        Self {
            status: member.status(),
            agency_label: member.agency_label().to_string(),
            member,
        }
    }
}
