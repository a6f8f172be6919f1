/// SpaceX records, consumed read-only and passed through as received
use crate::errors::ApiError;
use crate::query::{token, Classified, Searchable, SortValue, Sortable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    pub id: String,
    pub name: String,
    pub flight_number: u32,
    pub date_utc: DateTime<Utc>,
    #[serde(default)]
    pub date_local: Option<String>,
    #[serde(default)]
    pub date_precision: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub upcoming: bool,
    #[serde(default, rename = "rocket")]
    pub rocket_id: Option<String>,
    #[serde(default, rename = "launchpad")]
    pub launchpad_id: Option<String>,
    #[serde(default)]
    pub crew: Option<Vec<LaunchCrew>>,
    #[serde(default, rename = "payloads")]
    pub payload_ids: Option<Vec<String>>,
    #[serde(default, rename = "capsules")]
    pub capsule_ids: Option<Vec<String>>,
    #[serde(default)]
    pub cores: Option<Vec<LaunchCore>>,
    #[serde(default)]
    pub links: Option<LaunchLinks>,
    #[serde(default)]
    pub failures: Option<Vec<Failure>>,
    #[serde(default)]
    pub static_fire_date_utc: Option<DateTime<Utc>>,
    #[serde(default)]
    pub window: Option<u32>,
    #[serde(default)]
    pub auto_update: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LaunchStatus {
    Upcoming,
    Success,
    Failed,
    Unknown,
}

impl Launch {
    pub fn status(&self) -> LaunchStatus {
        if self.upcoming {
            return LaunchStatus::Upcoming;
        }
        match self.success {
            Some(true) => LaunchStatus::Success,
            Some(false) => LaunchStatus::Failed,
            None => LaunchStatus::Unknown,
        }
    }

    /// e.g. "Oct 05, 2022"
    pub fn date_label(&self) -> String {
        self.date_utc.format("%b %d, %Y").to_string()
    }

    pub fn patch_url(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|l| l.patch.as_ref())
            .and_then(|p| p.small.as_deref())
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchCrew {
    #[serde(default, rename = "crew")]
    pub crew_id: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchCore {
    #[serde(default, rename = "core")]
    pub core_id: Option<String>,
    #[serde(default)]
    pub flight: Option<u32>,
    #[serde(default)]
    pub gridfins: Option<bool>,
    #[serde(default)]
    pub legs: Option<bool>,
    #[serde(default)]
    pub reused: Option<bool>,
    #[serde(default)]
    pub landing_attempt: Option<bool>,
    #[serde(default)]
    pub landing_success: Option<bool>,
    #[serde(default)]
    pub landing_type: Option<String>,
    #[serde(default, rename = "landpad")]
    pub landpad_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchLinks {
    #[serde(default)]
    pub patch: Option<Patch>,
    #[serde(default)]
    pub reddit: Option<RedditLinks>,
    #[serde(default)]
    pub flickr: Option<FlickrLinks>,
    #[serde(default)]
    pub presskit: Option<String>,
    #[serde(default)]
    pub webcast: Option<String>,
    #[serde(default)]
    pub youtube_id: Option<String>,
    #[serde(default)]
    pub article: Option<String>,
    #[serde(default)]
    pub wikipedia: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedditLinks {
    #[serde(default)]
    pub campaign: Option<String>,
    #[serde(default)]
    pub launch: Option<String>,
    #[serde(default)]
    pub media: Option<String>,
    #[serde(default)]
    pub recovery: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlickrLinks {
    #[serde(default)]
    pub small: Option<Vec<String>>,
    #[serde(default)]
    pub original: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub altitude: Option<i64>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    pub id: String,
    pub name: String,
    #[serde(default, rename = "type")]
    pub rocket_type: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub stages: Option<u32>,
    #[serde(default)]
    pub boosters: Option<u32>,
    #[serde(default)]
    pub cost_per_launch: Option<u64>,
    #[serde(default)]
    pub success_rate_pct: Option<u32>,
    #[serde(default)]
    pub first_flight: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub height: Option<Dimension>,
    #[serde(default)]
    pub diameter: Option<Dimension>,
    #[serde(default)]
    pub mass: Option<RocketMass>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub wikipedia: Option<String>,
    #[serde(default)]
    pub flickr_images: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    #[serde(default)]
    pub meters: Option<f64>,
    #[serde(default)]
    pub feet: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocketMass {
    #[serde(default)]
    pub kg: Option<u64>,
    #[serde(default)]
    pub lb: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RocketStatus {
    Active,
    Retired,
}

impl FromStr for RocketStatus {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match token(s).as_str() {
            "active" => Ok(RocketStatus::Active),
            "retired" | "inactive" => Ok(RocketStatus::Retired),
            _ => Err(ApiError::InvalidInput(format!("unknown rocket status '{}'", s))),
        }
    }
}

impl Rocket {
    pub fn status(&self) -> RocketStatus {
        if self.active {
            RocketStatus::Active
        } else {
            RocketStatus::Retired
        }
    }

    /// Cost per launch as "$NM", "$NK" or "$N"; missing cost reads as $0.
    pub fn cost_label(&self) -> String {
        let cost = self.cost_per_launch.unwrap_or(0);
        if cost >= 1_000_000 {
            format!("${}M", cost / 1_000_000)
        } else if cost >= 1_000 {
            format!("${}K", cost / 1_000)
        } else {
            format!("${}", cost)
        }
    }

    pub fn height_meters(&self) -> f64 {
        self.height.as_ref().and_then(|h| h.meters).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum RocketField {
    Name,
    Company,
    Country,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RocketSort {
    Name,
    SuccessRate,
    Cost,
    Height,
}

impl FromStr for RocketSort {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match token(s).as_str() {
            "name" => Ok(RocketSort::Name),
            "successrate" | "success" => Ok(RocketSort::SuccessRate),
            "cost" => Ok(RocketSort::Cost),
            "height" => Ok(RocketSort::Height),
            _ => Err(ApiError::InvalidInput(format!("unknown rocket sort '{}'", s))),
        }
    }
}

impl Searchable for Rocket {
    type Field = RocketField;

    fn field_text(&self, field: RocketField) -> Cow<'_, str> {
        let text = match field {
            RocketField::Name => Some(self.name.as_str()),
            RocketField::Company => self.company.as_deref(),
            RocketField::Country => self.country.as_deref(),
            RocketField::Description => self.description.as_deref(),
        };
        Cow::Borrowed(text.unwrap_or(""))
    }
}

impl Sortable for Rocket {
    type SortKey = RocketSort;

    fn sort_value(&self, key: RocketSort) -> SortValue<'_> {
        match key {
            RocketSort::Name => SortValue::Text(&self.name),
            RocketSort::SuccessRate => {
                SortValue::Number(f64::from(self.success_rate_pct.unwrap_or(0)))
            }
            RocketSort::Cost => SortValue::Number(self.cost_per_launch.unwrap_or(0) as f64),
            RocketSort::Height => SortValue::Number(self.height_meters()),
        }
    }
}

impl Classified for Rocket {
    type Kind = RocketStatus;

    fn kind(&self) -> RocketStatus {
        self.status()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub agency: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub wikipedia: Option<String>,
    #[serde(default)]
    pub launches: Option<Vec<String>>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CrewStatus {
    Active,
    Inactive,
    Retired,
    Unknown,
}

impl FromStr for CrewStatus {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match token(s).as_str() {
            "active" => Ok(CrewStatus::Active),
            "inactive" => Ok(CrewStatus::Inactive),
            "retired" => Ok(CrewStatus::Retired),
            "unknown" => Ok(CrewStatus::Unknown),
            _ => Err(ApiError::InvalidInput(format!("unknown crew status '{}'", s))),
        }
    }
}

impl CrewMember {
    pub fn status(&self) -> CrewStatus {
        match self.status.as_deref().map(str::to_lowercase).as_deref() {
            Some("active") => CrewStatus::Active,
            Some("inactive") => CrewStatus::Inactive,
            Some("retired") => CrewStatus::Retired,
            _ => CrewStatus::Unknown,
        }
    }

    pub fn agency_label(&self) -> &str {
        self.agency.as_deref().unwrap_or("Unknown Agency")
    }
}

#[derive(Debug, Clone, Copy)]
pub enum CrewField {
    Name,
    Agency,
}

impl Searchable for CrewMember {
    type Field = CrewField;

    fn field_text(&self, field: CrewField) -> Cow<'_, str> {
        match field {
            CrewField::Name => Cow::Borrowed(&self.name),
            CrewField::Agency => Cow::Borrowed(self.agency.as_deref().unwrap_or("")),
        }
    }
}

impl Classified for CrewMember {
    type Kind = CrewStatus;

    fn kind(&self) -> CrewStatus {
        self.status()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launchpad {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub launch_attempts: Option<u32>,
    #[serde(default)]
    pub launch_successes: Option<u32>,
    #[serde(default)]
    pub rockets: Option<Vec<String>>,
    #[serde(default)]
    pub launches: Option<Vec<String>>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub images: Option<LaunchpadImages>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchpadImages {
    #[serde(default)]
    pub large: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn launch(upcoming: bool, success: Option<bool>) -> Launch {
        serde_json::from_value(json!({
            "id": "5eb87cd9ffd86e000604b32a",
            "name": "FalconSat",
            "flight_number": 1,
            "date_utc": "2006-03-24T22:30:00.000Z",
            "upcoming": upcoming,
            "success": success,
        }))
        .unwrap()
    }

    #[test]
    fn test_launch_status() {
        assert_eq!(launch(true, None).status(), LaunchStatus::Upcoming);
        assert_eq!(launch(true, Some(false)).status(), LaunchStatus::Upcoming);
        assert_eq!(launch(false, Some(true)).status(), LaunchStatus::Success);
        assert_eq!(launch(false, Some(false)).status(), LaunchStatus::Failed);
        assert_eq!(launch(false, None).status(), LaunchStatus::Unknown);
    }

    #[test]
    fn test_launch_date_label() {
        assert_eq!(launch(false, None).date_label(), "Mar 24, 2006");
    }

    #[test]
    fn test_launch_tolerates_null_nested_objects() {
        let launch: Launch = serde_json::from_value(json!({
            "id": "x",
            "name": "CRS-20",
            "flight_number": 91,
            "date_utc": "2020-03-07T04:50:31.000Z",
            "upcoming": false,
            "links": {
                "patch": {"small": null, "large": null},
                "flickr": {"small": [], "original": []}
            },
            "cores": [{"core": null, "landing_success": true}],
            "failures": [],
            "static_fire_date_utc": null,
        }))
        .unwrap();
        assert_eq!(launch.patch_url(), None);
        assert_eq!(launch.cores.unwrap()[0].landing_success, Some(true));
    }

    #[test]
    fn test_rocket_cost_label() {
        let mut rocket: Rocket = serde_json::from_value(json!({
            "id": "5e9d0d95eda69973a809d1ec",
            "name": "Falcon 9",
            "active": true,
            "cost_per_launch": 50_000_000u64,
        }))
        .unwrap();
        assert_eq!(rocket.cost_label(), "$50M");
        rocket.cost_per_launch = Some(7_500);
        assert_eq!(rocket.cost_label(), "$7K");
        rocket.cost_per_launch = Some(999);
        assert_eq!(rocket.cost_label(), "$999");
        rocket.cost_per_launch = None;
        assert_eq!(rocket.cost_label(), "$0");
        assert_eq!(rocket.status(), RocketStatus::Active);
    }

    #[test]
    fn test_crew_status_is_case_insensitive() {
        let member: CrewMember = serde_json::from_value(json!({
            "id": "5ebf1a6e23a9a60006e03a7a",
            "name": "Robert Behnken",
            "agency": "NASA",
            "status": "Active",
        }))
        .unwrap();
        assert_eq!(member.status(), CrewStatus::Active);
        assert_eq!(member.agency_label(), "NASA");

        let nobody: CrewMember =
            serde_json::from_value(json!({"id": "1", "name": "X", "status": "on leave"})).unwrap();
        assert_eq!(nobody.status(), CrewStatus::Unknown);
        assert_eq!(nobody.agency_label(), "Unknown Agency");
    }
}
