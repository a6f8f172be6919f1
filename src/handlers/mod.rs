/// HTTP request handlers
use crate::catalog::{Catalog, CategoryCatalog, PlanetCatalog, PlanetMoonCatalog};
use crate::domain::spacex::{CrewStatus, Rocket, RocketField};
use crate::domain::{Health, Moon, MoonField, MoonSort, Planet, PlanetSort, PlanetWithMoons};
use crate::errors::{ApiError, ApiResult};
use crate::query::{
    search, Classified, ListQuery, Searchable, Selection, SortDirection, Sortable,
};
use crate::services::{MoonService, SpaceXService};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

mod views;

pub use views::{CrewView, LaunchView, MoonGroupView, MoonView, RocketView};

const MOON_SEARCH_FIELDS: &[MoonField] = &[
    MoonField::EnglishName,
    MoonField::Name,
    MoonField::ParentPlanet,
    MoonField::DiscoveredBy,
];

const ROCKET_SEARCH_FIELDS: &[RocketField] = &[
    RocketField::Name,
    RocketField::Company,
    RocketField::Country,
    RocketField::Description,
];

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub moon_service: Arc<MoonService>,
    pub spacex_service: Arc<SpaceXService>,
}

/// Successful response wrapper
#[derive(Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub ok: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

/// Query names accepted for the kind selector, in precedence order
const KIND_KEYS: [&str; 4] = ["kind", "size", "zone", "status"];

/// Query string accepted by every list endpoint.
///
/// The kind selector goes by the name that fits the list: `kind` for
/// planets, `size` for moons, `zone` for planets with moons and `status`
/// for rockets and crew. Any of them is accepted on any list; when several
/// are given the first non-blank one in that order wins.
#[derive(Debug, Default)]
pub struct ListParams {
    pub q: Option<String>,
    pub kind: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

impl From<HashMap<String, String>> for ListParams {
    fn from(mut params: HashMap<String, String>) -> Self {
        let kind = KIND_KEYS
            .iter()
            .filter_map(|key| params.remove(*key))
            .find(|value| !value.trim().is_empty());
        Self {
            q: params.remove("q"),
            kind,
            sort: params.remove("sort"),
            dir: params.remove("dir"),
        }
    }
}

impl ListParams {
    fn text(&self) -> &str {
        non_blank(&self.q).unwrap_or("")
    }

    fn list_query<T>(
        &self,
        fields: &[T::Field],
        default_sort: Option<(T::SortKey, SortDirection)>,
    ) -> ApiResult<ListQuery<T>>
    where
        T: Searchable + Sortable + Classified,
        T::Kind: FromStr<Err = ApiError>,
        T::SortKey: FromStr<Err = ApiError>,
    {
        let query = ListQuery::new(fields)
            .text(self.text())
            .kind(Selection::parse(non_blank(&self.kind))?);

        let key = non_blank(&self.sort)
            .map(str::parse::<T::SortKey>)
            .transpose()?;
        let direction = non_blank(&self.dir)
            .map(str::parse::<SortDirection>)
            .transpose()?;

        Ok(match (key, default_sort) {
            (Some(key), _) => query.sorted(key, direction.unwrap_or_default()),
            (None, Some((key, fallback))) => query.sorted(key, direction.unwrap_or(fallback)),
            (None, None) => query,
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn list_response<T: Serialize>(items: Vec<T>) -> Json<Value> {
    Json(json!(SuccessResponse::new(json!({
        "count": items.len(),
        "items": items
    }))))
}

fn item_response<T: Serialize>(item: T) -> Json<Value> {
    Json(json!(SuccessResponse::new(json!({ "item": item }))))
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

/// List enabled home screen categories
pub async fn list_categories(Query(raw): Query<HashMap<String, String>>) -> Json<Value> {
    let params = ListParams::from(raw);
    list_response(search(
        CategoryCatalog.enabled(),
        params.text(),
        CategoryCatalog::SEARCH_FIELDS,
    ))
}

pub async fn get_category(Path(id): Path<u32>) -> Result<Json<Value>, ApiError> {
    let category = CategoryCatalog
        .get_by_id(&id)
        .ok_or_else(|| ApiError::NotFound(format!("category {}", id)))?;
    Ok(item_response(category))
}

/// List planets, nearest to the sun first unless sorted otherwise
pub async fn list_planets(
    Query(raw): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let params = ListParams::from(raw);
    let query: ListQuery<Planet> = params.list_query(
        PlanetCatalog::SEARCH_FIELDS,
        Some((PlanetSort::Distance, SortDirection::Ascending)),
    )?;
    Ok(list_response(query.apply(PlanetCatalog.get_all())))
}

pub async fn get_planet(Path(id): Path<u32>) -> Result<Json<Value>, ApiError> {
    let planet = PlanetCatalog
        .get_by_id(&id)
        .ok_or_else(|| ApiError::NotFound(format!("planet {}", id)))?;
    Ok(item_response(planet))
}

/// List planets that have moons
pub async fn list_planet_moons(
    Query(raw): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let params = ListParams::from(raw);
    let query: ListQuery<PlanetWithMoons> =
        params.list_query(PlanetMoonCatalog::SEARCH_FIELDS, None)?;
    Ok(list_response(query.apply(PlanetMoonCatalog.get_all())))
}

pub async fn get_planet_moons(Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    let planet = PlanetMoonCatalog
        .get_by_id(id.as_str())
        .ok_or_else(|| ApiError::NotFound(format!("planet {}", id)))?;
    Ok(item_response(planet))
}

/// List moons, largest first unless sorted otherwise
pub async fn list_moons(
    Query(raw): Query<HashMap<String, String>>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let params = ListParams::from(raw);
    let query: ListQuery<Moon> = params.list_query(
        MOON_SEARCH_FIELDS,
        Some((MoonSort::Size, SortDirection::Descending)),
    )?;
    let moons = state.moon_service.fetch_matching(&query).await?;
    Ok(list_response(
        moons.into_iter().map(MoonView::from).collect::<Vec<_>>(),
    ))
}

/// Moons grouped by parent planet
pub async fn list_moons_grouped(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let groups = state.moon_service.fetch_grouped_by_planet().await?;
    let total: usize = groups.iter().map(|g| g.count).sum();
    let groups: Vec<MoonGroupView> = groups.into_iter().map(MoonGroupView::from).collect();
    Ok(Json(json!(SuccessResponse::new(json!({
        "total": total,
        "groups": groups
    })))))
}

pub async fn list_moons_for_planet(
    Path(planet): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let moons = state.moon_service.fetch_for_planet(&planet).await?;
    Ok(list_response(
        moons.into_iter().map(MoonView::from).collect::<Vec<_>>(),
    ))
}

pub async fn get_latest_launch(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let launch = state.spacex_service.latest_launch().await?;
    Ok(item_response(LaunchView::from(launch)))
}

pub async fn list_upcoming_launches(
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let launches = state.spacex_service.upcoming_launches().await?;
    Ok(list_response(
        launches.into_iter().map(LaunchView::from).collect::<Vec<_>>(),
    ))
}

pub async fn list_past_launches(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let launches = state.spacex_service.past_launches().await?;
    Ok(list_response(
        launches.into_iter().map(LaunchView::from).collect::<Vec<_>>(),
    ))
}

pub async fn get_launch(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let launch = state.spacex_service.launch(&id).await?;
    Ok(item_response(LaunchView::from(launch)))
}

pub async fn list_rockets(
    Query(raw): Query<HashMap<String, String>>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let params = ListParams::from(raw);
    let query: ListQuery<Rocket> = params.list_query(ROCKET_SEARCH_FIELDS, None)?;
    let rockets = state.spacex_service.rockets(&query).await?;
    Ok(list_response(
        rockets.into_iter().map(RocketView::from).collect::<Vec<_>>(),
    ))
}

pub async fn get_rocket(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let rocket = state.spacex_service.rocket(&id).await?;
    Ok(item_response(RocketView::from(rocket)))
}

pub async fn list_crew(
    Query(raw): Query<HashMap<String, String>>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let params = ListParams::from(raw);
    let status: Selection<CrewStatus> = Selection::parse(non_blank(&params.kind))?;
    let crew = state.spacex_service.crew(params.text(), &status).await?;
    Ok(list_response(
        crew.into_iter().map(CrewView::from).collect::<Vec<_>>(),
    ))
}

pub async fn get_crew_member(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let member = state.spacex_service.crew_member(&id).await?;
    Ok(item_response(CrewView::from(member)))
}

pub async fn list_launchpads(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let launchpads = state.spacex_service.launchpads().await?;
    Ok(list_response(launchpads))
}

pub async fn get_launchpad(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let launchpad = state.spacex_service.launchpad(&id).await?;
    Ok(item_response(launchpad))
}
