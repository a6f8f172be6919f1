/// Business logic services layer
use crate::clients::{SolarSystemClient, SpaceXClient};
use crate::domain::spacex::{CrewField, CrewMember, CrewStatus, Launch, Launchpad, Rocket};
use crate::domain::{Moon, MoonGroup, ParentBody};
use crate::errors::ApiResult;
use crate::mapper::map_to_domain_list;
use crate::query::{filter_by_kind, group_by, search, ListQuery, Selection};
use tracing::{error, info};

/// Moon data service over the Solar System OpenData API
pub struct MoonService {
    client: SolarSystemClient,
}

impl MoonService {
    pub fn new(client: SolarSystemClient) -> Self {
        Self { client }
    }

    /// Fetch and normalise every moon. All or nothing.
    pub async fn fetch_all(&self) -> ApiResult<Vec<Moon>> {
        let raw = match self.client.fetch_moons().await {
            Ok(raw) => raw,
            Err(e) => {
                error!("Moon fetch from {} failed: {}", self.client.base_url(), e);
                return Err(e);
            }
        };

        let moons = map_to_domain_list(raw);
        info!("Fetched {} moons", moons.len());
        Ok(moons)
    }

    /// Moons grouped by parent planet, Earth first, unrecognised parents last
    pub async fn fetch_grouped_by_planet(&self) -> ApiResult<Vec<MoonGroup>> {
        let moons = self.fetch_all().await?;
        Ok(group_by_planet(moons))
    }

    /// Moons of one planet. Accepts English or source spellings ("saturne").
    pub async fn fetch_for_planet(&self, planet: &str) -> ApiResult<Vec<Moon>> {
        let wanted = ParentBody::from_source(planet).display_name().to_lowercase();
        let moons = self.fetch_all().await?;
        Ok(moons
            .into_iter()
            .filter(|m| m.parent_body().display_name().to_lowercase() == wanted)
            .collect())
    }

    pub async fn fetch_matching(&self, query: &ListQuery<Moon>) -> ApiResult<Vec<Moon>> {
        let moons = self.fetch_all().await?;
        Ok(query.apply(moons))
    }
}

pub fn group_by_planet(moons: Vec<Moon>) -> Vec<MoonGroup> {
    group_by(moons, Moon::parent_body, ParentBody::rank)
        .into_iter()
        .map(|(parent, moons)| MoonGroup::new(&parent, moons))
        .collect()
}

/// SpaceX data service
pub struct SpaceXService {
    client: SpaceXClient,
    launch_window: usize,
}

impl SpaceXService {
    pub fn new(client: SpaceXClient, launch_window: usize) -> Self {
        Self {
            client,
            launch_window,
        }
    }

    pub async fn latest_launch(&self) -> ApiResult<Launch> {
        self.client.fetch_latest_launch().await
    }

    /// Next launches, soonest first
    pub async fn upcoming_launches(&self) -> ApiResult<Vec<Launch>> {
        let mut launches = self.client.fetch_upcoming_launches().await?;
        launches.truncate(self.launch_window);
        info!("Fetched {} upcoming launches", launches.len());
        Ok(launches)
    }

    /// Most recent launches, newest first
    pub async fn past_launches(&self) -> ApiResult<Vec<Launch>> {
        let launches = self.client.fetch_past_launches().await?;
        let recent = most_recent(launches, self.launch_window);
        info!("Fetched {} past launches", recent.len());
        Ok(recent)
    }

    pub async fn launch(&self, id: &str) -> ApiResult<Launch> {
        self.client.fetch_launch(id).await
    }

    pub async fn rockets(&self, query: &ListQuery<Rocket>) -> ApiResult<Vec<Rocket>> {
        let rockets = self.client.fetch_rockets().await?;
        Ok(query.apply(rockets))
    }

    pub async fn rocket(&self, id: &str) -> ApiResult<Rocket> {
        self.client.fetch_rocket(id).await
    }

    /// Crew filtered by status, then by name or agency
    pub async fn crew(
        &self,
        text: &str,
        status: &Selection<CrewStatus>,
    ) -> ApiResult<Vec<CrewMember>> {
        let crew = self.client.fetch_crew().await?;
        let narrowed = filter_by_kind(crew, status);
        Ok(search(narrowed, text, &[CrewField::Name, CrewField::Agency]))
    }

    pub async fn crew_member(&self, id: &str) -> ApiResult<CrewMember> {
        self.client.fetch_crew_member(id).await
    }

    pub async fn launchpads(&self) -> ApiResult<Vec<Launchpad>> {
        self.client.fetch_launchpads().await
    }

    pub async fn launchpad(&self, id: &str) -> ApiResult<Launchpad> {
        self.client.fetch_launchpad(id).await
    }
}

/// Last `window` entries of an oldest-first list, reversed
fn most_recent<T>(mut items: Vec<T>, window: usize) -> Vec<T> {
    let start = items.len().saturating_sub(window);
    let mut recent = items.split_off(start);
    recent.reverse();
    recent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpClient;
    use crate::config::HttpSettings;
    use crate::domain::spacex::{RocketField, RocketSort};
    use crate::domain::{MoonField, MoonSort, SizeCategory};
    use crate::errors::ApiError;
    use crate::query::SortDirection;
    use axum::{
        http::StatusCode,
        routing::{get, MethodRouter},
        Json, Router,
    };
    use serde_json::{json, Value};

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router.into_make_service())
                .await
                .unwrap();
        });
        format!("http://{}", addr)
    }

    fn serve_json(body: Value) -> MethodRouter {
        get(move || async move { Json(body) })
    }

    fn http() -> HttpClient {
        HttpClient::new(&HttpSettings::default()).unwrap()
    }

    async fn moon_service(router: Router) -> MoonService {
        let base = spawn_stub(router).await;
        MoonService::new(SolarSystemClient::new(
            http(),
            base,
            "bodyType,eq,Moon".to_string(),
        ))
    }

    async fn serve_moons(bodies: Value) -> MoonService {
        moon_service(Router::new().route("/rest/bodies", serve_json(bodies))).await
    }

    async fn spacex_service(router: Router, window: usize) -> SpaceXService {
        let base = spawn_stub(router).await;
        SpaceXService::new(SpaceXClient::new(http(), base), window)
    }

    fn wire_moon(id: &str, english: &str, parent: &str, radius: f64) -> Value {
        json!({
            "id": id,
            "name": english,
            "englishName": english,
            "meanRadius": radius,
            "aroundPlanet": {"planet": parent},
            "bodyType": "Moon"
        })
    }

    fn moon_bodies() -> Value {
        json!({
            "bodies": [
                wire_moon("titan", "Titan", "saturne", 2574.7),
                wire_moon("phobos", "Phobos", "mars", 11.1),
                wire_moon("dysnomia", "Dysnomia", "eris", 350.0),
                wire_moon("lune", "Moon", "terre", 1737.0),
                wire_moon("deimos", "Deimos", "mars", 6.2),
                wire_moon("io", "Io", "jupiter", 1821.6),
                wire_moon("charon", "Charon", "pluton", 606.0),
                wire_moon("europa", "Europa", "jupiter", 1560.8),
            ]
        })
    }

    fn launch(n: u32, upcoming: bool) -> Value {
        json!({
            "id": format!("launch-{}", n),
            "name": format!("Mission {}", n),
            "flight_number": n,
            "date_utc": "2022-10-05T16:00:00.000Z",
            "upcoming": upcoming,
            "success": if upcoming { Value::Null } else { json!(true) }
        })
    }

    fn ids<T>(items: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
        items.iter().map(|i| id(i).to_string()).collect()
    }

    #[tokio::test]
    async fn test_fetch_all_maps_every_body() {
        let service = serve_moons(moon_bodies()).await;

        let moons = service.fetch_all().await.unwrap();
        assert_eq!(moons.len(), 8);
        assert_eq!(moons[0].id, "titan");
        assert_eq!(moons[0].parent_planet, "saturne");
        assert_eq!(moons[0].mass, "Unknown");
    }

    #[tokio::test]
    async fn test_empty_bodies_is_success() {
        let service = serve_moons(json!({"bodies": []})).await;

        assert!(service.fetch_all().await.unwrap().is_empty());
        assert!(service.fetch_grouped_by_planet().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_server_error_surfaces_reason() {
        let service = moon_service(Router::new().route(
            "/rest/bodies",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        ))
        .await;

        let err = service.fetch_all().await.unwrap_err();
        assert_eq!(err.code(), "UPSTREAM_5XX");
        match err {
            ApiError::UpstreamStatus { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_resource_is_upstream_404() {
        // No route for /rest/bodies at all
        let service = moon_service(Router::new()).await;
        let err = service.fetch_grouped_by_planet().await.unwrap_err();
        assert_eq!(err.code(), "UPSTREAM_404");
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_empty_body_is_an_error() {
        let service =
            moon_service(Router::new().route("/rest/bodies", get(|| async { "" }))).await;

        assert!(matches!(
            service.fetch_all().await.unwrap_err(),
            ApiError::EmptyBody
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_decode_error() {
        let service =
            moon_service(Router::new().route("/rest/bodies", get(|| async { "{\"bodies\": [" })))
                .await;

        let err = service.fetch_all().await.unwrap_err();
        assert_eq!(err.code(), "UPSTREAM_DECODE");
    }

    #[tokio::test]
    async fn test_grouped_in_fixed_planet_order() {
        let service = serve_moons(moon_bodies()).await;

        let groups = service.fetch_grouped_by_planet().await.unwrap();
        let planets: Vec<&str> = groups.iter().map(|g| g.planet.as_str()).collect();
        assert_eq!(
            planets,
            vec!["Earth", "Mars", "Jupiter", "Saturn", "Pluto", "Eris"]
        );

        let mars = &groups[1];
        assert_eq!(mars.count, 2);
        assert_eq!(ids(&mars.moons, |m| m.id.as_str()), vec!["phobos", "deimos"]);

        let total: usize = groups.iter().map(|g| g.count).sum();
        assert_eq!(total, 8);
    }

    #[tokio::test]
    async fn test_fetch_for_planet_accepts_either_spelling() {
        let service = serve_moons(moon_bodies()).await;

        let jupiter = service.fetch_for_planet("JUPITER").await.unwrap();
        assert_eq!(ids(&jupiter, |m| m.id.as_str()), vec!["io", "europa"]);

        let earth = service.fetch_for_planet("terre").await.unwrap();
        assert_eq!(ids(&earth, |m| m.id.as_str()), vec!["lune"]);

        let eris = service.fetch_for_planet("eris").await.unwrap();
        assert_eq!(ids(&eris, |m| m.id.as_str()), vec!["dysnomia"]);

        assert!(service.fetch_for_planet("vulcan").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_for_planet_folds_non_ascii_case() {
        let service = serve_moons(json!({
            "bodies": [
                wire_moon("dysnomia", "Dysnomia", "éris", 350.0),
                wire_moon("titan", "Titan", "saturne", 2574.7),
            ]
        }))
        .await;

        let upper = service.fetch_for_planet("ÉRIS").await.unwrap();
        assert_eq!(ids(&upper, |m| m.id.as_str()), vec!["dysnomia"]);

        let lower = service.fetch_for_planet("éris").await.unwrap();
        assert_eq!(ids(&lower, |m| m.id.as_str()), vec!["dysnomia"]);
    }

    #[tokio::test]
    async fn test_fetch_matching_applies_list_query() {
        let service = serve_moons(moon_bodies()).await;

        let query: ListQuery<Moon> = ListQuery::new(&[MoonField::EnglishName])
            .kind(Selection::Only(SizeCategory::Giant))
            .sorted(MoonSort::Size, SortDirection::Descending);
        let giants = service.fetch_matching(&query).await.unwrap();
        assert_eq!(
            ids(&giants, |m| m.id.as_str()),
            vec!["titan", "io", "lune", "europa"]
        );

        let query: ListQuery<Moon> = ListQuery::new(&[MoonField::ParentPlanet]).text("mars");
        let found = service.fetch_matching(&query).await.unwrap();
        assert_eq!(ids(&found, |m| m.id.as_str()), vec!["phobos", "deimos"]);
    }

    #[tokio::test]
    async fn test_past_launches_are_newest_first_within_window() {
        let past: Vec<Value> = (1..=25).map(|n| launch(n, false)).collect();
        let service = spacex_service(
            Router::new().route("/v5/launches/past", serve_json(json!(past))),
            20,
        )
        .await;

        let launches = service.past_launches().await.unwrap();
        assert_eq!(launches.len(), 20);
        assert_eq!(launches[0].flight_number, 25);
        assert_eq!(launches[19].flight_number, 6);
    }

    #[tokio::test]
    async fn test_upcoming_launches_keep_first_entries() {
        let upcoming: Vec<Value> = (30..33).map(|n| launch(n, true)).collect();
        let service = spacex_service(
            Router::new().route("/v5/launches/upcoming", serve_json(json!(upcoming))),
            2,
        )
        .await;

        let launches = service.upcoming_launches().await.unwrap();
        assert_eq!(ids(&launches, |l| l.id.as_str()), vec!["launch-30", "launch-31"]);
    }

    #[tokio::test]
    async fn test_rockets_and_crew_filters() {
        let rockets = json!([
            {"id": "f1", "name": "Falcon 1", "active": false, "cost_per_launch": 6700000},
            {"id": "f9", "name": "Falcon 9", "active": true, "cost_per_launch": 50000000},
            {"id": "fh", "name": "Falcon Heavy", "active": true, "cost_per_launch": 90000000},
            {"id": "ss", "name": "Starship", "active": false, "cost_per_launch": 7000000}
        ]);
        let crew = json!([
            {"id": "c1", "name": "Robert Behnken", "agency": "NASA", "status": "active"},
            {"id": "c2", "name": "Douglas Hurley", "agency": "NASA", "status": "retired"},
            {"id": "c3", "name": "Thomas Pesquet", "agency": "ESA", "status": "Active"}
        ]);
        let service = spacex_service(
            Router::new()
                .route("/v4/rockets", serve_json(rockets))
                .route("/v4/crew", serve_json(crew)),
            20,
        )
        .await;

        let query: ListQuery<Rocket> = ListQuery::new(&[RocketField::Name])
            .text("falcon")
            .sorted(RocketSort::Cost, SortDirection::Descending);
        let found = service.rockets(&query).await.unwrap();
        assert_eq!(ids(&found, |r| r.id.as_str()), vec!["fh", "f9", "f1"]);

        let active = service
            .crew("", &Selection::Only(CrewStatus::Active))
            .await
            .unwrap();
        assert_eq!(ids(&active, |c| c.id.as_str()), vec!["c1", "c3"]);

        let esa = service.crew("esa", &Selection::All).await.unwrap();
        assert_eq!(ids(&esa, |c| c.id.as_str()), vec!["c3"]);
    }

    #[tokio::test]
    async fn test_single_lookup_miss_is_upstream_404() {
        let service = spacex_service(Router::new(), 20).await;
        let err = service.rocket("nope").await.unwrap_err();
        assert_eq!(err.code(), "UPSTREAM_404");
    }

    #[test]
    fn test_most_recent_handles_short_lists() {
        assert_eq!(most_recent(vec![1, 2, 3], 20), vec![3, 2, 1]);
        assert_eq!(most_recent(vec![1, 2, 3, 4], 2), vec![4, 3]);
        assert!(most_recent(Vec::<u8>::new(), 5).is_empty());
    }
}
