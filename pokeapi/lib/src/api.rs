//! The public PokeAPI surface.
//!
//! [`PokeApi`] holds a [`Gateway`] and exposes one accessor per request shape.
//! The per-resource methods (`berry_list`, `pokemon_by_name`, ...) are
//! generated from the resource table and delegate to the generic methods here.

use tracing::warn;

use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::method::RestMethod;
use crate::resource::{Lookup, Pagination, Resource, encounters_path};
use crate::response::{ApiResponse, Failure};

/// Client for the PokeAPI.
///
/// Every accessor resolves to exactly one `GET` through the gateway and
/// returns an [`ApiResponse`]; none of them panic or return an error.
///
/// ## Examples
///
/// ```rust,ignore
/// use pokeapi::PokeApi;
///
/// let api = PokeApi::new()?;
///
/// let stench = api.ability_by_name("stench").await;
/// let page = api.pokemon_list(5, 10).await;
/// let areas = api.pokemon_encounters_by_id(4).await;
/// ```
#[derive(Debug, Clone)]
pub struct PokeApi {
    gateway: Gateway,
}

impl PokeApi {
    /// Creates a client for the public PokeAPI.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, GatewayError> {
        Ok(Self::with_gateway(Gateway::new()?))
    }

    /// Creates a client on top of an existing gateway.
    pub fn with_gateway(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Returns the underlying gateway.
    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Lists resources of one kind: `GET /<resource>?limit=N&offset=M`.
    pub async fn list(&self, resource: Resource, page: Pagination) -> ApiResponse {
        self.fetch(&resource.list_path(page)).await
    }

    /// Fetches one resource by numeric id: `GET /<resource>/<id>`.
    pub async fn by_id(&self, resource: Resource, id: u32) -> ApiResponse {
        self.fetch(&resource.id_path(id)).await
    }

    /// Fetches one resource by name: `GET /<resource>/<name>`.
    ///
    /// Id-only resources answer with a `Config` failure without sending a
    /// request.
    pub async fn by_name(&self, resource: Resource, name: &str) -> ApiResponse {
        match resource.name_path(name) {
            Ok(path) => self.fetch(&path).await,
            Err(e) => {
                warn!(%resource, name, "name lookup is not supported");
                ApiResponse::Failure(Failure::from(GatewayError::from(e)))
            }
        }
    }

    /// Fetches one resource by id or name.
    pub async fn get(&self, resource: Resource, lookup: Lookup) -> ApiResponse {
        match resource.lookup_path(&lookup) {
            Ok(path) => self.fetch(&path).await,
            Err(e) => {
                warn!(%resource, %lookup, "name lookup is not supported");
                ApiResponse::Failure(Failure::from(GatewayError::from(e)))
            }
        }
    }

    /// Fetches the location areas where a Pokémon can be encountered.
    pub async fn encounters(&self, pokemon: Lookup) -> ApiResponse {
        self.fetch(&encounters_path(&pokemon)).await
    }

    /// `GET /pokemon/<id>/encounters`.
    pub async fn pokemon_encounters_by_id(&self, id: u32) -> ApiResponse {
        self.encounters(Lookup::Id(id)).await
    }

    /// `GET /pokemon/<name>/encounters`.
    pub async fn pokemon_encounters_by_name(&self, name: &str) -> ApiResponse {
        self.encounters(Lookup::from(name)).await
    }

    /// Sends `GET <path>` as-is. `path` must start with `/`.
    pub async fn raw(&self, path: &str) -> ApiResponse {
        self.fetch(path).await
    }

    async fn fetch(&self, path: &str) -> ApiResponse {
        self.gateway.execute(path, RestMethod::Get, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::FailureKind;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn api_for(server: &MockServer) -> PokeApi {
        let gateway = Gateway::builder()
            .base_url(Url::parse(&server.uri()).unwrap())
            .unwrap()
            .build()
            .unwrap();
        PokeApi::with_gateway(gateway)
    }

    #[tokio::test]
    async fn test_ability_by_name() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ability/stench"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "id": 1, "name": "stench" })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let api = api_for(&mock_server).await;
        let response = api.ability_by_name("stench").await;

        assert_eq!(
            response,
            ApiResponse::Success(json!({ "id": 1, "name": "stench" }))
        );
    }

    #[tokio::test]
    async fn test_list_sends_pagination() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/pokemon"))
            .and(query_param("limit", "5"))
            .and(query_param("offset", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let api = api_for(&mock_server).await;
        assert!(api.pokemon_list(5, 10).await.is_success());
    }

    #[tokio::test]
    async fn test_list_default_page() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/egg-group"))
            .and(query_param("limit", "20"))
            .and(query_param("offset", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 15 })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let api = api_for(&mock_server).await;
        let response = api.list(Resource::EggGroup, Pagination::default()).await;
        assert_eq!(response.as_json().unwrap()["count"], 15);
    }

    #[tokio::test]
    async fn test_by_id_accessor() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/evolution-chain/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let api = api_for(&mock_server).await;
        assert!(api.evolution_chain_by_id(1).await.is_success());
    }

    #[tokio::test]
    async fn test_name_lookup_on_id_only_resource_sends_nothing() {
        let mock_server = MockServer::start().await;

        let api = api_for(&mock_server).await;
        let response = api.by_name(Resource::Machine, "tm01").await;

        let failure = response.failure().unwrap();
        assert_eq!(failure.kind(), FailureKind::Config);
        assert_eq!(
            failure.error(),
            "Exception: machine does not support lookup by name"
        );

        let requests = mock_server.received_requests().await.unwrap();
        assert!(requests.is_empty());
    }

    #[tokio::test]
    async fn test_get_dispatches_on_lookup() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/type/10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "fire" })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/type/fire"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 10 })))
            .mount(&mock_server)
            .await;

        let api = api_for(&mock_server).await;

        let by_id = api.get(Resource::Type, "10".parse().unwrap()).await;
        assert_eq!(by_id.as_json().unwrap()["name"], "fire");

        let by_name = api.get(Resource::Type, "fire".parse().unwrap()).await;
        assert_eq!(by_name.as_json().unwrap()["id"], 10);
    }

    #[tokio::test]
    async fn test_get_name_on_id_only_resource_sends_nothing() {
        let mock_server = MockServer::start().await;

        let api = api_for(&mock_server).await;
        let response = api
            .get(Resource::EvolutionChain, "eevee".parse().unwrap())
            .await;

        assert_eq!(response.failure().unwrap().kind(), FailureKind::Config);
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_encounters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/pokemon/4/encounters"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/pokemon/charmander/encounters"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&mock_server)
            .await;

        let api = api_for(&mock_server).await;
        assert_eq!(
            api.pokemon_encounters_by_id(4).await,
            ApiResponse::Success(json!([]))
        );
        assert_eq!(
            api.pokemon_encounters_by_name("charmander").await,
            ApiResponse::Success(json!([]))
        );
    }

    #[tokio::test]
    async fn test_not_found_is_http_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/pokemon/99999"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let api = api_for(&mock_server).await;
        let response = api.pokemon_by_id(99999).await;

        assert_eq!(
            response.to_json(),
            json!({ "error": "HTTP Error: 404", "success": false })
        );
    }

    #[tokio::test]
    async fn test_raw_path() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/pokemon-species/charmander"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "order": 5 })))
            .mount(&mock_server)
            .await;

        let api = api_for(&mock_server).await;
        let response = api.raw("/pokemon-species/charmander").await;
        assert_eq!(response.as_json().unwrap()["order"], 5);
    }
}
