//! HTTP routes for profile endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_profile, delete_profile, get_profile, get_statistics, list_areas, list_cities,
    list_profiles, list_technologies, profiles_by_experience, profiles_by_language,
    profiles_by_technology, update_profile, ProfileHandlers,
};

/// Creates the profile router, meant to be nested under `/api`.
pub fn profile_routes(handlers: ProfileHandlers) -> Router {
    Router::new()
        .route("/profiles", get(list_profiles).post(create_profile))
        .route("/profiles/experience", get(profiles_by_experience))
        .route("/profiles/technology/:technology", get(profiles_by_technology))
        .route("/profiles/language/:language", get(profiles_by_language))
        .route(
            "/profiles/:id",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
        .route("/areas", get(list_areas))
        .route("/cities", get(list_cities))
        .route("/technologies", get(list_technologies))
        .route("/statistics", get(get_statistics))
        // Portuguese paths used by the legacy web client
        .route("/profissionais", get(list_profiles).post(create_profile))
        .route(
            "/profissionais/tecnologia/:technology",
            get(profiles_by_technology),
        )
        .route(
            "/profissionais/:id",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
        .route("/cidades", get(list_cities))
        .route("/tecnologias", get(list_technologies))
        .route("/estatisticas", get(get_statistics))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProfileStore;
    use crate::config::ProfilesConfig;
    use crate::domain::profile::profile::test_support::new_profile;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router_with(store: InMemoryProfileStore) -> Router {
        let store = Arc::new(store);
        profile_routes(ProfileHandlers::new(
            store.clone(),
            store,
            ProfilesConfig::default(),
        ))
    }

    fn seeded_router() -> Router {
        let mut ana = new_profile("Ana Souza", "Tech", &["Python", "SQL"]);
        ana.location = "Recife".to_string();
        let mut bruno = new_profile("Bruno Lima", "Design", &["Figma"]);
        bruno.location = "Curitiba".to_string();
        router_with(InMemoryProfileStore::with_profiles(vec![ana, bruno]))
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    fn valid_body() -> Value {
        json!({
            "name": "Carla Dias",
            "role": "Backend Developer",
            "summary": "Writes services in Rust",
            "location": "Porto Alegre",
            "area": "Tech",
            "technical_skills": ["Rust", "PostgreSQL"],
            "soft_skills": ["Focus"],
            "experiences": [{"company": "Acme", "role": "Dev", "start": "2018-01", "end": "Atual", "description": ""}],
            "education": [{"course": "CS", "institution": "UFRGS", "year": 2017}],
            "languages": [{"language": "English", "level": "Advanced"}]
        })
    }

    #[tokio::test]
    async fn portuguese_paths_reach_the_same_handlers() {
        let app = seeded_router();

        let (status, body) = send(app.clone(), Method::GET, "/profissionais", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);

        let (status, body) = send(app.clone(), Method::GET, "/profissionais/2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Bruno Lima");

        let (_, body) =
            send(app.clone(), Method::GET, "/profissionais/tecnologia/figma", None).await;
        assert_eq!(body[0]["name"], "Bruno Lima");

        let (_, body) = send(app.clone(), Method::GET, "/cidades", None).await;
        assert_eq!(body, json!(["Curitiba", "Recife"]));

        let (_, body) = send(app.clone(), Method::GET, "/tecnologias", None).await;
        assert_eq!(body, json!(["Figma", "Python", "SQL"]));

        let (_, body) = send(app.clone(), Method::GET, "/estatisticas", None).await;
        assert_eq!(body["total_profiles"], 2);

        let (status, _) = send(app.clone(), Method::DELETE, "/profissionais/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(app, Method::GET, "/profiles/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_returns_201_with_assigned_id() {
        let (status, body) =
            send(seeded_router(), Method::POST, "/profiles", Some(valid_body())).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 3);
        assert_eq!(body["name"], "Carla Dias");
        assert_eq!(body["projects"], json!([]));
    }

    #[tokio::test]
    async fn create_with_short_name_is_400() {
        let mut body = valid_body();
        body["name"] = json!("Al");

        let (status, body) = send(seeded_router(), Method::POST, "/profiles", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(body["details"]["field"], "name");
    }

    #[tokio::test]
    async fn create_with_missing_field_is_400() {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("languages");

        let (status, _) = send(seeded_router(), Method::POST, "/profiles", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_unknown_profile_is_404() {
        let (status, body) = send(seeded_router(), Method::GET, "/profiles/99", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn get_with_non_numeric_id_is_400() {
        let (status, _) = send(seeded_router(), Method::GET, "/profiles/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_without_filters_paginates() {
        let (status, body) =
            send(seeded_router(), Method::GET, "/profiles?offset=1&limit=5", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "Bruno Lima");
    }

    #[tokio::test]
    async fn list_with_portuguese_query_names_searches() {
        let (status, body) =
            send(seeded_router(), Method::GET, "/profiles?cidade=Recife", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "Ana Souza");
    }

    #[tokio::test]
    async fn update_changes_supplied_fields_only() {
        let (status, body) = send(
            seeded_router(),
            Method::PUT,
            "/profiles/1",
            Some(json!({"role": "Staff Engineer"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "Staff Engineer");
        assert_eq!(body["name"], "Ana Souza");
    }

    #[tokio::test]
    async fn update_unknown_profile_is_404() {
        let (status, _) = send(
            seeded_router(),
            Method::PUT,
            "/profiles/42",
            Some(json!({"role": "Nobody"})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_returns_204_then_404() {
        let app = seeded_router();

        let (status, _) = send(app.clone(), Method::DELETE, "/profiles/2", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(app, Method::DELETE, "/profiles/2", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn technology_route_is_not_captured_by_id_route() {
        let (status, body) =
            send(seeded_router(), Method::GET, "/profiles/technology/py", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "Ana Souza");
    }

    #[tokio::test]
    async fn experience_route_filters_by_total_years() {
        let (status, body) = send(
            seeded_router(),
            Method::GET,
            "/profiles/experience?min_years=3",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn language_route_applies_min_level() {
        let (status, body) = send(
            seeded_router(),
            Method::GET,
            "/profiles/language/english?min_level=Fluent",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn facet_routes_return_sorted_values() {
        let (_, areas) = send(seeded_router(), Method::GET, "/areas", None).await;
        assert_eq!(areas, json!(["Design", "Tech"]));

        let (_, cities) = send(seeded_router(), Method::GET, "/cities", None).await;
        assert_eq!(cities, json!(["Curitiba", "Recife"]));

        let (_, technologies) = send(seeded_router(), Method::GET, "/technologies", None).await;
        assert_eq!(technologies, json!(["Figma", "Python", "SQL"]));
    }

    #[tokio::test]
    async fn statistics_route_summarizes_store() {
        let (status, body) = send(seeded_router(), Method::GET, "/statistics", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_profiles"], 2);
        assert_eq!(body["total_technologies"], 3);
        assert_eq!(body["profiles_by_area"], json!({"Tech": 1, "Design": 1}));
    }

    #[tokio::test]
    async fn empty_store_statistics_are_zero() {
        let (status, body) = send(
            router_with(InMemoryProfileStore::new()),
            Method::GET,
            "/statistics",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_profiles"], 0);
        assert_eq!(body["profiles_by_area"], json!({}));
    }
}
