use moorport_client::{ClientError, Endpoints, PortalClient};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> PortalClient {
    PortalClient::new(Endpoints::new(&server.uri()).unwrap())
}

#[tokio::test]
async fn fetch_profile_issues_one_get_and_resolves_with_body() {
    let server = MockServer::start().await;
    let profile = json!({"id": 42, "email": "skipper@example.com"});
    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let body = client.fetch_profile().await.unwrap();
    assert_eq!(body, profile);
}

#[tokio::test]
async fn fetch_countries_issues_one_get_and_resolves_with_body() {
    let server = MockServer::start().await;
    let countries = json!([{"code": "AU", "name": "Australia"}]);
    Mock::given(method("GET"))
        .and(path("/api/countries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(countries.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let body = client.fetch_countries().await.unwrap();
    assert_eq!(body, countries);
}

#[tokio::test]
async fn fetch_proposal_joins_the_id_onto_the_proposals_endpoint() {
    let server = MockServer::start().await;
    let proposal = json!({"id": "123", "status": "draft"});
    Mock::given(method("GET"))
        .and(path("/api/proposals/123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(proposal.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let body = client.fetch_proposal("123").await.unwrap();
    assert_eq!(body, proposal);
}

#[tokio::test]
async fn fetch_user_joins_the_id_onto_the_users_endpoint() {
    let server = MockServer::start().await;
    let user = json!({"id": "u-9", "name": "Harbour Master"});
    Mock::given(method("GET"))
        .and(path("/api/users/u-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let body = client.fetch_user("u-9").await.unwrap();
    assert_eq!(body, user);
}

#[tokio::test]
async fn server_error_settles_with_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/proposals/123"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.fetch_proposal("123").await.unwrap_err();
    assert!(err.is_transport());
    assert!(err.url().ends_with("/api/proposals/123"));
}

#[tokio::test]
async fn connection_failure_settles_with_a_transport_error() {
    // Bind a server to learn a free port, then shut it down before calling.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = PortalClient::new(Endpoints::new(&uri).unwrap());
    let err = client.fetch_countries().await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn non_json_body_settles_with_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.fetch_profile().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode { .. }));
}

#[tokio::test]
async fn concurrent_fetches_complete_independently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/countries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let (profile, countries) = tokio::join!(client.fetch_profile(), client.fetch_countries());
    assert!(profile.is_ok());
    assert!(countries.is_ok());
}
