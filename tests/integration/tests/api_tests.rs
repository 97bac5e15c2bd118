//! HTTP tests against the real router over the in-memory store
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    expect_envelope, expect_failure, expect_success, test_config_with, unique_token, ModelFixture,
    TestServer, UserFixture,
};
use reqwest::StatusCode;
use serde_json::json;

async fn register(server: &TestServer) -> (UserFixture, ModelFixture) {
    let user = UserFixture::unique();
    let response = server.post("/register", &user.body()).await.unwrap();
    expect_success(response, StatusCode::CREATED).await.unwrap();

    let model = ModelFixture::unique();
    let response = server.post("/register-model", &model.body()).await.unwrap();
    expect_success(response, StatusCode::CREATED).await.unwrap();

    (user, model)
}

async fn purchase(server: &TestServer, suffix: &str, user: &UserFixture, model: &ModelFixture) -> String {
    let token_id = unique_token();
    let body = json!({"email": user.email, "modelId": model.model_id, "tokenId": token_id});
    let response = server
        .post(&format!("/purchase-subscription{suffix}"), &body)
        .await
        .unwrap();
    expect_success(response, StatusCode::OK).await.unwrap();
    token_id
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.unwrap();
    let body = expect_envelope(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_follows_store() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health/ready").await.unwrap();
    let body = expect_envelope(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");

    server.store.set_offline(true);
    let response = server.get("/health/ready").await.unwrap();
    let body = expect_envelope(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
    assert_eq!(body["status"], "not_ready");
}

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
async fn test_register_user_envelope() {
    let server = TestServer::start().await.unwrap();
    let user = UserFixture::unique();

    let response = server.post("/register", &user.body()).await.unwrap();
    let body = expect_envelope(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["data"]["email"], user.email.as_str());
    assert!(body["data"]["id"].is_string());
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_register_user_duplicate_conflicts() {
    let server = TestServer::start().await.unwrap();
    let user = UserFixture::unique();
    server.post("/register", &user.body()).await.unwrap();

    let response = server.post("/register", &user.body()).await.unwrap();
    let error = expect_failure(response, StatusCode::CONFLICT).await.unwrap();
    assert!(error.starts_with("User already exists"));
}

#[tokio::test]
async fn test_register_user_missing_field() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/register", &json!({"username": "solo"}))
        .await
        .unwrap();
    let error = expect_failure(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error, "Username, email, and wallet address are required");
}

#[tokio::test]
async fn test_malformed_body_is_enveloped() {
    let server = TestServer::start().await.unwrap();
    let response = server.post_raw("/register", "{not json").await.unwrap();
    let error = expect_failure(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error, "Invalid request body");
}

#[tokio::test]
async fn test_register_model_accepts_about_me_spellings() {
    let server = TestServer::start().await.unwrap();
    let mut body = ModelFixture::unique().body();
    let about_me = body.as_object_mut().unwrap().remove("aboutMe").unwrap();
    body["about_me"] = about_me;

    let response = server.post("/register-model", &body).await.unwrap();
    let data = expect_success(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(data["aboutMe"], "Hello");
    assert_eq!(data["icon"]["src"], "https://cdn.example.com/i.png");
}

// ============================================================================
// Subscription Tests
// ============================================================================

#[tokio::test]
async fn test_purchase_response_shape() {
    let server = TestServer::start().await.unwrap();
    let (user, model) = register(&server).await;

    let body = json!({"email": user.email, "modelId": model.model_id, "tokenId": "tok-1"});
    let response = server.post("/purchase-subscription-moonbeam", &body).await.unwrap();
    let envelope = expect_envelope(response, StatusCode::OK).await.unwrap();
    assert_eq!(envelope["message"], "Subscription purchased successfully");
    assert_eq!(envelope["data"]["tokenId"], "tok-1");
    assert!(envelope["data"]["userId"].is_string());

    let response = server.post("/purchase-subscription-moonbeam", &body).await.unwrap();
    expect_failure(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_purchase_unknown_model() {
    let server = TestServer::start().await.unwrap();
    let (user, _) = register(&server).await;

    let body = json!({"email": user.email, "modelId": "nope", "tokenId": "t"});
    let response = server.post("/purchase-subscription", &body).await.unwrap();
    let error = expect_failure(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error, "Model not found with provided modelId: nope");
}

#[tokio::test]
async fn test_full_lifecycle_on_default_chain() {
    let server = TestServer::start().await.unwrap();
    let (seller, model) = register(&server).await;
    let buyer = UserFixture::unique();
    server.post("/register", &buyer.body()).await.unwrap();
    let token_id = purchase(&server, "", &seller, &model).await;

    let response = server
        .patch(
            "/list-subscription",
            &json!({"tokenId": token_id, "listingId": "L-9", "price": "120"}),
        )
        .await
        .unwrap();
    let envelope = expect_envelope(response, StatusCode::OK).await.unwrap();
    assert_eq!(envelope["message"], "Subscription listed successfully");
    assert_eq!(envelope["data"]["listing_id"], "L-9");

    let response = server.get("/listed-subscriptions").await.unwrap();
    let listed = expect_success(response, StatusCode::OK).await.unwrap();
    let entry = listed
        .as_array()
        .unwrap()
        .iter()
        .find(|l| l["token_id"] == token_id.as_str())
        .expect("listed token present");
    assert_eq!(entry["price"], "120");
    assert_eq!(entry["is_listed"], true);
    assert_eq!(entry["model"]["model_id"], model.model_id.as_str());

    let response = server
        .patch(
            "/update-subscription",
            &json!({"TokenId": token_id, "WalletAddress": buyer.wallet_address}),
        )
        .await
        .unwrap();
    let updated = expect_success(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated["is_listed"], false);

    let response = server.get("/listed-subscriptions").await.unwrap();
    let listed = expect_success(response, StatusCode::OK).await.unwrap();
    assert!(listed.as_array().unwrap().is_empty());

    let response = server
        .get(&format!("/user-info?wallet_address={}", buyer.wallet_address))
        .await
        .unwrap();
    let envelope = expect_envelope(response, StatusCode::OK).await.unwrap();
    assert_eq!(envelope["message"], "User retrieved successfully");
    let owned = envelope["data"]["subscriptions"].as_array().unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0]["tokenId"], token_id.as_str());
    assert_eq!(owned[0]["isListed"], false);
}

#[tokio::test]
async fn test_chain_routes_are_isolated() {
    let server = TestServer::start().await.unwrap();
    let (user, model) = register(&server).await;
    let token_id = purchase(&server, "-metis", &user, &model).await;

    let response = server
        .patch("/list-subscription-moonbeam", &json!({"tokenId": token_id, "price": "1"}))
        .await
        .unwrap();
    expect_failure(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .patch("/list-subscription-metis", &json!({"tokenId": token_id, "price": "1"}))
        .await
        .unwrap();
    expect_success(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/user-info-metis?email={}", user.email))
        .await
        .unwrap();
    let data = expect_success(response, StatusCode::OK).await.unwrap();
    assert_eq!(data["subscriptions"][0]["price"], "1");
}

#[tokio::test]
async fn test_zkevm_list_ignores_price() {
    let server = TestServer::start().await.unwrap();
    let (user, model) = register(&server).await;
    let token_id = purchase(&server, "-zkevm", &user, &model).await;

    let response = server
        .patch("/list-subscription-zkevm", &json!({"tokenId": token_id, "price": "50"}))
        .await
        .unwrap();
    let data = expect_success(response, StatusCode::OK).await.unwrap();
    assert_eq!(data["is_listed"], true);
    assert!(data.get("price").is_none());

    let response = server.get("/user-info-zkevm").await.unwrap();
    let error = expect_failure(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error, "Email is required");
}

#[tokio::test]
async fn test_list_missing_fields_messages() {
    let server = TestServer::start().await.unwrap();
    let cases = [
        ("/list-subscription", "TokenId, listingId, and price are required"),
        ("/list-subscription-moonbeam", "TokenId and price are required"),
        ("/list-subscription-zkevm", "TokenId is required"),
    ];
    for (path, message) in cases {
        let response = server.patch(path, &json!({})).await.unwrap();
        let error = expect_failure(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(error, message, "{path}");
    }
}

// ============================================================================
// User Lookup Tests
// ============================================================================

#[tokio::test]
async fn test_user_model_info() {
    let server = TestServer::start().await.unwrap();
    let (user, _) = register(&server).await;

    let response = server
        .get(&format!(
            "/user-model-info?wallet_address={}&tokenId={}",
            user.wallet_address.to_lowercase(),
            user.token_id
        ))
        .await
        .unwrap();
    let envelope = expect_envelope(response, StatusCode::OK).await.unwrap();
    assert_eq!(envelope["message"], "Data retrieved successfully");
    assert_eq!(envelope["data"]["user"]["username"], user.username.as_str());
    assert!(envelope["data"]["model"].is_null());

    let response = server
        .get(&format!("/user-model-info?wallet_address=0xother&tokenId={}", user.token_id))
        .await
        .unwrap();
    expect_failure(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get("/user-model-info").await.unwrap();
    let error = expect_failure(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error, "Wallet address and tokenId are required");
}

#[tokio::test]
async fn test_unknown_user_info() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .get("/user-info-moonbeam?email=ghost@example.com")
        .await
        .unwrap();
    let error = expect_failure(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error, "User not found with provided email");
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/listed-subscriptions-metis").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
    expect_success(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_unknown_route_is_enveloped() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/no-such-route").await.unwrap();
    let error = expect_failure(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error, "Route not found");
}

#[tokio::test]
async fn test_wrong_method_is_enveloped() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/list-subscription", &json!({"tokenId": "1", "listingId": "L"}))
        .await
        .unwrap();
    let error = expect_failure(response, StatusCode::METHOD_NOT_ALLOWED)
        .await
        .unwrap();
    assert_eq!(error, "Method not allowed");
}

#[tokio::test]
async fn test_rate_limited_requests_are_enveloped() {
    let config = test_config_with(&[
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1"),
        ("RATE_LIMIT_BURST", "1"),
    ])
    .unwrap();
    let server = TestServer::start_with_config(config).await.unwrap();

    let first = server.get("/listed-subscriptions").await.unwrap();
    expect_success(first, StatusCode::OK).await.unwrap();

    let mut limited = None;
    for _ in 0..5 {
        let response = server.get("/listed-subscriptions").await.unwrap();
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            limited = Some(response);
            break;
        }
    }
    let response = limited.expect("burst of one must be exhausted");
    let error = expect_failure(response, StatusCode::TOO_MANY_REQUESTS)
        .await
        .unwrap();
    assert_eq!(error, "Too many requests");
}
