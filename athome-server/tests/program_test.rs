use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

mod common;
use common::mock_app::{MockApp, body_json};

fn sample_program() -> Value {
    json!({
        "id": 10,
        "name": "Evening Lights",
        "deviceid": 1,
        "daymask": "MTWTF..",
        "triggermethod": "clock-time",
        "time": "2020-01-01 17:30:00",
        "offset": 10,
        "randomize": true,
        "randomizeamount": 15,
        "command": "on",
        "dimamount": 0
    })
}

fn json_request(uri: &str, method: Method, body: Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(Method::GET)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_get_program_builds_clock_time_summary() {
    let app = MockApp::new(vec![json!({
        "request": "QueryDeviceProgram",
        "result-code": 0,
        "program": sample_program()
    })])
    .await;

    let response = app
        .router
        .clone()
        .oneshot(get_request("/programs/10"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], json!("Evening Lights"));
    assert_eq!(body["data"]["daymask"], json!("MTWTF.."));
    assert_eq!(
        body["data"]["summary"],
        json!("MTWTF.. Method=clock-time Offset=10 Randomize=15 EffectiveTime=05:40PM Action=on")
    );

    assert_eq!(app.hub_request(0)["args"]["program-id"], json!(10));
}

#[tokio::test]
async fn test_none_trigger_summary_shows_no_time() {
    let mut program = sample_program();
    program["triggermethod"] = json!("none");
    program["offset"] = json!(0);
    program["randomize"] = json!(false);
    program["command"] = json!("off");

    let app = MockApp::new(vec![json!({
        "request": "QueryDeviceProgram",
        "result-code": 0,
        "program": program
    })])
    .await;

    let response = app
        .router
        .clone()
        .oneshot(get_request("/programs/10"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(
        body["data"]["summary"],
        json!("MTWTF.. Method=none Offset=0  EffectiveTime=No Time Action=off")
    );
}

#[tokio::test]
async fn test_sunset_trigger_summary_resolves_a_time() {
    let mut program = sample_program();
    program["triggermethod"] = json!("sunset");
    program["randomize"] = json!(false);
    program["offset"] = json!(-30);

    let app = MockApp::new(vec![json!({
        "request": "QueryDeviceProgram",
        "result-code": 0,
        "program": program
    })])
    .await;

    let response = app
        .router
        .clone()
        .oneshot(get_request("/programs/10"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The configured location always has a sunset, so a concrete
    // time-of-day must appear
    let body = body_json(response).await;
    let summary = body["data"]["summary"].as_str().unwrap();
    assert!(summary.contains("Method=sunset"));
    assert!(!summary.contains("No Time"));
}

#[tokio::test]
async fn test_get_device_programs() {
    let app = MockApp::new(vec![json!({
        "request": "QueryDevicePrograms",
        "result-code": 0,
        "programs": [sample_program()]
    })])
    .await;

    let response = app
        .router
        .clone()
        .oneshot(get_request("/devices/1/programs"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"][0]["id"], json!(10));
    assert!(body["data"][0]["summary"].is_string());

    assert_eq!(app.hub_request(0)["args"]["device-id"], json!(1));
}

#[tokio::test]
async fn test_create_program_relays_hub_dialect() {
    let app = MockApp::new(vec![json!({
        "request": "DefineProgram",
        "result-code": 0,
        "program": sample_program()
    })])
    .await;

    let request = json_request(
        "/devices/1/programs",
        Method::POST,
        json!({
            "name": "Evening Lights",
            "daymask": "MTWTF..",
            "triggermethod": "clock-time",
            "time": "17:30:00",
            "offset": 10,
            "randomize": true,
            "randomizeamount": 15,
            "command": "on"
        }),
    );

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let hub_request = app.hub_request(0);
    assert_eq!(hub_request["request"], json!("DefineProgram"));
    assert_eq!(hub_request["args"]["device-id"], json!(1));
    assert_eq!(hub_request["args"]["day-mask"], json!("MTWTF.."));
    assert_eq!(hub_request["args"]["trigger-method"], json!("clock-time"));
    assert_eq!(hub_request["args"]["randomize-amount"], json!(15));
    assert_eq!(hub_request["args"]["dimamount"], json!(0));
}

#[tokio::test]
async fn test_create_program_rejects_malformed_time() {
    let app = MockApp::new(vec![]).await;

    let request = json_request(
        "/devices/1/programs",
        Method::POST,
        json!({
            "name": "Evening Lights",
            "daymask": "MTWTF..",
            "triggermethod": "clock-time",
            "time": "99:99:99",
            "command": "on"
        }),
    );

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(
        body["error"]["message"],
        json!("Invalid trigger time; expected HH:MM:SS")
    );

    assert!(app.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_program_rejects_unknown_trigger_method() {
    let app = MockApp::new(vec![]).await;

    let request = json_request(
        "/devices/1/programs",
        Method::POST,
        json!({
            "name": "Evening Lights",
            "daymask": "MTWTF..",
            "triggermethod": "whenever",
            "command": "on"
        }),
    );

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(
        body["error"]["message"],
        json!("Unknown trigger method: whenever")
    );
}

#[tokio::test]
async fn test_create_program_rejects_malformed_day_mask() {
    let app = MockApp::new(vec![]).await;

    let request = json_request(
        "/devices/1/programs",
        Method::POST,
        json!({
            "name": "Evening Lights",
            "daymask": "MTW",
            "triggermethod": "clock-time",
            "time": "17:30:00",
            "command": "on"
        }),
    );

    let response = app.router.clone().oneshot(request).await.unwrap();
    // The mask fails body deserialization before the handler runs
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_program() {
    let app = MockApp::new(vec![json!({
        "request": "UpdateProgram",
        "result-code": 0,
        "program": sample_program()
    })])
    .await;

    let request = json_request(
        "/programs/10",
        Method::PUT,
        json!({
            "name": "Evening Lights",
            "daymask": ".....SS",
            "triggermethod": "sunset",
            "offset": -15,
            "command": "on"
        }),
    );

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let hub_request = app.hub_request(0);
    assert_eq!(hub_request["args"]["id"], json!(10));
    assert_eq!(hub_request["args"]["day-mask"], json!(".....SS"));
    assert_eq!(hub_request["args"]["offset"], json!(-15));
}

#[tokio::test]
async fn test_delete_program() {
    let app = MockApp::new(vec![json!({
        "request": "DeleteProgram",
        "result-code": 0,
        "message": "Program deleted"
    })])
    .await;

    let request = Request::builder()
        .uri("/programs/10")
        .method(Method::DELETE)
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Program deleted"));
    assert_eq!(app.hub_request(0)["args"]["program-id"], json!(10));
}

#[tokio::test]
async fn test_assign_and_remove_device_program() {
    let app = MockApp::new(vec![
        json!({ "request": "AssignProgram", "result-code": 0, "message": "Assigned" }),
        json!({ "request": "DeleteDeviceProgram", "result-code": 0, "message": "Removed" }),
    ])
    .await;

    let request = Request::builder()
        .uri("/devices/1/programs/10")
        .method(Method::PUT)
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .uri("/devices/1/programs/10")
        .method(Method::DELETE)
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(app.hub_request(0)["request"], json!("AssignProgram"));
    assert_eq!(app.hub_request(1)["request"], json!("DeleteDeviceProgram"));
    assert_eq!(app.hub_request(1)["args"]["device-id"], json!(1));
    assert_eq!(app.hub_request(1)["args"]["program-id"], json!(10));
}

#[tokio::test]
async fn test_get_available_programs() {
    let app = MockApp::new(vec![json!({
        "request": "QueryAvailablePrograms",
        "result-code": 0,
        "programs": [sample_program()]
    })])
    .await;

    let response = app
        .router
        .clone()
        .oneshot(get_request("/devices/1/availableprograms"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"][0]["id"], json!(10));
}
