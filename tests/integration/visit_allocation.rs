//! Visit-code allocation tests
//!
//! Sequential allocation must produce consecutive codes; concurrent
//! allocation must never produce duplicates. Requires the guest-pass
//! server on port 3001 against a migrated database with the seeded
//! reception account (reception@grandcity.example / reception).

use std::collections::HashSet;

use reqwest::Client;
use serde_json::{json, Value};

const GUESTPASS_URL: &str = "http://localhost:3001/api";

async fn get_auth_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/login", GUESTPASS_URL))
        .json(&json!({
            "email": "reception@grandcity.example",
            "password": "reception"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

fn visit_body(email: &str) -> Value {
    json!({
        "visitor": {
            "name": "Allocation Tester",
            "email": email,
            "phone": "+1-555-0199",
            "company": "QA"
        },
        "date": "2030-06-01",
        "time_from": "09:00:00",
        "time_to": "09:30:00",
        "purpose": "Allocation test"
    })
}

fn sequence_of(code: &str) -> i64 {
    code[code.len() - 6..].parse().expect("non-numeric suffix")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn sequential_allocation_produces_consecutive_codes() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let mut codes = Vec::new();
    for i in 0..5 {
        let visit: Value = client
            .post(format!("{}/visits", GUESTPASS_URL))
            .bearer_auth(&token)
            .json(&visit_body(&format!("seq{}@example.com", i)))
            .send()
            .await
            .expect("Failed to create visit")
            .json()
            .await
            .expect("Failed to parse visit");
        codes.push(visit["visit_code"].as_str().expect("No code").to_string());
    }

    // Strictly increasing by one
    for pair in codes.windows(2) {
        assert_eq!(sequence_of(&pair[1]), sequence_of(&pair[0]) + 1);
    }
}

#[tokio::test]
#[ignore]
async fn concurrent_allocation_never_duplicates_codes() {
    const WORKERS: usize = 10;

    let client = Client::new();
    let token = get_auth_token(&client).await;

    let mut handles = Vec::new();
    for i in 0..WORKERS {
        let client = client.clone();
        let token = token.clone();
        handles.push(tokio::spawn(async move {
            let response = client
                .post(format!("{}/visits", GUESTPASS_URL))
                .bearer_auth(&token)
                .json(&visit_body(&format!("concurrent{}@example.com", i)))
                .send()
                .await
                .expect("Failed to create visit");
            assert_eq!(response.status(), 201, "allocation must not collide");
            let visit: Value = response.json().await.expect("Failed to parse visit");
            visit["visit_code"].as_str().expect("No code").to_string()
        }));
    }

    let mut codes = HashSet::new();
    for handle in handles {
        let code = handle.await.expect("worker panicked");
        assert!(codes.insert(code.clone()), "duplicate code {}", code);
    }

    assert_eq!(codes.len(), WORKERS);
}
