//! End-to-end flow through the typed client against a live server

use chrono::NaiveDate;
use rust_decimal::Decimal;

use ems_client::{ClientConfig, ClientError, EmsClient};
use ems_server::auth::JwtConfig;
use ems_server::core::{Config, ServerState};
use ems_server::db::repository::UserRepository;
use shared::models::{EmployeeCreate, EmployeeStatus, EmployeeUpdate};

async fn spawn_server() -> (EmsClient, ServerState, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::with_overrides(dir.path().to_string_lossy().into_owned(), 0);
    config.jwt = JwtConfig {
        secret: "integration-test-secret-key-0123456789".to_string(),
        expiration_minutes: 60,
        issuer: "ems-server".to_string(),
        audience: "ems-clients".to_string(),
    };

    let state = ServerState::initialize_in_memory(&config).await;

    let users = UserRepository::new(state.get_db());
    users
        .create("boss", "passw0rd", "The Boss", "admin")
        .await
        .unwrap();
    users
        .create("clerk", "passw0rd", "The Clerk", "staff")
        .await
        .unwrap();

    let app = ems_server::api::router(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = EmsClient::new(&ClientConfig::new(format!("http://{}", addr)));
    (client, state, dir)
}

fn new_employee(name: &str, email: &str) -> EmployeeCreate {
    EmployeeCreate {
        name: name.to_string(),
        email: email.to_string(),
        phone: Some("+1-555-0100".to_string()),
        department_name: "Accounting".to_string(),
        position: "Clerk".to_string(),
        hire_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        salary: Decimal::new(2500000, 2),
        status: EmployeeStatus::Active,
        profile_image: None,
    }
}

#[tokio::test]
async fn test_full_session_flow() {
    let (client, _state, _dir) = spawn_server().await;

    // Login yields a live session with the user payload
    let session = client.login("boss", "passw0rd").await.unwrap();
    assert!(!session.is_expired());
    assert_eq!(session.user.role, "admin");

    let me = client.me(&session).await.unwrap();
    assert_eq!(me.username, "boss");

    // Create, fetch, update
    let created = client
        .create_employee(&session, &new_employee("Alan Reyes", "alan@example.com"))
        .await
        .unwrap();
    assert!(created.id.starts_with("employee:"));

    let fetched = client.get_employee(&session, &created.id).await.unwrap();
    assert_eq!(fetched.email, "alan@example.com");

    let updated = client
        .update_employee(
            &session,
            &created.id,
            &EmployeeUpdate {
                position: Some("Manager".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.position, "Manager");
    assert_eq!(updated.name, "Alan Reyes");

    // Search hits the department field
    let hits = client.list_employees(&session, Some("acct")).await.unwrap();
    assert_eq!(hits.len(), 1);
    let misses = client.list_employees(&session, Some("zzz")).await.unwrap();
    assert!(misses.is_empty());

    // Upload a profile image and pull it back by its public URL
    let uploaded = client
        .upload_file(&session, "avatar.png", b"png-bytes".to_vec())
        .await
        .unwrap();
    assert_eq!(uploaded.original_name, "avatar.png");
    let downloaded = client.download(&uploaded.url).await.unwrap();
    assert_eq!(downloaded, b"png-bytes".to_vec());

    // Delete once, then confirm the id is gone
    assert!(client.delete_employee(&session, &created.id).await.unwrap());
    match client.delete_employee(&session, &created.id).await {
        Err(ClientError::NotFound(_)) => {}
        other => panic!("expected NotFound, got {:?}", other),
    }

    client.logout(&session).await.unwrap();
}

#[tokio::test]
async fn test_staff_cannot_create_employees() {
    let (client, _state, _dir) = spawn_server().await;

    let session = client.login("clerk", "passw0rd").await.unwrap();
    match client
        .create_employee(&session, &new_employee("Bea Cruz", "bea@example.com"))
        .await
    {
        Err(ClientError::Forbidden(_)) => {}
        other => panic!("expected Forbidden, got {:?}", other),
    }
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let (client, _state, _dir) = spawn_server().await;

    match client.login("boss", "wrong").await {
        Err(ClientError::Unauthorized) => {}
        other => panic!("expected Unauthorized, got {:?}", other),
    }
}

#[tokio::test]
async fn test_upload_type_override_enforced_end_to_end() {
    let (client, _state, _dir) = spawn_server().await;
    let session = client.login("clerk", "passw0rd").await.unwrap();

    match client
        .upload_file_with_options(
            &session,
            "notes.txt",
            b"text".to_vec(),
            Some(&["png", "jpg"]),
            None,
        )
        .await
    {
        Err(ClientError::Validation(msg)) => assert!(msg.contains("not allowed")),
        other => panic!("expected Validation, got {:?}", other),
    }
}
