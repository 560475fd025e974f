use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let mut cfg = configs::AppConfig::default();
    cfg.database.url = "sqlite::memory:".into();
    cfg.normalize_and_validate()?;

    let app = server::startup::build_app(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .expect("reqwest client")
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/api/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "healthy");
    Ok(())
}

#[tokio::test]
async fn e2e_contact_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/api/contacts", app.base_url))
        .json(&json!({"name": "Nia", "group": "club", "phones": ["555-0199"]}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let id = res.json::<serde_json::Value>().await?["id"].as_i64().expect("id");

    let res = c
        .put(format!("{}/api/contacts/{}", app.base_url, id))
        .json(&json!({"name": "Nia", "group": "club", "phones": ["555-0200", "555-0201"]}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let list = c
        .get(format!("{}/api/contacts", app.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(list[0]["phones"], json!(["555-0200", "555-0201"]));

    let groups = c
        .get(format!("{}/api/groups", app.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(groups, json!(["club"]));

    let res = c.delete(format!("{}/api/contacts/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = c.delete(format!("{}/api/contacts/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_cors_preflight() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .request(reqwest::Method::OPTIONS, format!("{}/api/contacts", app.base_url))
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .send()
        .await?;
    assert!(res.status().is_success());
    assert!(res.headers().contains_key("access-control-allow-origin"));
    Ok(())
}
