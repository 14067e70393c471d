use std::sync::Arc;

use reqwest::Client;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use menu_rs::repositories::InMemoryMenuRepository;
use menu_rs::services::MenuService;
use menu_rs::{api_router, MenuHandlerState};

pub struct TestEnvironment {
    pub client: Client,
    pub base_url: String,
}

impl TestEnvironment {
    /// Spin up the real app on an ephemeral port with a fresh empty menu
    pub async fn new() -> Self {
        let repository = Arc::new(InMemoryMenuRepository::new());
        let menu_service = Arc::new(MenuService::new(repository));
        let app = api_router(MenuHandlerState { menu_service });

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local address");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Failed to serve app");
        });

        let client = Client::new();

        Self { client, base_url }
    }

    /// Add a dish and return the created item as JSON
    pub async fn add_dish(&self, name: &str, description: &str, price: &str, course: &str) -> Value {
        let response = self
            .client
            .post(format!("{}/api/chef/dishes", self.base_url))
            .json(&json!({
                "name": name,
                "description": description,
                "price": price,
                "course": course,
            }))
            .send()
            .await
            .expect("Failed to add dish");

        assert_eq!(response.status().as_u16(), 201);
        response.json().await.expect("Failed to parse created dish")
    }
}
