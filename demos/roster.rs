//! Walkthrough: load a sample caregiver payload, run the directory query,
//! and evaluate the admin gate with a stubbed identity collaborator.
//!
//! Run with `cargo run --example roster`.

use careview::models::Caregiver;
use careview::views;
use careview::{AccessGate, CareviewConfig, CurrentUser, IdentityProvider};
use futures::future::BoxFuture;

// A trimmed copy of what GET /caregivers returns.
static SAMPLE_CAREGIVERS: &str = r#"[
  {
    "id": "c-101",
    "firstName": "Alice",
    "lastName": "Hart",
    "email": "alice.hart@agency.example",
    "phone": "555-0101",
    "specialization": "elderly care",
    "hiredOn": "2021-03-15",
    "active": true
  },
  {
    "id": "c-102",
    "firstName": "Bruno",
    "lastName": "Wells",
    "email": "bruno.wells@agency.example",
    "phone": null,
    "specialization": "pediatric",
    "hiredOn": "2023-07-01",
    "active": true
  },
  {
    "id": "c-103",
    "firstName": "Carla",
    "lastName": "Wellington",
    "email": "carla.w@agency.example",
    "phone": "555-0103",
    "specialization": null,
    "hiredOn": null,
    "active": false
  }
]"#;

struct StaticIdentity {
    role: &'static str,
}

impl IdentityProvider for StaticIdentity {
    fn current_user<'a>(&'a self, _token: &'a str) -> BoxFuture<'a, anyhow::Result<CurrentUser>> {
        Box::pin(async move {
            Ok(CurrentUser {
                role: self.role.to_string(),
                name: "Dana Reeve".to_string(),
                email: "dana@agency.example".to_string(),
            })
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = CareviewConfig::default();
    let caregivers: Vec<Caregiver> = serde_json::from_str(SAMPLE_CAREGIVERS)?;

    let page = views::caregiver_directory(&config)
        .search("well")
        .run(&caregivers)?;
    println!(
        "directory search 'well': {} of {} caregivers (page {}/{})",
        page.items.len(),
        page.total_matched,
        page.page,
        page.total_pages
    );
    for caregiver in &page.items {
        println!("  {} <{}>", caregiver.full_name(), caregiver.email);
    }

    let admin_gate = AccessGate::from_config(StaticIdentity { role: "admin" }, &config);
    println!(
        "admin token   -> {:?}",
        admin_gate.evaluate(Some("token-1")).await
    );

    let caregiver_gate = AccessGate::from_config(StaticIdentity { role: "caregiver" }, &config);
    println!(
        "caregiver token -> {:?}",
        caregiver_gate.evaluate(Some("token-2")).await
    );
    println!("missing token -> {:?}", caregiver_gate.evaluate(None).await);

    Ok(())
}
