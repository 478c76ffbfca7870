use crate::config::SupabaseConfig;
use crate::error::{AireError, Result};
use crate::models::{Listing, NOT_AVAILABLE};
use crate::sources::traits::ListingSource;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Listings accessor backed by the Supabase REST API
pub struct SupabaseListings {
    client: Client,
    config: SupabaseConfig,
}

impl SupabaseListings {
    pub fn new(config: SupabaseConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.config.url, self.config.table)
    }
}

#[async_trait]
impl ListingSource for SupabaseListings {
    async fn fetch_all(&self) -> Result<Vec<Listing>> {
        let url = self.endpoint();
        debug!("Fetching listings from {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("select", "*")])
            .header("apikey", &self.config.key)
            .bearer_auth(&self.config.key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Supabase returned status: {}", status);
            return Err(AireError::Store { status, body });
        }

        let rows: Vec<Value> = response.json().await?;
        let listings: Vec<Listing> = rows.iter().map(listing_from_row).collect();

        info!("🏠 Loaded {} listings from {}", listings.len(), self.config.table);
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "Supabase"
    }
}

/// Normalize one raw table row into the flat listing shape
pub fn listing_from_row(row: &Value) -> Listing {
    let text = |column: &str| -> String {
        row.get(column)
            .and_then(scalar_to_string)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    };

    let other_imgs = row
        .get("photos")
        .and_then(Value::as_array)
        .map(|photos| {
            photos
                .iter()
                .filter_map(|photo| photo.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    Listing {
        id: row.get("id").and_then(scalar_to_string).unwrap_or_default(),
        url: row.get("url").and_then(scalar_to_string).unwrap_or_default(),
        price: text("price"),
        bed: text("beds"),
        bath: text("baths"),
        address: text("fullAddress"),
        city: text("city"),
        state: text("state"),
        street: text("street"),
        zip: text("zipcode"),
        main_img: text("image"),
        other_imgs,
    }
}

/// Plain text form of a scalar column; null and empty strings count as missing
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
