use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder used for listing columns the store left empty
pub const NOT_AVAILABLE: &str = "N/A";

/// Property record as normalized from the listings table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub url: String,
    pub price: String,
    pub bed: String,
    pub bath: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub street: String,
    pub zip: String,
    pub main_img: String,
    pub other_imgs: Vec<String>,
}

/// Property picked by the assistant, as returned in its JSON reply
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedProperty {
    pub id: String,
    pub url: String,
    pub price: String,
    pub bed: String,
    pub bath: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub main_img: String,
    pub rating: String,
    pub explanation: String,
}

/// Structured reply decoded from the model output
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AssistantReply {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Vec<RecommendedProperty>,
}

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Card shown in the featured grid
///
/// Cards start out as random listings and are later swapped for (or extended
/// with) assistant recommendations, which carry a rating and explanation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyCard {
    pub id: String,
    pub url: String,
    pub price: String,
    pub bed: String,
    pub bath: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub main_img: String,
    pub gallery: Vec<String>,
    pub rating: Option<String>,
    pub explanation: Option<String>,
}

impl From<Listing> for PropertyCard {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id,
            url: listing.url,
            price: listing.price,
            bed: listing.bed,
            bath: listing.bath,
            address: listing.address,
            city: listing.city,
            state: listing.state,
            zip: listing.zip,
            main_img: listing.main_img,
            gallery: listing.other_imgs,
            rating: None,
            explanation: None,
        }
    }
}

impl From<RecommendedProperty> for PropertyCard {
    fn from(property: RecommendedProperty) -> Self {
        Self {
            id: property.id,
            url: property.url,
            price: property.price,
            bed: property.bed,
            bath: property.bath,
            address: property.address,
            city: property.city,
            state: property.state,
            zip: property.zip,
            main_img: property.main_img,
            gallery: Vec::new(),
            rating: Some(property.rating),
            explanation: Some(property.explanation),
        }
    }
}

/// Who authored a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the chat transcript
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationMessage {
    pub role: Role,
    pub content: String,
    pub properties: Option<Vec<RecommendedProperty>>,
    pub sent_at: DateTime<Utc>,
}

impl ConversationMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            properties: None,
            sent_at: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            properties: None,
            sent_at: Utc::now(),
        }
    }

    /// Assistant turn carrying the recommended properties of a reply
    pub fn assistant_with(content: impl Into<String>, properties: Vec<RecommendedProperty>) -> Self {
        Self {
            properties: Some(properties),
            ..Self::assistant(content)
        }
    }
}
