//! Conversation and featured-card state behind the view.

use crate::assistant::{self, prompt, CompletionClient};
use crate::error::{AireError, Result};
use crate::models::{AssistantReply, ConversationMessage, Listing, PropertyCard};
use crate::progress::Progress;
use crate::sources::ListingSource;
use rand::seq::SliceRandom;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Number of cards shown on first load and swapped in by a full reply
pub const FEATURED_COUNT: usize = 3;

/// Shown in the chat when the store or the model could not be reached
pub const GENERIC_ERROR: &str = "Sorry, I encountered an error. Please try again.";

pub struct Session {
    listings: Arc<dyn ListingSource>,
    completions: Arc<dyn CompletionClient>,
    conversation: Vec<ConversationMessage>,
    featured: Vec<PropertyCard>,
    progress: Progress,
}

impl Session {
    pub fn new(listings: Arc<dyn ListingSource>, completions: Arc<dyn CompletionClient>) -> Self {
        Self {
            listings,
            completions,
            conversation: Vec::new(),
            featured: Vec::new(),
            progress: Progress::new(),
        }
    }

    pub fn conversation(&self) -> &[ConversationMessage] {
        &self.conversation
    }

    pub fn featured(&self) -> &[PropertyCard] {
        &self.featured
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Featured card by zero-based position
    pub fn select(&self, index: usize) -> Option<&PropertyCard> {
        self.featured.get(index)
    }

    /// Fill the featured grid with random listings
    pub async fn load_featured(&mut self) {
        let mut listings = self.fetch_listings().await;
        listings.shuffle(&mut rand::rng());
        self.featured = listings
            .into_iter()
            .take(FEATURED_COUNT)
            .map(PropertyCard::from)
            .collect();
        info!("Showing {} featured properties", self.featured.len());
    }

    /// Run one chat turn and return the assistant message it produced
    ///
    /// Blank input is ignored and returns `None`.
    pub async fn send_message(&mut self, input: &str) -> Option<&ConversationMessage> {
        let user_message = input.trim();
        if user_message.is_empty() {
            return None;
        }

        self.conversation.push(ConversationMessage::user(user_message));
        let ticker = self.progress.start();

        let reply = match self.request_recommendations(user_message).await {
            Ok(raw) => {
                ticker.finish();
                self.apply_reply(&raw)
            }
            Err(e) => {
                drop(ticker);
                error!("Error generating response: {}", e);
                ConversationMessage::assistant(GENERIC_ERROR)
            }
        };

        self.conversation.push(reply);
        self.conversation.last()
    }

    /// Ask for more recommendations and append them to the featured grid
    ///
    /// Returns how many cards were added. Failures are logged and leave the
    /// transcript untouched.
    pub async fn view_more(&mut self) -> usize {
        let listings = self.fetch_listings().await;
        if listings.is_empty() {
            return 0;
        }

        let raw = match self.complete(prompt::view_more(&listings)).await {
            Ok(raw) => raw,
            Err(e) => {
                error!("Error generating more properties: {}", e);
                return 0;
            }
        };

        match assistant::normalize(&raw) {
            Ok(reply) => {
                let added = reply.properties.len();
                self.featured
                    .extend(reply.properties.into_iter().map(PropertyCard::from));
                info!("Added {} more featured properties", added);
                added
            }
            Err(e) => {
                error!("Error parsing AI response: {}", e);
                error!("Raw AI response: {}", raw);
                0
            }
        }
    }

    async fn request_recommendations(&self, user_message: &str) -> Result<String> {
        let listings = self.fetch_listings().await;
        if listings.is_empty() {
            return Err(AireError::NoListings);
        }
        self.complete(prompt::recommendation(&listings, user_message))
            .await
    }

    async fn complete(&self, prompt: Result<String>) -> Result<String> {
        let prompt = prompt?;
        self.completions.generate(&prompt).await
    }

    /// Decode a completion and turn it into the assistant's chat message
    fn apply_reply(&mut self, raw: &str) -> ConversationMessage {
        match assistant::normalize(raw) {
            Ok(AssistantReply {
                message,
                properties,
            }) => {
                if properties.len() == FEATURED_COUNT {
                    self.featured = properties.iter().cloned().map(PropertyCard::from).collect();
                }
                ConversationMessage::assistant_with(message, properties)
            }
            Err(e) => {
                error!("Error parsing AI response: {}", e);
                error!("Raw AI response: {}", raw);
                ConversationMessage::assistant(assistant::diagnostic(&e))
            }
        }
    }

    /// Listings snapshot; a failed fetch counts as an empty table
    async fn fetch_listings(&self) -> Vec<Listing> {
        match self.listings.fetch_all().await {
            Ok(listings) => listings,
            Err(e) => {
                warn!("{} error: {}", self.listings.source_name(), e);
                Vec::new()
            }
        }
    }
}
