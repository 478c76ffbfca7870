//! Instruction templates sent to the completion endpoint.
//!
//! Both templates embed the complete listings table as compact JSON and pin
//! the model to the reply schema decoded by [`super::normalizer`].

use crate::error::{AireError, Result};
use crate::models::Listing;

const REPLY_SCHEMA: &str = r#"{
  "message": "MESSAGE_HINT",
  "properties": [
    {
      "id": "property id from listings",
      "url": "property url",
      "price": "property price",
      "bed": "number of beds",
      "bath": "number of baths",
      "address": "full street address",
      "city": "city",
      "state": "state",
      "zip": "zip code",
      "mainImg": "main image url",
      "rating": "Excellent, Good, or Bad",
      "explanation": "One short sentence explaining the rating"
    }
  ]
}"#;

const FORMATTING_RULES: &str = "CRITICAL JSON FORMATTING RULES:
- All property values MUST be strings enclosed in double quotes
- Do NOT use single quotes anywhere
- Do NOT add trailing commas after the last item in arrays or objects
- Ensure ALL strings are properly closed with double quotes
- Escape any quotes inside strings with backslash
- Do NOT include any markdown formatting like ```json
- Return ONLY the JSON object, no other text before or after
- Each property object must have ALL fields listed above as strings";

/// Prompt answering a free-form request from the user
pub fn recommendation(listings: &[Listing], user_message: &str) -> Result<String> {
    let listings_json = encode(listings)?;
    let schema = REPLY_SCHEMA.replace("MESSAGE_HINT", "A friendly message to the user");

    Ok(format!(
        r#"You are a real estate expert. Here are the house listings: {listings_json}

Based on the user description: "{user_message}", find the best 3 matching properties.

You MUST respond with VALID JSON in this exact format. DO NOT add any text before or after the JSON:
{schema}

{FORMATTING_RULES}

IMPORTANT RULES:
- If the user asks about real estate, return matching properties in the JSON format above
- ONLY return the top 3 best matching properties
- Always include a rating (Excellent, Good, or Bad) and explanation for each property
- If the user enters something unrelated to real estate, respond with {{"message": "I can only help with real estate questions. Please ask about properties.", "properties": []}}
- If the user asks about a location you don't have, respond with {{"message": "I don't have listings for that location yet.", "properties": []}}"#
    ))
}

/// Prompt asking for three further recommendations
pub fn view_more(listings: &[Listing]) -> Result<String> {
    let listings_json = encode(listings)?;
    let schema = REPLY_SCHEMA.replace("MESSAGE_HINT", "Here are 3 more properties you might like!");

    Ok(format!(
        r#"You are a real estate expert. Here are the house listings: {listings_json}

The user wants to see 3 more property recommendations. Find the best 3 matching properties that are different from the ones already shown.

You MUST respond with VALID JSON in this exact format. DO NOT add any text before or after the JSON:
{schema}

{FORMATTING_RULES}

IMPORTANT RULES:
- ONLY return the top 3 best matching properties
- Always include a rating (Excellent, Good, or Bad) and explanation for each property"#
    ))
}

fn encode(listings: &[Listing]) -> Result<String> {
    serde_json::to_string(listings).map_err(AireError::Encode)
}
