//! Plain-text rendering of cards and chat messages for the terminal.

use crate::models::{ConversationMessage, PropertyCard, RecommendedProperty, Role};
use colored::Colorize;

const BAR_WIDTH: usize = 30;

pub fn banner() -> String {
    format!(
        "{}\n{}",
        "Welcome to AIRE, AI Integrated Real Estate".bold(),
        "Real Estate done smarter: Browse properties, Get expert advice, And find your dream home with a trustable assistant."
            .dimmed()
    )
}

pub fn help() -> String {
    [
        "Type a message to ask the assistant about the listings.",
        "  /cards    show the featured properties",
        "  /more     ask for 3 more recommendations",
        "  /show N   show details of featured property N",
        "  /quit     exit",
    ]
    .join("\n")
}

/// One-line summary with an optional rating line
pub fn card(position: usize, card: &PropertyCard) -> String {
    let mut out = format!(
        "{}. {} | {} bd / {} ba | {}, {} {}",
        position,
        format_price(&card.price).green(),
        card.bed,
        card.bath,
        card.address,
        card.state,
        card.zip
    );
    if let Some(rating) = &card.rating {
        out.push_str(&format!("\n   {} {}", rating_label(rating), card.explanation.as_deref().unwrap_or("")));
    }
    out
}

pub fn cards(featured: &[PropertyCard]) -> String {
    if featured.is_empty() {
        return "No featured properties yet.".dimmed().to_string();
    }
    featured
        .iter()
        .enumerate()
        .map(|(i, c)| card(i + 1, c))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full detail view of a single card
pub fn detail(card: &PropertyCard) -> String {
    let mut lines = vec![
        card.address.bold().to_string(),
        format!("{}, {} {}", card.city, card.state, card.zip),
        format!("Price:     {}", format_price(&card.price)),
        format!("Bedrooms:  {}", card.bed),
        format!("Bathrooms: {}", card.bath),
        format!("Listing:   {}", card.url),
        format!("Image:     {}", card.main_img),
    ];
    if let Some(rating) = &card.rating {
        lines.push(format!("Rating:    {}", rating_label(rating)));
    }
    if let Some(explanation) = &card.explanation {
        lines.push(format!("Why:       {}", explanation));
    }
    if !card.gallery.is_empty() {
        lines.push(format!("Gallery ({} photos):", card.gallery.len()));
        lines.extend(card.gallery.iter().map(|url| format!("  {}", url)));
    }
    lines.join("\n")
}

pub fn message(message: &ConversationMessage) -> String {
    let speaker = match message.role {
        Role::User => "You".cyan().bold(),
        Role::Assistant => "AIRE".magenta().bold(),
    };
    let mut out = format!("{}: {}", speaker, message.content);
    if let Some(properties) = &message.properties {
        for (i, property) in properties.iter().enumerate() {
            out.push('\n');
            out.push_str(&recommendation(i + 1, property));
        }
    }
    out
}

fn recommendation(position: usize, property: &RecommendedProperty) -> String {
    format!(
        "  {}. {} - {} ({}) {}",
        position,
        property.address,
        format_price(&property.price),
        rating_label(&property.rating),
        property.explanation
    )
}

/// Progress bar for a value between 0 and 100
pub fn progress_bar(value: f32) -> String {
    let filled = ((value.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f32).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        value
    )
}

fn rating_label(rating: &str) -> String {
    match rating {
        "Excellent" => rating.green().bold().to_string(),
        "Good" => rating.yellow().to_string(),
        "Bad" => rating.red().to_string(),
        other => other.to_string(),
    }
}

/// Prefix numeric prices with a dollar sign and thousands separators
fn format_price(price: &str) -> String {
    let digits = price.trim().trim_start_matches('$').replace(',', "");
    match digits.parse::<u64>() {
        Ok(amount) => {
            let raw = amount.to_string();
            let mut grouped = String::new();
            for (i, ch) in raw.chars().enumerate() {
                if i > 0 && (raw.len() - i) % 3 == 0 {
                    grouped.push(',');
                }
                grouped.push(ch);
            }
            format!("${}", grouped)
        }
        Err(_) => price.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    fn sample_card() -> PropertyCard {
        PropertyCard {
            id: "1".into(),
            url: "https://homes.example/1".into(),
            price: "1250000".into(),
            bed: "4".into(),
            bath: "3".into(),
            address: "9 Lake Dr".into(),
            city: "Madison".into(),
            state: "WI".into(),
            zip: "53703".into(),
            main_img: "https://img.example/1.jpg".into(),
            gallery: vec!["https://img.example/1-a.jpg".into()],
            rating: None,
            explanation: None,
        }
    }

    #[test]
    fn prices_are_grouped() {
        assert_eq!(format_price("1250000"), "$1,250,000");
        assert_eq!(format_price("$999"), "$999");
        assert_eq!(format_price("N/A"), "N/A");
    }

    #[test]
    fn card_line_lists_key_facts() {
        plain();
        let line = card(2, &sample_card());
        assert_eq!(line, "2. $1,250,000 | 4 bd / 3 ba | 9 Lake Dr, WI 53703");
    }

    #[test]
    fn detail_lists_gallery() {
        plain();
        let text = detail(&sample_card());
        assert!(text.contains("Gallery (1 photos):"));
        assert!(text.contains("  https://img.example/1-a.jpg"));
        assert!(!text.contains("Rating:"));
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0.0), format!("[{}]   0%", "-".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(100.0), format!("[{}] 100%", "#".repeat(BAR_WIDTH)));
        assert!(progress_bar(50.0).starts_with(&format!("[{}-", "#".repeat(15))));
    }

    #[test]
    fn assistant_message_lists_recommendations() {
        plain();
        let msg = ConversationMessage::assistant_with(
            "Take a look",
            vec![RecommendedProperty {
                id: "1".into(),
                url: "u".into(),
                price: "300000".into(),
                bed: "2".into(),
                bath: "1".into(),
                address: "3 Fir Ct".into(),
                city: "c".into(),
                state: "s".into(),
                zip: "z".into(),
                main_img: "m".into(),
                rating: "Good".into(),
                explanation: "Quiet street.".into(),
            }],
        );

        let text = message(&msg);
        assert!(text.starts_with("AIRE: Take a look"));
        assert!(text.contains("1. 3 Fir Ct - $300,000 (Good) Quiet street."));
    }
}
