//! Static page content, embedded at compile time and checked once on startup.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::components::icon::Icon;
use crate::config;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("at least one hotspot must be configured")]
    NoHotspots,
    #[error("hotspot id {0} is configured more than once")]
    DuplicateHotspot(u32),
    #[error("hotspot {id} sits at ({x}%, {y}%), outside the image")]
    PositionOutOfRange { id: u32, x: f64, y: f64 },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageRef {
    pub photo: String,
    pub width: u32,
    pub alt: String,
}

impl ImageRef {
    pub fn url(&self) -> String {
        config::image_url(&self.photo, self.width)
    }
}

/// Location of a hotspot as percentages of the image bounds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    fn in_bounds(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hotspot {
    pub id: u32,
    pub position: Position,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroContent {
    pub tagline: String,
    pub headline: String,
    pub headline_accent: String,
    pub headline_tail: String,
    pub body: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub image: ImageRef,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IntroContent {
    pub label: String,
    pub headline: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Service {
    pub number: String,
    pub title: String,
    pub description: String,
    pub image: ImageRef,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatsContent {
    pub background: ImageRef,
    pub teaser: ImageRef,
    pub headline: String,
    pub subtitle: String,
    pub items: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetailContent {
    pub headline: Vec<String>,
    pub body: String,
    pub cta: String,
    pub image: ImageRef,
    pub hotspots: Vec<Hotspot>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OverviewContent {
    pub headline: Vec<String>,
    pub label: String,
    pub body: String,
    pub features: Vec<Feature>,
    pub showcase: Vec<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FooterContent {
    pub banner: ImageRef,
    pub cta_headline: String,
    pub cta: String,
    pub socials: Vec<SocialLink>,
    pub tagline: Vec<String>,
    pub location: Vec<String>,
    pub explore: Vec<String>,
    pub email: String,
    pub phone: String,
    pub copyright: String,
    pub legal: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    pub nav: Vec<String>,
    pub hero: HeroContent,
    pub intro: IntroContent,
    pub services: Vec<Service>,
    pub stats: StatsContent,
    pub detail: DetailContent,
    pub overview: OverviewContent,
    pub footer: FooterContent,
}

impl SiteContent {
    pub fn parse(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let hotspots = &self.detail.hotspots;
        if hotspots.is_empty() {
            return Err(ContentError::NoHotspots);
        }

        let mut seen = HashSet::new();
        for spot in hotspots {
            if !seen.insert(spot.id) {
                return Err(ContentError::DuplicateHotspot(spot.id));
            }
            if !spot.position.in_bounds() {
                return Err(ContentError::PositionOutOfRange {
                    id: spot.id,
                    x: spot.position.x,
                    y: spot.position.y,
                });
            }
        }
        Ok(())
    }
}

/// Loads the content bundled into the binary.
pub fn load() -> Result<SiteContent, ContentError> {
    SiteContent::parse(SITE_JSON)
}

/// In-page anchor for a navigation label, e.g. "Services" -> "#services".
pub fn anchor(label: &str) -> String {
    format!("#{}", label.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn site_value() -> Value {
        serde_json::from_str(SITE_JSON).expect("embedded content is JSON")
    }

    fn parse_value(value: &Value) -> Result<SiteContent, ContentError> {
        SiteContent::parse(&value.to_string())
    }

    #[test]
    fn embedded_content_loads() {
        let content = load().expect("embedded content is valid");
        assert_eq!(content.nav, vec!["Services", "Packages", "Gallery", "Process"]);
        assert_eq!(content.services.len(), 3);
        assert_eq!(content.stats.items.len(), 4);
        assert_eq!(content.overview.showcase.len(), 3);
        assert_eq!(content.footer.socials.len(), 4);
    }

    #[test]
    fn embedded_hotspots_are_ordered() {
        let content = load().expect("embedded content is valid");
        let ids: Vec<u32> = content.detail.hotspots.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(content.detail.hotspots[1].title, "Hydrophobic Surface");
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = SiteContent::parse("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn empty_hotspots_rejected() {
        let mut value = site_value();
        value["detail"]["hotspots"] = Value::Array(Vec::new());
        assert!(matches!(parse_value(&value), Err(ContentError::NoHotspots)));
    }

    #[test]
    fn duplicate_hotspot_id_rejected() {
        let mut value = site_value();
        value["detail"]["hotspots"][2]["id"] = Value::from(1);
        assert!(matches!(
            parse_value(&value),
            Err(ContentError::DuplicateHotspot(1))
        ));
    }

    #[test]
    fn out_of_range_position_rejected() {
        let mut value = site_value();
        value["detail"]["hotspots"][0]["position"]["x"] = Value::from(120.0);
        match parse_value(&value) {
            Err(ContentError::PositionOutOfRange { id, x, .. }) => {
                assert_eq!(id, 0);
                assert_eq!(x, 120.0);
            }
            other => panic!("expected PositionOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn unknown_icon_is_parse_error() {
        let mut value = site_value();
        value["footer"]["socials"][0]["icon"] = Value::from("myspace");
        assert!(matches!(parse_value(&value), Err(ContentError::Parse(_))));
    }

    #[test]
    fn anchor_lowercases_label() {
        assert_eq!(anchor("Services"), "#services");
        assert_eq!(anchor("Process"), "#process");
    }

    #[test]
    fn image_ref_builds_host_url() {
        let image = ImageRef {
            photo: "photo-1".to_string(),
            width: 800,
            alt: "alt".to_string(),
        };
        assert_eq!(
            image.url(),
            "https://images.unsplash.com/photo-1?q=80&w=800&auto=format&fit=crop"
        );
    }
}
