//! The content document served by `/api/content`.
//!
//! Decoding is where "is there anything to show?" gets decided. Every scalar
//! becomes `Option<String>`: absent, `null`, non-scalar and blank values all
//! decode to `None`, numbers keep their JSON text. Sections with the wrong
//! shape decode as absent and malformed list entries are dropped, so a
//! partially broken document still renders whatever is usable.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::types::FetchError;

/// All dynamic text and media for the page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContentDocument {
    #[serde(default, deserialize_with = "section")]
    pub brand: Option<BrandSection>,
    #[serde(default, deserialize_with = "section")]
    pub hero: Option<HeroSection>,
    #[serde(default, deserialize_with = "section")]
    pub about: Option<AboutSection>,
    #[serde(default, deserialize_with = "section")]
    pub menu: Option<MenuSection>,
    #[serde(default, deserialize_with = "section")]
    pub booking: Option<FormSection>,
    #[serde(default, deserialize_with = "section")]
    pub ordering: Option<FormSection>,
    #[serde(default, deserialize_with = "section")]
    pub footer: Option<FooterSection>,
    #[serde(default, deserialize_with = "list")]
    pub videos: Option<Vec<VideoItem>>,
}

impl ContentDocument {
    /// Decode a response body. The top level must be a JSON object.
    pub fn parse(body: &str) -> Result<Self, FetchError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
        Self::from_value(value)
    }

    /// Decode an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, FetchError> {
        if !value.is_object() {
            return Err(FetchError::Decode(format!(
                "expected a JSON object, found {}",
                json_kind(&value)
            )));
        }
        serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BrandSection {
    #[serde(default, deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HeroSection {
    #[serde(default, deserialize_with = "text")]
    pub eyebrow: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub caption: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub poster: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub video: Option<String>,
    #[serde(default, deserialize_with = "list")]
    pub stats: Option<Vec<Stat>>,
}

/// One figure in the hero's stat strip, e.g. `{"value": "25", "label": "Years"}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Stat {
    #[serde(default, deserialize_with = "text")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AboutSection {
    #[serde(default, deserialize_with = "text")]
    pub eyebrow: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub badge: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MenuSection {
    #[serde(default, deserialize_with = "text")]
    pub eyebrow: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "list")]
    pub items: Option<Vec<MenuItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MenuItem {
    #[serde(default, deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub alt: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub tag: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub price: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VideoItem {
    #[serde(default, deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub video: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub poster: Option<String>,
}

/// Heading and blurb above the booking and ordering forms.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FormSection {
    #[serde(default, deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FooterSection {
    #[serde(default, deserialize_with = "text")]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub social: Option<String>,
    /// Opening hours, positional. Blank entries keep their slot as `None`.
    #[serde(default, deserialize_with = "text_list")]
    pub hours: Option<Vec<Option<String>>>,
}

/// Displayable text of a JSON scalar, `None` when there is nothing to show.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value))
}

fn section<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(entries) => Ok(Some(
            entries
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|entry| serde_json::from_value(entry).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}

fn text_list<'de, D>(deserializer: D) -> Result<Option<Vec<Option<String>>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(entries) => Ok(Some(entries.iter().map(scalar_text).collect())),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> ContentDocument {
        ContentDocument::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_object_decodes_to_nothing() {
        assert_eq!(doc(json!({})), ContentDocument::default());
    }

    #[test]
    fn test_blank_and_null_text_is_absent() {
        let parsed = doc(json!({
            "hero": { "title": "   ", "eyebrow": null, "caption": "", "description": "\n\t" }
        }));
        let hero = parsed.hero.unwrap();
        assert_eq!(hero.title, None);
        assert_eq!(hero.eyebrow, None);
        assert_eq!(hero.caption, None);
        assert_eq!(hero.description, None);
    }

    #[test]
    fn test_text_keeps_surrounding_whitespace() {
        let parsed = doc(json!({ "brand": { "name": "  Maison Ember " } }));
        assert_eq!(
            parsed.brand.unwrap().name.as_deref(),
            Some("  Maison Ember ")
        );
    }

    #[test]
    fn test_numbers_render_as_text() {
        let parsed = doc(json!({
            "hero": { "stats": [{ "value": 25, "label": "Years" }] },
            "menu": { "items": [{ "price": 18.5 }] }
        }));
        let stats = parsed.hero.unwrap().stats.unwrap();
        assert_eq!(stats[0].value.as_deref(), Some("25"));
        let items = parsed.menu.unwrap().items.unwrap();
        assert_eq!(items[0].price.as_deref(), Some("18.5"));
    }

    #[test]
    fn test_non_scalar_text_is_absent() {
        let parsed = doc(json!({
            "about": { "title": ["a"], "badge": { "x": 1 }, "image": true }
        }));
        assert_eq!(parsed.about.unwrap(), AboutSection::default());
    }

    #[test]
    fn test_wrong_shaped_sections_are_absent() {
        let parsed = doc(json!({
            "brand": "Maison",
            "hero": ["title"],
            "footer": 3,
            "videos": { "title": "not a list" }
        }));
        assert!(parsed.brand.is_none());
        assert!(parsed.hero.is_none());
        assert!(parsed.footer.is_none());
        assert!(parsed.videos.is_none());
    }

    #[test]
    fn test_malformed_list_entries_are_dropped() {
        let parsed = doc(json!({
            "videos": [{ "title": "Kitchen" }, "junk", 4, null, { "title": "Cellar" }]
        }));
        let titles: Vec<_> = parsed
            .videos
            .unwrap()
            .into_iter()
            .map(|v| v.title.unwrap())
            .collect();
        assert_eq!(titles, vec!["Kitchen", "Cellar"]);
    }

    #[test]
    fn test_empty_list_is_present() {
        let parsed = doc(json!({ "menu": { "items": [] } }));
        assert_eq!(parsed.menu.unwrap().items, Some(vec![]));
    }

    #[test]
    fn test_hours_keep_positions() {
        let parsed = doc(json!({ "footer": { "hours": ["", "Sat 10-3", "Sun closed"] } }));
        assert_eq!(
            parsed.footer.unwrap().hours.unwrap(),
            vec![None, Some("Sat 10-3".to_string()), Some("Sun closed".to_string())]
        );
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let parsed = doc(json!({
            "analytics": { "id": 1 },
            "brand": { "name": "Ember", "logo": "x.svg" }
        }));
        assert_eq!(parsed.brand.unwrap().name.as_deref(), Some("Ember"));
    }

    #[test]
    fn test_top_level_must_be_object() {
        assert!(matches!(
            ContentDocument::parse("[1, 2]"),
            Err(FetchError::Decode(_))
        ));
        assert!(matches!(
            ContentDocument::parse("not json"),
            Err(FetchError::Decode(_))
        ));
    }
}
