use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{int_field, str_field};

// ---------------------------------------------------------------------------
// CardImage - One artwork entry of a card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardImage {
    pub id: Option<i64>,
    pub image_url: Option<String>,
    pub image_url_small: Option<String>,
    pub image_url_cropped: Option<String>,
}

impl CardImage {
    pub fn from_value(image: &Value) -> Self {
        Self {
            id: int_field(image, "id"),
            image_url: str_field(image, "image_url"),
            image_url_small: str_field(image, "image_url_small"),
            image_url_cropped: str_field(image, "image_url_cropped"),
        }
    }
}

// ---------------------------------------------------------------------------
// Card - One element of the cardinfo.php `data` array
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub type_field: Option<String>,
    #[serde(rename = "frameType")]
    pub frame_type: Option<String>,
    pub desc: Option<String>,
    pub race: Option<String>,
    pub archetype: Option<String>,
    pub atk: Option<i64>,
    pub def: Option<i64>,
    pub level: Option<i64>,
    pub attribute: Option<String>,
    pub ygoprodeck_url: Option<String>,
    pub card_images: Option<Vec<CardImage>>,
}

impl Card {
    /// A card with just a name and, optionally, one small thumbnail.
    pub fn new(name: impl Into<String>, image_url_small: Option<&str>) -> Self {
        Self {
            name: name.into(),
            card_images: image_url_small.map(|url| {
                vec![CardImage {
                    image_url_small: Some(url.to_string()),
                    ..CardImage::default()
                }]
            }),
            ..Self::default()
        }
    }

    /// Read a card record. Returns `None` only for non-objects.
    ///
    /// A name that is missing or not a string reads as empty. Any other field
    /// of the wrong type reads as `None`, and a `card_images` value that is not
    /// an array reads as no images.
    pub fn from_value(entry: &Value) -> Option<Self> {
        entry.as_object()?;
        Some(Self {
            id: int_field(entry, "id"),
            name: str_field(entry, "name").unwrap_or_default(),
            type_field: str_field(entry, "type"),
            frame_type: str_field(entry, "frameType"),
            desc: str_field(entry, "desc"),
            race: str_field(entry, "race"),
            archetype: str_field(entry, "archetype"),
            atk: int_field(entry, "atk"),
            def: int_field(entry, "def"),
            level: int_field(entry, "level"),
            attribute: str_field(entry, "attribute"),
            ygoprodeck_url: str_field(entry, "ygoprodeck_url"),
            card_images: entry
                .get("card_images")
                .and_then(Value::as_array)
                .map(|images| images.iter().map(CardImage::from_value).collect()),
        })
    }

    /// Small thumbnail URL of the first image, if the card has one.
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.card_images
            .as_ref()
            .and_then(|images| images.first())
            .and_then(|image| image.image_url_small.as_deref())
    }
}

/// Extract the cards of a cardinfo.php response.
///
/// Returns `None` when the response is not an object with a `data` key, or
/// when `data` is neither an array nor null. A null `data` yields no cards.
/// Elements that are not JSON objects are skipped.
pub fn parse_card_info(value: &Value) -> Option<Vec<Card>> {
    let data = match value.as_object()?.get("data")? {
        Value::Null => return Some(Vec::new()),
        Value::Array(data) => data,
        _ => return None,
    };

    let cards = data
        .iter()
        .filter_map(|entry| {
            let card = Card::from_value(entry);
            if card.is_none() {
                log::debug!("Skipping card record that is not an object: {}", entry);
            }
            card
        })
        .collect();

    Some(cards)
}
