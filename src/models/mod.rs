use rand::Rng;
use serde::{Deserialize, Serialize};

/// Placeholder asset used when a draft is submitted without an image
pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/400/300";

/// Verification state of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Verified,
    Pending,
    Rejected,
}

impl Status {
    /// Human-readable label shown on listing badges
    pub fn label(&self) -> &'static str {
        match self {
            Status::Verified => "Verified",
            Status::Pending => "Pending",
            Status::Rejected => "Rejected",
        }
    }

    /// Marker icon used on cards and map pins
    pub fn icon(&self) -> &'static str {
        match self {
            Status::Verified => "🟢",
            Status::Pending => "🟡",
            Status::Rejected => "🔴",
        }
    }
}

/// Category of land a listing offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Residential,
    Commercial,
    Agricultural,
}

/// Geographic position as (longitude, latitude), serialized `[lng, lat]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates(pub f64, pub f64);

impl Coordinates {
    /// City center all seed listings cluster around
    pub const BANGALORE: Coordinates = Coordinates(77.5946, 12.9716);

    pub fn lng(&self) -> f64 {
        self.0
    }

    pub fn lat(&self) -> f64 {
        self.1
    }

    /// Random coordinates within `spread / 2` of `center` on each axis.
    /// Used for draft listings submitted without a surveyed position.
    pub fn jittered_near<R: Rng>(center: Coordinates, spread: f64, rng: &mut R) -> Self {
        Coordinates(
            center.0 + (rng.gen::<f64>() - 0.5) * spread,
            center.1 + (rng.gen::<f64>() - 0.5) * spread,
        )
    }
}

/// Core land listing record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub price: String,
    pub location: String,
    pub status: Status,
    pub image: String,
    pub coordinates: Coordinates,
    pub size: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub description: String,
}

/// A listing as submitted by a seller, before the store assigns an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDraft {
    pub title: String,
    pub price: String,
    pub location: String,
    pub status: Status,
    pub image: String,
    pub coordinates: Coordinates,
    pub size: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub description: String,
}

/// Partial update for an existing listing; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyPatch {
    pub title: Option<String>,
    pub price: Option<String>,
    pub location: Option<String>,
    pub status: Option<Status>,
    pub image: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub size: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<PropertyType>,
    pub description: Option<String>,
}

impl PropertyPatch {
    /// Merge the supplied fields over `property`, leaving the rest as-is
    pub fn apply(&self, property: &mut Property) {
        if let Some(title) = &self.title {
            property.title = title.clone();
        }
        if let Some(price) = &self.price {
            property.price = price.clone();
        }
        if let Some(location) = &self.location {
            property.location = location.clone();
        }
        if let Some(status) = self.status {
            property.status = status;
        }
        if let Some(image) = &self.image {
            property.image = image.clone();
        }
        if let Some(coordinates) = self.coordinates {
            property.coordinates = coordinates;
        }
        if let Some(size) = &self.size {
            property.size = size.clone();
        }
        if let Some(property_type) = self.property_type {
            property.property_type = property_type;
        }
        if let Some(description) = &self.description {
            property.description = description.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_property() -> Property {
        Property {
            id: "1".to_string(),
            title: "Premium Residential Plot in Whitefield".to_string(),
            price: "₹85,00,000".to_string(),
            location: "Whitefield, Bangalore East".to_string(),
            status: Status::Verified,
            image: "/assets/property-1.jpg".to_string(),
            coordinates: Coordinates(77.7500, 12.9698),
            size: "2400 sq ft".to_string(),
            property_type: PropertyType::Residential,
            description: "DTCP approved residential plot.".to_string(),
        }
    }

    #[test]
    fn property_serializes_to_frontend_wire_shape() {
        let json = serde_json::to_value(sample_property()).unwrap();
        assert_eq!(json["status"], "verified");
        assert_eq!(json["type"], "residential");
        assert_eq!(json["coordinates"], serde_json::json!([77.7500, 12.9698]));
    }

    #[test]
    fn unknown_status_is_rejected_on_deserialize() {
        let mut json = serde_json::to_value(sample_property()).unwrap();
        json["status"] = serde_json::json!("archived");
        assert!(serde_json::from_value::<Property>(json).is_err());
    }

    #[test]
    fn status_icons_match_badge_markers() {
        assert_eq!(Status::Verified.icon(), "🟢");
        assert_eq!(Status::Pending.icon(), "🟡");
        assert_eq!(Status::Rejected.icon(), "🔴");
    }

    #[test]
    fn patch_applies_only_supplied_fields() {
        let mut property = sample_property();
        let before = property.clone();
        let patch = PropertyPatch {
            price: Some("₹90,00,000".to_string()),
            status: Some(Status::Pending),
            ..Default::default()
        };
        patch.apply(&mut property);
        assert_eq!(property.price, "₹90,00,000");
        assert_eq!(property.status, Status::Pending);
        assert_eq!(property.title, before.title);
        assert_eq!(property.location, before.location);
        assert_eq!(property.image, before.image);
        assert_eq!(property.coordinates, before.coordinates);
        assert_eq!(property.size, before.size);
        assert_eq!(property.property_type, before.property_type);
        assert_eq!(property.description, before.description);
    }

    #[test]
    fn empty_patch_is_identity() {
        let mut property = sample_property();
        let before = property.clone();
        PropertyPatch::default().apply(&mut property);
        assert_eq!(property, before);
    }

    #[test]
    fn jittered_coordinates_stay_within_spread() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let c = Coordinates::jittered_near(Coordinates::BANGALORE, 0.5, &mut rng);
            assert!((c.lng() - Coordinates::BANGALORE.lng()).abs() <= 0.25);
            assert!((c.lat() - Coordinates::BANGALORE.lat()).abs() <= 0.25);
        }
    }
}
