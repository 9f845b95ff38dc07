use crate::models::{Coordinates, Property, PropertyType, Status};

/// The six fixed listings every session starts with.
/// Ids "1".."6"; ordering here is the initial display order.
pub fn seed_properties() -> Vec<Property> {
    vec![
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
            description: "DTCP approved residential plot with clear title and all necessary \
                          approvals. Located in the heart of Whitefield with excellent \
                          connectivity."
                .to_string(),
        },
        Property {
            id: "2".to_string(),
            title: "Commercial Plot Near Electronic City".to_string(),
            price: "₹1,20,00,000".to_string(),
            location: "Electronic City, Bangalore South".to_string(),
            status: Status::Verified,
            image: "/assets/property-2.jpg".to_string(),
            coordinates: Coordinates(77.6648, 12.8456),
            size: "3000 sq ft".to_string(),
            property_type: PropertyType::Commercial,
            description: "Prime commercial plot with BDA approval. Perfect for office complex \
                          or retail development. High visibility location."
                .to_string(),
        },
        Property {
            id: "3".to_string(),
            title: "Agricultural Land in Devanahalli".to_string(),
            price: "₹45,00,000".to_string(),
            location: "Devanahalli, North Bangalore".to_string(),
            status: Status::Pending,
            image: "/assets/property-3.jpg".to_string(),
            coordinates: Coordinates(77.7886, 13.2846),
            size: "5 acres".to_string(),
            property_type: PropertyType::Agricultural,
            description: "Fertile agricultural land with water source. Documents under \
                          verification. Suitable for organic farming or future development."
                .to_string(),
        },
        Property {
            id: "4".to_string(),
            title: "Villa Plot in Sarjapur Road".to_string(),
            price: "₹95,00,000".to_string(),
            location: "Sarjapur Road, Bangalore Southeast".to_string(),
            status: Status::Rejected,
            image: "/assets/property-4.jpg".to_string(),
            coordinates: Coordinates(77.7319, 12.8719),
            size: "2800 sq ft".to_string(),
            property_type: PropertyType::Residential,
            description: "Spacious villa plot in gated community. Title dispute identified \
                          during verification process. Price negotiable."
                .to_string(),
        },
        Property {
            id: "5".to_string(),
            title: "IT Park Development Plot".to_string(),
            price: "₹2,50,00,000".to_string(),
            location: "Outer Ring Road, Bangalore".to_string(),
            status: Status::Verified,
            image: "/assets/property-5.jpg".to_string(),
            coordinates: Coordinates(77.6410, 12.9279),
            size: "1.5 acres".to_string(),
            property_type: PropertyType::Commercial,
            description: "Large commercial plot approved for IT development. All clearances \
                          obtained. Strategic location on Outer Ring Road."
                .to_string(),
        },
        Property {
            id: "6".to_string(),
            title: "Residential Plot in Hebbal".to_string(),
            price: "₹75,00,000".to_string(),
            location: "Hebbal, North Bangalore".to_string(),
            status: Status::Verified,
            image: "/assets/property-6.jpg".to_string(),
            coordinates: Coordinates(77.5917, 13.0358),
            size: "2200 sq ft".to_string(),
            property_type: PropertyType::Residential,
            description: "Well-connected residential plot near Hebbal Lake. Clean title with \
                          all necessary documents verified and approved."
                .to_string(),
        },
    ]
}
