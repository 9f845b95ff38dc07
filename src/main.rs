use chrono::{DateTime, Utc};
use land_market::filter::{
    filter_properties, status_counts, PropertyQuery, StatusCounts, StatusFilter,
};
use land_market::map::MapLayout;
use land_market::models::{
    Coordinates, Property, PropertyDraft, PropertyPatch, PropertyType, Status,
};
use land_market::store::PropertyStore;
use serde::Serialize;
use tracing::{info, Level};

/// Session state as written to `marketplace_snapshot.json`
#[derive(Serialize)]
struct Snapshot<'a> {
    exported_at: DateTime<Utc>,
    counts: StatusCounts,
    properties: &'a [Property],
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏞️  Land Market - session demo");
    info!("==============================");
    info!("");

    // Every session starts from the fixed seed listings
    let mut store = PropertyStore::with_seed();
    info!("Loaded {} seed listings", store.len());

    // A seller submits a new draft; coordinates are randomized around
    // the city center as the upload form does
    let mut rng = rand::thread_rng();
    let added = store
        .add(PropertyDraft {
            title: "Gated Layout Plot in Kengeri".to_string(),
            price: "₹55,00,000".to_string(),
            location: "Kengeri, Bangalore West".to_string(),
            status: Status::Pending,
            image: String::new(),
            coordinates: Coordinates::jittered_near(Coordinates::BANGALORE, 0.5, &mut rng),
            size: "1500 sq ft".to_string(),
            property_type: PropertyType::Residential,
            description: "Plot in an upcoming gated layout, verification in progress."
                .to_string(),
        })
        .clone();
    info!("Submitted new listing {} ({})", added.id, added.title);

    // Verification completes for the pending seed listing, and the
    // disputed one is withdrawn from the marketplace
    store.update(
        "3",
        PropertyPatch {
            status: Some(Status::Verified),
            ..Default::default()
        },
    );
    store.remove("4");

    let snapshot = store.snapshot();
    let counts = status_counts(&snapshot);
    info!(
        "Marketplace: {} listings ({} verified, {} pending, {} rejected)",
        counts.all, counts.verified, counts.pending, counts.rejected
    );
    info!("");

    // Default listing view: verified only
    let query = PropertyQuery {
        status: StatusFilter::Only(Status::Verified),
        ..Default::default()
    };
    let verified = filter_properties(&snapshot, &query);
    info!("✅ {} verified listings\n", verified.len());

    for (i, property) in verified.iter().enumerate() {
        println!("{}. {} ({})", i + 1, property.title, property.price);
        println!("   {} · {:?}", property.size, property.property_type);
        println!(
            "   {} {} · {}",
            property.status.icon(),
            property.status.label(),
            property.location
        );
        println!("   ID: {}", property.id);
        println!();
    }

    // Schematic map: one jittered grid position per listing
    let markers = MapLayout::default().positions(&snapshot, &mut rng);
    info!("Placed {} markers on the map", markers.len());

    // Save the session to the main JSON file
    let export = Snapshot {
        exported_at: Utc::now(),
        counts,
        properties: &snapshot,
    };
    let json = serde_json::to_string_pretty(&export)?;
    tokio::fs::write("marketplace_snapshot.json", json).await?;
    info!("💾 Saved session to marketplace_snapshot.json");

    // Save each listing to a separate file in listings/
    tokio::fs::create_dir_all("listings").await?;

    for property in snapshot.iter() {
        let filename = format!("listings/{}.json", property.id);
        let prop_json = serde_json::to_string_pretty(property)?;
        tokio::fs::write(&filename, prop_json).await?;
    }

    info!(
        "💾 Saved {} individual listing files to listings/",
        snapshot.len()
    );

    Ok(())
}
