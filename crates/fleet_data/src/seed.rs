use chrono::{TimeZone, Utc};
use shared::domain::{
    Asset, AssetId, AssetStatus, Coordinates, Geofence, GeofenceId, GeofenceShape, Site, SiteId,
};

fn at(lat: f64, lng: f64) -> Coordinates {
    Coordinates { lat, lng }
}

pub(crate) fn sites() -> Vec<Site> {
    vec![
        Site {
            id: SiteId::new("SITE-001"),
            name: "Main Warehouse".into(),
            address: "1200 Industrial Pkwy, Austin, TX".into(),
            location: at(30.2672, -97.7431),
            asset_count: 3,
            manager: Some("R. Ortega".into()),
        },
        Site {
            id: SiteId::new("SITE-002"),
            name: "North Yard".into(),
            address: "88 Quarry Rd, Round Rock, TX".into(),
            location: at(30.5083, -97.6789),
            asset_count: 1,
            manager: None,
        },
    ]
}

pub(crate) fn assets() -> Vec<Asset> {
    let seen = Utc.with_ymd_and_hms(2024, 5, 14, 9, 30, 0).single();
    vec![
        Asset {
            id: AssetId::new("AST-001"),
            name: "Forklift 12".into(),
            asset_type: "equipment".into(),
            status: AssetStatus::Active,
            site_id: Some(SiteId::new("SITE-001")),
            location: Some(at(30.2675, -97.7428)),
            last_seen: seen,
        },
        Asset {
            id: AssetId::new("AST-002"),
            name: "Generator G4".into(),
            asset_type: "power".into(),
            status: AssetStatus::InMaintenance,
            site_id: Some(SiteId::new("SITE-001")),
            location: Some(at(30.2669, -97.7440)),
            last_seen: seen,
        },
        Asset {
            id: AssetId::new("AST-003"),
            name: "Pallet Jack 3".into(),
            asset_type: "equipment".into(),
            status: AssetStatus::Idle,
            site_id: Some(SiteId::new("SITE-001")),
            location: None,
            last_seen: None,
        },
        Asset {
            id: AssetId::new("AST-004"),
            name: "Excavator E1".into(),
            asset_type: "heavy".into(),
            status: AssetStatus::Offline,
            site_id: Some(SiteId::new("SITE-002")),
            location: Some(at(30.5090, -97.6770)),
            last_seen: seen,
        },
    ]
}

pub(crate) fn geofences() -> Vec<Geofence> {
    vec![
        Geofence {
            id: GeofenceId::new("GEO-100"),
            name: "Warehouse perimeter".into(),
            site_id: Some(SiteId::new("SITE-001")),
            shape: GeofenceShape::Circle {
                center: at(30.2672, -97.7431),
                radius_m: 250.0,
            },
            alert_on_entry: false,
            alert_on_exit: true,
            tolerance_minutes: Some(5),
        },
        Geofence {
            id: GeofenceId::new("GEO-200"),
            name: "Quarry loading zone".into(),
            site_id: Some(SiteId::new("SITE-002")),
            shape: GeofenceShape::Polygon {
                points: vec![
                    at(30.5080, -97.6795),
                    at(30.5088, -97.6795),
                    at(30.5088, -97.6780),
                    at(30.5080, -97.6780),
                ],
            },
            alert_on_entry: true,
            alert_on_exit: true,
            tolerance_minutes: None,
        },
        Geofence {
            id: GeofenceId::new("GEO-300"),
            name: "Unassigned lot".into(),
            site_id: None,
            shape: GeofenceShape::Circle {
                center: at(30.3000, -97.7000),
                radius_m: 80.0,
            },
            alert_on_entry: true,
            alert_on_exit: false,
            tolerance_minutes: None,
        },
    ]
}
