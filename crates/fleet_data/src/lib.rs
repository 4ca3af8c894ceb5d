//! In-memory fleet data used by the dashboard: the lookup collaborator the
//! navigation controller hydrates edit screens from.

use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use shared::{
    domain::{Asset, AssetId, Geofence, GeofenceId, Site, SiteId},
    error::DataError,
};
use tokio::sync::RwLock;
use tracing::debug;

mod seed;

pub const DEFAULT_LATENCY: Duration = Duration::from_millis(150);

/// Lookups resolve with the entity or `None`; only writes can fail.
#[async_trait]
pub trait FleetRepository: Send + Sync {
    async fn get_asset(&self, asset_id: &AssetId) -> Option<Asset>;
    async fn get_site(&self, site_id: &SiteId) -> Option<Site>;
    async fn get_geofence(&self, geofence_id: &GeofenceId) -> Option<Geofence>;
    async fn update_site(&self, site: Site) -> Result<Site, DataError>;
}

#[derive(Default)]
struct Collections {
    assets: HashMap<AssetId, Asset>,
    sites: HashMap<SiteId, Site>,
    geofences: HashMap<GeofenceId, Geofence>,
}

pub struct InMemoryFleet {
    collections: RwLock<Collections>,
    latency: Duration,
}

impl InMemoryFleet {
    pub fn empty() -> Self {
        Self {
            collections: RwLock::new(Collections::default()),
            latency: Duration::ZERO,
        }
    }

    /// Mock dataset matching the demo dashboard.
    pub fn seeded(latency: Duration) -> Self {
        let collections = Collections {
            assets: seed::assets()
                .into_iter()
                .map(|asset| (asset.id.clone(), asset))
                .collect(),
            sites: seed::sites()
                .into_iter()
                .map(|site| (site.id.clone(), site))
                .collect(),
            geofences: seed::geofences()
                .into_iter()
                .map(|geofence| (geofence.id.clone(), geofence))
                .collect(),
        };
        Self {
            collections: RwLock::new(collections),
            latency,
        }
    }

    #[cfg(test)]
    pub(crate) async fn insert_geofence(&self, geofence: Geofence) {
        self.collections
            .write()
            .await
            .geofences
            .insert(geofence.id.clone(), geofence);
    }

    #[cfg(test)]
    pub(crate) async fn list_sites(&self) -> Vec<Site> {
        let mut sites: Vec<Site> = self
            .collections
            .read()
            .await
            .sites
            .values()
            .cloned()
            .collect();
        sites.sort_by(|a, b| a.id.cmp(&b.id));
        sites
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl FleetRepository for InMemoryFleet {
    async fn get_asset(&self, asset_id: &AssetId) -> Option<Asset> {
        self.simulate_latency().await;
        self.collections.read().await.assets.get(asset_id).cloned()
    }

    async fn get_site(&self, site_id: &SiteId) -> Option<Site> {
        self.simulate_latency().await;
        self.collections.read().await.sites.get(site_id).cloned()
    }

    async fn get_geofence(&self, geofence_id: &GeofenceId) -> Option<Geofence> {
        self.simulate_latency().await;
        let found = self
            .collections
            .read()
            .await
            .geofences
            .get(geofence_id)
            .cloned();
        if found.is_none() {
            debug!(geofence_id = %geofence_id, "geofence lookup missed");
        }
        found
    }

    async fn update_site(&self, site: Site) -> Result<Site, DataError> {
        self.simulate_latency().await;
        if site.name.trim().is_empty() {
            return Err(DataError::validation("site name must not be empty"));
        }
        let mut collections = self.collections.write().await;
        let Some(existing) = collections.sites.get_mut(&site.id) else {
            return Err(DataError::not_found("site", &site.id));
        };
        *existing = site.clone();
        debug!(site_id = %site.id, "site updated");
        Ok(site)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
