//! Owned navigation state: the current view, the return stack, and every
//! contextual slot a view can read.

use serde::{Deserialize, Serialize};
use shared::{
    domain::{
        Alert, AlertId, AlertStatus, AlertType, Asset, AssetId, Geofence, GeofenceId,
        GeofenceShape, Site, SiteId,
    },
    ViewId,
};

use crate::{
    payload::{DestinationPayload, PayloadSlots},
    snapshot::NavigationStack,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteTab {
    #[default]
    Overview,
    Assets,
    Geofences,
    Activity,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlertFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<AlertType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AlertStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<AssetId>,
}

impl AlertFilter {
    /// Filter used by the dashboard alert-type tiles.
    pub fn active_of_type(alert_type: AlertType) -> Self {
        Self {
            category: Some(alert_type),
            status: Some(AlertStatus::Active),
            asset_id: None,
        }
    }
}

/// Draft edited on the create-geofence screen, for both new and existing
/// geofences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeofenceCreationData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<SiteId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<GeofenceShape>,
    pub alert_on_entry: bool,
    pub alert_on_exit: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance_minutes: Option<u32>,
}

impl GeofenceCreationData {
    pub fn for_site(site: &Site) -> Self {
        Self {
            name: String::new(),
            site_id: Some(site.id.clone()),
            site_name: Some(site.name.clone()),
            shape: None,
            alert_on_entry: false,
            alert_on_exit: true,
            tolerance_minutes: None,
        }
    }

    pub fn from_geofence(geofence: &Geofence, site_name: Option<String>) -> Self {
        Self {
            name: geofence.name.clone(),
            site_id: geofence.site_id.clone(),
            site_name,
            shape: Some(geofence.shape.clone()),
            alert_on_entry: geofence.alert_on_entry,
            alert_on_exit: geofence.alert_on_exit,
            tolerance_minutes: geofence.tolerance_minutes,
        }
    }
}

/// Fields that only mean something while the map view is showing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapEmphasis {
    pub highlight_asset: Option<Asset>,
    pub filtered_asset_ids: Option<Vec<AssetId>>,
    pub expected_asset_ids: Option<Vec<AssetId>>,
    pub actual_asset_ids: Option<Vec<AssetId>>,
    pub violation_mode: bool,
    pub violating_geofence_id: Option<GeofenceId>,
}

impl MapEmphasis {
    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn highlight(asset: Asset) -> Self {
        Self {
            filtered_asset_ids: Some(vec![asset.id.clone()]),
            highlight_asset: Some(asset),
            ..Self::default()
        }
    }

    pub fn violation(
        geofence_id: GeofenceId,
        violating: Vec<AssetId>,
        expected: Vec<AssetId>,
        actual: Vec<AssetId>,
    ) -> Self {
        Self {
            highlight_asset: None,
            filtered_asset_ids: Some(violating),
            expected_asset_ids: Some(expected),
            actual_asset_ids: Some(actual),
            violation_mode: true,
            violating_geofence_id: Some(geofence_id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HydrationTicket(pub u64);

#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub(crate) current_view: ViewId,
    pub(crate) stack: NavigationStack,
    pub(crate) selected_asset: Option<Asset>,
    pub(crate) selected_site: Option<Site>,
    pub(crate) site_tab: SiteTab,
    pub(crate) alert_filter: Option<AlertFilter>,
    pub(crate) map: MapEmphasis,
    pub(crate) historical_playback_asset: Option<Asset>,
    pub(crate) geofence_creation_data: Option<GeofenceCreationData>,
    pub(crate) editing_geofence_id: Option<GeofenceId>,
    pub(crate) workflow_alert: Option<Alert>,
    pub(crate) payloads: PayloadSlots,
    pub(crate) pending_hydration: Option<HydrationTicket>,
    pub(crate) next_ticket: u64,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_view(&self) -> ViewId {
        self.current_view
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn selected_asset(&self) -> Option<&Asset> {
        self.selected_asset.as_ref()
    }

    pub fn selected_site(&self) -> Option<&Site> {
        self.selected_site.as_ref()
    }

    pub fn site_tab(&self) -> SiteTab {
        self.site_tab
    }

    pub fn alert_filter(&self) -> Option<&AlertFilter> {
        self.alert_filter.as_ref()
    }

    pub fn map_emphasis(&self) -> &MapEmphasis {
        &self.map
    }

    pub fn highlight_asset(&self) -> Option<&Asset> {
        self.map.highlight_asset.as_ref()
    }

    pub fn filtered_asset_ids(&self) -> Option<&[AssetId]> {
        self.map.filtered_asset_ids.as_deref()
    }

    pub fn historical_playback_asset(&self) -> Option<&Asset> {
        self.historical_playback_asset.as_ref()
    }

    pub fn geofence_creation_data(&self) -> Option<&GeofenceCreationData> {
        self.geofence_creation_data.as_ref()
    }

    pub fn editing_geofence_id(&self) -> Option<&GeofenceId> {
        self.editing_geofence_id.as_ref()
    }

    pub fn workflow_alert(&self) -> Option<&Alert> {
        self.workflow_alert.as_ref()
    }

    pub fn payloads(&self) -> &PayloadSlots {
        &self.payloads
    }

    pub fn pending_hydration(&self) -> Option<HydrationTicket> {
        self.pending_hydration
    }

    pub(crate) fn issue_ticket(&mut self) -> HydrationTicket {
        self.next_ticket += 1;
        let ticket = HydrationTicket(self.next_ticket);
        self.pending_hydration = Some(ticket);
        ticket
    }

    pub fn summary(&self) -> StateSummary {
        StateSummary {
            current_view: self.current_view,
            stack_depth: self.stack.depth(),
            back_trail: self.stack.trail(),
            selected_asset: self.selected_asset.as_ref().map(|asset| asset.id.clone()),
            selected_site: self.selected_site.as_ref().map(|site| site.id.clone()),
            site_tab: self.site_tab,
            alert_filter: self.alert_filter.clone(),
            map: MapSummary {
                highlight_asset: self.map.highlight_asset.as_ref().map(|a| a.id.clone()),
                filtered_asset_ids: self.map.filtered_asset_ids.clone(),
                expected_asset_ids: self.map.expected_asset_ids.clone(),
                actual_asset_ids: self.map.actual_asset_ids.clone(),
                violation_mode: self.map.violation_mode,
                violating_geofence_id: self.map.violating_geofence_id.clone(),
            },
            historical_playback_asset: self
                .historical_playback_asset
                .as_ref()
                .map(|asset| asset.id.clone()),
            geofence_creation_data: self.geofence_creation_data.clone(),
            editing_geofence_id: self.editing_geofence_id.clone(),
            workflow_alert: self.workflow_alert.as_ref().map(|alert| alert.id.clone()),
            payloads: self.payloads.iter().cloned().collect(),
        }
    }
}

/// Serializable view of [`NavigationState`] with entities reduced to ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSummary {
    pub current_view: ViewId,
    pub stack_depth: usize,
    /// Views `go_back` would return to, oldest first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub back_trail: Vec<ViewId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_asset: Option<AssetId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_site: Option<SiteId>,
    pub site_tab: SiteTab,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_filter: Option<AlertFilter>,
    pub map: MapSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historical_playback_asset: Option<AssetId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geofence_creation_data: Option<GeofenceCreationData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editing_geofence_id: Option<GeofenceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_alert: Option<AlertId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payloads: Vec<DestinationPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_asset: Option<AssetId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtered_asset_ids: Option<Vec<AssetId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_asset_ids: Option<Vec<AssetId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_asset_ids: Option<Vec<AssetId>>,
    pub violation_mode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violating_geofence_id: Option<GeofenceId>,
}
