use shared::{
    domain::{Alert, Asset, GeofenceId, Site},
    ViewId,
};

use crate::state::{AlertFilter, GeofenceCreationData, MapEmphasis, NavigationState, SiteTab};

/// Display state captured before a forward transition that expects a way
/// back. Fields are private: a snapshot is only ever written by
/// [`NavigationSnapshot::capture`] and read back by `restore_into`.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationSnapshot {
    view: ViewId,
    selected_asset: Option<Asset>,
    selected_site: Option<Site>,
    map: MapEmphasis,
    historical_playback_asset: Option<Asset>,
    alert_filter: Option<AlertFilter>,
    geofence_creation_data: Option<GeofenceCreationData>,
    editing_geofence_id: Option<GeofenceId>,
    site_tab: SiteTab,
    workflow_alert: Option<Alert>,
}

impl NavigationSnapshot {
    pub(crate) fn capture(state: &NavigationState) -> Self {
        Self {
            view: state.current_view,
            selected_asset: state.selected_asset.clone(),
            selected_site: state.selected_site.clone(),
            map: state.map.clone(),
            historical_playback_asset: state.historical_playback_asset.clone(),
            alert_filter: state.alert_filter.clone(),
            geofence_creation_data: state.geofence_creation_data.clone(),
            editing_geofence_id: state.editing_geofence_id.clone(),
            site_tab: state.site_tab,
            workflow_alert: state.workflow_alert.clone(),
        }
    }

    pub(crate) fn restore_into(self, state: &mut NavigationState) {
        state.current_view = self.view;
        state.selected_asset = self.selected_asset;
        state.selected_site = self.selected_site;
        state.map = self.map;
        state.historical_playback_asset = self.historical_playback_asset;
        state.alert_filter = self.alert_filter;
        state.geofence_creation_data = self.geofence_creation_data;
        state.editing_geofence_id = self.editing_geofence_id;
        state.site_tab = self.site_tab;
        state.workflow_alert = self.workflow_alert;
    }

    pub fn view(&self) -> ViewId {
        self.view
    }
}

/// LIFO of return points. Only the tail is ever touched.
#[derive(Debug, Clone, Default)]
pub struct NavigationStack {
    entries: Vec<NavigationSnapshot>,
}

impl NavigationStack {
    pub fn push(&mut self, snapshot: NavigationSnapshot) {
        self.entries.push(snapshot);
    }

    pub fn pop(&mut self) -> Option<NavigationSnapshot> {
        self.entries.pop()
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Views in push order, oldest first.
    pub fn trail(&self) -> Vec<ViewId> {
        self.entries.iter().map(NavigationSnapshot::view).collect()
    }
}
