//! Every request a view can make of the navigation layer, plus the side
//! effects the reducer asks the controller to run.

use shared::{
    domain::{Alert, AlertType, Asset, AssetId, GeofenceId, Site},
    ViewId,
};

use crate::{
    payload::{DestinationPayload, PayloadSlot},
    state::{AlertFilter, GeofenceCreationData, HydrationTicket, SiteTab},
};

#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    /// Replace the current view without recording a return point.
    NavigateTo(ViewId),
    /// Pop without clearing any destination slot.
    GoBack,

    OpenAssetDetails(Asset),
    BackFromAssetDetails,
    OpenSiteDetails(Site),
    BackFromSiteDetails,
    OpenCreateGeofence(Option<GeofenceCreationData>),
    OpenEditGeofence {
        geofence_id: GeofenceId,
        data: Option<GeofenceCreationData>,
    },
    BackFromCreateGeofence,
    OpenAlertWorkflow(Alert),
    BackFromAlertWorkflow,
    OpenAlertConfiguration,
    BackFromAlertConfiguration,
    OpenAlerts(AlertFilter),
    OpenHistoricalPlayback(Asset),
    BackFromHistoricalPlayback,
    OpenDestination(DestinationPayload),
    BackFromDestination(PayloadSlot),

    ShowOnMap(Asset),
    ViewViolatingAssets {
        geofence_id: GeofenceId,
        violating: Vec<AssetId>,
        expected: Vec<AssetId>,
        actual: Vec<AssetId>,
    },
    BackFromMap,

    AlertTypeClicked(AlertType),
    SetSelectedAsset(Option<Asset>),
    SetSelectedSite(Option<Site>),
    SetSiteTab(SiteTab),
    SetAlertFilter(Option<AlertFilter>),
    SetGeofenceCreationData(Option<GeofenceCreationData>),

    UpdateSite(Site),
    GeofenceHydrated {
        ticket: HydrationTicket,
        geofence_id: GeofenceId,
        data: Option<GeofenceCreationData>,
    },
    SiteUpdated(Site),
}

impl NavAction {
    /// The back action matching a screen, for callers that only know which
    /// view they are leaving.
    pub fn back_from(view: ViewId) -> Self {
        if let Some(slot) = PayloadSlot::for_view(view) {
            return NavAction::BackFromDestination(slot);
        }
        match view {
            ViewId::AssetDetails => NavAction::BackFromAssetDetails,
            ViewId::SiteDetails => NavAction::BackFromSiteDetails,
            ViewId::CreateGeofence => NavAction::BackFromCreateGeofence,
            ViewId::AlertWorkflow => NavAction::BackFromAlertWorkflow,
            ViewId::AlertConfiguration => NavAction::BackFromAlertConfiguration,
            ViewId::HistoricalPlayback => NavAction::BackFromHistoricalPlayback,
            ViewId::Map => NavAction::BackFromMap,
            _ => NavAction::GoBack,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NavAction::NavigateTo(_) => "navigate_to",
            NavAction::GoBack => "go_back",
            NavAction::OpenAssetDetails(_) => "open_asset_details",
            NavAction::BackFromAssetDetails => "back_from_asset_details",
            NavAction::OpenSiteDetails(_) => "open_site_details",
            NavAction::BackFromSiteDetails => "back_from_site_details",
            NavAction::OpenCreateGeofence(_) => "open_create_geofence",
            NavAction::OpenEditGeofence { .. } => "open_edit_geofence",
            NavAction::BackFromCreateGeofence => "back_from_create_geofence",
            NavAction::OpenAlertWorkflow(_) => "open_alert_workflow",
            NavAction::BackFromAlertWorkflow => "back_from_alert_workflow",
            NavAction::OpenAlertConfiguration => "open_alert_configuration",
            NavAction::BackFromAlertConfiguration => "back_from_alert_configuration",
            NavAction::OpenAlerts(_) => "open_alerts",
            NavAction::OpenHistoricalPlayback(_) => "open_historical_playback",
            NavAction::BackFromHistoricalPlayback => "back_from_historical_playback",
            NavAction::OpenDestination(_) => "open_destination",
            NavAction::BackFromDestination(_) => "back_from_destination",
            NavAction::ShowOnMap(_) => "show_on_map",
            NavAction::ViewViolatingAssets { .. } => "view_violating_assets",
            NavAction::BackFromMap => "back_from_map",
            NavAction::AlertTypeClicked(_) => "alert_type_clicked",
            NavAction::SetSelectedAsset(_) => "set_selected_asset",
            NavAction::SetSelectedSite(_) => "set_selected_site",
            NavAction::SetSiteTab(_) => "set_site_tab",
            NavAction::SetAlertFilter(_) => "set_alert_filter",
            NavAction::SetGeofenceCreationData(_) => "set_geofence_creation_data",
            NavAction::UpdateSite(_) => "update_site",
            NavAction::GeofenceHydrated { .. } => "geofence_hydrated",
            NavAction::SiteUpdated(_) => "site_updated",
        }
    }
}

/// Work the reducer cannot do itself because it touches the data
/// collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    HydrateGeofence {
        ticket: HydrationTicket,
        geofence_id: GeofenceId,
    },
    PersistSite(Site),
}
