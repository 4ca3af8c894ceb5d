//! The single transition function. Every navigation request funnels
//! through [`reduce`]; the only state it restores from is the stack.

use shared::{domain::GeofenceId, ViewId};
use tracing::debug;

use crate::{
    action::{Effect, NavAction},
    snapshot::NavigationSnapshot,
    state::{
        AlertFilter, GeofenceCreationData, HydrationTicket, MapEmphasis, NavigationState, SiteTab,
    },
};

pub fn reduce(state: &mut NavigationState, action: NavAction) -> Option<Effect> {
    match action {
        NavAction::NavigateTo(view) => navigate_to(state, view),
        NavAction::GoBack => pop_snapshot(state),

        NavAction::OpenAssetDetails(asset) => {
            push_snapshot(state);
            state.selected_asset = Some(asset);
            enter(state, ViewId::AssetDetails);
        }
        NavAction::BackFromAssetDetails => {
            state.selected_asset = None;
            pop_snapshot(state);
        }
        NavAction::OpenSiteDetails(site) => {
            push_snapshot(state);
            state.selected_site = Some(site);
            state.site_tab = SiteTab::Overview;
            enter(state, ViewId::SiteDetails);
        }
        NavAction::BackFromSiteDetails => {
            state.selected_site = None;
            pop_snapshot(state);
        }

        NavAction::OpenCreateGeofence(data) => {
            push_snapshot(state);
            state.geofence_creation_data = data;
            state.editing_geofence_id = None;
            state.pending_hydration = None;
            enter(state, ViewId::CreateGeofence);
        }
        NavAction::OpenEditGeofence { geofence_id, data } => {
            push_snapshot(state);
            state.editing_geofence_id = Some(geofence_id.clone());
            let effect = match data {
                Some(data) => {
                    state.geofence_creation_data = Some(data);
                    state.pending_hydration = None;
                    None
                }
                None => {
                    state.geofence_creation_data = None;
                    let ticket = state.issue_ticket();
                    Some(Effect::HydrateGeofence {
                        ticket,
                        geofence_id,
                    })
                }
            };
            enter(state, ViewId::CreateGeofence);
            return effect;
        }
        NavAction::BackFromCreateGeofence => {
            state.geofence_creation_data = None;
            state.editing_geofence_id = None;
            state.pending_hydration = None;
            pop_snapshot(state);
        }

        NavAction::OpenAlertWorkflow(alert) => {
            push_snapshot(state);
            state.workflow_alert = Some(alert);
            enter(state, ViewId::AlertWorkflow);
        }
        NavAction::BackFromAlertWorkflow => {
            state.workflow_alert = None;
            pop_snapshot(state);
        }
        NavAction::OpenAlertConfiguration => open_alert_configuration(state),
        NavAction::BackFromAlertConfiguration => pop_snapshot(state),
        NavAction::OpenAlerts(filter) => {
            state.alert_filter = Some(filter);
            navigate_to(state, ViewId::Alerts);
        }

        NavAction::OpenHistoricalPlayback(asset) => {
            push_snapshot(state);
            state.historical_playback_asset = Some(asset);
            enter(state, ViewId::HistoricalPlayback);
        }
        NavAction::BackFromHistoricalPlayback => {
            state.historical_playback_asset = None;
            pop_snapshot(state);
        }

        NavAction::OpenDestination(payload) => {
            push_snapshot(state);
            let view = payload.destination();
            state.payloads.store(payload);
            enter(state, view);
        }
        NavAction::BackFromDestination(slot) => {
            state.payloads.clear(slot);
            pop_snapshot(state);
        }

        NavAction::ShowOnMap(asset) => {
            push_snapshot(state);
            state.map = MapEmphasis::highlight(asset);
            enter(state, ViewId::Map);
        }
        NavAction::ViewViolatingAssets {
            geofence_id,
            violating,
            expected,
            actual,
        } => {
            push_snapshot(state);
            state.map = MapEmphasis::violation(geofence_id, violating, expected, actual);
            enter(state, ViewId::Map);
        }
        NavAction::BackFromMap => {
            state.map.clear();
            pop_snapshot(state);
        }

        // Deliberately no view change; callers navigate to alerts separately.
        NavAction::AlertTypeClicked(alert_type) => {
            state.alert_filter = Some(AlertFilter::active_of_type(alert_type));
        }
        NavAction::SetSelectedAsset(asset) => state.selected_asset = asset,
        NavAction::SetSelectedSite(site) => state.selected_site = site,
        NavAction::SetSiteTab(tab) => state.site_tab = tab,
        NavAction::SetAlertFilter(filter) => state.alert_filter = filter,
        NavAction::SetGeofenceCreationData(data) => state.geofence_creation_data = data,

        NavAction::UpdateSite(site) => return Some(Effect::PersistSite(site)),
        NavAction::GeofenceHydrated {
            ticket,
            geofence_id,
            data,
        } => apply_hydration(state, ticket, &geofence_id, data),
        NavAction::SiteUpdated(site) => {
            if let Some(selected) = state.selected_site.as_mut() {
                if selected.id == site.id {
                    *selected = site;
                }
            }
        }
    }
    None
}

/// Record the current display state as a return point.
pub fn push_snapshot(state: &mut NavigationState) {
    let snapshot = NavigationSnapshot::capture(state);
    state.stack.push(snapshot);
}

/// Restore the most recent return point. With nothing to return to, land on
/// the dashboard with the map emphasis cleared.
pub fn pop_snapshot(state: &mut NavigationState) {
    let from = state.current_view;
    match state.stack.pop() {
        Some(snapshot) => snapshot.restore_into(state),
        None => {
            state.current_view = ViewId::Dashboard;
            state.map.clear();
            debug!(from = %from, "back with empty stack, falling back to dashboard");
        }
    }
    left_view(state, from);
    debug!(
        from = %from,
        to = %state.current_view,
        depth = state.stack.depth(),
        "navigated back"
    );
}

fn navigate_to(state: &mut NavigationState, view: ViewId) {
    if view == ViewId::AlertConfiguration {
        open_alert_configuration(state);
        return;
    }
    enter(state, view);
}

fn open_alert_configuration(state: &mut NavigationState) {
    push_snapshot(state);
    enter(state, ViewId::AlertConfiguration);
}

/// Switch the visible view. Map emphasis never survives leaving the map.
fn enter(state: &mut NavigationState, view: ViewId) {
    let from = state.current_view;
    if view != ViewId::Map {
        state.map.clear();
    }
    state.current_view = view;
    left_view(state, from);
    debug!(
        from = %from,
        to = %view,
        depth = state.stack.depth(),
        "navigated"
    );
}

/// Leaving the geofence editor abandons any lookup still in flight. A snapshot
/// pushed on the way out keeps the editing id for a later return.
fn left_view(state: &mut NavigationState, from: ViewId) {
    if from != ViewId::CreateGeofence || state.current_view == ViewId::CreateGeofence {
        return;
    }
    if let Some(ticket) = state.pending_hydration.take() {
        debug!(ticket = ticket.0, "abandoning geofence hydration");
    }
    state.editing_geofence_id = None;
}

fn apply_hydration(
    state: &mut NavigationState,
    ticket: HydrationTicket,
    geofence_id: &GeofenceId,
    data: Option<GeofenceCreationData>,
) {
    let current = state.pending_hydration == Some(ticket)
        && state.editing_geofence_id.as_ref() == Some(geofence_id)
        && state.current_view == ViewId::CreateGeofence;
    if !current {
        debug!(
            geofence_id = %geofence_id,
            ticket = ticket.0,
            "dropping stale geofence hydration"
        );
        return;
    }
    state.pending_hydration = None;
    match data {
        Some(data) => state.geofence_creation_data = Some(data),
        None => debug!(geofence_id = %geofence_id, "geofence not found, leaving draft unset"),
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
