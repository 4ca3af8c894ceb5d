use super::*;
use crate::payload::{
    AssetDraft, CheckInOutContext, CheckMode, ComplianceDraft, DestinationPayload, IssueDraft,
    JobDraft, LoadAssetContext, MaintenanceDraft, PayloadSlot, VehicleDraft, VehicleEdit,
};
use chrono::{TimeZone, Utc};
use shared::domain::{
    Alert, AlertId, AlertStatus, AlertType, Asset, AssetId, AssetStatus, Coordinates, JobId,
    MaintenanceId, Site, SiteId, VehicleId,
};

fn asset(id: &str) -> Asset {
    Asset {
        id: AssetId::new(id),
        name: format!("asset {id}"),
        asset_type: "equipment".into(),
        status: AssetStatus::Active,
        site_id: None,
        location: None,
        last_seen: None,
    }
}

fn site(id: &str) -> Site {
    Site {
        id: SiteId::new(id),
        name: format!("site {id}"),
        address: "1 Test Way".into(),
        location: Coordinates { lat: 1.0, lng: 2.0 },
        asset_count: 0,
        manager: None,
    }
}

fn alert(id: &str) -> Alert {
    Alert {
        id: AlertId::new(id),
        alert_type: AlertType::GeofenceViolation,
        status: AlertStatus::Active,
        asset_id: AssetId::new("AST-001"),
        message: "left the yard".into(),
        raised_at: Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp"),
        geofence_id: None,
    }
}

fn draft(name: &str) -> GeofenceCreationData {
    GeofenceCreationData {
        name: name.into(),
        site_id: None,
        site_name: None,
        shape: None,
        alert_on_entry: true,
        alert_on_exit: false,
        tolerance_minutes: None,
    }
}

fn every_payload() -> Vec<DestinationPayload> {
    vec![
        DestinationPayload::CreateMaintenance(MaintenanceDraft::default()),
        DestinationPayload::EditMaintenance(MaintenanceId::new("MNT-1")),
        DestinationPayload::CreateCompliance(ComplianceDraft::default()),
        DestinationPayload::CreateVehicle(VehicleDraft::default()),
        DestinationPayload::EditVehicle(VehicleEdit {
            vehicle_id: VehicleId::new("VEH-1"),
            return_to: Some(ViewId::Vehicles),
        }),
        DestinationPayload::CreateJob(JobDraft::default()),
        DestinationPayload::EditJob(JobId::new("JOB-1")),
        DestinationPayload::JobDetails(JobId::new("JOB-2")),
        DestinationPayload::CreateAsset(AssetDraft::default()),
        DestinationPayload::LoadAsset(LoadAssetContext::default()),
        DestinationPayload::CheckInOut(CheckInOutContext {
            asset_id: AssetId::new("AST-001"),
            mode: CheckMode::CheckIn,
            site_id: None,
        }),
        DestinationPayload::ReportIssue(IssueDraft::default()),
    ]
}

#[test]
fn starts_on_dashboard_with_empty_stack() {
    let state = NavigationState::new();
    assert_eq!(state.current_view(), ViewId::Dashboard);
    assert_eq!(state.stack_depth(), 0);
    assert_eq!(state.site_tab(), SiteTab::Overview);
    assert!(state.map_emphasis().is_clear());
    assert!(state.payloads().is_empty());
}

#[test]
fn asset_details_then_map_then_back_twice() {
    let mut state = NavigationState::new();
    let asset_a = asset("AST-A");
    let asset_b = asset("AST-B");

    reduce(&mut state, NavAction::OpenAssetDetails(asset_a.clone()));
    assert_eq!(state.current_view(), ViewId::AssetDetails);
    assert_eq!(state.stack_depth(), 1);

    reduce(&mut state, NavAction::ShowOnMap(asset_b.clone()));
    assert_eq!(state.current_view(), ViewId::Map);
    assert_eq!(state.highlight_asset(), Some(&asset_b));
    assert_eq!(state.filtered_asset_ids(), Some(&[asset_b.id.clone()][..]));
    assert_eq!(state.stack_depth(), 2);

    reduce(&mut state, NavAction::BackFromMap);
    assert_eq!(state.current_view(), ViewId::AssetDetails);
    assert!(state.highlight_asset().is_none());
    assert!(state.filtered_asset_ids().is_none());
    assert_eq!(state.selected_asset(), Some(&asset_a));
    assert_eq!(state.stack_depth(), 1);

    reduce(&mut state, NavAction::BackFromAssetDetails);
    assert_eq!(state.current_view(), ViewId::Dashboard);
    assert!(state.selected_asset().is_none());
    assert_eq!(state.stack_depth(), 0);
}

#[test]
fn forward_then_back_sequence_restores_starting_state() {
    let mut state = NavigationState::new();
    reduce(&mut state, NavAction::NavigateTo(ViewId::Sites));
    reduce(&mut state, NavAction::SetAlertFilter(Some(AlertFilter::default())));
    let before = state.summary();

    let forwards = vec![
        NavAction::OpenSiteDetails(site("SITE-1")),
        NavAction::SetSiteTab(SiteTab::Geofences),
        NavAction::OpenCreateGeofence(Some(draft("dock"))),
        NavAction::OpenAlertWorkflow(alert("ALR-1")),
        NavAction::ViewViolatingAssets {
            geofence_id: GeofenceId::new("GEO-1"),
            violating: vec![AssetId::new("AST-9")],
            expected: vec![AssetId::new("AST-1")],
            actual: vec![AssetId::new("AST-9")],
        },
        NavAction::OpenHistoricalPlayback(asset("AST-9")),
    ];
    let backs = vec![
        NavAction::BackFromHistoricalPlayback,
        NavAction::BackFromMap,
        NavAction::BackFromAlertWorkflow,
        NavAction::BackFromCreateGeofence,
        NavAction::BackFromSiteDetails,
    ];

    for action in forwards {
        reduce(&mut state, action);
    }
    assert_eq!(state.stack_depth(), 5);
    assert_eq!(state.current_view(), ViewId::HistoricalPlayback);

    for action in backs {
        reduce(&mut state, action);
    }
    assert_eq!(state.summary(), before);
}

#[test]
fn back_on_empty_stack_lands_on_dashboard_and_clears_map_emphasis() {
    let mut state = NavigationState::new();
    state.current_view = ViewId::Map;
    state.map = MapEmphasis::violation(
        GeofenceId::new("GEO-1"),
        vec![AssetId::new("AST-1")],
        vec![],
        vec![AssetId::new("AST-1")],
    );
    state.map.highlight_asset = Some(asset("AST-1"));

    reduce(&mut state, NavAction::GoBack);

    assert_eq!(state.current_view(), ViewId::Dashboard);
    assert!(state.map_emphasis().is_clear());
    assert_eq!(state.stack_depth(), 0);
}

#[test]
fn back_from_any_destination_clears_its_slot() {
    for payload in every_payload() {
        let slot = payload.slot();
        let mut state = NavigationState::new();
        reduce(&mut state, NavAction::OpenDestination(payload.clone()));
        assert_eq!(state.current_view(), slot.view());
        assert_eq!(state.payloads().get(slot), Some(&payload));

        reduce(&mut state, NavAction::back_from(slot.view()));
        assert!(state.payloads().get(slot).is_none(), "{slot:?} not cleared");
        assert_eq!(state.current_view(), ViewId::Dashboard);
    }
}

#[test]
fn back_from_destination_leaves_other_slots_alone() {
    let mut state = NavigationState::new();
    reduce(
        &mut state,
        NavAction::OpenDestination(DestinationPayload::JobDetails(JobId::new("JOB-7"))),
    );
    reduce(
        &mut state,
        NavAction::OpenDestination(DestinationPayload::EditJob(JobId::new("JOB-7"))),
    );
    reduce(&mut state, NavAction::BackFromDestination(PayloadSlot::EditJob));

    assert_eq!(state.current_view(), ViewId::JobDetails);
    assert_eq!(state.payloads().viewing_job_id(), Some(&JobId::new("JOB-7")));
    assert!(state.payloads().editing_job_id().is_none());
}

#[test]
fn back_from_special_views_clears_their_fields() {
    let mut state = NavigationState::new();
    reduce(&mut state, NavAction::OpenAlertWorkflow(alert("ALR-2")));
    reduce(&mut state, NavAction::BackFromAlertWorkflow);
    assert!(state.workflow_alert().is_none());

    reduce(&mut state, NavAction::OpenHistoricalPlayback(asset("AST-3")));
    reduce(&mut state, NavAction::BackFromHistoricalPlayback);
    assert!(state.historical_playback_asset().is_none());

    reduce(
        &mut state,
        NavAction::OpenEditGeofence {
            geofence_id: GeofenceId::new("GEO-5"),
            data: Some(draft("gate")),
        },
    );
    reduce(&mut state, NavAction::BackFromCreateGeofence);
    assert!(state.editing_geofence_id().is_none());
    assert!(state.geofence_creation_data().is_none());
}

#[test]
fn navigating_to_non_map_view_clears_map_emphasis() {
    let mut state = NavigationState::new();
    reduce(&mut state, NavAction::ShowOnMap(asset("AST-1")));
    assert!(!state.map_emphasis().is_clear());

    reduce(&mut state, NavAction::NavigateTo(ViewId::Inventory));
    assert_eq!(state.current_view(), ViewId::Inventory);
    assert!(state.map_emphasis().is_clear());
    // replace, not push
    assert_eq!(state.stack_depth(), 1);
}

#[test]
fn navigating_to_map_keeps_map_emphasis() {
    let mut state = NavigationState::new();
    reduce(&mut state, NavAction::ShowOnMap(asset("AST-1")));
    reduce(&mut state, NavAction::NavigateTo(ViewId::Map));
    assert_eq!(state.highlight_asset().map(|a| a.id.as_str()), Some("AST-1"));
}

#[test]
fn forward_from_map_hides_emphasis_and_back_restores_it() {
    let mut state = NavigationState::new();
    reduce(&mut state, NavAction::ShowOnMap(asset("AST-1")));
    reduce(&mut state, NavAction::OpenAssetDetails(asset("AST-1")));
    assert!(state.map_emphasis().is_clear());

    reduce(&mut state, NavAction::BackFromAssetDetails);
    assert_eq!(state.current_view(), ViewId::Map);
    assert_eq!(state.highlight_asset().map(|a| a.id.as_str()), Some("AST-1"));
}

#[test]
fn alerts_navigation_sets_filter_and_view_but_type_click_only_sets_filter() {
    let filter = AlertFilter::active_of_type(AlertType::LowBattery);

    let mut navigated = NavigationState::new();
    reduce(&mut navigated, NavAction::OpenAlerts(filter.clone()));
    assert_eq!(navigated.current_view(), ViewId::Alerts);
    assert_eq!(navigated.alert_filter(), Some(&filter));

    let mut clicked = NavigationState::new();
    reduce(&mut clicked, NavAction::AlertTypeClicked(AlertType::LowBattery));
    assert_eq!(clicked.current_view(), ViewId::Dashboard);
    assert_eq!(clicked.alert_filter(), Some(&filter));
    assert_eq!(clicked.stack_depth(), 0);
}

#[test]
fn navigate_to_alert_configuration_pushes_a_return_point() {
    let mut state = NavigationState::new();
    reduce(&mut state, NavAction::NavigateTo(ViewId::Alerts));
    reduce(&mut state, NavAction::NavigateTo(ViewId::AlertConfiguration));
    assert_eq!(state.current_view(), ViewId::AlertConfiguration);
    assert_eq!(state.stack_depth(), 1);

    reduce(&mut state, NavAction::BackFromAlertConfiguration);
    assert_eq!(state.current_view(), ViewId::Alerts);
}

#[test]
fn site_details_always_opens_on_overview_tab() {
    let mut state = NavigationState::new();
    reduce(&mut state, NavAction::SetSiteTab(SiteTab::Activity));
    reduce(&mut state, NavAction::OpenSiteDetails(site("SITE-2")));
    assert_eq!(state.site_tab(), SiteTab::Overview);

    reduce(&mut state, NavAction::BackFromSiteDetails);
    assert_eq!(state.site_tab(), SiteTab::Activity);
}

#[test]
fn edit_geofence_without_data_requests_hydration() {
    let mut state = NavigationState::new();
    let effect = reduce(
        &mut state,
        NavAction::OpenEditGeofence {
            geofence_id: GeofenceId::new("GEO-1"),
            data: None,
        },
    );

    let Some(Effect::HydrateGeofence {
        ticket,
        geofence_id,
    }) = effect
    else {
        panic!("expected hydration effect");
    };
    assert_eq!(geofence_id, GeofenceId::new("GEO-1"));
    assert_eq!(state.pending_hydration(), Some(ticket));
    assert_eq!(state.current_view(), ViewId::CreateGeofence);
    assert_eq!(state.editing_geofence_id(), Some(&GeofenceId::new("GEO-1")));
    assert!(state.geofence_creation_data().is_none());
}

#[test]
fn edit_geofence_with_data_needs_no_lookup() {
    let mut state = NavigationState::new();
    let effect = reduce(
        &mut state,
        NavAction::OpenEditGeofence {
            geofence_id: GeofenceId::new("GEO-1"),
            data: Some(draft("north fence")),
        },
    );
    assert!(effect.is_none());
    assert_eq!(
        state.geofence_creation_data().map(|d| d.name.as_str()),
        Some("north fence")
    );
}

#[test]
fn hydration_result_fills_draft_for_current_request() {
    let mut state = NavigationState::new();
    let Some(Effect::HydrateGeofence { ticket, .. }) = reduce(
        &mut state,
        NavAction::OpenEditGeofence {
            geofence_id: GeofenceId::new("GEO-1"),
            data: None,
        },
    ) else {
        panic!("expected hydration effect");
    };

    reduce(
        &mut state,
        NavAction::GeofenceHydrated {
            ticket,
            geofence_id: GeofenceId::new("GEO-1"),
            data: Some(draft("hydrated")),
        },
    );
    assert_eq!(
        state.geofence_creation_data().map(|d| d.name.as_str()),
        Some("hydrated")
    );
    assert!(state.pending_hydration().is_none());
}

#[test]
fn missing_geofence_leaves_draft_unset() {
    let mut state = NavigationState::new();
    let Some(Effect::HydrateGeofence { ticket, .. }) = reduce(
        &mut state,
        NavAction::OpenEditGeofence {
            geofence_id: GeofenceId::new("GEO-1"),
            data: None,
        },
    ) else {
        panic!("expected hydration effect");
    };

    reduce(
        &mut state,
        NavAction::GeofenceHydrated {
            ticket,
            geofence_id: GeofenceId::new("GEO-1"),
            data: None,
        },
    );
    assert_eq!(state.current_view(), ViewId::CreateGeofence);
    assert!(state.geofence_creation_data().is_none());
}

#[test]
fn late_hydration_after_leaving_is_dropped() {
    let mut state = NavigationState::new();
    let Some(Effect::HydrateGeofence { ticket, .. }) = reduce(
        &mut state,
        NavAction::OpenEditGeofence {
            geofence_id: GeofenceId::new("GEO-1"),
            data: None,
        },
    ) else {
        panic!("expected hydration effect");
    };
    reduce(&mut state, NavAction::BackFromCreateGeofence);
    reduce(&mut state, NavAction::OpenCreateGeofence(None));

    reduce(
        &mut state,
        NavAction::GeofenceHydrated {
            ticket,
            geofence_id: GeofenceId::new("GEO-1"),
            data: Some(draft("stale")),
        },
    );
    assert!(state.geofence_creation_data().is_none());
}

#[test]
fn generic_back_out_of_editor_abandons_lookup() {
    let mut state = NavigationState::new();
    reduce(&mut state, NavAction::NavigateTo(ViewId::Geofences));
    let Some(Effect::HydrateGeofence { ticket, .. }) = reduce(
        &mut state,
        NavAction::OpenEditGeofence {
            geofence_id: GeofenceId::new("GEO-1"),
            data: None,
        },
    ) else {
        panic!("expected hydration effect");
    };

    reduce(&mut state, NavAction::GoBack);
    assert_eq!(state.current_view(), ViewId::Geofences);
    assert!(state.pending_hydration().is_none());
    assert!(state.editing_geofence_id().is_none());

    reduce(&mut state, NavAction::NavigateTo(ViewId::CreateGeofence));
    reduce(
        &mut state,
        NavAction::GeofenceHydrated {
            ticket,
            geofence_id: GeofenceId::new("GEO-1"),
            data: Some(draft("stale")),
        },
    );
    assert!(state.geofence_creation_data().is_none());
}

#[test]
fn navigating_away_from_editor_abandons_lookup() {
    let mut state = NavigationState::new();
    reduce(
        &mut state,
        NavAction::OpenEditGeofence {
            geofence_id: GeofenceId::new("GEO-1"),
            data: None,
        },
    );

    reduce(&mut state, NavAction::NavigateTo(ViewId::Inventory));
    assert!(state.pending_hydration().is_none());
    assert!(state.editing_geofence_id().is_none());
}

#[test]
fn returning_to_editor_keeps_edit_mode_but_not_the_lookup() {
    let mut state = NavigationState::new();
    let Some(Effect::HydrateGeofence { ticket, .. }) = reduce(
        &mut state,
        NavAction::OpenEditGeofence {
            geofence_id: GeofenceId::new("GEO-1"),
            data: None,
        },
    ) else {
        panic!("expected hydration effect");
    };

    reduce(&mut state, NavAction::OpenAssetDetails(asset("AST-1")));
    reduce(&mut state, NavAction::BackFromAssetDetails);
    assert_eq!(state.current_view(), ViewId::CreateGeofence);
    assert_eq!(state.editing_geofence_id(), Some(&GeofenceId::new("GEO-1")));

    reduce(
        &mut state,
        NavAction::GeofenceHydrated {
            ticket,
            geofence_id: GeofenceId::new("GEO-1"),
            data: Some(draft("late")),
        },
    );
    assert!(state.geofence_creation_data().is_none());
}

#[test]
fn superseded_hydration_ticket_is_dropped() {
    let mut state = NavigationState::new();
    let first = reduce(
        &mut state,
        NavAction::OpenEditGeofence {
            geofence_id: GeofenceId::new("GEO-1"),
            data: None,
        },
    );
    reduce(
        &mut state,
        NavAction::OpenEditGeofence {
            geofence_id: GeofenceId::new("GEO-1"),
            data: None,
        },
    );
    let Some(Effect::HydrateGeofence { ticket, .. }) = first else {
        panic!("expected hydration effect");
    };

    reduce(
        &mut state,
        NavAction::GeofenceHydrated {
            ticket,
            geofence_id: GeofenceId::new("GEO-1"),
            data: Some(draft("first")),
        },
    );
    assert!(state.geofence_creation_data().is_none());
    assert!(state.pending_hydration().is_some());
}

#[test]
fn update_site_is_an_effect_and_result_refreshes_selection() {
    let mut state = NavigationState::new();
    reduce(&mut state, NavAction::OpenSiteDetails(site("SITE-1")));

    let mut renamed = site("SITE-1");
    renamed.name = "Renamed".into();
    let effect = reduce(&mut state, NavAction::UpdateSite(renamed.clone()));
    assert_eq!(effect, Some(Effect::PersistSite(renamed.clone())));
    assert_eq!(state.selected_site().map(|s| s.name.as_str()), Some("site SITE-1"));

    reduce(&mut state, NavAction::SiteUpdated(site("SITE-2")));
    assert_eq!(state.selected_site().map(|s| s.name.as_str()), Some("site SITE-1"));

    reduce(&mut state, NavAction::SiteUpdated(renamed));
    assert_eq!(state.selected_site().map(|s| s.name.as_str()), Some("Renamed"));
}

#[test]
fn back_from_unvisited_view_is_accepted() {
    let mut state = NavigationState::new();
    reduce(&mut state, NavAction::NavigateTo(ViewId::Reports));
    reduce(&mut state, NavAction::BackFromDestination(PayloadSlot::CheckInOut));
    assert_eq!(state.current_view(), ViewId::Dashboard);
}
