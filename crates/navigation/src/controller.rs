//! UI-facing navigation controller. Owns the state on the UI thread, runs
//! reducer effects on a tokio runtime, and applies their results when the
//! UI loop pumps events.

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use fleet_data::FleetRepository;
use shared::{
    domain::{Alert, AlertType, Asset, AssetId, GeofenceId, JobId, MaintenanceId, Site},
    ViewId,
};
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{debug, warn};

use crate::{
    action::{Effect, NavAction},
    events::NavEvent,
    payload::{
        AssetDraft, CheckInOutContext, ComplianceDraft, DestinationPayload, IssueDraft, JobDraft,
        LoadAssetContext, MaintenanceDraft, PayloadSlot, VehicleDraft, VehicleEdit,
    },
    reducer::reduce,
    state::{AlertFilter, GeofenceCreationData, HydrationTicket, NavigationState, SiteTab},
};

pub struct NavigationController {
    state: NavigationState,
    repository: Arc<dyn FleetRepository>,
    runtime: Handle,
    event_tx: Sender<NavEvent>,
    event_rx: Receiver<NavEvent>,
    in_flight: Vec<JoinHandle<()>>,
}

impl NavigationController {
    pub fn new(repository: Arc<dyn FleetRepository>, runtime: Handle) -> Self {
        let (event_tx, event_rx) = unbounded();
        Self {
            state: NavigationState::new(),
            repository,
            runtime,
            event_tx,
            event_rx,
            in_flight: Vec::new(),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_view(&self) -> ViewId {
        self.state.current_view()
    }

    pub fn payload(&self, slot: PayloadSlot) -> Option<&DestinationPayload> {
        self.state.payloads().get(slot)
    }

    pub fn stack_depth(&self) -> usize {
        self.state.stack_depth()
    }

    pub fn dispatch(&mut self, action: NavAction) {
        let name = action.name();
        if let Some(effect) = reduce(&mut self.state, action) {
            debug!(action = name, ?effect, "running navigation effect");
            self.run_effect(effect);
        }
    }

    /// Apply every result that has arrived since the last call. Returns the
    /// number of events consumed.
    pub fn pump_events(&mut self) -> usize {
        self.in_flight.retain(|task| !task.is_finished());
        let mut applied = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply_event(event);
            applied += 1;
        }
        applied
    }

    /// Wait for every outstanding lookup, then apply the results.
    pub async fn settle(&mut self) -> usize {
        let tasks = std::mem::take(&mut self.in_flight);
        for outcome in futures::future::join_all(tasks).await {
            if let Err(err) = outcome {
                warn!(error = %err, "navigation lookup task failed");
            }
        }
        self.pump_events()
    }

    pub fn pending_lookups(&self) -> usize {
        self.in_flight.iter().filter(|task| !task.is_finished()).count()
    }

    fn apply_event(&mut self, event: NavEvent) {
        if let NavEvent::SiteUpdateFailed { site_id, error } = &event {
            warn!(site_id = %site_id, error = %error, "site update failed");
        }
        if let Some(action) = event.into_action() {
            reduce(&mut self.state, action);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        let repository = Arc::clone(&self.repository);
        let event_tx = self.event_tx.clone();
        let task = match effect {
            Effect::HydrateGeofence {
                ticket,
                geofence_id,
            } => self.runtime.spawn(async move {
                let event = hydrate_geofence(repository.as_ref(), ticket, geofence_id).await;
                let _ = event_tx.send(event);
            }),
            Effect::PersistSite(site) => self.runtime.spawn(async move {
                let site_id = site.id.clone();
                let event = match repository.update_site(site).await {
                    Ok(site) => NavEvent::SiteUpdated(site),
                    Err(error) => NavEvent::SiteUpdateFailed { site_id, error },
                };
                let _ = event_tx.send(event);
            }),
        };
        self.in_flight.push(task);
    }

    pub fn navigate_to(&mut self, view: ViewId) {
        self.dispatch(NavAction::NavigateTo(view));
    }

    pub fn go_back(&mut self) {
        self.dispatch(NavAction::GoBack);
    }

    pub fn handle_back_from(&mut self, view: ViewId) {
        self.dispatch(NavAction::back_from(view));
    }

    pub fn navigate_to_asset_details(&mut self, asset: Asset) {
        self.dispatch(NavAction::OpenAssetDetails(asset));
    }

    pub fn handle_back_from_asset_details(&mut self) {
        self.dispatch(NavAction::BackFromAssetDetails);
    }

    pub fn navigate_to_site_details(&mut self, site: Site) {
        self.dispatch(NavAction::OpenSiteDetails(site));
    }

    pub fn handle_back_from_site_details(&mut self) {
        self.dispatch(NavAction::BackFromSiteDetails);
    }

    pub fn navigate_to_create_geofence(&mut self, data: Option<GeofenceCreationData>) {
        self.dispatch(NavAction::OpenCreateGeofence(data));
    }

    /// Without `data` the draft is looked up in the background; the view
    /// switches immediately either way.
    pub fn navigate_to_edit_geofence(
        &mut self,
        geofence_id: GeofenceId,
        data: Option<GeofenceCreationData>,
    ) {
        self.dispatch(NavAction::OpenEditGeofence { geofence_id, data });
    }

    pub fn handle_back_from_create_geofence(&mut self) {
        self.dispatch(NavAction::BackFromCreateGeofence);
    }

    pub fn navigate_to_alert_workflow(&mut self, alert: Alert) {
        self.dispatch(NavAction::OpenAlertWorkflow(alert));
    }

    pub fn handle_back_from_alert_workflow(&mut self) {
        self.dispatch(NavAction::BackFromAlertWorkflow);
    }

    pub fn navigate_to_alert_configuration(&mut self) {
        self.dispatch(NavAction::OpenAlertConfiguration);
    }

    pub fn handle_back_from_alert_configuration(&mut self) {
        self.dispatch(NavAction::BackFromAlertConfiguration);
    }

    pub fn navigate_to_alerts(&mut self, filter: AlertFilter) {
        self.dispatch(NavAction::OpenAlerts(filter));
    }

    pub fn handle_alert_type_click(&mut self, alert_type: AlertType) {
        self.dispatch(NavAction::AlertTypeClicked(alert_type));
    }

    pub fn handle_historical_playback(&mut self, asset: Asset) {
        self.dispatch(NavAction::OpenHistoricalPlayback(asset));
    }

    pub fn handle_back_from_historical_playback(&mut self) {
        self.dispatch(NavAction::BackFromHistoricalPlayback);
    }

    pub fn handle_show_on_map(&mut self, asset: Asset) {
        self.dispatch(NavAction::ShowOnMap(asset));
    }

    pub fn handle_view_violating_assets(
        &mut self,
        geofence_id: GeofenceId,
        violating: Vec<AssetId>,
        expected: Vec<AssetId>,
        actual: Vec<AssetId>,
    ) {
        self.dispatch(NavAction::ViewViolatingAssets {
            geofence_id,
            violating,
            expected,
            actual,
        });
    }

    pub fn handle_back_from_map(&mut self) {
        self.dispatch(NavAction::BackFromMap);
    }

    pub fn navigate_to_create_maintenance(&mut self, draft: MaintenanceDraft) {
        self.open(DestinationPayload::CreateMaintenance(draft));
    }

    pub fn navigate_to_edit_maintenance(&mut self, maintenance_id: MaintenanceId) {
        self.open(DestinationPayload::EditMaintenance(maintenance_id));
    }

    pub fn navigate_to_create_compliance(&mut self, draft: ComplianceDraft) {
        self.open(DestinationPayload::CreateCompliance(draft));
    }

    pub fn navigate_to_create_vehicle(&mut self, draft: VehicleDraft) {
        self.open(DestinationPayload::CreateVehicle(draft));
    }

    pub fn navigate_to_edit_vehicle(&mut self, edit: VehicleEdit) {
        self.open(DestinationPayload::EditVehicle(edit));
    }

    pub fn navigate_to_create_job(&mut self, draft: JobDraft) {
        self.open(DestinationPayload::CreateJob(draft));
    }

    pub fn navigate_to_edit_job(&mut self, job_id: JobId) {
        self.open(DestinationPayload::EditJob(job_id));
    }

    pub fn navigate_to_job_details(&mut self, job_id: JobId) {
        self.open(DestinationPayload::JobDetails(job_id));
    }

    pub fn navigate_to_create_asset(&mut self, draft: AssetDraft) {
        self.open(DestinationPayload::CreateAsset(draft));
    }

    pub fn navigate_to_load_asset(&mut self, context: LoadAssetContext) {
        self.open(DestinationPayload::LoadAsset(context));
    }

    pub fn navigate_to_check_in_out(&mut self, context: CheckInOutContext) {
        self.open(DestinationPayload::CheckInOut(context));
    }

    pub fn navigate_to_report_issue(&mut self, draft: IssueDraft) {
        self.open(DestinationPayload::ReportIssue(draft));
    }

    pub fn handle_back_from_create_maintenance(&mut self) {
        self.handle_back_from_destination(PayloadSlot::CreateMaintenance);
    }

    pub fn handle_back_from_edit_maintenance(&mut self) {
        self.handle_back_from_destination(PayloadSlot::EditMaintenance);
    }

    pub fn handle_back_from_create_compliance(&mut self) {
        self.handle_back_from_destination(PayloadSlot::CreateCompliance);
    }

    pub fn handle_back_from_create_vehicle(&mut self) {
        self.handle_back_from_destination(PayloadSlot::CreateVehicle);
    }

    pub fn handle_back_from_edit_vehicle(&mut self) {
        self.handle_back_from_destination(PayloadSlot::EditVehicle);
    }

    pub fn handle_back_from_create_job(&mut self) {
        self.handle_back_from_destination(PayloadSlot::CreateJob);
    }

    pub fn handle_back_from_edit_job(&mut self) {
        self.handle_back_from_destination(PayloadSlot::EditJob);
    }

    pub fn handle_back_from_job_details(&mut self) {
        self.handle_back_from_destination(PayloadSlot::JobDetails);
    }

    pub fn handle_back_from_create_asset(&mut self) {
        self.handle_back_from_destination(PayloadSlot::CreateAsset);
    }

    pub fn handle_back_from_load_asset(&mut self) {
        self.handle_back_from_destination(PayloadSlot::LoadAsset);
    }

    pub fn handle_back_from_check_in_out(&mut self) {
        self.handle_back_from_destination(PayloadSlot::CheckInOut);
    }

    pub fn handle_back_from_report_issue(&mut self) {
        self.handle_back_from_destination(PayloadSlot::ReportIssue);
    }

    pub fn handle_back_from_destination(&mut self, slot: PayloadSlot) {
        self.dispatch(NavAction::BackFromDestination(slot));
    }

    fn open(&mut self, payload: DestinationPayload) {
        self.dispatch(NavAction::OpenDestination(payload));
    }

    pub fn set_selected_asset(&mut self, asset: Option<Asset>) {
        self.dispatch(NavAction::SetSelectedAsset(asset));
    }

    pub fn set_selected_site(&mut self, site: Option<Site>) {
        self.dispatch(NavAction::SetSelectedSite(site));
    }

    pub fn set_site_tab(&mut self, tab: SiteTab) {
        self.dispatch(NavAction::SetSiteTab(tab));
    }

    pub fn set_alert_filter(&mut self, filter: Option<AlertFilter>) {
        self.dispatch(NavAction::SetAlertFilter(filter));
    }

    pub fn set_geofence_creation_data(&mut self, data: Option<GeofenceCreationData>) {
        self.dispatch(NavAction::SetGeofenceCreationData(data));
    }

    pub fn update_site(&mut self, site: Site) {
        self.dispatch(NavAction::UpdateSite(site));
    }
}

async fn hydrate_geofence(
    repository: &dyn FleetRepository,
    ticket: HydrationTicket,
    geofence_id: GeofenceId,
) -> NavEvent {
    let data = match repository.get_geofence(&geofence_id).await {
        Some(geofence) => {
            let site_name = match &geofence.site_id {
                Some(site_id) => repository.get_site(site_id).await.map(|site| site.name),
                None => None,
            };
            Some(GeofenceCreationData::from_geofence(&geofence, site_name))
        }
        None => None,
    };
    NavEvent::GeofenceHydrated {
        ticket,
        geofence_id,
        data,
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
