//! Applies parsed script commands to a controller.

use anyhow::{anyhow, Result};
use fleet_data::{FleetRepository, InMemoryFleet};
use navigation::{
    payload::{
        AssetDraft, CheckInOutContext, CheckMode, ComplianceDraft, IssueDraft, JobDraft,
        LoadAssetContext, MaintenanceDraft, VehicleDraft, VehicleEdit,
    },
    AlertFilter, GeofenceCreationData, NavigationController, StateSummary,
};
use shared::domain::{Asset, AssetId, Site, SiteId};
use tracing::info;

use crate::script::ScriptCommand;

/// Runs every command in order and returns the summaries captured by
/// `print` commands.
pub async fn run(
    controller: &mut NavigationController,
    fleet: &InMemoryFleet,
    commands: Vec<ScriptCommand>,
) -> Result<Vec<StateSummary>> {
    let mut printed = Vec::new();
    for command in commands {
        if let Some(summary) = apply(controller, fleet, command).await? {
            printed.push(summary);
        }
        controller.pump_events();
    }
    Ok(printed)
}

async fn apply(
    controller: &mut NavigationController,
    fleet: &InMemoryFleet,
    command: ScriptCommand,
) -> Result<Option<StateSummary>> {
    match command {
        ScriptCommand::Navigate(view) => controller.navigate_to(view),
        ScriptCommand::Back => controller.go_back(),
        ScriptCommand::BackFrom(view) => controller.handle_back_from(view),
        ScriptCommand::Asset(id) => {
            let asset = asset(fleet, &id).await?;
            controller.navigate_to_asset_details(asset);
        }
        ScriptCommand::Site(id) => {
            let site = site(fleet, &id).await?;
            controller.navigate_to_site_details(site);
        }
        ScriptCommand::SiteTab(tab) => controller.set_site_tab(tab),
        ScriptCommand::ShowOnMap(id) => {
            let asset = asset(fleet, &id).await?;
            controller.handle_show_on_map(asset);
        }
        ScriptCommand::Playback(id) => {
            let asset = asset(fleet, &id).await?;
            controller.handle_historical_playback(asset);
        }
        ScriptCommand::Violations {
            geofence_id,
            violating,
            expected,
            actual,
        } => controller.handle_view_violating_assets(geofence_id, violating, expected, actual),
        ScriptCommand::Alerts(alert_type) => {
            let filter = match alert_type {
                Some(alert_type) => AlertFilter::active_of_type(alert_type),
                None => AlertFilter::default(),
            };
            controller.navigate_to_alerts(filter);
        }
        ScriptCommand::AlertTypeClick(alert_type) => controller.handle_alert_type_click(alert_type),
        ScriptCommand::AlertConfiguration => controller.navigate_to_alert_configuration(),
        ScriptCommand::CreateGeofence(site_id) => {
            let data = match site_id {
                Some(id) => Some(GeofenceCreationData::for_site(&site(fleet, &id).await?)),
                None => None,
            };
            controller.navigate_to_create_geofence(data);
        }
        ScriptCommand::EditGeofence(id) => controller.navigate_to_edit_geofence(id, None),
        ScriptCommand::CreateJob(asset_id) => controller.navigate_to_create_job(JobDraft {
            asset_ids: asset_id.into_iter().collect(),
            ..JobDraft::default()
        }),
        ScriptCommand::EditJob(id) => controller.navigate_to_edit_job(id),
        ScriptCommand::JobDetails(id) => controller.navigate_to_job_details(id),
        ScriptCommand::CreateMaintenance(asset_id) => {
            controller.navigate_to_create_maintenance(MaintenanceDraft {
                asset_id,
                ..MaintenanceDraft::default()
            })
        }
        ScriptCommand::EditMaintenance(id) => controller.navigate_to_edit_maintenance(id),
        ScriptCommand::CreateCompliance(asset_id) => {
            controller.navigate_to_create_compliance(ComplianceDraft {
                asset_id,
                requirement: None,
            })
        }
        ScriptCommand::CreateVehicle => {
            let draft = VehicleDraft {
                site_id: controller.state().selected_site().map(|s| s.id.clone()),
                return_to: Some(controller.current_view()),
            };
            controller.navigate_to_create_vehicle(draft);
        }
        ScriptCommand::EditVehicle(vehicle_id) => {
            let return_to = Some(controller.current_view());
            controller.navigate_to_edit_vehicle(VehicleEdit {
                vehicle_id,
                return_to,
            })
        }
        ScriptCommand::CreateAsset(site_id) => controller.navigate_to_create_asset(AssetDraft {
            site_id,
            asset_type: None,
        }),
        ScriptCommand::LoadAsset(vehicle_id) => {
            controller.navigate_to_load_asset(LoadAssetContext {
                vehicle_id,
                asset_ids: Vec::new(),
            })
        }
        ScriptCommand::CheckIn(id) => check_in_out(controller, fleet, id, CheckMode::CheckIn).await?,
        ScriptCommand::CheckOut(id) => {
            check_in_out(controller, fleet, id, CheckMode::CheckOut).await?
        }
        ScriptCommand::ReportIssue(asset_id) => controller.navigate_to_report_issue(IssueDraft {
            asset_id,
            alert_id: None,
        }),
        ScriptCommand::RenameSite(name) => {
            let mut site = controller
                .state()
                .selected_site()
                .cloned()
                .ok_or_else(|| anyhow!("rename-site needs a selected site"))?;
            site.name = name;
            controller.update_site(site);
        }
        ScriptCommand::Settle => {
            let applied = controller.settle().await;
            info!(applied, "settled background lookups");
        }
        ScriptCommand::Print => return Ok(Some(controller.state().summary())),
    }
    Ok(None)
}

async fn check_in_out(
    controller: &mut NavigationController,
    fleet: &InMemoryFleet,
    asset_id: AssetId,
    mode: CheckMode,
) -> Result<()> {
    let asset = asset(fleet, &asset_id).await?;
    controller.navigate_to_check_in_out(CheckInOutContext {
        asset_id,
        mode,
        site_id: asset.site_id,
    });
    Ok(())
}

async fn asset(fleet: &InMemoryFleet, id: &AssetId) -> Result<Asset> {
    fleet
        .get_asset(id)
        .await
        .ok_or_else(|| anyhow!("unknown asset '{id}'"))
}

async fn site(fleet: &InMemoryFleet, id: &SiteId) -> Result<Site> {
    fleet
        .get_site(id)
        .await
        .ok_or_else(|| anyhow!("unknown site '{id}'"))
}
