//! Line-oriented navigation scripts: one command per line, `#` starts a
//! comment.

use anyhow::{anyhow, bail, Context, Result};
use navigation::SiteTab;
use serde::{de::IntoDeserializer, Deserialize};
use shared::{
    domain::{AlertType, AssetId, GeofenceId, JobId, MaintenanceId, SiteId, VehicleId},
    ViewId,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Navigate(ViewId),
    Back,
    BackFrom(ViewId),
    Asset(AssetId),
    Site(SiteId),
    SiteTab(SiteTab),
    ShowOnMap(AssetId),
    Playback(AssetId),
    Violations {
        geofence_id: GeofenceId,
        violating: Vec<AssetId>,
        expected: Vec<AssetId>,
        actual: Vec<AssetId>,
    },
    Alerts(Option<AlertType>),
    AlertTypeClick(AlertType),
    AlertConfiguration,
    CreateGeofence(Option<SiteId>),
    EditGeofence(GeofenceId),
    CreateJob(Option<AssetId>),
    EditJob(JobId),
    JobDetails(JobId),
    CreateMaintenance(Option<AssetId>),
    EditMaintenance(MaintenanceId),
    CreateCompliance(Option<AssetId>),
    CreateVehicle,
    EditVehicle(VehicleId),
    CreateAsset(Option<SiteId>),
    LoadAsset(Option<VehicleId>),
    CheckIn(AssetId),
    CheckOut(AssetId),
    ReportIssue(Option<AssetId>),
    RenameSite(String),
    Settle,
    Print,
}

pub fn parse_script(raw: &str) -> Result<Vec<ScriptCommand>> {
    let mut commands = Vec::new();
    for (index, line) in raw.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let command =
            parse_line(line).with_context(|| format!("line {}: '{line}'", index + 1))?;
        commands.push(command);
    }
    Ok(commands)
}

pub fn parse_line(line: &str) -> Result<ScriptCommand> {
    let mut words = line.split_whitespace();
    let verb = words.next().ok_or_else(|| anyhow!("empty command"))?;
    let args: Vec<&str> = words.collect();

    let command = match verb {
        "navigate" | "go" => ScriptCommand::Navigate(view(required(&args, 0)?)?),
        "back" => match args.first() {
            Some(target) => ScriptCommand::BackFrom(view(target)?),
            None => ScriptCommand::Back,
        },
        "asset" => ScriptCommand::Asset(AssetId::new(required(&args, 0)?)),
        "site" => ScriptCommand::Site(SiteId::new(required(&args, 0)?)),
        "site-tab" => ScriptCommand::SiteTab(tag(required(&args, 0)?)?),
        "map" => ScriptCommand::ShowOnMap(AssetId::new(required(&args, 0)?)),
        "playback" => ScriptCommand::Playback(AssetId::new(required(&args, 0)?)),
        "violations" => ScriptCommand::Violations {
            geofence_id: GeofenceId::new(required(&args, 0)?),
            violating: id_list(args.get(1).copied()),
            expected: id_list(args.get(2).copied()),
            actual: id_list(args.get(3).copied()),
        },
        "alerts" => ScriptCommand::Alerts(args.first().map(|raw| tag(raw)).transpose()?),
        "alert-type" => ScriptCommand::AlertTypeClick(tag(required(&args, 0)?)?),
        "alert-config" => ScriptCommand::AlertConfiguration,
        "create-geofence" => ScriptCommand::CreateGeofence(args.first().map(|s| SiteId::new(*s))),
        "edit-geofence" => ScriptCommand::EditGeofence(GeofenceId::new(required(&args, 0)?)),
        "create-job" => ScriptCommand::CreateJob(args.first().map(|s| AssetId::new(*s))),
        "edit-job" => ScriptCommand::EditJob(JobId::new(required(&args, 0)?)),
        "job" => ScriptCommand::JobDetails(JobId::new(required(&args, 0)?)),
        "create-maintenance" => {
            ScriptCommand::CreateMaintenance(args.first().map(|s| AssetId::new(*s)))
        }
        "edit-maintenance" => {
            ScriptCommand::EditMaintenance(MaintenanceId::new(required(&args, 0)?))
        }
        "create-compliance" => {
            ScriptCommand::CreateCompliance(args.first().map(|s| AssetId::new(*s)))
        }
        "create-vehicle" => ScriptCommand::CreateVehicle,
        "edit-vehicle" => ScriptCommand::EditVehicle(VehicleId::new(required(&args, 0)?)),
        "create-asset" => ScriptCommand::CreateAsset(args.first().map(|s| SiteId::new(*s))),
        "load-asset" => ScriptCommand::LoadAsset(args.first().map(|s| VehicleId::new(*s))),
        "check-in" => ScriptCommand::CheckIn(AssetId::new(required(&args, 0)?)),
        "check-out" => ScriptCommand::CheckOut(AssetId::new(required(&args, 0)?)),
        "report-issue" => ScriptCommand::ReportIssue(args.first().map(|s| AssetId::new(*s))),
        "rename-site" => {
            if args.is_empty() {
                bail!("rename-site needs a name");
            }
            ScriptCommand::RenameSite(args.join(" "))
        }
        "settle" => ScriptCommand::Settle,
        "print" => ScriptCommand::Print,
        other => bail!("unknown command '{other}'"),
    };
    Ok(command)
}

fn required<'a>(args: &[&'a str], index: usize) -> Result<&'a str> {
    args.get(index)
        .copied()
        .ok_or_else(|| anyhow!("missing argument {}", index + 1))
}

fn view(raw: &str) -> Result<ViewId> {
    Ok(raw.parse::<ViewId>()?)
}

/// Parse a kebab/snake-case serde tag such as `low-battery` or `activity`.
fn tag<T: for<'de> Deserialize<'de>>(raw: &str) -> Result<T> {
    T::deserialize(raw.into_deserializer())
        .map_err(|err: serde::de::value::Error| anyhow!("invalid value '{raw}': {err}"))
}

/// Comma-separated ids; `-` is an empty list.
fn id_list(raw: Option<&str>) -> Vec<AssetId> {
    match raw {
        None | Some("-") => Vec::new(),
        Some(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(AssetId::new)
            .collect(),
    }
}
