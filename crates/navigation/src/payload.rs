//! Destination payloads: data handed to a screen when it is entered. Each
//! destination owns one slot; entering it fills the slot, backing out of it
//! clears the slot.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{
    domain::{AlertId, AssetId, JobId, MaintenanceId, SiteId, VehicleId},
    ViewId,
};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MaintenanceDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<AssetId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComplianceDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<AssetId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement: Option<String>,
}

/// `return_to` replaces the completion callback: the form navigates there
/// after saving instead of invoking caller code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VehicleDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<SiteId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_to: Option<ViewId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleEdit {
    pub vehicle_id: VehicleId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_to: Option<ViewId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobDraft {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub asset_ids: Vec<AssetId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<SiteId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<SiteId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoadAssetContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<VehicleId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub asset_ids: Vec<AssetId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckMode {
    CheckIn,
    CheckOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInOutContext {
    pub asset_id: AssetId,
    pub mode: CheckMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<SiteId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IssueDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<AssetId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_id: Option<AlertId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadSlot {
    CreateMaintenance,
    EditMaintenance,
    CreateCompliance,
    CreateVehicle,
    EditVehicle,
    CreateJob,
    EditJob,
    JobDetails,
    CreateAsset,
    LoadAsset,
    CheckInOut,
    ReportIssue,
}

impl PayloadSlot {
    pub fn view(self) -> ViewId {
        match self {
            PayloadSlot::CreateMaintenance => ViewId::CreateMaintenance,
            PayloadSlot::EditMaintenance => ViewId::EditMaintenance,
            PayloadSlot::CreateCompliance => ViewId::CreateCompliance,
            PayloadSlot::CreateVehicle => ViewId::CreateVehicle,
            PayloadSlot::EditVehicle => ViewId::EditVehicle,
            PayloadSlot::CreateJob => ViewId::CreateJob,
            PayloadSlot::EditJob => ViewId::EditJob,
            PayloadSlot::JobDetails => ViewId::JobDetails,
            PayloadSlot::CreateAsset => ViewId::CreateAsset,
            PayloadSlot::LoadAsset => ViewId::LoadAsset,
            PayloadSlot::CheckInOut => ViewId::CheckInOut,
            PayloadSlot::ReportIssue => ViewId::ReportIssue,
        }
    }

    pub fn for_view(view: ViewId) -> Option<Self> {
        Some(match view {
            ViewId::CreateMaintenance => PayloadSlot::CreateMaintenance,
            ViewId::EditMaintenance => PayloadSlot::EditMaintenance,
            ViewId::CreateCompliance => PayloadSlot::CreateCompliance,
            ViewId::CreateVehicle => PayloadSlot::CreateVehicle,
            ViewId::EditVehicle => PayloadSlot::EditVehicle,
            ViewId::CreateJob => PayloadSlot::CreateJob,
            ViewId::EditJob => PayloadSlot::EditJob,
            ViewId::JobDetails => PayloadSlot::JobDetails,
            ViewId::CreateAsset => PayloadSlot::CreateAsset,
            ViewId::LoadAsset => PayloadSlot::LoadAsset,
            ViewId::CheckInOut => PayloadSlot::CheckInOut,
            ViewId::ReportIssue => PayloadSlot::ReportIssue,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "slot", content = "data", rename_all = "snake_case")]
pub enum DestinationPayload {
    CreateMaintenance(MaintenanceDraft),
    EditMaintenance(MaintenanceId),
    CreateCompliance(ComplianceDraft),
    CreateVehicle(VehicleDraft),
    EditVehicle(VehicleEdit),
    CreateJob(JobDraft),
    EditJob(JobId),
    JobDetails(JobId),
    CreateAsset(AssetDraft),
    LoadAsset(LoadAssetContext),
    CheckInOut(CheckInOutContext),
    ReportIssue(IssueDraft),
}

impl DestinationPayload {
    pub fn slot(&self) -> PayloadSlot {
        match self {
            DestinationPayload::CreateMaintenance(_) => PayloadSlot::CreateMaintenance,
            DestinationPayload::EditMaintenance(_) => PayloadSlot::EditMaintenance,
            DestinationPayload::CreateCompliance(_) => PayloadSlot::CreateCompliance,
            DestinationPayload::CreateVehicle(_) => PayloadSlot::CreateVehicle,
            DestinationPayload::EditVehicle(_) => PayloadSlot::EditVehicle,
            DestinationPayload::CreateJob(_) => PayloadSlot::CreateJob,
            DestinationPayload::EditJob(_) => PayloadSlot::EditJob,
            DestinationPayload::JobDetails(_) => PayloadSlot::JobDetails,
            DestinationPayload::CreateAsset(_) => PayloadSlot::CreateAsset,
            DestinationPayload::LoadAsset(_) => PayloadSlot::LoadAsset,
            DestinationPayload::CheckInOut(_) => PayloadSlot::CheckInOut,
            DestinationPayload::ReportIssue(_) => PayloadSlot::ReportIssue,
        }
    }

    pub fn destination(&self) -> ViewId {
        self.slot().view()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PayloadSlots {
    slots: BTreeMap<PayloadSlot, DestinationPayload>,
}

impl PayloadSlots {
    pub fn store(&mut self, payload: DestinationPayload) {
        self.slots.insert(payload.slot(), payload);
    }

    pub fn clear(&mut self, slot: PayloadSlot) -> Option<DestinationPayload> {
        self.slots.remove(&slot)
    }

    pub fn get(&self, slot: PayloadSlot) -> Option<&DestinationPayload> {
        self.slots.get(&slot)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DestinationPayload> {
        self.slots.values()
    }

    pub fn maintenance_draft(&self) -> Option<&MaintenanceDraft> {
        match self.get(PayloadSlot::CreateMaintenance)? {
            DestinationPayload::CreateMaintenance(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn editing_maintenance_id(&self) -> Option<&MaintenanceId> {
        match self.get(PayloadSlot::EditMaintenance)? {
            DestinationPayload::EditMaintenance(id) => Some(id),
            _ => None,
        }
    }

    pub fn compliance_draft(&self) -> Option<&ComplianceDraft> {
        match self.get(PayloadSlot::CreateCompliance)? {
            DestinationPayload::CreateCompliance(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn vehicle_draft(&self) -> Option<&VehicleDraft> {
        match self.get(PayloadSlot::CreateVehicle)? {
            DestinationPayload::CreateVehicle(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn vehicle_edit(&self) -> Option<&VehicleEdit> {
        match self.get(PayloadSlot::EditVehicle)? {
            DestinationPayload::EditVehicle(edit) => Some(edit),
            _ => None,
        }
    }

    pub fn job_draft(&self) -> Option<&JobDraft> {
        match self.get(PayloadSlot::CreateJob)? {
            DestinationPayload::CreateJob(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn editing_job_id(&self) -> Option<&JobId> {
        match self.get(PayloadSlot::EditJob)? {
            DestinationPayload::EditJob(id) => Some(id),
            _ => None,
        }
    }

    pub fn viewing_job_id(&self) -> Option<&JobId> {
        match self.get(PayloadSlot::JobDetails)? {
            DestinationPayload::JobDetails(id) => Some(id),
            _ => None,
        }
    }

    pub fn asset_draft(&self) -> Option<&AssetDraft> {
        match self.get(PayloadSlot::CreateAsset)? {
            DestinationPayload::CreateAsset(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn load_asset_context(&self) -> Option<&LoadAssetContext> {
        match self.get(PayloadSlot::LoadAsset)? {
            DestinationPayload::LoadAsset(context) => Some(context),
            _ => None,
        }
    }

    pub fn check_in_out(&self) -> Option<&CheckInOutContext> {
        match self.get(PayloadSlot::CheckInOut)? {
            DestinationPayload::CheckInOut(context) => Some(context),
            _ => None,
        }
    }

    pub fn issue_draft(&self) -> Option<&IssueDraft> {
        match self.get(PayloadSlot::ReportIssue)? {
            DestinationPayload::ReportIssue(draft) => Some(draft),
            _ => None,
        }
    }
}
