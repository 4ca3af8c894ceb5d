use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseViewIdError;

macro_rules! view_ids {
    ($($variant:ident => $tag:literal,)+) => {
        /// One screen of the dashboard. The kebab-case tag is the wire and
        /// script form.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum ViewId {
            #[default]
            $($variant,)+
        }

        impl ViewId {
            pub const ALL: &'static [ViewId] = &[$(ViewId::$variant,)+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(ViewId::$variant => $tag,)+
                }
            }
        }
    };
}

view_ids! {
    Dashboard => "dashboard",
    Map => "map",
    Inventory => "inventory",
    AssetDetails => "asset-details",
    Sites => "sites",
    SiteDetails => "site-details",
    Alerts => "alerts",
    AlertConfiguration => "alert-configuration",
    AlertWorkflow => "alert-workflow",
    Geofences => "geofences",
    CreateGeofence => "create-geofence",
    Jobs => "jobs",
    CreateJob => "create-job",
    EditJob => "edit-job",
    JobDetails => "job-details",
    Maintenance => "maintenance",
    CreateMaintenance => "create-maintenance",
    EditMaintenance => "edit-maintenance",
    Compliance => "compliance",
    CreateCompliance => "create-compliance",
    Vehicles => "vehicles",
    CreateVehicle => "create-vehicle",
    EditVehicle => "edit-vehicle",
    CreateAsset => "create-asset",
    LoadAsset => "load-asset",
    CheckInOut => "check-in-out",
    Issues => "issues",
    ReportIssue => "report-issue",
    HistoricalPlayback => "historical-playback",
    Reports => "reports",
    Settings => "settings",
    NotificationPreferences => "notification-preferences",
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = ParseViewIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ViewId::ALL
            .iter()
            .copied()
            .find(|view| view.as_str() == trimmed)
            .ok_or_else(|| ParseViewIdError(trimmed.to_string()))
    }
}
