//! Results posted back to the UI thread by background lookups.

use shared::{
    domain::{GeofenceId, Site, SiteId},
    error::DataError,
};

use crate::{
    action::NavAction,
    state::{GeofenceCreationData, HydrationTicket},
};

#[derive(Debug, Clone)]
pub enum NavEvent {
    GeofenceHydrated {
        ticket: HydrationTicket,
        geofence_id: GeofenceId,
        data: Option<GeofenceCreationData>,
    },
    SiteUpdated(Site),
    SiteUpdateFailed {
        site_id: SiteId,
        error: DataError,
    },
}

impl NavEvent {
    /// The state change this event implies, if any. Failures only get logged.
    pub fn into_action(self) -> Option<NavAction> {
        match self {
            NavEvent::GeofenceHydrated {
                ticket,
                geofence_id,
                data,
            } => Some(NavAction::GeofenceHydrated {
                ticket,
                geofence_id,
                data,
            }),
            NavEvent::SiteUpdated(site) => Some(NavAction::SiteUpdated(site)),
            NavEvent::SiteUpdateFailed { .. } => None,
        }
    }
}
