//! View-stack navigation for the asset-tracking dashboard.
//!
//! All transitions go through [`reducer::reduce`]; [`NavigationController`]
//! wraps it for the UI thread and runs the lookups it asks for.

pub mod action;
pub mod controller;
pub mod events;
pub mod payload;
pub mod reducer;
pub mod snapshot;
pub mod state;

pub use action::{Effect, NavAction};
pub use controller::NavigationController;
pub use events::NavEvent;
pub use payload::{DestinationPayload, PayloadSlot, PayloadSlots};
pub use snapshot::{NavigationSnapshot, NavigationStack};
pub use state::{
    AlertFilter, GeofenceCreationData, HydrationTicket, MapEmphasis, NavigationState, SiteTab,
    StateSummary,
};
