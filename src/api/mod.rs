//! Session glue between location collaborators and the arbiter
//!
//! A [`TrackingSession`] owns one [`PositionArbiter`](crate::arbiter::PositionArbiter)
//! for the lifetime of a tracking session. Raw location and status events go
//! in; rescan requests, resubscription requests, persistence and
//! announcements come out through a [`FixConsumer`].

pub mod session;
pub mod types;

pub use session::TrackingSession;
pub use types::{Announcement, FixConsumer, ProviderStatus, RawFixListener, SatelliteEvent};
