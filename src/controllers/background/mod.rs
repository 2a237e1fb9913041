//! Runs atlas requests on a dedicated worker thread.
//!
//! Callers submit an [`AtlasRequest`](crate::controllers::data::atlas_request::AtlasRequest)
//! and get the result back through an [`AtlasPresenterPort`]. Submitting a
//! newer request cancels the one in flight; only the latest generation is
//! ever presented.

mod controller;
pub mod events;
pub mod ports;

pub use controller::AtlasController;
pub use events::{AtlasEvent, AtlasFailure, AtlasFrame};
pub use ports::presenter::AtlasPresenterPort;
