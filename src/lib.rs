//! Client core for Racooni litter reports
//!
//! Lists the reports known to the catalog service and submits new ones:
//! a photo and the device position are captured, the photo is uploaded to
//! the image store, and the report is registered with the catalog.

pub mod core;
pub mod features;
pub mod modules;
pub mod shared;
