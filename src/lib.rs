//! sitequal - site-quality observing conditions
//!
//! Percentile bands for cloud cover, image quality, sky background and water
//! vapor, the immutable [`Conditions`] value combining them, and the
//! [`SiteQuality`] component that carries conditions together with elevation
//! constraints and timing windows.

pub mod band;
pub mod conditions;
pub mod config;
pub mod elevation;
pub mod lifecycle;
pub mod site_quality;
pub mod timing;

pub use band::{CloudCover, Dimension, ImageQuality, SiteQualityBand, SkyBackground, WaterVapor};
pub use conditions::Conditions;
pub use config::SiteQualityConfig;
pub use elevation::ElevationConstraintType;
pub use site_quality::{Property, PropertyChange, SiteQuality};
pub use timing::TimingWindow;
