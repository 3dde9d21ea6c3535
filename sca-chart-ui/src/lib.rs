//! Shared Dioxus components and dashboard state for SCA chart apps.
//!
//! This crate provides:
//! - `state`: the dashboard state bundle (signals owned by the controller)
//! - `observed`: the observed-container-size primitive shared by charts
//! - `scale`: pure drawing math (scales, arc paths, color ramps)
//! - `components`: reusable RSX components (charts, slider, overlays)

pub mod components;
pub mod observed;
pub mod scale;
pub mod state;
