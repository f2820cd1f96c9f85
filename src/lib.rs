//! Handover detection and measurement-stream alignment for LTE simulator
//! traces.
//!
//! Files are parsed into positional rows ([`datasource`]), projected into
//! named series ([`series`]), scanned for serving-cell changes
//! ([`signal`]), overlaid and aggregated ([`analysis`]), and bundled into
//! plot-ready products ([`session`]).
pub mod analysis;
pub mod config;
pub mod datasource;
pub mod overrides;
pub mod series;
pub mod session;
pub mod signal;
