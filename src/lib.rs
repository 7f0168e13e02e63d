//! Workforce Scheduling & Payroll Computation Engine
//!
//! This crate manages rostering for branch-based retail and restaurant teams:
//! it admits roster assignments under capacity and uniqueness constraints,
//! converts raw attendance punches into work-hour totals (including
//! overnight-shift arithmetic), and computes per-staff payroll with a small
//! type-dispatched salary model (hourly / fixed-monthly).

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
