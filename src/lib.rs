//! Attendance Status Classification and Monthly Aggregation Engine
//!
//! This crate turns raw check-in/check-out events, approved-leave intervals, and
//! four independently maintained holiday sources into one authoritative status
//! code per employee per calendar day, then rolls daily statuses into
//! payroll-relevant monthly totals (present days, absences, half-days,
//! comp-offs, overtime, payable days).

#![warn(missing_docs)]

pub mod api;
pub mod classification;
pub mod config;
pub mod error;
pub mod models;
