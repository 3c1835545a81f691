//! Camp Personnel - officers and recruits
//!
//! A [`Person`] is either an [`Officer`] or a [`Recruit`]. Both share a
//! [`ServiceRecord`] (identity, rank, unit, clearance and performance
//! history) reached through the [`Personnel`] trait. Every write to a
//! sensitive field, and every read of an audit trail, is authorized through
//! `camp_access` against an explicit caller before anything else happens.
//!
//! Reads of internal collections always hand back an owned copy.

#![deny(unsafe_code)]

pub mod officer;
pub mod person;
pub mod record;
pub mod recruit;

pub use officer::{Officer, REDACTED};
pub use person::Person;
pub use record::{DisciplinaryAction, PerformanceRecord, Personnel, ServiceRecord};
pub use recruit::{Recruit, APTITUDE_KEYS};
