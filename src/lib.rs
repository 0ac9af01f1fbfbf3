//! Compensation Simulation Engine for the Brazilian CLT
//!
//! This crate computes employment compensation outcomes under the Brazilian
//! CLT regime: net monthly pay, vacation pay, 13th-salary installments,
//! severance settlements, payroll-deducted (consigned) loan amortization,
//! contractor (PJ) comparisons and standalone income-tax simulations.
//! Every calculator is a pure function of its inputs plus an immutable
//! tax-year configuration loaded from YAML.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
