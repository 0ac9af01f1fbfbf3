//! Core data models for the compensation engine.
//!
//! This module contains the input and result records used throughout the
//! engine. Inputs and results are plain, fully-owned, serializable data;
//! no entity holds a reference back to its inputs.

mod inputs;
mod results;

pub use inputs::{
    ContractorInput, ExtraHours, IncomeTaxInput, LoanInput, MonthlySalaryInput, NoticeStatus,
    SeveranceInput, TerminationReason, ThirteenthInput, TransportInput, VacationInput,
};
pub use results::{
    ContractorResult, DeductionPath, ExtrasBreakdown, IncomeTaxSimulation, LoanAllocation,
    MonthlySalaryResult, ScenarioKind, SeveranceResult, ThirteenthResult, VacationResult,
};
