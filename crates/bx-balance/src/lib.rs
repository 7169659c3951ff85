//! bx-balance: solids mass-balance solver for fruit-pulp sugar addition.
//!
//! Answers one question: how much sucrose must be added to a batch of
//! pulp to raise its soluble-solids concentration (°Brix) to a target
//! value. The solve is a closed-form rearrangement of the solids balance
//! `M1*C1 + A = (M1 + A)*C2`; everything else here is input validation
//! and the algebra record display layers use to show the working.

pub mod balance;
pub mod derivation;
pub mod error;

pub use balance::{SolveRequest, SolveResult, solve};
pub use derivation::Derivation;
pub use error::{BalanceResult, ValidationError};
