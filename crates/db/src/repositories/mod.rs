//! Repository abstractions for data access.
//!
//! Repositories hide the `SeaORM` details from the HTTP layer and translate
//! storage failures into domain errors.

pub mod client;
pub mod mortgage;

pub use client::{ClientError, ClientRepository, CreateClientInput, UpdateClientInput};
pub use mortgage::{CreateMortgageInput, MortgageError, MortgageRepository};
