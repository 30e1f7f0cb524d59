//! Use cases: generating Spring sources and running the seeders.
//!
//! Services take their collaborators as boxed [`ports`] so the CLI decides
//! which adapters back them. Resolution and naming rules stay in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    CrudRequest, FactoryRequest, FileOutcome, GenerateService, GeneratedFile, GenerationReport,
    SeedPlan, SeedService, SeederRequest, stubs,
};

pub use ports::{BuildToolLocator, FileWriter, StubRenderer, StubStore};

pub use error::ApplicationError;
