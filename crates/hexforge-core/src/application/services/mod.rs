//! Application services - orchestrate use cases.
//!
//! Services coordinate the resolver and ports to accomplish high-level use
//! cases like "generate a CRUD resource" or "run the seeders".

pub mod generate_service;
pub mod seed_service;

pub use generate_service::{
    CrudRequest, FactoryRequest, FileOutcome, GenerateService, GeneratedFile, GenerationReport,
    SeederRequest, stubs,
};
pub use seed_service::{SeedPlan, SeedService};
