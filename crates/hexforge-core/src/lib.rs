//! Hexforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the hexforge
//! Spring source generator: configurable package patterns, the path resolver
//! that turns semantic keys into Java packages, placeholder batches for stubs,
//! and the generators built on top of them.
//!
//! ## Layers
//!
//! ```text
//!   hexforge-cli        parses arguments, picks adapters, prints reports
//!        |
//!        v
//!   application         GenerateService, SeedService
//!        |   \
//!        |    ports     StubStore, StubRenderer, FileWriter, BuildToolLocator
//!        |      ^
//!        |      +------ hexforge-adapters implements them
//!        v
//!   domain              PatternTable, PathResolver, PlaceholderBatch (no I/O)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use hexforge_core::prelude::*;
//!
//! let resolver = PathResolver::new("com.example.app", PatternTable::new(), PatternTable::new());
//! assert_eq!(resolver.resolve("command", "order"), "com.example.app.domain.order.command");
//! assert_eq!(resolver.resolve_crud("controller", "user"), "com.example.app.user.web");
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// The types most callers need, in one import.
pub mod prelude {
    pub use crate::application::{
        CrudRequest, FactoryRequest, FileOutcome, GenerateService, GeneratedFile,
        GenerationReport, SeedPlan, SeedService, SeederRequest,
        ports::{BuildToolLocator, FileWriter, StubRenderer, StubStore},
    };
    pub use crate::domain::{
        BuildTool, PathConfig, PathMode, PathResolver, PatternSource, PatternTable,
        PlaceholderBatch, Resolution, SeedTarget, tokens,
    };
    pub use crate::error::{HexforgeError, HexforgeResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
