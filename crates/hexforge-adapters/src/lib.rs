//! Disk, stub and build-tool adapters behind the `hexforge-core` ports.

pub mod build_tool;
pub mod filesystem;
pub mod project_config;
pub mod renderer;
pub mod stub_store;

pub use build_tool::FsBuildToolLocator;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use project_config::{PROJECT_CONFIG_FILE, ProjectConfigLoader};
pub use renderer::SimpleRenderer;
pub use stub_store::{DirectoryStubStore, InMemoryStubStore, LayeredStubStore};
