//! What the services need from the outside, as traits.
//!
//! | Port               | Used for                        |
//! |--------------------|---------------------------------|
//! | `FileWriter`       | create-if-absent file emission  |
//! | `StubStore`        | stub text by `group/name`       |
//! | `StubRenderer`     | `{{TOKEN}}` substitution        |
//! | `BuildToolLocator` | Maven or Gradle detection       |
//!
//! `hexforge-adapters` ships the real implementations.

pub mod output;

pub use output::{BuildToolLocator, FileWriter, StubRenderer, StubStore};

#[cfg(test)]
pub use output::{MockBuildToolLocator, MockFileWriter, MockStubRenderer, MockStubStore};
