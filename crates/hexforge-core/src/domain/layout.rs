//! Where a generated class lands on disk.
//!
//! `com.example.app.domain.order.model` + `Order` under `./out` becomes
//! `./out/src/main/java/com/example/app/domain/order/model/Order.java`.

use std::path::{Path, PathBuf};

/// Maven/Gradle main source root, relative to the project directory.
pub const JAVA_SOURCE_ROOT: &str = "src/main/java";

pub const JAVA_EXTENSION: &str = "java";

/// Directory for `package`, relative to the source root.
pub fn package_dir(package: &str) -> PathBuf {
    package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Full path of `class_name` in `package` under `output_dir`.
pub fn class_file(output_dir: &Path, package: &str, class_name: &str) -> PathBuf {
    output_dir
        .join(JAVA_SOURCE_ROOT)
        .join(package_dir(package))
        .join(format!("{class_name}.{JAVA_EXTENSION}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_becomes_directories() {
        assert_eq!(
            package_dir("com.example.app"),
            PathBuf::from("com").join("example").join("app")
        );
    }

    #[test]
    fn class_file_under_source_root() {
        let path = class_file(Path::new("out"), "com.app.user.web", "UserController");
        assert_eq!(
            path,
            Path::new("out/src/main/java/com/app/user/web/UserController.java")
        );
    }
}
