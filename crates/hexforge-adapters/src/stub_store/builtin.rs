//! Stubs compiled into the binary.
//!
//! The sources live in `crates/hexforge-adapters/stubs/<group>/<name>.stub`
//! and are embedded with `include_str!`.

macro_rules! stub {
    ($name:literal) => {
        (
            $name,
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/stubs/", $name, ".stub")),
        )
    };
}

/// Every built-in stub as `(name, text)`, sorted by name.
pub const BUILTIN_STUBS: &[(&str, &str)] = &[
    stub!("data/factory"),
    stub!("data/repository"),
    stub!("data/seed-runner"),
    stub!("data/seeder"),
    stub!("data/seeder-interface"),
    stub!("mvc/controller"),
    stub!("mvc/controller-resources"),
    stub!("mvc/entity"),
    stub!("mvc/mapper"),
    stub!("mvc/model"),
    stub!("mvc/repository"),
    stub!("mvc/service"),
    stub!("mvc/service-resources"),
];

/// Built-in text for `name`.
pub fn builtin(name: &str) -> Option<&'static str> {
    BUILTIN_STUBS
        .iter()
        .find(|(stub, _)| *stub == name)
        .map(|(_, text)| *text)
}
