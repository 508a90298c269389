//! Test fixtures and constants.

/// A configuration that names nothing, so no AWS client is built.
pub const EMPTY_CONFIG: &str = "";

/// Same, in YAML.
pub const EMPTY_YAML_CONFIG: &str = "rename: []\n";

/// A configuration whose only prefix expands to nothing.
pub const UNSET_PREFIX_CONFIG: &str = r#"prefix = ["$SESAME_TEST_UNSET_VARIABLE"]"#;

/// Not TOML at all.
pub const MALFORMED_CONFIG: &str = "prefix = [\"/app/\"\nsecrets = ";

/// A typo'd key.
pub const UNKNOWN_KEY_CONFIG: &str = r#"prefixes = ["/app/"]"#;
