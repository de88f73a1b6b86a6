// Constants shared across the crate

/// Application name used for platform config and data directories.
pub const APP_NAME: &str = "semsearch";
/// File name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable that overrides the configuration file location.
pub const CONFIG_PATH_ENV: &str = "SEMSEARCH_CONFIG_PATH";
/// Directory under the data dir holding one sub-directory per index.
pub const INDEXES_DIR_NAME: &str = "indexes";

/// File holding the serialized vector index inside an index directory.
pub const INDEX_FILE_NAME: &str = "index.json";
/// File holding the metadata sidecar inside an index directory.
pub const METADATA_FILE_NAME: &str = "metadata.json";

/// Number of results returned when the caller does not ask for a specific count.
pub const DEFAULT_TOP_K: usize = 5;

/// Sentinel id a vector index returns for an empty neighbor slot.
pub const SENTINEL_ID: i64 = -1;
