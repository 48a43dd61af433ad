pub const SCHEMA_VERSION: i32 = 1;

/// Initial schema: a schema version marker and a key-value store. The
/// profile blob lives under a single key; `clear` drops every key.
pub const SCHEMA_V1: &str = "
CREATE TABLE schema_version (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    version INTEGER NOT NULL
);

CREATE TABLE store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
";
