/// Database settings, connection management and schema creation
pub mod database;

/// Optional seed graph loaded from a TOML file
pub mod seed_file;
