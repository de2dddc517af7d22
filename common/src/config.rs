use serde::de::DeserializeOwned;

/// Environment variables prefixed with this override file values.
pub const ENV_PREFIX: &str = "CHIRP";

/// Loads a config struct from an optional TOML file layered under
/// `CHIRP_`-prefixed environment variables.
///
/// An empty `config_file` skips the file source entirely; a missing file
/// is not an error so services can run on defaults and environment
/// alone.
pub fn parse<T: DeserializeOwned>(config_file: &str) -> Result<T, ::config::ConfigError> {
    let mut builder = ::config::Config::builder();

    if !config_file.is_empty() {
        builder = builder.add_source(::config::File::with_name(config_file).required(false));
    }

    builder
        .add_source(::config::Environment::with_prefix(ENV_PREFIX))
        .build()?
        .try_deserialize()
}
