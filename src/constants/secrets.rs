//! Docker secret loading, used as a fallback for credentials that are not
//! passed directly through the environment.
use std::{env::var, fs::read_to_string, io, path::Path};

const DOCKER_SECRETS_PATH: &str = "/run/secrets/";

/// Read a docker secret by name from the secrets mount.
pub fn read_secret(name: &str) -> Result<String, io::Error> {
    let secret_val = read_to_string(Path::new(DOCKER_SECRETS_PATH).join(name.to_lowercase()))?;
    Ok(secret_val.trim().to_owned())
}

/// Look up `key` in the environment, falling back to the docker secret named
/// by `<key>_DOCKER_SECRET`. Returns `None` when neither is provided.
pub fn var_or_secret(key: &str) -> Option<String> {
    if let Ok(value) = var(key) {
        return Some(value);
    }
    let secret_name = var(format!("{key}_DOCKER_SECRET")).ok()?;
    match read_secret(&secret_name) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!("Failed to read {key} docker secret {secret_name}: {err}");
            None
        }
    }
}
