use std::env;
use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "STOREIT_BACKEND_CONFIG";
const CONFIG_ARG_PREFIX: &str = "--config-file=";

fn not_found(message: String) -> Box<dyn Error> {
    Box::new(io::Error::new(io::ErrorKind::NotFound, message))
}

/// Resolves `path_string` against the working directory and checks that it exists.
pub fn resolve_path(path_string: &str) -> Result<PathBuf, Box<dyn Error>> {
    let path = Path::new(path_string);
    let resolved = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    if !resolved.exists() {
        return Err(not_found(format!("Path does not exist {}", path_string)));
    }
    Ok(resolved)
}

fn resolve_command_line_arg(args: &[String]) -> Result<PathBuf, Box<dyn Error>> {
    let path = args
        .iter()
        .find_map(|arg| arg.strip_prefix(CONFIG_ARG_PREFIX))
        .filter(|path| !path.is_empty())
        .ok_or_else(|| not_found(format!("No \"{}\" argument provided or path is empty", CONFIG_ARG_PREFIX)))?;

    resolve_path(path).map_err(|_| not_found(format!("Invalid path set by \"{}\" argument: {}", CONFIG_ARG_PREFIX, path)))
}

fn resolve_environment_var() -> Result<PathBuf, Box<dyn Error>> {
    let env_path = env::var(CONFIG_ENV_VAR)
        .map_err(|_| not_found(format!("Environment variable {} is not set", CONFIG_ENV_VAR)))?;

    resolve_path(&env_path).map_err(|_| not_found(format!("Invalid path set by {}: {:?}", CONFIG_ENV_VAR, env_path)))
}

pub fn resolve_first_path(paths: &[&str]) -> Result<PathBuf, Box<dyn Error>> {
    paths
        .iter()
        .find_map(|path| resolve_path(path).ok())
        .ok_or_else(|| not_found(format!("No valid path found: {:?}", paths)))
}

/// Command line argument first, then the environment variable, then the fallbacks.
pub fn resolve_config_file_path(cmd_args: &[String], fallback_paths: &[&str]) -> Result<PathBuf, Box<dyn Error>> {
    resolve_command_line_arg(cmd_args)
        .or_else(|_| resolve_environment_var())
        .or_else(|_| resolve_first_path(fallback_paths))
}
