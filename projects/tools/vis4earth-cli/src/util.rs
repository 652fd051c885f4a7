use crate::error::CliError;
use core::str::FromStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Canonicalizes an output directory argument, creating the directory if missing.
pub fn canonicalize_cli_path(value: &str) -> Result<PathBuf, String> {
    let path = Path::new(value);

    // If path doesn't exist, create it
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| format!("Failed to create directory: {e}"))?;
    }

    fs::canonicalize(path).map_err(|e| format!("Invalid path: {e}"))
}

/// Parses three comma separated values, e.g. `256,256,128`.
///
/// # Arguments
///
/// * `value` - The raw argument
/// * `what` - Name of the argument, used in the error message
fn parse_triplet<T: FromStr>(value: &str, what: &str) -> Result<[T; 3], String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!(
            "Invalid {what}: {value}. Expected three comma separated values"
        ));
    }

    let parse = |part: &str| {
        part.parse::<T>()
            .map_err(|_| format!("Invalid {what}: {value}. '{part}' is not a number"))
    };
    Ok([parse(parts[0])?, parse(parts[1])?, parse(parts[2])?])
}

/// Parses a `X,Y,Z` dimension argument. Positivity is checked by the loader.
pub fn parse_dimension(value: &str) -> Result<[i64; 3], String> {
    parse_triplet(value, "dimension")
}

/// Parses an `a,b,c` axis specification argument, e.g. `2,-1,3`.
pub fn parse_axis(value: &str) -> Result<[i32; 3], String> {
    parse_triplet(value, "axis")
}

/// Reports a failed input without aborting the remaining ones.
pub fn handle_process_entry_error(path: &Path, result: Result<(), CliError>) {
    if let Err(e) = result {
        eprintln!("{}: {e}", path.display());
    }
}
