pub mod commands;

pub use commands::Cli;

/// Treats an absent `.env` file as success; parse and I/O errors still surface.
pub fn missing_is_ok<T>(result: dotenvy::Result<T>) -> dotenvy::Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e),
    }
}
