//! # Menu
//!
//! The menu is an external collaborator at the edge of the coordination
//! core: a file-backed list of dish records, parsed exactly once at
//! startup into an immutable snapshot. After loading, the `Arc<Menu>` is
//! shared read-only with every behavior that needs it - write-once,
//! read-many, no lock.

use serde::Deserialize;
use std::path::Path;

/// One dish record from the menu file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dish {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Immutable in-memory snapshot of the dish list.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub dishes: Vec<Dish>,
}

/// Startup menu failures. Fatal: the supervisor never becomes active
/// without a loaded menu.
#[derive(Debug, thiserror::Error)]
pub enum MenuLoadError {
    #[error("failed to read menu file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse menu file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reads and parses the dish list. Called exactly once, from the
/// supervisor startup path.
pub fn load_menu(path: impl AsRef<Path>) -> Result<Menu, MenuLoadError> {
    let data = std::fs::read_to_string(path)?;
    let dishes: Vec<Dish> = serde_json::from_str(&data)?;
    Ok(Menu { dishes })
}
