//! Application Configuration

use std::path::PathBuf;

/// Curriculum configuration
#[derive(Debug, Clone)]
pub struct CurriculumConfig {
    /// Directory holding `Module_<id>.json` files
    pub modules_dir: PathBuf,
}

impl Default for CurriculumConfig {
    fn default() -> Self {
        Self {
            modules_dir: PathBuf::from("modules"),
        }
    }
}
