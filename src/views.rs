//! View name resolution.
//!
//! Templates live under the configured views root as `<name>.html`. A request
//! handler can point bare template names at a subdirectory of that root by
//! setting a view subdirectory on its `ViewContext`: names without a slash
//! are then resolved inside the subdirectory, while names containing a slash
//! keep addressing the full tree.

use std::path::{Path, PathBuf};

/// Per-request view state. Handlers construct one of these per invocation,
/// so a fresh context always starts with no subdirectory active.
#[derive(Debug, Default, Clone)]
pub struct ViewContext {
    view_subdir: Option<String>,
}

impl ViewContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the view subdirectory to use. Pass `None` to resolve bare names
    /// against the views root again. The value is taken verbatim, with no
    /// normalization or existence check.
    pub fn set_view_subdir(&mut self, subdir: Option<&str>) {
        self.view_subdir = subdir.map(str::to_string);
    }

    pub fn view_subdir(&self) -> Option<&str> {
        self.view_subdir.as_deref()
    }

    /// Resolve a requested template name against the active subdirectory.
    /// A name containing a slash is already fully qualified and passes
    /// through untouched.
    pub fn template_name(&self, requested: &str) -> String {
        match &self.view_subdir {
            Some(subdir) if !requested.contains('/') => format!("{subdir}/{requested}"),
            _ => requested.to_string(),
        }
    }
}

pub fn view_path(dir_views: &Path, template_name: &str) -> PathBuf {
    dir_views.join(format!("{template_name}.html"))
}
