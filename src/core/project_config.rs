// Project Manifest
// Per-project settings listing members and where their content lives

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::member::MemberKind;
use super::project::Project;
use crate::constants::PROJECT_ROOT_ENV;

/// Project manifest, loaded from uml-project.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectManifest {
    /// Base name every member name is qualified with
    pub base_name: String,

    /// Members listed explicitly
    #[serde(default)]
    pub members: Vec<ManifestMember>,

    /// Also pick up member files found under the project root
    #[serde(default)]
    pub scan: bool,

    /// Patterns to exclude while scanning
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

/// A member entry in the manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestMember {
    /// Member name, plain or qualified
    pub name: String,

    #[serde(with = "serde_yaml::with::singleton_map")]
    pub kind: MemberKind,

    /// Content file, relative to the project root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

impl Default for ProjectManifest {
    fn default() -> Self {
        Self {
            base_name: String::new(),
            members: Vec::new(),
            scan: false,
            exclude: Vec::new(),
        }
    }
}

impl ProjectManifest {
    /// Load a manifest from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read project manifest: {}", path.display()))?;

        let manifest: ProjectManifest = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse project manifest YAML: {}", path.display()))?;

        Ok(manifest)
    }

    /// Load the manifest stored in a project directory
    pub fn load_from_dir(project_root: &Path, manifest_name: &str) -> Result<Self> {
        Self::load(&project_root.join(manifest_name))
    }

    /// Save the manifest to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize project manifest")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write project manifest: {}", path.display()))?;

        Ok(())
    }

    /// Rename a member of the project rooted at `root` and return its new
    /// qualified name.
    ///
    /// Scanned members are listed explicitly from now on, so the manifest
    /// keeps naming the renamed file.
    pub fn rename_member(
        &mut self,
        root: &Path,
        global_excludes: &[String],
        plain_name: &str,
        new_name: &str,
    ) -> Result<String> {
        let mut project = Project::from_manifest(self, root, global_excludes)?;
        let renamed = project
            .rename_member(plain_name, new_name)?
            .name()
            .unwrap_or_default();

        self.members = project.to_manifest().members;
        Ok(renamed)
    }
}

/// Find the project root for `start`.
///
/// The environment override wins when it names an existing directory.
/// Otherwise walks up from `start` looking for the manifest, falling back
/// to `start` itself.
pub fn find_project_root(start: &Path, manifest_name: &str) -> PathBuf {
    if let Ok(path) = std::env::var(PROJECT_ROOT_ENV) {
        let path = PathBuf::from(path);
        if path.is_dir() {
            return path;
        }
    }

    start
        .ancestors()
        .find(|dir| dir.join(manifest_name).exists())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| start.to_path_buf())
}
