// Project
// A UML project: its base name and the members saved alongside it

use anyhow::Result;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::member::{MemberKind, ProjectMember};
use super::project_config::{ManifestMember, ProjectManifest};
use crate::error::ProjectError;
use crate::operations::MemberScanner;

/// Shared handle to a project's base name.
///
/// Members keep a clone of this instead of owning the project, so renaming
/// the project renames every member's qualified name.
#[derive(Debug, Clone)]
pub struct ProjectInfo {
    base_name: Rc<RefCell<String>>,
}

impl ProjectInfo {
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: Rc::new(RefCell::new(base_name.into())),
        }
    }

    pub fn base_name(&self) -> String {
        self.base_name.borrow().clone()
    }

    pub fn set_base_name(&self, base_name: impl Into<String>) {
        *self.base_name.borrow_mut() = base_name.into();
    }

    /// Whether two handles refer to the same project
    pub fn same_project(&self, other: &ProjectInfo) -> bool {
        Rc::ptr_eq(&self.base_name, &other.base_name)
    }
}

/// A project and its members
#[derive(Debug)]
pub struct Project {
    info: ProjectInfo,

    /// Directory member sources are resolved against
    root: PathBuf,

    members: Vec<ProjectMember>,
}

impl Project {
    /// Create an empty project
    pub fn new(base_name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            info: ProjectInfo::new(base_name),
            root: root.into(),
            members: Vec::new(),
        }
    }

    /// Create an empty project named after a project file.
    ///
    /// The base name is the file name without its extension; the root is
    /// the file's directory.
    pub fn from_path(path: &Path) -> Self {
        let base_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::new(base_name, root)
    }

    /// Build a project from its manifest.
    ///
    /// Listed members come first, in manifest order. When scanning is
    /// enabled, member files found under `root` that are not listed are
    /// appended.
    pub fn from_manifest(manifest: &ProjectManifest, root: &Path, global_excludes: &[String]) -> Result<Self> {
        let mut project = Self::new(manifest.base_name.clone(), root);

        for entry in &manifest.members {
            let source = entry.source.as_ref().map(|s| root.join(s));
            project.add_member(Some(&entry.name), entry.kind.clone(), source)?;
        }

        if manifest.scan {
            let scanner = MemberScanner::new()
                .with_excludes(global_excludes.iter().cloned())
                .with_excludes(manifest.exclude.iter().cloned());

            for found in scanner.scan(root)? {
                if project.has_source(&found.path) {
                    continue;
                }
                match project.add_member(Some(&found.file_name), found.kind, Some(found.path)) {
                    Ok(_) => {}
                    Err(ProjectError::DuplicateMember(name)) => {
                        log::warn!("Skipping discovered file for {}: member already listed", name);
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }

        log::info!("Loaded project {} with {} members", project.base_name(), project.members.len());
        Ok(project)
    }

    /// Describe this project as a manifest, with sources relative to the root
    pub fn to_manifest(&self) -> ProjectManifest {
        let members = self
            .members
            .iter()
            .filter_map(|member| {
                Some(ManifestMember {
                    name: member.name()?,
                    kind: member.kind().clone(),
                    source: member.source().map(|s| {
                        s.strip_prefix(&self.root).unwrap_or(s).to_path_buf()
                    }),
                })
            })
            .collect();

        ProjectManifest {
            base_name: self.base_name(),
            members,
            ..ProjectManifest::default()
        }
    }

    pub fn info(&self) -> &ProjectInfo {
        &self.info
    }

    pub fn base_name(&self) -> String {
        self.info.base_name()
    }

    pub fn set_base_name(&self, base_name: impl Into<String>) {
        self.info.set_base_name(base_name);
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn members(&self) -> impl Iterator<Item = &ProjectMember> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Add a member; its name is normalized against this project
    pub fn add_member(
        &mut self,
        name: Option<&str>,
        kind: MemberKind,
        source: Option<PathBuf>,
    ) -> Result<&ProjectMember, ProjectError> {
        let mut member = ProjectMember::new(name, self.info.clone(), kind);
        if let Some(source) = source {
            member = member.with_source(source);
        }

        if let Some(plain) = member.plain_name() {
            if self.find_member_by_name(&plain).is_some() {
                return Err(ProjectError::DuplicateMember(plain));
            }
        }

        self.members.push(member);
        Ok(&self.members[self.members.len() - 1])
    }

    /// Find a member by its plain name (no project prefix, extension included)
    pub fn find_member_by_name(&self, plain_name: &str) -> Option<&ProjectMember> {
        self.members
            .iter()
            .find(|m| m.plain_name().as_deref() == Some(plain_name))
    }

    /// Rename a member, keeping plain names unique
    pub fn rename_member(&mut self, plain_name: &str, new_name: &str) -> Result<&ProjectMember, ProjectError> {
        let index = self.position(plain_name)?;

        let mut renamed = self.members[index].clone();
        renamed.set_name(Some(new_name));
        if let Some(plain) = renamed.plain_name() {
            let clash = self
                .members
                .iter()
                .enumerate()
                .any(|(i, m)| i != index && m.plain_name().as_deref() == Some(plain.as_str()));
            if clash {
                return Err(ProjectError::DuplicateMember(plain));
            }
        }

        self.members[index] = renamed;
        Ok(&self.members[index])
    }

    /// Detach a member from the project and return it in its removed state
    pub fn remove_member(&mut self, plain_name: &str) -> Result<ProjectMember, ProjectError> {
        let index = self.position(plain_name)?;
        let mut member = self.members.remove(index);
        member.remove();
        Ok(member)
    }

    fn position(&self, plain_name: &str) -> Result<usize, ProjectError> {
        self.members
            .iter()
            .position(|m| m.plain_name().as_deref() == Some(plain_name))
            .ok_or_else(|| ProjectError::UnknownMember(plain_name.to_string()))
    }

    fn has_source(&self, path: &Path) -> bool {
        self.members.iter().any(|m| m.source() == Some(path))
    }
}
