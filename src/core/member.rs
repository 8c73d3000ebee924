// Project Members
// Named parts of a project (model, diagrams, to-do list) and their persistence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::project::ProjectInfo;
use crate::error::SaveError;
use crate::operations::add_xml_file_to_writer;
use crate::utilities::naming;

/// The kind of a project member.
///
/// Each kind owns the type tag and file extension used both when
/// normalizing names and when reading them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    /// The UML model, stored as XMI
    Model,
    /// A diagram layout, stored as PGML
    Diagram,
    /// The project's to-do list
    TodoList,
    /// Any other member type
    Custom { type_name: String, extension: String },
}

impl MemberKind {
    /// Kinds with a fixed type tag
    pub const BUILTIN: [MemberKind; 3] = [MemberKind::Model, MemberKind::Diagram, MemberKind::TodoList];

    /// Short string naming the member type, usually the extension without the dot
    pub fn member_type(&self) -> &str {
        match self {
            MemberKind::Model => "xmi",
            MemberKind::Diagram => "pgml",
            MemberKind::TodoList => "todo",
            MemberKind::Custom { type_name, .. } => type_name,
        }
    }

    /// File extension including the leading dot
    pub fn file_extension(&self) -> &str {
        match self {
            MemberKind::Model => ".xmi",
            MemberKind::Diagram => ".pgml",
            MemberKind::TodoList => ".todo",
            MemberKind::Custom { extension, .. } => extension,
        }
    }

    /// Resolve a built-in kind from its type tag
    pub fn from_type(member_type: &str) -> Option<Self> {
        Self::BUILTIN.into_iter().find(|k| k.member_type() == member_type)
    }

    /// Resolve a built-in kind from a file path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        Self::BUILTIN
            .into_iter()
            .find(|k| file_name.ends_with(k.file_extension()))
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.member_type())
    }
}

/// A member of a project.
///
/// The stored name is always the plain part: neither the project's base
/// name nor the kind's extension. Both are added back on read.
#[derive(Debug, Clone)]
pub struct ProjectMember {
    name: Option<String>,
    project: Option<ProjectInfo>,
    kind: MemberKind,
    source: Option<PathBuf>,
}

impl ProjectMember {
    /// Create a member bound to `project` and normalize `name` against it
    pub fn new(name: Option<&str>, project: ProjectInfo, kind: MemberKind) -> Self {
        let mut member = Self {
            name: None,
            project: Some(project),
            kind,
            source: None,
        };
        member.set_name(name);
        member
    }

    /// Attach the file holding this member's XML content
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Store the plain part of `name`.
    ///
    /// Strips a leading project base name (with the underscores after it)
    /// and one trailing file extension.
    pub fn set_name(&mut self, name: Option<&str>) {
        let plain = name.map(|raw| {
            let raw = match &self.project {
                Some(project) => naming::strip_project_prefix(raw, &project.base_name()).to_string(),
                None => raw.to_string(),
            };
            naming::strip_extension(&raw, self.file_extension()).to_string()
        });
        self.name = plain;
    }

    /// The member's name without the project prefix, extension included.
    ///
    /// This is the name members are looked up by within a project.
    pub fn plain_name(&self) -> Option<String> {
        self.name
            .as_deref()
            .map(|name| naming::with_extension(name, self.file_extension()))
    }

    /// The member's name qualified with the project's base name
    pub fn name(&self) -> Option<String> {
        let name = self.name.as_deref()?;
        let project = self.project.as_ref()?;
        Some(naming::qualify(&project.base_name(), name, self.file_extension()))
    }

    /// The owning project, until the member is removed
    pub fn project(&self) -> Option<&ProjectInfo> {
        self.project.as_ref()
    }

    pub fn kind(&self) -> &MemberKind {
        &self.kind
    }

    pub fn member_type(&self) -> &str {
        self.kind.member_type()
    }

    pub fn file_extension(&self) -> &str {
        self.kind.file_extension()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Whether the member is still attached to a project
    pub fn is_removed(&self) -> bool {
        self.project.is_none()
    }

    /// Detach the member from its project. Getters return `None` afterwards.
    pub fn remove(&mut self) {
        self.name = None;
        self.project = None;
    }

    /// Write the member's XML content to `writer`, indented by `indent`
    pub fn save<W: Write>(&self, writer: &mut W, indent: usize) -> Result<(), SaveError> {
        let missing = || SaveError::MissingContent {
            member: self.name().unwrap_or_else(|| format!("<removed {}>", self.kind)),
        };

        if self.is_removed() {
            return Err(missing());
        }
        let source = self.source.as_deref().ok_or_else(missing)?;

        log::debug!("Saving member {} from {}", self.name().unwrap_or_default(), source.display());
        add_xml_file_to_writer(writer, source, indent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uml_kind() -> MemberKind {
        MemberKind::Custom {
            type_name: "uml".to_string(),
            extension: ".uml".to_string(),
        }
    }

    fn member(name: &str) -> ProjectMember {
        ProjectMember::new(Some(name), ProjectInfo::new("MyProj"), uml_kind())
    }

    #[test]
    fn test_plain_and_qualified_names() {
        let member = member("diagram");

        assert_eq!(member.plain_name().as_deref(), Some("diagram.uml"));
        assert_eq!(member.name().as_deref(), Some("MyProj_diagram.uml"));
    }

    #[test]
    fn test_qualified_input_is_normalized() {
        let member = member("MyProj_foo.uml");

        assert_eq!(member.plain_name().as_deref(), Some("foo.uml"));
        assert_eq!(member.name().as_deref(), Some("MyProj_foo.uml"));
    }

    #[test]
    fn test_extension_appended_exactly_once() {
        for name in ["a", "class diagram", "x.y", "under_score"] {
            let member = member(name);
            assert_eq!(member.plain_name(), Some(format!("{}.uml", name)));

            let qualified = member.name().unwrap();
            assert!(qualified.starts_with("MyProj_"));
            assert!(qualified.ends_with(".uml"));
            assert!(!qualified.ends_with(".uml.uml"));
        }
    }

    #[test]
    fn test_empty_name_still_qualified() {
        let member = member("");

        assert_eq!(member.plain_name().as_deref(), Some(".uml"));
        assert_eq!(member.name().as_deref(), Some("MyProj.uml"));
    }

    #[test]
    fn test_none_name() {
        let member = ProjectMember::new(None, ProjectInfo::new("MyProj"), MemberKind::Model);

        assert_eq!(member.plain_name(), None);
        assert_eq!(member.name(), None);
    }

    #[test]
    fn test_remove_clears_everything() {
        let mut member = member("diagram");
        member.remove();

        assert!(member.is_removed());
        assert!(member.project().is_none());
        assert_eq!(member.plain_name(), None);
        assert_eq!(member.name(), None);
    }

    #[test]
    fn test_name_follows_base_name_changes() {
        let info = ProjectInfo::new("Old");
        let member = ProjectMember::new(Some("Old_model"), info.clone(), MemberKind::Model);

        info.set_base_name("New");

        assert_eq!(member.plain_name().as_deref(), Some("model.xmi"));
        assert_eq!(member.name().as_deref(), Some("New_model.xmi"));
    }

    #[test]
    fn test_builtin_kinds() {
        assert_eq!(MemberKind::from_type("pgml"), Some(MemberKind::Diagram));
        assert_eq!(MemberKind::from_type("uml"), None);
        assert_eq!(
            MemberKind::from_path(Path::new("diagrams/P_class.pgml")),
            Some(MemberKind::Diagram)
        );
        assert_eq!(MemberKind::from_path(Path::new("notes.txt")), None);
        assert_eq!(MemberKind::TodoList.to_string(), "todo");
    }

    #[test]
    fn test_save_without_source_fails() {
        let member = member("diagram");
        let mut out = Vec::new();

        let err = member.save(&mut out, 0).unwrap_err();
        assert!(matches!(err, SaveError::MissingContent { ref member } if member == "MyProj_diagram.uml"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_save_includes_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("class.pgml");
        std::fs::write(&path, "<?xml version=\"1.0\"?>\n<pgml/>\n").unwrap();

        let member = ProjectMember::new(Some("class"), ProjectInfo::new("P"), MemberKind::Diagram)
            .with_source(&path);
        let mut out = Vec::new();
        member.save(&mut out, 2).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "  <pgml/>\n");
    }
}
