// Project Writer
// Saves a whole project as one XML document built from its members

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::constants::MAX_INDENT;
use crate::core::Project;
use crate::error::SaveError;

/// Options for writing a project
#[derive(Debug, Clone)]
pub struct ProjectWriter {
    /// Indent of `<member>` elements, capped at `MAX_INDENT`; member
    /// content goes 2 deeper
    pub indent: usize,
    /// Stop at the first member that fails instead of skipping it
    pub fail_fast: bool,
}

/// Outcome of a project save
#[derive(Debug, Default)]
pub struct SaveReport {
    /// Number of members written
    pub saved: usize,
    /// Members that could not be written, with the reason. Unnamed
    /// members are always listed here.
    pub skipped: Vec<(String, SaveError)>,
}

impl Default for ProjectWriter {
    fn default() -> Self {
        Self {
            indent: 2,
            fail_fast: true,
        }
    }
}

impl ProjectWriter {
    pub fn new(indent: usize) -> Self {
        Self {
            indent,
            ..Self::default()
        }
    }

    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Write `project` to `writer`
    pub fn write_project<W: Write>(&self, project: &Project, writer: &mut W) -> Result<SaveReport, SaveError> {
        let mut report = SaveReport::default();
        let padding = " ".repeat(self.indent.min(MAX_INDENT));

        writeln!(writer, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>").map_err(SaveError::Write)?;
        writeln!(writer, "<uml-project name=\"{}\">", escape_attribute(&project.base_name()))
            .map_err(SaveError::Write)?;

        for member in project.members() {
            let Some(name) = member.name() else {
                let label = format!("<unnamed {}>", member.kind());
                log::warn!("Skipping member {}: it has no name", label);
                report.skipped.push((
                    label.clone(),
                    SaveError::MissingContent { member: label },
                ));
                continue;
            };

            // Render into a buffer so a failing member leaves no partial element
            let mut body = Vec::new();
            match member.save(&mut body, self.indent.saturating_add(2)) {
                Ok(()) => {}
                Err(e) if !self.fail_fast => {
                    log::warn!("Skipping member {}: {}", name, e);
                    report.skipped.push((name, e));
                    continue;
                }
                Err(e) => return Err(e),
            }

            writeln!(
                writer,
                "{}<member type=\"{}\" name=\"{}\">",
                padding,
                escape_attribute(member.member_type()),
                escape_attribute(&name),
            )
            .map_err(SaveError::Write)?;
            writer.write_all(&body).map_err(SaveError::Write)?;
            writeln!(writer, "{}</member>", padding).map_err(SaveError::Write)?;
            report.saved += 1;
        }

        writeln!(writer, "</uml-project>").map_err(SaveError::Write)?;
        Ok(report)
    }

    /// Write `project` to a file, replacing it
    pub fn save_to_path(&self, project: &Project, path: &Path) -> Result<SaveReport, SaveError> {
        let file = File::create(path).map_err(|source| SaveError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        let report = self.write_project(project, &mut writer)?;
        writer.flush().map_err(SaveError::Write)?;

        log::info!(
            "Saved project {} to {} ({} members)",
            project.base_name(),
            path.display(),
            report.saved
        );
        Ok(report)
    }
}

/// Escape a string for use inside a double-quoted XML attribute
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
