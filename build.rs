// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const USE_GUILLEMOTS: bool = {use_guillemots};
pub const SHOW_STEREOTYPES: bool = {show_stereotypes};

pub const DEFAULT_INDENT: usize = {indent};
pub const MANIFEST_NAME: &str = "{manifest_name}";

pub const GLOBAL_EXCLUDES: &[&str] = &[
{excludes}
];
"#,
        use_guillemots = config.use_guillemots,
        show_stereotypes = config.show_stereotypes,
        indent = config.indent,
        manifest_name = config.manifest_name,
        excludes = config
            .global_excludes
            .iter()
            .map(|e| format!("    \"{}\",", e))
            .collect::<Vec<_>>()
            .join("\n"),
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    use_guillemots: bool,
    show_stereotypes: bool,
    indent: usize,
    manifest_name: String,
    global_excludes: Vec<String>,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            use_guillemots: false,
            show_stereotypes: true,
            indent: 4,
            manifest_name: "uml-project.yaml".to_string(),
            global_excludes: vec![
                ".git".to_string(),
                "target".to_string(),
                "*~".to_string(),
            ],
        }
    }
}

#[derive(PartialEq)]
enum Section {
    None,
    Notation,
    Persistence,
    Excludes,
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut section = Section::None;

    for line in content.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with("notation:") {
            section = Section::Notation;
            continue;
        } else if trimmed.starts_with("persistence:") {
            section = Section::Persistence;
            continue;
        } else if trimmed.starts_with("global_excludes:") {
            section = Section::Excludes;
            config.global_excludes.clear();
            continue;
        }

        if section == Section::Excludes {
            if let Some(item) = trimmed.strip_prefix("- ") {
                config.global_excludes.push(item.trim().trim_matches('"').to_string());
                continue;
            }
            if !trimmed.is_empty() && !trimmed.starts_with('#') {
                section = Section::None;
            }
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            match section {
                Section::Notation => match key {
                    "use_guillemots" => config.use_guillemots = parse_bool(value),
                    "show_stereotypes" => config.show_stereotypes = parse_bool(value),
                    _ => {}
                },
                Section::Persistence => match key {
                    "indent" => config.indent = value.parse().unwrap_or(4),
                    "manifest_name" => config.manifest_name = value.trim_matches('"').to_string(),
                    _ => {}
                },
                _ => {}
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    // Section header
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}
