// Theme loading - VS Code color theme files
//
// A theme is the declarative JSON mapping VS Code consumes: a `colors`
// table of workbench keys plus `tokenColors` rules for syntax scopes.
// We audit it, we don't interpret it beyond that.
//
// Resolution order for `huelint check NAME`:
// 1. NAME as a filesystem path
// 2. External themes from ~/.config/huelint/themes/*.json
// 3. Bundled themes (compiled into the binary, extracted on first run)
//
// Theme files are JSONC in practice - VS Code tolerates comments and
// trailing commas, so the loader strips them before handing the text
// to serde_json.

pub mod bundled;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A parsed VS Code color theme
#[derive(Debug, Clone, Deserialize)]
pub struct Theme {
    /// Display name; falls back to the filename stem when absent
    #[serde(default)]
    pub name: Option<String>,

    /// "dark", "light", or "hc" - informational only
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// Workbench color keys: "editor.background" -> "#1a0d26"
    #[serde(default)]
    pub colors: HashMap<String, String>,

    /// Syntax highlighting rules
    #[serde(rename = "tokenColors", default)]
    pub token_colors: Vec<TokenColor>,
}

/// One tokenColors entry
#[derive(Debug, Clone, Deserialize)]
pub struct TokenColor {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub scope: Option<Scope>,

    pub settings: TokenSettings,
}

/// TextMate scope selector: a single string or a list of them
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Scope {
    Single(String),
    Many(Vec<String>),
}

/// Style settings for one token rule
#[derive(Debug, Clone, Deserialize)]
pub struct TokenSettings {
    #[serde(default)]
    pub foreground: Option<String>,

    #[serde(rename = "fontStyle", default)]
    pub font_style: Option<String>,
}

impl TokenColor {
    /// Label for report rows: the rule's name, else its first scope
    pub fn label(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        match &self.scope {
            Some(Scope::Single(s)) => s.clone(),
            Some(Scope::Many(list)) => list.first().cloned().unwrap_or_default(),
            None => "(global)".to_string(),
        }
    }
}

impl Theme {
    /// Display name, with a fallback for anonymous theme files
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed theme)")
    }

    /// Parse theme JSON, tolerating JSONC comments and trailing commas
    pub fn from_json(content: &str) -> Result<Self> {
        let stripped = strip_jsonc(content);
        serde_json::from_str(&stripped).context("failed to parse theme JSON")
    }

    /// Load a theme from a file on disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read theme file {}", path.display()))?;
        let mut theme = Self::from_json(&content)
            .with_context(|| format!("in theme file {}", path.display()))?;
        if theme.name.is_none() {
            theme.name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().replace('_', " "));
        }
        Ok(theme)
    }

    /// Resolve a theme by path or name (external dir first, then bundled)
    pub fn resolve(input: &str) -> Result<Self> {
        let as_path = Path::new(input);
        if as_path.exists() {
            return Self::from_path(as_path);
        }

        // External themes from the config dir
        if let Some(dir) = themes_dir() {
            let candidates = [
                dir.join(format!("{}.json", input)),
                dir.join(format!("{}.json", input.replace(' ', "_"))),
            ];
            for candidate in candidates {
                if candidate.exists() {
                    return Self::from_path(&candidate);
                }
            }
        }

        // Bundled themes (compiled into the binary)
        let filename = format!("{}.json", input.replace(' ', "_"));
        for theme in bundled::BUNDLED_THEMES {
            if theme.filename.eq_ignore_ascii_case(&filename) {
                return Self::from_json(theme.content);
            }
        }

        bail!(
            "theme {:?} not found (not a file, not in {}, not bundled)",
            input,
            themes_dir()
                .map(|d| d.display().to_string())
                .unwrap_or_else(|| "the themes directory".to_string())
        );
    }

    /// Look up a workbench color key
    pub fn color(&self, key: &str) -> Option<&str> {
        self.colors.get(key).map(String::as_str)
    }
}

/// Themes directory: ~/.config/huelint/themes
/// Uses Unix-style ~/.config on all platforms for consistency
pub fn themes_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("huelint").join("themes"))
}

/// List all available themes (bundled + external)
pub fn list_available() -> Vec<String> {
    let mut themes: Vec<String> = bundled::list_bundled_themes()
        .iter()
        .map(|name| name.to_string())
        .collect();

    if let Some(dir) = themes_dir() {
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "json") {
                    if let Some(stem) = path.file_stem() {
                        let display_name = stem.to_string_lossy().replace('_', " ");
                        if !themes.iter().any(|t| t.eq_ignore_ascii_case(&display_name)) {
                            themes.push(display_name);
                        }
                    }
                }
            }
        }
    }

    themes
}

/// Ensure the themes directory exists and extract bundled themes on first run
pub fn ensure_themes_extracted() {
    let Some(dir) = themes_dir() else {
        return;
    };

    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }

    // Marker file: extraction happens once, user edits are never overwritten
    let marker = dir.join(".extracted_v1");
    if marker.exists() {
        return;
    }

    for theme in bundled::BUNDLED_THEMES {
        let path = dir.join(theme.filename);
        if !path.exists() {
            let _ = std::fs::write(&path, theme.content);
        }
    }

    let _ = std::fs::write(&marker, "1");
}

/// Strip JSONC extensions (line/block comments, trailing commas) so
/// serde_json can parse the remainder. String contents are untouched.
fn strip_jsonc(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    // Escape sequence: copy the escaped char verbatim
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push('"');
            }
            '/' if chars.peek() == Some(&'/') => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = ' ';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            ',' => {
                // Trailing comma: drop it when the next token closes a scope
                let mut lookahead = chars.clone();
                let mut next_token = None;
                for next in lookahead.by_ref() {
                    if !next.is_whitespace() {
                        next_token = Some(next);
                        break;
                    }
                }
                if !matches!(next_token, Some('}') | Some(']')) {
                    out.push(',');
                }
            }
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_themes_parse() {
        for entry in bundled::BUNDLED_THEMES {
            let theme = Theme::from_json(entry.content)
                .unwrap_or_else(|e| panic!("{} failed to parse: {}", entry.filename, e));
            assert!(theme.name.is_some(), "{} has no name", entry.filename);
            assert!(
                theme.color("editor.background").is_some(),
                "{} has no editor.background",
                entry.filename
            );
            assert!(!theme.token_colors.is_empty());
        }
    }

    #[test]
    fn test_resolve_bundled_by_name() {
        let theme = Theme::resolve("Dusk Ember").unwrap();
        assert_eq!(theme.display_name(), "Dusk Ember");
        assert_eq!(theme.color("editor.background"), Some("#1a0d26"));
    }

    #[test]
    fn test_jsonc_comments_tolerated() {
        let content = r##"{
            // editor chrome
            "name": "Test",
            "colors": {
                /* the background */
                "editor.background": "#112233",
            },
        }"##;
        let theme = Theme::from_json(content).unwrap();
        assert_eq!(theme.display_name(), "Test");
        assert_eq!(theme.color("editor.background"), Some("#112233"));
    }

    #[test]
    fn test_slashes_inside_strings_survive() {
        let content = r##"{"name": "a // b", "colors": {"k": "#fff"}}"##;
        let theme = Theme::from_json(content).unwrap();
        assert_eq!(theme.display_name(), "a // b");
    }

    #[test]
    fn test_scope_string_or_array() {
        let content = r##"{
            "name": "T",
            "tokenColors": [
                {"scope": "comment", "settings": {"foreground": "#6a5a7d"}},
                {"scope": ["string", "string.quoted"], "settings": {"foreground": "#a6d176"}}
            ]
        }"##;
        let theme = Theme::from_json(content).unwrap();
        assert_eq!(theme.token_colors.len(), 2);
        assert_eq!(theme.token_colors[0].label(), "comment");
        assert_eq!(theme.token_colors[1].label(), "string");
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let theme = Theme::from_json(r#"{"name": "Bare"}"#).unwrap();
        assert!(theme.colors.is_empty());
        assert!(theme.token_colors.is_empty());
    }
}
