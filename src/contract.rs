//! Prompt Contract
//!
//! Consistency checks between the prompt text and the conventions that
//! downstream consumers (the file router, the `@/` resolver, the render
//! harness) rely on.
//!
//! Only the prompt itself is inspected. Generated components are never
//! linted here; the design guidance stays prose for the model to read.

use crate::errors::{PromptError, PromptResult};
use crate::prompts::PromptKind;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// A convention the prompt text must state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Convention {
    /// Every project has a root `/App.jsx` with a default-exported component
    RootEntrypoint,
    /// Styling goes through Tailwind utility classes
    UtilityStyling,
    /// No HTML document; `/App.jsx` is the entrypoint
    NoHtmlEntrypoint,
    /// Single-root virtual file system
    VirtualRoot,
    /// Local imports use the `@/` alias
    ImportAlias,
    /// Patterns to avoid and patterns to prefer
    VisualDesign,
    /// Keep narrative output short
    Brevity,
    /// Explicit user direction wins in debug mode
    DebugOverride,
}

impl Convention {
    pub const ALL: &'static [Convention] = &[
        Convention::RootEntrypoint,
        Convention::UtilityStyling,
        Convention::NoHtmlEntrypoint,
        Convention::VirtualRoot,
        Convention::ImportAlias,
        Convention::VisualDesign,
        Convention::Brevity,
        Convention::DebugOverride,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Convention::RootEntrypoint => "root_entrypoint",
            Convention::UtilityStyling => "utility_styling",
            Convention::NoHtmlEntrypoint => "no_html_entrypoint",
            Convention::VirtualRoot => "virtual_root",
            Convention::ImportAlias => "import_alias",
            Convention::VisualDesign => "visual_design",
            Convention::Brevity => "brevity",
            Convention::DebugOverride => "debug_override",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Convention::RootEntrypoint => "root /App.jsx exporting a default React component",
            Convention::UtilityStyling => "style with Tailwind classes, not hardcoded styles",
            Convention::NoHtmlEntrypoint => "no HTML files; App.jsx is the entrypoint",
            Convention::VirtualRoot => "single-root virtual file system at '/'",
            Convention::ImportAlias => "non-library imports use the '@/' alias",
            Convention::VisualDesign => "visual patterns to avoid and to prefer",
            Convention::Brevity => "keep responses brief unless asked",
            Convention::DebugOverride => "follow explicit user direction in debug mode",
        }
    }

    /// Literal substrings that must all appear (case-sensitive)
    pub fn markers(&self) -> &'static [&'static str] {
        match self {
            Convention::RootEntrypoint => &["/App.jsx", "default export"],
            Convention::UtilityStyling => &["tailwindcss", "not hardcoded styles"],
            Convention::NoHtmlEntrypoint => &["Do not create any HTML files"],
            Convention::VirtualRoot => &["root route", "virtual FS"],
            Convention::ImportAlias => &["'@/'"],
            Convention::VisualDesign => &["Avoid these overused patterns", "Instead, aim for"],
            Convention::Brevity => &["as brief as possible"],
            Convention::DebugOverride => &["debug mode"],
        }
    }

    /// Whether `text` states this convention
    pub fn is_stated_in(&self, text: &str) -> bool {
        self.markers().iter().all(|m| text.contains(m))
    }
}

/// Outcome of checking a prompt against every [`Convention`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractReport {
    pub satisfied: Vec<Convention>,
    pub missing: Vec<Convention>,
}

impl ContractReport {
    pub fn is_satisfied(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn to_json(&self) -> PromptResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Check arbitrary prompt text against every convention
pub fn check(text: &str) -> ContractReport {
    let (satisfied, missing): (Vec<_>, Vec<_>) = Convention::ALL
        .iter()
        .copied()
        .partition(|c| c.is_stated_in(text));
    ContractReport { satisfied, missing }
}

/// Check an embedded prompt, failing if any convention is missing
pub fn verify(kind: PromptKind) -> PromptResult<ContractReport> {
    verify_text(kind.name(), kind.text())
}

/// Check `text` under the label `prompt`, failing if any convention is missing
pub fn verify_text(prompt: &str, text: &str) -> PromptResult<ContractReport> {
    let report = check(text);

    if !report.is_satisfied() {
        for convention in &report.missing {
            warn!(
                "prompt '{}' does not state {} ({})",
                prompt,
                convention.name(),
                convention.description()
            );
        }
        return Err(PromptError::ContractViolation {
            prompt: prompt.to_string(),
            missing: report.missing,
        });
    }

    debug!("prompt '{}' states all {} conventions", prompt, report.satisfied.len());
    Ok(report)
}
