//! Prompts Module
//!
//! Embeds the UI generation prompt at compile time. The text is handed
//! verbatim to whatever client builds the model request; nothing in this
//! crate rewrites or templates it.

use crate::errors::PromptError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// UI Generation Prompt
///
/// Instructs the model to assemble React components styled with Tailwind
/// inside a single-root virtual file system, rooted at `/App.jsx`, with
/// `@/` imports for local files.
pub const GENERATION_PROMPT: &str = include_str!("../prompts/generation.txt");

/// Read accessor for [`GENERATION_PROMPT`].
///
/// Always returns the same `'static` text, so concurrent readers need no
/// synchronization.
pub fn generation_prompt() -> &'static str {
    GENERATION_PROMPT
}

/// Names of the embedded prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    /// React + Tailwind component generation
    Generation,
}

impl PromptKind {
    /// Every embedded prompt
    pub const ALL: &'static [PromptKind] = &[PromptKind::Generation];

    /// Stable lookup name
    pub fn name(&self) -> &'static str {
        match self {
            PromptKind::Generation => "generation",
        }
    }

    /// The embedded text
    pub fn text(&self) -> &'static str {
        match self {
            PromptKind::Generation => GENERATION_PROMPT,
        }
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PromptKind {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        PromptKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| PromptError::UnknownPrompt(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_loaded() {
        assert!(!GENERATION_PROMPT.is_empty());
        for kind in PromptKind::ALL {
            assert!(!kind.text().is_empty());
        }
    }

    #[test]
    fn test_accessor_returns_constant() {
        assert_eq!(generation_prompt(), GENERATION_PROMPT);
        assert_eq!(PromptKind::Generation.text(), generation_prompt());
    }

    #[test]
    fn test_no_placeholders() {
        // Composition is plain concatenation; the text must not look like a format template.
        assert!(!GENERATION_PROMPT.contains("{{"));
        assert!(!GENERATION_PROMPT.contains("${"));
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("generation".parse::<PromptKind>().unwrap(), PromptKind::Generation);
        assert_eq!(" generation\n".parse::<PromptKind>().unwrap(), PromptKind::Generation);
        assert!(matches!(
            "Generation".parse::<PromptKind>(),
            Err(PromptError::UnknownPrompt(_))
        ));
    }

    #[test]
    fn test_unknown_name_trimmed_in_error() {
        let err = "executor\n".parse::<PromptKind>().unwrap_err();
        assert!(matches!(&err, PromptError::UnknownPrompt(name) if name == "executor"));
        assert_eq!(err.to_string(), "unknown prompt: executor");
    }

    #[test]
    fn test_kind_serde_name() {
        let json = serde_json::to_string(&PromptKind::Generation).unwrap();
        assert_eq!(json, "\"generation\"");
        let back: PromptKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PromptKind::Generation);
    }
}
