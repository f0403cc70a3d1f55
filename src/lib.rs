//! # UI Generation Prompts
//!
//! The system prompt for an LLM agent that assembles React components
//! styled with Tailwind inside a single-root virtual file system.
//!
//! The crate embeds the prompt at compile time and exposes it read-only.
//! Sending it to a model, storing generated files, resolving `@/` imports
//! and mounting `/App.jsx` are left to the caller.
//!
//! ## Reading the prompt
//!
//! ```rust
//! use ui_gen_prompts::{generation_prompt, GENERATION_PROMPT};
//!
//! assert_eq!(generation_prompt(), GENERATION_PROMPT);
//! assert!(GENERATION_PROMPT.contains("/App.jsx"));
//! ```
//!
//! ## Composing a request
//!
//! The text carries no placeholders. Callers concatenate, and decide on
//! roles and history themselves:
//!
//! ```rust
//! use ui_gen_prompts::GENERATION_PROMPT;
//!
//! let request = format!("{}\n\n{}", GENERATION_PROMPT, "Build a pricing table");
//! assert!(request.starts_with(GENERATION_PROMPT));
//! ```
//!
//! ## Looking up by name
//!
//! ```rust
//! use ui_gen_prompts::PromptKind;
//!
//! let kind: PromptKind = "generation".parse().unwrap();
//! assert!(!kind.text().is_empty());
//! assert!("executor".parse::<PromptKind>().is_err());
//! ```
//!
//! ## Contract checks
//!
//! Downstream components depend on conventions the prompt states in prose
//! (root entrypoint, `@/` alias, Tailwind styling, virtual root).
//! [`verify`] confirms the embedded text still states each of them:
//!
//! ```rust
//! use ui_gen_prompts::{verify, PromptKind};
//!
//! let report = verify(PromptKind::Generation).unwrap();
//! assert!(report.is_satisfied());
//! ```
//!
//! [`check`] and [`verify_text`] run the same test on any text, so an
//! edited prompt can be vetted before it ships. The literal substrings
//! each convention looks for are listed by [`Convention::markers`].
//!
//! ```rust
//! use ui_gen_prompts::{verify_text, Convention, PromptError, GENERATION_PROMPT};
//!
//! let edited = GENERATION_PROMPT.replace("'@/'", "relative paths");
//! match verify_text("edited", &edited) {
//!     Err(PromptError::ContractViolation { missing, .. }) => {
//!         assert_eq!(missing, vec![Convention::ImportAlias]);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

pub mod contract;
pub mod errors;
pub mod prompts;

pub use contract::{check, verify, verify_text, Convention, ContractReport};
pub use errors::{PromptError, PromptResult};
pub use prompts::{generation_prompt, PromptKind, GENERATION_PROMPT};
