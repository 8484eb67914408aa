//! manifest-images library for pulling container image references out of
//! line-oriented deployment manifests.
//!
//! The pipeline is linear:
//!
//! 1. **Input**: collect raw lines from a piped stream
//! 2. **Extraction**: keep `image:` / `.image:` lines and take the text after the last marker
//! 3. **Rewriting**: optionally point each reference at a new registry host
//! 4. **Output**: print one reference per line, or JSON
//!
//! # Example
//!
//! ```
//! use manifest_images::{extractor, rewriter};
//!
//! let manifest = ["kind: Pod", "  image: 10.0.0.1/team/app:v1", "  sidecar.image: envoy"];
//! let mut refs = extractor::extract_images(&manifest);
//! rewriter::retarget(&mut refs, "registry.local");
//!
//! let out: Vec<_> = refs.iter().filter_map(|r| r.rewritten.as_deref()).collect();
//! assert_eq!(out, ["registry.local/team/app:v1", "registry.local/envoy"]);
//! ```

pub mod error;
pub mod extractor;
pub mod input;
pub mod output;
pub mod rewriter;
pub mod text;

pub use error::Error;
pub use extractor::ImageRef;
