//! ALA Vocabulary: RDF identifiers for Atlas of Living Australia terminology.
//!
//! This crate provides the namespaces, classes and properties used by the
//! Atlas of Living Australia to describe biodiversity data in RDF. Every
//! identifier is a compile-time constant whose IRI is the namespace URI
//! followed by the term's local name.
//!
//! # Basic Usage
//!
//! ```rust
//! use ala_vocabulary::{format, language_type, Vocabulary, VOCABULARIES};
//!
//! // Use predefined constants
//! assert_eq!(format::IMAGE.iri(), "http://www.ala.org.au/format/1.0/Image");
//! assert_eq!(format::IMAGE.qualified_name(), "format:Image");
//! assert_eq!(format::NS.prefix(), "format");
//!
//! // Namespace details for a vocabulary
//! let ns = Vocabulary::LanguageType.namespace();
//! assert_eq!(ns.uri(), "http://www.ala.org.au/format/1.0/languageTypes/");
//!
//! // Use the global store for runtime lookup
//! let store = VOCABULARIES.get();
//! assert_eq!(
//!     store.compact(language_type::LIVING.iri()).as_deref(),
//!     Some("languageType:living")
//! );
//! assert_eq!(store.resolve("ala:forTerm").unwrap().local_name(), "forTerm");
//! ```
//!
//! # Vocabularies
//!
//! | Module | Prefix | Namespace |
//! |---|---|---|
//! | [`ala`] | `ala` | `http://www.ala.org.au/terms/1.0/` |
//! | [`alavoc`] | `alavoc` | `http://www.ala.org.au/vocabulary/1.0/` |
//! | [`format`] | `format` | `http://www.ala.org.au/format/1.0/` |
//! | [`language_type`] | `languageType` | `http://www.ala.org.au/format/1.0/languageTypes/` |
//!
//! # Features
//!
//! - `serde`: `Term` serializes as its IRI, `Namespace` as a prefix/uri pair.
//! - `sophia`: `Term::to_iri_ref` converts a term into a
//!   `sophia_api::term::IriRef`.

#[doc(hidden)]
pub use paste;

mod namespace;
pub use namespace::Namespace;

mod term;
pub use term::{Term, TermKind};

mod error;
pub use error::VocabularyError;

mod vocabulary_store;
pub use vocabulary_store::VocabularyStore;

mod vocabulary_registry;
pub use vocabulary_registry::*;
