use thiserror::Error;

/// Errors returned by runtime lookups on a
/// [`VocabularyStore`](crate::VocabularyStore).
///
/// The vocabulary constants themselves cannot fail; a reference to an
/// undeclared constant is a compile error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    /// The input is not of the form `prefix:localName`.
    #[error("malformed compact IRI: {0:?}")]
    MalformedCurie(String),

    /// No namespace is bound to the prefix.
    #[error("unknown prefix: {0:?}")]
    UnknownPrefix(String),

    /// The IRI lies outside every declared term.
    #[error("unknown term: <{0}>")]
    UnknownTerm(String),

    /// The prefix is already bound to a different namespace URI.
    #[error("prefix {prefix:?} is bound to <{bound}>, cannot rebind to <{requested}>")]
    PrefixConflict {
        prefix: String,
        bound: String,
        requested: String,
    },

    /// A different term with the same IRI is already in the store.
    #[error("duplicate term IRI: <{0}>")]
    DuplicateIri(String),
}
