use std::collections::{BTreeMap, HashMap};

use tracing::warn;

use super::{Namespace, Term, VocabularyError};

/// A store that maps between vocabulary terms, their IRIs and their compact
/// names.
///
/// The `VocabularyStore` indexes:
/// - Full IRIs to the corresponding `Term`
/// - Prefixes to the `Namespace` they are bound to
///
/// This enables lookup in both directions, making it possible to:
/// - Find the term declared for an IRI found in a graph
/// - Compact an IRI to `prefix:localName` and expand it back
/// - Resolve a compact name to its declared term
///
/// The store is typically populated with the built-in vocabularies (see
/// [`VOCABULARIES`](crate::VOCABULARIES)), but any `Term` can be added.
///
/// # Examples
///
/// ```
/// use ala_vocabulary::{format, language_type, VocabularyStore};
///
/// let store = VocabularyStore::new([format::IMAGE, language_type::LIVING]);
///
/// // Look up a term by IRI
/// let image = store
///     .term_for_iri("http://www.ala.org.au/format/1.0/Image")
///     .unwrap();
/// assert_eq!(image.local_name(), "Image");
///
/// // Compact and expand
/// assert_eq!(
///     store.compact(language_type::LIVING.iri()).as_deref(),
///     Some("languageType:living")
/// );
/// assert_eq!(
///     store.expand("format:Image").unwrap(),
///     "http://www.ala.org.au/format/1.0/Image"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct VocabularyStore {
    terms_by_iri: HashMap<&'static str, Term>,
    namespaces_by_prefix: BTreeMap<&'static str, Namespace>,
}

impl VocabularyStore {
    /// Creates a new store holding the provided terms.
    ///
    /// Each term's namespace is bound to its prefix. Terms are inserted with
    /// [`insert`](Self::insert), so later terms replace earlier ones with the
    /// same IRI.
    pub fn new<T>(terms: T) -> Self
    where
        T: IntoIterator<Item = Term>,
    {
        let mut store = Self::default();
        for term in terms {
            store.insert(term);
        }
        store
    }

    /// Creates a store from whole vocabularies: their namespaces and every
    /// term they declare.
    ///
    /// Namespaces are bound even when the vocabulary declares no terms, so
    /// marker namespaces such as `alavoc` still expand and compact.
    ///
    /// # Examples
    ///
    /// ```
    /// use ala_vocabulary::{Vocabulary, VocabularyStore};
    ///
    /// let store = VocabularyStore::with_vocabularies([Vocabulary::AlaVocabulary]);
    /// assert!(store.is_empty());
    /// assert_eq!(
    ///     store.expand("alavoc:anything").unwrap(),
    ///     "http://www.ala.org.au/vocabulary/1.0/anything"
    /// );
    /// ```
    pub fn with_vocabularies<T>(vocabularies: T) -> Self
    where
        T: IntoIterator<Item = crate::Vocabulary>,
    {
        let mut store = Self::default();
        for vocabulary in vocabularies {
            store.bind_namespace(vocabulary.namespace());
            for term in vocabulary.terms() {
                store.insert(*term);
            }
        }
        store
    }

    /// Inserts a term into the store.
    ///
    /// A term with the same IRI is replaced. The term's prefix is bound to
    /// its namespace, replacing any earlier binding of that prefix.
    pub fn insert(&mut self, term: Term) {
        self.bind_namespace(term.namespace());
        self.terms_by_iri.insert(term.iri(), term);
    }

    /// Inserts a term, refusing to overwrite conflicting entries.
    ///
    /// # Errors
    ///
    /// - [`VocabularyError::PrefixConflict`] if the term's prefix is bound to
    ///   a different namespace URI.
    /// - [`VocabularyError::DuplicateIri`] if a different term already holds
    ///   the IRI.
    ///
    /// # Examples
    ///
    /// ```
    /// use ala_vocabulary::{format, VocabularyError, VocabularyStore};
    ///
    /// mod imposter {
    ///     ala_vocabulary::const_vocabulary! {
    ///         namespace: "http://example.org/format/",
    ///         prefix: "format",
    ///         terms: {
    ///             Class IMAGE = "Image";
    ///         }
    ///     }
    /// }
    ///
    /// let mut store = VocabularyStore::new([format::IMAGE]);
    /// assert!(matches!(
    ///     store.try_insert(imposter::IMAGE),
    ///     Err(VocabularyError::PrefixConflict { .. })
    /// ));
    /// ```
    pub fn try_insert(&mut self, term: Term) -> Result<(), VocabularyError> {
        let namespace = term.namespace();
        if let Some(bound) = self.namespaces_by_prefix.get(namespace.prefix())
            && bound.uri() != namespace.uri()
        {
            return Err(VocabularyError::PrefixConflict {
                prefix: namespace.prefix().to_string(),
                bound: bound.uri().to_string(),
                requested: namespace.uri().to_string(),
            });
        }
        if let Some(existing) = self.terms_by_iri.get(term.iri())
            && *existing != term
        {
            return Err(VocabularyError::DuplicateIri(term.iri().to_string()));
        }
        self.insert(term);
        Ok(())
    }

    /// Returns the term declared for an IRI, if present in the store.
    pub fn term_for_iri(&self, iri: &str) -> Option<&Term> {
        self.terms_by_iri.get(iri)
    }

    /// Looks up a term by prefix and local name.
    ///
    /// ```
    /// use ala_vocabulary::VOCABULARIES;
    ///
    /// let store = VOCABULARIES.get();
    /// let rank = store.term_named("ala", "TaxonRank").unwrap();
    /// assert!(rank.is_class());
    /// assert!(store.term_named("ala", "taxonRank").is_none());
    /// ```
    pub fn term_named(&self, prefix: &str, local_name: &str) -> Option<&Term> {
        let namespace = self.namespaces_by_prefix.get(prefix)?;
        self.terms_by_iri.get(namespace.iri(local_name).as_str())
    }

    /// Returns the namespace bound to a prefix.
    pub fn namespace(&self, prefix: &str) -> Option<&Namespace> {
        self.namespaces_by_prefix.get(prefix)
    }

    /// Returns the bound namespaces in prefix order.
    pub fn namespaces(&self) -> impl Iterator<Item = &Namespace> {
        self.namespaces_by_prefix.values()
    }

    /// Returns the stored terms in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.terms_by_iri.values()
    }

    /// The number of terms in the store.
    pub fn len(&self) -> usize { self.terms_by_iri.len() }

    pub fn is_empty(&self) -> bool { self.terms_by_iri.is_empty() }

    /// Compacts an IRI to `prefix:localName`.
    ///
    /// When namespaces nest, the longest matching namespace wins, so
    /// `http://www.ala.org.au/format/1.0/languageTypes/living` compacts to
    /// `languageType:living` rather than `format:languageTypes/living`.
    /// Returns `None` when no bound namespace contains the IRI. The IRI need
    /// not be a declared term.
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.namespaces_by_prefix
            .values()
            .filter_map(|namespace| {
                namespace
                    .local_name(iri)
                    .map(|local_name| (namespace, local_name))
            })
            .max_by_key(|(namespace, _)| namespace.uri().len())
            .map(|(namespace, local_name)| {
                format!("{}:{}", namespace.prefix(), local_name)
            })
    }

    /// Expands `prefix:localName` to a full IRI using the bound namespaces.
    ///
    /// # Errors
    ///
    /// - [`VocabularyError::MalformedCurie`] if there is no `:` or the prefix
    ///   or local name is empty.
    /// - [`VocabularyError::UnknownPrefix`] if the prefix is not bound.
    pub fn expand(&self, curie: &str) -> Result<String, VocabularyError> {
        let (prefix, local_name) = split_curie(curie)?;
        let namespace = self
            .namespaces_by_prefix
            .get(prefix)
            .ok_or_else(|| VocabularyError::UnknownPrefix(prefix.to_string()))?;
        Ok(namespace.iri(local_name))
    }

    /// Resolves `prefix:localName` to its declared term.
    ///
    /// # Errors
    ///
    /// As [`expand`](Self::expand), plus [`VocabularyError::UnknownTerm`] if
    /// the expanded IRI is not a term in the store.
    ///
    /// ```
    /// use ala_vocabulary::{format, VocabularyError, VOCABULARIES};
    ///
    /// let store = VOCABULARIES.get();
    /// assert_eq!(*store.resolve("format:cssClass").unwrap(), format::CSS_CLASS);
    /// assert_eq!(
    ///     store.resolve("format:colour"),
    ///     Err(VocabularyError::UnknownTerm(
    ///         "http://www.ala.org.au/format/1.0/colour".to_string()
    ///     ))
    /// );
    /// ```
    pub fn resolve(&self, curie: &str) -> Result<&Term, VocabularyError> {
        let iri = self.expand(curie)?;
        self.terms_by_iri
            .get(iri.as_str())
            .ok_or(VocabularyError::UnknownTerm(iri))
    }

    /// Binds a namespace's prefix, replacing any earlier binding.
    fn bind_namespace(&mut self, namespace: Namespace) {
        if let Some(previous) =
            self.namespaces_by_prefix.insert(namespace.prefix(), namespace)
            && previous.uri() != namespace.uri()
        {
            warn!(
                prefix = namespace.prefix(),
                previous = previous.uri(),
                current = namespace.uri(),
                "prefix rebound to a different namespace"
            );
        }
    }
}

fn split_curie(curie: &str) -> Result<(&str, &str), VocabularyError> {
    match curie.split_once(':') {
        Some((prefix, local_name))
            if !prefix.is_empty() && !local_name.is_empty() =>
        {
            Ok((prefix, local_name))
        }
        _ => Err(VocabularyError::MalformedCurie(curie.to_string())),
    }
}
