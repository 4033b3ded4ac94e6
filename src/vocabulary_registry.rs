use std::sync::OnceLock;

use tracing::debug;

use super::{Namespace, Term, VocabularyStore};

/// A macro that declares a vocabulary's constants at compile time.
///
/// Invoked inside a module, it creates:
/// - `NAMESPACE` and `PREFIX` string constants
/// - `NS`, the [`Namespace`](crate::Namespace) constant
/// - for each term, a [`Term`](crate::Term) constant with the given name and
///   an `&str` constant with the suffix `_IRI`
/// - `TERMS`, a slice of every term in declaration order
///
/// IRIs are built with `concat!`, so they are plain string literals in the
/// compiled crate. This is used to define all the vocabularies in this
/// crate, and can be used downstream to declare further ones.
///
/// # Examples
///
/// ```
/// use paste::paste;
///
/// mod dwc {
///     ala_vocabulary::const_vocabulary! {
///         namespace: "http://rs.tdwg.org/dwc/terms/",
///         prefix: "dwc",
///         terms: {
///             /// The dwc:Taxon class
///             Class TAXON = "Taxon";
///             Property SCIENTIFIC_NAME = "scientificName";
///         }
///     }
/// }
///
/// assert_eq!(dwc::PREFIX, "dwc");
/// assert_eq!(dwc::TAXON.iri(), "http://rs.tdwg.org/dwc/terms/Taxon");
/// assert_eq!(dwc::SCIENTIFIC_NAME.qualified_name(), "dwc:scientificName");
/// assert_eq!(dwc::TERMS.len(), 2);
///
/// paste! {
///     // SCIENTIFIC_NAME_IRI is the raw IRI string
///     assert_eq!(dwc::[<SCIENTIFIC_NAME _IRI>], "http://rs.tdwg.org/dwc/terms/scientificName");
/// }
/// ```
#[macro_export]
macro_rules! const_vocabulary {
    (
        namespace: $uri:literal,
        prefix: $prefix:literal,
        terms: {
            $(
                $(#[$meta:meta])*
                $kind:ident $const_name:ident = $name:literal;
            )*
        }
    ) => {
        #[doc = concat!("The namespace URI: `", $uri, "`")]
        pub const NAMESPACE: &str = $uri;

        #[doc = concat!("The recommended prefix for the namespace: `", $prefix, "`")]
        pub const PREFIX: &str = $prefix;

        /// The namespace as a prefix and URI pair.
        pub const NS: $crate::Namespace = $crate::Namespace::new($prefix, $uri);

        $(
            $crate::paste::paste! {
                pub const [<$const_name _IRI>]: &str = concat!($uri, $name);
            }
            $(#[$meta])*
            pub const $const_name: $crate::Term = $crate::Term::new_unchecked(
                NS,
                $name,
                concat!($uri, $name),
                $crate::TermKind::$kind,
            );
        )*

        /// Every term declared in this vocabulary.
        pub const TERMS: &[$crate::Term] = &[$($const_name),*];
    };
}

/// The ALA core and taxonomic terms.
///
/// Merges the successive revisions of the vocabulary: the Darwin Core
/// vocabulary description terms and the taxon rank terms.
pub mod ala {
    const_vocabulary! {
        namespace: "http://www.ala.org.au/terms/1.0/",
        prefix: "ala",
        terms: {
            //
            // Classes
            //

            /// The ala:DwCVocabulary class
            Class DWC_VOCABULARY = "DwCVocabulary";
            /// The ala:TaxonRank class
            Class TAXON_RANK = "TaxonRank";

            //
            // Properties
            //

            /// The ala:forTerm property. The Darwin Core term a vocabulary applies to
            Property FOR_TERM = "forTerm";
            /// The ala:csvName property. The column name to use in CSV output
            Property CSV_NAME = "csvName";
            /// The ala:jsonName property. The field name to use in JSON output
            Property JSON_NAME = "jsonName";
            /// The ala:solrTerm property. The corresponding SOLR index field
            Property SOLR_TERM = "solrTerm";
            Property STATUS = "status";
            Property IS_LINNAEAN_RANK = "isLinnaeanRank";
            Property IS_LOOSE_RANK = "isLooseRank";
            Property RANK_ID = "rankID";
            Property RANK_MARKER = "rankMarker";
            Property SORT_ORDER = "sortOrder";
        }
    }
}

/// The ALA generic vocabulary namespace.
///
/// A namespace-only marker: no terms are declared under it.
pub mod alavoc {
    const_vocabulary! {
        namespace: "http://www.ala.org.au/vocabulary/1.0/",
        prefix: "alavoc",
        terms: {}
    }
}

/// The ALA Format vocabulary, describing how things are displayed.
pub mod format {
    const_vocabulary! {
        namespace: "http://www.ala.org.au/format/1.0/",
        prefix: "format",
        terms: {
            //
            // Classes
            //

            /// An image of some sort
            Class IMAGE = "Image";
            /// A taggable concept
            Class CONCEPT = "Concept";
            /// A language
            Class LANGUAGE = "Language";
            /// A term
            Class TERM = "Term";

            //
            // Properties
            //

            Property ASSET = "asset";
            /// A background colour to use during display
            Property BACKGROUND_COLOR = "backgroundColor";
            /// A CSS class to use during display
            Property CSS_CLASS = "cssClass";
            /// The height to use during display
            Property HEIGHT = "height";
            Property EMBED = "embed";
            /// A link to an icon to use for display
            Property ICON = "icon";
            /// The type of a language, one of the [`language_type`](crate::language_type) values
            Property LANGUAGE_TYPE = "languageType";
            Property PRIORITY = "priority";
            Property RESOLVER = "resolver";
            /// A foreground colour to use during display
            Property TEXT_COLOR = "textColor";
            /// The width to use during display
            Property WIDTH = "width";
        }
    }
}

/// Language type values, used as objects of
/// [`format::LANGUAGE_TYPE`](crate::format::LANGUAGE_TYPE).
pub mod language_type {
    const_vocabulary! {
        namespace: "http://www.ala.org.au/format/1.0/languageTypes/",
        prefix: "languageType",
        terms: {
            /// The individual language type
            Individual INDIVIDUAL = "individual";
            /// The macro-language language type
            Individual MACRO_LANGUAGE = "macrolanguage";
            /// The special language type
            Individual SPECIAL = "special";
            /// The ancient language type
            Individual ANCIENT = "ancient";
            /// The constructed language type
            Individual CONSTRUCTED = "constructed";
            /// The extinct language type
            Individual EXTINCT = "extinct";
            /// The historical language type
            Individual HISTORICAL = "historical";
            /// The living language type
            Individual LIVING = "living";
            /// The unknown language type
            Individual UNKNOWN = "unknown";
        }
    }
}

/// The vocabularies defined by this crate.
///
/// # Examples
///
/// ```
/// use ala_vocabulary::{format, Vocabulary};
///
/// let ns = Vocabulary::Format.namespace();
/// assert_eq!((ns.uri(), ns.prefix()), ("http://www.ala.org.au/format/1.0/", "format"));
///
/// assert_eq!(Vocabulary::Format.term("Image"), Some(format::IMAGE));
/// assert_eq!(
///     Vocabulary::Ala.iri("rankID"),
///     Some("http://www.ala.org.au/terms/1.0/rankID")
/// );
/// assert_eq!(Vocabulary::Ala.iri("rankId"), None);
/// assert_eq!(Vocabulary::for_prefix("languageType"), Some(Vocabulary::LanguageType));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vocabulary {
    /// [`ala`]: core and taxonomic terms.
    Ala,
    /// [`alavoc`]: the generic vocabulary namespace.
    AlaVocabulary,
    /// [`format`]: display formatting.
    Format,
    /// [`language_type`]: language type values.
    LanguageType,
}

impl Vocabulary {
    pub const ALL: [Vocabulary; 4] = [
        Vocabulary::Ala,
        Vocabulary::AlaVocabulary,
        Vocabulary::Format,
        Vocabulary::LanguageType,
    ];

    /// The vocabulary's namespace URI and prefix.
    pub const fn namespace(self) -> Namespace {
        match self {
            Vocabulary::Ala => ala::NS,
            Vocabulary::AlaVocabulary => alavoc::NS,
            Vocabulary::Format => format::NS,
            Vocabulary::LanguageType => language_type::NS,
        }
    }

    /// Every term the vocabulary declares, in declaration order.
    pub const fn terms(self) -> &'static [Term] {
        match self {
            Vocabulary::Ala => ala::TERMS,
            Vocabulary::AlaVocabulary => alavoc::TERMS,
            Vocabulary::Format => format::TERMS,
            Vocabulary::LanguageType => language_type::TERMS,
        }
    }

    /// Looks up a declared term by local name.
    ///
    /// Prefer the constants (e.g. [`format::IMAGE`]) when the name is known
    /// at compile time.
    pub fn term(self, local_name: &str) -> Option<Term> {
        self.terms()
            .iter()
            .find(|term| term.local_name() == local_name)
            .copied()
    }

    /// The IRI of a declared term, or `None` if the vocabulary has no term
    /// with that local name.
    pub fn iri(self, local_name: &str) -> Option<&'static str> {
        self.term(local_name).map(|term| term.iri())
    }

    /// Finds the vocabulary whose recommended prefix is `prefix`.
    pub fn for_prefix(prefix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|vocabulary| vocabulary.namespace().prefix() == prefix)
    }
}

/// A lazily initialized singleton that holds the store of all built-in
/// vocabularies.
///
/// The store is built on first access and never modified afterwards, so it
/// is handed out as a shared reference without locking.
#[doc(hidden)]
#[derive(Debug)]
pub struct LazyVocabularies {
    data: OnceLock<VocabularyStore>,
}

impl LazyVocabularies {
    /// Gets the global VocabularyStore, initializing it if necessary.
    ///
    /// Initialization occurs exactly once, even when called from multiple
    /// threads simultaneously.
    pub fn get(&self) -> &VocabularyStore {
        self.data.get_or_init(|| {
            let store = VocabularyStore::with_vocabularies(Vocabulary::ALL);
            debug!(
                terms = store.len(),
                namespaces = store.namespaces().count(),
                "initialized vocabulary store"
            );
            store
        })
    }
}

/// The global store of the built-in vocabularies.
///
/// Most users should not need this: the terms are exposed as constants in
/// the vocabulary modules. It is useful when IRIs or compact names arrive
/// as data.
///
/// # Examples
///
/// ```
/// use ala_vocabulary::*;
///
/// let store = VOCABULARIES.get();
///
/// // Look up a term by IRI
/// let status = store
///     .term_for_iri("http://www.ala.org.au/terms/1.0/status")
///     .unwrap();
/// assert_eq!(*status, ala::STATUS);
/// assert!(status.is_property());
/// ```
pub static VOCABULARIES: LazyVocabularies = LazyVocabularies {
    data: OnceLock::new(),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TermKind;

    #[test]
    fn test_1() {
        assert_eq!(format::IMAGE.iri(), "http://www.ala.org.au/format/1.0/Image");
        assert_eq!(format::IMAGE.qualified_name(), "format:Image");
        let store = VOCABULARIES.get();
        assert_eq!(store.term_for_iri(format::IMAGE_IRI), Some(&format::IMAGE));
    }

    #[test]
    fn test_term_kinds() {
        assert_eq!(ala::DWC_VOCABULARY.kind(), TermKind::Class);
        assert_eq!(ala::SORT_ORDER.kind(), TermKind::Property);
        assert_eq!(format::TERM.kind(), TermKind::Class);
        assert!(
            language_type::TERMS
                .iter()
                .all(|term| term.kind() == TermKind::Individual)
        );
    }

    #[test]
    fn test_term_counts() {
        assert_eq!(ala::TERMS.len(), 12);
        assert!(alavoc::TERMS.is_empty());
        assert_eq!(format::TERMS.len(), 15);
        assert_eq!(language_type::TERMS.len(), 9);
        assert_eq!(VOCABULARIES.get().len(), 36);
    }

    #[test]
    fn test_iri_constants_match_terms() {
        assert_eq!(ala::RANK_ID_IRI, ala::RANK_ID.iri());
        assert_eq!(format::BACKGROUND_COLOR_IRI, "http://www.ala.org.au/format/1.0/backgroundColor");
        assert_eq!(language_type::MACRO_LANGUAGE_IRI, "http://www.ala.org.au/format/1.0/languageTypes/macrolanguage");
    }

    #[test]
    fn test_runtime_lookup() {
        assert_eq!(Vocabulary::LanguageType.term("living"), Some(language_type::LIVING));
        assert_eq!(Vocabulary::LanguageType.term("Living"), None);
        assert_eq!(Vocabulary::AlaVocabulary.iri("anything"), None);
        assert_eq!(Vocabulary::for_prefix("alavoc"), Some(Vocabulary::AlaVocabulary));
        assert_eq!(Vocabulary::for_prefix("dwc"), None);
    }

    #[test]
    fn test_global_store_is_shared() {
        let first: *const VocabularyStore = VOCABULARIES.get();
        let second: *const VocabularyStore = VOCABULARIES.get();
        assert_eq!(first, second);
    }
}
