use std::fmt;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

use super::Namespace;

/// The role a term plays in its vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TermKind {
    /// An `rdfs:Class`, e.g. `format:Image`.
    Class,
    /// An `rdf:Property`, e.g. `ala:forTerm`.
    Property,
    /// A named individual used as an enumerated value, e.g.
    /// `languageType:living`.
    Individual,
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TermKind::Class => "class",
            TermKind::Property => "property",
            TermKind::Individual => "individual",
        })
    }
}

/// A named identifier within a vocabulary.
///
/// A `Term` carries its namespace, its local name and the full IRI formed by
/// concatenating the two. Terms are declared as constants with
/// [`const_vocabulary!`](crate::const_vocabulary), which computes the IRI at
/// compile time, so a term never allocates.
///
/// A term compares equal to the string form of its IRI:
///
/// ```
/// use ala_vocabulary::format;
///
/// assert_eq!(format::IMAGE, "http://www.ala.org.au/format/1.0/Image");
/// assert_eq!(format::IMAGE.to_string(), format::IMAGE_IRI);
/// assert!(format::IMAGE.is_class());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Term {
    namespace: Namespace,
    local_name: &'static str,
    iri: &'static str,
    kind: TermKind,
}

impl Term {
    /// Assembles a term from parts that the caller guarantees to be
    /// consistent: `iri` must equal `namespace.uri()` followed by
    /// `local_name`.
    ///
    /// Used by [`const_vocabulary!`](crate::const_vocabulary), which builds
    /// `iri` with `concat!`.
    #[doc(hidden)]
    pub const fn new_unchecked(
        namespace: Namespace,
        local_name: &'static str,
        iri: &'static str,
        kind: TermKind,
    ) -> Self {
        Self { namespace, local_name, iri, kind }
    }

    pub const fn namespace(&self) -> Namespace { self.namespace }

    pub const fn local_name(&self) -> &'static str { self.local_name }

    /// The full IRI: namespace URI followed by the local name.
    pub const fn iri(&self) -> &'static str { self.iri }

    pub const fn kind(&self) -> TermKind { self.kind }

    pub fn is_class(&self) -> bool { self.kind == TermKind::Class }

    pub fn is_property(&self) -> bool { self.kind == TermKind::Property }

    /// The compact `prefix:localName` form, e.g. `"ala:forTerm"`.
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.namespace.prefix(), self.local_name)
    }

    /// Returns the term as a sophia IRI so it can be used directly in
    /// sophia graphs and triples.
    #[cfg(feature = "sophia")]
    pub fn to_iri_ref(&self) -> sophia_api::term::IriRef<&'static str> {
        sophia_api::term::IriRef::new_unchecked(self.iri)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.iri)
    }
}

impl AsRef<str> for Term {
    fn as_ref(&self) -> &str { self.iri }
}

impl PartialEq<str> for Term {
    fn eq(&self, other: &str) -> bool { self.iri == other }
}

impl PartialEq<&str> for Term {
    fn eq(&self, other: &&str) -> bool { self.iri == *other }
}

#[cfg(feature = "serde")]
impl Serialize for Term {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.iri)
    }
}
