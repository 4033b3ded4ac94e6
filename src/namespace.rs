#[cfg(feature = "serde")]
use serde::Serialize;

/// An RDF namespace: a base URI and the prefix recommended for it.
///
/// Namespaces are plain constants. The URI is the exact published string and
/// every term IRI in the namespace is that URI followed by a local name.
///
/// # Examples
///
/// ```
/// use ala_vocabulary::Namespace;
///
/// const EXAMPLE: Namespace = Namespace::new("ex", "http://example.org/terms/");
///
/// assert_eq!(EXAMPLE.prefix(), "ex");
/// assert_eq!(EXAMPLE.iri("thing"), "http://example.org/terms/thing");
/// assert_eq!(EXAMPLE.local_name("http://example.org/terms/thing"), Some("thing"));
/// assert_eq!(EXAMPLE.local_name("http://example.org/other/thing"), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Namespace {
    prefix: &'static str,
    uri: &'static str,
}

impl Namespace {
    /// Creates a namespace from its recommended prefix and base URI.
    pub const fn new(prefix: &'static str, uri: &'static str) -> Self {
        Self { prefix, uri }
    }

    /// The recommended prefix, e.g. `"ala"`.
    pub const fn prefix(&self) -> &'static str { self.prefix }

    /// The base URI, e.g. `"http://www.ala.org.au/terms/1.0/"`.
    pub const fn uri(&self) -> &'static str { self.uri }

    /// Builds the IRI for a local name in this namespace.
    ///
    /// No check is made that the local name is a declared term; use the
    /// vocabulary constants for that.
    pub fn iri(&self, local_name: &str) -> String {
        let mut iri = String::with_capacity(self.uri.len() + local_name.len());
        iri.push_str(self.uri);
        iri.push_str(local_name);
        iri
    }

    /// Returns true if `iri` lies under this namespace.
    pub fn contains(&self, iri: &str) -> bool {
        self.local_name(iri).is_some()
    }

    /// Returns the local part of `iri` if it lies under this namespace.
    ///
    /// The namespace URI itself has no local part and yields `None`.
    pub fn local_name<'a>(&self, iri: &'a str) -> Option<&'a str> {
        iri.strip_prefix(self.uri)
            .filter(|local_name| !local_name.is_empty())
    }
}
