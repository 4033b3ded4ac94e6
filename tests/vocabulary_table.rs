//! Regression tests for the published vocabulary strings.

use std::collections::HashSet;
use std::thread;

use ala_vocabulary::{
    Namespace, Term, TermKind, VOCABULARIES, Vocabulary, VocabularyError, ala,
    alavoc, format, language_type,
};

fn all_terms() -> impl Iterator<Item = &'static Term> {
    Vocabulary::ALL
        .into_iter()
        .flat_map(|vocabulary| vocabulary.terms().iter())
}

fn local_names(terms: &[Term], kind: TermKind) -> Vec<&'static str> {
    terms
        .iter()
        .filter(|term| term.kind() == kind)
        .map(|term| term.local_name())
        .collect()
}

#[test]
fn test_namespaces_match_published_table() {
    let expected = [
        (Vocabulary::Ala, "ala", "http://www.ala.org.au/terms/1.0/"),
        (Vocabulary::AlaVocabulary, "alavoc", "http://www.ala.org.au/vocabulary/1.0/"),
        (Vocabulary::Format, "format", "http://www.ala.org.au/format/1.0/"),
        (
            Vocabulary::LanguageType,
            "languageType",
            "http://www.ala.org.au/format/1.0/languageTypes/",
        ),
    ];
    for (vocabulary, prefix, uri) in expected {
        assert_eq!(vocabulary.namespace(), Namespace::new(prefix, uri));
    }

    assert_eq!(ala::NAMESPACE, "http://www.ala.org.au/terms/1.0/");
    assert_eq!(ala::PREFIX, "ala");
    assert_eq!(alavoc::NS.uri(), alavoc::NAMESPACE);
    assert_eq!(format::NS.uri(), "http://www.ala.org.au/format/1.0/");
    assert_eq!(language_type::PREFIX, "languageType");
}

#[test]
fn test_local_names_match_published_table() {
    assert_eq!(
        local_names(ala::TERMS, TermKind::Class),
        ["DwCVocabulary", "TaxonRank"]
    );
    assert_eq!(
        local_names(ala::TERMS, TermKind::Property),
        [
            "forTerm",
            "csvName",
            "jsonName",
            "solrTerm",
            "status",
            "isLinnaeanRank",
            "isLooseRank",
            "rankID",
            "rankMarker",
            "sortOrder",
        ]
    );
    assert_eq!(
        local_names(format::TERMS, TermKind::Class),
        ["Image", "Concept", "Language", "Term"]
    );
    assert_eq!(
        local_names(format::TERMS, TermKind::Property),
        [
            "asset",
            "backgroundColor",
            "cssClass",
            "height",
            "embed",
            "icon",
            "languageType",
            "priority",
            "resolver",
            "textColor",
            "width",
        ]
    );
    assert_eq!(
        local_names(language_type::TERMS, TermKind::Individual),
        [
            "individual",
            "macrolanguage",
            "special",
            "ancient",
            "constructed",
            "extinct",
            "historical",
            "living",
            "unknown",
        ]
    );
}

#[test]
fn test_iri_is_namespace_plus_local_name() {
    for term in all_terms() {
        assert_eq!(
            term.iri(),
            format!("{}{}", term.namespace().uri(), term.local_name())
        );
    }
}

#[test]
fn test_iris_are_pairwise_distinct() {
    let mut seen = HashSet::new();
    for term in all_terms() {
        assert!(seen.insert(term.iri()), "duplicate IRI {}", term.iri());
    }
    assert_eq!(seen.len(), 36);
}

#[test]
fn test_prefixes_are_distinct() {
    let prefixes: HashSet<_> = Vocabulary::ALL
        .into_iter()
        .map(|vocabulary| vocabulary.namespace().prefix())
        .collect();
    assert_eq!(prefixes.len(), Vocabulary::ALL.len());
}

#[test]
fn test_examples() {
    assert_eq!(format::IMAGE, "http://www.ala.org.au/format/1.0/Image");
    assert_eq!(
        language_type::LIVING,
        "http://www.ala.org.au/format/1.0/languageTypes/living"
    );
    assert_eq!(ala::FOR_TERM, "http://www.ala.org.au/terms/1.0/forTerm");
    assert_eq!(ala::STATUS.qualified_name(), "ala:status");
}

#[test]
fn test_global_store_is_idempotent() {
    let first = VOCABULARIES.get();
    let second = VOCABULARIES.get();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.len(), second.len());
    for term in all_terms() {
        assert_eq!(second.term_for_iri(term.iri()), Some(term));
    }
}

#[test]
fn test_global_store_concurrent_reads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                VOCABULARIES
                    .get()
                    .compact("http://www.ala.org.au/format/1.0/languageTypes/ancient")
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(
            handle.join().unwrap().as_deref(),
            Some("languageType:ancient")
        );
    }
}

#[test]
fn test_global_store_round_trips_every_term() {
    let store = VOCABULARIES.get();
    for term in all_terms() {
        let curie = store.compact(term.iri()).unwrap();
        assert_eq!(curie, term.qualified_name());
        assert_eq!(store.resolve(&curie), Ok(term));
    }
}

#[test]
fn test_global_store_errors() {
    let store = VOCABULARIES.get();
    assert_eq!(
        store.resolve("dwc:Taxon"),
        Err(VocabularyError::UnknownPrefix("dwc".to_string()))
    );
    assert_eq!(
        store.resolve("alavoc:thing"),
        Err(VocabularyError::UnknownTerm(
            "http://www.ala.org.au/vocabulary/1.0/thing".to_string()
        ))
    );
    assert_eq!(
        store.resolve("http://www.ala.org.au/terms/1.0/status"),
        Err(VocabularyError::UnknownPrefix("http".to_string()))
    );
    assert!(store.compact("http://rs.tdwg.org/dwc/terms/Taxon").is_none());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        VocabularyError::UnknownPrefix("dwc".to_string()).to_string(),
        "unknown prefix: \"dwc\""
    );
    assert_eq!(
        VocabularyError::UnknownTerm(format::IMAGE_IRI.to_string()).to_string(),
        "unknown term: <http://www.ala.org.au/format/1.0/Image>"
    );
}
