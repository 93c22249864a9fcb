//! Standard IRI constants used by the renderer sinks.

/// OWL namespace.
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDFS namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// XSD namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// Wikidata entity base IRI; property and item identifiers resolve under it.
pub const WIKIDATA_ENTITY: &str = "http://www.wikidata.org/entity/";
/// IRI of the emitted constraints ontology itself.
pub const CONSTRAINTS_ONTOLOGY: &str = "http://www.wikidata.org/ontology/constraints";

/// `rdfs:comment`.
pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
/// `xsd:decimal`.
pub const XSD_DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
/// `xsd:string`.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// `owl:Thing`.
pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";
