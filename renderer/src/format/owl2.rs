//! OWL 2 functional-syntax sink.
//!
//! Writes one ontology document with absolute IRIs, one axiom per emission.
//! Enumerations preserve source order.

use std::io::Write;

use wdc_model::{iris, OneOfValues, PropertyIdValue};

use super::{RenderError, RendererFormat};

/// A [`RendererFormat`] producing an OWL 2 functional-syntax document.
pub struct Owl2FunctionalFormat<W: Write> {
    writer: W,
}

impl<W: Write> Owl2FunctionalFormat<W> {
    /// Creates a sink over the given writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn axiom(&mut self, text: &str) -> Result<(), RenderError> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }
}

/// Escapes a functional-syntax string literal (`\` and `"`).
fn literal(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

fn iri(value: &str) -> String {
    format!("<{}>", value)
}

fn decimal_literal(lexical: &str) -> String {
    format!("\"{}\"^^{}", lexical, iri(iris::XSD_DECIMAL))
}

impl<W: Write> RendererFormat for Owl2FunctionalFormat<W> {
    fn start(&mut self) -> Result<(), RenderError> {
        writeln!(self.writer, "Prefix(:={})", iri(iris::WIKIDATA_ENTITY))?;
        writeln!(self.writer, "Prefix(owl:={})", iri(iris::OWL))?;
        writeln!(self.writer, "Prefix(rdfs:={})", iri(iris::RDFS))?;
        writeln!(self.writer, "Prefix(xsd:={})", iri(iris::XSD))?;
        writeln!(self.writer, "Ontology({}", iri(iris::CONSTRAINTS_ONTOLOGY))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        writeln!(self.writer, ")")?;
        self.writer.flush()?;
        Ok(())
    }

    fn annotation_comment(
        &mut self,
        property: &PropertyIdValue,
        text: &str,
    ) -> Result<(), RenderError> {
        // Caller escapes; quotes arrive as &quot; so the literal is safe.
        self.axiom(&format!(
            "AnnotationAssertion( {} {} {} )",
            iri(iris::RDFS_COMMENT),
            iri(&property.iri()),
            literal(text)
        ))
    }

    fn one_of(
        &mut self,
        property: &PropertyIdValue,
        values: &OneOfValues,
    ) -> Result<(), RenderError> {
        match values {
            OneOfValues::Items { items } => {
                if items.is_empty() {
                    return Err(RenderError::Rejected(format!(
                        "empty item enumeration for {}",
                        property
                    )));
                }
                let enumerated: Vec<String> = items.iter().map(|q| iri(&q.iri())).collect();
                self.axiom(&format!(
                    "ObjectPropertyRange( {} ObjectOneOf( {} ) )",
                    iri(&property.iri()),
                    enumerated.join(" ")
                ))
            }
            OneOfValues::Quantities { quantities } => {
                if quantities.is_empty() {
                    return Err(RenderError::Rejected(format!(
                        "empty quantity enumeration for {}",
                        property
                    )));
                }
                let enumerated: Vec<String> = quantities
                    .iter()
                    .map(|q| decimal_literal(q.lexical()))
                    .collect();
                self.axiom(&format!(
                    "DataPropertyRange( {} DataOneOf( {} ) )",
                    iri(&property.iri()),
                    enumerated.join(" ")
                ))
            }
        }
    }

    fn format(&mut self, property: &PropertyIdValue, pattern: &str) -> Result<(), RenderError> {
        self.axiom(&format!(
            "DataPropertyRange( {} DatatypeRestriction( {} xsd:pattern {} ) )",
            iri(&property.iri()),
            iri(iris::XSD_STRING),
            literal(pattern)
        ))
    }

    fn range(
        &mut self,
        property: &PropertyIdValue,
        min: &str,
        max: &str,
    ) -> Result<(), RenderError> {
        self.axiom(&format!(
            "DataPropertyRange( {} DatatypeRestriction( {} xsd:minInclusive {} xsd:maxInclusive {} ) )",
            iri(&property.iri()),
            iri(iris::XSD_DECIMAL),
            decimal_literal(min),
            decimal_literal(max)
        ))
    }

    fn single_value(&mut self, property: &PropertyIdValue) -> Result<(), RenderError> {
        self.axiom(&format!(
            "SubClassOf( {} ObjectMaxCardinality( 1 {} ) )",
            iri(iris::OWL_THING),
            iri(&property.iri())
        ))
    }

    fn unique_value(&mut self, property: &PropertyIdValue) -> Result<(), RenderError> {
        self.axiom(&format!(
            "InverseFunctionalObjectProperty( {} )",
            iri(&property.iri())
        ))
    }

    fn multi_value(&mut self, property: &PropertyIdValue) -> Result<(), RenderError> {
        self.axiom(&format!(
            "SubClassOf( ObjectSomeValuesFrom( {} {} ) ObjectMinCardinality( 2 {} ) )",
            iri(&property.iri()),
            iri(iris::OWL_THING),
            iri(&property.iri())
        ))
    }

    fn symmetric(&mut self, property: &PropertyIdValue) -> Result<(), RenderError> {
        self.axiom(&format!(
            "SymmetricObjectProperty( {} )",
            iri(&property.iri())
        ))
    }

    fn inverse(
        &mut self,
        property: &PropertyIdValue,
        inverse: &PropertyIdValue,
    ) -> Result<(), RenderError> {
        self.axiom(&format!(
            "InverseObjectProperties( {} {} )",
            iri(&property.iri()),
            iri(&inverse.iri())
        ))
    }

    fn conflicts_with(
        &mut self,
        property: &PropertyIdValue,
        properties: &[PropertyIdValue],
    ) -> Result<(), RenderError> {
        if properties.is_empty() {
            return Err(RenderError::Rejected(format!(
                "empty conflicting-property list for {}",
                property
            )));
        }
        for other in properties {
            self.axiom(&format!(
                "DisjointObjectProperties( {} {} )",
                iri(&property.iri()),
                iri(&other.iri())
            ))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wdc_model::ItemIdValue;

    fn property(id: &str) -> PropertyIdValue {
        PropertyIdValue::new(id).unwrap()
    }

    fn document(emit: impl FnOnce(&mut Owl2FunctionalFormat<Vec<u8>>)) -> String {
        let mut sink = Owl2FunctionalFormat::new(Vec::new());
        sink.start().unwrap();
        emit(&mut sink);
        sink.finish().unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn one_of_items_in_source_order() {
        let values = OneOfValues::Items {
            items: vec![
                ItemIdValue::new("Q5").unwrap(),
                ItemIdValue::new("Q6").unwrap(),
            ],
        };
        let doc = document(|sink| sink.one_of(&property("P31"), &values).unwrap());
        assert!(doc.contains(
            "ObjectPropertyRange( <http://www.wikidata.org/entity/P31> \
             ObjectOneOf( <http://www.wikidata.org/entity/Q5> <http://www.wikidata.org/entity/Q6> ) )"
        ));
        assert!(doc.starts_with("Prefix("));
        assert!(doc.trim_end().ends_with(')'));
    }

    #[test]
    fn empty_enumeration_is_rejected_not_io() {
        let mut sink = Owl2FunctionalFormat::new(Vec::new());
        sink.start().unwrap();
        let err = sink
            .one_of(&property("P31"), &OneOfValues::Items { items: vec![] })
            .unwrap_err();
        assert!(!err.is_fatal());
    }

    #[test]
    fn quantity_enumeration_uses_decimal_literals() {
        let values = OneOfValues::Quantities {
            quantities: vec![wdc_model::QuantityValue::new("2.5").unwrap()],
        };
        let doc = document(|sink| sink.one_of(&property("P1082"), &values).unwrap());
        assert!(doc.contains("DataOneOf( \"2.5\"^^<http://www.w3.org/2001/XMLSchema#decimal> )"));
    }

    #[test]
    fn annotation_comment_is_a_quoted_literal() {
        let doc = document(|sink| {
            sink.annotation_comment(&property("P31"), "raw {{text}}").unwrap()
        });
        assert!(doc.contains("AnnotationAssertion("));
        assert!(doc.contains("\"raw {{text}}\""));
    }
}
