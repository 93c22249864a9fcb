//! RDF/XML sink.
//!
//! Emits the triple-based equivalent of the OWL 2 functional sink's axioms,
//! one self-contained description block per emission. Enumerations are
//! encoded as RDF collections (items) or `rdf:List` chains (literals), both
//! preserving source order.

use std::io::Write;

use wdc_model::{iris, OneOfValues, PropertyIdValue};

use super::{RenderError, RendererFormat};

const OWL_INVERSE_FUNCTIONAL: &str = "http://www.w3.org/2002/07/owl#InverseFunctionalProperty";
const OWL_SYMMETRIC: &str = "http://www.w3.org/2002/07/owl#SymmetricProperty";
const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
const XSD_NON_NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";

/// A [`RendererFormat`] producing an RDF/XML document.
pub struct RdfXmlFormat<W: Write> {
    writer: W,
}

impl<W: Write> RdfXmlFormat<W> {
    /// Creates a sink over the given writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn block(&mut self, xml: &str) -> Result<(), RenderError> {
        writeln!(self.writer, "{}", xml)?;
        Ok(())
    }
}

/// Escapes text for XML attribute and element content.
fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// An `rdf:List` chain of typed decimal literals, innermost-last.
fn decimal_list(lexicals: &[&str], indent: usize) -> String {
    let pad = " ".repeat(indent);
    match lexicals {
        [] => format!("{}<rdf:Description rdf:about=\"{}\"/>", pad, RDF_NIL),
        [first, rest @ ..] => format!(
            "{pad}<rdf:List>\n{pad}  <rdf:first rdf:datatype=\"{dt}\">{value}</rdf:first>\n{pad}  <rdf:rest>\n{inner}\n{pad}  </rdf:rest>\n{pad}</rdf:List>",
            pad = pad,
            dt = iris::XSD_DECIMAL,
            value = xml_escape(first),
            inner = if rest.is_empty() {
                format!("{}    <rdf:Description rdf:about=\"{}\"/>", pad, RDF_NIL)
            } else {
                decimal_list(rest, indent + 4)
            },
        ),
    }
}

impl<W: Write> RendererFormat for RdfXmlFormat<W> {
    fn start(&mut self) -> Result<(), RenderError> {
        writeln!(self.writer, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        writeln!(
            self.writer,
            "<rdf:RDF xmlns:rdf=\"{}\"\n         xmlns:rdfs=\"{}\"\n         xmlns:owl=\"{}\"\n         xmlns:xsd=\"{}\">",
            iris::RDF,
            iris::RDFS,
            iris::OWL,
            iris::XSD
        )?;
        writeln!(
            self.writer,
            "  <owl:Ontology rdf:about=\"{}\"/>",
            iris::CONSTRAINTS_ONTOLOGY
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        writeln!(self.writer, "</rdf:RDF>")?;
        self.writer.flush()?;
        Ok(())
    }

    fn annotation_comment(
        &mut self,
        property: &PropertyIdValue,
        text: &str,
    ) -> Result<(), RenderError> {
        // Caller escapes per the annotation escape table; the result is
        // already XML-safe, so it is written verbatim.
        self.block(&format!(
            "  <rdf:Description rdf:about=\"{}\">\n    <rdfs:comment>{}</rdfs:comment>\n  </rdf:Description>",
            property.iri(),
            text
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
                let members: String = items
                    .iter()
                    .map(|q| format!("          <rdf:Description rdf:about=\"{}\"/>\n", q.iri()))
                    .collect();
                self.block(&format!(
                    "  <rdf:Description rdf:about=\"{}\">\n    <rdfs:range>\n      <owl:Class>\n        <owl:oneOf rdf:parseType=\"Collection\">\n{}        </owl:oneOf>\n      </owl:Class>\n    </rdfs:range>\n  </rdf:Description>",
                    property.iri(),
                    members
                ))
            }
            OneOfValues::Quantities { quantities } => {
                if quantities.is_empty() {
                    return Err(RenderError::Rejected(format!(
                        "empty quantity enumeration for {}",
                        property
                    )));
                }
                let lexicals: Vec<&str> =
                    quantities.iter().map(|q| q.lexical()).collect();
                self.block(&format!(
                    "  <rdf:Description rdf:about=\"{}\">\n    <rdfs:range>\n      <rdfs:Datatype>\n        <owl:oneOf>\n{}\n        </owl:oneOf>\n      </rdfs:Datatype>\n    </rdfs:range>\n  </rdf:Description>",
                    property.iri(),
                    decimal_list(&lexicals, 10)
                ))
            }
        }
    }

    fn format(&mut self, property: &PropertyIdValue, pattern: &str) -> Result<(), RenderError> {
        self.block(&format!(
            "  <rdf:Description rdf:about=\"{about}\">\n    <rdfs:range>\n      <rdfs:Datatype>\n        <owl:onDatatype rdf:resource=\"{string}\"/>\n        <owl:withRestrictions rdf:parseType=\"Collection\">\n          <rdf:Description>\n            <xsd:pattern rdf:datatype=\"{string}\">{pattern}</xsd:pattern>\n          </rdf:Description>\n        </owl:withRestrictions>\n      </rdfs:Datatype>\n    </rdfs:range>\n  </rdf:Description>",
            about = property.iri(),
            string = iris::XSD_STRING,
            pattern = xml_escape(pattern)
        ))
    }

    fn range(
        &mut self,
        property: &PropertyIdValue,
        min: &str,
        max: &str,
    ) -> Result<(), RenderError> {
        self.block(&format!(
            "  <rdf:Description rdf:about=\"{about}\">\n    <rdfs:range>\n      <rdfs:Datatype>\n        <owl:onDatatype rdf:resource=\"{decimal}\"/>\n        <owl:withRestrictions rdf:parseType=\"Collection\">\n          <rdf:Description>\n            <xsd:minInclusive rdf:datatype=\"{decimal}\">{min}</xsd:minInclusive>\n          </rdf:Description>\n          <rdf:Description>\n            <xsd:maxInclusive rdf:datatype=\"{decimal}\">{max}</xsd:maxInclusive>\n          </rdf:Description>\n        </owl:withRestrictions>\n      </rdfs:Datatype>\n    </rdfs:range>\n  </rdf:Description>",
            about = property.iri(),
            decimal = iris::XSD_DECIMAL,
            min = xml_escape(min),
            max = xml_escape(max)
        ))
    }

    fn single_value(&mut self, property: &PropertyIdValue) -> Result<(), RenderError> {
        self.block(&format!(
            "  <rdf:Description rdf:about=\"{thing}\">\n    <rdfs:subClassOf>\n      <owl:Restriction>\n        <owl:onProperty rdf:resource=\"{about}\"/>\n        <owl:maxCardinality rdf:datatype=\"{nni}\">1</owl:maxCardinality>\n      </owl:Restriction>\n    </rdfs:subClassOf>\n  </rdf:Description>",
            thing = iris::OWL_THING,
            about = property.iri(),
            nni = XSD_NON_NEGATIVE_INTEGER
        ))
    }

    fn unique_value(&mut self, property: &PropertyIdValue) -> Result<(), RenderError> {
        self.block(&format!(
            "  <rdf:Description rdf:about=\"{}\">\n    <rdf:type rdf:resource=\"{}\"/>\n  </rdf:Description>",
            property.iri(),
            OWL_INVERSE_FUNCTIONAL
        ))
    }

    fn multi_value(&mut self, property: &PropertyIdValue) -> Result<(), RenderError> {
        self.block(&format!(
            "  <owl:Restriction>\n    <owl:onProperty rdf:resource=\"{about}\"/>\n    <owl:someValuesFrom rdf:resource=\"{thing}\"/>\n    <rdfs:subClassOf>\n      <owl:Restriction>\n        <owl:onProperty rdf:resource=\"{about}\"/>\n        <owl:minCardinality rdf:datatype=\"{nni}\">2</owl:minCardinality>\n      </owl:Restriction>\n    </rdfs:subClassOf>\n  </owl:Restriction>",
            about = property.iri(),
            thing = iris::OWL_THING,
            nni = XSD_NON_NEGATIVE_INTEGER
        ))
    }

    fn symmetric(&mut self, property: &PropertyIdValue) -> Result<(), RenderError> {
        self.block(&format!(
            "  <rdf:Description rdf:about=\"{}\">\n    <rdf:type rdf:resource=\"{}\"/>\n  </rdf:Description>",
            property.iri(),
            OWL_SYMMETRIC
        ))
    }

    fn inverse(
        &mut self,
        property: &PropertyIdValue,
        inverse: &PropertyIdValue,
    ) -> Result<(), RenderError> {
        self.block(&format!(
            "  <rdf:Description rdf:about=\"{}\">\n    <owl:inverseOf rdf:resource=\"{}\"/>\n  </rdf:Description>",
            property.iri(),
            inverse.iri()
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
        let disjoints: String = properties
            .iter()
            .map(|p| format!("    <owl:propertyDisjointWith rdf:resource=\"{}\"/>\n", p.iri()))
            .collect();
        self.block(&format!(
            "  <rdf:Description rdf:about=\"{}\">\n{}  </rdf:Description>",
            property.iri(),
            disjoints
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wdc_model::{ItemIdValue, QuantityValue};

    fn property(id: &str) -> PropertyIdValue {
        PropertyIdValue::new(id).unwrap()
    }

    fn document(emit: impl FnOnce(&mut RdfXmlFormat<Vec<u8>>)) -> String {
        let mut sink = RdfXmlFormat::new(Vec::new());
        sink.start().unwrap();
        emit(&mut sink);
        sink.finish().unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn document_brackets() {
        let doc = document(|_| {});
        assert!(doc.starts_with("<?xml"));
        assert!(doc.contains("<rdf:RDF"));
        assert!(doc.trim_end().ends_with("</rdf:RDF>"));
    }

    #[test]
    fn item_enumeration_is_an_ordered_collection() {
        let values = OneOfValues::Items {
            items: vec![
                ItemIdValue::new("Q5").unwrap(),
                ItemIdValue::new("Q6").unwrap(),
            ],
        };
        let doc = document(|sink| sink.one_of(&property("P31"), &values).unwrap());
        let q5 = doc.find("entity/Q5").unwrap();
        let q6 = doc.find("entity/Q6").unwrap();
        assert!(q5 < q6, "source order must be preserved");
        assert!(doc.contains("rdf:parseType=\"Collection\""));
    }

    #[test]
    fn quantity_enumeration_is_a_literal_list() {
        let values = OneOfValues::Quantities {
            quantities: vec![
                QuantityValue::new("1").unwrap(),
                QuantityValue::new("2").unwrap(),
            ],
        };
        let doc = document(|sink| sink.one_of(&property("P1082"), &values).unwrap());
        assert!(doc.contains("<rdf:first rdf:datatype=\"http://www.w3.org/2001/XMLSchema#decimal\">1</rdf:first>"));
        assert!(doc.contains(">2</rdf:first>"));
        assert!(doc.contains(RDF_NIL));
    }

    #[test]
    fn pattern_text_is_xml_escaped() {
        let doc = document(|sink| {
            sink.format(&property("P213"), "a<b&\"c\"").unwrap();
        });
        assert!(doc.contains("a&lt;b&amp;&quot;c&quot;"));
    }
}
