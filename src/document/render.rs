use super::builder::ShaderDefinition;

/// Serialize a shader definition as the XML document the game's mod loader
/// expects: tab-indented, one element per line, with both shader sources
/// embedded verbatim inside CDATA blocks.
pub fn to_xml(def: &ShaderDefinition) -> String {
    let mut out = String::new();
    out.push_str("<shaders>\n");
    out.push_str(&format!("\t<shader name=\"{}\">\n", escape_attr(&def.name)));

    if def.parameters.is_empty() {
        out.push_str("\t\t<parameters/>\n");
    } else {
        out.push_str("\t\t<parameters>\n");
        for param in &def.parameters {
            out.push_str(&format!(
                "\t\t\t<param name=\"{}\" type=\"{}\"/>\n",
                escape_attr(&param.name),
                param.ty
            ));
        }
        out.push_str("\t\t</parameters>\n");
    }

    push_cdata(&mut out, "vertex", &def.vertex_source);
    push_cdata(&mut out, "fragment", &def.fragment_source);

    out.push_str("\t</shader>\n");
    out.push_str("</shaders>\n");
    out
}

/// Emit `<tag><![CDATA[...]]></tag>` with the source wrapped in a leading
/// and trailing newline, untouched otherwise.
fn push_cdata(out: &mut String, tag: &str, source: &str) {
    out.push_str(&format!("\t\t<{}><![CDATA[\n", tag));
    out.push_str(source);
    out.push_str(&format!("\n]]></{}>\n", tag));
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::types::{ParamType, Parameter};

    fn definition(name: &str, params: Vec<Parameter>) -> ShaderDefinition {
        ShaderDefinition {
            name: name.to_string(),
            vertex_source: "void main(){}".to_string(),
            fragment_source: "void main(){}".to_string(),
            parameters: params,
        }
    }

    #[test]
    fn renders_full_document() {
        let def = definition(
            "Test",
            vec![Parameter {
                name: "Speed".into(),
                ty: ParamType::Float,
            }],
        );

        let expected = concat!(
            "<shaders>\n",
            "\t<shader name=\"Test\">\n",
            "\t\t<parameters>\n",
            "\t\t\t<param name=\"Speed\" type=\"float\"/>\n",
            "\t\t</parameters>\n",
            "\t\t<vertex><![CDATA[\n",
            "void main(){}\n",
            "]]></vertex>\n",
            "\t\t<fragment><![CDATA[\n",
            "void main(){}\n",
            "]]></fragment>\n",
            "\t</shader>\n",
            "</shaders>\n",
        );
        assert_eq!(to_xml(&def), expected);
    }

    #[test]
    fn empty_parameter_list_keeps_element() {
        let def = definition("Test", Vec::new());
        let xml = to_xml(&def);

        assert!(xml.contains("\t\t<parameters/>\n"));
        assert!(!xml.contains("<param "));
    }

    #[test]
    fn preserves_parameter_order() {
        let def = definition(
            "Test",
            vec![
                Parameter {
                    name: "Center".into(),
                    ty: ParamType::Vec2,
                },
                Parameter {
                    name: "Tint".into(),
                    ty: ParamType::Vec4,
                },
                Parameter {
                    name: "Speed".into(),
                    ty: ParamType::Float,
                },
            ],
        );
        let xml = to_xml(&def);

        let center = xml.find("name=\"Center\" type=\"vec2\"").unwrap();
        let tint = xml.find("name=\"Tint\" type=\"vec4\"").unwrap();
        let speed = xml.find("name=\"Speed\" type=\"float\"").unwrap();
        assert!(center < tint && tint < speed);
    }

    #[test]
    fn escapes_attribute_values() {
        let def = definition(
            "A\"B&C",
            vec![Parameter {
                name: "x<y>z".into(),
                ty: ParamType::Float,
            }],
        );
        let xml = to_xml(&def);

        assert!(xml.contains("<shader name=\"A&quot;B&amp;C\">"));
        assert!(xml.contains("<param name=\"x&lt;y&gt;z\" type=\"float\"/>"));
    }

    #[test]
    fn cdata_content_is_not_escaped() {
        let mut def = definition("Test", Vec::new());
        def.vertex_source = "if (a < b && c > d) {}".to_string();
        let xml = to_xml(&def);

        assert!(xml.contains("<vertex><![CDATA[\nif (a < b && c > d) {}\n]]></vertex>"));
    }

    #[test]
    fn multiline_source_round_trips_between_newlines() {
        let mut def = definition("Test", Vec::new());
        def.fragment_source = "line one\n\tline two\nline three".to_string();
        let xml = to_xml(&def);

        let start = xml.find("<fragment><![CDATA[\n").unwrap() + "<fragment><![CDATA[\n".len();
        let end = xml.find("\n]]></fragment>").unwrap();
        assert_eq!(&xml[start..end], def.fragment_source);
    }
}
