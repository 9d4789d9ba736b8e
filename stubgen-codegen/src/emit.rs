//! Rendering of file models into generated text.

use eyre::{Result, bail};

use crate::{
    builder::{CodeBuilder, Indent},
    model::FileModel,
    options::GeneratorOptions,
};

/// Render one file model into generated source text.
///
/// The layout is fixed: header comment, optional namespace declaration,
/// partial-type openings outermost to innermost, one stub per method with
/// the boilerplate attribute lines, then matching closings innermost to
/// outermost. Braces are balanced for any non-empty type chain.
pub fn render_file(model: &FileModel, options: &GeneratorOptions) -> Result<String> {
    if model.type_chain.is_empty() {
        bail!("file model `{}` has no enclosing type", model.key());
    }

    let mut builder = CodeBuilder::new(Indent::CSHARP);
    builder.push_line("// <auto-generated />");
    builder.push_line("#pragma warning disable CS1066");

    if let Some(namespace) = &model.namespace {
        builder.push_line(&format!("namespace {namespace};"));
        builder.push_blank();
    }

    for type_name in &model.type_chain {
        builder.push_line(&format!("public partial class {type_name}"));
        builder.push_line("{");
        builder.push_indent();
    }

    for method in &model.methods {
        for attribute in &options.stub_attributes {
            builder.push_line(&format!("[{attribute}]"));
        }
        let params = method
            .params
            .iter()
            .map(|p| p.render())
            .collect::<Vec<_>>()
            .join(", ");
        builder.push_line(&format!(
            "public partial {} {}({});",
            method.return_type, method.name, params
        ));
    }

    for _ in &model.type_chain {
        builder.push_dedent();
        builder.push_line("}");
    }

    Ok(builder.build())
}

/// The declaration of the marker attribute itself, as a `(name, text)` pair.
///
/// Hosts register this once, independent of any evaluation, so the marker is
/// always resolvable in the compilation the generator runs against.
pub fn marker_attribute_source(options: &GeneratorOptions) -> (String, String) {
    let marker = options.marker_attribute.as_str();
    let (namespace, type_name) = match marker.rsplit_once('.') {
        Some((namespace, type_name)) => (Some(namespace), type_name),
        None => (None, marker),
    };

    let mut builder = CodeBuilder::new(Indent::CSHARP);
    builder.push_line("// <auto-generated />");
    builder.push_blank();
    if let Some(namespace) = namespace {
        builder.push_line(&format!("namespace {namespace};"));
        builder.push_blank();
    }
    builder.push_line("[System.AttributeUsage(System.AttributeTargets.Method)]");
    builder.push_line(&format!("public class {type_name} : System.Attribute"));
    builder.push_line("{");
    builder.push_line("}");

    let name = format!("{}.g.{}", marker, options.extension);
    (name, builder.build())
}
