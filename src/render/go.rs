//! Go struct renderer

use super::{markdown_stem, Renderer};
use crate::schema::{naming, Field, PrimitiveKind, RecordModel, ReferenceKind, TypeDescriptor};
use crate::types::Target;

/// Renders records as Go structs with `json` tags
#[derive(Debug, Clone, Copy, Default)]
pub struct GoRenderer;

impl GoRenderer {
    /// Go spelling of a type
    pub fn render_type(ty: &TypeDescriptor) -> String {
        match ty {
            TypeDescriptor::Primitive(kind) => match kind {
                PrimitiveKind::String => "string",
                PrimitiveKind::Integer => "int",
                PrimitiveKind::Float => "float64",
                PrimitiveKind::Boolean => "bool",
                PrimitiveKind::Timestamp => "time.Time",
                PrimitiveKind::Dynamic => "interface{}",
            }
            .to_string(),
            TypeDescriptor::Array(element) => format!("[]{}", Self::render_type(element)),
            TypeDescriptor::StringMap => "map[string]string".to_string(),
            TypeDescriptor::Reference { name, kind } => match kind {
                ReferenceKind::Record => format!("*{name}"),
                ReferenceKind::OneOf => name.clone(),
            },
        }
    }

    /// One struct member, preceded by a blank line and its doc comment
    fn render_field(field: &Field) -> String {
        let description = naming::description(&field.description);
        let doc = if description.is_empty() {
            String::new()
        } else {
            format!("\t// {description}\n")
        };
        let omit = if field.optional { ",omitempty" } else { "" };

        format!(
            "\n{doc}\t{} {} `json:\"{}{omit}\"`\n",
            naming::identifier(&field.name),
            Self::render_type(&field.field_type),
            field.name
        )
    }
}

impl Renderer for GoRenderer {
    fn target(&self) -> Target {
        Target::Go
    }

    fn render_record(&self, record: &RecordModel) -> String {
        let identifier = record.identifier();
        let fields: String = record.fields.iter().map(Self::render_field).collect();
        format!(
            "// {identifier}: {}\n// {}\ntype {identifier} struct {{{fields}}}",
            record.name, record.source_url
        )
    }

    fn wrap(&self, package: &str, records: &[RecordModel], body: &str) -> String {
        let imports = if records
            .iter()
            .any(|r| r.uses_primitive(PrimitiveKind::Timestamp))
        {
            "\n\nimport (\n\t\"time\"\n)"
        } else {
            ""
        };
        format!("package {package}{imports}\n{body}")
    }

    fn output_file_name(&self, markdown_name: &str) -> String {
        let stem = markdown_stem(markdown_name).to_lowercase().replace('_', "");
        format!("{stem}.go")
    }

    fn output_dir(&self) -> &'static str {
        "go"
    }
}
