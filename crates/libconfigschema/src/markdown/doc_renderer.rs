use crate::directives::KnownDirective;
use crate::markdown::DocFragment;
use crate::types::FieldDefinition;
use crate::types::ObjectType;
use crate::types::TypeDefinition;
use crate::types::TypeReference;
use crate::TypeGraph;

const INDENT: &str = "  ";

/// Renders `@md`-annotated object types as nested Markdown bullet lists.
///
/// Unlike the JSON Schema output, object-typed fields are expanded inline.
/// The renderer tracks the chain of types currently being expanded; a field
/// that would re-enter a type on that chain is rendered as a single line
/// pointing back at it, so cyclic types still produce finite documents.
#[derive(Clone, Copy, Debug)]
pub struct DocRenderer<'graph> {
    graph: &'graph TypeGraph,
}
impl<'graph> DocRenderer<'graph> {
    pub fn new(graph: &'graph TypeGraph) -> Self {
        Self { graph }
    }

    /// One fragment per object type carrying `@md`, in declaration order.
    pub fn render(&self) -> Vec<DocFragment> {
        let fragments = self.graph.object_types()
            .filter(|obj_type| obj_type.has_directive(KnownDirective::Markdown))
            .map(|obj_type| self.render_type(obj_type))
            .collect::<Vec<_>>();
        log::debug!("Rendered {} Markdown document(s).", fragments.len());
        fragments
    }

    /// Render a single object type, whether or not it carries `@md`.
    pub fn render_type(&self, obj_type: &'graph ObjectType) -> DocFragment {
        let mut content = String::new();
        if let Some(description) = obj_type.description() {
            content.push_str(description);
            content.push_str("\n\n");
        }

        let mut ancestors = vec![obj_type.name()];
        self.write_fields(&mut content, obj_type, 0, &mut ancestors);

        log::trace!("Rendered Markdown for `{}`.", obj_type.name());
        DocFragment::for_type(obj_type.name(), content)
    }

    /// The inline type annotation for a field type: `Array<..>` for lists,
    /// `object`, `one of`, `String (A | B)` for enums, or the type's name.
    pub fn annotation(&self, type_ref: &TypeReference) -> String {
        match type_ref {
            TypeReference::List(inner) => format!("Array<{}>", self.annotation(inner)),
            TypeReference::Required(inner) => self.annotation(inner),
            TypeReference::Named(type_name) => self.named_annotation(type_name),
        }
    }

    fn named_annotation(&self, type_name: &str) -> String {
        match self.graph.get_type(type_name) {
            Some(TypeDefinition::Enum(enum_type)) =>
                format!("String ({})", enum_type.value_names().join(" | ")),
            Some(TypeDefinition::Object(_)) => "object".to_string(),
            Some(TypeDefinition::Union(_)) => "one of".to_string(),
            Some(TypeDefinition::Interface(_))
            | Some(TypeDefinition::Scalar(_))
            | None => type_name.to_string(),
        }
    }

    fn write_fields(
        &self,
        out: &mut String,
        obj_type: &'graph ObjectType,
        depth: usize,
        ancestors: &mut Vec<&'graph str>,
    ) {
        for field in obj_type.fields().values() {
            self.write_field(out, field, depth, ancestors);
        }
    }

    fn write_field(
        &self,
        out: &mut String,
        field: &'graph FieldDefinition,
        depth: usize,
        ancestors: &mut Vec<&'graph str>,
    ) {
        let resolved = field.type_ref().resolve();
        out.push_str(&format!(
            "{}* `{}` (type: `{}`{})",
            INDENT.repeat(depth),
            field.name(),
            self.annotation(field.type_ref()),
            if resolved.is_required { ", required" } else { "" },
        ));
        if let Some(description) = field.description() {
            out.push_str(" - ");
            out.push_str(&collapse_whitespace_lines(description));
        }
        self.write_expansion(out, resolved.base_name, depth + 1, ancestors);
    }

    /// Finishes the current line, then expands object and union types as a
    /// nested block at `depth`.
    fn write_expansion(
        &self,
        out: &mut String,
        type_name: &str,
        depth: usize,
        ancestors: &mut Vec<&'graph str>,
    ) {
        let Some(type_def) = self.graph.get_type(type_name) else {
            out.push('\n');
            return;
        };

        let expandable = matches!(
            type_def,
            TypeDefinition::Object(_) | TypeDefinition::Union(_),
        );
        if !expandable {
            out.push('\n');
            return;
        }

        if ancestors.contains(&type_def.name()) {
            out.push_str(&format!(" (recursive, see `{}` above)\n", type_def.name()));
            return;
        }

        out.push_str(":\n");
        ancestors.push(type_def.name());
        match type_def {
            TypeDefinition::Object(obj_type) =>
                self.write_fields(out, obj_type, depth, ancestors),

            TypeDefinition::Union(union_type) => {
                for member_name in union_type.member_type_names() {
                    self.write_union_member(out, member_name, depth, ancestors);
                }
            },

            _ => (),
        }
        ancestors.pop();
    }

    fn write_union_member(
        &self,
        out: &mut String,
        member_name: &str,
        depth: usize,
        ancestors: &mut Vec<&'graph str>,
    ) {
        let indent = INDENT.repeat(depth);
        match self.graph.get_type(member_name) {
            Some(TypeDefinition::Object(_) | TypeDefinition::Union(_)) => {
                out.push_str(&format!(
                    "{indent}* `{}` (`{member_name}`)",
                    self.named_annotation(member_name),
                ));
                self.write_expansion(out, member_name, depth + 1, ancestors);
            },

            _ => {
                out.push_str(&format!(
                    "{indent}* `{}`\n",
                    self.named_annotation(member_name),
                ));
            },
        }
    }
}

/// Joins the non-blank lines of `text`, trimmed, with single spaces.
fn collapse_whitespace_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
