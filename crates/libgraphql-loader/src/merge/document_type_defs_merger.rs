use crate::ast;
use crate::merge::MergeTypeDefsConfig;
use crate::merge::SchemaMergeError;
use crate::merge::TypeDefsMerger;
use crate::OperationKind;
use indexmap::IndexMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SchemaMergeError>;

/// Merges type-definition strings by parsing each one with `graphql_parser`
/// and folding same-named definitions together.
///
/// * Same-named types of the same kind are combined: fields, input fields,
///   enum values, union members, implemented interfaces and directives are
///   unioned by name, and the first description wins. Two declarations of the
///   same field must agree on its type.
/// * `extend` definitions are folded into their base type once every string
///   has been visited. An extension with no base type becomes the definition.
/// * `schema { ... }` blocks are combined, but each root operation may only
///   ever name one type.
/// * The first definition of a given directive wins.
///
/// Output is printed by `graphql_parser` in first-declaration order: the
/// schema block (if any was declared), then directive definitions, then type
/// definitions.
#[derive(Clone, Debug, Default)]
pub struct DocumentTypeDefsMerger;
impl TypeDefsMerger for DocumentTypeDefsMerger {
    fn merge_type_defs(
        &self,
        type_defs: &[String],
        config: &MergeTypeDefsConfig,
    ) -> Result<String> {
        let mut doc_builder = MergedDocumentBuilder::default();
        let mut type_extensions = vec![];

        for (idx, type_def) in type_defs.iter().enumerate() {
            let source_name = format!("str://{idx}");
            if type_def.trim().is_empty() {
                log::trace!("Skipping blank type definitions at `{source_name}`.");
                continue;
            }

            let ast_doc =
                graphql_parser::schema::parse_schema::<String>(type_def)
                    .map_err(|err| SchemaMergeError::ParseError {
                        source_name,
                        err: err.to_string(),
                    })?.into_static();

            for def in ast_doc.definitions {
                use ast::schema::Definition;
                match def {
                    Definition::SchemaDefinition(schema_def) =>
                        doc_builder.visit_schema_def(schema_def)?,
                    Definition::TypeDefinition(type_def) =>
                        doc_builder.visit_type_def(type_def)?,
                    Definition::TypeExtension(type_ext) =>
                        type_extensions.push(type_ext),
                    Definition::DirectiveDefinition(directive_def) =>
                        doc_builder.visit_directive_def(directive_def),
                }
            }
        }

        // Extensions may precede the definition they extend, so they're only
        // applied once every base definition is known.
        for type_ext in type_extensions {
            doc_builder.visit_type_def(type_extension_into_def(type_ext))?;
        }

        if !config.all {
            doc_builder.prune_unreachable_types();
        }

        let document = doc_builder.into_document();
        if document.definitions.is_empty() {
            return Ok(String::new());
        }
        Ok(document.to_string())
    }
}

#[derive(Debug, Default)]
struct MergedDocumentBuilder {
    directive_defs: IndexMap<String, ast::schema::DirectiveDefinition>,
    schema_def: Option<ast::schema::SchemaDefinition>,
    types: IndexMap<String, ast::schema::TypeDefinition>,
}
impl MergedDocumentBuilder {
    fn into_document(self) -> ast::schema::Document {
        use graphql_parser::schema::Definition;

        let mut definitions = vec![];
        if let Some(schema_def) = self.schema_def {
            definitions.push(Definition::SchemaDefinition(schema_def));
        }
        definitions.extend(
            self.directive_defs.into_values().map(Definition::DirectiveDefinition),
        );
        definitions.extend(
            self.types.into_values().map(Definition::TypeDefinition),
        );

        graphql_parser::schema::Document { definitions }
    }

    /// Removes every type that can't be reached from a root operation type
    /// (or from a directive definition's arguments).
    fn prune_unreachable_types(&mut self) {
        let mut pending = self.root_type_names();
        for directive_def in self.directive_defs.values() {
            pending.extend(directive_def.arguments.iter().map(
                |arg| named_type(&arg.value_type).to_string(),
            ));
        }

        let mut reachable = HashSet::new();
        while let Some(type_name) = pending.pop() {
            if !reachable.insert(type_name.clone()) {
                continue;
            }

            if let Some(type_def) = self.types.get(&type_name) {
                pending.extend(referenced_type_names(type_def));
            }

            // Implementations of a reachable interface are its possible
            // runtime types.
            pending.extend(
                self.types.iter()
                    .filter(|(_, type_def)| {
                        implemented_interfaces(type_def).contains(&type_name)
                    })
                    .map(|(name, _)| name.to_string()),
            );
        }

        let num_types = self.types.len();
        self.types.retain(|type_name, _| reachable.contains(type_name));
        log::debug!(
            "Pruned {} type definitions unreachable from a root operation type.",
            num_types - self.types.len(),
        );
    }

    fn root_type_names(&self) -> Vec<String> {
        if let Some(schema_def) = &self.schema_def {
            [&schema_def.query, &schema_def.mutation, &schema_def.subscription]
                .into_iter()
                .flatten()
                .cloned()
                .collect()
        } else {
            OperationKind::ALL.iter()
                .map(|op| op.as_str().to_string())
                .collect()
        }
    }

    fn visit_directive_def(
        &mut self,
        directive_def: ast::schema::DirectiveDefinition,
    ) {
        if self.directive_defs.contains_key(&directive_def.name) {
            log::trace!(
                "Ignoring redefinition of the `@{}` directive.",
                directive_def.name,
            );
            return;
        }
        self.directive_defs.insert(directive_def.name.to_string(), directive_def);
    }

    fn visit_schema_def(
        &mut self,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        if let Some(existing) = &mut self.schema_def {
            merge_root_type(OperationKind::Query, &mut existing.query, schema_def.query)?;
            merge_root_type(OperationKind::Mutation, &mut existing.mutation, schema_def.mutation)?;
            merge_root_type(OperationKind::Subscription, &mut existing.subscription, schema_def.subscription)?;
            merge_directives(&mut existing.directives, schema_def.directives);
        } else {
            self.schema_def = Some(schema_def);
        }
        Ok(())
    }

    fn visit_type_def(
        &mut self,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        let type_name = type_def_name(&type_def).to_string();
        if let Some(existing) = self.types.get_mut(&type_name) {
            merge_type_def(existing, type_def)
        } else {
            self.types.insert(type_name, type_def);
            Ok(())
        }
    }
}

fn implemented_interfaces(type_def: &ast::schema::TypeDefinition) -> &[String] {
    use ast::schema::TypeDefinition;
    match type_def {
        TypeDefinition::Interface(iface) => iface.implements_interfaces.as_slice(),
        TypeDefinition::Object(obj) => obj.implements_interfaces.as_slice(),
        TypeDefinition::Enum(_)
        | TypeDefinition::InputObject(_)
        | TypeDefinition::Scalar(_)
        | TypeDefinition::Union(_) => &[],
    }
}

fn merge_description(existing: &mut Option<String>, incoming: Option<String>) {
    if existing.is_none() {
        *existing = incoming;
    }
}

fn merge_directives(
    existing: &mut Vec<ast::schema::Directive>,
    incoming: Vec<ast::schema::Directive>,
) {
    for directive in incoming {
        if !existing.iter().any(|d| d.name == directive.name) {
            existing.push(directive);
        }
    }
}

fn merge_enum_values(
    existing: &mut Vec<ast::schema::EnumValue>,
    incoming: Vec<ast::schema::EnumValue>,
) {
    for value in incoming {
        if !existing.iter().any(|v| v.name == value.name) {
            existing.push(value);
        }
    }
}

fn merge_fields(
    type_name: &str,
    existing: &mut Vec<ast::schema::Field>,
    incoming: Vec<ast::schema::Field>,
) -> Result<()> {
    for field in incoming {
        if let Some(existing_field) = existing.iter_mut().find(|f| f.name == field.name) {
            if existing_field.field_type != field.field_type {
                return Err(SchemaMergeError::ConflictingFieldTypes {
                    type_name: type_name.to_string(),
                    type1: type_annotation_str(&existing_field.field_type),
                    type2: type_annotation_str(&field.field_type),
                    field_name: field.name,
                });
            }
            merge_description(&mut existing_field.description, field.description);
            merge_input_values(
                format!("{type_name}.{}", existing_field.name).as_str(),
                &mut existing_field.arguments,
                field.arguments,
            )?;
            merge_directives(&mut existing_field.directives, field.directives);
        } else {
            existing.push(field);
        }
    }
    Ok(())
}

fn merge_input_values(
    owner_name: &str,
    existing: &mut Vec<ast::schema::InputValue>,
    incoming: Vec<ast::schema::InputValue>,
) -> Result<()> {
    for input_value in incoming {
        if let Some(existing_value) = existing.iter_mut().find(|v| v.name == input_value.name) {
            if existing_value.value_type != input_value.value_type {
                return Err(SchemaMergeError::ConflictingFieldTypes {
                    type_name: owner_name.to_string(),
                    type1: type_annotation_str(&existing_value.value_type),
                    type2: type_annotation_str(&input_value.value_type),
                    field_name: input_value.name,
                });
            }
            merge_description(&mut existing_value.description, input_value.description);
            merge_directives(&mut existing_value.directives, input_value.directives);
        } else {
            existing.push(input_value);
        }
    }
    Ok(())
}

fn merge_names(existing: &mut Vec<String>, incoming: Vec<String>) {
    for name in incoming {
        if !existing.contains(&name) {
            existing.push(name);
        }
    }
}

fn merge_root_type(
    operation: OperationKind,
    existing: &mut Option<String>,
    incoming: Option<String>,
) -> Result<()> {
    let Some(incoming) = incoming else {
        return Ok(());
    };

    if let Some(existing_name) = existing.as_ref() {
        if *existing_name != incoming {
            return Err(SchemaMergeError::ConflictingOperationTypes {
                operation,
                type_name1: existing_name.to_string(),
                type_name2: incoming,
            });
        }
    } else {
        *existing = Some(incoming);
    }
    Ok(())
}

fn merge_type_def(
    existing: &mut ast::schema::TypeDefinition,
    incoming: ast::schema::TypeDefinition,
) -> Result<()> {
    use ast::schema::TypeDefinition;
    match (existing, incoming) {
        (TypeDefinition::Enum(existing), TypeDefinition::Enum(incoming)) => {
            merge_description(&mut existing.description, incoming.description);
            merge_directives(&mut existing.directives, incoming.directives);
            merge_enum_values(&mut existing.values, incoming.values);
            Ok(())
        },

        (TypeDefinition::InputObject(existing), TypeDefinition::InputObject(incoming)) => {
            merge_description(&mut existing.description, incoming.description);
            merge_directives(&mut existing.directives, incoming.directives);
            merge_input_values(&existing.name, &mut existing.fields, incoming.fields)
        },

        (TypeDefinition::Interface(existing), TypeDefinition::Interface(incoming)) => {
            merge_description(&mut existing.description, incoming.description);
            merge_names(&mut existing.implements_interfaces, incoming.implements_interfaces);
            merge_directives(&mut existing.directives, incoming.directives);
            merge_fields(&existing.name, &mut existing.fields, incoming.fields)
        },

        (TypeDefinition::Object(existing), TypeDefinition::Object(incoming)) => {
            merge_description(&mut existing.description, incoming.description);
            merge_names(&mut existing.implements_interfaces, incoming.implements_interfaces);
            merge_directives(&mut existing.directives, incoming.directives);
            merge_fields(&existing.name, &mut existing.fields, incoming.fields)
        },

        (TypeDefinition::Scalar(existing), TypeDefinition::Scalar(incoming)) => {
            merge_description(&mut existing.description, incoming.description);
            merge_directives(&mut existing.directives, incoming.directives);
            Ok(())
        },

        (TypeDefinition::Union(existing), TypeDefinition::Union(incoming)) => {
            merge_description(&mut existing.description, incoming.description);
            merge_directives(&mut existing.directives, incoming.directives);
            merge_names(&mut existing.types, incoming.types);
            Ok(())
        },

        (existing, incoming) => Err(SchemaMergeError::ConflictingTypeKinds {
            type_name: type_def_name(existing).to_string(),
            kind1: type_def_kind(existing),
            kind2: type_def_kind(&incoming),
        }),
    }
}

fn named_type(type_: &ast::schema::Type) -> &str {
    use ast::schema::Type;
    match type_ {
        Type::NamedType(name) => name.as_str(),
        Type::ListType(inner) | Type::NonNullType(inner) => named_type(inner),
    }
}

fn referenced_type_names(type_def: &ast::schema::TypeDefinition) -> Vec<String> {
    use ast::schema::TypeDefinition;

    fn field_type_names(fields: &[ast::schema::Field]) -> impl Iterator<Item = String> + '_ {
        fields.iter().flat_map(|field| {
            std::iter::once(named_type(&field.field_type).to_string()).chain(
                field.arguments.iter().map(|arg| named_type(&arg.value_type).to_string()),
            )
        })
    }

    match type_def {
        TypeDefinition::Enum(_) | TypeDefinition::Scalar(_) => vec![],

        TypeDefinition::InputObject(input_obj) => input_obj.fields.iter()
            .map(|field| named_type(&field.value_type).to_string())
            .collect(),

        TypeDefinition::Interface(iface) => iface.implements_interfaces.iter()
            .cloned()
            .chain(field_type_names(&iface.fields))
            .collect(),

        TypeDefinition::Object(obj) => obj.implements_interfaces.iter()
            .cloned()
            .chain(field_type_names(&obj.fields))
            .collect(),

        TypeDefinition::Union(union_) => union_.types.clone(),
    }
}

fn type_annotation_str(type_: &ast::schema::Type) -> String {
    use ast::schema::Type;
    match type_ {
        Type::NamedType(name) => name.to_string(),
        Type::ListType(inner) => format!("[{}]", type_annotation_str(inner)),
        Type::NonNullType(inner) => format!("{}!", type_annotation_str(inner)),
    }
}

fn type_def_kind(type_def: &ast::schema::TypeDefinition) -> &'static str {
    use ast::schema::TypeDefinition;
    match type_def {
        TypeDefinition::Enum(_) => "an enum type",
        TypeDefinition::InputObject(_) => "an input object type",
        TypeDefinition::Interface(_) => "an interface type",
        TypeDefinition::Object(_) => "an object type",
        TypeDefinition::Scalar(_) => "a scalar type",
        TypeDefinition::Union(_) => "a union type",
    }
}

fn type_def_name(type_def: &ast::schema::TypeDefinition) -> &str {
    use ast::schema::TypeDefinition;
    match type_def {
        TypeDefinition::Enum(enum_) => enum_.name.as_str(),
        TypeDefinition::InputObject(input_obj) => input_obj.name.as_str(),
        TypeDefinition::Interface(iface) => iface.name.as_str(),
        TypeDefinition::Object(obj) => obj.name.as_str(),
        TypeDefinition::Scalar(scalar) => scalar.name.as_str(),
        TypeDefinition::Union(union_) => union_.name.as_str(),
    }
}

fn type_extension_into_def(
    type_ext: ast::schema::TypeExtension,
) -> ast::schema::TypeDefinition {
    use ast::schema::TypeDefinition;
    use ast::schema::TypeExtension;
    match type_ext {
        TypeExtension::Enum(ext) => TypeDefinition::Enum(ast::schema::EnumType {
            position: ext.position,
            description: None,
            name: ext.name,
            directives: ext.directives,
            values: ext.values,
        }),

        TypeExtension::InputObject(ext) => TypeDefinition::InputObject(ast::schema::InputObjectType {
            position: ext.position,
            description: None,
            name: ext.name,
            directives: ext.directives,
            fields: ext.fields,
        }),

        TypeExtension::Interface(ext) => TypeDefinition::Interface(ast::schema::InterfaceType {
            position: ext.position,
            description: None,
            name: ext.name,
            implements_interfaces: ext.implements_interfaces,
            directives: ext.directives,
            fields: ext.fields,
        }),

        TypeExtension::Object(ext) => TypeDefinition::Object(ast::schema::ObjectType {
            position: ext.position,
            description: None,
            name: ext.name,
            implements_interfaces: ext.implements_interfaces,
            directives: ext.directives,
            fields: ext.fields,
        }),

        TypeExtension::Scalar(ext) => TypeDefinition::Scalar(ast::schema::ScalarType {
            position: ext.position,
            description: None,
            name: ext.name,
            directives: ext.directives,
        }),

        TypeExtension::Union(ext) => TypeDefinition::Union(ast::schema::UnionType {
            position: ext.position,
            description: None,
            name: ext.name,
            directives: ext.directives,
            types: ext.types,
        }),
    }
}
