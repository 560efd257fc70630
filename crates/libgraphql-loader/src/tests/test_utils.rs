use crate::ast;
use crate::Resolver;

/// A [`Resolver`] whose procedure is just its own name.
pub(crate) fn resolver(name: &str) -> Resolver {
    Resolver::new(name, name.to_string())
}

pub(crate) fn parse_sdl(sdl: &str) -> ast::schema::Document {
    if sdl.trim().is_empty() {
        return graphql_parser::schema::Document { definitions: vec![] };
    }
    graphql_parser::schema::parse_schema::<String>(sdl)
        .expect("merged type definitions should always re-parse")
        .into_static()
}

pub(crate) fn type_def(
    sdl: &str,
    type_name: &str,
) -> Option<ast::schema::TypeDefinition> {
    parse_sdl(sdl).definitions.into_iter().find_map(|def| match def {
        ast::schema::Definition::TypeDefinition(type_def)
            if type_def_name(&type_def) == type_name => Some(type_def),
        _ => None,
    })
}

pub(crate) fn type_names(sdl: &str) -> Vec<String> {
    parse_sdl(sdl).definitions.iter().filter_map(|def| match def {
        ast::schema::Definition::TypeDefinition(type_def) =>
            Some(type_def_name(type_def).to_string()),
        _ => None,
    }).collect()
}

/// Field names of the object type named `type_name`, in declaration order.
pub(crate) fn object_field_names(sdl: &str, type_name: &str) -> Vec<String> {
    match type_def(sdl, type_name) {
        Some(ast::schema::TypeDefinition::Object(obj)) =>
            obj.fields.into_iter().map(|field| field.name).collect(),
        other => panic!("`{type_name}` is not an object type: {other:#?}"),
    }
}

fn type_def_name(type_def: &ast::schema::TypeDefinition) -> &str {
    use ast::schema::TypeDefinition;
    match type_def {
        TypeDefinition::Enum(t) => t.name.as_str(),
        TypeDefinition::InputObject(t) => t.name.as_str(),
        TypeDefinition::Interface(t) => t.name.as_str(),
        TypeDefinition::Object(t) => t.name.as_str(),
        TypeDefinition::Scalar(t) => t.name.as_str(),
        TypeDefinition::Union(t) => t.name.as_str(),
    }
}
