use crate::OperationKind;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaMergeError {
    #[error(
        "Two definitions of `{type_name}.{field_name}` disagree on its type \
        (`{type1}` vs `{type2}`)"
    )]
    ConflictingFieldTypes {
        type_name: String,
        field_name: String,
        type1: String,
        type2: String,
    },

    #[error(
        "The {operation} operation was declared with two different root types \
        (`{type_name1}` and `{type_name2}`)"
    )]
    ConflictingOperationTypes {
        operation: OperationKind,
        type_name1: String,
        type_name2: String,
    },

    #[error("`{type_name}` was declared as both {kind1} and {kind2}")]
    ConflictingTypeKinds {
        type_name: String,
        kind1: &'static str,
        kind2: &'static str,
    },

    #[error("{0}")]
    Custom(String),

    #[error("Error parsing type definitions from `{source_name}`: {err}")]
    ParseError {
        source_name: String,
        err: String,
    },
}
