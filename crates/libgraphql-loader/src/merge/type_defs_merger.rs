use crate::merge::MergeTypeDefsConfig;
use crate::merge::SchemaMergeError;

/// Combines an ordered sequence of type-definition strings into a single
/// type-definition document.
pub trait TypeDefsMerger: std::fmt::Debug + Send + Sync {
    fn merge_type_defs(
        &self,
        type_defs: &[String],
        config: &MergeTypeDefsConfig,
    ) -> Result<String, SchemaMergeError>;
}
