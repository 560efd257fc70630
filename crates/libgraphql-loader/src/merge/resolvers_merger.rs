use crate::merge::SchemaMergeError;
use crate::ResolverMap;

/// Combines an ordered sequence of [`ResolverMap`]s into one.
///
/// Implementations are expected to let later maps override earlier ones for
/// the same path, which is why [`Loader`](crate::Loader) never reorders what
/// it accumulates.
pub trait ResolversMerger: std::fmt::Debug + Send + Sync {
    fn merge_resolvers(
        &self,
        resolvers: &[ResolverMap],
    ) -> Result<ResolverMap, SchemaMergeError>;
}
