use crate::ResolverMap;

/// The result of merging everything a [`Loader`](crate::Loader) has
/// accumulated: one type-definition document and one [`ResolverMap`].
///
/// This is recomputed on every call to
/// [`Loader::get_schema()`](crate::Loader::get_schema) and never cached.
#[derive(Clone, Debug, PartialEq)]
pub struct MergedSchema {
    pub(crate) resolvers: ResolverMap,
    pub(crate) type_defs: String,
}
impl MergedSchema {
    pub fn into_parts(self) -> (String, ResolverMap) {
        (self.type_defs, self.resolvers)
    }

    pub fn resolvers(&self) -> &ResolverMap {
        &self.resolvers
    }

    pub fn type_defs(&self) -> &str {
        self.type_defs.as_str()
    }
}
