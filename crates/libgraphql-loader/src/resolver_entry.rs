use crate::Resolver;
use crate::ResolverMap;

/// A single value in a [`ResolverMap`]: either a field's [`Resolver`] or a
/// nested [`ResolverMap`] (a root operation's fields, or a namespace produced
/// by [`Loader::wrap()`](crate::Loader::wrap)).
#[derive(Clone, Debug, PartialEq)]
pub enum ResolverEntry {
    Field(Resolver),
    Nested(ResolverMap),
}
impl ResolverEntry {
    pub fn as_field(&self) -> Option<&Resolver> {
        if let Self::Field(resolver) = self {
            Some(resolver)
        } else {
            None
        }
    }

    pub fn as_nested(&self) -> Option<&ResolverMap> {
        if let Self::Nested(map) = self {
            Some(map)
        } else {
            None
        }
    }
}
impl std::convert::From<Resolver> for ResolverEntry {
    fn from(resolver: Resolver) -> Self {
        Self::Field(resolver)
    }
}
impl std::convert::From<ResolverMap> for ResolverEntry {
    fn from(map: ResolverMap) -> Self {
        Self::Nested(map)
    }
}
