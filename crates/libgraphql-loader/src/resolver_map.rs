use crate::OperationKind;
use crate::Resolver;
use crate::ResolverEntry;
use indexmap::IndexMap;

/// An ordered mapping from names to [`ResolverEntry`]s.
///
/// The top level of a module's resolver map is keyed by root operation name
/// (see [`OperationKind`]), each mapping field names to their [`Resolver`]:
///
/// ```
/// # use libgraphql_loader::OperationKind;
/// # use libgraphql_loader::Resolver;
/// # use libgraphql_loader::ResolverMap;
/// let resolvers = ResolverMap::new()
///     .with_field(OperationKind::Query, "me", Resolver::new("me", || "me"));
///
/// assert_eq!(
///     resolvers.field(OperationKind::Query, "me").map(|r| r.name()),
///     Some("me"),
/// );
/// ```
///
/// Maps that have been namespaced by [`Loader::wrap()`](crate::Loader::wrap)
/// carry one additional level of nesting above the root operations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolverMap {
    entries: IndexMap<String, ResolverEntry>,
}
impl ResolverMap {
    pub fn entry(
        &mut self,
        key: impl Into<String>,
    ) -> indexmap::map::Entry<'_, String, ResolverEntry> {
        self.entries.entry(key.into())
    }

    /// Looks up the [`Resolver`] for `field_name` under the `operation` root.
    pub fn field(
        &self,
        operation: OperationKind,
        field_name: &str,
    ) -> Option<&Resolver> {
        self.operation(operation)?
            .get(field_name)?
            .as_field()
    }

    pub fn get(&self, key: &str) -> Option<&ResolverEntry> {
        self.entries.get(key)
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        entry: impl Into<ResolverEntry>,
    ) -> Option<ResolverEntry> {
        self.entries.insert(key.into(), entry.into())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ResolverEntry)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Produces a map whose sole key is `namespace`, holding `inner`
    /// unchanged.
    pub fn namespaced(namespace: impl Into<String>, inner: ResolverMap) -> Self {
        Self {
            entries: IndexMap::from([(
                namespace.into(),
                ResolverEntry::Nested(inner),
            )]),
        }
    }

    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// The field resolvers registered under the `operation` root, if any.
    pub fn operation(&self, operation: OperationKind) -> Option<&ResolverMap> {
        self.get(operation.as_str())?.as_nested()
    }

    /// Registers `resolver` for `field_name` under the `operation` root,
    /// replacing whatever was registered there before.
    pub fn with_field(
        mut self,
        operation: OperationKind,
        field_name: impl Into<String>,
        resolver: Resolver,
    ) -> Self {
        let op_entry = self.entries
            .entry(operation.as_str().to_string())
            .or_insert_with(|| ResolverEntry::Nested(ResolverMap::new()));

        if let ResolverEntry::Nested(fields) = op_entry {
            fields.insert(field_name, resolver);
        } else {
            *op_entry = ResolverEntry::Nested(
                ResolverMap::new().with_entry(field_name, resolver),
            );
        }

        self
    }

    pub fn with_entry(
        mut self,
        key: impl Into<String>,
        entry: impl Into<ResolverEntry>,
    ) -> Self {
        self.insert(key, entry);
        self
    }
}
impl std::iter::FromIterator<(String, ResolverEntry)> for ResolverMap {
    fn from_iter<T: IntoIterator<Item = (String, ResolverEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
impl std::iter::IntoIterator for ResolverMap {
    type Item = (String, ResolverEntry);
    type IntoIter = indexmap::map::IntoIter<String, ResolverEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
