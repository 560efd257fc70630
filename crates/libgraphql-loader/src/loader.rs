use crate::Fragment;
use crate::MergedSchema;
use crate::ResolverMap;
use crate::merge::DeepResolversMerger;
use crate::merge::DocumentTypeDefsMerger;
use crate::merge::MergeTypeDefsConfig;
use crate::merge::ResolversMerger;
use crate::merge::SchemaMergeError;
use crate::merge::TypeDefsMerger;

type Result<T> = std::result::Result<T, SchemaMergeError>;

/// Accumulates schema [`Fragment`]s and merges them on demand.
///
/// A [`Loader`] starts out empty and only ever grows: every call to
/// [`Loader::load()`] appends to its sequence of type-definition strings and
/// its sequence of [`ResolverMap`]s, preserving order. Nothing is merged until
/// [`Loader::get_schema()`] is called, which recomputes the merged result from
/// scratch each time using the loader's [`TypeDefsMerger`] and
/// [`ResolversMerger`].
#[derive(Debug)]
pub struct Loader {
    resolvers: Vec<ResolverMap>,
    resolvers_merger: Box<dyn ResolversMerger>,
    type_defs: Vec<String>,
    type_defs_merger: Box<dyn TypeDefsMerger>,
}
impl Loader {
    /// All [`ResolverMap`]s loaded so far, in load order.
    pub fn get_resolvers(&self) -> &[ResolverMap] {
        self.resolvers.as_slice()
    }

    /// Merges everything loaded so far, retaining every declared type (not
    /// only those reachable from a root operation type).
    ///
    /// Errors produced by either merger are returned unchanged.
    pub fn get_schema(&self) -> Result<MergedSchema> {
        self.get_schema_with(&MergeTypeDefsConfig { all: true })
    }

    pub fn get_schema_with(
        &self,
        config: &MergeTypeDefsConfig,
    ) -> Result<MergedSchema> {
        log::debug!(
            "Merging {} type definitions and {} resolver maps.",
            self.type_defs.len(),
            self.resolvers.len(),
        );
        Ok(MergedSchema {
            type_defs: self.type_defs_merger.merge_type_defs(
                self.type_defs.as_slice(),
                config,
            )?,
            resolvers: self.resolvers_merger.merge_resolvers(
                self.resolvers.as_slice(),
            )?,
        })
    }

    /// All type-definition strings loaded so far, in load order.
    pub fn get_type_defs(&self) -> &[String] {
        self.type_defs.as_slice()
    }

    /// Appends the type definitions and resolver maps of each fragment, in
    /// order. Absent (`None`) fragments are skipped.
    ///
    /// Nothing is validated here; malformed type definitions only surface as
    /// an error from [`Loader::get_schema()`].
    pub fn load<TFragment: Into<Option<Fragment>>>(
        &mut self,
        fragments: impl IntoIterator<Item = TFragment>,
    ) {
        let num_type_defs = self.type_defs.len();
        let num_resolvers = self.resolvers.len();

        for fragment in fragments {
            let Some(fragment) = fragment.into() else {
                log::trace!("Skipping an absent fragment.");
                continue;
            };
            let (type_defs, resolvers) = fragment.into_parts();
            self.resolvers.extend(resolvers);
            self.type_defs.extend(type_defs);
        }

        log::debug!(
            "Loaded {} type definitions and {} resolver maps.",
            self.type_defs.len() - num_type_defs,
            self.resolvers.len() - num_resolvers,
        );
    }

    pub fn new() -> Self {
        Self::with_mergers(DocumentTypeDefsMerger, DeepResolversMerger)
    }

    pub fn with_mergers(
        type_defs_merger: impl TypeDefsMerger + 'static,
        resolvers_merger: impl ResolversMerger + 'static,
    ) -> Self {
        Self {
            resolvers: vec![],
            resolvers_merger: Box::new(resolvers_merger),
            type_defs: vec![],
            type_defs_merger: Box::new(type_defs_merger),
        }
    }

    /// Namespaces fragments under a synthetic `root_type` so that modules
    /// from unrelated domains can be merged without their root-level field
    /// names colliding.
    ///
    /// Every type-definition string `t` becomes `type {root_type} { t }` (one
    /// output string per input string, with `t` interpolated verbatim) and
    /// every resolver map `m` becomes `{root_type: m}`. The result is a new
    /// [`Fragment`]; it is not loaded into any [`Loader`].
    ///
    /// ```
    /// # use libgraphql_loader::Fragment;
    /// # use libgraphql_loader::Loader;
    /// let wrapped = Loader::wrap("Billing", [
    ///     &Fragment::new().with_type_defs(["invoice: String", "total: Int"]),
    /// ]);
    ///
    /// assert_eq!(wrapped.type_defs(), &[
    ///     "type Billing { invoice: String }".to_string(),
    ///     "type Billing { total: Int }".to_string(),
    /// ]);
    /// ```
    pub fn wrap<'a>(
        root_type: &str,
        fragments: impl IntoIterator<Item = &'a Fragment>,
    ) -> Fragment {
        let mut type_defs = vec![];
        let mut resolvers = vec![];

        for fragment in fragments {
            type_defs.extend(fragment.type_defs().iter().map(
                |type_def| format!("type {root_type} {{ {type_def} }}"),
            ));
            resolvers.extend(fragment.resolvers().iter().map(
                |resolver_map| ResolverMap::namespaced(root_type, resolver_map.clone()),
            ));
        }

        log::trace!(
            "Wrapped {} type definitions and {} resolver maps under `{root_type}`.",
            type_defs.len(),
            resolvers.len(),
        );
        Fragment::new()
            .with_type_defs(type_defs)
            .with_resolver_maps(resolvers)
    }
}
impl std::default::Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
