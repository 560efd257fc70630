use crate::Fragment;
use crate::Loader;
use crate::MergedSchema;
use crate::ResolverMap;
use crate::merge::SchemaMergeError;
use std::sync::LazyLock;
use std::sync::Mutex;
use std::sync::PoisonError;

static DEFAULT_LOADER: LazyLock<Mutex<Loader>> =
    LazyLock::new(|| Mutex::new(Loader::new()));

/// Runs `f` with exclusive access to the process-wide default [`Loader`].
pub fn with_default_loader<T>(f: impl FnOnce(&mut Loader) -> T) -> T {
    // A panic elsewhere can't leave the loader half-updated: it only ever
    // appends whole fragments.
    let mut loader = DEFAULT_LOADER.lock()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut loader)
}

/// [`Loader::load()`] on the default [`Loader`].
pub fn load<TFragment: Into<Option<Fragment>>>(
    fragments: impl IntoIterator<Item = TFragment>,
) {
    with_default_loader(|loader| loader.load(fragments))
}

/// [`Loader::get_schema()`] on the default [`Loader`].
pub fn get_schema() -> Result<MergedSchema, SchemaMergeError> {
    with_default_loader(|loader| loader.get_schema())
}

/// A copy of the default [`Loader`]'s accumulated type definitions.
pub fn get_type_defs() -> Vec<String> {
    with_default_loader(|loader| loader.get_type_defs().to_vec())
}

/// A copy of the default [`Loader`]'s accumulated resolver maps.
pub fn get_resolvers() -> Vec<ResolverMap> {
    with_default_loader(|loader| loader.get_resolvers().to_vec())
}

/// Same as [`Loader::wrap()`].
pub fn wrap<'a>(
    root_type: &str,
    fragments: impl IntoIterator<Item = &'a Fragment>,
) -> Fragment {
    Loader::wrap(root_type, fragments)
}
