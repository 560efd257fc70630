use crate::MergedSchema;
use crate::ReadContentError;
use crate::ResolverMap;
use crate::file_reader;
use std::path::Path;

/// One module's contribution to the overall schema: an ordered sequence of
/// type-definition strings and an ordered sequence of [`ResolverMap`]s.
///
/// Either sequence may be empty; a [`Fragment`] with neither is a no-op when
/// loaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fragment {
    resolvers: Vec<ResolverMap>,
    type_defs: Vec<String>,
}
impl Fragment {
    /// Reads a schema file into a [`Fragment`] holding its text as a single
    /// type-definition string.
    pub fn from_file(
        file_path: impl AsRef<Path>,
    ) -> Result<Self, ReadContentError> {
        Self::from_files([file_path])
    }

    /// Reads several schema files into one [`Fragment`], one type-definition
    /// string per file, in the order given.
    pub fn from_files<P: AsRef<Path>>(
        file_paths: impl IntoIterator<Item = P>,
    ) -> Result<Self, ReadContentError> {
        let mut fragment = Self::new();
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            log::trace!("Reading type definitions from {file_path:?}.");
            fragment.type_defs.push(file_reader::read_content(file_path)?);
        }
        Ok(fragment)
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<ResolverMap>) {
        (self.type_defs, self.resolvers)
    }

    pub fn is_empty(&self) -> bool {
        self.type_defs.is_empty() && self.resolvers.is_empty()
    }

    pub fn new() -> Self {
        Self {
            resolvers: vec![],
            type_defs: vec![],
        }
    }

    pub fn resolvers(&self) -> &[ResolverMap] {
        self.resolvers.as_slice()
    }

    pub fn type_defs(&self) -> &[String] {
        self.type_defs.as_slice()
    }

    pub fn with_resolver_map(mut self, resolvers: ResolverMap) -> Self {
        self.resolvers.push(resolvers);
        self
    }

    pub fn with_resolver_maps(
        mut self,
        resolvers: impl IntoIterator<Item = ResolverMap>,
    ) -> Self {
        self.resolvers.extend(resolvers);
        self
    }

    pub fn with_type_def(mut self, type_def: impl Into<String>) -> Self {
        self.type_defs.push(type_def.into());
        self
    }

    pub fn with_type_defs<S: Into<String>>(
        mut self,
        type_defs: impl IntoIterator<Item = S>,
    ) -> Self {
        self.type_defs.extend(type_defs.into_iter().map(Into::into));
        self
    }
}
impl std::convert::From<MergedSchema> for Fragment {
    fn from(schema: MergedSchema) -> Self {
        let (type_defs, resolvers) = schema.into_parts();
        Self {
            resolvers: vec![resolvers],
            type_defs: vec![type_defs],
        }
    }
}
