/// Options passed to a [`TypeDefsMerger`](crate::merge::TypeDefsMerger).
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct MergeTypeDefsConfig {
    /// Retain every declared type, not only those reachable from a root
    /// operation type. Fragments routinely declare types that only some other
    /// fragment refers to, so [`Loader`](crate::Loader) always merges with
    /// this set.
    pub all: bool,
}
impl MergeTypeDefsConfig {
    pub fn root_reachable_only() -> Self {
        Self { all: false }
    }
}
impl std::default::Default for MergeTypeDefsConfig {
    fn default() -> Self {
        Self { all: true }
    }
}
