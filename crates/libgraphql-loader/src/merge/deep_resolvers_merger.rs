use crate::merge::ResolversMerger;
use crate::merge::SchemaMergeError;
use crate::ResolverEntry;
use crate::ResolverMap;
use indexmap::map::Entry;

/// Deep-merges [`ResolverMap`]s from first to last.
///
/// Nested maps that meet under the same key are merged recursively. Any other
/// collision is settled in favor of the later map. Keys keep the position of
/// their first insertion.
#[derive(Clone, Debug, Default)]
pub struct DeepResolversMerger;
impl DeepResolversMerger {
    fn merge_into(
        target: &mut ResolverMap,
        source: &ResolverMap,
        path: &mut Vec<String>,
    ) {
        for (key, source_entry) in source.iter() {
            match target.entry(key.as_str()) {
                Entry::Occupied(mut occupied) => match (occupied.get_mut(), source_entry) {
                    (
                        ResolverEntry::Nested(target_map),
                        ResolverEntry::Nested(source_map),
                    ) => {
                        path.push(key.to_string());
                        Self::merge_into(target_map, source_map, path);
                        path.pop();
                    },

                    (target_entry, _) => {
                        log::debug!(
                            "Overriding resolver entry at `{}`.",
                            path.iter()
                                .map(String::as_str)
                                .chain(std::iter::once(key.as_str()))
                                .collect::<Vec<_>>()
                                .join("."),
                        );
                        *target_entry = source_entry.clone();
                    },
                },

                Entry::Vacant(vacant) => {
                    vacant.insert(source_entry.clone());
                },
            }
        }
    }
}
impl ResolversMerger for DeepResolversMerger {
    fn merge_resolvers(
        &self,
        resolvers: &[ResolverMap],
    ) -> Result<ResolverMap, SchemaMergeError> {
        let mut merged = ResolverMap::new();
        let mut path = vec![];
        for resolver_map in resolvers {
            Self::merge_into(&mut merged, resolver_map, &mut path);
        }
        Ok(merged)
    }
}
