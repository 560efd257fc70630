use crate::Fragment;
use crate::MergedSchema;
use crate::OperationKind;
use crate::ReadContentError;
use crate::ResolverMap;
use crate::tests::test_utils;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ReadContentError>;

/// A fresh scratch directory under the system temp dir.
fn scratch_dir(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "libgraphql-loader-{test_name}-{}",
        std::process::id(),
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn builders_append_in_order() {
    let query_a = ResolverMap::new().with_field(
        OperationKind::Query,
        "a",
        test_utils::resolver("a"),
    );
    let query_b = ResolverMap::new().with_field(
        OperationKind::Query,
        "b",
        test_utils::resolver("b"),
    );

    let fragment = Fragment::new()
        .with_type_def("type A")
        .with_type_defs(["type B", "type C"])
        .with_resolver_maps([query_a.clone()])
        .with_resolver_map(query_b.clone());

    assert_eq!(fragment.type_defs(), &[
        "type A".to_string(),
        "type B".to_string(),
        "type C".to_string(),
    ]);
    assert_eq!(fragment.resolvers(), &[query_a, query_b]);
    assert!(!fragment.is_empty());
    assert!(Fragment::new().is_empty());
    assert_eq!(Fragment::new(), Fragment::default());
}

#[test]
fn from_merged_schema() {
    let resolvers = ResolverMap::new().with_field(
        OperationKind::Query,
        "a",
        test_utils::resolver("a"),
    );
    let schema = MergedSchema {
        resolvers: resolvers.clone(),
        type_defs: "type Query {\n  a: Int\n}\n".to_string(),
    };

    let fragment = Fragment::from(schema);

    assert_eq!(fragment.type_defs(), &["type Query {\n  a: Int\n}\n".to_string()]);
    assert_eq!(fragment.resolvers(), &[resolvers]);
}

mod from_files {
    use super::*;

    #[test]
    fn from_file_reads_one_type_def() -> Result<()> {
        let dir = scratch_dir("from_file");
        let path = dir.join("user.graphql");
        std::fs::write(&path, "type User { id: ID }").unwrap();

        let fragment = Fragment::from_file(&path)?;

        assert_eq!(fragment.type_defs(), &["type User { id: ID }".to_string()]);
        assert!(fragment.resolvers().is_empty());

        Ok(())
    }

    #[test]
    fn from_files_preserves_argument_order() -> Result<()> {
        let dir = scratch_dir("from_files");
        let path_b = dir.join("b.graphql");
        let path_a = dir.join("a.graphql");
        std::fs::write(&path_b, "type B { id: ID }").unwrap();
        std::fs::write(&path_a, "type A { id: ID }").unwrap();

        let fragment = Fragment::from_files([&path_b, &path_a])?;

        assert_eq!(fragment.type_defs(), &[
            "type B { id: ID }".to_string(),
            "type A { id: ID }".to_string(),
        ]);

        Ok(())
    }

    #[test]
    fn from_file_rejects_directories() {
        let dir = scratch_dir("rejects_dirs");

        assert_eq!(
            Fragment::from_file(&dir),
            Err(ReadContentError::PathIsNotAFile(dir.clone())),
        );
    }

    #[test]
    fn from_file_rejects_invalid_utf8() {
        let dir = scratch_dir("invalid_utf8");
        let path = dir.join("bad.graphql");
        std::fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

        assert!(matches!(
            Fragment::from_file(&path),
            Err(ReadContentError::FileDecodeError { file_path, .. })
                if file_path == path,
        ));
    }
}
