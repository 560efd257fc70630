use crate::Fragment;
use crate::Loader;
use crate::OperationKind;
use crate::ResolverMap;
use crate::merge::SchemaMergeError;
use crate::tests::test_utils;

type Result<T> = std::result::Result<T, SchemaMergeError>;

// This is the only test that touches the process-wide loader, so nothing
// else can interleave with it.
#[test]
fn default_loader_accumulates_across_free_functions() -> Result<()> {
    let type_def = "type DefaultLoaderProbe { id: ID }";
    let fn_probe = test_utils::resolver("probe");
    let fragment = Fragment::new()
        .with_type_def(type_def)
        .with_resolver_map(ResolverMap::new().with_field(
            OperationKind::Query,
            "probe",
            fn_probe.clone(),
        ));

    let num_type_defs = crate::get_type_defs().len();
    let num_resolvers = crate::get_resolvers().len();

    crate::load([None, Some(fragment.clone())]);

    let type_defs = crate::get_type_defs();
    assert_eq!(type_defs.len(), num_type_defs + 1);
    assert_eq!(type_defs.last(), Some(&type_def.to_string()));
    assert_eq!(crate::get_resolvers().len(), num_resolvers + 1);

    let schema = crate::get_schema()?;
    assert!(
        test_utils::type_names(schema.type_defs())
            .contains(&"DefaultLoaderProbe".to_string()),
    );
    assert_eq!(schema.resolvers().field(OperationKind::Query, "probe"), Some(&fn_probe));

    crate::with_default_loader(|loader| {
        assert_eq!(loader.get_type_defs().len(), num_type_defs + 1);
    });

    assert_eq!(
        crate::wrap("Probe", [&fragment]),
        Loader::wrap("Probe", [&fragment]),
    );

    Ok(())
}
