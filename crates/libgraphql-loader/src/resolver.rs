use std::any::Any;
use std::sync::Arc;

/// An opaque, named reference to the procedure that computes a field's value.
///
/// This crate only ever moves [`Resolver`]s around; it never calls them. The
/// execution engine that eventually consumes a merged
/// [`ResolverMap`](crate::ResolverMap) decides what call signature it expects
/// and recovers the procedure with [`Resolver::downcast_ref()`].
///
/// Cloning a [`Resolver`] is cheap and yields a handle to the same procedure.
/// Two [`Resolver`]s are equal only if they share both a name and the same
/// underlying procedure allocation.
#[derive(Clone)]
pub struct Resolver {
    name: String,
    procedure: Arc<dyn Any + Send + Sync>,
}
impl Resolver {
    pub fn new<TProcedure: Any + Send + Sync>(
        name: impl AsRef<str>,
        procedure: TProcedure,
    ) -> Self {
        Self {
            name: name.as_ref().to_string(),
            procedure: Arc::new(procedure),
        }
    }

    /// Returns the procedure if it is a `TProcedure`.
    pub fn downcast_ref<TProcedure: Any>(&self) -> Option<&TProcedure> {
        self.procedure.downcast_ref::<TProcedure>()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn procedure(&self) -> &Arc<dyn Any + Send + Sync> {
        &self.procedure
    }
}
impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
impl std::cmp::PartialEq for Resolver {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && Arc::ptr_eq(&self.procedure, &other.procedure)
    }
}
