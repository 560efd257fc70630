mod default_loader_tests;
mod fragment_tests;
pub(crate) mod test_utils;
