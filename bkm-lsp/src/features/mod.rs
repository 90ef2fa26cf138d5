pub mod commands;
pub mod completion;
pub mod semantic_tokens;

#[cfg(test)]
pub(crate) mod test_support;
