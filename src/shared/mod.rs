pub mod constants;
pub mod http;
pub mod types;

#[cfg(test)]
pub mod test_helpers;
