pub mod logging;
#[cfg(test)]
pub mod test_utils;
pub mod trace;
pub mod url;
