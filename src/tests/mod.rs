#[cfg(test)]
pub mod common;

#[cfg(test)]
mod cache_expiry;
#[cfg(test)]
mod config_validation;
