pub mod db;
pub mod errors;
pub mod store;
pub mod user_settings;

pub use errors::StoreError;
pub use store::SettingsStore;

#[cfg(test)]
mod tests;
