pub mod read_config;
pub mod store;
pub mod value;

// Re-export commonly used types/functions for convenience
pub use read_config::load_config;
pub use store::BuildConfig;
pub use value::OptionValue;
