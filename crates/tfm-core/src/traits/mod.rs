pub mod mapping_provider;

pub use mapping_provider::FrameworkMappingProvider;
