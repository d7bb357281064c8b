mod feature_store;
mod key_value_store;

pub use feature_store::IFeatureStore;
pub use key_value_store::IKeyValueStore;
