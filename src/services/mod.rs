// toolmarks services
// Persistence of view state, outbound link opening, and configuration.

pub mod link_opener;
pub mod persistence;
pub mod settings_engine;
