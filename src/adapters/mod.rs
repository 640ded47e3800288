// Adapters layer: concrete implementations for external boundaries (ad payloads, delivery channels, console).

pub mod console;
pub mod destinations;
pub mod sources;
