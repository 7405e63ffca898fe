pub mod renderer;
pub mod store;

pub use renderer::Renderer;
pub use store::{Store, StoreError};

#[cfg(test)]
pub use store::MockStore;
