mod dir_store;
mod map_store;
mod static_store;
mod stream;

pub use dir_store::DirStore;
pub use map_store::MapStore;
pub use static_store::{EmbeddedResource, StaticStore};
pub use stream::ResourceStream;
