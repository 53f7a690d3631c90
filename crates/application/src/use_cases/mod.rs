pub mod cache;
pub mod dns;

pub use cache::ClearCacheUseCase;
pub use dns::ResolveQueryUseCase;
