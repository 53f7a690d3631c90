pub mod builder;
pub mod exchange;
pub mod iterative;
pub mod referral;

pub use builder::ResolverBuilder;
pub use exchange::{NameserverExchange, NameserverReply};
pub use iterative::IterativeResolver;
pub use referral::{classify, Classification, Referral};
