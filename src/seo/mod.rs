//! Search engine and social sharing metadata.

pub mod og;

pub use og::social_sharing_tags;
