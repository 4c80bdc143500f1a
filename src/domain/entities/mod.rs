mod link;

pub use link::{NewLink, ShortLink};
