pub mod category;
pub mod comment;
pub mod errors;
pub mod post;
pub mod slug;
pub mod user;
