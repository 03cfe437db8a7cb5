mod error;
pub use error::Error;

mod user;
pub use user::UserName;

mod graph;
pub use graph::FollowGraph;

mod post;
pub use post::{Post, MAX_POST_LEN};

mod feed;
pub use feed::Feed;

mod render;
pub use render::render;
