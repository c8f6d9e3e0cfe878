//! Stories Module
//!
//! User-owned story records and their CRUD surface. All access is
//! scoped to the authenticated owner at the storage layer.

/// Story model and database operations
pub mod db;

/// HTTP handlers for story endpoints
pub mod handlers;

pub use db::Story;
pub use handlers::{
    delete_story_handler, my_stories, save_story, update_story_handler, StoriesResponse,
    StoryPayload,
};
