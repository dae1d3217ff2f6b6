//! Application Layer - Use cases

pub mod create_post;
pub mod delete_post;
pub mod find_post;
pub mod list_posts;
pub mod update_post;

pub use create_post::CreatePostUseCase;
pub use delete_post::DeletePostUseCase;
pub use find_post::FindPostUseCase;
pub use list_posts::ListPostsUseCase;
pub use update_post::UpdatePostUseCase;
