//! Router State

use auth::AuthAppState;
use auth::domain::repository::{SessionStore, UserRepository};
use post::PostAppState;
use post::domain::repository::PostRepository;

/// Handles shared by every request
pub struct AppState<A, P>
where
    A: UserRepository + SessionStore + Send + Sync + 'static,
    P: PostRepository + Send + Sync + 'static,
{
    pub auth: AuthAppState<A>,
    pub posts: PostAppState<P>,
}

impl<A, P> AppState<A, P>
where
    A: UserRepository + SessionStore + Send + Sync + 'static,
    P: PostRepository + Send + Sync + 'static,
{
    pub fn new(auth: AuthAppState<A>, posts: PostAppState<P>) -> Self {
        Self { auth, posts }
    }
}

impl<A, P> Clone for AppState<A, P>
where
    A: UserRepository + SessionStore + Send + Sync + 'static,
    P: PostRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            auth: self.auth.clone(),
            posts: self.posts.clone(),
        }
    }
}
