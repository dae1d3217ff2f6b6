//! Operations
//!
//! The closed set of queries and mutations accepted by the `/graphql`
//! endpoint. A request names one operation and carries its variables:
//!
//! ```json
//! { "operation": "login", "variables": { "userName": "alice", "password": "secret" } }
//! ```

use serde::Deserialize;
use serde_json::Value;

use auth::models::UserNamePasswordInput;
use post::models::{CreatePostInput, PostIdInput, UpdatePostInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationName {
    Hello,
    Users,
    Me,
    Posts,
    Post,
    Register,
    Login,
    Logout,
    CreatePost,
    UpdatePost,
    DeletePost,
}

impl OperationName {
    /// Key of the result inside `data`
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationName::Hello => "hello",
            OperationName::Users => "users",
            OperationName::Me => "me",
            OperationName::Posts => "posts",
            OperationName::Post => "post",
            OperationName::Register => "register",
            OperationName::Login => "login",
            OperationName::Logout => "logout",
            OperationName::CreatePost => "createPost",
            OperationName::UpdatePost => "updatePost",
            OperationName::DeletePost => "deletePost",
        }
    }

    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            OperationName::Register
                | OperationName::Login
                | OperationName::Logout
                | OperationName::CreatePost
                | OperationName::UpdatePost
                | OperationName::DeletePost
        )
    }
}

/// Request body
#[derive(Debug, Deserialize)]
pub struct OperationRequest {
    pub operation: OperationName,
    #[serde(default)]
    pub variables: Option<Value>,
}

/// Operation with decoded variables
#[derive(Debug)]
pub enum Operation {
    Hello,
    Users,
    Me,
    Posts,
    Post(PostIdInput),
    Register(UserNamePasswordInput),
    Login(UserNamePasswordInput),
    Logout,
    CreatePost(CreatePostInput),
    UpdatePost(UpdatePostInput),
    DeletePost(PostIdInput),
}

impl OperationRequest {
    /// Decode the variables for the named operation
    ///
    /// Operations without arguments ignore `variables`.
    pub fn into_operation(self) -> Result<Operation, serde_json::Error> {
        let variables = self.variables.unwrap_or(Value::Null);

        Ok(match self.operation {
            OperationName::Hello => Operation::Hello,
            OperationName::Users => Operation::Users,
            OperationName::Me => Operation::Me,
            OperationName::Posts => Operation::Posts,
            OperationName::Logout => Operation::Logout,
            OperationName::Post => Operation::Post(serde_json::from_value(variables)?),
            OperationName::Register => Operation::Register(serde_json::from_value(variables)?),
            OperationName::Login => Operation::Login(serde_json::from_value(variables)?),
            OperationName::CreatePost => Operation::CreatePost(serde_json::from_value(variables)?),
            OperationName::UpdatePost => Operation::UpdatePost(serde_json::from_value(variables)?),
            OperationName::DeletePost => Operation::DeletePost(serde_json::from_value(variables)?),
        })
    }
}
