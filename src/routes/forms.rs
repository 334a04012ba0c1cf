//! URL-encoded form bodies. Every field is optional so that a missing field
//! reaches the service layer, which decides between a no-op and a 400.

use serde::Deserialize;

use crate::services::project_service::ProjectInput;

#[derive(Debug, Default, Deserialize)]
pub struct ProjectForm {
    pub name: Option<String>,
    pub category_id: Option<String>,
    pub tag: Option<String>,
    pub implement: Option<String>,
    pub information: Option<String>,
    /// Newline separated; only read on create.
    pub supplies: Option<String>,
    /// Initial comment; only read on create.
    pub comments: Option<String>,
}

impl ProjectForm {
    pub fn input(&self) -> ProjectInput<'_> {
        ProjectInput {
            name: self.name.as_deref(),
            category_id: self.category_id.as_deref(),
            tag: self.tag.as_deref(),
            implement: self.implement.as_deref(),
            information: self.information.as_deref(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NameForm {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SupplyForm {
    pub item: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RoadblockForm {
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CommentForm {
    pub text: Option<String>,
}
