#[allow(unused_imports)]
pub mod prelude {
    pub use super::category::Entity as Category;
    pub use super::comment::Entity as Comment;
    pub use super::project::Entity as Project;
    pub use super::project_type::Entity as ProjectType;
    pub use super::roadblock::Entity as Roadblock;
    pub use super::supply::Entity as Supply;
}

pub mod category;
pub mod comment;
pub mod project;
pub mod project_type;
pub mod roadblock;
pub mod supply;
