use sea_orm::prelude::DateTimeWithTimeZone;

use crate::db::entities::{category, project, project_type};

/// One `<option>` of a category picker.
pub struct CategoryOption {
    pub id: i32,
    pub name: String,
    pub selected: bool,
}

pub fn category_options(
    categories: Vec<category::Model>,
    selected: Option<i32>,
) -> Vec<CategoryOption> {
    categories
        .into_iter()
        .map(|category| CategoryOption {
            selected: Some(category.id) == selected,
            id: category.id,
            name: category.name,
        })
        .collect()
}

pub fn type_names(types: Vec<project_type::Model>) -> Vec<String> {
    types.into_iter().map(|row| row.name).collect()
}

pub fn display_time(ts: &DateTimeWithTimeZone) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

pub fn project_path(project_id: i32) -> String {
    format!("/project/{project_id}")
}

/// A board row and the project it links back to.
pub struct GroupEntry<T> {
    pub project_id: i32,
    pub row: T,
}

/// Consecutive rows whose projects share a name.
pub struct ProjectGroup<T> {
    pub project_name: String,
    pub entries: Vec<GroupEntry<T>>,
}

/// Folds rows that are already ordered by project name into one group per
/// name, keeping the row order. Rows from different projects with the same
/// name land in one group and keep their own project id.
pub fn group_by_project<T>(
    rows: impl IntoIterator<Item = (project::Model, T)>,
) -> Vec<ProjectGroup<T>> {
    let mut groups: Vec<ProjectGroup<T>> = Vec::new();
    for (project, row) in rows {
        let entry = GroupEntry {
            project_id: project.id,
            row,
        };
        match groups.last_mut() {
            Some(group) if group.project_name == project.name => group.entries.push(entry),
            _ => groups.push(ProjectGroup {
                project_name: project.name,
                entries: vec![entry],
            }),
        }
    }
    groups
}
