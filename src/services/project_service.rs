use tracing::debug;

use crate::{
    db::dao::{
        CascadeSummary, CommentDao, DaoContext, ListingDao, NewProject, ProjectDao, ProjectDetail,
        ProjectFields, RoadblockDao, SupplyDao,
    },
    db::entities::{comment, project, roadblock, supply},
    error::AppError,
    services::catalog_service::present,
};

/// Raw project attributes as submitted by a form.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectInput<'a> {
    pub name: Option<&'a str>,
    pub category_id: Option<&'a str>,
    pub tag: Option<&'a str>,
    pub implement: Option<&'a str>,
    pub information: Option<&'a str>,
}

impl ProjectInput<'_> {
    /// Checks the required attributes and fills absent optional ones with
    /// empty strings.
    pub fn into_fields(self) -> Result<ProjectFields, AppError> {
        let name = present(self.name).ok_or_else(|| AppError::bad_request("Name required"))?;
        let category_id = present(self.category_id)
            .and_then(|raw| raw.parse::<i32>().ok())
            .ok_or_else(|| AppError::bad_request("Category required"))?;
        let tag = present(self.tag).ok_or_else(|| AppError::bad_request("Tag required"))?;

        Ok(ProjectFields {
            name: name.to_string(),
            category_id,
            tag: tag.to_string(),
            implement: self.implement.unwrap_or_default().trim().to_string(),
            information: self.information.unwrap_or_default().trim().to_string(),
        })
    }
}

/// One supply per non-blank line, trimmed, in input order.
pub fn supply_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Clone)]
pub struct ProjectService {
    project_dao: ProjectDao,
    supply_dao: SupplyDao,
    roadblock_dao: RoadblockDao,
    comment_dao: CommentDao,
    listing_dao: ListingDao,
}

impl ProjectService {
    pub fn new(daos: &DaoContext) -> Self {
        Self {
            project_dao: daos.project(),
            supply_dao: daos.supply(),
            roadblock_dao: daos.roadblock(),
            comment_dao: daos.comment(),
            listing_dao: daos.listing(),
        }
    }

    pub async fn create_project(
        &self,
        input: ProjectInput<'_>,
        supplies_text: Option<&str>,
        comment_text: Option<&str>,
    ) -> Result<project::Model, AppError> {
        let fields = input.into_fields()?;
        let new = NewProject {
            fields,
            supplies: supply_lines(supplies_text.unwrap_or_default()),
            comment: present(comment_text).map(str::to_string),
        };
        Ok(self.project_dao.create_project(new).await?)
    }

    pub async fn require_project(&self, id: i32) -> Result<project::Model, AppError> {
        Ok(self.project_dao.find_project(id).await?)
    }

    pub async fn detail(&self, id: i32) -> Result<ProjectDetail, AppError> {
        Ok(self.listing_dao.project_detail(id).await?)
    }

    /// Replaces every editable field; optional ones left out become empty.
    pub async fn update_project(
        &self,
        id: i32,
        input: ProjectInput<'_>,
    ) -> Result<project::Model, AppError> {
        self.require_project(id).await?;
        let fields = input.into_fields()?;
        Ok(self.project_dao.update_project(id, fields).await?)
    }

    pub async fn delete_project(&self, id: i32) -> Result<CascadeSummary, AppError> {
        Ok(self.project_dao.delete_project(id).await?)
    }

    /// Unknown projects are `NotFound`; a blank item is ignored.
    pub async fn add_supply(
        &self,
        project_id: i32,
        item: Option<&str>,
    ) -> Result<Option<supply::Model>, AppError> {
        self.require_project(project_id).await?;
        let Some(item) = present(item) else {
            debug!(project_id, "ignoring supply without an item");
            return Ok(None);
        };
        Ok(Some(self.supply_dao.create_supply(project_id, item).await?))
    }

    pub async fn toggle_supply(&self, id: i32) -> Result<supply::Model, AppError> {
        Ok(self.supply_dao.toggle_supply(id).await?)
    }

    pub async fn delete_supply(&self, id: i32) -> Result<supply::Model, AppError> {
        Ok(self.supply_dao.delete_supply(id).await?)
    }

    /// Unknown projects are `NotFound`; a blank description is ignored.
    pub async fn add_roadblock(
        &self,
        project_id: i32,
        description: Option<&str>,
    ) -> Result<Option<roadblock::Model>, AppError> {
        self.require_project(project_id).await?;
        let Some(description) = present(description) else {
            debug!(project_id, "ignoring roadblock without a description");
            return Ok(None);
        };
        Ok(Some(
            self.roadblock_dao
                .create_roadblock(project_id, description)
                .await?,
        ))
    }

    pub async fn delete_roadblock(&self, id: i32) -> Result<roadblock::Model, AppError> {
        Ok(self.roadblock_dao.delete_roadblock(id).await?)
    }

    /// Unknown projects are `NotFound`; a blank comment is ignored.
    pub async fn add_comment(
        &self,
        project_id: i32,
        text: Option<&str>,
    ) -> Result<Option<comment::Model>, AppError> {
        self.require_project(project_id).await?;
        let Some(text) = present(text) else {
            debug!(project_id, "ignoring empty comment");
            return Ok(None);
        };
        Ok(Some(self.comment_dao.create_comment(project_id, text).await?))
    }

    pub async fn delete_comment(&self, id: i32) -> Result<comment::Model, AppError> {
        Ok(self.comment_dao.delete_comment(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::{ProjectInput, supply_lines};
    use crate::db::dao::{DaoBase, DaoContext};
    use crate::error::AppError;
    use crate::services::ServiceContext;
    use crate::test_helpers::memory_db;

    fn input<'a>(name: &'a str, category_id: &'a str, tag: &'a str) -> ProjectInput<'a> {
        ProjectInput {
            name: Some(name),
            category_id: Some(category_id),
            tag: Some(tag),
            implement: None,
            information: None,
        }
    }

    #[test]
    fn supply_lines_skip_blank_lines_and_keep_order() {
        assert_eq!(
            supply_lines("nails\n\nhammer\n"),
            vec!["nails".to_string(), "hammer".to_string()]
        );
        assert_eq!(
            supply_lines("  saw \r\n\t\r\nglue"),
            vec!["saw".to_string(), "glue".to_string()]
        );
        assert!(supply_lines("\n \n").is_empty());
    }

    #[test]
    fn project_input_requires_name_category_and_tag() {
        assert!(matches!(
            input("", "1", "new").into_fields(),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            input("Fence", "abc", "new").into_fields(),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            input("Fence", "1", " ").into_fields(),
            Err(AppError::BadRequest(_))
        ));

        let fields = input("Fence", "1", "new").into_fields().expect("valid");
        assert_eq!(fields.implement, "");
        assert_eq!(fields.information, "");
    }

    #[tokio::test]
    async fn garden_fence_scenario() {
        let db = memory_db().await;
        let services = ServiceContext::new(&db);
        let garden = services
            .catalog()
            .add_category(Some("Garden"))
            .await
            .expect("create")
            .expect("category");
        let category_id = garden.id.to_string();

        let fence = services
            .project()
            .create_project(
                input("Build Fence", &category_id, "new"),
                Some("nails\n\nhammer\n"),
                None,
            )
            .await
            .expect("project");

        let detail = services.project().detail(fence.id).await.expect("detail");
        let items: Vec<&str> = detail.supplies.iter().map(|row| row.item.as_str()).collect();
        assert_eq!(items, ["nails", "hammer"]);
        assert!(detail.comments.is_empty());

        services
            .catalog()
            .delete_category(garden.id)
            .await
            .expect("delete category");

        assert!(matches!(
            services.project().require_project(fence.id).await,
            Err(AppError::NotFound(_))
        ));
        let daos = DaoContext::new(&db);
        for supply in &detail.supplies {
            assert!(daos.supply().find_supply(supply.id).await.is_err());
        }
        assert_eq!(daos.supply().count_where(|query| query).await.expect("count"), 0);
    }

    #[tokio::test]
    async fn blank_child_rows_are_skipped_but_missing_projects_are_not_found() {
        let db = memory_db().await;
        let services = ServiceContext::new(&db);
        let garden = services
            .catalog()
            .add_category(Some("Garden"))
            .await
            .expect("create")
            .expect("category");
        let category_id = garden.id.to_string();
        let project = services
            .project()
            .create_project(input("Fence", &category_id, "new"), None, Some("  "))
            .await
            .expect("project");
        let projects = services.project();

        assert!(projects.add_supply(project.id, Some("")).await.expect("no-op").is_none());
        assert!(projects.add_roadblock(project.id, None).await.expect("no-op").is_none());
        assert!(projects.add_comment(project.id, Some(" ")).await.expect("no-op").is_none());

        let detail = projects.detail(project.id).await.expect("detail");
        assert!(detail.supplies.is_empty());
        assert!(detail.roadblocks.is_empty());
        assert!(detail.comments.is_empty());

        assert!(matches!(
            projects.add_supply(project.id + 1, Some("nails")).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            projects.add_roadblock(project.id + 1, Some("rain")).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn child_rows_are_stored_without_surrounding_whitespace() {
        let db = memory_db().await;
        let services = ServiceContext::new(&db);
        let garden = services
            .catalog()
            .add_category(Some("  Garden "))
            .await
            .expect("create")
            .expect("category");
        assert_eq!(garden.name, "Garden");
        let category_id = garden.id.to_string();
        let project = services
            .project()
            .create_project(input(" Fence ", &category_id, " new"), None, Some(" start early \n"))
            .await
            .expect("project");
        assert_eq!(project.name, "Fence");
        assert_eq!(project.tag, "new");

        let projects = services.project();
        let supply = projects
            .add_supply(project.id, Some(" nails\t"))
            .await
            .expect("add")
            .expect("supply");
        let roadblock = projects
            .add_roadblock(project.id, Some("\n rain "))
            .await
            .expect("add")
            .expect("roadblock");
        assert_eq!(supply.item, "nails");
        assert_eq!(roadblock.description, "rain");

        let detail = projects.detail(project.id).await.expect("detail");
        assert_eq!(detail.comments[0].text, "start early");
    }

    #[tokio::test]
    async fn update_with_unknown_category_is_a_conflict_and_changes_nothing() {
        let db = memory_db().await;
        let services = ServiceContext::new(&db);
        let garden = services
            .catalog()
            .add_category(Some("Garden"))
            .await
            .expect("create")
            .expect("category");
        let category_id = garden.id.to_string();
        let project = services
            .project()
            .create_project(input("Fence", &category_id, "new"), None, None)
            .await
            .expect("project");

        let err = services
            .project()
            .update_project(project.id, input("Gate", "9999", "repair"))
            .await
            .expect_err("unknown category");
        assert!(matches!(err, AppError::Conflict(_)));

        let unchanged = services
            .project()
            .require_project(project.id)
            .await
            .expect("project");
        assert_eq!(unchanged.name, "Fence");
        assert_eq!(unchanged.category_id, garden.id);
    }

    #[tokio::test]
    async fn removing_children_reports_their_owner() {
        let db = memory_db().await;
        let services = ServiceContext::new(&db);
        let garden = services
            .catalog()
            .add_category(Some("Garden"))
            .await
            .expect("create")
            .expect("category");
        let category_id = garden.id.to_string();
        let projects = services.project();
        let project = projects
            .create_project(input("Fence", &category_id, "new"), Some("nails"), Some("hi"))
            .await
            .expect("project");
        let detail = projects.detail(project.id).await.expect("detail");
        let roadblock = projects
            .add_roadblock(project.id, Some("rain"))
            .await
            .expect("add")
            .expect("roadblock");

        let supply = projects
            .delete_supply(detail.supplies[0].id)
            .await
            .expect("delete supply");
        let removed_roadblock = projects
            .delete_roadblock(roadblock.id)
            .await
            .expect("delete roadblock");
        let comment = projects
            .delete_comment(detail.comments[0].id)
            .await
            .expect("delete comment");

        assert_eq!(supply.project_id, project.id);
        assert_eq!(removed_roadblock.project_id, project.id);
        assert_eq!(comment.project_id, project.id);
        let detail = projects.detail(project.id).await.expect("detail");
        assert!(detail.supplies.is_empty() && detail.roadblocks.is_empty());
        assert!(detail.comments.is_empty());
    }
}
