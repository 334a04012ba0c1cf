mod common;

use axum::http::StatusCode;

use project_tracker::{db::dao::DaoContext, services::ServiceContext};

use common::{
    add_category, add_project, app_state, body_text, get, post_form, redirect_target,
};

#[tokio::test]
async fn garden_fence_scenario() {
    let state = app_state().await;
    let garden = add_category(&state, "Garden").await;

    let project_id = add_project(
        &state,
        garden.id,
        "name=Build+Fence&tag=new&supplies=nails%0A%0Ahammer%0A",
    )
    .await;

    let page = get(&state, &format!("/project/{project_id}")).await;
    assert_eq!(page.status(), StatusCode::OK);
    let html = body_text(page).await;
    assert!(html.contains("Build Fence"));
    let nails = html.find("nails").expect("nails listed");
    let hammer = html.find("hammer").expect("hammer listed");
    assert!(nails < hammer);

    let detail = ServiceContext::from_state(state.as_ref())
        .project()
        .detail(project_id)
        .await
        .unwrap();
    assert_eq!(detail.supplies.len(), 2);

    let response = post_form(&state, &format!("/settings/category/{}/delete", garden.id), "").await;
    assert_eq!(redirect_target(&response), "/settings");

    let gone = get(&state, &format!("/project/{project_id}")).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    let daos = DaoContext::new(&state.db);
    for supply in &detail.supplies {
        assert!(daos.supply().find_supply(supply.id).await.is_err());
    }
}

#[tokio::test]
async fn category_page_lists_newest_project_first() {
    let state = app_state().await;
    let garden = add_category(&state, "Garden").await;
    add_project(&state, garden.id, "name=Old+Shed&tag=repair").await;
    add_project(&state, garden.id, "name=New+Deck&tag=new").await;

    let response = get(&state, &format!("/category/{}", garden.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    let newest = html.find("New Deck").expect("deck listed");
    let oldest = html.find("Old Shed").expect("shed listed");
    assert!(newest < oldest);
}

#[tokio::test]
async fn new_project_form_preselects_the_category() {
    let state = app_state().await;
    add_category(&state, "Garden").await;
    let house = add_category(&state, "House").await;

    let response = get(&state, &format!("/category/{}/project/new", house.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(&format!("<option value=\"{}\" selected>House</option>", house.id)));
    assert!(html.contains("maintenance"));

    let missing = get(&state, "/category/999/project/new").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn project_without_a_name_is_rejected() {
    let state = app_state().await;
    let garden = add_category(&state, "Garden").await;

    let response = post_form(
        &state,
        "/project/new",
        &format!("category_id={}&tag=new", garden.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (_, projects) = ServiceContext::from_state(state.as_ref())
        .overview()
        .category_projects(garden.id)
        .await
        .unwrap();
    assert!(projects.is_empty());
}

#[tokio::test]
async fn project_in_unknown_category_is_a_conflict() {
    let state = app_state().await;
    let response = post_form(&state, "/project/new", "name=Fence&category_id=42&tag=new").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn edit_replaces_fields_and_redirects_back() {
    let state = app_state().await;
    let garden = add_category(&state, "Garden").await;
    let house = add_category(&state, "House").await;
    let project_id = add_project(
        &state,
        garden.id,
        "name=Fence&tag=new&implement=Shovel&information=Back+yard",
    )
    .await;

    let response = post_form(
        &state,
        &format!("/project/{project_id}/edit"),
        &format!("name=Gate&category_id={}&tag=repair", house.id),
    )
    .await;
    assert_eq!(redirect_target(&response), format!("/project/{project_id}"));

    let project = ServiceContext::from_state(state.as_ref())
        .project()
        .require_project(project_id)
        .await
        .unwrap();
    assert_eq!(project.name, "Gate");
    assert_eq!(project.category_id, house.id);
    assert_eq!(project.tag, "repair");
    assert_eq!(project.implement, "");
    assert_eq!(project.information, "");
}

#[tokio::test]
async fn deleting_a_project_returns_home() {
    let state = app_state().await;
    let garden = add_category(&state, "Garden").await;
    let project_id = add_project(&state, garden.id, "name=Fence&tag=new&comments=first").await;

    let response = post_form(&state, &format!("/project/{project_id}/delete"), "").await;
    assert_eq!(redirect_target(&response), "/");

    let again = post_form(&state, &format!("/project/{project_id}/delete"), "").await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn supplies_toggle_and_delete_redirect_to_their_project() {
    let state = app_state().await;
    let garden = add_category(&state, "Garden").await;
    let project_id = add_project(&state, garden.id, "name=Fence&tag=new").await;
    let project_path = format!("/project/{project_id}");

    let response = post_form(&state, &format!("{project_path}/supply/add"), "item=posts").await;
    assert_eq!(redirect_target(&response), project_path);
    let blank = post_form(&state, &format!("{project_path}/supply/add"), "item=").await;
    assert_eq!(redirect_target(&blank), project_path);

    let daos = DaoContext::new(&state.db);
    let supplies = daos.listing().supplies_for_project(project_id).await.unwrap();
    assert_eq!(supplies.len(), 1);
    let supply_id = supplies[0].id;

    let toggled = post_form(&state, &format!("/supply/{supply_id}/toggle"), "").await;
    assert_eq!(redirect_target(&toggled), project_path);
    assert!(daos.supply().find_supply(supply_id).await.unwrap().checked);

    post_form(&state, &format!("/supply/{supply_id}/toggle"), "").await;
    assert!(!daos.supply().find_supply(supply_id).await.unwrap().checked);

    let deleted = post_form(&state, &format!("/supply/{supply_id}/delete"), "").await;
    assert_eq!(redirect_target(&deleted), project_path);
    let missing = post_form(&state, &format!("/supply/{supply_id}/toggle"), "").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn roadblocks_and_comments_round_trip_through_the_project_page() {
    let state = app_state().await;
    let garden = add_category(&state, "Garden").await;
    let project_id = add_project(&state, garden.id, "name=Fence&tag=new").await;
    let project_path = format!("/project/{project_id}");

    post_form(&state, &format!("{project_path}/roadblock/add"), "description=Ground+frozen").await;
    post_form(&state, &format!("{project_path}/comment/add"), "text=Wait+for+spring").await;

    let html = body_text(get(&state, &project_path).await).await;
    assert!(html.contains("Ground frozen"));
    assert!(html.contains("Wait for spring"));

    let daos = DaoContext::new(&state.db);
    let roadblock = daos.listing().roadblocks_for_project(project_id).await.unwrap()[0].clone();
    let comment = daos.listing().comments_for_project(project_id).await.unwrap()[0].clone();
    assert_eq!(roadblock.username, "");
    assert_eq!(comment.username, "");

    let response = post_form(&state, &format!("/roadblock/{}/delete", roadblock.id), "").await;
    assert_eq!(redirect_target(&response), project_path);
    let response = post_form(&state, &format!("/comment/{}/delete", comment.id), "").await;
    assert_eq!(redirect_target(&response), project_path);

    let html = body_text(get(&state, &project_path).await).await;
    assert!(!html.contains("Ground frozen"));
    assert!(!html.contains("Wait for spring"));
}

#[tokio::test]
async fn children_of_unknown_projects_are_not_found() {
    let state = app_state().await;
    for uri in [
        "/project/77/supply/add",
        "/project/77/roadblock/add",
        "/project/77/comment/add",
        "/roadblock/77/delete",
        "/comment/77/delete",
    ] {
        let response = post_form(&state, uri, "item=x&description=x&text=x").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}
