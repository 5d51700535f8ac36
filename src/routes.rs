use actix_web::{get, web, HttpResponse, Responder, Result};
use serde::Serialize;
use serde_json::json;

use crate::render::{RenderedView, Renderer};
use crate::views::ViewContext;

#[derive(Serialize, Debug)]
struct ProfileData {
    username: String,
    bio: String,
}

#[derive(Serialize, Debug)]
struct UserListData {
    usernames: Vec<&'static str>,
}

#[get("/")]
pub async fn index_route(renderer: web::Data<Renderer>) -> Result<RenderedView> {
    let ctx = ViewContext::new();

    Ok(renderer.render(&ctx, "home", &json!({ "title": "Home" }))?)
}

#[get("/users")]
pub async fn user_list_route(renderer: web::Data<Renderer>) -> Result<RenderedView> {
    let mut ctx = ViewContext::new();
    ctx.set_view_subdir(Some("users"));

    let data = UserListData {
        usernames: vec!["ada", "grace", "linus"],
    };

    // "lists/users" is fully qualified, so it resolves outside the subdirectory.
    Ok(renderer.render(&ctx, "lists/users", &data)?)
}

#[get("/users/{username}")]
pub async fn user_profile_route(
    path: web::Path<String>,
    renderer: web::Data<Renderer>,
) -> Result<RenderedView> {
    let username = path.into_inner();

    let mut ctx = ViewContext::new();
    ctx.set_view_subdir(Some("users"));

    let data = ProfileData {
        bio: format!("**{username}** has not written a bio yet."),
        username,
    };

    Ok(renderer.render(&ctx, "profile", &data)?)
}

#[get("/users/{username}/settings")]
pub async fn user_settings_route(
    path: web::Path<String>,
    renderer: web::Data<Renderer>,
) -> Result<RenderedView> {
    let username = path.into_inner();

    let mut ctx = ViewContext::new();
    ctx.set_view_subdir(Some("users"));

    Ok(renderer.render(&ctx, "settings", &json!({ "username": username }))?)
}

#[get("/health/live")]
pub async fn liveness_probe_route() -> impl Responder {
    HttpResponse::Ok().body("App is live")
}

#[get("/health/ready")]
pub async fn readiness_probe_route() -> impl Responder {
    HttpResponse::Ok().body("App is ready to receive traffic")
}
