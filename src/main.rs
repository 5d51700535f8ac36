use actix_files::Files;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use trellis::env_config::get_env_config;
use trellis::reload_worker::init_reload_worker;
use trellis::render::Renderer;
use trellis::routes::{
    index_route, liveness_probe_route, readiness_probe_route, user_list_route,
    user_profile_route, user_settings_route,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let env_config = get_env_config();

    let renderer = Arc::new(Renderer::new(env_config.dir_views.clone()));

    let reload_worker = if env_config.template_reload {
        Some(init_reload_worker(Arc::clone(&renderer)))
    } else {
        None
    };

    let renderer_data = web::Data::from(renderer);

    HttpServer::new(move || {
        App::new()
            .app_data(renderer_data.clone())
            .service(index_route)
            .service(user_list_route)
            .service(user_profile_route)
            .service(user_settings_route)
            .service(liveness_probe_route)
            .service(readiness_probe_route)
            .service(Files::new("/assets", "public/assets"))
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await?;

    if let Some((worker_handle, worker_cancel)) = reload_worker {
        worker_cancel.cancel();
        let _ = worker_handle.await;
    }

    Ok(())
}
