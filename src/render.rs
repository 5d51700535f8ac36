use actix_web::body::BoxBody;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, ResponseError};
use handlebars::Handlebars;
use log::{debug, trace};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

use crate::helpers::register_helpers;
use crate::views::{view_path, ViewContext};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("template not found: {name}")]
    TemplateNotFound { name: String },

    #[error("failed to read template {name}: {source}")]
    TemplateRead { name: String, source: io::Error },

    #[error("failed to render template: {0}")]
    Template(#[from] handlebars::RenderError),
}

impl ResponseError for RenderError {
    fn status_code(&self) -> StatusCode {
        match self {
            RenderError::TemplateNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A fully rendered view, ready to go out as an HTML response.
#[derive(Debug)]
pub struct RenderedView(String);

impl RenderedView {
    pub fn body(&self) -> &str {
        &self.0
    }
}

impl Responder for RenderedView {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(self.0)
    }
}

pub struct Renderer {
    dir_views: PathBuf,
    handlebars: Handlebars<'static>,
    template_cache: Mutex<HashMap<String, String>>,
}

impl Renderer {
    pub fn new(dir_views: PathBuf) -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        register_helpers(&mut handlebars);

        Renderer {
            dir_views,
            handlebars,
            template_cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn dir_views(&self) -> &Path {
        &self.dir_views
    }

    /// Render the named template with the given data. The name is resolved
    /// through the request's `ViewContext` first, and that resolved name is
    /// what drives both the cache lookup and the file lookup.
    pub fn render<T: Serialize>(
        &self,
        ctx: &ViewContext,
        template: &str,
        data: &T,
    ) -> Result<RenderedView, RenderError> {
        let template = ctx.template_name(template);
        trace!("Rendering template {}", template);

        let source = self.template_source(&template)?;
        let body = self.handlebars.render_template(&source, data)?;

        Ok(RenderedView(body))
    }

    fn template_source(&self, template_name: &str) -> Result<String, RenderError> {
        {
            let cache = self.template_cache.lock().unwrap();
            if let Some(source) = cache.get(template_name) {
                return Ok(source.clone());
            }
        }

        let path = view_path(&self.dir_views, template_name);
        debug!("Loading template {} from {}", template_name, path.display());

        let source = fs::read_to_string(&path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                RenderError::TemplateNotFound {
                    name: template_name.to_string(),
                }
            } else {
                RenderError::TemplateRead {
                    name: template_name.to_string(),
                    source: err,
                }
            }
        })?;

        let mut cache = self.template_cache.lock().unwrap();
        cache.insert(template_name.to_string(), source.clone());

        Ok(source)
    }

    pub fn clear_template_cache(&self) {
        self.template_cache.lock().unwrap().clear();
    }
}
