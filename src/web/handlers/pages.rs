// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{Html, IntoResponse},
};
use pulldown_cmark::{html, Event, Parser, Tag, TagEnd};

use crate::api_server::{module_subtitle, module_title, AppError, AppState};
use crate::training::RawModuleRequest;

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub title: String,
    pub crops: Vec<&'static str>,
    pub problems: Vec<&'static str>,
}

pub async fn home_page(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let knowledge = state.generator.knowledge();
    let template = HomeTemplate {
        title: "Farmer Training Module Generator".to_string(),
        crops: knowledge.crop_keys(),
        problems: knowledge.problem_keys(),
    };
    let page = template
        .render()
        .map_err(|e| AppError::Internal(format!("Template error: {}", e)))?;
    Ok(Html(page))
}

// ============================================================================
// Module Preview
// ============================================================================

#[derive(Template)]
#[template(path = "pages/module.html")]
pub struct ModuleTemplate {
    pub title: String,
    pub subtitle: String,
    pub body_html: String,
    pub generated_at: String,
    pub ai_assistance: bool,
}

/// GET /modules/preview?crop=rice&region=Punjab&problem=irrigation
pub async fn module_preview(
    State(state): State<AppState>,
    query: Result<Query<RawModuleRequest>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(raw) = query
        .map_err(|e| AppError::BadRequest(format!("Invalid query string: {}", e.body_text())))?;
    let request = raw.validate()?;
    let module = state.generator.generate(&request);

    let template = ModuleTemplate {
        title: module_title(&request.crop),
        subtitle: module_subtitle(&request.region, &request.problem),
        body_html: markdown_to_html(&module.content),
        generated_at: module.metadata.generation_time,
        ai_assistance: module.metadata.ai_used,
    };
    let page = template
        .render()
        .map_err(|e| AppError::Internal(format!("Template error: {}", e)))?;
    Ok(Html(page))
}

/// Render module markdown to HTML.
///
/// Raw HTML in the source (which can only come from user-supplied crop,
/// region, or problem text) is emitted as escaped text. Links and images
/// whose target is not http, https, or relative lose their tag and keep
/// only their text.
pub fn markdown_to_html(markdown: &str) -> String {
    // One entry per open link/image: true when its tags are dropped
    let mut dropped: Vec<bool> = Vec::new();
    let events = Parser::new(markdown).filter_map(move |event| {
        let target_is_safe = match &event {
            Event::Start(Tag::Link { dest_url, .. } | Tag::Image { dest_url, .. }) => {
                Some(is_safe_link_target(dest_url))
            }
            _ => None,
        };
        if let Some(safe) = target_is_safe {
            dropped.push(!safe);
            return safe.then_some(event);
        }

        match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Some(Event::Text(raw)),
            end @ (Event::End(TagEnd::Link) | Event::End(TagEnd::Image)) => {
                let was_dropped = dropped.pop().unwrap_or(false);
                (!was_dropped).then_some(end)
            }
            other => Some(other),
        }
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

/// Allow http(s) URLs and scheme-less (relative) targets.
fn is_safe_link_target(url: &str) -> bool {
    let url = url.trim();
    let Some(colon) = url.find(':') else {
        return true;
    };
    let scheme = &url[..colon];
    // A colon after a path, query, or fragment start is not a scheme separator
    if scheme.contains(|c: char| matches!(c, '/' | '?' | '#')) {
        return true;
    }
    scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
}
