//! src/routes/landing/mod.rs

use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use anyhow::Context;
use askama_actix::Template;

use crate::error::CrelyzorResult;
use crate::form::WaitlistForm;

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Unified Analytics Dashboard",
        description: "Track performance across Instagram, YouTube, TikTok & more with advanced insights and real-time metrics",
    },
    Feature {
        title: "Team Collaboration Hub",
        description: "Seamlessly work with managers, editors & assistants using role-based permissions and workflow automation",
    },
    Feature {
        title: "AI-Powered Scheduling",
        description: "Plan content strategically, track deadlines, and optimize posting times with intelligent recommendations",
    },
    Feature {
        title: "Revenue Optimization",
        description: "Manage brand partnerships, contracts, and multiple revenue streams with automated tracking and reporting",
    },
    Feature {
        title: "Cross-Platform Publishing",
        description: "Create once, distribute everywhere. Schedule content across all platforms with custom formatting",
    },
];

#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate<'a> {
    form: &'a WaitlistForm,
    features: &'static [Feature],
}

/// Render the landing page around the given state of the waitlist form.
pub fn render_landing(form: &WaitlistForm) -> CrelyzorResult<HttpResponse> {
    let body = LandingTemplate {
        form,
        features: FEATURES,
    }
    .render()
    .context("Failed to render the landing page.")?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

pub async fn landing() -> CrelyzorResult<HttpResponse> {
    render_landing(&WaitlistForm::default())
}
