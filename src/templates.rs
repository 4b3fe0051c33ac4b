//! Slide templates.
//!
//! The three slide bodies are Tera templates compiled once at startup. They
//! are plain text, so autoescaping is disabled and user-supplied values are
//! interpolated verbatim.

use tera::{Context, Tera};

use crate::error::AppError;
use crate::pitch::{PropertyRequest, Slide};

/// A fixed slide: position, title and Tera source.
pub struct SlideTemplate {
    pub id: u8,
    pub title: &'static str,
    pub name: &'static str,
    pub source: &'static str,
}

/// Slides in presentation order.
pub const SLIDE_TEMPLATES: [SlideTemplate; 3] = [
    SlideTemplate {
        id: 1,
        title: "Executive Summary",
        name: "slides/executive_summary",
        source: "A premium {{ property_type }} opportunity located in the heart of {{ location }}, offered at ₹{{ price }}.",
    },
    SlideTemplate {
        id: 2,
        title: "Market Dynamics",
        name: "slides/market_dynamics",
        source: "The {{ location }} real estate market is currently experiencing high demand for {{ property_type }} assets, driven by infrastructure growth and limited supply.",
    },
    SlideTemplate {
        id: 3,
        title: "Investment Potential",
        name: "slides/investment_potential",
        source: "At the attractive price point of ₹{{ price }}, this {{ property_type }} represents a high-yield investment with strong projected capital appreciation in {{ location }}.",
    },
];

/// Initialize the Tera template engine
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera.add_raw_templates(SLIDE_TEMPLATES.iter().map(|t| (t.name, t.source)))?;
    Ok(tera)
}

/// Render every slide for a validated property.
pub fn render_slides(tera: &Tera, property: &PropertyRequest) -> Result<Vec<Slide>, AppError> {
    let mut context = Context::new();
    context.insert("property_type", &property.property_type);
    context.insert("location", &property.location);
    context.insert("price", &property.price);

    SLIDE_TEMPLATES
        .iter()
        .map(|template| -> Result<Slide, AppError> {
            Ok(Slide {
                id: template.id,
                title: template.title.to_string(),
                content: tera.render(template.name, &context)?,
            })
        })
        .collect()
}
