use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;
use std::sync::OnceLock;

use crate::domain::AppError;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Name of the embedded HTML presentation template.
pub const PRESENTATION_TEMPLATE: &str = "presentation.html";

/// Render an embedded document template.
///
/// Values are interpolated verbatim; no HTML escaping is applied.
pub fn render_document<S: Serialize>(template_name: &str, context: S) -> Result<String, AppError> {
    let source = TEMPLATES_DIR
        .get_file(template_name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::DocumentRender {
            template: template_name.to_string(),
            reason: "template not embedded".to_string(),
        })?;

    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);
        env
    });

    env.render_str(source, context).map_err(|err| AppError::DocumentRender {
        template: template_name.to_string(),
        reason: err.to_string(),
    })
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();
