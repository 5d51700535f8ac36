use chrono::Utc;
use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderErrorReason,
};

pub fn register_helpers(handlebars: &mut Handlebars) {
    handlebars.register_helper("timestamp", Box::new(timestamp_helper));
    handlebars.register_helper("markdown", Box::new(markdown_helper));
}

/// Formats the current UTC time, with an optional strftime format parameter.
fn timestamp_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let format = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .unwrap_or("%Y-%m-%d %H:%M:%S");

    let formatted = Utc::now().format(format).to_string();
    out.write(&formatted)?;

    Ok(())
}

/// Converts a Markdown string parameter to HTML.
fn markdown_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let input = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("markdown", 0))?;

    out.write(&markdown::to_html(input))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_handlebars() -> Handlebars<'static> {
        let mut handlebars = Handlebars::new();
        register_helpers(&mut handlebars);
        handlebars
    }

    #[test]
    fn timestamp_helper_formats_the_current_year() {
        let handlebars = test_handlebars();

        let rendered = handlebars
            .render_template(r#"{{timestamp "%Y"}}"#, &json!({}))
            .unwrap();

        assert!(rendered.parse::<i32>().unwrap() >= 2026);
    }

    #[test]
    fn markdown_helper_produces_html() {
        let handlebars = test_handlebars();

        let rendered = handlebars
            .render_template("{{markdown bio}}", &json!({ "bio": "**bold** text" }))
            .unwrap();

        assert!(rendered.contains("<strong>bold</strong>"));
    }

    #[test]
    fn markdown_helper_requires_a_parameter() {
        let handlebars = test_handlebars();

        assert!(handlebars
            .render_template("{{markdown}}", &json!({}))
            .is_err());
    }
}
