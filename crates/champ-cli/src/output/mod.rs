use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat, pretty: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Json | OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat, pretty: bool) -> anyhow::Result<()> {
    let rendered = render(value, format, pretty)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use pretty_assertions::assert_eq;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        line: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: "x", line: 7 };
        let out = render(&value, OutputFormat::Json, true).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["line"], 7);
        assert!(out.contains('\n'));
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: "x", line: 7 };
        let out = render(&value, OutputFormat::Raw, true).expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn json_render_honors_pretty_off() {
        let value = Example { id: "x", line: 7 };
        let out = render(&value, OutputFormat::Json, false).expect("json render should work");
        assert!(!out.contains('\n'));
    }
}
