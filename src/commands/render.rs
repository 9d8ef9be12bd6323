//! Output rendering for `diffscan scan`.

use diffscan::annotation::{Annotation, FileAnnotation};
use diffscan::config::OutputFormat;
use diffscan::context::BuildContext;
use diffscan::error::{DiffScanError, Result};
use std::io::Write;

/// Write one line per annotation in `format`.
///
/// With a build context, JSON output also carries each annotation's temp name.
pub fn write_annotations<W: Write>(
    out: &mut W,
    annotations: &[Annotation],
    format: OutputFormat,
    ctx: Option<&dyn BuildContext>,
) -> Result<()> {
    for annotation in annotations {
        let line = match format {
            OutputFormat::Text => text_line(annotation),
            OutputFormat::Json => json_line(annotation, ctx)?,
        };
        writeln!(out, "{}", line)
            .map_err(|e| DiffScanError::UserError(format!("failed to write output: {}", e)))?;
    }

    out.flush()
        .map_err(|e| DiffScanError::UserError(format!("failed to write output: {}", e)))
}

/// `<side> <file>:<start>-<end>[,<start>-<end>] <first message line>`
pub fn text_line(annotation: &Annotation) -> String {
    let ranges = annotation
        .line_ranges()
        .iter()
        .map(|range| format!("{}-{}", range.start, range.end))
        .collect::<Vec<_>>()
        .join(",");
    let message = annotation.message();
    let summary = message.lines().next().unwrap_or_default();

    format!(
        "{} {}:{} {}",
        annotation.side().as_str(),
        annotation.file_name(),
        ranges,
        summary
    )
}

fn json_line(annotation: &Annotation, ctx: Option<&dyn BuildContext>) -> Result<String> {
    let snapshot = match ctx {
        Some(ctx) => annotation.snapshot_in(ctx),
        None => annotation.snapshot(),
    };

    serde_json::to_string(&snapshot)
        .map_err(|e| DiffScanError::UserError(format!("failed to serialize annotation: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use diffscan::context::RootDirContext;
    use diffscan::scan::{CancelToken, scan_diff};

    const DIFF: &str = "\
--- lib/old.rs\t2021-01-01
+++ lib/new.rs\t2021-01-02
@@ -5,2 +5,3 @@ impl Parser
 a
+b
 c
";

    fn annotations() -> Vec<Annotation> {
        scan_diff(DIFF, &CancelToken::new()).unwrap()
    }

    fn render(format: OutputFormat, ctx: Option<&dyn BuildContext>) -> String {
        let mut buf = Vec::new();
        write_annotations(&mut buf, &annotations(), format, ctx).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_output() {
        let output = render(OutputFormat::Text, None);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "old lib/old.rs:5-7 Differences between lib/old.rs and lib/new.rs",
                "new lib/new.rs:5-5,5-8 Differences between lib/old.rs and lib/new.rs",
            ]
        );
    }

    #[test]
    fn test_json_output_is_one_object_per_line() {
        let output = render(OutputFormat::Json, None);
        let values: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(values.len(), 2);
        assert_eq!(values[0]["side"], "old");
        assert_eq!(values[0]["file_name"], "lib/old.rs");
        assert_eq!(values[1]["side"], "new");
        assert_eq!(values[1]["short_file_name"], "new.rs");
        assert_eq!(
            values[1]["message"],
            "Differences between lib/old.rs and lib/new.rs\nimpl Parser"
        );
        assert!(values[0].get("temp_name").is_none());
    }

    #[test]
    fn test_json_output_with_root_has_temp_names() {
        let ctx = RootDirContext::new("/builds/1");
        let output = render(OutputFormat::Json, Some(&ctx));

        for line in output.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            let temp = value["temp_name"].as_str().unwrap();
            assert!(temp.starts_with("/builds/1/workspace-files/"));
            assert!(temp.ends_with(".tmp"));
        }
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let mut buf = Vec::new();
        write_annotations(&mut buf, &[], OutputFormat::Text, None).unwrap();
        assert!(buf.is_empty());
    }
}
