use crate::annotation::Annotation;
use crate::diff::{HunkHeader, LineRange};
use crate::scan::{CancelToken, scan_diff};

/// Two files, three hunks, with `diff -u` style tab-separated timestamps.
pub(crate) const TWO_FILE_DIFF: &str = "\
--- src/parser.c\t2020-03-01 10:00:00.000000000 +0100
+++ src/parser.c.new\t2020-03-02 11:30:00.000000000 +0100
@@ -10,4 +10,5 @@ static int parse(void)
 {
-    return 0;
+    int rc = 0;
+    return rc;
 }
@@ -40 +41 @@
-old
+new
--- docs/README\t2020-03-01 10:00:00.000000000 +0100
+++ docs/README.md\t2020-03-02 11:30:00.000000000 +0100
@@ -1,2 +1,3 @@
 Title
+=====
 Body
";

pub(crate) fn scan_text(text: &str) -> Vec<Annotation> {
    scan_diff(text, &CancelToken::new()).unwrap()
}

pub(crate) fn hunk(old_range: LineRange, new_range: LineRange, section: Option<&str>) -> HunkHeader {
    HunkHeader {
        old_range,
        new_range,
        section_text: section.map(String::from),
    }
}

/// One JSON object per annotation, newline separated.
pub(crate) fn to_json_lines(annotations: &[Annotation]) -> String {
    annotations
        .iter()
        .map(|a| serde_json::to_string(&a.snapshot()).unwrap())
        .collect::<Vec<_>>()
        .join("\n")
}
