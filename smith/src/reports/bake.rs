//! Bake command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from interface generation.
#[derive(Debug)]
pub struct BakeReport {
    /// Project package id from the manifest.
    pub project: String,
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug, Default)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Files whose content changed.
    pub written: Vec<String>,
    /// Files that already had the generated content.
    pub unchanged: Vec<String>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => render_preview(out, files),
        }
    }
}

impl BakeReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Project", &self.project);
        out.key_value("Output", &written.output_dir.display().to_string());

        if !written.written.is_empty() {
            out.newline();
            out.section("Written");
            for path in &written.written {
                out.added_item(path);
            }
        }

        if !written.unchanged.is_empty() {
            out.newline();
            out.section("Unchanged");
            for path in &written.unchanged {
                out.list_item(path);
            }
        }
    }
}

fn render_preview(out: &mut dyn Output, files: &[PreviewFile]) {
    for file in files {
        out.divider(&file.path);
        out.preformatted(file.content.trim_end());
    }

    out.divider("Summary");
    out.preformatted(&format!("{} files would be generated", files.len()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_written() {
        let report = BakeReport {
            project: "my-pkg".to_string(),
            result: GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("."),
                written: vec!["src/A.ts".to_string()],
                unchanged: vec!["src/B.ts".to_string()],
            }),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.0,
            "Project: my-pkg\nOutput: .\n\nWritten:\n  + src/A.ts\n\nUnchanged:\n  - src/B.ts\n"
        );
    }

    #[test]
    fn test_render_preview() {
        let report = BakeReport {
            project: "my-pkg".to_string(),
            result: GenerationResult::Preview(vec![PreviewFile {
                path: "src/A.ts".to_string(),
                content: "export interface A {\n}\n".to_string(),
            }]),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.0,
            "── src/A.ts ──\nexport interface A {\n}\n── Summary ──\n1 files would be generated\n"
        );
    }
}
