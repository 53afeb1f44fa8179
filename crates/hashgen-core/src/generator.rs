//! Template instantiation: planning, writing and drift checking.
//!
//! A run goes through four stages:
//! 1. **Plan**: render every output name and reject collisions, before any I/O.
//! 2. **Load**: read every template into memory. A missing template aborts the run
//!    before a single file is written.
//! 3. **Render**: substitute the placeholder for each (size, template) pair.
//! 4. **Write**: each output goes to a temporary file in the base directory that is
//!    renamed onto the destination, so no reader ever sees a half-substituted file.

use std::collections::{BTreeMap, HashSet};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::config::{GeneratorConfig, OverwritePolicy};
use crate::error::{HashgenError, Result};
use crate::manifest::{self, Manifest};
use crate::project;
use crate::templates::placeholder;
use crate::templates::renderer::TemplateRenderer;

/// One output file: a template instantiated for one size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instantiation {
    pub size: u64,
    pub kind: String,
    /// Template path.
    pub template: PathBuf,
    /// Destination path.
    pub output: PathBuf,
}

impl Instantiation {
    /// Destination file name, the key used in the manifest.
    pub fn file_name(&self) -> String {
        self.output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// An instantiation together with its substituted contents.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub instantiation: Instantiation,
    pub contents: String,
    /// Placeholder occurrences replaced.
    pub replacements: usize,
}

/// What happened to one destination during [`Generator::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Created,
    Updated,
    /// Already held the generated bytes; not rewritten.
    Unchanged,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedFile {
    pub size: u64,
    pub path: PathBuf,
    pub bytes: usize,
    pub replacements: usize,
    pub status: FileStatus,
}

/// Summary of a generation run, in generation order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    pub files: Vec<GeneratedFile>,
}

impl GenerationReport {
    pub fn count(&self, status: FileStatus) -> usize {
        self.files.iter().filter(|f| f.status == status).count()
    }

    /// Files created or updated.
    pub fn written(&self) -> usize {
        self.files.len() - self.count(FileStatus::Unchanged)
    }
}

/// Why an output does not match what generation would produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DriftKind {
    Missing,
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Drift {
    pub path: PathBuf,
    pub kind: DriftKind,
}

/// A template read into memory.
struct LoadedTemplate {
    text: String,
    permissions: std::fs::Permissions,
}

/// Instantiates the configured templates for every configured size.
pub struct Generator {
    config: GeneratorConfig,
    base_dir: PathBuf,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a generator writing next to the templates in `base_dir`.
    ///
    /// `base_dir` replaces `config.base_dir`; the process working directory is never used
    /// or changed.
    pub fn new(config: GeneratorConfig, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            base_dir: base_dir.into(),
            renderer: TemplateRenderer::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Compute every instantiation, size-major, without touching the filesystem.
    pub fn plan(&self) -> Result<Vec<Instantiation>> {
        self.config.validate()?;

        let sources: HashSet<PathBuf> = self
            .config
            .templates
            .iter()
            .map(|t| self.base_dir.join(&t.source))
            .collect();
        let mut outputs = HashSet::new();
        let mut plan = Vec::with_capacity(self.config.sizes.len() * self.config.templates.len());

        for &size in &self.config.sizes {
            for entry in &self.config.templates {
                let name = self.renderer.output_name(&entry.output, size, &entry.kind)?;
                let output = self.base_dir.join(&name);

                if sources.contains(&output) {
                    return Err(HashgenError::InvalidConfig(format!(
                        "output {name} would overwrite a template"
                    )));
                }
                if !outputs.insert(output.clone()) {
                    return Err(HashgenError::DuplicateOutput { path: output });
                }

                plan.push(Instantiation {
                    size,
                    kind: entry.kind.clone(),
                    template: self.base_dir.join(&entry.source),
                    output,
                });
            }
        }

        Ok(plan)
    }

    /// Plan, load every template, and substitute all outputs in memory.
    pub fn render_all(&self) -> Result<Vec<Rendered>> {
        let (plan, templates) = self.load()?;
        Ok(self.render_plan(plan, &templates))
    }

    /// Generate every output and return what was written.
    pub fn generate(&self) -> Result<GenerationReport> {
        // Stage 1 + 2: plan and load
        let (plan, templates) = self.load()?;

        // Stage 3: render
        let rendered = self.render_plan(plan, &templates);

        // Stage 4: write
        let previous = manifest::load(&self.base_dir)?;
        if self.config.overwrite == OverwritePolicy::Protect {
            self.check_protected(&rendered, previous.as_ref())?;
        }

        let mut report = GenerationReport::default();
        let mut current_size = None;
        for item in &rendered {
            let inst = &item.instantiation;
            if current_size != Some(inst.size) {
                tracing::info!(size = inst.size, "instantiating templates");
                current_size = Some(inst.size);
            }

            let status = match read_existing(&inst.output)? {
                Some(existing) if existing == item.contents.as_bytes() => FileStatus::Unchanged,
                Some(_) => FileStatus::Updated,
                None => FileStatus::Created,
            };

            if status != FileStatus::Unchanged {
                let permissions = &templates[&inst.template].permissions;
                write_atomic(&inst.output, item.contents.as_bytes(), permissions)?;
            }
            tracing::debug!(
                path = %inst.output.display(),
                replacements = item.replacements,
                ?status,
                "output"
            );

            report.files.push(GeneratedFile {
                size: inst.size,
                path: inst.output.clone(),
                bytes: item.contents.len(),
                replacements: item.replacements,
                status,
            });
        }

        // An existing manifest is kept current under either policy; runs over a subset of
        // sizes or templates only replace their own entries.
        if self.config.overwrite == OverwritePolicy::Protect || previous.is_some() {
            let mut manifest = previous.unwrap_or_default();
            for item in &rendered {
                manifest.record(&item.instantiation.file_name(), item.contents.as_bytes());
            }
            manifest::save(&manifest, &self.base_dir)?;
        }

        Ok(report)
    }

    /// Report outputs that are missing or differ from what [`generate`](Self::generate)
    /// would write now.
    pub fn check(&self) -> Result<Vec<Drift>> {
        let mut drift = Vec::new();
        for item in self.render_all()? {
            let kind = match read_existing(&item.instantiation.output)? {
                None => Some(DriftKind::Missing),
                Some(existing) if existing != item.contents.as_bytes() => Some(DriftKind::Stale),
                Some(_) => None,
            };
            if let Some(kind) = kind {
                drift.push(Drift {
                    path: item.instantiation.output,
                    kind,
                });
            }
        }
        Ok(drift)
    }

    fn load(&self) -> Result<(Vec<Instantiation>, BTreeMap<PathBuf, LoadedTemplate>)> {
        let plan = self.plan()?;
        project::require_base_dir(&self.base_dir)?;

        let mut templates = BTreeMap::new();
        for entry in &self.config.templates {
            let path = self.base_dir.join(&entry.source);
            let loaded = load_template(&path)?;
            if placeholder::count(&loaded.text, &self.config.placeholder) == 0 {
                tracing::warn!(
                    template = %path.display(),
                    placeholder = %self.config.placeholder,
                    "template contains no placeholder, copies will be identical"
                );
            }
            templates.insert(path, loaded);
        }

        Ok((plan, templates))
    }

    fn render_plan(
        &self,
        plan: Vec<Instantiation>,
        templates: &BTreeMap<PathBuf, LoadedTemplate>,
    ) -> Vec<Rendered> {
        plan.into_iter()
            .map(|inst| {
                let text = &templates[&inst.template].text;
                let sub =
                    placeholder::substitute(text, &self.config.placeholder, &inst.size.to_string());
                Rendered {
                    instantiation: inst,
                    contents: sub.text,
                    replacements: sub.replacements,
                }
            })
            .collect()
    }

    /// Refuse the whole run if any existing output was edited since it was generated.
    fn check_protected(&self, rendered: &[Rendered], previous: Option<&Manifest>) -> Result<()> {
        for item in rendered {
            let inst = &item.instantiation;
            let Some(existing) = read_existing(&inst.output)? else {
                continue;
            };
            if existing == item.contents.as_bytes() {
                continue;
            }
            let recorded = previous.is_some_and(|m| m.matches(&inst.file_name(), &existing));
            if !recorded {
                tracing::warn!(path = %inst.output.display(), "output was edited by hand");
                return Err(HashgenError::DestinationModified(inst.output.clone()));
            }
        }
        Ok(())
    }
}

fn load_template(path: &Path) -> Result<LoadedTemplate> {
    let read = || -> std::io::Result<LoadedTemplate> {
        let text = std::fs::read_to_string(path)?;
        let permissions = std::fs::metadata(path)?.permissions();
        Ok(LoadedTemplate { text, permissions })
    };
    read().map_err(|e| HashgenError::TemplateRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Current contents of `path`, or `None` if it does not exist.
fn read_existing(path: &Path) -> Result<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(HashgenError::Io(e)),
    }
}

/// Write `contents` to a temporary file next to `path` and rename it into place.
fn write_atomic(path: &Path, contents: &[u8], permissions: &std::fs::Permissions) -> Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let write_err = |e: std::io::Error| HashgenError::Write {
        path: path.to_path_buf(),
        source: e,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    std::fs::set_permissions(tmp.path(), permissions.clone()).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TemplateEntry;

    const STACK_C: &str = "#include \"hash{SIZE}_stack.h\"\n\nretcode_t hash{SIZE}_stack_push(hash{SIZE}_stack_t *const stack, flex_trit_t const *const hash) {\n  memcpy(entry->hash, hash, FLEX_TRIT_SIZE_{SIZE});\n  return RC_OK;\n}\n";
    const STACK_H: &str = "#ifndef __HASH{SIZE}_STACK_H__\n#define __HASH{SIZE}_STACK_H__\n#endif\n";
    const QUEUE_C: &str = "#include \"hash{SIZE}_queue.h\"\r\nsize_t hash{SIZE}_queue_count(hash{SIZE}_queue_t const queue);";
    const QUEUE_H: &str = "/* no size here */\n";

    fn write_templates(dir: &Path) {
        std::fs::write(dir.join("hash_stack.c.tpl"), STACK_C).unwrap();
        std::fs::write(dir.join("hash_stack.h.tpl"), STACK_H).unwrap();
        std::fs::write(dir.join("hash_queue.c.tpl"), QUEUE_C).unwrap();
        std::fs::write(dir.join("hash_queue.h.tpl"), QUEUE_H).unwrap();
    }

    fn generator(dir: &Path) -> Generator {
        Generator::new(GeneratorConfig::default(), dir)
    }

    fn read(path: PathBuf) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_plan_order_and_names() {
        let dir = tempfile::tempdir().unwrap();
        let plan = generator(dir.path()).plan().unwrap();
        assert_eq!(plan.len(), 20);

        let names: Vec<_> = plan.iter().take(5).map(|i| i.file_name()).collect();
        assert_eq!(
            names,
            vec![
                "hash27_stack.c",
                "hash27_stack.h",
                "hash27_queue.c",
                "hash27_queue.h",
                "hash81_stack.c"
            ]
        );
        let sizes: Vec<_> = plan.iter().step_by(4).map(|i| i.size).collect();
        assert_eq!(sizes, vec![27, 81, 243, 6561, 8019]);
        assert_eq!(plan[19].output, dir.path().join("hash8019_queue.h"));
        assert_eq!(plan[19].template, dir.path().join("hash_queue.h.tpl"));
    }

    #[test]
    fn test_plan_does_not_require_directory() {
        let generator = generator(Path::new("/nonexistent/hashgen/templates"));
        assert!(generator.plan().is_ok());
    }

    #[test]
    fn test_plan_rejects_colliding_outputs() {
        let config = GeneratorConfig {
            templates: vec![
                TemplateEntry::new("stack", "a.tpl", "hash{{size}}.c"),
                TemplateEntry::new("queue", "b.tpl", "hash{{size}}.c"),
            ],
            ..Default::default()
        };
        let generator = Generator::new(config, "tpl");
        assert!(matches!(
            generator.plan(),
            Err(HashgenError::DuplicateOutput { .. })
        ));
    }

    #[test]
    fn test_plan_rejects_output_over_template() {
        let config = GeneratorConfig {
            sizes: vec![1],
            templates: vec![TemplateEntry::new("stack", "hash1.tpl", "hash{{size}}.tpl")],
            ..Default::default()
        };
        assert!(matches!(
            Generator::new(config, "tpl").plan(),
            Err(HashgenError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_generate_all_sizes() {
        let dir = tempfile::tempdir().unwrap();
        write_templates(dir.path());

        let report = generator(dir.path()).generate().unwrap();
        assert_eq!(report.files.len(), 20);
        assert_eq!(report.count(FileStatus::Created), 20);

        for size in [27, 81, 243, 6561, 8019] {
            for suffix in ["stack.c", "stack.h", "queue.c", "queue.h"] {
                let text = read(dir.path().join(format!("hash{size}_{suffix}")));
                assert!(!text.contains("{SIZE}"), "hash{size}_{suffix} still has a placeholder");
            }
            assert_eq!(
                read(dir.path().join(format!("hash{size}_stack.c"))),
                STACK_C.replace("{SIZE}", &size.to_string())
            );
        }
    }

    #[test]
    fn test_generate_exact_content() {
        let dir = tempfile::tempdir().unwrap();
        write_templates(dir.path());
        generator(dir.path()).generate().unwrap();

        assert_eq!(
            read(dir.path().join("hash243_stack.h")),
            "#ifndef __HASH243_STACK_H__\n#define __HASH243_STACK_H__\n#endif\n"
        );
        assert_eq!(
            read(dir.path().join("hash81_queue.c")),
            "#include \"hash81_queue.h\"\r\nsize_t hash81_queue_count(hash81_queue_t const queue);"
        );
        assert_eq!(read(dir.path().join("hash6561_queue.h")), QUEUE_H);
    }

    #[test]
    fn test_generate_reports_replacements() {
        let dir = tempfile::tempdir().unwrap();
        write_templates(dir.path());
        let report = generator(dir.path()).generate().unwrap();

        let first = &report.files[0];
        assert_eq!(first.path, dir.path().join("hash27_stack.c"));
        assert_eq!(first.replacements, 4);
        assert_eq!(report.files[3].replacements, 0);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        write_templates(dir.path());
        let generator = generator(dir.path());

        generator.generate().unwrap();
        let first: Vec<_> = generator.plan().unwrap().into_iter().map(|i| read(i.output)).collect();

        let report = generator.generate().unwrap();
        assert_eq!(report.count(FileStatus::Unchanged), 20);
        assert_eq!(report.written(), 0);
        let second: Vec<_> = generator.plan().unwrap().into_iter().map(|i| read(i.output)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_overwrites_silently_by_default() {
        let dir = tempfile::tempdir().unwrap();
        write_templates(dir.path());
        std::fs::write(dir.path().join("hash27_stack.h"), "hand edited").unwrap();

        let report = generator(dir.path()).generate().unwrap();
        assert_eq!(report.files[1].status, FileStatus::Updated);
        assert!(read(dir.path().join("hash27_stack.h")).contains("__HASH27_STACK_H__"));
        assert!(!dir.path().join(manifest::MANIFEST_FILE).exists());
    }

    #[test]
    fn test_missing_template_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write_templates(dir.path());
        std::fs::remove_file(dir.path().join("hash_queue.c.tpl")).unwrap();

        let result = generator(dir.path()).generate();
        assert!(matches!(result, Err(HashgenError::TemplateRead { .. })));

        let generated = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| !e.file_name().to_string_lossy().ends_with(".tpl"))
            .count();
        assert_eq!(generated, 0);
    }

    #[test]
    fn test_missing_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = generator(&dir.path().join("absent")).generate();
        assert!(matches!(result, Err(HashgenError::BaseDirNotFound(_))));
    }

    #[test]
    fn test_non_utf8_template_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        write_templates(dir.path());
        std::fs::write(dir.path().join("hash_stack.h.tpl"), [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(
            generator(dir.path()).generate(),
            Err(HashgenError::TemplateRead { .. })
        ));
    }

    #[test]
    fn test_custom_placeholder_and_sizes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ring.h.tpl"), "#define RING_@N@ @N@\n{SIZE}\n").unwrap();
        let config = GeneratorConfig {
            placeholder: "@N@".into(),
            sizes: vec![9, 3],
            templates: vec![TemplateEntry::new("ring", "ring.h.tpl", "{{kind}}{{size}}.h")],
            ..Default::default()
        };

        let report = Generator::new(config, dir.path()).generate().unwrap();
        assert_eq!(report.files[0].path, dir.path().join("ring9.h"));
        assert_eq!(read(dir.path().join("ring3.h")), "#define RING_3 3\n{SIZE}\n");
    }

    #[test]
    fn test_protect_refuses_hand_edited_output() {
        let dir = tempfile::tempdir().unwrap();
        write_templates(dir.path());
        let config = GeneratorConfig {
            overwrite: OverwritePolicy::Protect,
            ..Default::default()
        };
        let generator = Generator::new(config, dir.path());
        generator.generate().unwrap();
        assert!(dir.path().join(manifest::MANIFEST_FILE).exists());

        std::fs::write(dir.path().join("hash243_queue.c"), "// tuned by hand\n").unwrap();
        let result = generator.generate();
        assert!(matches!(result, Err(HashgenError::DestinationModified(p)) if p == dir.path().join("hash243_queue.c")));
        assert_eq!(read(dir.path().join("hash243_queue.c")), "// tuned by hand\n");
    }

    #[test]
    fn test_protect_regenerates_untouched_output_after_template_change() {
        let dir = tempfile::tempdir().unwrap();
        write_templates(dir.path());
        let config = GeneratorConfig {
            overwrite: OverwritePolicy::Protect,
            ..Default::default()
        };
        let generator = Generator::new(config, dir.path());
        generator.generate().unwrap();

        std::fs::write(dir.path().join("hash_stack.h.tpl"), "// v2 {SIZE}\n").unwrap();
        let report = generator.generate().unwrap();
        assert_eq!(report.count(FileStatus::Updated), 5);
        assert_eq!(read(dir.path().join("hash81_stack.h")), "// v2 81\n");

        let manifest = manifest::load(dir.path()).unwrap().unwrap();
        assert!(manifest.matches("hash81_stack.h", b"// v2 81\n"));
        assert_eq!(manifest.files.len(), 20);
    }

    #[test]
    fn test_protect_without_manifest_refuses_foreign_file() {
        let dir = tempfile::tempdir().unwrap();
        write_templates(dir.path());
        std::fs::write(dir.path().join("hash27_stack.c"), "older copy").unwrap();
        let config = GeneratorConfig {
            overwrite: OverwritePolicy::Protect,
            ..Default::default()
        };
        assert!(matches!(
            Generator::new(config, dir.path()).generate(),
            Err(HashgenError::DestinationModified(_))
        ));
        assert!(!dir.path().join("hash81_stack.c").exists());
    }

    fn protected(sizes: &[u64]) -> GeneratorConfig {
        GeneratorConfig {
            sizes: sizes.to_vec(),
            overwrite: OverwritePolicy::Protect,
            ..Default::default()
        }
    }

    #[test]
    fn test_protect_subset_run_keeps_earlier_digests() {
        let dir = tempfile::tempdir().unwrap();
        write_templates(dir.path());
        let all_sizes = [27, 81, 243, 6561, 8019];

        Generator::new(protected(&all_sizes), dir.path()).generate().unwrap();
        Generator::new(protected(&[27]), dir.path()).generate().unwrap();
        let manifest = manifest::load(dir.path()).unwrap().unwrap();
        assert_eq!(manifest.files.len(), 20);

        std::fs::write(dir.path().join("hash_stack.c.tpl"), "// v2 {SIZE}\n").unwrap();
        let report = Generator::new(protected(&all_sizes), dir.path())
            .generate()
            .unwrap();
        assert_eq!(report.count(FileStatus::Updated), 5);
        assert_eq!(read(dir.path().join("hash81_stack.c")), "// v2 81\n");
    }

    #[test]
    fn test_always_run_refreshes_existing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        write_templates(dir.path());
        Generator::new(protected(&[27, 81]), dir.path()).generate().unwrap();

        std::fs::write(dir.path().join("hash_queue.h.tpl"), "/* {SIZE} */\n").unwrap();
        let always = GeneratorConfig {
            sizes: vec![81],
            ..Default::default()
        };
        Generator::new(always, dir.path()).generate().unwrap();
        let manifest = manifest::load(dir.path()).unwrap().unwrap();
        assert!(manifest.matches("hash81_queue.h", b"/* 81 */\n"));
        assert_eq!(manifest.files.len(), 8);

        std::fs::write(dir.path().join("hash_queue.h.tpl"), "/* v3 {SIZE} */\n").unwrap();
        let report = Generator::new(protected(&[27, 81]), dir.path())
            .generate()
            .unwrap();
        assert_eq!(report.count(FileStatus::Updated), 2);
    }

    #[test]
    fn test_always_run_without_manifest_writes_none() {
        let dir = tempfile::tempdir().unwrap();
        write_templates(dir.path());
        generator(dir.path()).generate().unwrap();
        assert!(manifest::load(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_check_reports_missing_and_stale() {
        let dir = tempfile::tempdir().unwrap();
        write_templates(dir.path());
        let generator = generator(dir.path());

        assert_eq!(generator.check().unwrap().len(), 20);

        generator.generate().unwrap();
        assert!(generator.check().unwrap().is_empty());

        std::fs::write(dir.path().join("hash27_queue.h"), "stale").unwrap();
        std::fs::remove_file(dir.path().join("hash8019_stack.c")).unwrap();
        let drift = generator.check().unwrap();
        assert_eq!(
            drift,
            vec![
                Drift {
                    path: dir.path().join("hash27_queue.h"),
                    kind: DriftKind::Stale
                },
                Drift {
                    path: dir.path().join("hash8019_stack.c"),
                    kind: DriftKind::Missing
                },
            ]
        );
    }

    #[test]
    fn test_invalid_config_rejected_before_io() {
        let dir = tempfile::tempdir().unwrap();
        write_templates(dir.path());
        let config = GeneratorConfig {
            placeholder: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            Generator::new(config, dir.path()).generate(),
            Err(HashgenError::InvalidConfig(_))
        ));
        assert!(!dir.path().join("hash27_stack.c").exists());
    }
}
