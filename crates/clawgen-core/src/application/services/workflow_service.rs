//! Workflow service - the staged, resumable scaffolding flow.
//!
//! Each command is one pass over the same sequence:
//! 1. Inspect the target directory and any state left behind
//! 2. Resume, restart or abort when state exists
//! 3. Collect whatever the state is still missing
//! 4. Checkpoint, render, write, checkpoint
//!
//! The state document is passed explicitly through every step; the
//! `StateStore` port is the only place it is persisted.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use super::{
    collector::{CollectorDefaults, ConfigCollector},
    notes::{self, NOTES_FILE},
    structure_check::{StructureChecker, StructureReport},
};
use crate::{
    application::{
        ApplicationError,
        ports::{Elicitor, Filesystem, StateStore, TemplateRenderer},
    },
    domain::{
        ChoiceQuestion, ConfirmQuestion, DirectoryStatus, DomainValidator as validator, FileSet,
        ProjectKind, ResumeDecision, ScaffoldConfig, Stage, StageGuard, WorkflowState,
        entities::state::STATE_DIR,
    },
    error::{ClawgenError, ClawgenResult},
};

const GITIGNORE: &str = ".gitignore";

/// Result of a flow that the user may decline part way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Completed(T),
    /// The user chose not to continue. Nothing was modified.
    Declined,
}

impl<T> Outcome<T> {
    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Declined => None,
        }
    }
}

/// What a generation pass produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub kind: ProjectKind,
    pub name: String,
    pub project_dir: PathBuf,
    /// Paths written, in file-set order.
    pub written: Vec<PathBuf>,
    pub next_steps: Vec<String>,
}

/// What `init` produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub notes_path: PathBuf,
    pub gitignore_updated: bool,
}

/// Per-invocation flags shared by the flows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowOptions {
    pub quick: bool,
    pub kind: Option<ProjectKind>,
}

pub struct WorkflowService {
    filesystem: Box<dyn Filesystem>,
    store: Box<dyn StateStore>,
    renderer: Box<dyn TemplateRenderer>,
}

impl WorkflowService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        store: Box<dyn StateStore>,
        renderer: Box<dyn TemplateRenderer>,
    ) -> Self {
        Self {
            filesystem,
            store,
            renderer,
        }
    }

    // -------------------------------------------------------------------------
    // Flows
    // -------------------------------------------------------------------------

    /// One-shot scaffold: type, basics, options, then generation.
    #[instrument(skip_all, fields(root = %root.display(), quick = flags.quick))]
    pub fn run_new(
        &self,
        root: &Path,
        flags: FlowOptions,
        elicitor: &mut dyn Elicitor,
        defaults: &CollectorDefaults,
    ) -> ClawgenResult<Outcome<GenerationReport>> {
        let Outcome::Completed(mut state) = self.open(root, flags.quick, elicitor)? else {
            return Ok(Outcome::Declined);
        };

        let mut collector = ConfigCollector::new(elicitor, defaults, flags.quick);
        let kind = collector.choose_project_type(&mut state, flags.kind)?;
        collector.collect_project(&mut state)?;
        collector.collect_options(&mut state, kind)?;

        // Without quick, `prd` marks the configuration as complete so generation
        // may start. Requirements stay empty; `prd` can still record them later.
        if !flags.quick && state.stage == Stage::Init {
            state.stage = StageGuard::transition(state.stage, Stage::Prd, false)?;
        }
        self.checkpoint(root, &mut state)?;

        self.generate(root, &mut state, flags.quick).map(Outcome::Completed)
    }

    /// Project basics, gateway and modules; writes the notes file.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn run_init(
        &self,
        root: &Path,
        quick: bool,
        elicitor: &mut dyn Elicitor,
        defaults: &CollectorDefaults,
    ) -> ClawgenResult<Outcome<InitReport>> {
        let Outcome::Completed(mut state) = self.open(root, quick, elicitor)? else {
            return Ok(Outcome::Declined);
        };

        let mut collector = ConfigCollector::new(elicitor, defaults, quick);
        collector.collect_project(&mut state)?;
        collector.collect_modules(&mut state)?;
        self.checkpoint(root, &mut state)?;

        let notes_path = self.write_notes(root, &state)?;
        let gitignore_updated = self.ensure_gitignore(root)?;
        info!(stage = %state.stage, "Project initialized");

        Ok(Outcome::Completed(InitReport {
            notes_path,
            gitignore_updated,
        }))
    }

    /// Requirements collection. `revise` discards earlier answers first.
    #[instrument(skip_all, fields(root = %root.display(), revise = revise))]
    pub fn run_prd(
        &self,
        root: &Path,
        revise: bool,
        elicitor: &mut dyn Elicitor,
        defaults: &CollectorDefaults,
    ) -> ClawgenResult<Vec<String>> {
        let mut state = self.require_state(root)?;
        if revise {
            debug!("Discarding recorded requirements");
            state.requirements = Default::default();
        }

        let mut collector = ConfigCollector::new(elicitor, defaults, false);
        collector.collect_project(&mut state)?;
        collector.collect_modules(&mut state)?;
        collector.collect_requirements(&mut state)?;

        state.stage = StageGuard::after_requirements(state.stage);
        self.checkpoint(root, &mut state)?;
        info!(stage = %state.stage, "Requirements recorded");

        Ok(notes::requirements_summary(&state))
    }

    /// Render and write from the staged state.
    #[instrument(skip_all, fields(root = %root.display(), quick = flags.quick))]
    pub fn run_generate(
        &self,
        root: &Path,
        flags: FlowOptions,
        elicitor: &mut dyn Elicitor,
        defaults: &CollectorDefaults,
    ) -> ClawgenResult<GenerationReport> {
        let mut state = self.require_state(root)?;
        StageGuard::ensure_generation_allowed(state.stage, flags.quick)?;

        let mut collector = ConfigCollector::new(elicitor, defaults, flags.quick);
        let kind = collector.choose_project_type(&mut state, flags.kind)?;
        collector.collect_project(&mut state)?;
        collector.collect_options(&mut state, kind)?;

        self.generate(root, &mut state, flags.quick)
    }

    // -------------------------------------------------------------------------
    // Building blocks
    // -------------------------------------------------------------------------

    /// Classify the target directory. Advisory only.
    pub fn inspect_directory(&self, root: &Path) -> ClawgenResult<DirectoryStatus> {
        if !self.filesystem.exists(root) {
            return Ok(DirectoryStatus::Absent);
        }
        let entries = self.filesystem.list_dir(root)?;
        Ok(DirectoryStatus::classify(entries))
    }

    pub fn load_state(&self, root: &Path) -> Option<WorkflowState> {
        self.store.load(root)
    }

    pub fn require_state(&self, root: &Path) -> ClawgenResult<WorkflowState> {
        self.store.load(root).ok_or_else(|| {
            ApplicationError::NotInitialized {
                root: root.to_path_buf(),
            }
            .into()
        })
    }

    /// Remove all state and hand back a first-run document.
    pub fn restart(&self, root: &Path) -> ClawgenResult<WorkflowState> {
        info!("Restarting from scratch");
        self.store.clear(root)?;
        Ok(WorkflowState::new())
    }

    /// Validate, stamp and persist.
    pub fn checkpoint(&self, root: &Path, state: &mut WorkflowState) -> ClawgenResult<()> {
        validator::validate_state(state)?;
        state.touch(Utc::now());
        self.store.save(root, state)?;
        debug!(stage = %state.stage, "Checkpoint saved");
        Ok(())
    }

    /// Generate the project into `<root>/<name>`.
    ///
    /// State is saved at `generating` before the first write and at `ready`
    /// after the last. A write failure leaves it at `generating`.
    pub fn generate(
        &self,
        root: &Path,
        state: &mut WorkflowState,
        quick: bool,
    ) -> ClawgenResult<GenerationReport> {
        StageGuard::ensure_generation_allowed(state.stage, quick)?;
        let config = ScaffoldConfig::from_state(state)?;
        let kind = config.kind();

        state.stage = StageGuard::transition(state.stage, Stage::Generating, quick)?;
        self.checkpoint(root, state)?;

        let files = self.renderer.render(kind, &config)?;
        validator::validate_file_set(&files)?;
        info!(kind = %kind, files = files.len(), "Project rendered");

        let project_dir = root.join(config.name.as_str());
        let written = self.write_file_set(&project_dir, &files)?;

        state.stage = StageGuard::transition(state.stage, Stage::Ready, quick)?;
        self.checkpoint(root, state)?;
        info!(dir = %project_dir.display(), "Generation completed");

        Ok(GenerationReport {
            kind,
            name: config.name.to_string(),
            project_dir,
            next_steps: notes::next_steps(kind, config.name.as_str(), Some(&config.options)),
            written,
        })
    }

    /// Write every file under `dir` in set order. Not atomic.
    pub fn write_file_set(&self, dir: &Path, files: &FileSet) -> ClawgenResult<Vec<PathBuf>> {
        self.filesystem.create_dir_all(dir)?;

        let mut written = Vec::with_capacity(files.len());
        for file in files.files() {
            let path = dir.join(&file.path);
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &file.content)?;
            if file.is_executable() {
                self.filesystem.set_permissions(&path, true)?;
            }
            written.push(path);
        }
        Ok(written)
    }

    /// Write `AGENTS.md` at the root.
    pub fn write_notes(&self, root: &Path, state: &WorkflowState) -> ClawgenResult<PathBuf> {
        let path = root.join(NOTES_FILE);
        self.filesystem.create_dir_all(root)?;
        self.filesystem.write_file(&path, &notes::agent_notes(state))?;
        Ok(path)
    }

    /// Append the state directory to an existing `.gitignore` that lacks it.
    pub fn ensure_gitignore(&self, root: &Path) -> ClawgenResult<bool> {
        let path = root.join(GITIGNORE);
        if !self.filesystem.exists(&path) {
            return Ok(false);
        }

        let content = self.filesystem.read_to_string(&path)?;
        let listed = content
            .lines()
            .map(str::trim)
            .any(|l| l.trim_end_matches('/') == STATE_DIR);
        if listed {
            return Ok(false);
        }

        let separator = if content.is_empty() || content.ends_with('\n') {
            ""
        } else {
            "\n"
        };
        self.filesystem
            .write_file(&path, &format!("{content}{separator}{STATE_DIR}/\n"))?;
        Ok(true)
    }

    /// Structural checks on a generated project directory.
    pub fn validate_project(&self, dir: &Path) -> ClawgenResult<StructureReport> {
        StructureChecker::new(self.filesystem.as_ref()).check(dir)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Entry point of `new` and `init`: directory check plus resume decision.
    fn open(
        &self,
        root: &Path,
        quick: bool,
        elicitor: &mut dyn Elicitor,
    ) -> ClawgenResult<Outcome<WorkflowState>> {
        let Some(existing) = self.store.load(root) else {
            return self.first_run(root, quick, elicitor);
        };

        if quick {
            debug!(stage = %existing.stage, "Resuming silently in quick mode");
            return Ok(Outcome::Completed(existing));
        }

        elicitor.note(&format!(
            "Found existing state at stage '{}' in {}",
            existing.stage,
            root.join(STATE_DIR).display()
        ))?;
        let question = ChoiceQuestion::new("Resume, restart or abort?", ResumeDecision::labels());
        let index = elicitor.choice(&question)?;
        let decision = ResumeDecision::from_index(index).ok_or_else(|| ClawgenError::Internal {
            message: format!("resume choice index {index} out of range"),
        })?;
        debug!(decision = %decision, "Existing state resolved");

        match decision {
            ResumeDecision::Resume => Ok(Outcome::Completed(existing)),
            // The state directory is ignorable, so the check sees what a first run sees.
            // Declining here keeps the old state.
            ResumeDecision::Restart => match self.first_run(root, quick, elicitor)? {
                Outcome::Completed(_) => self.restart(root).map(Outcome::Completed),
                Outcome::Declined => Ok(Outcome::Declined),
            },
            ResumeDecision::Abort => Ok(Outcome::Declined),
        }
    }

    /// Fresh state, after the occupied-directory confirmation.
    fn first_run(
        &self,
        root: &Path,
        quick: bool,
        elicitor: &mut dyn Elicitor,
    ) -> ClawgenResult<Outcome<WorkflowState>> {
        let status = self.inspect_directory(root)?;
        if !status.is_safe() {
            warn!(entries = %status.describe(), "Target directory is not empty");
            if !quick {
                elicitor.note(&format!("Target directory is not empty: {}", status.describe()))?;
                let proceed = elicitor
                    .confirm(&ConfirmQuestion::new("Continue anyway?").with_default(false))?;
                if !proceed {
                    return Ok(Outcome::Declined);
                }
            }
        }
        Ok(Outcome::Completed(WorkflowState::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockStateStore};
    use crate::domain::{DomainError, ProjectName, SkillOptions, TextQuestion, VariantOptions};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    struct FixedRenderer;

    impl TemplateRenderer for FixedRenderer {
        fn render(&self, _kind: ProjectKind, config: &ScaffoldConfig) -> ClawgenResult<FileSet> {
            let mut files = FileSet::new();
            files.add("SKILL.md", format!("---\nname: {}\n---\n", config.name));
            files.add_executable("scripts/example.py", "print('hi')\n");
            Ok(files)
        }
    }

    /// Answers choices by index, refuses everything else.
    struct Choices(VecDeque<usize>);

    impl Elicitor for Choices {
        fn text(&mut self, q: &TextQuestion) -> ClawgenResult<String> {
            Err(ApplicationError::InputExhausted {
                prompt: q.prompt.clone(),
            }
            .into())
        }

        fn confirm(&mut self, q: &ConfirmQuestion) -> ClawgenResult<bool> {
            Err(ApplicationError::InputExhausted {
                prompt: q.prompt.clone(),
            }
            .into())
        }

        fn choice(&mut self, q: &ChoiceQuestion) -> ClawgenResult<usize> {
            self.0.pop_front().ok_or_else(|| {
                ApplicationError::InputExhausted {
                    prompt: q.prompt.clone(),
                }
                .into()
            })
        }
    }

    fn configured(stage: Stage) -> WorkflowState {
        let mut state = WorkflowState::new();
        state.stage = stage;
        state.project.name = Some(ProjectName::parse("demo").unwrap());
        state.project.description = Some("d".into());
        state.project.author = Some("a".into());
        state
            .set_options(VariantOptions::Skill(SkillOptions::default()))
            .unwrap();
        state
    }

    fn permissive_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_set_permissions().returning(|_, _| Ok(()));
        fs
    }

    fn recording_store(saved: Arc<Mutex<Vec<Stage>>>) -> MockStateStore {
        let mut store = MockStateStore::new();
        store.expect_save().returning(move |_, state| {
            saved.lock().unwrap().push(state.stage);
            Ok(())
        });
        store
    }

    #[test]
    fn generation_checkpoints_generating_then_ready() {
        let saved = Arc::new(Mutex::new(Vec::new()));
        let service = WorkflowService::new(
            Box::new(permissive_fs()),
            Box::new(recording_store(saved.clone())),
            Box::new(FixedRenderer),
        );

        let mut state = configured(Stage::Prd);
        let report = service
            .generate(Path::new("/work"), &mut state, false)
            .unwrap();

        assert_eq!(state.stage, Stage::Ready);
        assert!(state.updated_at.is_some());
        assert_eq!(*saved.lock().unwrap(), vec![Stage::Generating, Stage::Ready]);
        assert_eq!(report.project_dir, PathBuf::from("/work/demo"));
        assert_eq!(
            report.written,
            vec![
                PathBuf::from("/work/demo/SKILL.md"),
                PathBuf::from("/work/demo/scripts/example.py"),
            ]
        );
    }

    #[test]
    fn write_failure_leaves_state_at_generating() {
        let saved = Arc::new(Mutex::new(Vec::new()));
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });

        let service = WorkflowService::new(
            Box::new(fs),
            Box::new(recording_store(saved.clone())),
            Box::new(FixedRenderer),
        );
        let mut state = configured(Stage::Prd);
        let err = service
            .generate(Path::new("/work"), &mut state, false)
            .unwrap_err();

        assert!(err.to_string().contains("disk full"));
        assert_eq!(state.stage, Stage::Generating);
        assert_eq!(*saved.lock().unwrap(), vec![Stage::Generating]);
    }

    #[test]
    fn generation_from_init_requires_quick() {
        let mut store = MockStateStore::new();
        store.expect_save().never();
        let service = WorkflowService::new(
            Box::new(MockFilesystem::new()),
            Box::new(store),
            Box::new(FixedRenderer),
        );

        let mut state = configured(Stage::Init);
        let err = service
            .generate(Path::new("/work"), &mut state, false)
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::GenerationNotAllowed { stage: Stage::Init }.into()
        );
        assert_eq!(state.stage, Stage::Init);
    }

    #[test]
    fn abort_leaves_everything_untouched() {
        let mut store = MockStateStore::new();
        store
            .expect_load()
            .returning(|_| Some(configured(Stage::Prd)));
        store.expect_save().never();
        store.expect_clear().never();

        let service = WorkflowService::new(
            Box::new(MockFilesystem::new()),
            Box::new(store),
            Box::new(FixedRenderer),
        );
        let mut elicitor = Choices(VecDeque::from([2]));
        let outcome = service
            .run_new(
                Path::new("/work"),
                FlowOptions::default(),
                &mut elicitor,
                &CollectorDefaults::default(),
            )
            .unwrap();
        assert_eq!(outcome, Outcome::Declined);
    }

    #[test]
    fn restart_clears_the_state_directory() {
        let mut store = MockStateStore::new();
        store.expect_clear().times(1).returning(|_| Ok(()));
        let service = WorkflowService::new(
            Box::new(MockFilesystem::new()),
            Box::new(store),
            Box::new(FixedRenderer),
        );

        let state = service.restart(Path::new("/work")).unwrap();
        assert_eq!(state, WorkflowState::new());
    }

    #[test]
    fn prd_and_generate_need_existing_state() {
        let mut store = MockStateStore::new();
        store.expect_load().returning(|_| None);
        let service = WorkflowService::new(
            Box::new(MockFilesystem::new()),
            Box::new(store),
            Box::new(FixedRenderer),
        );

        let err = service
            .run_generate(
                Path::new("/work"),
                FlowOptions::default(),
                &mut Choices(VecDeque::new()),
                &CollectorDefaults::default(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ClawgenError::Application(ApplicationError::NotInitialized { .. })
        ));
    }

    #[test]
    fn gitignore_gets_state_dir_once() {
        let written = Arc::new(Mutex::new(None::<String>));
        let sink = written.clone();

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok("target".to_string()));
        fs.expect_write_file().returning(move |_, content| {
            *sink.lock().unwrap() = Some(content.to_string());
            Ok(())
        });

        let service = WorkflowService::new(
            Box::new(fs),
            Box::new(MockStateStore::new()),
            Box::new(FixedRenderer),
        );
        assert!(service.ensure_gitignore(Path::new("/work")).unwrap());
        assert_eq!(
            written.lock().unwrap().as_deref(),
            Some("target\n.clawgen/\n")
        );
    }

    #[test]
    fn gitignore_already_listing_state_dir_is_left_alone() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok("node_modules\n.clawgen\n".to_string()));
        fs.expect_write_file().never();

        let service = WorkflowService::new(
            Box::new(fs),
            Box::new(MockStateStore::new()),
            Box::new(FixedRenderer),
        );
        assert!(!service.ensure_gitignore(Path::new("/work")).unwrap());
    }

    #[test]
    fn occupied_directory_is_reported() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_list_dir()
            .returning(|_| Ok(vec![".git".into(), "notes.txt".into()]));
        let service = WorkflowService::new(
            Box::new(fs),
            Box::new(MockStateStore::new()),
            Box::new(FixedRenderer),
        );

        let status = service.inspect_directory(Path::new("/work")).unwrap();
        assert_eq!(status, DirectoryStatus::Occupied(vec!["notes.txt".into()]));
    }
}
