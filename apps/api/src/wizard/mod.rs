//! Resume wizard: the client-side state machine that assembles a draft.
//!
//! State is `{cursor, per-step local state}` over the fixed step order
//! personal → education → experience → skills → preview. Each step owns one
//! slice of the draft and writes to it only through its own submit/add/delete
//! operations.
//!
//! Entering a step (any cursor move onto it) reloads that step's local state
//! from the draft: the personal form is refilled and the list editors return to
//! create-mode with a blank sub-form. Uncommitted local edits are discarded on
//! exit. Only the active step can be operated on.

pub mod entries;
pub mod steps;

use thiserror::Error;
use tracing::debug;

use crate::client::{ClientError, ResumeApiClient};
use crate::models::resume::{
    EducationEntry, ExperienceEntry, PersonalInfo, Resume, ResumeDocument,
};
use crate::preview::render_resume_md;
use crate::validation::ValidationErrors;

use entries::{EntryEditor, EntryStep};
use steps::{PersonalStep, SkillsStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Personal,
    Education,
    Experience,
    Skills,
    Preview,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Personal,
        Step::Education,
        Step::Experience,
        Step::Skills,
        Step::Preview,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Personal => "Personal Info",
            Step::Education => "Education",
            Step::Experience => "Experience",
            Step::Skills => "Skills",
            Step::Preview => "Preview",
        }
    }
}

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("{requested:?} step is not active (current step: {current:?})")]
    StepInactive { requested: Step, current: Step },

    #[error("no entry at index {index} (have {len})")]
    NoSuchEntry { index: usize, len: usize },

    #[error("no description point at index {0}")]
    NoSuchPoint(usize),

    #[error("the first description point cannot be removed")]
    FirstPointRequired,

    #[error("invalid form: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("submission failed: {0}")]
    Submit(#[from] ClientError),
}

pub struct Wizard {
    draft: ResumeDocument,
    cursor: Step,
    personal_form: PersonalInfo,
    education: EntryEditor<EducationEntry>,
    experience: EntryEditor<ExperienceEntry>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// Starts on the personal step with an empty draft.
    pub fn new() -> Self {
        Self::from_draft(ResumeDocument::default())
    }

    /// Resumes editing an existing document.
    pub fn from_draft(draft: ResumeDocument) -> Self {
        let personal_form = draft.personal_info.clone();
        Self {
            draft,
            cursor: Step::Personal,
            personal_form,
            education: EntryEditor::new(),
            experience: EntryEditor::new(),
        }
    }

    pub fn current_step(&self) -> Step {
        self.cursor
    }

    pub fn draft(&self) -> &ResumeDocument {
        &self.draft
    }

    pub fn is_first(&self) -> bool {
        self.cursor == Step::ALL[0]
    }

    pub fn is_last(&self) -> bool {
        self.cursor == Step::ALL[Step::ALL.len() - 1]
    }

    /// Advances one step; stays put on the last step.
    pub fn next(&mut self) -> Step {
        if !self.is_last() {
            self.enter(Step::ALL[self.cursor.index() + 1]);
        }
        self.cursor
    }

    /// Retreats one step; stays put on the first step.
    pub fn previous(&mut self) -> Step {
        if !self.is_first() {
            self.enter(Step::ALL[self.cursor.index() - 1]);
        }
        self.cursor
    }

    /// Jumps straight to `step`.
    pub fn select(&mut self, step: Step) {
        if step != self.cursor {
            self.enter(step);
        }
    }

    fn enter(&mut self, step: Step) {
        debug!("Wizard: {:?} -> {:?}", self.cursor, step);
        match step {
            Step::Personal => self.personal_form = self.draft.personal_info.clone(),
            Step::Education => self.education.reset(),
            Step::Experience => self.experience.reset(),
            Step::Skills | Step::Preview => {}
        }
        self.cursor = step;
    }

    fn require(&self, step: Step) -> Result<(), WizardError> {
        if self.cursor == step {
            Ok(())
        } else {
            Err(WizardError::StepInactive {
                requested: step,
                current: self.cursor,
            })
        }
    }

    pub fn personal(&mut self) -> Result<PersonalStep<'_>, WizardError> {
        self.require(Step::Personal)?;
        Ok(PersonalStep::new(
            &mut self.personal_form,
            &mut self.draft.personal_info,
        ))
    }

    pub fn education(&mut self) -> Result<EntryStep<'_, EducationEntry>, WizardError> {
        self.require(Step::Education)?;
        Ok(EntryStep::new(&mut self.education, &mut self.draft.education))
    }

    pub fn experience(&mut self) -> Result<EntryStep<'_, ExperienceEntry>, WizardError> {
        self.require(Step::Experience)?;
        Ok(EntryStep::new(
            &mut self.experience,
            &mut self.draft.experience,
        ))
    }

    pub fn skills(&mut self) -> Result<SkillsStep<'_>, WizardError> {
        self.require(Step::Skills)?;
        Ok(SkillsStep::new(&mut self.draft.skills))
    }

    /// Markdown rendering of the current draft.
    pub fn preview(&self) -> Result<String, WizardError> {
        self.require(Step::Preview)?;
        Ok(render_resume_md(&self.draft))
    }

    /// Sends the whole draft to the API. Only allowed from the preview step.
    /// The draft is left untouched whatever the outcome.
    pub async fn submit(&self, api: &ResumeApiClient) -> Result<Resume, WizardError> {
        self.require(Step::Preview)?;
        let resume = api.create_resume(&self.draft).await?;
        debug!("Wizard: draft stored as resume {}", resume.id);
        Ok(resume)
    }
}
