use crate::models::resume::PersonalInfo;
use crate::validation::Validate;
use crate::wizard::WizardError;

/// The personal-info step: a local form committed wholesale on submit.
pub struct PersonalStep<'a> {
    form: &'a mut PersonalInfo,
    committed: &'a mut PersonalInfo,
}

impl<'a> PersonalStep<'a> {
    pub(crate) fn new(form: &'a mut PersonalInfo, committed: &'a mut PersonalInfo) -> Self {
        Self { form, committed }
    }

    pub fn form(&self) -> &PersonalInfo {
        &*self.form
    }

    pub fn form_mut(&mut self) -> &mut PersonalInfo {
        &mut *self.form
    }

    /// The value currently held by the draft.
    pub fn committed(&self) -> &PersonalInfo {
        &*self.committed
    }

    /// Validates the form and replaces the draft's personal info with it.
    pub fn submit(&mut self) -> Result<(), WizardError> {
        *self.committed = self.form.clone().validated()?;
        Ok(())
    }

    /// Puts an AI-rewritten summary into the form. Not committed until submit.
    pub fn apply_improved_summary(&mut self, summary: String) {
        self.form.summary = summary;
    }
}

/// The skills step. Edits go straight into the draft.
pub struct SkillsStep<'a> {
    skills: &'a mut Vec<String>,
}

impl<'a> SkillsStep<'a> {
    pub(crate) fn new(skills: &'a mut Vec<String>) -> Self {
        Self { skills }
    }

    pub fn skills(&self) -> &[String] {
        self.skills.as_slice()
    }

    /// Adds a trimmed skill. Returns `false` when it is blank or already listed.
    pub fn add(&mut self, raw: &str) -> bool {
        let skill = raw.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    pub fn remove(&mut self, skill: &str) {
        self.skills.retain(|s| s != skill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::fixtures::personal_info;

    #[test]
    fn test_submit_replaces_committed_value() {
        let mut form = personal_info();
        let mut committed = PersonalInfo::default();
        let mut step = PersonalStep::new(&mut form, &mut committed);

        step.submit().unwrap();
        assert_eq!(step.committed(), &personal_info());
    }

    #[test]
    fn test_invalid_submit_keeps_committed_value() {
        let mut form = PersonalInfo {
            email: "jane-at-x.com".to_string(),
            ..personal_info()
        };
        let mut committed = PersonalInfo::default();
        let mut step = PersonalStep::new(&mut form, &mut committed);

        let err = step.submit().unwrap_err();
        assert!(matches!(err, WizardError::Validation(ref e) if e.messages_for("email") == vec!["Invalid email address"]));
        assert_eq!(committed, PersonalInfo::default());
    }

    #[test]
    fn test_improved_summary_lands_in_form_only() {
        let mut form = personal_info();
        let mut committed = personal_info();
        let mut step = PersonalStep::new(&mut form, &mut committed);

        step.apply_improved_summary("A much stronger summary".to_string());
        assert_eq!(step.form().summary, "A much stronger summary");
        assert_eq!(step.committed().summary, personal_info().summary);
    }

    #[test]
    fn test_skills_trim_and_suppress_duplicates() {
        let mut skills = Vec::new();
        let mut step = SkillsStep::new(&mut skills);

        assert!(step.add("  Rust "));
        assert!(!step.add("Rust"));
        assert!(!step.add("   "));
        assert!(step.add("SQL"));
        assert_eq!(step.skills(), &["Rust".to_string(), "SQL".to_string()]);
    }

    #[test]
    fn test_skills_remove() {
        let mut skills = vec!["Rust".to_string(), "SQL".to_string()];
        let mut step = SkillsStep::new(&mut skills);
        step.remove("Rust");
        step.remove("Haskell");
        assert_eq!(skills, vec!["SQL".to_string()]);
    }
}
