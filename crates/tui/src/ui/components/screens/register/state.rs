use trackchain_types::registration::{OrganizationRegistration, RegistrationError, RegistrationField};

/// Result of the last submit, shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Accepted(String),
    Rejected(RegistrationError),
}

/// Organization registration form with a field cursor.
#[derive(Debug, Clone, Default)]
pub struct RegisterState {
    pub form: OrganizationRegistration,
    cursor: usize,
    pub status: Option<SubmitStatus>,
}

impl RegisterState {
    pub fn current_field(&self) -> RegistrationField {
        RegistrationField::ALL[self.cursor]
    }

    pub fn move_cursor(&mut self, forward: bool) {
        let len = RegistrationField::ALL.len();
        self.cursor = if forward { (self.cursor + 1) % len } else { (self.cursor + len - 1) % len };
    }

    /// True while the cursor sits on a free-text field.
    pub fn is_editing_text(&self) -> bool {
        self.current_field().is_text()
    }

    pub fn insert_char(&mut self, ch: char) {
        if let Some(value) = self.form.text_mut(self.current_field()) {
            value.push(ch);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(value) = self.form.text_mut(self.current_field()) {
            value.pop();
        }
    }

    /// Cycles selectors and flips the checkbox; text fields are untouched.
    pub fn cycle_choice(&mut self, forward: bool) {
        match self.current_field() {
            RegistrationField::OrganizationType => {
                self.form.organization_type = if forward {
                    self.form.organization_type.next()
                } else {
                    self.form.organization_type.previous()
                };
            }
            RegistrationField::Country => self.form.cycle_country(forward),
            RegistrationField::AnotherWallet => self.form.another_wallet = !self.form.another_wallet,
            _ => {}
        }
    }

    /// Validates the form and stores the outcome. Nothing is persisted.
    pub fn submit(&mut self) -> &SubmitStatus {
        let status = match self.form.validate() {
            Ok(()) => SubmitStatus::Accepted(format!(
                "{} registered as {}",
                self.form.legal_name.trim(),
                self.form.organization_type
            )),
            Err(error) => SubmitStatus::Rejected(error),
        };
        self.status.insert(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackchain_types::registration::OrganizationType;

    fn type_text(state: &mut RegisterState, text: &str) {
        text.chars().for_each(|ch| state.insert_char(ch));
    }

    fn move_to(state: &mut RegisterState, field: RegistrationField) {
        while state.current_field() != field {
            state.move_cursor(true);
        }
    }

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut state = RegisterState::default();
        assert_eq!(state.current_field(), RegistrationField::OrganizationType);
        state.move_cursor(false);
        assert_eq!(state.current_field(), RegistrationField::DateOfRegistration);
        state.move_cursor(true);
        assert_eq!(state.current_field(), RegistrationField::OrganizationType);
    }

    #[test]
    fn selectors_cycle_and_ignore_typing() {
        let mut state = RegisterState::default();
        state.insert_char('x');
        state.cycle_choice(true);
        assert_eq!(state.form.organization_type, OrganizationType::Distributor);
        assert!(!state.is_editing_text());
        move_to(&mut state, RegistrationField::AnotherWallet);
        state.cycle_choice(true);
        assert!(state.form.another_wallet);
    }

    #[test]
    fn submit_reports_the_first_problem_then_accepts() {
        let mut state = RegisterState::default();
        assert_eq!(
            state.submit(),
            &SubmitStatus::Rejected(RegistrationError::MissingField(RegistrationField::LegalName))
        );

        move_to(&mut state, RegistrationField::LegalName);
        type_text(&mut state, "Nordic Cold Chain");
        move_to(&mut state, RegistrationField::Email);
        type_text(&mut state, "ops@nordic.example");
        move_to(&mut state, RegistrationField::ContactPerson);
        type_text(&mut state, "A. Jensen");
        state.delete_char();
        type_text(&mut state, "n");
        assert_eq!(state.form.contact_person, "A. Jensen");

        assert_eq!(
            state.submit(),
            &SubmitStatus::Accepted("Nordic Cold Chain registered as Manufacturer".to_string())
        );
    }
}
