//! Guided numbered menu mirroring the classic Nestora workflow.

use dialoguer::{theme::ColorfulTheme, Select};

use crate::cli::core::CommandError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddProperty,
    ListProperties,
    AddUnit,
    ListUnits,
    CreateLease,
    ListLeases,
    RecordPayment,
    RentRoll,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 9] = [
        MenuAction::AddProperty,
        MenuAction::ListProperties,
        MenuAction::AddUnit,
        MenuAction::ListUnits,
        MenuAction::CreateLease,
        MenuAction::ListLeases,
        MenuAction::RecordPayment,
        MenuAction::RentRoll,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::AddProperty => "Add Property",
            MenuAction::ListProperties => "List Properties",
            MenuAction::AddUnit => "Add Unit to Property",
            MenuAction::ListUnits => "List Units for a Property",
            MenuAction::CreateLease => "Create Lease for Unit",
            MenuAction::ListLeases => "List Leases for Unit",
            MenuAction::RecordPayment => "Record Rent Payment",
            MenuAction::RentRoll => "Generate Rent Roll Report",
            MenuAction::Exit => "Exit",
        }
    }

    /// Equivalent shell command, for users moving from the menu to typed commands.
    pub fn command(self) -> &'static str {
        match self {
            MenuAction::AddProperty => "property add",
            MenuAction::ListProperties => "property list",
            MenuAction::AddUnit => "unit add",
            MenuAction::ListUnits => "unit list",
            MenuAction::CreateLease => "lease create",
            MenuAction::ListLeases => "lease list",
            MenuAction::RecordPayment => "payment record",
            MenuAction::RentRoll => "rent-roll",
            MenuAction::Exit => "exit",
        }
    }

    /// Maps the classic 1-9 menu number to an action.
    pub fn from_choice(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

/// Numbered main menu rendered inside the shell loop.
pub struct MainMenu<'a> {
    theme: &'a ColorfulTheme,
}

impl<'a> MainMenu<'a> {
    pub fn new(theme: &'a ColorfulTheme) -> Self {
        Self { theme }
    }

    pub fn items() -> Vec<String> {
        MenuAction::ALL
            .iter()
            .enumerate()
            .map(|(index, action)| format!("{}. {}", index + 1, action.label()))
            .collect()
    }

    /// Shows the menu; `None` when the user escapes back to the prompt.
    pub fn show(&self) -> Result<Option<MenuAction>, CommandError> {
        let choice = Select::with_theme(self.theme)
            .with_prompt("Welcome to Nestora")
            .items(&Self::items())
            .default(0)
            .interact_opt()?;
        Ok(choice.and_then(|index| MenuAction::ALL.get(index).copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_follow_classic_numbering() {
        assert_eq!(MenuAction::from_choice(1), Some(MenuAction::AddProperty));
        assert_eq!(MenuAction::from_choice(8), Some(MenuAction::RentRoll));
        assert_eq!(MenuAction::from_choice(9), Some(MenuAction::Exit));
        assert_eq!(MenuAction::from_choice(0), None);
        assert_eq!(MenuAction::from_choice(10), None);
    }

    #[test]
    fn items_are_numbered() {
        let items = MainMenu::items();
        assert_eq!(items.len(), 9);
        assert_eq!(items[6], "7. Record Rent Payment");
    }
}
