use crate::cli_utils::CliResult;
use dialoguer::Select;

/// Interactive menu builder
pub struct Menu {
    title: String,
    items: Vec<String>,
}

impl Menu {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            items: Vec::new(),
        }
    }

    pub fn items(mut self, items: &[&str]) -> Self {
        self.items.extend(items.iter().map(|s| s.to_string()));
        self
    }

    /// Show the menu and get the selected index
    pub fn interact(&self) -> CliResult<usize> {
        Ok(Select::new()
            .with_prompt(&self.title)
            .items(&self.items)
            .default(0)
            .interact()?)
    }
}

/// Top level areas of the tracker CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Users,
    Categories,
    Expenses,
    Reports,
    Quit,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Users,
        Section::Categories,
        Section::Expenses,
        Section::Reports,
        Section::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Users => "Users",
            Section::Categories => "Categories",
            Section::Expenses => "Expenses",
            Section::Reports => "Reports",
            Section::Quit => "Quit",
        }
    }

    pub fn select() -> CliResult<Self> {
        let labels: Vec<&str> = Self::ALL.iter().map(|s| s.label()).collect();
        let idx = Menu::new("Select area").items(&labels).interact()?;
        Ok(Self::ALL.get(idx).copied().unwrap_or(Section::Quit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_end_with_quit() {
        assert_eq!(Section::ALL.last(), Some(&Section::Quit));
        assert_eq!(Section::Reports.label(), "Reports");
    }
}
