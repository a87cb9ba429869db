use std::fmt;

/// Pages of the planner, visited in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    FixedCommitments,
    TaskDetails,
    Preferences,
    Output,
}

impl Page {
    /// Path segment identifying the page
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::FixedCommitments => "fixed_commitments",
            Page::TaskDetails => "task_details",
            Page::Preferences => "preferences",
            Page::Output => "output",
        }
    }

    /// Document the page is served as
    pub fn path(&self) -> String {
        format!("{}.html", self.slug())
    }

    /// Work out which page a path belongs to by substring match.
    /// Anything unrecognised is the home page.
    pub fn from_path(path: &str) -> Self {
        [
            Page::FixedCommitments,
            Page::TaskDetails,
            Page::Preferences,
            Page::Output,
        ]
        .into_iter()
        .find(|page| path.contains(page.slug()))
        .unwrap_or(Page::Home)
    }

    /// Page reached by "next". Preferences leads to the output page only
    /// through saving, so it has no plain next page.
    pub fn next(&self) -> Option<Page> {
        match self {
            Page::Home => Some(Page::FixedCommitments),
            Page::FixedCommitments => Some(Page::TaskDetails),
            Page::TaskDetails => Some(Page::Preferences),
            Page::Preferences | Page::Output => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
