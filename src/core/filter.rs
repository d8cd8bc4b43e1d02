use thiserror::Error;

pub const ALL_FILTER: &str = "all";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown project category: {0}")]
    UnknownCategory(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(String),
}

impl ProjectFilter {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == ALL_FILTER {
            ProjectFilter::All
        } else {
            ProjectFilter::Category(raw.to_owned())
        }
    }

    /// Whether a card with `category` is shown under this filter.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(c) => category.map(str::trim) == Some(c.as_str()),
        }
    }
}

/// Active filter plus the categories declared by the filter controls.
#[derive(Clone, Debug, Default)]
pub struct FilterState {
    active: ProjectFilter,
    categories: Vec<String>,
}

impl FilterState {
    pub fn new<S: Into<String>>(categories: impl IntoIterator<Item = S>) -> Self {
        let mut declared: Vec<String> = Vec::new();
        for c in categories {
            let c: String = c.into();
            let c = c.trim();
            if c != ALL_FILTER && !c.is_empty() && !declared.iter().any(|d| d == c) {
                declared.push(c.to_owned());
            }
        }
        Self {
            active: ProjectFilter::All,
            categories: declared,
        }
    }

    pub fn active(&self) -> &ProjectFilter {
        &self.active
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Switch to the filter named by a control's `data-filter` value. An
    /// undeclared category leaves the current filter in place.
    pub fn select(&mut self, raw: &str) -> Result<&ProjectFilter, FilterError> {
        let next = ProjectFilter::parse(raw);
        if let ProjectFilter::Category(c) = &next {
            if !self.categories.iter().any(|d| d == c) {
                return Err(FilterError::UnknownCategory(c.clone()));
            }
        }
        self.active = next;
        Ok(&self.active)
    }

    /// Visibility of each card, in order.
    pub fn visibility<'a>(&self, cards: impl IntoIterator<Item = Option<&'a str>>) -> Vec<bool> {
        cards.into_iter().map(|c| self.active.matches(c)).collect()
    }
}
