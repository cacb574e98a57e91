use std::collections::BTreeSet;

use crate::content::Project;

/// Facet selections. Empty facets don't constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilters {
    pub categories: BTreeSet<String>,
    pub technologies: BTreeSet<String>,
    pub years: BTreeSet<u16>,
}

impl ProjectFilters {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.technologies.is_empty() && self.years.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.categories.len() + self.technologies.len() + self.years.len()
    }

    pub fn toggle_category(&mut self, category: &str) {
        toggle(&mut self.categories, category.to_string());
    }

    pub fn toggle_technology(&mut self, technology: &str) {
        toggle(&mut self.technologies, technology.to_string());
    }

    pub fn toggle_year(&mut self, year: u16) {
        toggle(&mut self.years, year);
    }

    pub fn clear(&mut self) {
        self.categories.clear();
        self.technologies.clear();
        self.years.clear();
    }

    /// OR within a facet, AND across facets.
    pub fn matches(&self, project: &Project) -> bool {
        let category_ok =
            self.categories.is_empty() || self.categories.contains(project.category);
        let technology_ok = self.technologies.is_empty()
            || self
                .technologies
                .iter()
                .any(|t| project.technologies.contains(t.as_str()));
        let year_ok = self.years.is_empty() || self.years.contains(&project.year);
        category_ok && technology_ok && year_ok
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

/// Case-insensitive substring match over name, description and technologies.
/// A blank search term matches everything.
pub fn matches_search(project: &Project, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [project.name, project.description, project.technologies]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Projects passing both the search and the facet filters, newest first.
/// Projects from the same year keep their declaration order.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    search: &str,
    filters: &ProjectFilters,
) -> Vec<&'a Project> {
    let mut out = projects
        .iter()
        .filter(|p| matches_search(p, search) && filters.matches(p))
        .collect::<Vec<_>>();
    out.sort_by(|a, b| b.year.cmp(&a.year));
    out
}

pub fn categories(projects: &[Project]) -> Vec<&'static str> {
    projects
        .iter()
        .map(|p| p.category)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn technologies(projects: &[Project]) -> Vec<&'static str> {
    projects
        .iter()
        .flat_map(|p| p.technology_list())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct years, newest first.
pub fn years(projects: &[Project]) -> Vec<u16> {
    projects
        .iter()
        .map(|p| p.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    fn names(projects: &[&Project]) -> Vec<&'static str> {
        projects.iter().map(|p| p.name).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let result = filter_projects(PROJECTS, "python", &ProjectFilters::default());
        let expected = PROJECTS
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains("python")
                    || p.description.to_lowercase().contains("python")
                    || p.technologies.to_lowercase().contains("python")
            })
            .map(|p| p.name)
            .collect::<BTreeSet<_>>();
        assert!(!expected.is_empty());
        assert_eq!(names(&result).into_iter().collect::<BTreeSet<_>>(), expected);

        let upper = filter_projects(PROJECTS, "PYTHON", &ProjectFilters::default());
        assert_eq!(names(&upper), names(&result));
    }

    #[test]
    fn test_category_filter_intersects_search() {
        let mut filters = ProjectFilters::default();
        filters.toggle_category("Machine Learning");
        let result = filter_projects(PROJECTS, "python", &filters);
        assert_eq!(names(&result), vec!["Predict House"]);
        assert!(result
            .iter()
            .all(|p| p.category == "Machine Learning" && matches_search(p, "python")));
    }

    #[test]
    fn test_empty_result_is_valid() {
        let mut filters = ProjectFilters::default();
        filters.toggle_category("Game");
        let result = filter_projects(PROJECTS, "python", &filters);
        assert!(result.is_empty());

        let result = filter_projects(PROJECTS, "no such project anywhere", &ProjectFilters::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_or_within_facet_and_across_facets() {
        let mut filters = ProjectFilters::default();
        filters.toggle_technology("Java");
        filters.toggle_technology("PHP");
        let result = filter_projects(PROJECTS, "", &filters);
        // "Java" is a substring of "JavaScript" too
        assert_eq!(
            names(&result),
            vec![
                "Ferrarinews Blogging App",
                "Buzzbox Instant Messaging",
                "The Safe Place"
            ]
        );

        filters.toggle_year(2022);
        let result = filter_projects(PROJECTS, "", &filters);
        assert_eq!(
            names(&result),
            vec!["Buzzbox Instant Messaging", "The Safe Place"]
        );
    }

    #[test]
    fn test_sorted_newest_first_with_stable_ties() {
        let result = filter_projects(PROJECTS, "", &ProjectFilters::default());
        assert_eq!(result.len(), PROJECTS.len());
        assert!(result.windows(2).all(|w| w[0].year >= w[1].year));
        assert_eq!(
            names(&result[..2]),
            vec!["Smart File Search", "KPI Presentation Generator"]
        );
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut filters = ProjectFilters::default();
        filters.toggle_category("Web App");
        filters.toggle_year(2023);
        let first = filter_projects(PROJECTS, "app", &filters);
        let second = filter_projects(PROJECTS, "app", &filters);
        assert_eq!(first, second);
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut filters = ProjectFilters::default();
        assert!(filters.is_empty());
        filters.toggle_category("Game");
        filters.toggle_year(2021);
        assert_eq!(filters.active_count(), 2);
        filters.toggle_category("Game");
        assert_eq!(filters.active_count(), 1);
        filters.clear();
        assert!(filters.is_empty());
    }

    #[test]
    fn test_facet_options() {
        let cats = categories(PROJECTS);
        assert_eq!(
            cats,
            vec!["Algorithms", "Desktop App", "Game", "Machine Learning", "Web App"]
        );
        let techs = technologies(PROJECTS);
        assert!(techs.contains(&"Python"));
        assert_eq!(techs.iter().filter(|t| **t == "MySQL").count(), 1);
        assert_eq!(years(PROJECTS), vec![2024, 2023, 2022, 2021]);
    }
}
