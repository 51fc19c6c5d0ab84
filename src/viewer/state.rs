use crate::model::Record;

/// Page-lifetime view state: the full record set, captured once after
/// parse and never mutated, plus the currently selected county.
pub struct ViewState {
    all_records: Vec<Record>,
    current_filter: Option<String>,
}

impl ViewState {
    pub fn new(all_records: Vec<Record>) -> Self {
        Self {
            all_records,
            current_filter: None,
        }
    }

    /// Distinct non-empty counties, ascending. Derived from the full
    /// set, never from a filtered subset.
    pub fn county_options(&self) -> Vec<String> {
        let mut counties: Vec<String> = self
            .all_records
            .iter()
            .map(|r| r.county.clone())
            .filter(|county| !county.is_empty())
            .collect();
        counties.sort();
        counties.dedup();
        counties
    }

    /// An empty selection clears the filter.
    pub fn set_filter(&mut self, county: Option<String>) {
        self.current_filter = county.filter(|c| !c.is_empty());
    }

    pub fn current_filter(&self) -> Option<&str> {
        self.current_filter.as_deref()
    }

    /// The records the renderer should show: the full set when
    /// unfiltered, otherwise exact county matches, original order.
    pub fn visible(&self) -> Vec<&Record> {
        match &self.current_filter {
            None => self.all_records.iter().collect(),
            Some(county) => self
                .all_records
                .iter()
                .filter(|r| &r.county == county)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(county: &str, pdf_url: &str) -> Record {
        Record {
            county: county.to_string(),
            pdf_url: pdf_url.to_string(),
        }
    }

    #[test]
    fn county_options_are_distinct_sorted_and_non_empty() {
        let state = ViewState::new(vec![
            record("B", ""),
            record("A", "x"),
            record("A", "y"),
            record("", "z"),
        ]);
        assert_eq!(state.county_options(), vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn filter_selects_exact_matches_only() {
        let mut state = ViewState::new(vec![record("A", "1"), record("B", "2")]);
        state.set_filter(Some("A".to_string()));
        let visible = state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].county, "A");
    }

    #[test]
    fn reverting_the_filter_restores_full_set_in_original_order() {
        let original = vec![record("B", "2"), record("A", "1"), record("C", "3")];
        let mut state = ViewState::new(original.clone());

        state.set_filter(Some("A".to_string()));
        assert_eq!(state.visible().len(), 1);

        state.set_filter(None);
        let visible: Vec<Record> = state.visible().into_iter().cloned().collect();
        assert_eq!(visible, original);
    }

    #[test]
    fn empty_selection_means_no_filter() {
        let mut state = ViewState::new(vec![record("A", "1")]);
        state.set_filter(Some(String::new()));
        assert!(state.current_filter().is_none());
        assert_eq!(state.visible().len(), 1);
    }

    #[test]
    fn filter_on_unknown_county_yields_empty_view() {
        let mut state = ViewState::new(vec![record("A", "1")]);
        state.set_filter(Some("Nantucket".to_string()));
        assert!(state.visible().is_empty());
    }
}
