// Paginated table rendering for the terminal.
use crate::model::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    County,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone)]
pub struct TableOptions {
    pub page_length: usize,
    pub sort_column: SortColumn,
    pub sort_order: SortOrder,
    pub search: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            page_length: 25,
            sort_column: SortColumn::County,
            sort_order: SortOrder::Ascending,
            search: String::new(),
        }
    }
}

/// One table instance over a snapshot of records. Callers must not
/// mutate an instance to show a different record set; they build a
/// fresh one and drop the old, so stale page or sort state never
/// carries over.
pub struct TableView {
    rows: Vec<Record>,
    total_records: usize,
    options: TableOptions,
    page: usize,
}

impl TableView {
    pub fn build(records: &[&Record], mut options: TableOptions) -> Self {
        options.page_length = options.page_length.max(1);
        let total_records = records.len();

        let needle = options.search.to_lowercase();
        let mut rows: Vec<Record> = records
            .iter()
            .filter(|r| {
                needle.is_empty()
                    || r.county.to_lowercase().contains(&needle)
                    || r.pdf_url.to_lowercase().contains(&needle)
            })
            .map(|r| (*r).clone())
            .collect();

        // Stable sorts keep the incoming order for equal keys.
        match (options.sort_column, options.sort_order) {
            (SortColumn::County, SortOrder::Ascending) => {
                rows.sort_by(|a, b| a.county.cmp(&b.county))
            }
            (SortColumn::County, SortOrder::Descending) => {
                rows.sort_by(|a, b| b.county.cmp(&a.county))
            }
            (SortColumn::Link, SortOrder::Ascending) => {
                rows.sort_by(|a, b| a.pdf_url.cmp(&b.pdf_url))
            }
            (SortColumn::Link, SortOrder::Descending) => {
                rows.sort_by(|a, b| b.pdf_url.cmp(&a.pdf_url))
            }
        }

        Self {
            rows,
            total_records,
            options,
            page: 0,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn page_count(&self) -> usize {
        if self.rows.is_empty() {
            1
        } else {
            self.rows.len().div_ceil(self.options.page_length)
        }
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Zero-based; out-of-range pages clamp to the last page.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    /// Renders the current page: search line, table, info line and
    /// pagination, mirroring a filter/table/info/pagination layout.
    pub fn render(&self) -> String {
        let start = self.page * self.options.page_length;
        let page_rows: Vec<&Record> = self
            .rows
            .iter()
            .skip(start)
            .take(self.options.page_length)
            .collect();

        let county_width = page_rows
            .iter()
            .map(|r| r.county.len())
            .max()
            .unwrap_or(0)
            .max("County".len());

        let mut out = String::new();
        out.push_str(&format!("Search: {}\n", self.options.search));
        out.push_str(&format!("{:<width$}  PDF\n", "County", width = county_width));
        out.push_str(&format!("{}  ---\n", "-".repeat(county_width)));

        for row in &page_rows {
            let link = if row.pdf_url.is_empty() {
                String::new()
            } else {
                format!("Open PDF <{}>", row.pdf_url)
            };
            let line = format!("{:<width$}  {}", row.county, link, width = county_width);
            out.push_str(line.trim_end());
            out.push('\n');
        }

        let (first, last) = if page_rows.is_empty() {
            (0, 0)
        } else {
            (start + 1, start + page_rows.len())
        };
        out.push_str(&format!(
            "Showing {} to {} of {} entries",
            first,
            last,
            self.rows.len()
        ));
        if self.rows.len() != self.total_records {
            out.push_str(&format!(
                " (filtered from {} total entries)",
                self.total_records
            ));
        }
        out.push('\n');
        out.push_str(&format!("Page {} of {}\n", self.page + 1, self.page_count()));
        out
    }
}
