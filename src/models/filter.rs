use chrono::NaiveDate;

/// Selection applied to history listings and to "Pay All".
#[derive(Debug, Clone, Copy)]
pub struct EntryFilter {
    pub show_paid: bool,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl Default for EntryFilter {
    fn default() -> Self {
        Self {
            show_paid: true,
            from: None,
            to: None,
        }
    }
}

impl EntryFilter {
    pub fn unpaid() -> Self {
        Self {
            show_paid: false,
            ..Self::default()
        }
    }
}
