use crate::entities::{Customer, Device};

/// Fields a list page matches its search box against.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match on any search field.
    fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.phone.as_str()]
    }
}

impl Searchable for Device {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.brand.as_str(),
            self.model.as_str(),
            self.serial_number.as_str(),
        ]
    }
}

/// Records matching `query`, in source order.
pub fn filter_records<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    records.iter().filter(|r| r.matches(query)).collect()
}

/// A list page: a read-only collection plus the current search term.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListPage<T> {
    records: Vec<T>,
    query: String,
}

impl<T: Searchable> ListPage<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records,
            query: String::new(),
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn visible(&self) -> Vec<&T> {
        filter_records(&self.records, &self.query)
    }
}
