use crate::domain::list::{ListFilter, ListQuery};

/// Identifies one issued list request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Page and filter of a list plus the sequence of its requests.
#[derive(Debug, Default)]
pub struct ListState {
    query: ListQuery,
    sequence: u64,
}

impl ListState {
    pub fn new(query: ListQuery) -> Self {
        Self { query, sequence: 0 }
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.query.page
    }

    /// Changes the filter and starts over from the first page.
    pub fn set_filter(&mut self, filter: ListFilter) {
        self.query.filter = filter;
        self.query.page = 1;
    }

    /// Moves to `page`; pages below 1 are ignored and return `None`.
    ///
    /// There is no upper bound: a page past the end simply comes back empty.
    pub fn set_page(&mut self, page: usize) -> Option<usize> {
        if page < 1 {
            return None;
        }
        self.query.page = page;
        Some(page)
    }

    pub fn begin_request(&mut self) -> RequestTicket {
        self.sequence += 1;
        RequestTicket(self.sequence)
    }

    /// Whether `ticket` belongs to the most recently issued request.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.sequence
    }

    /// Adopts the page number the server answered with.
    ///
    /// Answers to superseded requests are ignored.
    pub fn confirm_page(&mut self, ticket: RequestTicket, page: usize) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.query.page = page.max(1);
        true
    }
}
