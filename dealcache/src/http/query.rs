pub struct Page {
    pub number: usize,
    pub size: usize,
}

impl Page {
    pub fn next(&self) -> Page {
        Page {
            number: self.number + 1,
            size: self.size,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    pub fn add(mut self, key: &'static str, value: &str) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    pub fn paginate(mut self, page: &Page) -> Self {
        self.pairs.push(("pageSize", page.size.to_string()));
        self.pairs.push(("pageNumber", page.number.to_string()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}
