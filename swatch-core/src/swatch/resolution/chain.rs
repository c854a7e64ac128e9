//! Active resolution chain
//!
//! A borrowed linked list of the paths currently being resolved, innermost first. Each recursive
//! step builds a new link on its own stack frame; nothing is shared or mutated.

#[derive(Debug, Clone, Copy, Default)]
pub struct Chain<'a> {
    link: Option<(&'a str, &'a Chain<'a>)>,
}

impl<'a> Chain<'a> {
    pub fn empty() -> Self {
        Chain { link: None }
    }

    /// This chain extended with `key`
    pub fn with<'b>(&'b self, key: &'b str) -> Chain<'b>
    where
        'a: 'b,
    {
        Chain {
            link: Some((key, self)),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        let mut cursor = self;
        while let Some((head, rest)) = cursor.link {
            if head == key {
                return true;
            }
            cursor = rest;
        }
        false
    }
}
