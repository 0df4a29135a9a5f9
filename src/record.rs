use serde::Serialize;

/// A scientist from the demo dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scientist {
    pub name: &'static str,
    pub field: &'static str,
    pub born: i32,
    pub nobel: bool,
}

impl Scientist {
    pub const fn new(name: &'static str, field: &'static str, born: i32, nobel: bool) -> Self {
        Scientist {
            name,
            field,
            born,
            nobel,
        }
    }
}

/// The fixed dataset every execution mode runs over.
pub static SCIENTISTS: [Scientist; 7] = [
    Scientist::new("Ada Lovelace", "math", 1815, false),
    Scientist::new("Emmy Noether", "math", 1882, false),
    Scientist::new("Marie Curie", "physics", 1867, true),
    Scientist::new("Tu Youyou", "chemistry", 1930, true),
    Scientist::new("Ada Yonath", "chemistry", 1939, true),
    Scientist::new("Vera Rubin", "astronomy", 1928, false),
    Scientist::new("Sally Ride", "physics", 1951, false),
];

/// Result of processing one scientist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameAndAge {
    pub name: String,
    pub age: i32,
}
