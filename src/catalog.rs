use once_cell::sync::Lazy;
use serde::Deserialize;

/// Anzahl der Items des Fragebogens
pub const ITEM_COUNT: usize = 12;

pub static QUESTIONS: Lazy<Catalog> = Lazy::new(|| {
    serde_json::from_str(include_str!("../resources/items.json"))
        .expect("resources/items.json is embedded at compile time")
});

#[derive(Debug, Clone, Deserialize)]
pub struct ScalePoint {
    pub value: u8,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    pub id: u32,
    pub text: String,
    /// negativ gepolt
    pub reverse: bool,
}

/// Stammdaten des Ambiguitätstoleranz-Tests mit 12 Items
#[derive(Debug, Deserialize)]
pub struct Catalog {
    pub title: String,
    /// Instruktion, wird vor dem ersten Item angezeigt
    pub instruction: String,
    pub scale: Vec<ScalePoint>,
    pub items: Vec<Item>,
}

impl Catalog {
    /// Item über die Item-Nummer holen
    pub fn item(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn reverse_ids(&self) -> Vec<u32> {
        self.items
            .iter()
            .filter(|item| item.reverse)
            .map(|item| item.id)
            .collect()
    }
}
