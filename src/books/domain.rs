use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn status(&self) -> BookStatus;

    fn is_available(&self) -> bool {
        self.status() == BookStatus::Available
    }

    // case-insensitive substring match against the title
    fn title_matches(&self, text: &str) -> bool {
        self.title().to_lowercase().contains(&text.to_lowercase())
    }
}
