mod lenient;
mod page;
mod post;

pub use page::Page;
pub use post::Post;

// what a list view needs to know about a record to draw a card for it
pub trait ContentRecord {
    fn id(&self) -> i64;
    fn title(&self) -> &str;
    fn content(&self) -> &str;
    fn created_at(&self) -> &str;
}
