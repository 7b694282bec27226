use crate::views::fetch::ContentFetcher;
use crate::views::list::{PageList, PostList};
use crate::views::render::escape_html;

pub struct Home {
    title: String,
    posts: PostList,
    pages: PageList,
}

impl Home {
    pub fn new(title: String) -> Self {
        Self {
            title,
            posts: PostList::new(),
            pages: PageList::new(),
        }
    }

    pub fn posts(&self) -> &PostList {
        &self.posts
    }

    pub fn pages(&self) -> &PageList {
        &self.pages
    }

    // the two lists don't know about each other, let them fetch side by side
    pub async fn mount(&mut self, fetcher: &dyn ContentFetcher) {
        let Self { posts, pages, .. } = self;
        tokio::join!(posts.mount(fetcher), pages.mount(fetcher));
    }

    pub fn render(&self) -> String {
        format!(
            r#"<main class="p-6"><h1 class="text-3xl font-bold">{}</h1>{}{}</main>"#,
            escape_html(&self.title),
            self.posts.render(),
            self.pages.render()
        )
    }

    pub fn render_document(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\"><title>{}</title></head><body>{}</body></html>",
            escape_html(&self.title),
            self.render()
        )
    }
}
