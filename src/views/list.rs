use crate::domain::{ContentRecord, Page, Post};
use crate::views::fetch::ContentFetcher;
use crate::views::render::{escape_html, push_card};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<R> {
    /// Initial state, and the state a failed fetch leaves the view in.
    Loading,
    Loaded(Vec<R>),
}

/// A heading followed by one card per record fetched from `endpoint`.
pub struct ListView<R> {
    heading: &'static str,
    endpoint: &'static str,
    state: ViewState<R>,
    mounted: bool,
}

pub type PostList = ListView<Post>;
pub type PageList = ListView<Page>;

impl ListView<Post> {
    pub fn new() -> Self {
        Self::with_endpoint("Latest Posts", "/api/posts")
    }
}

impl Default for ListView<Post> {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView<Page> {
    pub fn new() -> Self {
        Self::with_endpoint("Website Pages", "/api/pages")
    }
}

impl Default for ListView<Page> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> ListView<R>
where
    R: ContentRecord + DeserializeOwned + Send,
{
    pub fn with_endpoint(heading: &'static str, endpoint: &'static str) -> Self {
        Self {
            heading,
            endpoint,
            state: ViewState::Loading,
            mounted: false,
        }
    }

    pub fn heading(&self) -> &'static str {
        self.heading
    }

    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    pub fn state(&self) -> &ViewState<R> {
        &self.state
    }

    pub fn records(&self) -> &[R] {
        match &self.state {
            ViewState::Loading => &[],
            ViewState::Loaded(records) => records,
        }
    }

    /// Issues the view's one fetch. Later calls do nothing.
    ///
    /// On success the whole record list is replaced. On failure the view
    /// stays `Loading`, there is no error state and nothing is retried.
    pub async fn mount(&mut self, fetcher: &dyn ContentFetcher) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        match self.fetch_records(fetcher).await {
            Ok(records) => {
                tracing::debug!(
                    endpoint = self.endpoint,
                    records = records.len(),
                    "List view loaded"
                );
                self.state = ViewState::Loaded(records);
            }
            Err(e) => {
                tracing::warn!(endpoint = self.endpoint, error = %e, "List view fetch failed");
            }
        }
    }

    async fn fetch_records(&self, fetcher: &dyn ContentFetcher) -> Result<Vec<R>> {
        let body = fetcher.get_json(self.endpoint).await?;

        // the 500 envelope is an object, not an array, and lands here too
        serde_json::from_value::<Vec<R>>(body)
            .with_context(|| format!("Unexpected body from {}", self.endpoint))
    }

    pub fn render(&self) -> String {
        let mut html = String::from("<div>");
        html.push_str(&format!(
            r#"<h1 class="text-2xl font-bold">{}</h1>"#,
            escape_html(self.heading)
        ));

        for record in self.records() {
            push_card(&mut html, record);
        }

        html.push_str("</div>");
        html
    }
}
