use crate::api::{ApiClient, ApiError, NewsEvent};
use crate::{config, utils::time::display_stored_date};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// A news item ready for display: long date, absolute image URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date_label: String,
    pub image_url: Option<String>,
}

pub fn news_card(asset_base: &str, event: &NewsEvent) -> NewsCard {
    NewsCard {
        id: event.id.clone(),
        title: event.title.clone(),
        description: event.description.clone(),
        date_label: display_stored_date(&event.date),
        image_url: (!event.image_path.trim().is_empty())
            .then(|| config::asset_url(asset_base, &event.image_path)),
    }
}

#[derive(Clone)]
pub struct NewsRepository {
    client: Rc<ApiClient>,
}

impl NewsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load_cards(&self) -> Result<Vec<NewsCard>, ApiError> {
        let events = self.client.list_news().await?;
        let base = config::await_asset_base_url().await;
        Ok(events.iter().map(|event| news_card(&base, event)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(image_path: &str) -> NewsEvent {
        NewsEvent {
            id: "n1".into(),
            title: "Dry dock complete".into(),
            description: "Hull blasting finished ahead of schedule.".into(),
            date: "2025-03-04".into(),
            image_path: image_path.into(),
        }
    }

    #[test]
    fn card_resolves_upload_path_against_asset_host() {
        let card = news_card("http://127.0.0.1:8000/", &event("uploads/news/dock.jpg"));
        assert_eq!(
            card.image_url.as_deref(),
            Some("http://127.0.0.1:8000/uploads/news/dock.jpg")
        );
        assert_eq!(card.date_label, "Tue, Mar 4, 2025");
    }

    #[test]
    fn missing_image_has_no_url() {
        assert_eq!(news_card("http://x", &event("")).image_url, None);
    }
}
