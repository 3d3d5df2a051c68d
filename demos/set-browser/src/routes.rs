use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use crate::error::AppError;
use crate::page::WebPage;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CardsParams {
    pub set: String,
}

/// GET /
///
/// The selector form with an empty output region.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let page = state
        .browser
        .run(|b| {
            let mut page = WebPage::new(None);
            b.load(&mut page);
            Ok(page)
        })
        .await?;

    Ok(Html(page.into_html()?))
}

/// GET /cards?set=Metal+Raiders
///
/// The selector form with the chosen set preselected, followed by its grid.
pub async fn cards(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CardsParams>,
) -> Result<Html<String>, AppError> {
    let page = state
        .browser
        .run(move |b| {
            let mut page = WebPage::new(Some(params.set.clone()));
            if b.load(&mut page).is_some() {
                b.show_cards(&params.set, &mut page);
            }
            Ok(page)
        })
        .await?;

    Ok(Html(page.into_html()?))
}
