use actix_web::{get, web, HttpResponse, Responder};
use log::{info, warn};

use crate::models::{AppState, CountQuery, SuggestResponse, WordsResponse};
use crate::services::rack::Rack;
use crate::services::suggestion::SuggestionRanker;
use crate::services::word_former::{rank_words, WordFormer};

fn parse_rack(tiles: &str) -> Result<Rack, HttpResponse> {
    Rack::parse(tiles).map_err(|e| {
        info!("Rejected tiles '{}': {}", tiles, e);
        HttpResponse::BadRequest().body(e.to_string())
    })
}

#[get("/words/{tiles}")]
pub async fn get_words(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<CountQuery>,
) -> impl Responder {
    let rack = match parse_rack(&path.into_inner()) {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    let count = query.count.unwrap_or(data.default_count);

    let state = data.clone();
    let tiles = rack.to_string();
    let result = web::block(move || WordFormer::new(&state.dictionary).top_words(&rack, count)).await;

    match result {
        Ok(words) => {
            info!("Rack '{}': returned {} words", tiles, words.len());
            HttpResponse::Ok().json(WordsResponse { tiles, words })
        }
        Err(e) => {
            warn!("Word search for '{}' failed: {}", tiles, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/suggest/{tiles}")]
pub async fn get_suggestions(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<CountQuery>,
) -> impl Responder {
    let rack = match parse_rack(&path.into_inner()) {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    let count = query.count.unwrap_or(data.default_count);

    let state = data.clone();
    let tiles = rack.to_string();
    let result = web::block(move || {
        let former = WordFormer::new(&state.dictionary);
        let makeable = former.form_words(&rack);
        let words = rank_words(&rack, makeable.iter().cloned(), count);
        let suggestions = SuggestionRanker::new(&state.dictionary).suggest_from(&rack, &makeable, count);
        (words, suggestions)
    })
    .await;

    match result {
        Ok((words, suggestions)) => {
            info!(
                "Rack '{}': returned {} words and {} suggestions",
                tiles,
                words.len(),
                suggestions.len()
            );
            HttpResponse::Ok().json(SuggestResponse { tiles, words, suggestions })
        }
        Err(e) => {
            warn!("Suggestion search for '{}' failed: {}", tiles, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use crate::models::ScoreRange;
    use crate::services::dictionary::Dictionary;

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState {
            dictionary: Dictionary::from_words(["bat", "banana", "shoe", "dog"]),
            default_count: 5,
        })
    }

    #[actix_web::test]
    async fn test_get_words() {
        let app = test::init_service(App::new().app_data(state()).service(get_words)).await;
        let req = test::TestRequest::get().uri("/words/sdhooeg").to_request();
        let body: WordsResponse = test::call_and_read_body_json(&app, req).await;

        let words: Vec<&str> = body.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["shoe", "dog"]);
        assert_eq!(body.words[0].score, 7);
    }

    #[actix_web::test]
    async fn test_get_words_with_count_and_blank_alias() {
        let app = test::init_service(App::new().app_data(state()).service(get_words)).await;
        let req = test::TestRequest::get().uri("/words/sd_ooeg?count=1").to_request();
        let body: WordsResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.tiles, "sd ooeg");
        assert_eq!(body.words.len(), 1);
        assert_eq!(body.words[0].word, "dog");
    }

    #[actix_web::test]
    async fn test_get_words_rejects_bad_tiles() {
        let app = test::init_service(App::new().app_data(state()).service(get_words)).await;
        for uri in ["/words/abcdefgh", "/words/abc6de"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[actix_web::test]
    async fn test_get_suggestions() {
        let app = test::init_service(App::new().app_data(state()).service(get_suggestions)).await;
        let req = test::TestRequest::get().uri("/suggest/sd_ooeg").to_request();
        let body: SuggestResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.words.len(), 2);
        assert_eq!(body.suggestions.len(), 1);
        assert_eq!(body.suggestions[0].word, "bat");
        assert_eq!(body.suggestions[0].score_range, ScoreRange { low: 2, high: 4 });
    }
}
