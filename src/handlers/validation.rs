use actix_web::{get, web, HttpResponse, Responder};
use log::info;

use crate::models::{AppState, CountQuery, WordCheckResponse};
use crate::services::fuzzy::FuzzyMatcher;
use crate::services::rack::Rack;

fn check_word_logic(data: &AppState, word: &str, count: usize) -> HttpResponse {
    let word = word.to_lowercase();
    let is_valid = data.dictionary.contains(&word);
    let alternatives = FuzzyMatcher::new(&data.dictionary).alternatives(&word, Some(count));

    let body = WordCheckResponse {
        word: word.clone(),
        valid: is_valid,
        alternatives,
    };

    if !is_valid {
        info!("Invalid word queried: {}", word);
        return HttpResponse::NotFound().json(body);
    }

    info!("Valid word queried: {}", word);
    HttpResponse::Ok().json(body)
}

fn validate_word_logic(data: &AppState, tiles: &str, word: &str) -> HttpResponse {
    let rack = match Rack::parse(tiles) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
    };

    let word = word.to_lowercase();
    if data.dictionary.contains(&word) && rack.can_form(&word) {
        HttpResponse::Ok().finish()
    } else {
        HttpResponse::NotFound().finish()
    }
}

#[get("/word/{word}")]
pub async fn check_word(
    data: web::Data<AppState>,
    word: web::Path<String>,
    query: web::Query<CountQuery>,
) -> impl Responder {
    let count = query.count.unwrap_or(data.default_count);
    check_word_logic(&data, &word.into_inner(), count)
}

#[get("/validate/{tiles}/{word}")]
pub async fn validate_word(
    data: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (tiles, word) = path.into_inner();
    validate_word_logic(&data, &tiles, &word)
}
