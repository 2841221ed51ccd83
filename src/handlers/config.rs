use actix_web::{get, web, HttpResponse, Responder};
use log::info;

use crate::models::{AppState, ConfigResponse};
use crate::services::rack::{MAX_BLANKS, MAX_TILES};
use crate::services::scoring::{letter_value, ALPHABET};

#[get("/config")]
pub async fn get_config(data: web::Data<AppState>) -> impl Responder {
    let letter_values = ALPHABET.iter().map(|&c| (c, letter_value(c))).collect();
    let word_count = data.dictionary.len();

    info!("Served config for a dictionary of {} words", word_count);

    HttpResponse::Ok().json(ConfigResponse {
        letter_values,
        max_tiles: MAX_TILES,
        max_blanks: MAX_BLANKS,
        word_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use crate::services::dictionary::Dictionary;

    #[actix_web::test]
    async fn test_get_config() {
        let state = web::Data::new(AppState {
            dictionary: Dictionary::from_words(["bat", "dog"]),
            default_count: 5,
        });
        let app = test::init_service(App::new().app_data(state).service(get_config)).await;
        let req = test::TestRequest::get().uri("/config").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["word_count"], 2);
        assert_eq!(body["max_tiles"], 7);
        assert_eq!(body["letter_values"]["z"], 10);
        assert_eq!(body["letter_values"].as_object().map(|m| m.len()), Some(26));
    }
}
