use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
    Extension,
};

use crate::{
    dto::personality_dto::{
        PersonalityQuestionResponse, QuestionsQuery, SubmitTestPayload, TestResultsResponse,
    },
    error::{Error, Result},
    middleware::auth::Claims,
    models::personality::Lang,
    services::scoring::calculate_personality_stats,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/personality/questions",
    params(
        ("skip" = Option<i64>, Query, description = "Accepted for compatibility, unused"),
        ("limit" = Option<i64>, Query, description = "Accepted for compatibility; the response always carries one question per theme"),
        ("lang" = Option<String>, Query, description = "Question language, en or es")
    ),
    responses(
        (status = 200, description = "Personality quiz questions", body = Json<Vec<PersonalityQuestionResponse>>)
    )
)]
#[axum::debug_handler]
pub async fn get_questions(
    State(state): State<AppState>,
    Query(query): Query<QuestionsQuery>,
) -> Result<impl IntoResponse> {
    let lang = Lang::parse(&query.lang);

    let questions = state.question_service.questions(lang).await;
    let response: Vec<PersonalityQuestionResponse> = questions
        .into_iter()
        .map(PersonalityQuestionResponse::from_generated)
        .collect();

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/personality/results",
    request_body = SubmitTestPayload,
    responses(
        (status = 200, description = "Computed personality statistics", body = Json<TestResultsResponse>),
        (status = 400, description = "Submitted user id does not match the token"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn submit_results(
    State(_state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<SubmitTestPayload>,
) -> Result<impl IntoResponse> {
    let user_id = claims.user_id()?;
    if payload.user_id != user_id {
        return Err(Error::BadRequest(
            "The user id in the results does not match the authenticated user".to_string(),
        ));
    }

    let stats = calculate_personality_stats(&payload.answers);
    Ok(Json(TestResultsResponse { stats }))
}
